//! # Price Oracle Interface
//!
//! The [`PriceOracle`] trait abstracts over whatever prices one carton.
//! Production uses [`crate::CorreiosClient`] against the live calculator;
//! tests use [`crate::MockPriceOracle`]. The quote orchestrator is generic
//! over the trait, so it composes pricing without knowing the transport.

use std::future::Future;

use url::Url;

use crate::error::PriceError;
use crate::request::PriceRequest;
use crate::response::BoxPrice;

/// Prices a single carton.
///
/// Implementations must be `Send + Sync` so one oracle can serve many
/// concurrent requests from a shared reference.
pub trait PriceOracle: Send + Sync {
    /// Price one carton.
    fn price(&self, request: &PriceRequest) -> impl Future<Output = Result<BoxPrice, PriceError>> + Send;

    /// The URL that [`PriceOracle::price`] would fetch for `request`.
    fn request_url(&self, request: &PriceRequest) -> Url;

    /// Human-readable name of this oracle (e.g. "CorreiosClient").
    fn oracle_name(&self) -> &str;
}
