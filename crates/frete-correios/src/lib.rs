//! # frete-correios: Correios Price Calculator Client
//!
//! Prices individual cartons against the Correios `CalcPrecoPrazo`
//! calculator.
//!
//! ## Architecture
//!
//! - [`PriceOracle`]: the seam the quote orchestrator is generic over.
//! - [`CorreiosClient`]: live HTTP implementation with timeout and
//!   transport retry.
//! - [`MockPriceOracle`]: deterministic tariff for tests and offline runs.
//!
//! One request is one carton. Splitting a shipment into cartons is done
//! upstream by `frete_core::plan`.
//!
//! ## Error Mapping
//!
//! | Situation | Error |
//! |-----------|-------|
//! | connection failure, timeout, HTTP 5xx, carrier code 7 | [`PriceError::TemporarilyUnavailable`] |
//! | unparsable XML, missing fields, other HTTP status | [`PriceError::InvalidResponse`] |
//! | any other non-zero carrier code | [`PriceError::Rejected`] |

pub mod client;
pub mod config;
pub mod error;
pub mod mock;
pub mod oracle;
pub mod request;
pub mod response;
pub(crate) mod retry;

pub use client::CorreiosClient;
pub use config::{CorreiosConfig, CALCULATOR_PATH, DEFAULT_CALCULATOR_URL};
pub use error::{ConfigError, PriceError};
pub use mock::MockPriceOracle;
pub use oracle::PriceOracle;
pub use request::{build_request_url, Credentials, PriceRequest};
pub use response::{parse_price_response, parse_price_response_bytes, BoxPrice, GENERIC_REJECTION};
