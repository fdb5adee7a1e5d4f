//! # frete-quote: Shipment Quote Orchestration
//!
//! Ties the pieces together: [`frete_core::plan`] splits a shipment into
//! cartons, and a [`frete_correios::PriceOracle`] prices each one.
//!
//! ```text
//! QuoteRequest ──plan──▶ cartons ──▶ PriceRequest per carton
//!                                      │
//!                 UrlsOnly: request_url ┴ Price: price (≤ max_in_flight) ──▶ sum
//! ```
//!
//! A quote is all-or-nothing: one failed carton fails the whole quote.

pub mod config;
pub mod quote;

pub use config::{QuoteConfig, DEFAULT_MAX_IN_FLIGHT};
pub use quote::{Quote, QuoteMode, QuoteOutcome, QuoteRequest, Quoter};
