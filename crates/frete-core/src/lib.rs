//! # frete-core: Foundational Types for the Frete Stack
//!
//! Shipment types and the carrier's cubic-weight rules. Given a list of
//! parcels, this crate decides how many cartons the carrier will price,
//! what each carton weighs, and how large it is. It performs no I/O;
//! pricing each carton is the job of `frete-correios`, and combining the
//! prices is the job of `frete-quote`.
//!
//! ## Pipeline
//!
//! ```text
//! parcels ──aggregate──▶ totals ──resolve_measure──▶ measure
//!                                   │
//!                   classify(weight, measure) ──▶ regime
//!                                   │
//!           decompose(regime, weight, measure) ──▶ cartons
//! ```
//!
//! [`plan`] runs the whole pipeline in one call.
//!
//! ## Crate Policy
//!
//! - No dependencies on other `frete-*` crates.
//! - No `unsafe` code.
//! - No `panic!()` or `.unwrap()` outside tests.
//! - Caller input is validated at construction ([`ValidationError`]).

pub mod decompose;
pub mod error;
pub mod identity;
pub mod limits;
pub mod measure;
pub mod money;
pub mod options;
pub mod parcel;
pub mod regime;

// Re-export primary types for ergonomic imports.
pub use decompose::{decompose, plan, Carton, ShipmentPlan};
pub use error::ValidationError;
pub use identity::{PostalCode, Service, ServiceCode};
pub use measure::resolve_measure;
pub use money::{display_brl, format_brl, parse_brl};
pub use options::{yes_no, QuoteOptions};
pub use parcel::{aggregate, Parcel, ShipmentTotals};
pub use regime::{classify, PricingRegime};
pub use rust_decimal::Decimal;
