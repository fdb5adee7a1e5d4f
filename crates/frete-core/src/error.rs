//! # Error Types
//!
//! Construction-time validation failures for the Frete stack. Everything
//! that can be wrong with caller input is reported here, before any
//! request reaches the pricing service.
//!
//! Dimension floors are the one documented coercion: sub-floor heights,
//! widths, and lengths are clamped during aggregation and never surface
//! as errors.

use thiserror::Error;

/// Invalid caller input.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ValidationError {
    /// Postal code (CEP) is not `NNNNN-NNN` or `NNNNNNNN`.
    #[error("invalid postal code: {0:?} (expected NNNNN-NNN or NNNNNNNN)")]
    InvalidPostalCode(String),

    /// Service code is neither a known service name nor a 5-digit code.
    #[error("invalid service code: {0:?}")]
    InvalidServiceCode(String),

    /// A parcel must ship at least one unit.
    #[error("parcel quantity must be at least 1")]
    ZeroQuantity,

    /// Parcel weight is zero, negative, or not a finite number.
    #[error("parcel weight must be a positive finite number of kilograms, got {0}")]
    InvalidWeight(f64),

    /// A dimension is NaN or infinite.
    #[error("parcel {field} must be a finite number of centimetres, got {value}")]
    InvalidDimension {
        /// Which dimension (`height`, `width`, `length`).
        field: &'static str,
        /// The rejected value.
        value: f64,
    },

    /// A parcel record omitted a required measurement.
    #[error("parcel is missing required measurement: {0}")]
    MissingMeasurement(&'static str),

    /// Declared value for insurance must not be negative.
    #[error("declared value must not be negative, got {0}")]
    NegativeDeclaredValue(String),

    /// A monetary amount could not be parsed.
    #[error("invalid monetary amount: {0:?}")]
    InvalidAmount(String),

    /// A parcel argument could not be parsed.
    #[error("invalid parcel specification {spec:?}: {reason}")]
    InvalidParcelSpec {
        /// The raw specification string.
        spec: String,
        /// What was wrong with it.
        reason: String,
    },
}
