//! Carrier packaging limits.
//!
//! Per-parcel dimension floors, the minimum billable weight, and the
//! per-carton weight and measure units that drive overflow splitting.

/// Minimum parcel height in centimetres.
pub const MIN_HEIGHT_CM: f64 = 2.0;
/// Minimum parcel width in centimetres.
pub const MIN_WIDTH_CM: f64 = 11.0;
/// Minimum parcel length in centimetres.
pub const MIN_LENGTH_CM: f64 = 16.0;

/// Minimum billable shipment weight in kilograms.
pub const MIN_TOTAL_WEIGHT_KG: f64 = 0.3;

/// Smallest carton edge the carrier prices, in centimetres.
pub const MIN_EDGE_CM: f64 = 16.0;

/// Per-carton weight unit in kilograms.
pub const MAX_CARTON_WEIGHT_KG: f64 = 30.0;
/// Per-carton cubic measure unit in centimetres.
pub const MAX_CARTON_MEASURE_CM: f64 = 66.0;

/// Clamp `value` up to `floor`. Zero, negative, and sub-floor values all
/// become the floor.
#[inline]
pub fn at_least(value: f64, floor: f64) -> f64 {
    if value < floor {
        floor
    } else {
        value
    }
}
