//! # Parcels and the Shipment Aggregator
//!
//! A [`Parcel`] is one line of the shipment: a quantity of identical items
//! with a unit weight and dimensions. [`aggregate`] reduces a list of
//! parcels to the two quantities the carrier rules care about, total weight
//! and total volume.
//!
//! ## Dimension floors
//!
//! The carrier never prices anything smaller than 2 × 11 × 16 cm. Parcels
//! below those floors are accepted as given and clamped up when aggregated;
//! they are never rejected.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ValidationError;
use crate::limits::{at_least, MIN_HEIGHT_CM, MIN_LENGTH_CM, MIN_TOTAL_WEIGHT_KG, MIN_WIDTH_CM};

/// One shipment line, validated at construction.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "ParcelRecord")]
pub struct Parcel {
    quantity: u32,
    weight_kg: f64,
    height_cm: f64,
    width_cm: f64,
    length_cm: f64,
}

impl Parcel {
    /// Create a parcel.
    ///
    /// # Errors
    ///
    /// - [`ValidationError::ZeroQuantity`] if `quantity == 0`
    /// - [`ValidationError::InvalidWeight`] if the weight is not a positive
    ///   finite number
    /// - [`ValidationError::InvalidDimension`] if a dimension is NaN or
    ///   infinite
    pub fn new(
        quantity: u32,
        weight_kg: f64,
        height_cm: f64,
        width_cm: f64,
        length_cm: f64,
    ) -> Result<Self, ValidationError> {
        if quantity == 0 {
            return Err(ValidationError::ZeroQuantity);
        }
        if !weight_kg.is_finite() || weight_kg <= 0.0 {
            return Err(ValidationError::InvalidWeight(weight_kg));
        }
        for (field, value) in [
            ("height", height_cm),
            ("width", width_cm),
            ("length", length_cm),
        ] {
            if !value.is_finite() {
                return Err(ValidationError::InvalidDimension { field, value });
            }
        }
        Ok(Self {
            quantity,
            weight_kg,
            height_cm,
            width_cm,
            length_cm,
        })
    }

    pub fn quantity(&self) -> u32 {
        self.quantity
    }

    pub fn weight_kg(&self) -> f64 {
        self.weight_kg
    }

    /// Dimensions as supplied: `(height, width, length)`.
    pub fn dimensions_cm(&self) -> (f64, f64, f64) {
        (self.height_cm, self.width_cm, self.length_cm)
    }

    /// Dimensions after clamping to the carrier floors.
    pub fn floored_dimensions_cm(&self) -> (f64, f64, f64) {
        (
            at_least(self.height_cm, MIN_HEIGHT_CM),
            at_least(self.width_cm, MIN_WIDTH_CM),
            at_least(self.length_cm, MIN_LENGTH_CM),
        )
    }
}

/// Wire shape of a parcel. Every field is required; zero dimensions are
/// allowed (and floored), absent ones are not.
#[derive(Debug, Clone, Deserialize)]
struct ParcelRecord {
    #[serde(alias = "qty")]
    quantity: Option<u32>,
    #[serde(alias = "weight_kg")]
    weight: Option<f64>,
    #[serde(alias = "height_cm")]
    height: Option<f64>,
    #[serde(alias = "width_cm")]
    width: Option<f64>,
    #[serde(alias = "length_cm")]
    length: Option<f64>,
}

impl TryFrom<ParcelRecord> for Parcel {
    type Error = ValidationError;

    fn try_from(record: ParcelRecord) -> Result<Self, Self::Error> {
        Parcel::new(
            record
                .quantity
                .ok_or(ValidationError::MissingMeasurement("quantity"))?,
            record.weight.ok_or(ValidationError::MissingMeasurement("weight"))?,
            record.height.ok_or(ValidationError::MissingMeasurement("height"))?,
            record.width.ok_or(ValidationError::MissingMeasurement("width"))?,
            record.length.ok_or(ValidationError::MissingMeasurement("length"))?,
        )
    }
}

/// Parses `QTY:WEIGHT:HxWxL`, e.g. `2:1.5:10x20x30`.
impl FromStr for Parcel {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = |reason: &str| ValidationError::InvalidParcelSpec {
            spec: s.to_string(),
            reason: reason.to_string(),
        };

        let mut parts = s.trim().split(':');
        let (Some(qty), Some(weight), Some(dims), None) =
            (parts.next(), parts.next(), parts.next(), parts.next())
        else {
            return Err(invalid("expected QTY:WEIGHT:HxWxL"));
        };

        let quantity: u32 = qty
            .trim()
            .parse()
            .map_err(|_| invalid("quantity is not a whole number"))?;
        let weight_kg: f64 = weight
            .trim()
            .replace(',', ".")
            .parse()
            .map_err(|_| invalid("weight is not a number"))?;

        let dims: Vec<f64> = dims
            .split(['x', 'X'])
            .map(|d| d.trim().replace(',', ".").parse::<f64>())
            .collect::<Result<_, _>>()
            .map_err(|_| invalid("dimensions must be numbers"))?;
        let [height, width, length] = dims.as_slice() else {
            return Err(invalid("expected three dimensions HxWxL"));
        };

        Parcel::new(quantity, weight_kg, *height, *width, *length)
    }
}

/// Aggregate weight and volume of a shipment.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ShipmentTotals {
    total_weight_kg: f64,
    total_volume_cm3: f64,
}

impl ShipmentTotals {
    /// Total weight in kilograms, never below 0.3.
    pub fn total_weight_kg(&self) -> f64 {
        self.total_weight_kg
    }

    /// Total volume in cubic centimetres, using floored dimensions.
    pub fn total_volume_cm3(&self) -> f64 {
        self.total_volume_cm3
    }
}

/// Reduce parcels to total weight and volume.
///
/// Dimensions are clamped to the carrier floors per parcel; the total
/// weight is floored at 0.3 kg after summation. An empty shipment yields
/// 0.3 kg and zero volume.
pub fn aggregate(parcels: &[Parcel]) -> ShipmentTotals {
    let mut total_weight_kg = 0.0;
    let mut total_volume_cm3 = 0.0;

    for parcel in parcels {
        let quantity = f64::from(parcel.quantity);
        let (height, width, length) = parcel.floored_dimensions_cm();

        total_weight_kg += parcel.weight_kg * quantity;
        total_volume_cm3 += height * width * length * quantity;
    }

    ShipmentTotals {
        total_weight_kg: at_least(total_weight_kg, MIN_TOTAL_WEIGHT_KG),
        total_volume_cm3,
    }
}
