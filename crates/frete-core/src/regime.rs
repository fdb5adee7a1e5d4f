//! # Overflow Classifier
//!
//! Chooses how a shipment is split into priced cartons. A carton may carry
//! at most 30 kg and a cubic measure of at most 66 cm; which of those
//! limits the shipment exceeds decides the regime.
//!
//! | Weight | Measure | Regime |
//! |--------|---------|--------|
//! | ≤ 30 | ≤ 66 | [`PricingRegime::Simple`] |
//! | > 30 | ≤ 66 | [`PricingRegime::WeightOverflow`] |
//! | > 30 | > 66 | [`PricingRegime::WeightAndMeasureOverflow`] |
//! | ≤ 30 | > 66 | [`PricingRegime::MeasureOverflow`] |
//!
//! Every (weight, measure) pair maps to exactly one regime.

use serde::{Deserialize, Serialize};

use crate::limits::{MAX_CARTON_MEASURE_CM, MAX_CARTON_WEIGHT_KG};

/// How a shipment is split into cartons.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PricingRegime {
    /// Fits in a single carton.
    Simple,
    /// Too heavy for one carton, small enough in measure.
    WeightOverflow,
    /// Both too heavy and too large for one carton.
    WeightAndMeasureOverflow,
    /// Within the weight limit but too large for one carton. Split with
    /// the weight-and-measure routine, whose weight side never splits.
    MeasureOverflow,
}

impl PricingRegime {
    /// All regimes.
    pub fn all() -> &'static [PricingRegime] {
        &[
            Self::Simple,
            Self::WeightOverflow,
            Self::WeightAndMeasureOverflow,
            Self::MeasureOverflow,
        ]
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Simple => "simple",
            Self::WeightOverflow => "weight_overflow",
            Self::WeightAndMeasureOverflow => "weight_and_measure_overflow",
            Self::MeasureOverflow => "measure_overflow",
        }
    }

    /// Whether the shipment needs more than one carton's worth of limits.
    pub fn is_overflow(&self) -> bool {
        !matches!(self, Self::Simple)
    }
}

impl std::fmt::Display for PricingRegime {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Classify a shipment by total weight (kg) and measure (cm).
pub fn classify(total_weight_kg: f64, measure_cm: f64) -> PricingRegime {
    let heavy = total_weight_kg > MAX_CARTON_WEIGHT_KG;
    let large = measure_cm > MAX_CARTON_MEASURE_CM;

    match (heavy, large) {
        (false, false) => PricingRegime::Simple,
        (true, false) => PricingRegime::WeightOverflow,
        (true, true) => PricingRegime::WeightAndMeasureOverflow,
        (false, true) => PricingRegime::MeasureOverflow,
    }
}
