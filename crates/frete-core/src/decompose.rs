//! # Box Decomposer
//!
//! Splits a classified shipment into the ordered list of [`Carton`]s that
//! are priced one by one and summed. Each carton is a cube: its height,
//! width, and length all equal its edge.
//!
//! ## Weight overflow
//!
//! Weight is peeled off in 30 kg steps. Each carton's weight is the
//! remaining weight truncated to a multiple of 30, and the remainder is
//! reduced by a flat 30 after every carton, so a shipment of `w` kg yields
//! `ceil(w / 30)` cartons. The first carton keeps the shipment's measure;
//! every later one is a minimum-size (16 cm) carton.
//!
//! ## Weight and measure overflow
//!
//! Weight and measure are peeled together, one unit (30 kg / 66 cm) per
//! carton. A carton carries the smaller of the current remainder and one
//! unit on each axis, with the edge never below 16 cm. A remainder that is
//! already within its unit is not reduced further, so a shipment yields
//! `max(ceil(w / 30), ceil(m / 66))` cartons. The same routine handles
//! shipments that only exceed the measure limit.

use serde::Serialize;

use crate::limits::{MAX_CARTON_MEASURE_CM, MAX_CARTON_WEIGHT_KG, MIN_EDGE_CM};
use crate::measure::resolve_measure;
use crate::parcel::{aggregate, Parcel, ShipmentTotals};
use crate::regime::{classify, PricingRegime};

/// One priceable unit: a cube of `edge_cm` weighing `weight_kg`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Carton {
    pub weight_kg: f64,
    pub edge_cm: f64,
}

impl Carton {
    pub fn new(weight_kg: f64, edge_cm: f64) -> Self {
        Self { weight_kg, edge_cm }
    }
}

/// Split a shipment into cartons according to its regime.
pub fn decompose(regime: PricingRegime, total_weight_kg: f64, measure_cm: f64) -> Vec<Carton> {
    match regime {
        PricingRegime::Simple => vec![Carton::new(total_weight_kg, measure_cm)],
        PricingRegime::WeightOverflow => split_by_weight(total_weight_kg, measure_cm),
        PricingRegime::WeightAndMeasureOverflow | PricingRegime::MeasureOverflow => {
            split_by_weight_and_measure(total_weight_kg, measure_cm)
        }
    }
}

fn split_by_weight(total_weight_kg: f64, measure_cm: f64) -> Vec<Carton> {
    let mut cartons = Vec::new();
    let mut remaining = total_weight_kg;

    loop {
        let edge = if cartons.is_empty() {
            measure_cm
        } else {
            MIN_EDGE_CM
        };
        let weight = (remaining / MAX_CARTON_WEIGHT_KG).floor() * MAX_CARTON_WEIGHT_KG;
        cartons.push(Carton::new(weight, edge));

        remaining -= MAX_CARTON_WEIGHT_KG;
        if remaining <= 0.0 {
            return cartons;
        }
    }
}

fn split_by_weight_and_measure(total_weight_kg: f64, measure_cm: f64) -> Vec<Carton> {
    let mut cartons = Vec::new();
    let mut weight = total_weight_kg;
    let mut measure = measure_cm;

    loop {
        cartons.push(Carton::new(
            weight.min(MAX_CARTON_WEIGHT_KG),
            measure.min(MAX_CARTON_MEASURE_CM).max(MIN_EDGE_CM),
        ));

        let heavy = weight > MAX_CARTON_WEIGHT_KG;
        let large = measure > MAX_CARTON_MEASURE_CM;
        if !heavy && !large {
            return cartons;
        }
        if heavy {
            weight -= MAX_CARTON_WEIGHT_KG;
        }
        if large {
            measure -= MAX_CARTON_MEASURE_CM;
        }
    }
}

/// The full, network-free pricing plan for one shipment.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ShipmentPlan {
    pub totals: ShipmentTotals,
    pub measure_cm: f64,
    pub regime: PricingRegime,
    pub cartons: Vec<Carton>,
}

/// Aggregate, resolve the measure, classify, and decompose.
pub fn plan(parcels: &[Parcel]) -> ShipmentPlan {
    let totals = aggregate(parcels);
    let measure_cm = resolve_measure(totals.total_volume_cm3());
    let regime = classify(totals.total_weight_kg(), measure_cm);
    let cartons = decompose(regime, totals.total_weight_kg(), measure_cm);

    ShipmentPlan {
        totals,
        measure_cm,
        regime,
        cartons,
    }
}
