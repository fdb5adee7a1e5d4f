//! # Plan CLI: split a shipment into cartons without pricing it.
//!
//! ```bash
//! frete plan --parcel 1:65:40x40x40
//! frete plan --parcels-file shipment.json --json
//! ```

use anyhow::Result;
use clap::Args;

use frete_core::{plan, ShipmentPlan};

use crate::input::ParcelArgs;

/// Plan subcommand arguments.
#[derive(Args, Debug)]
pub struct PlanArgs {
    #[command(flatten)]
    pub input: ParcelArgs,

    /// Print the plan as JSON.
    #[arg(long)]
    pub json: bool,
}

/// Execute the plan subcommand.
pub fn run_plan(args: &PlanArgs) -> Result<u8> {
    let parcels = args.input.load()?;
    let shipment = plan(&parcels);

    if args.json {
        println!("{}", serde_json::to_string_pretty(&shipment)?);
    } else {
        print!("{}", render_plan(&shipment));
    }
    Ok(0)
}

/// Human-readable plan.
pub fn render_plan(shipment: &ShipmentPlan) -> String {
    let mut out = String::new();
    out.push_str(&format!(
        "Total weight: {} kg\nTotal volume: {} cm3\nMeasure:      {} cm\nRegime:       {}\n",
        shipment.totals.total_weight_kg(),
        shipment.totals.total_volume_cm3(),
        shipment.measure_cm,
        shipment.regime,
    ));
    out.push_str(&format!("Cartons:      {}\n", shipment.cartons.len()));
    for (i, carton) in shipment.cartons.iter().enumerate() {
        out.push_str(&format!(
            "  #{:<3} {:>6} kg  {:>4} cm\n",
            i + 1,
            carton.weight_kg,
            carton.edge_cm
        ));
    }
    out
}
