//! Parcel input shared by `plan` and `quote`.

use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use clap::Args;

use frete_core::Parcel;

/// Where the shipment's parcels come from.
#[derive(Args, Debug, Clone)]
pub struct ParcelArgs {
    /// Parcel line as QTY:WEIGHT:HxWxL (kg, cm). Repeat for more lines.
    #[arg(long = "parcel", value_name = "QTY:WEIGHT:HxWxL")]
    pub parcels: Vec<Parcel>,

    /// JSON file holding an array of parcels
    /// (`{"quantity", "weight", "height", "width", "length"}`).
    #[arg(long, value_name = "PATH")]
    pub parcels_file: Option<PathBuf>,
}

impl ParcelArgs {
    /// All parcels: file entries first, then `--parcel` lines.
    pub fn load(&self) -> Result<Vec<Parcel>> {
        let mut parcels = match &self.parcels_file {
            Some(path) => read_parcels_file(path)?,
            None => Vec::new(),
        };
        parcels.extend(self.parcels.iter().cloned());

        if parcels.is_empty() {
            bail!("no parcels given; use --parcel or --parcels-file");
        }
        Ok(parcels)
    }
}

fn read_parcels_file(path: &Path) -> Result<Vec<Parcel>> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read parcels file: {}", path.display()))?;
    serde_json::from_str(&content)
        .with_context(|| format!("invalid parcels file: {}", path.display()))
}
