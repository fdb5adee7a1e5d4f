//! # frete-cli: CLI Tool for the Frete Stack
//!
//! Provides the `frete` command-line interface.
//!
//! ## Subcommands
//!
//! - `frete plan`: Split a shipment into cartons (no network).
//! - `frete quote`: Price a shipment against the Correios calculator.
//! - `frete services`: List the named carrier services.
//!
//! ```bash
//! frete plan --parcel 2:12.5:30x40x50
//! frete quote --origin 01310-100 --destination 20040-002 --service sedex \
//!     --parcel 1:65:40x40x40 --declared-value 150,00
//! frete quote --origin 01310100 --destination 20040002 \
//!     --parcels-file shipment.json --urls-only
//! ```

pub mod input;
pub mod plan;
pub mod quote;
pub mod services;
