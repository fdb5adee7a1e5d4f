//! # frete CLI entry point
//!
//! Parses command-line arguments and dispatches to subcommand handlers.

use std::process::ExitCode;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use frete_cli::plan::{run_plan, PlanArgs};
use frete_cli::quote::{run_quote, QuoteArgs};
use frete_cli::services::run_services;

/// Frete: Correios freight quotes for multi-parcel shipments.
///
/// Splits a shipment into cartons the carrier accepts (at most 30 kg and a
/// 66 cm cubic measure each), prices every carton, and sums the result.
#[derive(Parser, Debug)]
#[command(name = "frete", version, about, long_about = None)]
struct Cli {
    /// Enable verbose output. Repeat for more verbosity (-v, -vv, -vvv).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Split a shipment into priced cartons without contacting the carrier.
    Plan(PlanArgs),

    /// Quote a shipment against the Correios price calculator.
    Quote(QuoteArgs),

    /// List the named carrier services.
    Services,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let filter = match cli.verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    tracing::debug!("frete CLI starting");

    let result = match cli.command {
        Commands::Plan(args) => run_plan(&args),
        Commands::Quote(args) => run_quote(&args),
        Commands::Services => run_services(),
    };

    match result {
        Ok(code) => ExitCode::from(code),
        Err(e) => {
            tracing::error!("{e:#}");
            ExitCode::from(1)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use frete_core::{Decimal, Service};

    #[test]
    fn cli_parse_plan_with_parcels() {
        let cli = Cli::try_parse_from([
            "frete",
            "plan",
            "--parcel",
            "2:12.5:30x40x50",
            "--parcel",
            "1:0,3:10x10x10",
        ])
        .unwrap();
        if let Commands::Plan(args) = cli.command {
            assert_eq!(args.input.parcels.len(), 2);
            assert_eq!(args.input.parcels[0].quantity(), 2);
            assert_eq!(args.input.parcels[1].weight_kg(), 0.3);
            assert!(!args.json);
        } else {
            panic!("expected plan");
        }
    }

    #[test]
    fn cli_parse_plan_rejects_bad_parcel() {
        assert!(Cli::try_parse_from(["frete", "plan", "--parcel", "2:heavy:30x40x50"]).is_err());
        assert!(Cli::try_parse_from(["frete", "plan", "--parcel", "0:1:30x40x50"]).is_err());
    }

    #[test]
    fn cli_parse_quote_defaults() {
        let cli = Cli::try_parse_from([
            "frete",
            "quote",
            "--origin",
            "01310-100",
            "--destination",
            "20040002",
            "--parcel",
            "1:5:20x20x20",
        ])
        .unwrap();
        if let Commands::Quote(args) = cli.command {
            assert_eq!(args.origin.as_str(), "01310100");
            assert_eq!(args.destination.as_str(), "20040002");
            assert_eq!(args.service.service(), Some(Service::Pac));
            assert!(args.declared_value.is_none());
            assert!(!args.hand_delivery);
            assert!(!args.receipt_notice);
            assert!(!args.urls_only);
            assert!(args.calculator_url.is_none());
            assert!(args.timeout.is_none());
        } else {
            panic!("expected quote");
        }
    }

    #[test]
    fn cli_parse_quote_with_options() {
        let cli = Cli::try_parse_from([
            "frete",
            "-vv",
            "quote",
            "--origin",
            "01310100",
            "--destination",
            "20040002",
            "--service",
            "sedex-10",
            "--parcel",
            "1:5:20x20x20",
            "--declared-value",
            "1.500,00",
            "--hand-delivery",
            "--receipt-notice",
            "--urls-only",
            "--calculator-url",
            "http://127.0.0.1:9000/calculador/CalcPrecoPrazo.aspx",
            "--timeout",
            "10",
        ])
        .unwrap();
        assert_eq!(cli.verbose, 2);
        if let Commands::Quote(args) = cli.command {
            assert_eq!(args.service.as_str(), "40215");
            assert_eq!(args.declared_value, Some(Decimal::new(150_000, 2)));
            assert!(args.hand_delivery);
            assert!(args.receipt_notice);
            assert!(args.urls_only);
            assert_eq!(args.timeout, Some(10));
        } else {
            panic!("expected quote");
        }
    }

    #[test]
    fn cli_parse_quote_rejects_bad_postal_code() {
        let result = Cli::try_parse_from([
            "frete",
            "quote",
            "--origin",
            "0131",
            "--destination",
            "20040002",
        ]);
        assert!(result.is_err());
    }

    #[test]
    fn cli_parse_quote_rejects_unknown_service() {
        let result = Cli::try_parse_from([
            "frete",
            "quote",
            "--origin",
            "01310100",
            "--destination",
            "20040002",
            "--service",
            "carrier-pigeon",
        ]);
        assert!(result.is_err());
    }

    #[test]
    fn cli_parse_services() {
        let cli = Cli::try_parse_from(["frete", "services"]).unwrap();
        assert!(matches!(cli.command, Commands::Services));
    }
}
