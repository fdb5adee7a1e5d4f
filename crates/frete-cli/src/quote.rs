//! # Quote CLI: price a shipment against the Correios calculator.
//!
//! Configuration comes from the `CORREIOS_*` and `FRETE_MAX_IN_FLIGHT`
//! environment variables; `--calculator-url` and `--timeout` override them.
//!
//! ```bash
//! frete quote --origin 01310-100 --destination 20040-002 --parcel 1:5:20x20x20
//! frete quote ... --urls-only     # list calculator URLs, no network
//! frete quote ... --json
//! ```

use std::str::FromStr;

use anyhow::{Context, Result};
use clap::Args;
use url::Url;

use frete_core::{display_brl, parse_brl, Decimal, PostalCode, QuoteOptions, ServiceCode, ValidationError};
use frete_correios::{CorreiosClient, CorreiosConfig};
use frete_quote::{Quote, QuoteConfig, QuoteMode, QuoteOutcome, QuoteRequest, Quoter};

use crate::input::ParcelArgs;

/// Quote subcommand arguments.
#[derive(Args, Debug)]
pub struct QuoteArgs {
    /// Origin postal code (NNNNN-NNN or 8 digits).
    #[arg(long)]
    pub origin: PostalCode,

    /// Destination postal code (NNNNN-NNN or 8 digits).
    #[arg(long)]
    pub destination: PostalCode,

    /// Service name (pac, sedex, sedex-a-cobrar, sedex-10) or 5-digit code.
    #[arg(long, default_value = "pac")]
    pub service: ServiceCode,

    #[command(flatten)]
    pub input: ParcelArgs,

    /// Declared value for insurance, e.g. 150,00 or 150.00.
    #[arg(long, value_parser = parse_amount)]
    pub declared_value: Option<Decimal>,

    /// Deliver to the addressee in person.
    #[arg(long)]
    pub hand_delivery: bool,

    /// Request a signed receipt notice.
    #[arg(long)]
    pub receipt_notice: bool,

    /// Print the calculator URLs instead of fetching them.
    #[arg(long)]
    pub urls_only: bool,

    /// Print the quote as JSON.
    #[arg(long)]
    pub json: bool,

    /// Calculator URL (overrides CORREIOS_CALCULATOR_URL).
    #[arg(long)]
    pub calculator_url: Option<Url>,

    /// Per-request timeout in seconds (overrides CORREIOS_TIMEOUT_SECS).
    #[arg(long)]
    pub timeout: Option<u64>,
}

/// Accepts both `1.234,56` and `1234.56`.
pub fn parse_amount(raw: &str) -> Result<Decimal, ValidationError> {
    if raw.contains(',') {
        parse_brl(raw)
    } else {
        Decimal::from_str(raw.trim()).map_err(|_| ValidationError::InvalidAmount(raw.to_string()))
    }
}

impl QuoteArgs {
    fn quote_request(&self) -> Result<QuoteRequest> {
        let options = QuoteOptions::new(
            self.hand_delivery,
            self.declared_value.unwrap_or(Decimal::ZERO),
            self.receipt_notice,
        )?;
        Ok(QuoteRequest {
            parcels: self.input.load()?,
            origin: self.origin.clone(),
            destination: self.destination.clone(),
            service: self.service.clone(),
            options,
        })
    }

    fn correios_config(&self) -> Result<CorreiosConfig> {
        let mut config = CorreiosConfig::from_env_with_url(self.calculator_url.clone())
            .context("invalid Correios configuration")?;
        if let Some(secs) = self.timeout {
            config.timeout_secs = secs;
        }
        Ok(config)
    }
}

/// Execute the quote subcommand.
pub fn run_quote(args: &QuoteArgs) -> Result<u8> {
    let request = args.quote_request()?;
    let client = CorreiosClient::new(args.correios_config()?).context("failed to create Correios client")?;
    let quoter = Quoter::new(client, QuoteConfig::from_env().context("invalid quote configuration")?);
    let mode = if args.urls_only {
        QuoteMode::UrlsOnly
    } else {
        QuoteMode::Price
    };

    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()
        .context("failed to start async runtime")?;
    let quote = runtime
        .block_on(quoter.quote(&request, mode))
        .with_context(|| format!("quote from {} to {} failed", request.origin, request.destination))?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&quote)?);
    } else {
        print!("{}", render_quote(&quote));
    }
    Ok(0)
}

/// Human-readable quote.
pub fn render_quote(quote: &Quote) -> String {
    let mut out = format!(
        "Regime:  {}\nMeasure: {} cm\nCartons: {}\n",
        quote.regime,
        quote.measure_cm,
        quote.cartons.len()
    );
    match &quote.outcome {
        QuoteOutcome::Urls { urls } => {
            for url in urls {
                out.push_str(url.as_str());
                out.push('\n');
            }
        }
        QuoteOutcome::Priced { total, prices } => {
            for (i, (carton, price)) in quote.cartons.iter().zip(prices).enumerate() {
                out.push_str(&format!(
                    "  #{:<3} {:>6} kg  {:>4} cm  {}\n",
                    i + 1,
                    carton.weight_kg,
                    carton.edge_cm,
                    display_brl(price.value)
                ));
            }
            out.push_str(&format!("Total:   {}\n", display_brl(*total)));
            if let Some(days) = quote.delivery_days() {
                out.push_str(&format!("Delivery: {days} working days\n"));
            }
        }
    }
    out
}
