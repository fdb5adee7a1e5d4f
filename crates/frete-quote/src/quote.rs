//! Quote orchestration: plan the shipment, then price every carton.

use frete_core::{plan, Carton, Parcel, PostalCode, PricingRegime, QuoteOptions, ServiceCode, ShipmentTotals};
use frete_correios::{BoxPrice, PriceError, PriceOracle, PriceRequest};
use futures::{stream, StreamExt, TryStreamExt};
use rust_decimal::Decimal;
use serde::Serialize;
use url::Url;

use crate::config::QuoteConfig;

/// A shipment to quote.
#[derive(Debug, Clone, PartialEq)]
pub struct QuoteRequest {
    pub parcels: Vec<Parcel>,
    pub origin: PostalCode,
    pub destination: PostalCode,
    pub service: ServiceCode,
    pub options: QuoteOptions,
}

impl QuoteRequest {
    /// One price request per carton, in carton order.
    pub fn price_requests(&self, cartons: &[Carton]) -> Vec<PriceRequest> {
        cartons
            .iter()
            .map(|carton| {
                PriceRequest::for_carton(&self.origin, &self.destination, &self.service, &self.options, carton)
            })
            .collect()
    }
}

/// What [`Quoter::quote`] should produce.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuoteMode {
    /// Price every carton and sum.
    Price,
    /// Only build the calculator URLs; no network calls.
    UrlsOnly,
}

/// Result of pricing, or the URLs that would have been fetched.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "mode", rename_all = "snake_case")]
pub enum QuoteOutcome {
    Priced { total: Decimal, prices: Vec<BoxPrice> },
    Urls { urls: Vec<Url> },
}

/// A completed quote.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Quote {
    pub totals: ShipmentTotals,
    pub measure_cm: f64,
    pub regime: PricingRegime,
    pub cartons: Vec<Carton>,
    pub outcome: QuoteOutcome,
}

impl Quote {
    /// Sum of all carton prices, if the quote was priced.
    pub fn total(&self) -> Option<Decimal> {
        match &self.outcome {
            QuoteOutcome::Priced { total, .. } => Some(*total),
            QuoteOutcome::Urls { .. } => None,
        }
    }

    /// Calculator URLs, if the quote was built in [`QuoteMode::UrlsOnly`].
    pub fn urls(&self) -> Option<&[Url]> {
        match &self.outcome {
            QuoteOutcome::Urls { urls } => Some(urls),
            QuoteOutcome::Priced { .. } => None,
        }
    }

    /// Slowest carton's delivery time in working days. Cartons travel
    /// together, so the shipment arrives when the last one does.
    pub fn delivery_days(&self) -> Option<u32> {
        match &self.outcome {
            QuoteOutcome::Priced { prices, .. } => prices.iter().filter_map(|p| p.delivery_days).max(),
            QuoteOutcome::Urls { .. } => None,
        }
    }
}

/// Plans shipments and prices their cartons through a [`PriceOracle`].
#[derive(Debug)]
pub struct Quoter<O> {
    oracle: O,
    config: QuoteConfig,
}

impl<O: PriceOracle> Quoter<O> {
    pub fn new(oracle: O, config: QuoteConfig) -> Self {
        Self { oracle, config }
    }

    pub fn oracle(&self) -> &O {
        &self.oracle
    }

    pub fn config(&self) -> &QuoteConfig {
        &self.config
    }

    /// Quote a shipment.
    ///
    /// In [`QuoteMode::Price`] at most `max_in_flight` cartons are priced
    /// at once. Prices are kept in carton order. The first failing carton
    /// aborts the quote; requests still in flight are dropped.
    ///
    /// # Errors
    ///
    /// Returns the first [`PriceError`] reported by the oracle. Never
    /// fails in [`QuoteMode::UrlsOnly`].
    pub async fn quote(&self, request: &QuoteRequest, mode: QuoteMode) -> Result<Quote, PriceError> {
        let shipment = plan(&request.parcels);
        tracing::info!(
            regime = %shipment.regime,
            measure_cm = shipment.measure_cm,
            weight_kg = shipment.totals.total_weight_kg(),
            cartons = shipment.cartons.len(),
            oracle = self.oracle.oracle_name(),
            "planned shipment"
        );

        let requests = request.price_requests(&shipment.cartons);

        let outcome = match mode {
            QuoteMode::UrlsOnly => QuoteOutcome::Urls {
                urls: requests.iter().map(|r| self.oracle.request_url(r)).collect(),
            },
            QuoteMode::Price => {
                let prices = self.price_all(&requests).await?;
                let total = prices.iter().map(|p| p.value).sum();
                QuoteOutcome::Priced { total, prices }
            }
        };

        Ok(Quote {
            totals: shipment.totals,
            measure_cm: shipment.measure_cm,
            regime: shipment.regime,
            cartons: shipment.cartons,
            outcome,
        })
    }

    async fn price_all(&self, requests: &[PriceRequest]) -> Result<Vec<BoxPrice>, PriceError> {
        let oracle = &self.oracle;
        stream::iter(requests.iter().enumerate())
            .map(|(carton, request)| async move {
                match oracle.price(request).await {
                    Ok(price) => {
                        tracing::debug!(carton, value = %price.value, "priced carton");
                        Ok(price)
                    }
                    Err(e) => {
                        tracing::warn!(carton, error = %e, "carton pricing failed, aborting quote");
                        Err(e)
                    }
                }
            })
            .buffered(self.config.max_in_flight())
            .try_collect()
            .await
    }
}
