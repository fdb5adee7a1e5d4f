//! Deterministic in-memory price oracle for tests and offline runs.

use std::sync::atomic::{AtomicUsize, Ordering};

use parking_lot::Mutex;
use rust_decimal::Decimal;
use url::Url;

use crate::error::{ConfigError, PriceError};
use crate::oracle::PriceOracle;
use crate::request::{build_request_url, Credentials, PriceRequest};
use crate::response::BoxPrice;

/// Calculator URL the mock pretends to call.
pub const MOCK_CALCULATOR_URL: &str = "http://mock.invalid/calculador/CalcPrecoPrazo.aspx";

/// Mock price oracle.
///
/// Tariff, in centavos: `1000 + round(weight_kg * 150) + round(edge_cm * 10)`,
/// where the edge is the carton's length. Every call is recorded so tests
/// can assert on what was priced.
#[derive(Debug)]
pub struct MockPriceOracle {
    calculator_url: Url,
    calls: AtomicUsize,
    requests: Mutex<Vec<PriceRequest>>,
    failure: Option<(usize, PriceError)>,
}

impl MockPriceOracle {
    /// Mock whose request URLs point at [`MOCK_CALCULATOR_URL`].
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidUrl` if the mock URL cannot be parsed.
    pub fn new() -> Result<Self, ConfigError> {
        let calculator_url = Url::parse(MOCK_CALCULATOR_URL)
            .map_err(|e| ConfigError::InvalidUrl(MOCK_CALCULATOR_URL.to_string(), e.to_string()))?;
        Ok(Self::with_calculator_url(calculator_url))
    }

    /// Mock whose request URLs point at `calculator_url`.
    pub fn with_calculator_url(calculator_url: Url) -> Self {
        Self {
            calculator_url,
            calls: AtomicUsize::new(0),
            requests: Mutex::new(Vec::new()),
            failure: None,
        }
    }

    /// Fail the call with zero-based index `call_index` with `error`.
    pub fn failing_at(mut self, call_index: usize, error: PriceError) -> Self {
        self.failure = Some((call_index, error));
        self
    }

    /// The price this mock charges for `request`.
    pub fn tariff(request: &PriceRequest) -> Decimal {
        let cents = 1000
            + (request.weight_kg * 150.0).round() as i64
            + (request.length_cm * 10.0).round() as i64;
        Decimal::new(cents, 2)
    }

    /// Number of `price` calls so far.
    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    /// Requests priced so far, in call order.
    pub fn requests(&self) -> Vec<PriceRequest> {
        self.requests.lock().clone()
    }
}

impl PriceOracle for MockPriceOracle {
    async fn price(&self, request: &PriceRequest) -> Result<BoxPrice, PriceError> {
        let index = self.calls.fetch_add(1, Ordering::SeqCst);
        self.requests.lock().push(request.clone());

        if let Some((fail_at, error)) = &self.failure {
            if *fail_at == index {
                return Err(error.clone());
            }
        }

        Ok(BoxPrice {
            value: Self::tariff(request),
            delivery_days: Some(5),
        })
    }

    fn request_url(&self, request: &PriceRequest) -> Url {
        build_request_url(&self.calculator_url, Credentials::NONE, request)
    }

    fn oracle_name(&self) -> &str {
        "MockPriceOracle"
    }
}
