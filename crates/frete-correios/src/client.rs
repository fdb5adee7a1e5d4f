//! HTTP client for the Correios price calculator.

use std::time::Duration;

use url::Url;

use crate::config::CorreiosConfig;
use crate::error::{ConfigError, PriceError};
use crate::oracle::PriceOracle;
use crate::request::{build_request_url, Credentials, PriceRequest};
use crate::response::{parse_price_response_bytes, BoxPrice};
use crate::retry::retry_send;

/// Live price oracle backed by the calculator's HTTP endpoint.
///
/// Holds a pooled `reqwest::Client`; clone-free sharing across tasks
/// goes through `&CorreiosClient` or an `Arc`.
#[derive(Debug)]
pub struct CorreiosClient {
    http: reqwest::Client,
    config: CorreiosConfig,
}

impl CorreiosClient {
    /// Create a client from configuration.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::HttpClient`] if the HTTP client cannot be built.
    pub fn new(config: CorreiosConfig) -> Result<Self, ConfigError> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| ConfigError::HttpClient(e.to_string()))?;
        Ok(Self { http, config })
    }

    /// Access the configuration.
    pub fn config(&self) -> &CorreiosConfig {
        &self.config
    }

    /// Fetch and interpret an already-built calculator URL.
    ///
    /// Transport failures (timeouts included) are retried up to
    /// `max_retries` times before surfacing as
    /// [`PriceError::TemporarilyUnavailable`].
    pub async fn price_url(&self, url: &Url) -> Result<BoxPrice, PriceError> {
        tracing::debug!(url = %redacted(url), "requesting carton price");

        let result = self.fetch(url).await;
        match &result {
            Err(PriceError::Rejected { code, message }) => {
                tracing::warn!(%code, %message, "carrier rejected carton");
            }
            Err(PriceError::TemporarilyUnavailable { reason }) => {
                tracing::warn!(%reason, "price calculator unavailable");
            }
            _ => {}
        }
        result
    }

    async fn fetch(&self, url: &Url) -> Result<BoxPrice, PriceError> {
        let resp = retry_send(self.config.max_retries, || self.http.get(url.clone()).send())
            .await
            .map_err(|e| PriceError::TemporarilyUnavailable {
                reason: if e.is_timeout() {
                    format!("request timed out after {}s", self.config.timeout_secs)
                } else {
                    e.to_string()
                },
            })?;

        let status = resp.status();
        if status.is_server_error() {
            return Err(PriceError::TemporarilyUnavailable {
                reason: format!("HTTP {status}"),
            });
        }
        if !status.is_success() {
            return Err(PriceError::InvalidResponse {
                reason: format!("unexpected HTTP {status}"),
            });
        }

        let body = resp.bytes().await.map_err(|e| PriceError::TemporarilyUnavailable {
            reason: format!("failed to read response body: {e}"),
        })?;

        parse_price_response_bytes(&body)
    }
}

impl PriceOracle for CorreiosClient {
    async fn price(&self, request: &PriceRequest) -> Result<BoxPrice, PriceError> {
        let url = self.request_url(request);
        self.price_url(&url).await
    }

    fn request_url(&self, request: &PriceRequest) -> Url {
        let credentials = Credentials {
            company_code: &self.config.company_code,
            password: &self.config.password,
        };
        build_request_url(&self.config.calculator_url, credentials, request)
    }

    fn oracle_name(&self) -> &str {
        "CorreiosClient"
    }
}

/// Copy of `url` with the contract password blanked, for logging.
fn redacted(url: &Url) -> Url {
    let mut out = url.clone();
    let pairs: Vec<(String, String)> = url
        .query_pairs()
        .map(|(k, v)| {
            let v = if k == "sDsSenha" && !v.is_empty() {
                "[REDACTED]".to_string()
            } else {
                v.into_owned()
            };
            (k.into_owned(), v)
        })
        .collect();
    out.query_pairs_mut().clear().extend_pairs(pairs);
    out
}
