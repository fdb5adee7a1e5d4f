//! Correios calculator client configuration.
//!
//! Defaults point at the public calculator endpoint. Override via
//! environment variables or explicit construction for staging/testing.

use std::str::FromStr;

use url::Url;
use zeroize::Zeroizing;

use crate::error::ConfigError;

/// Public calculator endpoint.
pub const DEFAULT_CALCULATOR_URL: &str = "http://ws.correios.com.br/calculador/CalcPrecoPrazo.aspx";

/// Path of the calculator on any host (used for local mock servers).
pub const CALCULATOR_PATH: &str = "/calculador/CalcPrecoPrazo.aspx";

/// Configuration for the Correios price calculator client.
///
/// Custom `Debug` implementation redacts the `password` field.
#[derive(Clone)]
pub struct CorreiosConfig {
    /// Full calculator URL, query string excluded.
    pub calculator_url: Url,
    /// Contract company code (`nCdEmpresa`); empty for counter prices.
    pub company_code: String,
    /// Contract password (`sDsSenha`); empty for counter prices.
    pub password: Zeroizing<String>,
    /// Per-request timeout in seconds.
    pub timeout_secs: u64,
    /// Retries after a transport failure (0 disables retrying).
    pub max_retries: u32,
}

impl std::fmt::Debug for CorreiosConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CorreiosConfig")
            .field("calculator_url", &self.calculator_url)
            .field("company_code", &self.company_code)
            .field("password", &"[REDACTED]")
            .field("timeout_secs", &self.timeout_secs)
            .field("max_retries", &self.max_retries)
            .finish()
    }
}

impl CorreiosConfig {
    /// Counter-price configuration for `calculator_url`: no contract
    /// credentials, 30 s timeout, 2 retries.
    pub fn new(calculator_url: Url) -> Self {
        Self {
            calculator_url,
            company_code: String::new(),
            password: Zeroizing::new(String::new()),
            timeout_secs: 30,
            max_retries: 2,
        }
    }

    /// Load configuration from environment variables.
    ///
    /// Variables:
    /// - `CORREIOS_CALCULATOR_URL` (default: [`DEFAULT_CALCULATOR_URL`])
    /// - `CORREIOS_COMPANY_CODE` (default: empty)
    /// - `CORREIOS_PASSWORD` (default: empty)
    /// - `CORREIOS_TIMEOUT_SECS` (default: 30)
    /// - `CORREIOS_MAX_RETRIES` (default: 2)
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_env_with_url(None)
    }

    /// Like [`Self::from_env`], but `calculator_url`, when given, replaces
    /// `CORREIOS_CALCULATOR_URL` and that variable is not read at all.
    pub fn from_env_with_url(calculator_url: Option<Url>) -> Result<Self, ConfigError> {
        let calculator_url = match calculator_url {
            Some(url) => url,
            None => env_url("CORREIOS_CALCULATOR_URL", DEFAULT_CALCULATOR_URL)?,
        };
        Ok(Self {
            calculator_url,
            company_code: std::env::var("CORREIOS_COMPANY_CODE").unwrap_or_default(),
            password: Zeroizing::new(std::env::var("CORREIOS_PASSWORD").unwrap_or_default()),
            timeout_secs: env_number("CORREIOS_TIMEOUT_SECS", 30)?,
            max_retries: env_number("CORREIOS_MAX_RETRIES", 2)?,
        })
    }

    /// Configuration pointing at a local mock server (for testing):
    /// `{base_url}/calculador/CalcPrecoPrazo.aspx`, short timeout, no retries.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidUrl` if `base_url` cannot be parsed.
    pub fn local_mock(base_url: &str) -> Result<Self, ConfigError> {
        let raw = format!("{}{CALCULATOR_PATH}", base_url.trim_end_matches('/'));
        let calculator_url =
            Url::parse(&raw).map_err(|e| ConfigError::InvalidUrl(raw.clone(), e.to_string()))?;
        Ok(Self {
            timeout_secs: 5,
            max_retries: 0,
            ..Self::new(calculator_url)
        })
    }
}

fn env_url(var: &str, default: &str) -> Result<Url, ConfigError> {
    let raw = std::env::var(var).unwrap_or_else(|_| default.to_string());
    Url::parse(&raw).map_err(|e| ConfigError::InvalidUrl(var.to_string(), e.to_string()))
}

fn env_number<T: FromStr>(var: &str, default: T) -> Result<T, ConfigError> {
    match std::env::var(var) {
        Ok(raw) => raw
            .trim()
            .parse()
            .map_err(|_| ConfigError::InvalidNumber(var.to_string(), raw)),
        Err(_) => Ok(default),
    }
}
