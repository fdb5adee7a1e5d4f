//! Orchestrator configuration.

use frete_correios::ConfigError;

/// Default number of carton prices requested concurrently.
pub const DEFAULT_MAX_IN_FLIGHT: usize = 4;

/// Configuration for [`crate::Quoter`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QuoteConfig {
    /// Upper bound on outstanding price requests for one quote. Never zero.
    max_in_flight: usize,
}

impl Default for QuoteConfig {
    fn default() -> Self {
        Self {
            max_in_flight: DEFAULT_MAX_IN_FLIGHT,
        }
    }
}

impl QuoteConfig {
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidNumber` if `max_in_flight` is zero.
    pub fn new(max_in_flight: usize) -> Result<Self, ConfigError> {
        if max_in_flight == 0 {
            return Err(ConfigError::InvalidNumber(
                "max_in_flight".into(),
                "0".into(),
            ));
        }
        Ok(Self { max_in_flight })
    }

    /// Load from `FRETE_MAX_IN_FLIGHT` (default [`DEFAULT_MAX_IN_FLIGHT`]).
    pub fn from_env() -> Result<Self, ConfigError> {
        match std::env::var("FRETE_MAX_IN_FLIGHT") {
            Ok(raw) => {
                let n = raw
                    .trim()
                    .parse()
                    .map_err(|_| ConfigError::InvalidNumber("FRETE_MAX_IN_FLIGHT".into(), raw.clone()))?;
                Self::new(n).map_err(|_| ConfigError::InvalidNumber("FRETE_MAX_IN_FLIGHT".into(), raw))
            }
            Err(_) => Ok(Self::default()),
        }
    }

    pub fn max_in_flight(&self) -> usize {
        self.max_in_flight
    }
}
