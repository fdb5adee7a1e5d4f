//! # Identity Newtypes
//!
//! Route and service identifiers passed to the carrier calculator. Both
//! validate their format at construction time, so a malformed postal code
//! or service code can never reach the pricing service.
//!
//! - [`PostalCode`]: Brazilian CEP, accepted as `NNNNN-NNN` or `NNNNNNNN`,
//!   stored as the eight canonical digits.
//! - [`ServiceCode`]: 5-digit carrier service code. The well-known services
//!   in [`Service`] can also be addressed by name (`pac`, `sedex`, ...).

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ValidationError;

/// Implement `Deserialize` for a string newtype by routing the raw string
/// through the type's `new()` constructor, so invalid values are rejected
/// at deserialization time.
macro_rules! impl_validating_deserialize {
    ($ty:ident) => {
        impl<'de> Deserialize<'de> for $ty {
            fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
            where
                D: serde::Deserializer<'de>,
            {
                let raw = String::deserialize(deserializer)?;
                Self::new(raw).map_err(serde::de::Error::custom)
            }
        }
    };
}

/// Brazilian postal code (CEP).
///
/// # Validation
///
/// - Exactly 8 digits after stripping a single dash
/// - If a dash is present it must follow the 5-3 pattern
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct PostalCode(String);

impl_validating_deserialize!(PostalCode);

impl PostalCode {
    /// Create a postal code, validating format and storing the digits only.
    ///
    /// Surrounding whitespace is ignored.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::InvalidPostalCode`] if the value is not
    /// `NNNNN-NNN` or `NNNNNNNN`.
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        let raw = value.into();
        let trimmed = raw.trim();

        let digits: String = match trimmed.split_once('-') {
            Some((head, tail)) if head.len() == 5 && tail.len() == 3 => {
                format!("{head}{tail}")
            }
            Some(_) => return Err(ValidationError::InvalidPostalCode(raw)),
            None => trimmed.to_string(),
        };

        if digits.len() != 8 || !digits.chars().all(|c| c.is_ascii_digit()) {
            return Err(ValidationError::InvalidPostalCode(raw));
        }
        Ok(Self(digits))
    }

    /// The eight canonical digits, as sent to the calculator.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The postal code in display form: `NNNNN-NNN`.
    pub fn formatted(&self) -> String {
        format!("{}-{}", &self.0[..5], &self.0[5..])
    }
}

impl std::fmt::Display for PostalCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.formatted())
    }
}

impl FromStr for PostalCode {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

/// Well-known carrier services offered by the quoting front end.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Service {
    /// PAC, ground economy service.
    Pac,
    /// SEDEX, express service.
    Sedex,
    /// SEDEX with cash on delivery.
    SedexACobrar,
    /// SEDEX 10, next-morning delivery.
    Sedex10,
}

impl Service {
    /// All well-known services in catalogue order.
    pub fn all() -> &'static [Service] {
        &[Self::Pac, Self::Sedex, Self::SedexACobrar, Self::Sedex10]
    }

    /// Carrier service code sent as `nCdServico`.
    pub fn code(&self) -> &'static str {
        match self {
            Self::Pac => "41106",
            Self::Sedex => "40010",
            Self::SedexACobrar => "40045",
            Self::Sedex10 => "40215",
        }
    }

    /// Command-line / configuration name.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Pac => "pac",
            Self::Sedex => "sedex",
            Self::SedexACobrar => "sedex-a-cobrar",
            Self::Sedex10 => "sedex-10",
        }
    }

    /// Human-readable label.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Pac => "PAC",
            Self::Sedex => "SEDEX",
            Self::SedexACobrar => "SEDEX a Cobrar",
            Self::Sedex10 => "SEDEX 10",
        }
    }
}

impl std::fmt::Display for Service {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Carrier service code (`nCdServico`).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct ServiceCode(String);

impl_validating_deserialize!(ServiceCode);

impl ServiceCode {
    /// Create a service code from a well-known service name or a raw
    /// 5-digit code. Names are matched case-insensitively, and `_` is
    /// accepted in place of `-`.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::InvalidServiceCode`] for anything else.
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        let raw = value.into();
        let normalized = raw.trim().to_ascii_lowercase().replace('_', "-");

        if let Some(service) = Service::all()
            .iter()
            .find(|s| s.as_str() == normalized)
        {
            return Ok(Self::from(*service));
        }

        if normalized.len() == 5 && normalized.chars().all(|c| c.is_ascii_digit()) {
            return Ok(Self(normalized));
        }
        Err(ValidationError::InvalidServiceCode(raw))
    }

    /// The 5-digit code.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The well-known service this code identifies, if any.
    pub fn service(&self) -> Option<Service> {
        Service::all().iter().copied().find(|s| s.code() == self.0)
    }
}

impl From<Service> for ServiceCode {
    fn from(service: Service) -> Self {
        Self(service.code().to_string())
    }
}

impl std::fmt::Display for ServiceCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.service() {
            Some(service) => write!(f, "{} ({})", service.label(), self.0),
            None => f.write_str(&self.0),
        }
    }
}

impl FromStr for ServiceCode {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}
