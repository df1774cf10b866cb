//! Monetary amount used for starting prices and bids.
//!
//! Amounts are plain floating point numbers compared with `>`; there is no
//! currency or rounding model.

use core::str::FromStr;
use serde::{Deserialize, Serialize};

use crate::error::DomainError;
use crate::value_object::ValueObject;

/// A price or bid amount.
#[derive(Debug, Copy, Clone, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Amount(f64);

impl Amount {
    pub fn new(value: f64) -> Self {
        Self(value)
    }

    pub fn value(self) -> f64 {
        self.0
    }

    /// Strictly greater than `other`. Equal amounts never outbid each other.
    pub fn exceeds(self, other: Amount) -> bool {
        self.0 > other.0
    }
}

impl ValueObject for Amount {}

impl From<f64> for Amount {
    fn from(value: f64) -> Self {
        Self(value)
    }
}

/// Always renders a fractional part: `15` prints as `15.0`, `12.5` as `12.5`.
impl core::fmt::Display for Amount {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{:?}", self.0)
    }
}

impl FromStr for Amount {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let value: f64 = trimmed
            .parse()
            .map_err(|_| DomainError::validation(format!("'{trimmed}' is not a number")))?;
        if !value.is_finite() {
            return Err(DomainError::validation(format!(
                "'{trimmed}' is not a finite amount"
            )));
        }
        Ok(Self(value))
    }
}
