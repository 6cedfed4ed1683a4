use serde::{Deserialize, Serialize};
use std::fmt;

/// Economic value score clamped to [0, 100].
/// Represents the externally assessed worth of a unit of work.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub struct EconomicValue(u8);

impl EconomicValue {
    /// Maximum representable value.
    pub const MAX: u8 = 100;

    /// Create a new EconomicValue, clamping to [0, 100].
    pub fn new(value: u8) -> Self {
        Self(value.min(Self::MAX))
    }

    /// Get the raw integer score.
    pub fn value(self) -> u8 {
        self.0
    }

    /// The score as a float, for ratio arithmetic.
    pub fn as_f64(self) -> f64 {
        f64::from(self.0)
    }
}

impl Default for EconomicValue {
    fn default() -> Self {
        Self(0)
    }
}

impl fmt::Display for EconomicValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u8> for EconomicValue {
    fn from(value: u8) -> Self {
        Self::new(value)
    }
}

impl From<EconomicValue> for u8 {
    fn from(v: EconomicValue) -> Self {
        v.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clamps_above_max() {
        assert_eq!(EconomicValue::new(250).value(), 100);
        assert_eq!(EconomicValue::new(100).value(), 100);
        assert_eq!(EconomicValue::new(0).value(), 0);
    }
}
