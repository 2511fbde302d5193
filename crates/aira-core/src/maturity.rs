//! # Governance Maturity Scale
//!
//! The 0–3 self-assessment scale used for every governance control. The
//! scale serializes as its integer value (inventories say `rms: 2`, not a
//! string), and each level maps to the scoring factor the engine applies
//! to a control's weight.

use serde::{Deserialize, Serialize};

use crate::error::ValidationError;

/// Self-assessed completeness of a governance control.
///
/// Serialized as the bare integer 0–3. The scoring factor is deliberately
/// non-linear: partial implementations earn less than proportional credit
/// (1 → 0.25), near-complete ones almost full credit (2 → 0.75).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub enum Maturity {
    /// 0 — control does not exist.
    Absent,
    /// 1 — ad-hoc first steps.
    Initial,
    /// 2 — defined and mostly implemented.
    Defined,
    /// 3 — fully implemented and maintained.
    Managed,
}

impl Maturity {
    /// Returns all maturity levels in ascending order.
    pub fn all() -> &'static [Maturity] {
        &[Self::Absent, Self::Initial, Self::Defined, Self::Managed]
    }

    /// The integer value of this level.
    pub fn as_u8(&self) -> u8 {
        match self {
            Self::Absent => 0,
            Self::Initial => 1,
            Self::Defined => 2,
            Self::Managed => 3,
        }
    }

    /// The scoring factor applied to a control's weight at this level.
    ///
    /// 3 → 1.0, 2 → 0.75, 1 → 0.25, 0 → 0.0.
    pub fn factor(&self) -> f64 {
        match self {
            Self::Managed => 1.0,
            Self::Defined => 0.75,
            Self::Initial => 0.25,
            Self::Absent => 0.0,
        }
    }
}

impl Default for Maturity {
    /// New wizard drafts start every control at [`Maturity::Absent`].
    fn default() -> Self {
        Self::Absent
    }
}

impl TryFrom<u8> for Maturity {
    type Error = ValidationError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(Self::Absent),
            1 => Ok(Self::Initial),
            2 => Ok(Self::Defined),
            3 => Ok(Self::Managed),
            value => Err(ValidationError::InvalidMaturity { value }),
        }
    }
}

impl From<Maturity> for u8 {
    fn from(m: Maturity) -> Self {
        m.as_u8()
    }
}

impl std::fmt::Display for Maturity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_u8())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn as_u8_and_try_from_roundtrip() {
        for m in Maturity::all() {
            assert_eq!(Maturity::try_from(m.as_u8()).unwrap(), *m);
        }
    }

    #[test]
    fn try_from_rejects_out_of_range() {
        for value in [4u8, 5, 100, 255] {
            assert!(Maturity::try_from(value).is_err(), "{value} should fail");
        }
    }

    #[test]
    fn factor_table() {
        assert_eq!(Maturity::Absent.factor(), 0.0);
        assert_eq!(Maturity::Initial.factor(), 0.25);
        assert_eq!(Maturity::Defined.factor(), 0.75);
        assert_eq!(Maturity::Managed.factor(), 1.0);
    }

    #[test]
    fn factor_is_monotonic() {
        let factors: Vec<f64> = Maturity::all().iter().map(|m| m.factor()).collect();
        for pair in factors.windows(2) {
            assert!(pair[0] < pair[1]);
        }
    }

    #[test]
    fn serde_uses_integer_representation() {
        let json = serde_json::to_string(&Maturity::Defined).unwrap();
        assert_eq!(json, "2");
        let parsed: Maturity = serde_json::from_str("3").unwrap();
        assert_eq!(parsed, Maturity::Managed);
    }

    #[test]
    fn serde_rejects_out_of_range() {
        assert!(serde_json::from_str::<Maturity>("4").is_err());
    }

    #[test]
    fn default_is_absent() {
        assert_eq!(Maturity::default(), Maturity::Absent);
    }
}
