//! Range kinds and provenance markers.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Which generation algorithm produced a range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum RangeKind {
    /// `day_count` consecutive days starting at the reference date.
    Days,
    /// Seven days starting on the reference weekday on or before the
    /// reference date.
    Week,
    /// Every day of the reference date's month.
    MonthExact,
    /// The reference date's month widened to whole weeks anchored on the
    /// reference weekday.
    MonthExtended,
}

impl RangeKind {
    /// Returns `true` if the kind reads `ref_weekday`.
    pub fn uses_weekday(self) -> bool {
        matches!(self, Self::Week | Self::MonthExtended)
    }

    /// Returns `true` if the kind reads `day_count`.
    pub fn uses_day_count(self) -> bool {
        matches!(self, Self::Days)
    }

    /// Stable lowercase name, matching the serde representation.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Days => "days",
            Self::Week => "week",
            Self::MonthExact => "month-exact",
            Self::MonthExtended => "month-extended",
        }
    }
}

impl fmt::Display for RangeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// How a range came to exist.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Provenance {
    /// Produced directly by a generator call.
    #[default]
    Fresh,
    /// Produced by stepping forward from another range.
    Next,
    /// Produced by stepping backward from another range.
    Previous,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn option_usage() {
        assert!(!RangeKind::Days.uses_weekday());
        assert!(RangeKind::Week.uses_weekday());
        assert!(!RangeKind::MonthExact.uses_weekday());
        assert!(RangeKind::MonthExtended.uses_weekday());

        assert!(RangeKind::Days.uses_day_count());
        assert!(!RangeKind::Week.uses_day_count());
        assert!(!RangeKind::MonthExact.uses_day_count());
        assert!(!RangeKind::MonthExtended.uses_day_count());
    }

    #[test]
    fn display_matches_serde() {
        for kind in [
            RangeKind::Days,
            RangeKind::Week,
            RangeKind::MonthExact,
            RangeKind::MonthExtended,
        ] {
            let json = serde_json::to_string(&kind).unwrap();
            assert_eq!(json, format!("\"{kind}\""));
        }
    }

    #[test]
    fn provenance_default_is_fresh() {
        assert_eq!(Provenance::default(), Provenance::Fresh);
        assert_eq!(serde_json::to_string(&Provenance::Next).unwrap(), "\"next\"");
    }
}
