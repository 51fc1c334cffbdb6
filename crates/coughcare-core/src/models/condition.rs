//! Screened conditions.

use std::fmt;

use serde::{Deserialize, Serialize};

/// One of the three screened respiratory conditions.
///
/// Declaration order is significant: on a score tie the earlier condition wins.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Condition {
    /// Respiratory Syncytial Virus
    Rsv,
    /// Pertussis
    WhoopingCough,
    Pneumonia,
}

impl Condition {
    /// All conditions in tie-break order.
    pub const ALL: [Condition; 3] = [Condition::Rsv, Condition::WhoopingCough, Condition::Pneumonia];

    /// Name shown in the report headline.
    pub fn display_name(self) -> &'static str {
        match self {
            Condition::Rsv => "RSV",
            Condition::WhoopingCough => "Whooping Cough",
            Condition::Pneumonia => "Pneumonia",
        }
    }

    /// Static recommendation shown under the report headline.
    pub fn recommendations(self) -> &'static [&'static str] {
        match self {
            Condition::Rsv => &[
                "Get plenty of rest and drink plenty of clean water.",
                "Watch for laboured breathing; if it appears, see a doctor immediately.",
            ],
            Condition::WhoopingCough => &[
                "This disease spreads easily; keep the patient apart from others.",
                "Consult a doctor about antibiotic treatment.",
            ],
            Condition::Pneumonia => &[
                "Caution: this result is a preliminary screen only and cannot replace diagnosis by a doctor.",
            ],
        }
    }

    pub(crate) fn index(self) -> usize {
        match self {
            Condition::Rsv => 0,
            Condition::WhoopingCough => 1,
            Condition::Pneumonia => 2,
        }
    }
}

impl fmt::Display for Condition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_index_matches_declaration_order() {
        for (i, condition) in Condition::ALL.iter().enumerate() {
            assert_eq!(condition.index(), i);
        }
    }

    #[test]
    fn test_every_condition_has_recommendations() {
        for condition in Condition::ALL {
            assert!(!condition.recommendations().is_empty());
        }
    }

    #[test]
    fn test_display_names() {
        assert_eq!(Condition::Rsv.to_string(), "RSV");
        assert_eq!(Condition::WhoopingCough.to_string(), "Whooping Cough");
    }
}
