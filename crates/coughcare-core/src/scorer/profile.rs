//! Scoring profiles: a symptom catalog plus its additive rule table.
//!
//! Two built-in profiles ship with the crate:
//! - `standard`: 6-symptom checklist, includes the "no high fever" rule
//! - `respiratory`: 10-symptom checklist with wheeze/whoop/dyspnea/paroxysm
//!
//! Custom profiles load from JSON in the same shape [`ScoringProfile`] serializes to.

use std::collections::HashSet;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::models::{Condition, Symptom, SymptomSet};

use super::{ScorerError, ScorerResult};

/// Name of the profile used when none is requested.
pub const DEFAULT_PROFILE: &str = "standard";

/// Names of all built-in profiles.
pub const BUILTIN_PROFILES: [&str; 2] = ["standard", "respiratory"];

/// Condition a rule fires on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Predicate {
    /// Symptom is checked
    Present(Symptom),
    /// Symptom is not checked
    Absent(Symptom),
}

impl Predicate {
    pub fn matches(&self, symptoms: &SymptomSet) -> bool {
        match *self {
            Predicate::Present(s) => symptoms.contains(s),
            Predicate::Absent(s) => !symptoms.contains(s),
        }
    }

    pub fn symptom(&self) -> Symptom {
        match *self {
            Predicate::Present(s) | Predicate::Absent(s) => s,
        }
    }
}

/// "If `when` holds, add `weight` to `condition`."
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rule {
    pub condition: Condition,
    pub when: Predicate,
    pub weight: u32,
}

impl Rule {
    pub fn present(condition: Condition, symptom: Symptom, weight: u32) -> Self {
        Self {
            condition,
            when: Predicate::Present(symptom),
            weight,
        }
    }

    pub fn absent(condition: Condition, symptom: Symptom, weight: u32) -> Self {
        Self {
            condition,
            when: Predicate::Absent(symptom),
            weight,
        }
    }
}

/// A symptom catalog and the rules evaluated over it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoringProfile {
    pub name: String,
    /// Symptoms offered on the checklist, in display order
    pub catalog: Vec<Symptom>,
    pub rules: Vec<Rule>,
}

impl ScoringProfile {
    /// Look up a built-in profile by name.
    pub fn builtin(name: &str) -> ScorerResult<Self> {
        match name.trim().to_lowercase().as_str() {
            "standard" => Ok(Self::standard()),
            "respiratory" => Ok(Self::respiratory()),
            _ => Err(ScorerError::UnknownProfile(name.to_string())),
        }
    }

    /// The 6-symptom reference profile.
    pub fn standard() -> Self {
        use Condition::*;
        use Symptom::*;

        Self {
            name: "standard".into(),
            catalog: vec![
                MildFever,
                HighFeverChills,
                RunnyNoseSneeze,
                ChestPainBreathing,
                DarkGreenPhlegm,
                PostCoughVomiting,
            ],
            rules: vec![
                Rule::present(Rsv, MildFever, 40),
                Rule::present(Rsv, RunnyNoseSneeze, 40),
                Rule::present(WhoopingCough, PostCoughVomiting, 60),
                Rule::absent(WhoopingCough, HighFeverChills, 20),
                Rule::present(Pneumonia, ChestPainBreathing, 40),
                Rule::present(Pneumonia, HighFeverChills, 30),
                Rule::present(Pneumonia, DarkGreenPhlegm, 30),
            ],
        }
    }

    /// The 10-symptom profile with respiratory-specific signs.
    pub fn respiratory() -> Self {
        use Condition::*;
        use Symptom::*;

        Self {
            name: "respiratory".into(),
            catalog: Symptom::ALL.to_vec(),
            rules: vec![
                Rule::present(Rsv, Wheeze, 40),
                Rule::present(Rsv, RunnyNoseSneeze, 20),
                Rule::present(Rsv, MildFever, 20),
                Rule::present(WhoopingCough, WhoopSound, 50),
                Rule::present(WhoopingCough, ParoxysmalCough, 40),
                Rule::present(WhoopingCough, PostCoughVomiting, 30),
                Rule::present(Pneumonia, Dyspnea, 40),
                Rule::present(Pneumonia, HighFeverChills, 30),
                Rule::present(Pneumonia, ChestPainBreathing, 30),
                Rule::present(Pneumonia, DarkGreenPhlegm, 20),
            ],
        }
    }

    /// Parse and validate a profile from JSON.
    pub fn from_json(json: &str) -> ScorerResult<Self> {
        let profile: Self = serde_json::from_str(json)?;
        profile.validate()?;
        Ok(profile)
    }

    /// Load and validate a profile from a JSON file.
    pub fn load(path: impl AsRef<Path>) -> ScorerResult<Self> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json(&json)
    }

    /// Serialize to pretty JSON.
    pub fn to_json(&self) -> ScorerResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Check that the catalog has no duplicates and every rule refers to it.
    pub fn validate(&self) -> ScorerResult<()> {
        if self.name.trim().is_empty() {
            return Err(ScorerError::InvalidProfile("profile name is empty".into()));
        }

        let mut seen = HashSet::new();
        for symptom in &self.catalog {
            if !seen.insert(*symptom) {
                return Err(ScorerError::InvalidProfile(format!(
                    "'{}' appears twice in the catalog of profile '{}'",
                    symptom.id(),
                    self.name
                )));
            }
        }

        for rule in &self.rules {
            let symptom = rule.when.symptom();
            if !seen.contains(&symptom) {
                return Err(ScorerError::InvalidProfile(format!(
                    "rule for {} references '{}', which is not in the catalog of profile '{}'",
                    rule.condition,
                    symptom.id(),
                    self.name
                )));
            }
        }

        Ok(())
    }

    pub fn in_catalog(&self, symptom: Symptom) -> bool {
        self.catalog.contains(&symptom)
    }

    /// Rules that mention a given symptom.
    pub fn rules_for(&self, symptom: Symptom) -> impl Iterator<Item = &Rule> {
        self.rules.iter().filter(move |r| r.when.symptom() == symptom)
    }
}

impl Default for ScoringProfile {
    fn default() -> Self {
        Self::standard()
    }
}
