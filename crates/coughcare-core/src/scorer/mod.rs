//! Symptom scorer.
//!
//! Pipeline: Label Resolution → Catalog Check → Additive Rules → Leader + Clamp

mod labels;
mod profile;

pub use labels::*;
pub use profile::*;

use thiserror::Error;

use crate::models::{ConditionScores, Prediction, SymptomSet};

/// Scorer errors.
#[derive(Error, Debug)]
pub enum ScorerError {
    #[error("Unknown symptom: {label}{}", suggestion_hint(.suggestion))]
    UnknownSymptom {
        label: String,
        suggestion: Option<String>,
    },

    #[error("Unknown profile: {0}")]
    UnknownProfile(String),

    #[error("Invalid profile: {0}")]
    InvalidProfile(String),

    #[error("Profile parse error: {0}")]
    ProfileParse(#[from] serde_json::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type ScorerResult<T> = Result<T, ScorerError>;

fn suggestion_hint(suggestion: &Option<String>) -> String {
    suggestion
        .as_ref()
        .map(|s| format!(" (did you mean '{s}'?)"))
        .unwrap_or_default()
}

/// Stateless scorer over one profile.
#[derive(Debug, Clone, Default)]
pub struct Scorer {
    profile: ScoringProfile,
}

impl Scorer {
    /// Create a scorer for a profile.
    pub fn new(profile: ScoringProfile) -> Self {
        Self { profile }
    }

    /// Create a scorer for a built-in profile by name.
    pub fn builtin(name: &str) -> ScorerResult<Self> {
        Ok(Self::new(ScoringProfile::builtin(name)?))
    }

    pub fn profile(&self) -> &ScoringProfile {
        &self.profile
    }

    /// Score a symptom set.
    ///
    /// Every matching rule adds its weight; symptoms outside the catalog match
    /// no rule and are inert. Never fails.
    pub fn score(&self, symptoms: &SymptomSet) -> Prediction {
        let mut scores = ConditionScores::new();

        for rule in &self.profile.rules {
            if rule.when.matches(symptoms) {
                scores.add(rule.condition, rule.weight);
            }
        }

        let prediction = Prediction::from_scores(scores);
        tracing::debug!(
            profile = %self.profile.name,
            symptoms = symptoms.len(),
            condition = %prediction.condition,
            confidence = prediction.confidence,
            "scored symptom set"
        );
        prediction
    }

    /// Reject symptoms outside the profile catalog, then score.
    pub fn score_checked(&self, symptoms: &SymptomSet) -> ScorerResult<Prediction> {
        self.check_catalog(symptoms)?;
        Ok(self.score(symptoms))
    }

    /// Fail with `UnknownSymptom` for the first symptom the profile does not offer.
    pub fn check_catalog(&self, symptoms: &SymptomSet) -> ScorerResult<()> {
        match symptoms.iter().find(|s| !self.profile.in_catalog(*s)) {
            Some(symptom) => Err(ScorerError::UnknownSymptom {
                label: symptom.id().to_string(),
                suggestion: None,
            }),
            None => Ok(()),
        }
    }

    /// Resolve labels and score them in one step.
    pub fn score_labels<S: AsRef<str>>(
        &self,
        resolver: &LabelResolver,
        labels: &[S],
    ) -> ScorerResult<Prediction> {
        let symptoms = resolver.resolve_all(labels)?;
        self.score_checked(&symptoms)
    }
}
