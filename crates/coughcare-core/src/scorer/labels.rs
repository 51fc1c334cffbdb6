//! Checklist label resolver.
//!
//! Maps whatever the form hands over (snake_case ids, English labels, Thai
//! labels, common spoken aliases) to [`Symptom`] values. Unknown labels are
//! rejected here, at the collection boundary, with the closest known label as
//! a hint. A resolver built for a profile only hints at labels that profile
//! offers.

use std::collections::HashMap;

use strsim::jaro_winkler;

use crate::models::{Symptom, SymptomSet};

use super::{ScorerError, ScorerResult, ScoringProfile};

/// Minimum similarity for a "did you mean" hint.
const SUGGESTION_THRESHOLD: f64 = 0.8;

/// Resolver from free-form checklist labels to symptoms.
pub struct LabelResolver {
    /// Lowercased label → symptom
    labels: HashMap<String, Symptom>,
    /// Symptoms eligible for hints; `None` means every symptom
    hint_catalog: Option<Vec<Symptom>>,
}

impl Default for LabelResolver {
    fn default() -> Self {
        Self::new()
    }
}

impl LabelResolver {
    /// Create a resolver with ids, English and Thai labels, and default aliases.
    pub fn new() -> Self {
        let mut labels = HashMap::new();
        for symptom in Symptom::ALL {
            labels.insert(symptom.id().to_string(), symptom);
            labels.insert(symptom.label().to_lowercase(), symptom);
            labels.insert(symptom.thai_label().to_string(), symptom);
        }
        labels.extend(Self::default_aliases());
        Self {
            labels,
            hint_catalog: None,
        }
    }

    /// Resolver whose hints stay inside the profile's checklist.
    pub fn for_profile(profile: &ScoringProfile) -> Self {
        Self {
            hint_catalog: Some(profile.catalog.clone()),
            ..Self::new()
        }
    }

    /// Resolve one label.
    pub fn resolve(&self, label: &str) -> ScorerResult<Symptom> {
        let key = normalize(label);
        if let Some(symptom) = self.labels.get(&key) {
            return Ok(*symptom);
        }

        let suggestion = self.suggest(&key);
        tracing::warn!(label, ?suggestion, "rejected unknown symptom label");
        Err(ScorerError::UnknownSymptom {
            label: label.to_string(),
            suggestion,
        })
    }

    /// Resolve a list of labels into a set. Duplicates collapse.
    pub fn resolve_all<S: AsRef<str>>(&self, labels: &[S]) -> ScorerResult<SymptomSet> {
        labels.iter().map(|l| self.resolve(l.as_ref())).collect()
    }

    /// Add a custom alias.
    pub fn add_alias(&mut self, alias: &str, symptom: Symptom) {
        self.labels.insert(normalize(alias), symptom);
    }

    /// Closest known label above the suggestion threshold.
    fn suggest(&self, key: &str) -> Option<String> {
        self.labels
            .iter()
            .filter(|(_, symptom)| {
                self.hint_catalog
                    .as_ref()
                    .map_or(true, |catalog| catalog.contains(*symptom))
            })
            .map(|(known, _)| (known, jaro_winkler(key, known)))
            .filter(|(_, score)| *score >= SUGGESTION_THRESHOLD)
            .max_by(|a, b| {
                a.1.partial_cmp(&b.1)
                    .unwrap_or(std::cmp::Ordering::Equal)
                    // deterministic pick among equal scores
                    .then_with(|| b.0.cmp(a.0))
            })
            .map(|(known, _)| known.clone())
    }

    /// Default spoken/typed aliases.
    fn default_aliases() -> HashMap<String, Symptom> {
        let mut map = HashMap::new();

        // Fever
        map.insert("low fever".into(), Symptom::MildFever);
        map.insert("low-grade fever".into(), Symptom::MildFever);
        map.insert("high fever".into(), Symptom::HighFeverChills);
        map.insert("chills".into(), Symptom::HighFeverChills);

        // Upper airway
        map.insert("runny nose".into(), Symptom::RunnyNoseSneeze);
        map.insert("sneeze".into(), Symptom::RunnyNoseSneeze);
        map.insert("sneezing".into(), Symptom::RunnyNoseSneeze);

        // Chest
        map.insert("chest pain".into(), Symptom::ChestPainBreathing);
        map.insert("phlegm".into(), Symptom::DarkGreenPhlegm);
        map.insert("green phlegm".into(), Symptom::DarkGreenPhlegm);
        map.insert("wheezing".into(), Symptom::Wheeze);
        map.insert("shortness of breath".into(), Symptom::Dyspnea);
        map.insert("rapid breathing".into(), Symptom::Dyspnea);

        // Cough pattern
        map.insert("vomiting after cough".into(), Symptom::PostCoughVomiting);
        map.insert("whoop".into(), Symptom::WhoopSound);
        map.insert("whooping".into(), Symptom::WhoopSound);
        map.insert("coughing fits".into(), Symptom::ParoxysmalCough);

        map
    }
}

fn normalize(label: &str) -> String {
    label.trim().to_lowercase()
}
