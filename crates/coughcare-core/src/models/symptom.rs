//! Symptom identifiers and symptom sets collected on the checklist step.

use std::collections::BTreeSet;
use std::fmt;

use serde::{Deserialize, Serialize};

/// A selectable clinical sign on the symptom checklist.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Symptom {
    /// Low-grade fever
    MildFever,
    /// High fever with chills
    HighFeverChills,
    /// Runny nose or sneezing
    RunnyNoseSneeze,
    /// Chest pain when breathing
    ChestPainBreathing,
    /// Dark or green phlegm
    DarkGreenPhlegm,
    /// Vomiting after coughing fits
    PostCoughVomiting,
    /// Wheezing
    Wheeze,
    /// Inspiratory "whoop" after coughing
    WhoopSound,
    /// Difficult or rapid breathing
    Dyspnea,
    /// Paroxysmal (repeated, violent) coughing fits
    ParoxysmalCough,
}

impl Symptom {
    /// Every known symptom, in checklist order.
    pub const ALL: [Symptom; 10] = [
        Symptom::MildFever,
        Symptom::HighFeverChills,
        Symptom::RunnyNoseSneeze,
        Symptom::ChestPainBreathing,
        Symptom::DarkGreenPhlegm,
        Symptom::PostCoughVomiting,
        Symptom::Wheeze,
        Symptom::WhoopSound,
        Symptom::Dyspnea,
        Symptom::ParoxysmalCough,
    ];

    /// Stable snake_case identifier (matches the serde representation).
    pub fn id(self) -> &'static str {
        match self {
            Symptom::MildFever => "mild_fever",
            Symptom::HighFeverChills => "high_fever_chills",
            Symptom::RunnyNoseSneeze => "runny_nose_sneeze",
            Symptom::ChestPainBreathing => "chest_pain_breathing",
            Symptom::DarkGreenPhlegm => "dark_green_phlegm",
            Symptom::PostCoughVomiting => "post_cough_vomiting",
            Symptom::Wheeze => "wheeze",
            Symptom::WhoopSound => "whoop_sound",
            Symptom::Dyspnea => "dyspnea",
            Symptom::ParoxysmalCough => "paroxysmal_cough",
        }
    }

    /// English checklist label.
    pub fn label(self) -> &'static str {
        match self {
            Symptom::MildFever => "mild fever",
            Symptom::HighFeverChills => "high fever/chills",
            Symptom::RunnyNoseSneeze => "runny nose/sneeze",
            Symptom::ChestPainBreathing => "chest pain on breathing",
            Symptom::DarkGreenPhlegm => "dark/green phlegm",
            Symptom::PostCoughVomiting => "post-cough vomiting",
            Symptom::Wheeze => "wheeze",
            Symptom::WhoopSound => "whoop sound",
            Symptom::Dyspnea => "difficulty breathing",
            Symptom::ParoxysmalCough => "paroxysmal cough",
        }
    }

    /// Thai checklist label as shown in the screening form.
    pub fn thai_label(self) -> &'static str {
        match self {
            Symptom::MildFever => "มีไข้ต่ำๆ",
            Symptom::HighFeverChills => "มีไข้สูง หนาวสั่น",
            Symptom::RunnyNoseSneeze => "น้ำมูกไหล / จาม",
            Symptom::ChestPainBreathing => "เจ็บหน้าอกเวลาหายใจ",
            Symptom::DarkGreenPhlegm => "มีเสมหะสีเขียวหรือคล้ำ",
            Symptom::PostCoughVomiting => "อาเจียนหลังไอ",
            Symptom::Wheeze => "หายใจมีเสียงหวีด",
            Symptom::WhoopSound => "ไอมีเสียงวู้ป",
            Symptom::Dyspnea => "หายใจหอบเหนื่อย",
            Symptom::ParoxysmalCough => "ไอเป็นชุดๆ ติดกัน",
        }
    }
}

impl fmt::Display for Symptom {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// The set of symptoms checked for one session.
///
/// Set semantics: each symptom is present at most once and the order in
/// which symptoms were checked is not observable.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SymptomSet {
    symptoms: BTreeSet<Symptom>,
}

impl SymptomSet {
    /// Create an empty set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a symptom. Returns false if it was already present.
    pub fn insert(&mut self, symptom: Symptom) -> bool {
        self.symptoms.insert(symptom)
    }

    /// Remove a symptom. Returns false if it was not present.
    pub fn remove(&mut self, symptom: Symptom) -> bool {
        self.symptoms.remove(&symptom)
    }

    pub fn contains(&self, symptom: Symptom) -> bool {
        self.symptoms.contains(&symptom)
    }

    pub fn len(&self) -> usize {
        self.symptoms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.symptoms.is_empty()
    }

    /// Iterate in catalog order.
    pub fn iter(&self) -> impl Iterator<Item = Symptom> + '_ {
        self.symptoms.iter().copied()
    }
}

impl FromIterator<Symptom> for SymptomSet {
    fn from_iter<I: IntoIterator<Item = Symptom>>(iter: I) -> Self {
        Self {
            symptoms: iter.into_iter().collect(),
        }
    }
}

impl<const N: usize> From<[Symptom; N]> for SymptomSet {
    fn from(symptoms: [Symptom; N]) -> Self {
        symptoms.into_iter().collect()
    }
}
