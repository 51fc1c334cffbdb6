//! CoughCareKids Core Library
//!
//! Preliminary respiratory screening for children from birth to five years:
//! RSV, Whooping Cough and Pneumonia.
//!
//! # Architecture
//!
//! ```text
//!   Welcome ─▶ Audio ─▶ Symptoms ─▶ Result
//!                │          │          ▲
//!          (stored only)    │          │
//!                           ▼          │
//!                  LabelResolver       │
//!                           │          │
//!                           ▼          │
//!                      SymptomSet      │
//!                           │          │
//!                 ┌─────────▼─────────┐│
//!                 │      Scorer       ││
//!                 │ base 10 per cond. ││
//!                 │ + additive rules  ││
//!                 │ leader, clamp 98.5│┘
//!                 └───────────────────┘
//! ```
//!
//! # Core Principle
//!
//! **The result is a screen, not a diagnosis.** Confidence is a clamped point
//! total that never reaches 100%; the recorded audio is never analysed.
//!
//! # Modules
//!
//! - [`models`]: Domain types (Symptom, Condition, Prediction, SessionRecord, etc.)
//! - [`scorer`]: Rule-table scorer, scoring profiles and label resolution
//! - [`wizard`]: Four-step screening state machine

pub mod models;
pub mod scorer;
pub mod wizard;

// Re-export commonly used types
pub use models::{
    AudioSample, Condition, ConditionScores, Prediction, ScreeningReport, SessionRecord, Symptom,
    SymptomDuration, SymptomSet, BASE_SCORE, CONFIDENCE_CEILING,
};
pub use scorer::{LabelResolver, Rule, Scorer, ScorerError, ScoringProfile};
pub use wizard::{Wizard, WizardError, WizardStep};

// UniFFI setup - using proc macros
uniffi::setup_scaffolding!();

use std::sync::{Arc, Mutex};

// =========================================================================
// FFI Error Type
// =========================================================================

#[derive(Debug, thiserror::Error, uniffi::Error)]
pub enum CoughCareError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Invalid state: {0}")]
    InvalidState(String),

    #[error("Configuration error: {0}")]
    ConfigurationError(String),

    #[error("Serialization error: {0}")]
    SerializationError(String),
}

impl From<ScorerError> for CoughCareError {
    fn from(e: ScorerError) -> Self {
        match e {
            ScorerError::UnknownSymptom { .. } => CoughCareError::InvalidInput(e.to_string()),
            ScorerError::UnknownProfile(_)
            | ScorerError::InvalidProfile(_)
            | ScorerError::ProfileParse(_)
            | ScorerError::Io(_) => CoughCareError::ConfigurationError(e.to_string()),
        }
    }
}

impl From<WizardError> for CoughCareError {
    fn from(e: WizardError) -> Self {
        match e {
            WizardError::Scorer(inner) => inner.into(),
            WizardError::InvalidTransition { .. } | WizardError::MissingAudio => {
                CoughCareError::InvalidState(e.to_string())
            }
        }
    }
}

impl From<models::ModelError> for CoughCareError {
    fn from(e: models::ModelError) -> Self {
        CoughCareError::InvalidInput(e.to_string())
    }
}

impl From<serde_json::Error> for CoughCareError {
    fn from(e: serde_json::Error) -> Self {
        CoughCareError::SerializationError(e.to_string())
    }
}

impl<T> From<std::sync::PoisonError<T>> for CoughCareError {
    fn from(e: std::sync::PoisonError<T>) -> Self {
        CoughCareError::InvalidState(format!("Lock poisoned: {}", e))
    }
}

// =========================================================================
// Stateless Functions (exported to FFI)
// =========================================================================

/// Score checklist labels with a built-in profile.
#[uniffi::export]
pub fn score_labels(labels: Vec<String>, profile: String) -> Result<FfiPrediction, CoughCareError> {
    let scorer = Scorer::builtin(&profile)?;
    let resolver = LabelResolver::for_profile(scorer.profile());
    let prediction = scorer.score_labels(&resolver, &labels)?;
    Ok(prediction.into())
}

/// List the checklist offered by a built-in profile.
#[uniffi::export]
pub fn list_catalog(profile: String) -> Result<Vec<FfiSymptom>, CoughCareError> {
    let profile = ScoringProfile::builtin(&profile)?;
    Ok(profile.catalog.into_iter().map(|s| s.into()).collect())
}

/// Export a built-in profile as JSON, as a starting point for custom profiles.
#[uniffi::export]
pub fn builtin_profile_json(profile: String) -> Result<String, CoughCareError> {
    Ok(ScoringProfile::builtin(&profile)?.to_json()?)
}

// =========================================================================
// Factory Functions (exported to FFI)
// =========================================================================

/// Start a screening session with a built-in profile.
#[uniffi::export]
pub fn start_session(profile: String) -> Result<Arc<ScreeningSession>, CoughCareError> {
    let profile = ScoringProfile::builtin(&profile)?;
    Ok(ScreeningSession::wrap(Wizard::new(profile)))
}

/// Start a screening session with a profile given as JSON.
#[uniffi::export]
pub fn start_session_with_profile_json(
    profile_json: String,
) -> Result<Arc<ScreeningSession>, CoughCareError> {
    let profile = ScoringProfile::from_json(&profile_json)?;
    Ok(ScreeningSession::wrap(Wizard::new(profile)))
}

// =========================================================================
// Main API Object
// =========================================================================

/// Thread-safe wizard wrapper for FFI.
#[derive(uniffi::Object)]
pub struct ScreeningSession {
    wizard: Arc<Mutex<Wizard>>,
}

impl ScreeningSession {
    fn wrap(wizard: Wizard) -> Arc<Self> {
        Arc::new(Self {
            wizard: Arc::new(Mutex::new(wizard)),
        })
    }
}

#[uniffi::export]
impl ScreeningSession {
    // =========================================================================
    // Session State
    // =========================================================================

    /// Current session ID.
    pub fn session_id(&self) -> Result<String, CoughCareError> {
        let wizard = self.wizard.lock()?;
        Ok(wizard.record().session_id.clone())
    }

    /// Current step and progress bar position.
    pub fn progress(&self) -> Result<FfiProgress, CoughCareError> {
        let wizard = self.wizard.lock()?;
        Ok(wizard.progress().into())
    }

    /// Checklist for this session's profile.
    pub fn catalog(&self) -> Result<Vec<FfiSymptom>, CoughCareError> {
        let wizard = self.wizard.lock()?;
        Ok(wizard.profile().catalog.iter().map(|s| (*s).into()).collect())
    }

    // =========================================================================
    // Navigation
    // =========================================================================

    /// Accept the disclaimer and move to the recording step.
    pub fn accept_disclaimer(&self) -> Result<(), CoughCareError> {
        let mut wizard = self.wizard.lock()?;
        wizard.accept_disclaimer()?;
        Ok(())
    }

    /// Store the cough recording.
    pub fn record_audio(&self, bytes: Vec<u8>, mime_type: String) -> Result<(), CoughCareError> {
        let mut wizard = self.wizard.lock()?;
        wizard.record_audio(AudioSample::new(bytes, mime_type))?;
        Ok(())
    }

    /// Continue to the symptom checklist.
    pub fn proceed_from_audio(&self) -> Result<(), CoughCareError> {
        let mut wizard = self.wizard.lock()?;
        wizard.proceed_from_audio()?;
        Ok(())
    }

    /// Submit checked labels and the duration slider value.
    pub fn submit_symptoms(
        &self,
        labels: Vec<String>,
        duration_days: u32,
    ) -> Result<(), CoughCareError> {
        let duration = SymptomDuration::new(duration_days)?;

        let mut wizard = self.wizard.lock()?;
        let symptoms = LabelResolver::for_profile(wizard.profile()).resolve_all(&labels)?;
        wizard.submit_symptoms(symptoms, duration)?;
        Ok(())
    }

    /// Go back one step.
    pub fn back(&self) -> Result<(), CoughCareError> {
        let mut wizard = self.wizard.lock()?;
        wizard.back()?;
        Ok(())
    }

    /// Return to the welcome step with a blank session.
    pub fn reset(&self) -> Result<(), CoughCareError> {
        let mut wizard = self.wizard.lock()?;
        wizard.reset();
        Ok(())
    }

    // =========================================================================
    // Result
    // =========================================================================

    /// Screening report (result step only).
    pub fn report(&self) -> Result<FfiReport, CoughCareError> {
        let wizard = self.wizard.lock()?;
        Ok(wizard.report()?.into())
    }

    /// Screening report as JSON (result step only).
    pub fn report_json(&self) -> Result<String, CoughCareError> {
        let wizard = self.wizard.lock()?;
        Ok(wizard.report()?.to_json()?)
    }
}

// =========================================================================
// FFI Types
// =========================================================================

/// FFI-safe symptom.
#[derive(Debug, Clone, uniffi::Record)]
pub struct FfiSymptom {
    pub id: String,
    pub label: String,
    pub thai_label: String,
}

impl From<Symptom> for FfiSymptom {
    fn from(symptom: Symptom) -> Self {
        Self {
            id: symptom.id().to_string(),
            label: symptom.label().to_string(),
            thai_label: symptom.thai_label().to_string(),
        }
    }
}

/// FFI-safe per-condition score.
#[derive(Debug, Clone, uniffi::Record)]
pub struct FfiConditionScore {
    pub condition: String,
    pub score: u32,
}

impl From<(Condition, u32)> for FfiConditionScore {
    fn from((condition, score): (Condition, u32)) -> Self {
        Self {
            condition: condition.display_name().to_string(),
            score,
        }
    }
}

/// FFI-safe prediction.
#[derive(Debug, Clone, uniffi::Record)]
pub struct FfiPrediction {
    pub condition: String,
    pub confidence: f64,
    pub scores: Vec<FfiConditionScore>,
}

impl From<Prediction> for FfiPrediction {
    fn from(prediction: Prediction) -> Self {
        Self {
            condition: prediction.condition.display_name().to_string(),
            confidence: prediction.confidence,
            scores: prediction.scores.iter().map(|s| s.into()).collect(),
        }
    }
}

/// FFI-safe progress indicator.
#[derive(Debug, Clone, uniffi::Record)]
pub struct FfiProgress {
    pub step: String,
    pub label: String,
    pub fraction: f64,
}

impl From<wizard::Progress> for FfiProgress {
    fn from(progress: wizard::Progress) -> Self {
        Self {
            step: progress.step.id().to_string(),
            label: progress.step.label().to_string(),
            fraction: progress.fraction,
        }
    }
}

/// FFI-safe screening report.
#[derive(Debug, Clone, uniffi::Record)]
pub struct FfiReport {
    pub session_id: String,
    pub headline: String,
    pub condition: String,
    pub confidence: f64,
    pub confidence_display: String,
    pub duration_days: u32,
    pub screened_on: String,
    pub scores: Vec<FfiConditionScore>,
    pub recommendations: Vec<String>,
    pub disclaimer: String,
}

impl From<ScreeningReport> for FfiReport {
    fn from(report: ScreeningReport) -> Self {
        Self {
            headline: report.headline(),
            session_id: report.session_id,
            condition: report.condition.display_name().to_string(),
            confidence: report.confidence,
            confidence_display: report.confidence_display,
            duration_days: report.duration_days,
            screened_on: report.screened_on,
            scores: report.scores.into_iter().map(|s| s.into()).collect(),
            recommendations: report.recommendations,
            disclaimer: report.disclaimer,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_score_labels_ffi() {
        let prediction =
            score_labels(vec!["post-cough vomiting".into()], "standard".into()).unwrap();
        assert_eq!(prediction.condition, "Whooping Cough");
        assert_eq!(prediction.confidence, 90.0);
        assert_eq!(prediction.scores.len(), 3);
    }

    #[test]
    fn test_score_labels_unknown_symptom() {
        let err = score_labels(vec!["headache".into()], "standard".into()).unwrap_err();
        assert!(matches!(err, CoughCareError::InvalidInput(_)));
    }

    #[test]
    fn test_score_labels_hint_follows_profile() {
        let err = score_labels(vec!["wheezng".into()], "standard".into()).unwrap_err();
        assert_eq!(err.to_string(), "Invalid input: Unknown symptom: wheezng");

        let err = score_labels(vec!["wheezng".into()], "respiratory".into()).unwrap_err();
        assert_eq!(
            err.to_string(),
            "Invalid input: Unknown symptom: wheezng (did you mean 'wheezing'?)"
        );
    }

    #[test]
    fn test_empty_recording_blocks_checklist_ffi() {
        let session = start_session("standard".into()).unwrap();
        session.accept_disclaimer().unwrap();
        session.record_audio(vec![], "audio/wav".into()).unwrap();

        let err = session.proceed_from_audio().unwrap_err();
        assert!(matches!(err, CoughCareError::InvalidState(_)));
        assert_eq!(session.progress().unwrap().step, "audio");
    }

    #[test]
    fn test_unknown_profile() {
        let err = list_catalog("legacy".into()).unwrap_err();
        assert!(matches!(err, CoughCareError::ConfigurationError(_)));
    }

    #[test]
    fn test_session_flow_ffi() {
        let session = start_session("standard".into()).unwrap();
        let progress = session.progress().unwrap();
        assert_eq!(progress.step, "welcome");
        assert_eq!(progress.label, "Home");

        session.accept_disclaimer().unwrap();
        session.record_audio(vec![1, 2, 3], "audio/wav".into()).unwrap();
        session.proceed_from_audio().unwrap();
        assert_eq!(session.catalog().unwrap().len(), 6);

        session
            .submit_symptoms(
                vec![
                    "chest pain on breathing".into(),
                    "มีไข้สูง หนาวสั่น".into(),
                    "dark_green_phlegm".into(),
                ],
                4,
            )
            .unwrap();

        let report = session.report().unwrap();
        assert_eq!(report.condition, "Pneumonia");
        assert_eq!(report.confidence_display, "98.5%");
        assert_eq!(report.duration_days, 4);
        assert_eq!(report.headline, "High risk of: Pneumonia");
        let progress = session.progress().unwrap();
        assert_eq!(progress.step, "result");
        assert_eq!(progress.fraction, 1.0);

        session.reset().unwrap();
        assert!(matches!(
            session.report().unwrap_err(),
            CoughCareError::InvalidState(_)
        ));
    }

    #[test]
    fn test_invalid_duration_ffi() {
        let session = start_session("standard".into()).unwrap();
        session.accept_disclaimer().unwrap();
        session.record_audio(vec![1], "audio/wav".into()).unwrap();
        session.proceed_from_audio().unwrap();

        let err = session.submit_symptoms(vec![], 0).unwrap_err();
        assert!(matches!(err, CoughCareError::InvalidInput(_)));
    }

    #[test]
    fn test_session_from_profile_json() {
        let json = builtin_profile_json("respiratory".into()).unwrap();
        let session = start_session_with_profile_json(json).unwrap();
        assert_eq!(session.catalog().unwrap().len(), 10);
    }
}
