//! Screening wizard: the four-step form as an explicit state machine.
//!
//! ```text
//! Welcome ──accept──▶ Audio ──proceed──▶ Symptoms ──submit──▶ Result
//!    ▲                  │                   │                    │
//!    └──────back────────┘◀──────back────────┘                    │
//!    └───────────────────────────reset (from anywhere)───────────┘
//! ```
//!
//! The session record lives inside the wizard and is cleared by `reset`.
//! The prediction is computed when the report is requested, never cached.

mod step;

pub use step::*;

use thiserror::Error;

use crate::models::{AudioSample, ScreeningReport, SessionRecord, SymptomDuration, SymptomSet};
use crate::scorer::{Scorer, ScorerError, ScoringProfile};

/// Wizard errors.
#[derive(Error, Debug)]
pub enum WizardError {
    #[error("Cannot {action} from the {from} step")]
    InvalidTransition {
        from: WizardStep,
        action: &'static str,
    },

    #[error("No audio sample has been recorded")]
    MissingAudio,

    #[error(transparent)]
    Scorer(#[from] ScorerError),
}

pub type WizardResult<T> = Result<T, WizardError>;

/// One user's pass through the screening form.
#[derive(Debug, Clone)]
pub struct Wizard {
    step: WizardStep,
    record: SessionRecord,
    scorer: Scorer,
}

impl Wizard {
    /// Start a new session on the welcome step.
    pub fn new(profile: ScoringProfile) -> Self {
        let record = SessionRecord::new();
        tracing::info!(session_id = %record.session_id, profile = %profile.name, "screening session started");
        Self {
            step: WizardStep::Welcome,
            record,
            scorer: Scorer::new(profile),
        }
    }

    pub fn step(&self) -> WizardStep {
        self.step
    }

    pub fn record(&self) -> &SessionRecord {
        &self.record
    }

    pub fn profile(&self) -> &ScoringProfile {
        self.scorer.profile()
    }

    /// Progress indicator for the current step.
    pub fn progress(&self) -> Progress {
        self.step.progress()
    }

    /// Welcome → Audio.
    pub fn accept_disclaimer(&mut self) -> WizardResult<()> {
        self.expect(WizardStep::Welcome, "accept the disclaimer")?;
        self.go_to(WizardStep::Audio);
        Ok(())
    }

    /// Store (or replace) the cough recording.
    pub fn record_audio(&mut self, sample: AudioSample) -> WizardResult<()> {
        self.expect(WizardStep::Audio, "record audio")?;
        tracing::debug!(
            session_id = %self.record.session_id,
            bytes = sample.len(),
            mime_type = sample.mime_type(),
            "audio sample received"
        );
        self.record.audio = Some(sample);
        Ok(())
    }

    /// Audio → Symptoms, once a non-empty sample exists.
    pub fn proceed_from_audio(&mut self) -> WizardResult<()> {
        self.expect(WizardStep::Audio, "continue past audio")?;
        if !self.record.has_audio() {
            return Err(WizardError::MissingAudio);
        }
        self.go_to(WizardStep::Symptoms);
        Ok(())
    }

    /// Symptoms → Result. The set must come from the profile's catalog.
    pub fn submit_symptoms(
        &mut self,
        symptoms: SymptomSet,
        duration: SymptomDuration,
    ) -> WizardResult<()> {
        self.expect(WizardStep::Symptoms, "submit symptoms")?;
        self.scorer.check_catalog(&symptoms)?;

        self.record.symptoms = symptoms;
        self.record.duration = duration;
        self.go_to(WizardStep::Result);
        Ok(())
    }

    /// Step back one screen. Only Audio and Symptoms have a previous screen.
    pub fn back(&mut self) -> WizardResult<()> {
        let previous = match self.step {
            WizardStep::Audio => WizardStep::Welcome,
            WizardStep::Symptoms => WizardStep::Audio,
            from @ (WizardStep::Welcome | WizardStep::Result) => {
                return Err(WizardError::InvalidTransition {
                    from,
                    action: "go back",
                })
            }
        };
        self.go_to(previous);
        Ok(())
    }

    /// Return to Welcome with a fresh, empty session record.
    pub fn reset(&mut self) {
        let old = std::mem::take(&mut self.record);
        tracing::info!(
            previous_session = %old.session_id,
            session_id = %self.record.session_id,
            "screening session reset"
        );
        self.step = WizardStep::Welcome;
    }

    /// Build the screening report. Only valid on the result step.
    pub fn report(&self) -> WizardResult<ScreeningReport> {
        self.expect(WizardStep::Result, "show the report")?;
        let prediction = self.scorer.score(&self.record.symptoms);
        Ok(ScreeningReport::new(&self.record, &prediction))
    }

    fn expect(&self, step: WizardStep, action: &'static str) -> WizardResult<()> {
        if self.step == step {
            Ok(())
        } else {
            Err(WizardError::InvalidTransition {
                from: self.step,
                action,
            })
        }
    }

    fn go_to(&mut self, next: WizardStep) {
        tracing::info!(
            session_id = %self.record.session_id,
            from = %self.step,
            to = %next,
            "wizard transition"
        );
        self.step = next;
    }
}

impl Default for Wizard {
    fn default() -> Self {
        Self::new(ScoringProfile::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Condition, Symptom};

    fn sample() -> AudioSample {
        AudioSample::new(vec![0u8; 64], "audio/wav")
    }

    fn at_symptoms() -> Wizard {
        let mut wizard = Wizard::default();
        wizard.accept_disclaimer().unwrap();
        wizard.record_audio(sample()).unwrap();
        wizard.proceed_from_audio().unwrap();
        wizard
    }

    #[test]
    fn test_happy_path() {
        let mut wizard = at_symptoms();
        assert_eq!(wizard.step(), WizardStep::Symptoms);

        wizard
            .submit_symptoms(
                [Symptom::PostCoughVomiting].into(),
                SymptomDuration::new(7).unwrap(),
            )
            .unwrap();
        assert_eq!(wizard.step(), WizardStep::Result);

        let report = wizard.report().unwrap();
        assert_eq!(report.condition, Condition::WhoopingCough);
        assert_eq!(report.confidence, 90.0);
        assert_eq!(report.duration_days, 7);
        assert_eq!(report.session_id, wizard.record().session_id);
    }

    #[test]
    fn test_audio_required() {
        let mut wizard = Wizard::default();
        wizard.accept_disclaimer().unwrap();

        assert!(matches!(wizard.proceed_from_audio(), Err(WizardError::MissingAudio)));
        assert_eq!(wizard.step(), WizardStep::Audio);
    }

    #[test]
    fn test_empty_audio_does_not_unlock_symptoms() {
        let mut wizard = Wizard::default();
        wizard.accept_disclaimer().unwrap();
        wizard
            .record_audio(AudioSample::new(Vec::new(), "audio/wav"))
            .unwrap();

        assert!(matches!(wizard.proceed_from_audio(), Err(WizardError::MissingAudio)));
        assert_eq!(wizard.step(), WizardStep::Audio);

        wizard.record_audio(sample()).unwrap();
        wizard.proceed_from_audio().unwrap();
        assert_eq!(wizard.step(), WizardStep::Symptoms);
    }

    #[test]
    fn test_invalid_transition_leaves_state() {
        let mut wizard = Wizard::default();

        let err = wizard.back().unwrap_err();
        assert!(matches!(
            err,
            WizardError::InvalidTransition { from: WizardStep::Welcome, .. }
        ));
        assert!(wizard.report().is_err());
        assert!(wizard.record_audio(sample()).is_err());
        assert_eq!(wizard.step(), WizardStep::Welcome);
    }

    #[test]
    fn test_back_keeps_audio() {
        let mut wizard = at_symptoms();
        wizard.back().unwrap();
        assert_eq!(wizard.step(), WizardStep::Audio);
        assert!(wizard.record().has_audio());

        wizard.back().unwrap();
        assert_eq!(wizard.step(), WizardStep::Welcome);
    }

    #[test]
    fn test_no_back_from_result() {
        let mut wizard = at_symptoms();
        wizard
            .submit_symptoms(SymptomSet::new(), SymptomDuration::default())
            .unwrap();
        assert!(wizard.back().is_err());
        assert_eq!(wizard.step(), WizardStep::Result);
    }

    #[test]
    fn test_submit_rejects_out_of_catalog() {
        let mut wizard = at_symptoms();
        let err = wizard
            .submit_symptoms([Symptom::Wheeze].into(), SymptomDuration::default())
            .unwrap_err();

        assert!(matches!(
            err,
            WizardError::Scorer(ScorerError::UnknownSymptom { .. })
        ));
        assert_eq!(wizard.step(), WizardStep::Symptoms);
        assert!(wizard.record().symptoms.is_empty());
    }

    #[test]
    fn test_reset_clears_everything() {
        let mut wizard = at_symptoms();
        wizard
            .submit_symptoms(
                [Symptom::MildFever].into(),
                SymptomDuration::new(12).unwrap(),
            )
            .unwrap();
        let old_id = wizard.record().session_id.clone();

        wizard.reset();

        assert_eq!(wizard.step(), WizardStep::Welcome);
        assert!(!wizard.record().has_audio());
        assert!(wizard.record().symptoms.is_empty());
        assert_eq!(wizard.record().duration.days(), 1);
        assert_ne!(wizard.record().session_id, old_id);
    }

    #[test]
    fn test_report_not_cached() {
        let mut wizard = at_symptoms();
        wizard
            .submit_symptoms([Symptom::MildFever].into(), SymptomDuration::default())
            .unwrap();

        let first = wizard.report().unwrap();
        let second = wizard.report().unwrap();
        assert_eq!(first.condition, second.condition);
        assert_eq!(first.confidence, 50.0);
    }

    #[test]
    fn test_error_message() {
        let mut wizard = Wizard::default();
        let err = wizard.proceed_from_audio().unwrap_err();
        assert_eq!(err.to_string(), "Cannot continue past audio from the Home step");
    }
}
