//! Wizard steps and the progress indicator.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A screen of the screening form, in order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WizardStep {
    /// Welcome and disclaimer
    Welcome,
    /// Cough recording
    Audio,
    /// Symptom checklist and duration slider
    Symptoms,
    /// Screening report
    Result,
}

impl WizardStep {
    pub const ALL: [WizardStep; 4] = [
        WizardStep::Welcome,
        WizardStep::Audio,
        WizardStep::Symptoms,
        WizardStep::Result,
    ];

    /// Zero-based position in the form.
    pub fn index(self) -> usize {
        match self {
            WizardStep::Welcome => 0,
            WizardStep::Audio => 1,
            WizardStep::Symptoms => 2,
            WizardStep::Result => 3,
        }
    }

    /// Stable snake_case identifier, the same string serde writes.
    pub fn id(self) -> &'static str {
        match self {
            WizardStep::Welcome => "welcome",
            WizardStep::Audio => "audio",
            WizardStep::Symptoms => "symptoms",
            WizardStep::Result => "result",
        }
    }

    /// Label shown next to the progress bar.
    pub fn label(self) -> &'static str {
        match self {
            WizardStep::Welcome => "Home",
            WizardStep::Audio => "Audio Analysis",
            WizardStep::Symptoms => "Symptom Check",
            WizardStep::Result => "Result",
        }
    }

    pub fn progress(self) -> Progress {
        let last = (Self::ALL.len() - 1) as f64;
        Progress {
            step: self,
            fraction: self.index() as f64 / last,
        }
    }
}

impl fmt::Display for WizardStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Progress bar state.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Progress {
    pub step: WizardStep,
    /// 0.0 on the first step, 1.0 on the last
    pub fraction: f64,
}
