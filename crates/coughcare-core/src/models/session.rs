//! Per-session screening data.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::symptom::SymptomSet;

/// Model validation errors.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ModelError {
    #[error("Symptom duration must be between {min} and {max} days, got {0}", min = SymptomDuration::MIN_DAYS, max = SymptomDuration::MAX_DAYS)]
    InvalidDuration(u32),
}

/// How many days symptoms have been present.
///
/// Carried alongside the symptom set for display only; scoring never reads it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u32", into = "u32")]
pub struct SymptomDuration(u32);

impl SymptomDuration {
    pub const MIN_DAYS: u32 = 1;
    pub const MAX_DAYS: u32 = 30;

    /// Initial position of the duration slider on the checklist.
    pub const SLIDER_DEFAULT: SymptomDuration = SymptomDuration(3);

    pub fn new(days: u32) -> Result<Self, ModelError> {
        if (Self::MIN_DAYS..=Self::MAX_DAYS).contains(&days) {
            Ok(Self(days))
        } else {
            Err(ModelError::InvalidDuration(days))
        }
    }

    pub fn days(self) -> u32 {
        self.0
    }
}

impl Default for SymptomDuration {
    fn default() -> Self {
        Self(Self::MIN_DAYS)
    }
}

impl TryFrom<u32> for SymptomDuration {
    type Error = ModelError;

    fn try_from(days: u32) -> Result<Self, Self::Error> {
        Self::new(days)
    }
}

impl From<SymptomDuration> for u32 {
    fn from(duration: SymptomDuration) -> Self {
        duration.0
    }
}

/// A recorded cough sample.
///
/// The bytes are held so the form can acknowledge the recording; nothing
/// reads the audio content.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AudioSample {
    bytes: Vec<u8>,
    mime_type: String,
}

impl AudioSample {
    pub fn new(bytes: Vec<u8>, mime_type: impl Into<String>) -> Self {
        Self {
            bytes,
            mime_type: mime_type.into(),
        }
    }

    pub fn mime_type(&self) -> &str {
        &self.mime_type
    }

    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }
}

/// Everything collected during one pass through the screening form.
#[derive(Debug, Clone, PartialEq)]
pub struct SessionRecord {
    /// Unique session ID
    pub session_id: String,
    /// Creation timestamp (RFC 3339)
    pub started_at: String,
    /// Recorded cough sample, if any
    pub audio: Option<AudioSample>,
    /// Checked symptoms
    pub symptoms: SymptomSet,
    /// Reported symptom duration
    pub duration: SymptomDuration,
}

impl SessionRecord {
    /// Fresh record with no audio, no symptoms and the default duration.
    pub fn new() -> Self {
        Self {
            session_id: uuid::Uuid::new_v4().to_string(),
            started_at: chrono::Utc::now().to_rfc3339(),
            audio: None,
            symptoms: SymptomSet::new(),
            duration: SymptomDuration::default(),
        }
    }

    /// True once a non-empty recording is stored. A zero-byte sample is not a recording.
    pub fn has_audio(&self) -> bool {
        self.audio.as_ref().is_some_and(|sample| !sample.is_empty())
    }
}

impl Default for SessionRecord {
    fn default() -> Self {
        Self::new()
    }
}
