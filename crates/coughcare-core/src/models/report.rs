//! Screening report shown on the result step.

use serde::{Deserialize, Serialize};

use super::condition::Condition;
use super::prediction::Prediction;
use super::session::SessionRecord;

/// Standing disclaimer printed on every report.
pub const DISCLAIMER: &str =
    "This is a preliminary screen and does not replace diagnosis by a doctor.";

/// A rendered-ready screening result.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScreeningReport {
    pub session_id: String,
    pub condition: Condition,
    pub confidence: f64,
    /// Confidence formatted for display (e.g. "90%")
    pub confidence_display: String,
    /// Symptom duration in days, passed through for display
    pub duration_days: u32,
    /// Screening date, YYYY-MM-DD (UTC)
    pub screened_on: String,
    /// Per-condition raw scores in tie-break order
    pub scores: Vec<(Condition, u32)>,
    pub recommendations: Vec<String>,
    pub disclaimer: String,
}

impl ScreeningReport {
    /// Assemble a report dated today.
    pub fn new(record: &SessionRecord, prediction: &Prediction) -> Self {
        Self::dated(record, prediction, chrono::Utc::now().date_naive())
    }

    /// Assemble a report for an explicit date.
    pub fn dated(record: &SessionRecord, prediction: &Prediction, date: chrono::NaiveDate) -> Self {
        Self {
            session_id: record.session_id.clone(),
            condition: prediction.condition,
            confidence: prediction.confidence,
            confidence_display: prediction.confidence_display(),
            duration_days: record.duration.days(),
            screened_on: date.format("%Y-%m-%d").to_string(),
            scores: prediction.scores.iter().collect(),
            recommendations: prediction
                .condition
                .recommendations()
                .iter()
                .map(|line| line.to_string())
                .collect(),
            disclaimer: DISCLAIMER.to_string(),
        }
    }

    /// Headline naming the predicted condition.
    pub fn headline(&self) -> String {
        format!("High risk of: {}", self.condition)
    }

    /// Serialize to JSON.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{ConditionScores, SymptomDuration};

    #[test]
    fn test_report_fields() {
        let mut record = SessionRecord::new();
        record.duration = SymptomDuration::new(5).unwrap();

        let mut scores = ConditionScores::new();
        scores.add(Condition::WhoopingCough, 80);
        let prediction = Prediction::from_scores(scores);

        let date = chrono::NaiveDate::from_ymd_opt(2026, 3, 7).unwrap();
        let report = ScreeningReport::dated(&record, &prediction, date);

        assert_eq!(report.session_id, record.session_id);
        assert_eq!(report.condition, Condition::WhoopingCough);
        assert_eq!(report.confidence_display, "90%");
        assert_eq!(report.duration_days, 5);
        assert_eq!(report.screened_on, "2026-03-07");
        assert_eq!(report.headline(), "High risk of: Whooping Cough");
        assert_eq!(report.recommendations.len(), 2);
        assert_eq!(
            report.scores,
            vec![
                (Condition::Rsv, 10),
                (Condition::WhoopingCough, 90),
                (Condition::Pneumonia, 10)
            ]
        );
    }

    #[test]
    fn test_report_json() {
        let record = SessionRecord::new();
        let prediction = Prediction::from_scores(ConditionScores::new());
        let report = ScreeningReport::new(&record, &prediction);

        let json = report.to_json().unwrap();
        assert!(json.contains("\"condition\": \"rsv\""));
        assert!(json.contains(DISCLAIMER));
    }
}
