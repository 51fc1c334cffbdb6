//! Scoring output models.

use serde::{Deserialize, Serialize};

use super::condition::Condition;

/// Score every condition starts from before any rule fires.
pub const BASE_SCORE: u32 = 10;

/// Reported confidence never exceeds this value.
pub const CONFIDENCE_CEILING: f64 = 98.5;

/// Accumulated integer score per condition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConditionScores {
    scores: [u32; 3],
}

impl Default for ConditionScores {
    fn default() -> Self {
        Self::new()
    }
}

impl ConditionScores {
    /// All conditions at [`BASE_SCORE`].
    pub fn new() -> Self {
        Self {
            scores: [BASE_SCORE; 3],
        }
    }

    pub fn get(&self, condition: Condition) -> u32 {
        self.scores[condition.index()]
    }

    pub fn add(&mut self, condition: Condition, weight: u32) {
        let slot = &mut self.scores[condition.index()];
        *slot = slot.saturating_add(weight);
    }

    /// Iterate in tie-break order.
    pub fn iter(&self) -> impl Iterator<Item = (Condition, u32)> + '_ {
        Condition::ALL.iter().map(move |&c| (c, self.get(c)))
    }

    /// Condition with the strictly greatest score; ties go to the earlier condition.
    pub fn leader(&self) -> (Condition, u32) {
        let mut best = (Condition::ALL[0], self.get(Condition::ALL[0]));
        for (condition, score) in self.iter().skip(1) {
            if score > best.1 {
                best = (condition, score);
            }
        }
        best
    }
}

/// Predicted condition with its clamped confidence.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Prediction {
    pub condition: Condition,
    /// Raw score of the predicted condition, clamped at [`CONFIDENCE_CEILING`].
    /// A clamped point total, not a probability.
    pub confidence: f64,
    /// Full breakdown the prediction was taken from.
    pub scores: ConditionScores,
}

impl Prediction {
    /// Build the prediction from a finished score table.
    pub fn from_scores(scores: ConditionScores) -> Self {
        let (condition, score) = scores.leader();
        Self {
            condition,
            confidence: clamp_confidence(score),
            scores,
        }
    }

    /// Confidence rendered for display, e.g. `"90%"` or `"98.5%"`.
    pub fn confidence_display(&self) -> String {
        format!("{}%", self.confidence)
    }

    /// Whether the raw score hit the ceiling.
    pub fn is_capped(&self) -> bool {
        f64::from(self.scores.get(self.condition)) > CONFIDENCE_CEILING
    }
}

fn clamp_confidence(score: u32) -> f64 {
    f64::from(score).min(CONFIDENCE_CEILING)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_leader_prefers_first_on_tie() {
        let scores = ConditionScores::new();
        assert_eq!(scores.leader(), (Condition::Rsv, BASE_SCORE));

        let mut scores = ConditionScores::new();
        scores.add(Condition::WhoopingCough, 20);
        scores.add(Condition::Pneumonia, 20);
        assert_eq!(scores.leader(), (Condition::WhoopingCough, 30));
    }

    #[test]
    fn test_confidence_clamped() {
        let mut scores = ConditionScores::new();
        scores.add(Condition::Pneumonia, 100);
        let prediction = Prediction::from_scores(scores);

        assert_eq!(prediction.condition, Condition::Pneumonia);
        assert_eq!(prediction.confidence, 98.5);
        assert!(prediction.is_capped());
        assert_eq!(prediction.confidence_display(), "98.5%");
    }

    #[test]
    fn test_confidence_unclamped_below_ceiling() {
        let mut scores = ConditionScores::new();
        scores.add(Condition::Rsv, 80);
        let prediction = Prediction::from_scores(scores);

        assert_eq!(prediction.confidence, 90.0);
        assert!(!prediction.is_capped());
        assert_eq!(prediction.confidence_display(), "90%");
    }
}
