//! Property tests for the symptom scorer.

use proptest::prelude::*;
use proptest::sample::subsequence;

use coughcare_core::scorer::{Predicate, Scorer, ScoringProfile};
use coughcare_core::{Condition, Symptom, SymptomSet, BASE_SCORE, CONFIDENCE_CEILING};

fn profile_strategy() -> impl Strategy<Value = ScoringProfile> {
    prop_oneof![
        Just(ScoringProfile::standard()),
        Just(ScoringProfile::respiratory()),
    ]
}

fn symptoms_strategy() -> impl Strategy<Value = Vec<Symptom>> {
    subsequence(Symptom::ALL.to_vec(), 0..=Symptom::ALL.len()).prop_shuffle()
}

proptest! {
    #[test]
    fn confidence_is_bounded(profile in profile_strategy(), symptoms in symptoms_strategy()) {
        let scorer = Scorer::new(profile);
        let prediction = scorer.score(&symptoms.into_iter().collect());

        prop_assert!(prediction.confidence >= f64::from(BASE_SCORE));
        prop_assert!(prediction.confidence <= CONFIDENCE_CEILING);
    }

    #[test]
    fn prediction_is_the_leader(profile in profile_strategy(), symptoms in symptoms_strategy()) {
        let scorer = Scorer::new(profile);
        let prediction = scorer.score(&symptoms.into_iter().collect());
        let winning = prediction.scores.get(prediction.condition);

        for (condition, score) in prediction.scores.iter() {
            prop_assert!(score <= winning);
            // earlier conditions must have lost strictly
            if condition < prediction.condition {
                prop_assert!(score < winning);
            }
        }
    }

    #[test]
    fn order_does_not_matter(profile in profile_strategy(), symptoms in symptoms_strategy()) {
        let scorer = Scorer::new(profile);
        let forward: SymptomSet = symptoms.iter().copied().collect();
        let backward: SymptomSet = symptoms.iter().rev().copied().collect();

        prop_assert_eq!(scorer.score(&forward), scorer.score(&backward));
    }

    #[test]
    fn adding_a_symptom_is_monotonic(
        profile in profile_strategy(),
        symptoms in symptoms_strategy(),
        extra in proptest::sample::select(Symptom::ALL.to_vec()),
    ) {
        let scorer = Scorer::new(profile.clone());
        let before_set: SymptomSet = symptoms.into_iter().filter(|s| *s != extra).collect();
        let mut after_set = before_set.clone();
        after_set.insert(extra);

        let before = scorer.score(&before_set).scores;
        let after = scorer.score(&after_set).scores;

        for condition in Condition::ALL {
            let rules: Vec<_> = profile
                .rules_for(extra)
                .filter(|r| r.condition == condition)
                .collect();

            if rules.is_empty() {
                prop_assert_eq!(before.get(condition), after.get(condition));
            } else if rules.iter().all(|r| matches!(r.when, Predicate::Present(_))) {
                prop_assert!(after.get(condition) >= before.get(condition));
            }
        }
    }

    #[test]
    fn duplicates_do_not_double_count(profile in profile_strategy(), symptoms in symptoms_strategy()) {
        let scorer = Scorer::new(profile);
        let once: SymptomSet = symptoms.iter().copied().collect();
        let twice: SymptomSet = symptoms.iter().chain(symptoms.iter()).copied().collect();

        prop_assert_eq!(scorer.score(&once), scorer.score(&twice));
    }
}
