//! Plain-text rendering for terminal output.

use std::fmt::Write;

use coughcare_core::{ScoringProfile, ScreeningReport};

/// Render a screening report.
pub fn report_text(report: &ScreeningReport) -> String {
    let mut out = String::new();

    let _ = writeln!(out, "Screening Report ({})", report.screened_on);
    let _ = writeln!(out, "{}", report.headline());
    let _ = writeln!(out, "Confidence: {}", report.confidence_display);
    let _ = writeln!(out, "Symptom duration: {} day(s)", report.duration_days);
    out.push('\n');

    out.push_str("Scores:\n");
    for (condition, score) in &report.scores {
        let _ = writeln!(out, "  {:<15} {:>4}", condition.display_name(), score);
    }
    out.push('\n');

    out.push_str("Recommendation:\n");
    for line in &report.recommendations {
        let _ = writeln!(out, "  - {}", line);
    }
    out.push('\n');

    let _ = writeln!(out, "{}", report.disclaimer);
    out
}

/// Render the checklist offered by a profile.
pub fn catalog_text(profile: &ScoringProfile) -> String {
    let mut out = format!("Profile: {}\n", profile.name);
    for symptom in &profile.catalog {
        let _ = writeln!(
            out,
            "  {:<22} {:<24} {}",
            symptom.id(),
            symptom.label(),
            symptom.thai_label()
        );
    }
    out
}
