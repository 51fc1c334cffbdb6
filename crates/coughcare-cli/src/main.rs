use std::path::PathBuf;

use anyhow::Context;
use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use coughcare_core::scorer::{LabelResolver, Scorer, ScoringProfile, DEFAULT_PROFILE};
use coughcare_core::{ScreeningReport, SessionRecord, SymptomDuration};

mod render;

/// Log filter used when `RUST_LOG` is unset or unparsable.
const DEFAULT_LOG_FILTER: &str = "coughcare=info";

#[derive(Parser)]
#[command(name = "coughcare")]
#[command(about = "CoughCareKids preliminary respiratory screening")]
struct Cli {
    /// Built-in scoring profile (standard, respiratory)
    #[arg(long, global = true, env = "COUGHCARE_PROFILE", default_value = DEFAULT_PROFILE)]
    profile: String,

    /// Custom scoring profile as JSON; overrides --profile
    #[arg(long, global = true)]
    profile_file: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Score checked symptoms and print the screening report
    Score {
        /// Symptom labels (id, English or Thai label)
        symptoms: Vec<String>,
        /// Days the symptoms have lasted (1-30)
        #[arg(long, default_value_t = SymptomDuration::SLIDER_DEFAULT.days())]
        duration: u32,
        /// Print the report as JSON
        #[arg(long)]
        json: bool,
    },
    /// List the symptom checklist of the active profile
    Catalog,
    /// Print the active profile as JSON
    ExportProfile,
}

fn main() -> anyhow::Result<()> {
    let rust_log = std::env::var(EnvFilter::DEFAULT_ENV).ok();
    tracing_subscriber::registry()
        .with(log_filter(rust_log.as_deref()))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();
    let profile = load_profile(&cli)?;

    match cli.command {
        Commands::Score {
            symptoms,
            duration,
            json,
        } => {
            let report = score_report(profile, &symptoms, duration)?;

            if json {
                println!("{}", report.to_json()?);
            } else {
                print!("{}", render::report_text(&report));
            }
        }
        Commands::Catalog => {
            print!("{}", render::catalog_text(&profile));
        }
        Commands::ExportProfile => {
            println!("{}", profile.to_json()?);
        }
    }

    Ok(())
}

/// `RUST_LOG` directives when present, otherwise [`DEFAULT_LOG_FILTER`].
fn log_filter(directives: Option<&str>) -> EnvFilter {
    directives
        .filter(|d| !d.trim().is_empty())
        .and_then(|d| EnvFilter::try_new(d).ok())
        .unwrap_or_else(|| EnvFilter::new(DEFAULT_LOG_FILTER))
}

/// Score labels straight into a report.
///
/// There is no recording step on the command line, so this skips the wizard
/// and its audio gate and fills a session record directly.
fn score_report(
    profile: ScoringProfile,
    labels: &[String],
    days: u32,
) -> anyhow::Result<ScreeningReport> {
    let scorer = Scorer::new(profile);
    let resolver = LabelResolver::for_profile(scorer.profile());

    let mut record = SessionRecord::new();
    record.symptoms = resolver.resolve_all(labels)?;
    record.duration = SymptomDuration::new(days)?;

    let prediction = scorer.score_checked(&record.symptoms)?;
    Ok(ScreeningReport::new(&record, &prediction))
}

fn load_profile(cli: &Cli) -> anyhow::Result<ScoringProfile> {
    let profile = match &cli.profile_file {
        Some(path) => ScoringProfile::load(path)
            .with_context(|| format!("failed to load profile from {}", path.display()))?,
        None => ScoringProfile::builtin(&cli.profile)?,
    };

    tracing::debug!(
        profile = %profile.name,
        rules = profile.rules.len(),
        "scoring profile loaded"
    );
    Ok(profile)
}
