use std::fs::File;
use std::io::{Read, Write};
use std::path::PathBuf;
use std::sync::Arc;

use clap::{Args, ValueEnum};
use scholarship_scoring::config::ScoringSettings;
use scholarship_scoring::error::AppError;
use scholarship_scoring::scoring::engine::rules::MAX_CONTENT_POINTS;
use scholarship_scoring::scoring::{
    ApplicantImporter, ApplicantRecord, ContentAssessor, EvaluationView, FixedContentAssessor,
    InMemoryApplicantRepository, ScoringEngine, ScoringService, SimulatedContentAssessor,
};
use serde_json::json;
use tracing::{info, warn};

type DynEngine = ScoringEngine<Box<dyn ContentAssessor>>;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub(crate) enum OutputFormat {
    #[default]
    Text,
    Json,
}

#[derive(Args, Debug, Default)]
pub(crate) struct ScoringArgs {
    /// Fixed content-quality points (0-70) instead of the simulated assessment
    #[arg(long, value_parser = parse_content_score)]
    pub(crate) content_score: Option<f64>,
    /// Seed for the simulated assessment (overrides SCORING_CONTENT_SEED)
    #[arg(long)]
    pub(crate) seed: Option<u64>,
    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub(crate) format: OutputFormat,
}

#[derive(Args, Debug)]
pub(crate) struct EvaluateArgs {
    /// JSON file holding one applicant record
    #[arg(long)]
    pub(crate) input: PathBuf,
    #[command(flatten)]
    pub(crate) scoring: ScoringArgs,
}

#[derive(Args, Debug)]
pub(crate) struct BatchArgs {
    /// CSV export of applications
    #[arg(long)]
    pub(crate) csv: PathBuf,
    /// Score applications even when the grade or motivation letter is missing
    #[arg(long)]
    pub(crate) allow_incomplete: bool,
    /// Maximum number of applications to score
    #[arg(long)]
    pub(crate) limit: Option<usize>,
    #[command(flatten)]
    pub(crate) scoring: ScoringArgs,
}

fn parse_content_score(raw: &str) -> Result<f64, String> {
    let value: f64 = raw
        .trim()
        .parse()
        .map_err(|err| format!("'{raw}' is not a number ({err})"))?;
    if (0.0..=MAX_CONTENT_POINTS).contains(&value) {
        Ok(value)
    } else {
        Err(format!("content score must lie in 0-{MAX_CONTENT_POINTS}"))
    }
}

fn build_engine(args: &ScoringArgs, settings: &ScoringSettings) -> DynEngine {
    let assessor: Box<dyn ContentAssessor> = match args.content_score {
        Some(points) => Box::new(FixedContentAssessor(points)),
        None => {
            let seed = args.seed.or(settings.content_seed);
            if seed.is_none() {
                warn!("content assessment is simulated without a seed; scores are not reproducible");
            }
            Box::new(SimulatedContentAssessor::from_seed(seed))
        }
    };
    ScoringEngine::new(assessor)
}

pub(crate) fn run_evaluate<W: Write>(
    args: EvaluateArgs,
    settings: &ScoringSettings,
    out: &mut W,
) -> Result<(), AppError> {
    let file = File::open(&args.input)?;
    evaluate_from_reader(file, &args.scoring, settings, out)
}

pub(crate) fn run_batch<W: Write>(
    args: BatchArgs,
    settings: &ScoringSettings,
    out: &mut W,
) -> Result<(), AppError> {
    let file = File::open(&args.csv)?;
    batch_from_reader(file, &args, settings, out)
}

fn evaluate_from_reader<R: Read, W: Write>(
    reader: R,
    scoring: &ScoringArgs,
    settings: &ScoringSettings,
    out: &mut W,
) -> Result<(), AppError> {
    let record: ApplicantRecord = serde_json::from_reader(reader)?;
    if !record.is_complete() {
        warn!("record lacks a grade or motivation letter; missing fields score zero");
    }

    let result = build_engine(scoring, settings).evaluate(&record);
    let view = EvaluationView::from_result(&result);

    match scoring.format {
        OutputFormat::Text => write!(out, "{}", view.render_text())?,
        OutputFormat::Json => writeln!(out, "{}", serde_json::to_string_pretty(&view)?)?,
    }
    Ok(())
}

fn batch_from_reader<R: Read, W: Write>(
    reader: R,
    args: &BatchArgs,
    settings: &ScoringSettings,
    out: &mut W,
) -> Result<(), AppError> {
    let repository = Arc::new(InMemoryApplicantRepository::new());
    let imported = ApplicantImporter::load_into(repository.as_ref(), reader)?;

    let service = ScoringService::new(
        repository.clone(),
        Arc::new(build_engine(&args.scoring, settings)),
    )
    .require_complete(settings.require_complete && !args.allow_incomplete);

    let outcome = service.evaluate_pending(args.limit.unwrap_or(usize::MAX))?;
    info!(
        imported,
        evaluated = outcome.evaluated.len(),
        skipped = outcome.skipped.len(),
        "batch scoring finished"
    );

    let views: Vec<EvaluationView> = repository
        .all()
        .iter()
        .filter_map(EvaluationView::for_applicant)
        .collect();

    match args.scoring.format {
        OutputFormat::Json => {
            let payload = json!({
                "imported": imported,
                "evaluated": views,
                "skipped": outcome.skipped,
            });
            writeln!(out, "{}", serde_json::to_string_pretty(&payload)?)?;
        }
        OutputFormat::Text => {
            writeln!(
                out,
                "Scored {} of {} applications",
                views.len(),
                imported
            )?;
            for view in &views {
                write!(out, "\n{}", view.render_text())?;
            }
            if !outcome.skipped.is_empty() {
                let ids: Vec<String> = outcome.skipped.iter().map(ToString::to_string).collect();
                writeln!(out, "\nSkipped (incomplete): {}", ids.join(", "))?;
            }
        }
    }
    Ok(())
}
