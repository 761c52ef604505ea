use crate::commands::{run_batch, run_evaluate, BatchArgs, EvaluateArgs};
use clap::{Parser, Subcommand};
use scholarship_scoring::config::ScoringConfig;
use scholarship_scoring::error::AppError;
use scholarship_scoring::telemetry;
use tracing::debug;

#[derive(Parser, Debug)]
#[command(
    name = "scholarship-scoring-cli",
    about = "Score scholarship applications against the committee rubric",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Score a single applicant record read from a JSON file
    Evaluate(EvaluateArgs),
    /// Import applications from a CSV export and score every pending one
    Batch(BatchArgs),
}

pub(crate) fn run() -> Result<(), AppError> {
    let cli = Cli::parse();
    let config = ScoringConfig::load()?;
    telemetry::init(&config.telemetry)?;
    debug!(environment = ?config.environment, "configuration loaded");

    let mut stdout = std::io::stdout().lock();
    match cli.command {
        Command::Evaluate(args) => run_evaluate(args, &config.scoring, &mut stdout),
        Command::Batch(args) => run_batch(args, &config.scoring, &mut stdout),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn parses_batch_flags() {
        let cli = Cli::try_parse_from([
            "scholarship-scoring-cli",
            "batch",
            "--csv",
            "applicants.csv",
            "--content-score",
            "55",
            "--allow-incomplete",
            "--format",
            "json",
        ])
        .expect("arguments parse");

        match cli.command {
            Command::Batch(args) => {
                assert!(args.allow_incomplete);
                assert_eq!(args.scoring.content_score, Some(55.0));
            }
            other => panic!("expected batch command, got {other:?}"),
        }
    }

    #[test]
    fn rejects_content_score_outside_band() {
        let result = Cli::try_parse_from([
            "scholarship-scoring-cli",
            "evaluate",
            "--input",
            "record.json",
            "--content-score",
            "90",
        ]);
        assert!(result.is_err());
    }
}
