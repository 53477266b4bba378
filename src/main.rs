use clap::builder::RangedU64ValueParser;
use clap::Parser;
use std::io::Write;
use std::path::PathBuf;
use std::process::ExitCode;
use taskify_ranker::config::{LogFormat, Settings};
use taskify_ranker::models::{ErrorResponse, RankRequest, RankResponse};
use taskify_ranker::services::{LoaderError, RequestLoader};
use taskify_ranker::CompatibilityRanker;
use thiserror::Error;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

/// Rank candidate workers for a task
#[derive(Parser, Debug)]
#[command(name = "taskify-rank")]
#[command(version)]
#[command(about, long_about = None)]
struct Cli {
    /// Ranking request JSON file (reads stdin when omitted)
    #[arg(value_name = "REQUEST")]
    request: Option<PathBuf>,

    /// Maximum number of candidates to return (at least 1)
    #[arg(short, long, value_parser = RangedU64ValueParser::<usize>::new().range(1..))]
    limit: Option<usize>,

    /// Configuration file (defaults to config/default + config/local)
    #[arg(short, long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Pretty-print the JSON output
    #[arg(long)]
    pretty: bool,
}

#[derive(Debug, Error)]
enum CliError {
    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),

    #[error(transparent)]
    Load(#[from] LoaderError),

    #[error("Failed to serialize response: {0}")]
    Output(#[from] serde_json::Error),

    #[error("Failed to write response: {0}")]
    Io(#[from] std::io::Error),
}

impl CliError {
    fn kind(&self) -> &'static str {
        match self {
            CliError::Config(_) => "invalid_config",
            CliError::Load(e) => e.kind(),
            CliError::Output(_) => "serialization_error",
            CliError::Io(_) => "io_error",
        }
    }
}

fn main() -> ExitCode {
    // Load .env file if present
    dotenv::dotenv().ok();

    let cli = Cli::parse();

    let settings = match &cli.config {
        Some(path) => Settings::load_from(path),
        None => Settings::load(),
    };

    // Logging is configured from settings, so fall back to defaults until they load
    init_logging(settings.as_ref().unwrap_or(&Settings::default()));

    let run_id = uuid::Uuid::new_v4();
    let span = tracing::info_span!("rank", %run_id);
    let _guard = span.enter();

    let result = settings
        .map_err(CliError::from)
        .and_then(|settings| run(&cli, &settings));

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("Ranking failed: {}", e);
            let response = ErrorResponse {
                error: e.kind().to_string(),
                message: e.to_string(),
            };
            if let Ok(json) = serde_json::to_string(&response) {
                eprintln!("{}", json);
            }
            ExitCode::FAILURE
        }
    }
}

fn init_logging(settings: &Settings) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&settings.logging.level));

    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_level(true);

    match settings.logging.log_format() {
        LogFormat::Json => subscriber.json().init(),
        LogFormat::Pretty => subscriber.pretty().init(),
        LogFormat::Compact => subscriber.compact().init(),
    }
}

fn run(cli: &Cli, settings: &Settings) -> Result<(), CliError> {
    let request = match &cli.request {
        Some(path) => RequestLoader::from_path(path)?,
        None => RequestLoader::from_reader(std::io::stdin().lock())?,
    };

    let limit = resolve_limit(cli.limit, &request, settings);
    let ranker = CompatibilityRanker::new(settings.scoring_weights());

    info!(
        "Ranking {} candidates for task {:?} (limit {}, weights {:?})",
        request.candidates.len(),
        request.task.title,
        limit,
        ranker.weights()
    );

    let result = ranker.rank_top(&request.task, &request.candidates, limit);

    let response = RankResponse {
        candidates: result.candidates,
        total_candidates: result.total_candidates,
        eligible_candidates: result.eligible_candidates,
    };

    info!(
        "Returning {} candidates (from {} eligible, {} total)",
        response.candidates.len(),
        response.eligible_candidates,
        response.total_candidates
    );

    let json = if cli.pretty {
        serde_json::to_string_pretty(&response)?
    } else {
        serde_json::to_string(&response)?
    };

    let mut stdout = std::io::stdout().lock();
    writeln!(stdout, "{}", json)?;
    Ok(())
}

/// Command-line limit wins over the request's own, then the configured default
fn resolve_limit(cli_limit: Option<usize>, request: &RankRequest, settings: &Settings) -> usize {
    cli_limit
        .or(request.limit)
        .unwrap_or(settings.ranking.default_limit)
        .min(settings.ranking.max_limit)
}
