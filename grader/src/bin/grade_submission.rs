use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Parser;
use grader::GradingJob;
use serde_json::Value;
use tracing_appender::rolling;
use util::config;
use util::grading_config::GradingOptions;

#[derive(Parser, Debug)]
#[command(version, about = "Grade one submission and print the report as JSON")]
struct Args {
    /// Payload file: `{ "questions": [...], "answers": {...}, "submissionId": "..." }`
    payload: PathBuf,
    /// Grading options JSON. Defaults to $GRADING_CONFIG, then built-in defaults.
    #[arg(long)]
    options: Option<PathBuf>,
    /// Print compact JSON instead of pretty-printed.
    #[arg(long)]
    compact: bool,
}

fn main() -> Result<()> {
    let _log_guard = init_logging(&config::log_dir(), &config::log_file());
    let args = Args::parse();

    let options = match args
        .options
        .clone()
        .or_else(|| config::grading_config_path().map(PathBuf::from))
    {
        Some(path) => GradingOptions::load(&path).map_err(anyhow::Error::msg)?,
        None => GradingOptions::default_config(),
    };

    let payload = read_payload(&args.payload)?;
    let mut job = GradingJob::from_json(&payload.questions, &payload.answers, options)
        .with_context(|| format!("invalid payload {}", args.payload.display()))?;
    if let Some(id) = payload.submission_id {
        job = job.with_submission_id(id);
    }

    let response = job.grade();
    let out = if args.compact {
        serde_json::to_string(&response)?
    } else {
        serde_json::to_string_pretty(&response)?
    };
    println!("{out}");
    Ok(())
}

/// The parts of a payload file the grading job needs.
#[derive(Debug)]
struct Payload {
    questions: Value,
    /// An empty object when the payload has no `answers`.
    answers: Value,
    submission_id: Option<String>,
}

impl Payload {
    fn from_value(value: Value) -> Result<Self> {
        let Value::Object(mut fields) = value else {
            anyhow::bail!("payload must be a JSON object");
        };
        let questions = fields
            .remove("questions")
            .context("payload is missing \"questions\"")?;
        let answers = fields
            .remove("answers")
            .unwrap_or_else(|| Value::Object(Default::default()));
        let submission_id = fields
            .get("submissionId")
            .or_else(|| fields.get("submission_id"))
            .and_then(Value::as_str)
            .map(str::to_string);

        Ok(Payload {
            questions,
            answers,
            submission_id,
        })
    }
}

fn read_payload(path: &Path) -> Result<Payload> {
    let raw = fs::read_to_string(path).with_context(|| format!("failed to read {}", path.display()))?;
    let value: Value =
        serde_json::from_str(&raw).with_context(|| format!("{} is not valid JSON", path.display()))?;
    Payload::from_value(value).with_context(|| format!("invalid payload {}", path.display()))
}

fn init_logging(log_dir: &str, log_file: &str) -> tracing_appender::non_blocking::WorkerGuard {
    use tracing_subscriber::{EnvFilter, fmt, prelude::*};

    fs::create_dir_all(log_dir).ok();

    let file_appender = rolling::daily(log_dir, log_file);
    let (file_writer, guard) = tracing_appender::non_blocking(file_appender);

    let file_layer = fmt::layer()
        .with_writer(file_writer)
        .with_ansi(false)
        .with_target(true)
        .with_thread_ids(true);

    // stdout carries the report, so console logs go to stderr
    let console_layer = config::log_to_stdout().then(|| {
        fmt::layer()
            .with_writer(std::io::stderr)
            .with_ansi(true)
            .with_target(true)
    });

    let env_filter = EnvFilter::try_new(config::log_level())
        .unwrap_or_else(|_| EnvFilter::new("grader=info"));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(file_layer)
        .with(console_layer)
        .init();

    guard
}
