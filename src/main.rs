use anyhow::Context;
use attention_drop::{
    config::{ConfigStore, FileConfigStore},
    input::{load_session, read_session, InputFormat},
    report::DropReport,
    DropMethod,
};
use clap::Parser;
use std::{
    io::{self, Write},
    path::PathBuf,
};

/// find the moment attention dropped in a scored engagement session
#[derive(Parser, Debug, Clone)]
#[clap(
    version,
    about,
    long_about = "Reads one session of timestamped engagement scores (JSON array or CSV) and prints the point where attention dropped as JSON, or null when there is none."
)]
pub struct Cli {
    /// session file to read; `-` or nothing reads stdin
    input: Option<PathBuf>,

    /// how to pick the drop moment (default from config, otherwise min)
    #[clap(short = 'm', long, value_enum)]
    method: Option<DropMethod>,

    /// minimum decline between two samples for largest-drop (default from config, otherwise 0.5)
    #[clap(short = 't', long, allow_hyphen_values = true)]
    threshold: Option<f64>,

    /// input format; inferred from the file extension, json for stdin
    #[clap(short = 'f', long, value_enum)]
    format: Option<InputFormat>,

    /// print session mean and standard deviation alongside the drop moment
    #[clap(long)]
    summary: bool,

    /// config file to read defaults from
    #[clap(short = 'c', long)]
    config: Option<PathBuf>,
}

fn main() -> anyhow::Result<()> {
    env_logger::Builder::new()
        .filter_level(log::LevelFilter::Warn)
        .parse_default_env()
        .init();

    let cli = Cli::parse();

    let store = match &cli.config {
        Some(path) => {
            anyhow::ensure!(path.exists(), "config file {} not found", path.display());
            FileConfigStore::with_path(path)
        }
        None => FileConfigStore::new(),
    };
    let config = store.load();
    log::debug!("config from {}: {:?}", store.path().display(), config);

    let detector = config.detector(cli.method, cli.threshold);

    let session = match cli.input.as_deref() {
        Some(path) if path.as_os_str() != "-" => load_session(path, cli.format)
            .with_context(|| format!("could not load session from {}", path.display()))?,
        _ => read_session(io::stdin().lock(), cli.format.unwrap_or(InputFormat::Json))
            .context("could not load session from stdin")?,
    };

    let output = if cli.summary {
        serde_json::to_string_pretty(&DropReport::build(&detector, &session))?
    } else {
        serde_json::to_string_pretty(&detector.detect(&session))?
    };

    let mut stdout = io::stdout().lock();
    writeln!(stdout, "{}", output)?;

    Ok(())
}
