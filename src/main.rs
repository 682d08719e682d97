//! tubesearch command-line entry point

use chrono::Utc;
use std::io;
use std::process::ExitCode;
use std::sync::Arc;
use tracing::info;
use tracing_subscriber::{EnvFilter, FmtSubscriber};
use tubesearch::{
    api::YouTubeClient,
    config::{self, Settings},
    network::HttpClient,
    Search, SearchResult,
};

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    match run().await {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("{}", err.report());
            ExitCode::FAILURE
        }
    }
}

async fn run() -> SearchResult<()> {
    let path = config::locate();
    let settings = config::load_from(path.as_deref())?;
    init_logging(&settings);

    match path {
        Some(ref path) => info!("Loaded settings from: {}", path.display()),
        None => info!("No settings file found, using defaults"),
    }
    settings.validate()?;

    info!(
        "tubesearch v{} using {} presentation",
        tubesearch::VERSION,
        match settings.search.presentation {
            config::Presentation::Ranked => "ranked",
            config::Presentation::AsReturned => "as-returned",
        }
    );

    let client = HttpClient::with_settings(&settings.outgoing)?;
    let service = Arc::new(YouTubeClient::new(client, &settings.api));
    let search = Search::new(service, settings.search.clone());

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut input = stdin.lock();
    let mut output = stdout.lock();

    search.run(&mut input, &mut output, Utc::now()).await?;

    Ok(())
}

/// Logs go to stderr so stdout carries only the listing
fn init_logging(settings: &Settings) {
    let default_level = if settings.general.debug { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    FmtSubscriber::builder()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(io::stderr)
        .init();
}
