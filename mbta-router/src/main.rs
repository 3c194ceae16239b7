use std::process::ExitCode;

use tokio::io::{AsyncBufReadExt, BufReader};
use tracing_subscriber::EnvFilter;

use mbta_router::mbta::{MbtaClient, MbtaConfig, MbtaError, SnapshotClient};
use mbta_router::network::{RouteProvider, StopProvider};
use mbta_router::planner::{InvalidStrategy, SearchConfig};
use mbta_router::queries::{self, QueryError};

#[derive(Debug, thiserror::Error)]
enum CliError {
    #[error(transparent)]
    Query(#[from] QueryError),

    #[error(transparent)]
    Client(#[from] MbtaError),

    #[error(transparent)]
    Strategy(#[from] InvalidStrategy),

    #[error("invalid MBTA_TIMEOUT_SECS: {0}")]
    Timeout(String),

    #[error("failed to read input: {0}")]
    Io(#[from] std::io::Error),
}

#[tokio::main]
async fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    match run().await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}

async fn run() -> Result<(), CliError> {
    let search_config = match std::env::var("MBTA_SEARCH") {
        Ok(s) => SearchConfig::default().with_strategy(s.parse()?),
        Err(_) => SearchConfig::default(),
    };

    // Offline mode: serve everything from a snapshot file
    if let Ok(path) = std::env::var("MBTA_SNAPSHOT") {
        let client = SnapshotClient::load(&path)?;
        return report(&client, &search_config).await;
    }

    let api_key = std::env::var("MBTA_API_KEY").ok();
    if api_key.is_none() {
        tracing::warn!("MBTA_API_KEY not set; requests will be rate limited");
    }

    let mut config = MbtaConfig::new(api_key);
    if let Ok(url) = std::env::var("MBTA_BASE_URL") {
        config = config.with_base_url(url);
    }
    if let Ok(secs) = std::env::var("MBTA_TIMEOUT_SECS") {
        let secs = secs.parse().map_err(|_| CliError::Timeout(secs))?;
        config = config.with_timeout(secs);
    }

    let client = MbtaClient::new(config)?;
    report(&client, &search_config).await
}

async fn report<P>(provider: &P, config: &SearchConfig) -> Result<(), CliError>
where
    P: RouteProvider + StopProvider,
{
    let names = queries::list_rail_routes(provider).await?;
    println!("The Heavy Rail and Light Rail Routes are:");
    for name in names {
        println!("{name}");
    }
    println!();

    let stats = queries::stop_statistics(provider).await?;
    let summary = &stats.summary;
    println!("Route with the minimum number of stops:");
    println!("{} (with {} stops)", summary.min_route, summary.min_count);
    println!("Route with the maximum number of stops:");
    println!("{} (with {} stops)", summary.max_route, summary.max_count);
    println!();

    println!("The following stops connect multiple routes:");
    for interchange in &stats.interchanges {
        println!(
            "Stop {} connects routes: {}",
            interchange.stop,
            interchange.route_names()
        );
    }
    println!();

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    let start = prompt(&mut lines, "Enter Starting Stop").await?;
    let end = prompt(&mut lines, "Enter Ending Stop").await?;

    let routes = queries::route_between(provider, &start, &end, config).await?;
    if routes.is_empty() {
        println!("The path from {start} to {end} is to take no routes, as they are the same stop.");
    } else {
        println!("Take the following routes to get from {start} to {end}:");
        for route in routes {
            println!("{route}");
        }
    }

    Ok(())
}

/// Print `message` and read one trimmed line.
///
/// End of input is an error rather than an empty answer.
async fn prompt<R>(
    lines: &mut tokio::io::Lines<R>,
    message: &str,
) -> Result<String, std::io::Error>
where
    R: tokio::io::AsyncBufRead + Unpin,
{
    println!("{message}");
    let line = lines.next_line().await?.ok_or_else(|| {
        std::io::Error::new(std::io::ErrorKind::UnexpectedEof, "no answer on stdin")
    })?;
    Ok(line.trim().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn prompt_trims_answer() {
        let mut lines = BufReader::new(&b"  Park Street \nAlewife\n"[..]).lines();

        assert_eq!(prompt(&mut lines, "first").await.unwrap(), "Park Street");
        assert_eq!(prompt(&mut lines, "second").await.unwrap(), "Alewife");
    }

    #[tokio::test]
    async fn prompt_fails_at_end_of_input() {
        let mut lines = BufReader::new(&b"Alewife\n"[..]).lines();

        prompt(&mut lines, "first").await.unwrap();
        let err = prompt(&mut lines, "second").await.unwrap_err();
        assert_eq!(err.kind(), std::io::ErrorKind::UnexpectedEof);
        assert_eq!(
            CliError::from(err).to_string(),
            "failed to read input: no answer on stdin"
        );
    }
}
