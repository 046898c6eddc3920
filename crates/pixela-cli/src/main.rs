//! Pixela CLI — entry point.

use clap::Parser;

use pixela::PixelaClient;
use pixela_cli::cli::{completion_script, execute, Cli, Commands};
use pixela_cli::config::{load_dotenv, resolve_credentials, resolve_endpoint};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&cli.log_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    if let Commands::Completions { shell } = cli.command {
        print!("{}", completion_script(shell));
        return Ok(());
    }

    load_dotenv();
    let credentials = resolve_credentials();
    let endpoint = resolve_endpoint(cli.endpoint.as_deref());
    tracing::debug!("Endpoint: {endpoint}");

    let client = PixelaClient::with_endpoint(endpoint, credentials);
    let outcome = execute(&cli.command, &client).await?;
    println!("{}", outcome.text());

    Ok(())
}
