//! linkedsky - share a link post to LinkedIn and Bluesky
#![allow(clippy::uninlined_format_args)]

use std::process::ExitCode;

use anyhow::{Context, Result};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use linkedsky::{Client, Config, prompt::Prompter, publish};

#[tokio::main]
async fn main() -> Result<ExitCode> {
    // Initialize logging (RUST_LOG=debug shows API responses)
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    match parse_args()? {
        Command::Run => run().await,
        Command::Help => {
            print_help();
            Ok(ExitCode::SUCCESS)
        }
        Command::Version => {
            print_version();
            Ok(ExitCode::SUCCESS)
        }
    }
}

/// CLI commands
enum Command {
    Run,
    Help,
    Version,
}

fn parse_args() -> Result<Command> {
    let args: Vec<String> = std::env::args().collect();

    if args.len() == 1 {
        return Ok(Command::Run);
    }

    match args[1].as_str() {
        "-h" | "--help" | "help" => Ok(Command::Help),
        "-V" | "--version" | "version" => Ok(Command::Version),
        other => Err(anyhow::anyhow!(
            "Unknown argument: {other}\nRun 'linkedsky --help' for usage"
        )),
    }
}

fn print_help() {
    println!(
        r#"🔗 linkedsky - share a link post to LinkedIn and Bluesky

USAGE:
    linkedsky                          Prompt for a post and publish it

OPTIONS:
    -h, --help                         Show this help message
    -V, --version                      Show version information

ENVIRONMENT (a local .env file is read too):
    LINKEDIN_AUTHOR                    Author URN, e.g. urn:li:person:abc123
    LINKEDIN_TOKEN                     OAuth bearer token
    BSKY_USER                          Bluesky handle
    BSKY_PASS                          Bluesky app password

    LINKEDIN_API_URL                   Optional, default https://api.linkedin.com
    BSKY_PDS_URL                       Optional, default https://bsky.social
    LINKEDSKY_POST_LANG                Optional, default en-US
    LINKEDSKY_HTTP_TIMEOUT_SECS        Optional, default 30
    RUST_LOG                           Log filter, default info
"#
    );
}

fn print_version() {
    println!("linkedsky {}", linkedsky::VERSION);
}

async fn run() -> Result<ExitCode> {
    // A missing .env is fine; real environment variables win over it
    if let Err(e) = dotenvy::dotenv()
        && !e.not_found()
    {
        return Err(e).context("Failed to read .env file");
    }

    let config = Config::from_env()?;
    let clients = Client::all(&config).context("Failed to set up HTTP clients")?;

    let mut prompter = Prompter::stdio();
    let content = prompter
        .post_content()
        .await
        .context("Failed to read post content")?;

    let report = publish::run(&mut prompter, &content, &clients)
        .await
        .context("Failed to read confirmation")?;

    println!();
    for line in report.lines() {
        println!("{}", line);
    }

    Ok(ExitCode::from(report.exit_status()))
}
