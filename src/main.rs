//! rolegate - role-gated dashboard server
//!
//! `rolegate serve` runs the HTTP server; `rolegate mint-token` prints a
//! signed session token for local testing.

#![allow(missing_docs)]

use anyhow::{Context, bail};
use clap::{Parser, Subcommand};
use rolegate::auth::JwtSessionProvider;
use rolegate::config::IdentityConfig;
use rolegate::server::builder::{DEFAULT_CONFIG_PATH, load_config, serve};
use rolegate::utils::logging::init_tracing;
use rolegate::{Config, Role};
use std::path::PathBuf;
use std::process::ExitCode;

#[derive(Debug, Parser)]
#[command(name = "rolegate", version, about = rolegate::DESCRIPTION)]
struct Cli {
    /// Configuration file
    #[arg(
        short,
        long,
        global = true,
        env = "ROLEGATE_CONFIG",
        default_value = DEFAULT_CONFIG_PATH
    )]
    config: PathBuf,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Run the HTTP server (default)
    Serve,
    /// Print a session token signed with the configured JWT secret
    MintToken {
        /// Subject (user ID) to put in the token
        #[arg(long)]
        subject: String,
        /// Role tag: OWNER, STAFF or DRIVER
        #[arg(long)]
        role: Role,
    },
}

#[tokio::main]
async fn main() -> ExitCode {
    // A missing .env file is fine
    let _ = dotenvy::dotenv();

    let cli = Cli::parse();
    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {:#}", e);
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: Cli) -> anyhow::Result<()> {
    let config = load_config(&cli.config)
        .await
        .with_context(|| format!("Failed to load configuration from {}", cli.config.display()))?;
    init_tracing(&config.logging);

    match cli.command.unwrap_or(Commands::Serve) {
        Commands::Serve => serve(config).await?,
        Commands::MintToken { subject, role } => {
            println!("{}", mint_token(&config, &subject, role)?);
        }
    }
    Ok(())
}

fn mint_token(config: &Config, subject: &str, role: Role) -> anyhow::Result<String> {
    let IdentityConfig::Jwt(jwt) = config.identity() else {
        bail!("mint-token needs the jwt identity provider");
    };
    if jwt.secret.is_none() {
        bail!("mint-token needs identity.secret (or ROLEGATE_JWT_SECRET) to be set");
    }

    let token = JwtSessionProvider::new(jwt).issue_token(subject, role)?;
    Ok(token)
}
