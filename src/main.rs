//! EZTest access service
//!
//! Serves the role/privilege API behind the access gate.

use clap::Parser;
use eztest_access::config::Config;
use eztest_access::server;
use eztest_access::utils::logging::init_tracing;
use std::path::PathBuf;
use std::process::ExitCode;

/// Command line arguments
#[derive(Debug, Parser)]
#[command(name = "eztest-access", version, about)]
struct Args {
    /// YAML configuration file; defaults plus environment are used when absent
    #[arg(short, long, env = "EZTEST_CONFIG", default_value = "config/eztest.yaml")]
    config: PathBuf,

    /// Seed the default roles and privileges on startup
    #[arg(long)]
    seed: bool,
}

async fn load_config(args: &Args) -> eztest_access::Result<Config> {
    let mut config = if args.config.exists() {
        Config::from_file(&args.config).await?
    } else {
        Config::from_env()?
    };

    if args.seed {
        config.service.storage.database.seed_defaults = true;
    }
    Ok(config)
}

#[tokio::main]
async fn main() -> ExitCode {
    // A missing .env file is fine
    let _ = dotenvy::dotenv();

    let args = Args::parse();

    let config = match load_config(&args).await {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error: {}", e);
            return ExitCode::FAILURE;
        }
    };

    if let Err(e) = init_tracing(config.logging()) {
        eprintln!("Error: {}", e);
        return ExitCode::FAILURE;
    }

    match server::run_server(config).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}
