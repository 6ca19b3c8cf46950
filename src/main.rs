//! TOPSIS Ranker CLI
//!
//! # Commands
//!
//! - `rank <INPUT> <WEIGHTS> <IMPACTS> <OUTPUT>`: Rank a CSV or JSON file and
//!   write the scored table to OUTPUT
//! - `serve [--port]`: Run the HTTP API
//!
//! Exit code 1 on any error.

use std::path::PathBuf;
use std::process::ExitCode;
use std::sync::Arc;

use clap::{Parser, Subcommand};

use topsis_ranker::adapters::export::{render_table, CsvResultWriter};
use topsis_ranker::adapters::http::{build_router, build_state};
use topsis_ranker::application::{RankFileCommand, RankFileHandler};
use topsis_ranker::config::AppConfig;
use topsis_ranker::telemetry::init_tracing;

/// TOPSIS Ranker - Multi-criteria ranking of alternatives
#[derive(Parser)]
#[command(name = "topsis-ranker")]
#[command(version)]
#[command(about = "Rank alternatives against weighted criteria using TOPSIS")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Rank the alternatives in a file
    #[command(after_help = "Example:\n  topsis-ranker rank data.csv \"1,1,1,2\" \"+,+,-,+\" result.csv")]
    Rank {
        /// CSV or JSON file whose first column holds the alternative names
        input: PathBuf,
        /// Comma-separated positive weights, e.g. "1,1,1,2"
        #[arg(allow_hyphen_values = true)]
        weights: String,
        /// Comma-separated impacts, '+' (benefit) or '-' (cost), e.g. "+,+,-,+"
        #[arg(allow_hyphen_values = true)]
        impacts: String,
        /// Where to write the scored CSV
        output: PathBuf,
    },
    /// Run the HTTP API
    Serve {
        /// Override the configured port
        #[arg(short, long)]
        port: Option<u16>,
    },
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Rank {
            input,
            weights,
            impacts,
            output,
        } => rank(input, weights, impacts, output).await,
        Commands::Serve { port } => serve(port).await,
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(message) => {
            eprintln!("Error: {}", message);
            ExitCode::FAILURE
        }
    }
}

async fn rank(
    input: PathBuf,
    weights: String,
    impacts: String,
    output: PathBuf,
) -> Result<(), String> {
    init_tracing("warn", false);

    let handler = RankFileHandler::new(Arc::new(CsvResultWriter::new()));
    let cmd = RankFileCommand {
        input,
        weights,
        impacts,
        output: output.clone(),
    };

    let ranking = handler.handle(cmd).await.map_err(|e| e.to_string())?;

    println!("{}", render_table(&ranking));
    println!("\nResults saved to '{}'", output.display());
    Ok(())
}

async fn serve(port: Option<u16>) -> Result<(), String> {
    let mut config = AppConfig::load().map_err(|e| e.to_string())?;
    if let Some(port) = port {
        config.server.port = port;
    }
    config.validate().map_err(|e| e.to_string())?;

    init_tracing(&config.server.log_level, config.is_production());

    let addr = config.server.socket_addr().map_err(|e| e.to_string())?;
    let app = build_router(build_state(&config), &config);

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .map_err(|e| format!("Failed to bind {}: {}", addr, e))?;

    tracing::info!(
        %addr,
        environment = config.server.environment.as_str(),
        "TOPSIS Ranker listening"
    );

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| e.to_string())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "Failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutting down");
}
