//! Monkey Directory: prints the monkey catalog as a table. Config-driven via DirectoryConfig.

mod render;

use monkey_core::{build_data_source, CancellationToken, DirectoryConfig, Monkey, MonkeyCatalog};
use render::TableStyle;
use std::io::Write;
use std::process::ExitCode;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

const EMPTY_MESSAGE: &str = "No monkeys available.";

#[tokio::main]
async fn main() -> ExitCode {
    // Load .env before anything reads the environment (RUST_LOG, MONKEY_*).
    let dotenv = dotenvy::dotenv();

    // Logs go to stderr so stdout carries only the table.
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "warn".into()),
        ))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    if let Err(e) = dotenv {
        tracing::debug!(".env not loaded: {} (using system environment)", e);
    }

    match run().await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}

async fn run() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let config = DirectoryConfig::load()?;
    tracing::debug!(?config, "configuration loaded");

    let cancel = CancellationToken::new();
    {
        let cancel = cancel.clone();
        tokio::spawn(async move {
            if tokio::signal::ctrl_c().await.is_ok() {
                tracing::warn!("interrupted; cancelling catalog load");
                cancel.cancel();
            }
        });
    }

    let catalog = MonkeyCatalog::default();
    catalog
        .configure_data_source(build_data_source(&config), config.preload, &cancel)
        .await?;

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    print_directory(&mut out, &catalog, &config, &cancel).await?;
    out.flush()?;
    Ok(())
}

/// Writes the banner and table, or the empty-catalog message, to `out`.
async fn print_directory(
    out: &mut impl Write,
    catalog: &MonkeyCatalog,
    config: &DirectoryConfig,
    cancel: &CancellationToken,
) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let monkeys: Vec<Monkey> = catalog
        .get_all(cancel)
        .await?
        .iter()
        .map(Monkey::from)
        .collect();

    if monkeys.is_empty() {
        writeln!(out, "{EMPTY_MESSAGE}")?;
        return Ok(());
    }

    render::print_banner(&mut *out, &config.app_name, config.color)?;
    render::print_table(
        &mut *out,
        &monkeys,
        &TableStyle {
            description_width: config.description_width,
            color: config.color,
        },
    )?;
    Ok(())
}
