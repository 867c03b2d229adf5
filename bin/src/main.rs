use std::{
    process::ExitCode,
    sync::{atomic::AtomicUsize, Arc},
};

use clap::Parser;
use console::style;
use thong_mock_api::store::BarStore;
use thong_utils::{config::Config, disk_storage::DiskStorageInterface, log};
use tokio_util::sync::CancellationToken;

mod cli;
mod error;
mod panic_hook;

use cli::{Cli, Commands};
use error::Result;

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{} {e}", style("error:").red());
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: Cli) -> Result<()> {
    let mut config = Config::load()?;
    cli.apply_overrides(&mut config);
    let level = config.log_level()?;

    match cli.cmd {
        Some(Commands::ServeMock { port, ref host }) => {
            log::init_stdout_logger(level)?;
            serve_mock(host, port).await
        }
        None => {
            log::init_file_logger(&cli.log_file, level)?;
            panic_hook::set();
            thong_tui::run(&config).await?;
            Ok(())
        }
    }
}

async fn serve_mock(host: &str, port: u16) -> Result<()> {
    let listener = thong_mock_api::bind(host, port).await?;
    println!(
        "{} serving synthetic bars on {}",
        style("thong").green().bold(),
        style(format!("http://{host}:{port}/api/stock/{{symbol}}")).cyan()
    );

    let shutdown = CancellationToken::new();
    let ctrl_c = shutdown.clone();
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            tracing::info!("shutting down");
        }
        ctrl_c.cancel();
    });

    thong_mock_api::serve(
        listener,
        BarStore::synthetic(),
        Arc::new(AtomicUsize::new(0)),
        shutdown,
    )
    .await?;
    Ok(())
}
