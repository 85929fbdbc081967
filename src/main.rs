use std::process::ExitCode;
use std::sync::Arc;

use pagesplice::config::{AppState, Config};
use pagesplice::error::{Result, StartupError};
use pagesplice::random::OsRandom;
use pagesplice::{content, logger, server};

fn main() -> ExitCode {
    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            logger::log_error(&format!("Startup failed: {e}"));
            ExitCode::FAILURE
        }
    }
}

fn run() -> Result<()> {
    let cfg = Config::load()?;
    logger::init(&cfg.logging).map_err(StartupError::Logger)?;

    // The page table is complete before anything listens
    let pages = content::resolve(&cfg.content.dir)?;
    let addr = cfg.get_socket_addr()?;

    // Build the Tokio runtime, sized by the workers setting
    let mut runtime_builder = tokio::runtime::Builder::new_multi_thread();
    runtime_builder.enable_all();
    if let Some(workers) = cfg.server.workers {
        runtime_builder.worker_threads(workers);
    }
    let runtime = runtime_builder.build().map_err(StartupError::Runtime)?;

    let state = Arc::new(AppState::new(cfg, pages, Arc::new(OsRandom)));
    runtime.block_on(async_main(addr, state))
}

async fn async_main(addr: std::net::SocketAddr, state: Arc<AppState>) -> Result<()> {
    let listener =
        server::create_listener(addr).map_err(|source| StartupError::Bind { addr, source })?;

    logger::log_server_start(&addr, &state.config, state.pages.len());
    server::serve(listener, state, server::shutdown_signal()).await;
    Ok(())
}
