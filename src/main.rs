use std::path::Path;
use std::sync::Arc;

mod api;
mod catalog;
mod config;
mod handler;
mod http;
mod logger;
mod server;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cfg = config::Config::load()?;
    logger::init(&cfg)?;

    // The chain catalog is built exactly once, synchronously, before the
    // runtime starts accepting connections. Restart is the only refresh.
    let catalog = catalog::scan(Path::new(&cfg.paths.chain_dir), cfg.paths.create_missing);

    logger::log_startup(&cfg, catalog.len());

    let mut runtime_builder = tokio::runtime::Builder::new_multi_thread();
    runtime_builder.enable_all();
    if let Some(workers) = cfg.server.workers {
        runtime_builder.worker_threads(workers);
    }
    let runtime = runtime_builder.build()?;

    runtime.block_on(async_main(cfg, catalog))
}

async fn async_main(
    cfg: config::Config,
    catalog: catalog::ImageCatalog,
) -> Result<(), Box<dyn std::error::Error>> {
    let addr = cfg.socket_addr()?;
    let listener = server::create_listener(addr)?;
    let state = Arc::new(config::AppState::new(cfg, catalog));

    logger::log_server_start(&addr, &state.config, state.catalog.len());

    server::run(listener, state).await
}
