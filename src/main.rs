use crate::config::Config;
use crate::responses::error_to_response;
use crate::router::handle;
use crate::state::AppState;
use astra::Server;
use clap::Parser;

mod config;
mod domain;
mod errors;
mod exports;
mod responses;
mod router;
mod scraper;
mod state;
mod templates;


fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cfg = Config::parse();

    // 1️⃣ Build the scraper-backed state
    let state = match AppState::from_config(&cfg) {
        Ok(state) => state,
        Err(e) => {
            log::error!("❌ Scraper initialization failed: {e}");
            std::process::exit(1);
        }
    };

    // 2️⃣ Make sure exports have somewhere to land
    if let Err(e) = std::fs::create_dir_all(&state.export_dir) {
        log::error!(
            "❌ Cannot create export directory {}: {e}",
            state.export_dir.display()
        );
        std::process::exit(1);
    }

    // 3️⃣ Start the server
    log::info!(
        "Starting server at http://{} (exports in {})",
        cfg.addr,
        state.export_dir.display()
    );

    let server = Server::bind(&cfg.addr).max_workers(cfg.workers);

    let result = server.serve(move |req, _info| match handle(req, &state) {
        Ok(resp) => resp,
        Err(err) => error_to_response(err),
    });

    if let Err(e) = result {
        log::error!("Server ended with error: {e}");
    }

    log::info!("Server shut down cleanly.");
}
