use crate::context::AppContext;
use crate::router::handle;
use astra::Server;
use std::net::SocketAddr;
use std::path::Path;
use std::sync::Arc;
use tracing::{error, info};

mod context;
mod dataset;
mod domain;
mod errors;
mod responses;
mod router;
mod settings;
mod spreadsheets;
mod templates;

#[cfg(test)]
mod tests;

fn main() {
    // 1️⃣ Configuration and logging
    let cfg = match settings::load_config() {
        Ok(cfg) => cfg,
        Err(e) => {
            eprintln!("❌ Configuration failed: {e}");
            std::process::exit(1);
        }
    };
    settings::init_tracing(&cfg.log_level, cfg.log_json);

    // 2️⃣ Load the workbook once
    let dataset = match dataset::load_workbook(Path::new(&cfg.data_path)) {
        Ok(dataset) => dataset,
        Err(e) => {
            error!(error = %e, path = %cfg.data_path, "dataset load failed");
            std::process::exit(1);
        }
    };
    let ctx = Arc::new(AppContext::new(dataset));

    // 3️⃣ Start the server
    let addr: SocketAddr = match cfg.bind_addr().parse() {
        Ok(addr) => addr,
        Err(e) => {
            error!(error = %e, addr = %cfg.bind_addr(), "invalid bind address");
            std::process::exit(1);
        }
    };
    info!(%addr, workers = cfg.workers, "starting server");

    let server = Server::bind(&addr).max_workers(cfg.workers);

    // 4️⃣ Serve requests, sharing the read-only context across workers
    let result = server.serve(move |req, _info| match handle(req, &ctx) {
        Ok(resp) => resp,
        Err(err) => {
            if err.status() >= 500 {
                error!(error = %err, "request failed");
            }
            templates::html_error_response(err)
        }
    });

    if let Err(e) = result {
        error!(error = %e, "server ended with error");
    }

    info!("server shut down cleanly");
}
