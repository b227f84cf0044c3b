//! Entry point for the ClickFinance engine binary.
//!
//! Running this binary starts an HTTP server exposing the calculators
//! to the web forms.  The threshold configuration is read from the JSON
//! file named by `CLICKFINANCE_CONFIG` (default `clickfinance.json`);
//! when the file does not exist the built-in thresholds are used.  The
//! bind address comes from `CLICKFINANCE_BIND_ADDR`.  Log verbosity is
//! controlled by `RUST_LOG`.

use log::{error, info};
use std::path::PathBuf;

#[tokio::main]
async fn main() {
    env_logger::init();

    let config_path = std::env::var("CLICKFINANCE_CONFIG")
        .map(PathBuf::from)
        .unwrap_or_else(|_| PathBuf::from("clickfinance.json"));
    let addr =
        std::env::var("CLICKFINANCE_BIND_ADDR").unwrap_or_else(|_| "127.0.0.1:3000".to_string());
    info!("Starting ClickFinance engine with config {:?}", config_path);

    if let Err(err) = clickfinance_engine::api::serve(&addr, &config_path).await {
        error!("Error running server: {:#}", err);
        std::process::exit(1);
    }
}
