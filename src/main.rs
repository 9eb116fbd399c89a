//! WaterTrace service entry point.
//!
//! Loads configuration, parses the embedded tables and serves the HTTP API
//! until interrupted.

use tokio::net::TcpListener;

use watertrace_service::api::{self, AppState};
use watertrace_service::config::ServiceConfig;
use watertrace_service::data::districts::DISTRICT_REGISTRY;
use watertrace_service::logging::{self, Component};

#[tokio::main]
async fn main() {
    dotenv::dotenv().ok();

    let config = match ServiceConfig::load() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Configuration error: {}", e);
            std::process::exit(1);
        }
    };

    // validate() has already accepted the level name.
    let level = config.log_level().unwrap_or(logging::LogLevel::Info);
    logging::init_logger(
        level,
        config.logging.file.as_deref(),
        config.logging.console_timestamps,
    );
    logging::info(Component::System, None, "Starting WaterTrace service");

    let state = match AppState::load(&config) {
        Ok(state) => state,
        Err(e) => {
            logging::error(Component::Data, None, &format!("Failed to load tables: {}", e));
            std::process::exit(1);
        }
    };
    logging::log_dataset_summary(
        state.dataset.historical.len(),
        state.dataset.recent.len(),
        DISTRICT_REGISTRY.len(),
    );

    let address = config.bind_address();
    let listener = match TcpListener::bind(&address).await {
        Ok(listener) => listener,
        Err(e) => {
            logging::error(
                Component::System,
                Some(&address),
                &format!("Failed to bind: {}", e),
            );
            std::process::exit(1);
        }
    };
    logging::info(
        Component::Http,
        None,
        &format!("Listening on http://{}", address),
    );

    if let Err(e) = api::serve_with_shutdown(listener, state, shutdown_signal()).await {
        logging::error(Component::Http, None, &format!("Server error: {}", e));
        std::process::exit(1);
    }

    logging::info(Component::System, None, "Shutdown complete");
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        logging::warn(
            Component::System,
            None,
            &format!("Could not listen for Ctrl-C: {}", e),
        );
        std::future::pending::<()>().await;
    }
    logging::info(Component::System, None, "Shutdown requested");
}
