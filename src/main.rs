use crate::config::AppConfig;
use crate::db::init_db;
use crate::responses::html_error_response;
use crate::router::{handle, AppState};
use astra::Server;
use tracing::{error, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod backend;
mod config;
mod db;
mod domain;
mod errors;
mod filters;
mod handlers;
mod responses;
mod router;
mod sharing;
mod spreadsheets;
mod templates;

#[cfg(test)]
mod tests;

fn main() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "realty_crm=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = match AppConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            error!("configuration error: {e}");
            std::process::exit(1);
        }
    };

    let state = match AppState::new(config) {
        Ok(state) => state,
        Err(e) => {
            error!("startup failed: {e}");
            std::process::exit(1);
        }
    };

    if let Err(e) = init_db(&state.db) {
        error!("database initialization failed: {e}");
        std::process::exit(1);
    }

    let addr = state.config.bind_addr;
    info!(
        %addr,
        public_url = %state.config.public_base_url,
        backend = state.backend.is_some(),
        "starting server"
    );

    let server = Server::bind(&addr).max_workers(state.config.max_workers);

    let result = server.serve(move |req, _info| match handle(req, &state) {
        Ok(resp) => resp,
        Err(err) => html_error_response(err),
    });

    if let Err(e) = result {
        error!("server ended with error: {e}");
    }

    info!("server shut down");
}
