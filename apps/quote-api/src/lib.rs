//! # Quoteforge Quote API
//!
//! HTTP shell around the quotation engine.
//!
//! ## Module Organization
//! ```text
//! quote_api/
//! ├── lib.rs          ◄─── You are here (router & tracing setup)
//! ├── main.rs         ◄─── Binary: config, bind, serve, shutdown
//! ├── config.rs       ◄─── Environment configuration
//! ├── state.rs        ◄─── Prebuilt engines shared by handlers
//! ├── error.rs        ◄─── API error type for handlers
//! └── handlers/
//!     ├── health.rs
//!     ├── catalog.rs
//!     ├── quote.rs
//!     └── order.rs
//! ```
//!
//! ## Routes
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  GET  /health                    liveness                               │
//! │  GET  /catalogs                  profile list                           │
//! │  GET  /catalogs/{name}           items by category + rule constants     │
//! │  POST /quote                     price with the default catalog         │
//! │  POST /catalogs/{name}/quote     price with a named catalog             │
//! │  POST /orders                    validate, price, acknowledge           │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

pub mod config;
pub mod error;
pub mod handlers;
pub mod state;

use axum::routing::{get, post};
use axum::Router;
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;
use tracing_subscriber::EnvFilter;

use crate::state::AppState;

/// Builds the router with all middleware layers.
#[allow(deprecated)]
pub fn router(state: AppState) -> Router {
    let timeout = state.request_timeout();

    Router::new()
        .route("/health", get(handlers::health::health))
        .route("/catalogs", get(handlers::catalog::list_catalogs))
        .route("/catalogs/{name}", get(handlers::catalog::get_catalog))
        .route("/catalogs/{name}/quote", post(handlers::quote::quote_catalog))
        .route("/quote", post(handlers::quote::quote_default))
        .route("/orders", post(handlers::order::submit_order))
        .with_state(state)
        .layer(TimeoutLayer::new(timeout))
        .layer(TraceLayer::new_for_http())
}

/// Initializes the tracing subscriber.
///
/// `RUST_LOG` overrides the default filter.
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,quote_api=debug,tower_http=info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .init();
}
