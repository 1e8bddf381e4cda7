//! # HTTP Handlers
//!
//! ```text
//! handlers/
//! ├── health.rs   GET  /health
//! ├── catalog.rs  GET  /catalogs, GET /catalogs/{name}
//! ├── quote.rs    POST /quote, POST /catalogs/{name}/quote
//! └── order.rs    POST /orders
//! ```
//!
//! Every handler returns `Result<_, ApiError>` and carries no state between
//! requests.

pub mod catalog;
pub mod health;
pub mod order;
pub mod quote;
