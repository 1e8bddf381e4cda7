//! # quoteforge-core: Pure Quotation Logic for Quoteforge
//!
//! This crate turns a customer's project configuration into a price and a
//! delivery estimate. Everything in it is a pure function of its inputs.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Quoteforge Architecture                          │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                 Presentation (calculator, order form)           │   │
//! │  │    Package cards ──► Feature toggles ──► Options ──► Summary    │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │ HTTP / JSON                            │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │                    quote-api (axum)                             │   │
//! │  │    POST /quote, POST /orders, GET /catalogs                     │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │            ★ quoteforge-core (THIS CRATE) ★                     │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌───────────┐  ┌───────────┐  │   │
//! │  │   │  catalog  │  │ selection │  │  engine   │  │   order   │  │   │
//! │  │   │  Catalog  │  │  Project  │  │ compute_  │  │ Customer  │  │   │
//! │  │   │   Item    │  │ Selection │  │  quote    │  │   Info    │  │   │
//! │  │   └───────────┘  └───────────┘  └───────────┘  └───────────┘  │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO CLOCK • NO NETWORK • PURE FUNCTIONS              │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`money`] - Money type with integer arithmetic (cents)
//! - [`types`] - Rates, work-day durations, catalog items, tiers, quotes
//! - [`catalog`] - Id-keyed catalogs and the built-in profiles
//! - [`selection`] - The customer's current choices
//! - [`rules`] - Pricing constants and lookup mode
//! - [`engine`] - `compute_quote` and [`QuoteEngine`]
//! - [`order`] - Order submission data
//! - [`validation`] - Business rule validation
//! - [`error`] - Domain error types
//!
//! ## Design Principles
//!
//! 1. **Pure Functions**: same selection and catalog = same quote
//! 2. **No I/O**: no logging sinks, clocks or network in this crate
//! 3. **Integer Money**: amounts are cents (i64), rates are basis points
//! 4. **Explicit Errors**: unknown ids are typed errors, never silent skips
//!
//! ## Example Usage
//!
//! ```rust
//! use quoteforge_core::catalog;
//! use quoteforge_core::{compute_quote, AdvanceTier, Money, ProjectSelection, RushTier};
//!
//! let catalog = catalog::price_calculator().unwrap();
//! let selection = ProjectSelection::new("basic")
//!     .with_extra_units(2)
//!     .with_rush_tier(RushTier::Quarter)
//!     .with_advance_tier(AdvanceTier::Full);
//!
//! let quote = compute_quote(&selection, &catalog).unwrap();
//!
//! // 150 + 2 × 80 + 360 = 670, less 25% = 502.50
//! assert_eq!(quote.subtotal, Money::from_major(670));
//! assert_eq!(quote.final_total.cents(), 50250);
//! assert_eq!(quote.estimated_duration_days, 2);
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod catalog;
pub mod engine;
pub mod error;
pub mod money;
pub mod order;
pub mod rules;
pub mod selection;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use catalog::Catalog;
pub use engine::{compute_quote, compute_quote_with, QuoteEngine};
pub use error::{CoreError, CoreResult, ValidationError};
pub use money::Money;
pub use order::{CustomerInfo, OrderRequest};
pub use rules::{LookupMode, PricingRules};
pub use selection::ProjectSelection;
pub use types::*;

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Currency every catalog is priced in.
pub const CURRENCY: &str = "USD";

/// Catalog profile used when a request doesn't name one.
///
/// The order form is what `main`-based selections are priced against.
pub const DEFAULT_CATALOG: &str = catalog::ORDER_FORM;
