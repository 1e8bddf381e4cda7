//! # Catalog Module
//!
//! Read-only tables of purchasable units (packages, pages, add-ons).
//!
//! ## Lookup Contract
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  The engine only ever does two things with a catalog:                  │
//! │                                                                         │
//! │    resolve(base_package_id)        point lookup                        │
//! │    resolve(id) for each add-on     point lookup per set member         │
//! │                                                                         │
//! │  It never iterates the catalog and never assumes an order.             │
//! │  Listing order (items(), categories()) exists for the UI only.         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Built-in Catalogs
//! - [`order_form`]: a single "Main Page" base plus per-service add-ons
//! - [`price_calculator`]: four package tiers plus feature add-ons

use std::collections::HashMap;

use crate::error::{CoreError, CoreResult, ValidationError};
use crate::money::Money;
use crate::types::{CatalogItem, WorkDays};
use crate::validation::{validate_item_id, validate_item_name, validate_price};

/// Profile name of the order form catalog.
pub const ORDER_FORM: &str = "order-form";

/// Profile name of the price calculator catalog.
pub const PRICE_CALCULATOR: &str = "calculator";

/// Names of every built-in catalog.
pub const BUILTIN_CATALOGS: [&str; 2] = [PRICE_CALCULATOR, ORDER_FORM];

// =============================================================================
// Catalog
// =============================================================================

/// An immutable, id-keyed table of catalog items.
///
/// ## Invariants
/// - Ids are unique (checked on construction)
/// - Every item passed validation (id format, name, non-negative price)
/// - Contents never change after construction
#[derive(Debug, Clone)]
pub struct Catalog {
    name: String,
    items: HashMap<String, CatalogItem>,
    /// Insertion order, for listings.
    order: Vec<String>,
}

impl Catalog {
    /// Builds a catalog from its items.
    ///
    /// ## Errors
    /// - `ValidationError::Duplicate` if two items share an id
    /// - Any item-level `ValidationError` (bad id, empty name, negative price)
    pub fn new(name: impl Into<String>, items: impl IntoIterator<Item = CatalogItem>) -> CoreResult<Self> {
        let mut map = HashMap::new();
        let mut order = Vec::new();

        for item in items {
            validate_item_id(&item.id)?;
            validate_item_name(&item.name)?;
            validate_price(item.price)?;

            if map.contains_key(&item.id) {
                return Err(ValidationError::Duplicate {
                    field: "catalog item id".to_string(),
                    value: item.id,
                }
                .into());
            }

            order.push(item.id.clone());
            map.insert(item.id.clone(), item);
        }

        Ok(Catalog {
            name: name.into(),
            items: map,
            order,
        })
    }

    /// Profile name of this catalog.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Point lookup.
    pub fn get(&self, id: &str) -> Option<&CatalogItem> {
        self.items.get(id)
    }

    /// Point lookup that fails with `UnknownCatalogItem`.
    pub fn resolve(&self, id: &str) -> CoreResult<&CatalogItem> {
        self.get(id)
            .ok_or_else(|| CoreError::UnknownCatalogItem(id.to_string()))
    }

    pub fn contains(&self, id: &str) -> bool {
        self.items.contains_key(id)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// All items in insertion order.
    pub fn items(&self) -> impl Iterator<Item = &CatalogItem> {
        self.order.iter().filter_map(|id| self.items.get(id))
    }

    /// Distinct categories in first-seen order.
    pub fn categories(&self) -> Vec<&str> {
        let mut seen: Vec<&str> = Vec::new();
        for item in self.items() {
            if !seen.contains(&item.category.as_str()) {
                seen.push(&item.category);
            }
        }
        seen
    }

    /// Items of one category in insertion order.
    pub fn items_in<'a>(&'a self, category: &'a str) -> impl Iterator<Item = &'a CatalogItem> + 'a {
        self.items().filter(move |item| item.category == category)
    }
}

// =============================================================================
// Built-in Tables
// =============================================================================

/// (id, name, price in dollars, duration in hundredths of a day, category)
type Row = (&'static str, &'static str, i64, u64, &'static str);

/// Category of the order form's implicit base item.
pub const PAGES_CATEGORY: &str = "pages";

/// Category of the calculator's package tiers.
pub const PACKAGES_CATEGORY: &str = "packages";

/// Id of the order form base item.
pub const MAIN_PAGE_ID: &str = "main";

const ORDER_FORM_ROWS: &[Row] = &[
    (MAIN_PAGE_ID, "Main Page", 150, 300, PAGES_CATEGORY),
    // Page complexity
    ("simple-interaction", "Simple Interaction", 60, 100, "complexity"),
    ("complex-interaction", "Complex Interaction", 120, 200, "complexity"),
    ("advanced-features", "Advanced Features", 200, 400, "complexity"),
    // Features
    ("auth-system", "Authentication System", 180, 300, "features"),
    ("user-roles", "User Roles & Permissions", 150, 300, "features"),
    ("dark-mode", "Dark Mode", 40, 50, "features"),
    ("multi-language", "Multi-Language Support", 100, 200, "features"),
    ("blog-system", "Blog System", 200, 400, "features"),
    ("cms-integration", "CMS Integration", 250, 400, "features"),
    ("portfolio-gallery", "Portfolio Gallery", 80, 200, "features"),
    ("admin-dashboard", "Admin Dashboard", 250, 500, "features"),
    ("rating-system", "Rating & Reviews", 100, 200, "features"),
    ("booking-system", "Appointment Booking", 180, 300, "features"),
    ("social-integration", "Social Media Integration", 40, 50, "features"),
    // Database & backend
    ("database-design", "Database Design", 120, 200, "database"),
    ("firebase-integration", "Firebase Integration", 150, 300, "database"),
    ("custom-api", "Custom API Development", 180, 300, "database"),
    ("security-auth", "Advanced Security", 120, 200, "database"),
    // Performance & SEO
    ("responsive-design", "Professional Responsive Design", 80, 100, "performance"),
    ("seo-optimization", "SEO Optimization", 100, 200, "performance"),
    ("performance-optimization", "Performance Optimization", 120, 200, "performance"),
    ("pwa-support", "PWA Support", 200, 300, "performance"),
    // Payment & analytics
    ("payment-integration", "Payment Gateway", 180, 300, "payment"),
    ("analytics-integration", "Analytics Integration", 50, 50, "payment"),
    ("maps-integration", "Google Maps Integration", 60, 100, "payment"),
    ("facebook-pixel", "Facebook Pixel", 50, 50, "payment"),
    // Hosting
    ("hosting-setup", "Hosting & Deployment", 300, 300, "hosting"),
    ("hosting-purchase", "Hosting Purchase", 100, 0, "hosting"),
];

const PRICE_CALCULATOR_ROWS: &[Row] = &[
    // Packages
    ("basic", "Basic Website", 150, 300, PACKAGES_CATEGORY),
    ("business", "Business Website", 500, 700, PACKAGES_CATEGORY),
    ("ecommerce", "E-Commerce Store", 1200, 1400, PACKAGES_CATEGORY),
    ("custom", "Custom Application", 2000, 2100, PACKAGES_CATEGORY),
    // Design & UI
    ("responsive-design", "Responsive Design", 80, 100, "Design"),
    ("custom-animations", "Custom Animations", 150, 200, "Design"),
    ("dark-mode", "Dark Mode Toggle", 40, 50, "Design"),
    // Functionality
    ("contact-form", "Contact Form", 60, 100, "Functionality"),
    ("blog-system", "Blog System", 200, 400, "Functionality"),
    ("user-auth", "User Authentication", 180, 300, "Functionality"),
    ("booking-system", "Booking System", 300, 500, "Functionality"),
    ("payment-gateway", "Payment Integration", 180, 300, "Functionality"),
    // Performance & SEO
    ("seo-optimization", "SEO Optimization", 100, 200, "Performance"),
    ("performance-optimization", "Performance Optimization", 120, 200, "Performance"),
    ("pwa-support", "PWA Support", 200, 300, "Performance"),
    // Integration
    ("cms-integration", "CMS Integration", 250, 400, "Integration"),
    ("analytics-integration", "Analytics Setup", 50, 50, "Integration"),
    ("social-integration", "Social Media Integration", 80, 100, "Integration"),
    ("multi-language", "Multi-Language Support", 150, 300, "Integration"),
];

fn from_rows(name: &str, rows: &[Row]) -> CoreResult<Catalog> {
    Catalog::new(
        name,
        rows.iter().map(|&(id, item_name, dollars, hundredths, category)| {
            CatalogItem::new(
                id,
                item_name,
                Money::from_major(dollars),
                WorkDays::from_hundredths(hundredths),
                category,
            )
        }),
    )
}

/// The order form catalog: base item `main` plus every service.
pub fn order_form() -> CoreResult<Catalog> {
    from_rows(ORDER_FORM, ORDER_FORM_ROWS)
}

/// The price calculator catalog: four packages plus features.
pub fn price_calculator() -> CoreResult<Catalog> {
    from_rows(PRICE_CALCULATOR, PRICE_CALCULATOR_ROWS)
}

/// Looks up a built-in catalog by profile name.
///
/// Returns `None` for an unknown profile name.
pub fn builtin(name: &str) -> Option<CoreResult<Catalog>> {
    match name {
        ORDER_FORM => Some(order_form()),
        PRICE_CALCULATOR => Some(price_calculator()),
        _ => None,
    }
}

/// Ids a built-in profile accepts as a base package.
pub fn base_package_ids(catalog: &Catalog) -> Vec<&str> {
    catalog
        .items()
        .filter(|item| item.category == PACKAGES_CATEGORY || item.category == PAGES_CATEGORY)
        .map(|item| item.id.as_str())
        .collect()
}

// =============================================================================
// Unit Tests
// =============================================================================
