//! # Catalog Dashboard Entry Point
//!
//! Headless driver: loads configuration, refreshes the catalog once and
//! prints the first page. The interactive view links the library instead.
//!
//! ## Startup Sequence
//! 1. Initialize tracing (logging)
//! 2. Load `dashboard.toml` (or defaults) plus `CATALOG_*` overrides
//! 3. Build the dashboard (HTTP repository, favorites)
//! 4. Fetch products and categories
//! 5. Print the visible page

use std::process::ExitCode;

use tracing::error;

use catalog_dashboard::config::DashboardConfig;
use catalog_dashboard::{init_tracing, Dashboard};

#[tokio::main]
async fn main() -> ExitCode {
    init_tracing();

    let config = match DashboardConfig::load(None) {
        Ok(config) => config,
        Err(e) => {
            error!(error = %e, "Invalid dashboard configuration");
            return ExitCode::FAILURE;
        }
    };

    let dashboard = match Dashboard::from_config(config) {
        Ok(dashboard) => dashboard,
        Err(e) => {
            error!(error = %e, "Failed to start dashboard");
            return ExitCode::FAILURE;
        }
    };

    let view = match dashboard.refresh().await {
        Ok(view) => view,
        Err(e) => {
            error!(error = %e, "Initial load failed");
            return ExitCode::FAILURE;
        }
    };

    println!(
        "Page {}/{}  ({} of {} products)",
        view.current_page, view.total_pages, view.total_matched, view.total_products
    );
    for product in &view.products {
        let price = product
            .price
            .and_then(|p| p.to_money())
            .map(|money| dashboard.config.format_currency(money))
            .unwrap_or_else(|| "-".to_string());
        let star = match &product.id {
            Some(id) if dashboard.favorites.contains(id) => "*",
            _ => " ",
        };
        println!(
            "{} {:<40} {:>12}  {}",
            star,
            product.name,
            price,
            product.category.as_deref().unwrap_or("")
        );
    }

    ExitCode::SUCCESS
}
