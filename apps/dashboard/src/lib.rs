//! # Catalog Dashboard Library
//!
//! Application layer of the product catalog dashboard: configuration, shared
//! state and the commands the view layer calls.
//!
//! ## Module Organization
//! ```text
//! catalog_dashboard/
//! ├── lib.rs          ◄─── You are here (tracing, Dashboard wiring)
//! ├── config.rs       ◄─── dashboard.toml + CATALOG_* overrides
//! ├── storage.rs      ◄─── KeyValueStore (memory, JSON file)
//! ├── state/
//! │   ├── catalog.rs  ◄─── CatalogState + LoadTicket
//! │   └── favorites.rs◄─── Favorite product ids
//! ├── commands/
//! │   ├── products.rs ◄─── Load, CRUD
//! │   ├── filters.rs  ◄─── Filters, sort, paging
//! │   └── favorites.rs◄─── Favorites
//! └── error.rs        ◄─── ApiError for commands
//! ```
//!
//! ## Startup Sequence
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  1. init_tracing()             RUST_LOG or "info,catalog=debug,..."     │
//! │  2. DashboardConfig::load()    defaults → TOML → env → validate         │
//! │  3. Dashboard::from_config()   HTTP repository, favorites file          │
//! │  4. dashboard.refresh()        products + categories, concurrently      │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

pub mod commands;
pub mod config;
pub mod error;
pub mod state;
pub mod storage;

use std::sync::Arc;

use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use catalog_client::{HttpProductRepository, ProductRepository};
use catalog_core::CatalogView;

use config::DashboardConfig;
use error::{ApiError, ErrorCode};
use state::{CatalogState, Favorites};
use storage::{JsonFileStore, KeyValueStore, MemoryStore};

const DEFAULT_LOG_FILTER: &str = "info,catalog=debug,reqwest=warn";

/// Initializes the tracing subscriber for structured logging.
///
/// ## Log Levels
/// - `RUST_LOG=debug` - Show debug messages
/// - `RUST_LOG=catalog_client=trace` - Trace the HTTP client only
/// - Default: `info,catalog=debug,reqwest=warn`
///
/// Safe to call more than once; later calls are no-ops.
pub fn init_tracing() {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));

    let _ = tracing_subscriber::fmt().with_env_filter(filter).try_init();
}

/// Everything a dashboard session needs, constructed once at startup.
pub struct Dashboard {
    pub config: DashboardConfig,
    pub repo: Arc<dyn ProductRepository>,
    pub catalog: CatalogState,
    pub favorites: Favorites,
}

impl Dashboard {
    /// Builds the HTTP repository and file-backed favorites from `config`.
    ///
    /// Without a usable data directory favorites fall back to memory.
    pub fn from_config(config: DashboardConfig) -> Result<Self, ApiError> {
        let repo = HttpProductRepository::new(&config.client_config())
            .map_err(|e| ApiError::new(ErrorCode::ConfigError, e.to_string()))?;

        let store: Arc<dyn KeyValueStore> = match config.favorites_path() {
            Some(path) => {
                info!(?path, "Favorites stored on disk");
                Arc::new(JsonFileStore::new(path))
            }
            None => {
                warn!("No data directory available, favorites will not persist");
                Arc::new(MemoryStore::new())
            }
        };

        Ok(Self::with_parts(config, Arc::new(repo), store))
    }

    /// Assembles a dashboard from explicit parts.
    pub fn with_parts(
        config: DashboardConfig,
        repo: Arc<dyn ProductRepository>,
        store: Arc<dyn KeyValueStore>,
    ) -> Self {
        let catalog = CatalogState::new(config.catalog.page_size);
        let favorites = Favorites::load(store);

        Dashboard {
            config,
            repo,
            catalog,
            favorites,
        }
    }

    pub async fn refresh(&self) -> Result<CatalogView, ApiError> {
        commands::refresh(self.repo.as_ref(), &self.catalog).await
    }
}

impl std::fmt::Debug for Dashboard {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Dashboard")
            .field("config", &self.config)
            .field("catalog", &self.catalog)
            .field("favorites", &self.favorites)
            .finish_non_exhaustive()
    }
}
