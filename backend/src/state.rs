//! Shared application state.
//!
//! Built once in `main.rs` and registered as `web::Data<AppState>`. The
//! catalog never changes while the server runs, so workers share one
//! `Arc` and read it without locking. Preferences live in SQLite and are
//! opened per request by the preference handlers.

use crate::config::Config;
use common::model::catalog::TemplateCatalog;
use log::info;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub catalog: Arc<TemplateCatalog>,
    pub database_path: Arc<PathBuf>,
}

impl AppState {
    pub fn new(catalog: TemplateCatalog, database_path: impl Into<PathBuf>) -> Self {
        Self {
            catalog: Arc::new(catalog),
            database_path: Arc::new(database_path.into()),
        }
    }

    /// Loads the catalog named in `config`. A missing or malformed catalog is
    /// fatal: there is nothing to serve without it.
    pub fn from_config(config: &Config) -> io::Result<Self> {
        let catalog = load_catalog(&config.catalog_path)?;
        Ok(Self::new(catalog, config.database_path.clone()))
    }
}

pub fn load_catalog(path: &Path) -> io::Result<TemplateCatalog> {
    let json = fs::read_to_string(path).map_err(|e| {
        io::Error::new(
            e.kind(),
            format!("Cannot read template catalog {}: {}", path.display(), e),
        )
    })?;
    let catalog = TemplateCatalog::from_json(&json)
        .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;
    info!(
        "Loaded {} templates and {} variable definitions from {}",
        catalog.templates.len(),
        catalog.variables.len(),
        path.display()
    );
    Ok(catalog)
}
