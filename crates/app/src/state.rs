//! Application state management

use tracing::info;
use tripdesk_core::{Config, LocalStorage};
use tripdesk_net::{Client, Result};

use crate::page::PageController;

/// Main application state
pub struct AppState {
    pub config: Config,
    pub storage: LocalStorage,
    pub client: Client,
}

impl AppState {
    /// Open local storage and build the API client from `config`
    pub fn new(config: Config) -> Result<Self> {
        let storage_path = config.storage_path()?;
        info!(path = %storage_path.display(), "Opening local storage");
        let storage = LocalStorage::open(&storage_path)?;
        let client = Client::new(&config.api)?;

        Ok(Self {
            config,
            storage,
            client,
        })
    }

    pub fn controller(&self) -> PageController<'_, Client, LocalStorage> {
        PageController::new(&self.client, &self.storage)
    }
}
