//! Application state for the payroll engine API.
//!
//! This module defines the shared application state that is available
//! to all request handlers.

use std::sync::Arc;

use crate::config::{ConfigLoader, PolicyConfig};
use crate::store::InMemoryStore;

/// Shared application state.
///
/// Holds the loaded configuration and the record store seeded from it.
#[derive(Clone)]
pub struct AppState {
    config: Arc<ConfigLoader>,
    store: Arc<InMemoryStore>,
}

impl AppState {
    /// Creates the application state, seeding the store from `config`.
    pub fn new(config: ConfigLoader) -> Self {
        let store = InMemoryStore::new(config.employees().to_vec(), config.attendance().to_vec());
        Self {
            config: Arc::new(config),
            store: Arc::new(store),
        }
    }

    /// Returns a reference to the configuration loader.
    pub fn config(&self) -> &ConfigLoader {
        &self.config
    }

    /// Returns the policy settings.
    pub fn policy(&self) -> &PolicyConfig {
        self.config.policy()
    }

    /// Returns the record store.
    pub fn store(&self) -> &InMemoryStore {
        &self.store
    }
}
