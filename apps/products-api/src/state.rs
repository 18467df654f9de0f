//! Application state management

use database::mongodb::ConnectionMonitor;
use mongodb::{Client, Database};

use crate::config::Config;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    pub client: Client,
    pub db: Database,
    pub monitor: ConnectionMonitor,
}

impl AppState {
    pub fn new(config: Config, client: Client, monitor: ConnectionMonitor) -> Self {
        let db = client.database(config.mongodb.database());
        Self {
            config,
            client,
            db,
            monitor,
        }
    }
}
