use std::sync::Arc;

use anyhow::{Context, Result};
use bank::{Bank, get_bank};
use sqlx::AnyPool;

use super::{config::Config, database::init_database};

pub struct AppState {
    pub bank: Bank,
    pub config: Config,
    pub database: AnyPool,
}

impl AppState {
    pub async fn new(config: Config) -> Result<Arc<Self>> {
        let bank = get_bank().context("Content bank failed validation")?;

        let database = init_database(&config.database_url)
            .await
            .context("Failed to initialize database")?;

        Ok(Arc::new(Self {
            bank,
            config,
            database,
        }))
    }
}
