//! CreateDatabaseStep: simula la creación de la base si no existe.

use std::time::Duration;

use async_trait::async_trait;

use setup_core::{StepDefinition, StepRunResult};
use setup_domain::DatabaseSettings;

pub(crate) const DATABASE_DELAY: Duration = Duration::from_millis(800);

pub struct CreateDatabaseStep {
    name: String,
}

impl CreateDatabaseStep {
    pub fn from_settings(db: &DatabaseSettings) -> Self {
        Self { name: db.name.clone() }
    }
}

#[async_trait]
impl StepDefinition for CreateDatabaseStep {
    fn id(&self) -> &str {
        "database"
    }

    fn title(&self) -> &str {
        "Creating Database"
    }

    async fn run(&self) -> StepRunResult {
        tokio::time::sleep(DATABASE_DELAY).await;
        StepRunResult::Success { detail: Some(format!("Created database: {}", self.name)) }
    }
}
