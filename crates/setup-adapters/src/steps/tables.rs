//! CreateTablesStep: simula la corrida de migraciones del esquema.
//! Es el paso más largo de la secuencia; el resto sólo marca el ritmo del
//! indicador de progreso.

use std::time::Duration;

use async_trait::async_trait;

use setup_core::{StepDefinition, StepRunResult};

pub(crate) const TABLES_DELAY: Duration = Duration::from_millis(1500);

pub struct CreateTablesStep;

impl CreateTablesStep {
    pub fn new() -> Self {
        Self
    }
}

impl Default for CreateTablesStep {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl StepDefinition for CreateTablesStep {
    fn id(&self) -> &str {
        "tables"
    }

    fn title(&self) -> &str {
        "Creating Tables"
    }

    async fn run(&self) -> StepRunResult {
        tokio::time::sleep(TABLES_DELAY).await;
        StepRunResult::Success { detail: Some("Created database tables".to_string()) }
    }
}
