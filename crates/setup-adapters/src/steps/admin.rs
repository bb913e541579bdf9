//! CreateAdminStep: simula el alta del usuario administrador.

use std::time::Duration;

use async_trait::async_trait;

use setup_core::{StepDefinition, StepRunResult};

pub(crate) const ADMIN_DELAY: Duration = Duration::from_millis(800);

pub struct CreateAdminStep {
    username: String,
}

impl CreateAdminStep {
    pub fn new(username: impl Into<String>) -> Self {
        Self { username: username.into() }
    }
}

#[async_trait]
impl StepDefinition for CreateAdminStep {
    fn id(&self) -> &str {
        "admin"
    }

    fn title(&self) -> &str {
        "Creating Admin User"
    }

    async fn run(&self) -> StepRunResult {
        tokio::time::sleep(ADMIN_DELAY).await;
        StepRunResult::Success { detail: Some(format!("Created admin user: {}", self.username)) }
    }
}
