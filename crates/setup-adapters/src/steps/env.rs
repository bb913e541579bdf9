//! WriteEnvStep: simula la emisión del archivo de entorno.
//!
//! El contenido se deriva del `EnvConfig` del perfil; la persistencia real
//! de la configuración ocurre después, cuando la corrida completa reporta
//! éxito.

use std::time::Duration;

use async_trait::async_trait;

use setup_core::{StepDefinition, StepRunResult};
use setup_domain::EnvConfig;

pub(crate) const ENV_DELAY: Duration = Duration::from_millis(600);

pub struct WriteEnvStep {
    config: EnvConfig,
}

impl WriteEnvStep {
    pub fn new(config: EnvConfig) -> Self {
        Self { config }
    }
}

#[async_trait]
impl StepDefinition for WriteEnvStep {
    fn id(&self) -> &str {
        "env"
    }

    fn title(&self) -> &str {
        "Generating Environment File"
    }

    async fn run(&self) -> StepRunResult {
        tokio::time::sleep(ENV_DELAY).await;
        let rendered = self.config.to_env_string();
        StepRunResult::Success { detail: Some(format!("Generated .env file ({} bytes)", rendered.len())) }
    }
}
