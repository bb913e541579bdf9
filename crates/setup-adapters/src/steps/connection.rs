//! TestConnectionStep
//!
//! - Simula la prueba de conexión contra el motor elegido.
//! - Es la única ruta de fallo de la secuencia simulada: variante en red,
//!   host remoto y contraseña vacía terminan en acceso denegado.
//! - La regla es una demo del camino de error, no una validación real de
//!   conectividad; un chequeo real reemplaza esta acción detrás del mismo
//!   contrato de paso.

use std::time::Duration;

use async_trait::async_trait;

use setup_core::{StepDefinition, StepRunResult};
use setup_domain::{is_local_host, DatabaseKind, DatabaseSettings, SQLITE_DATABASE_PATH};

pub(crate) const CONNECTION_DELAY: Duration = Duration::from_millis(1000);

pub struct TestConnectionStep {
    kind: DatabaseKind,
    host: String,
    port: u16,
    password_present: bool,
}

impl TestConnectionStep {
    pub fn from_settings(db: &DatabaseSettings) -> Self {
        Self { kind: db.kind,
               host: db.host.clone(),
               port: db.port,
               password_present: !db.password.is_empty() }
    }
}

#[async_trait]
impl StepDefinition for TestConnectionStep {
    fn id(&self) -> &str {
        "connection"
    }

    fn title(&self) -> &str {
        "Testing Database Connection"
    }

    async fn run(&self) -> StepRunResult {
        tokio::time::sleep(CONNECTION_DELAY).await;

        if self.kind.requires_connection() && !self.password_present && !is_local_host(&self.host) {
            return StepRunResult::Failure { reason: "Access denied for user".to_string() };
        }

        let detail = if self.kind.requires_connection() {
            format!("Connected to {} server at {}:{}", self.kind, self.host, self.port)
        } else {
            format!("Using SQLite database at {SQLITE_DATABASE_PATH}")
        };
        StepRunResult::Success { detail: Some(detail) }
    }
}
