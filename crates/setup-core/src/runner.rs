//! Arranque de corridas en segundo plano y handle observable.
//!
//! `SetupRunner::start` devuelve de inmediato con un `RunHandle` vivo:
//! - `status()` rearma una foto puntual desde el event store compartido;
//!   es seguro sondearla mientras la corrida avanza en su task.
//! - `wait()` resuelve cuando el resultado global deja `Running`, con el
//!   resultado terminal. La notificación se envía una sola vez.
//!
//! Una corrida por handle; los pasos nunca se solapan entre sí.

use std::sync::Arc;

use tokio::sync::watch;
use uuid::Uuid;

use crate::engine::SetupEngine;
use crate::event::{EventStore, InMemoryEventStore, SetupEventKind};
use crate::run::{InMemoryRunRepository, RunDefinition, RunOutcome, RunRepository, RunSnapshot};

pub struct SetupRunner;

impl SetupRunner {
    /// Comienza una corrida en un task propio y devuelve su handle.
    ///
    /// `RunInitialized` se registra antes de devolver, así el primer
    /// `status()` ya ve todos los pasos en `Pending`. Requiere un runtime
    /// tokio activo.
    pub fn start(definition: RunDefinition) -> RunHandle {
        let run_id = Uuid::new_v4();
        let event_store = Arc::new(InMemoryEventStore::default());

        let _ = event_store.append_kind(run_id, SetupEventKind::RunInitialized { step_ids: definition.step_ids() });

        let (outcome_tx, outcome_rx) = watch::channel(RunOutcome::Running);
        let task_store = Arc::clone(&event_store);
        tokio::spawn(async move {
            let mut engine = SetupEngine::new_with_stores(task_store, InMemoryRunRepository::new());
            // El resultado autoritativo sale del replay, no del Result.
            let _ = engine.run_to_completion(run_id, &definition).await;
            let outcome = engine.snapshot_for(run_id).outcome;
            let _ = outcome_tx.send(outcome);
        });

        RunHandle { run_id,
                    event_store,
                    repository: InMemoryRunRepository::new(),
                    outcome_rx }
    }
}

/// Handle vivo de una corrida en curso o terminada.
pub struct RunHandle {
    run_id: Uuid,
    event_store: Arc<InMemoryEventStore>,
    repository: InMemoryRunRepository,
    outcome_rx: watch::Receiver<RunOutcome>,
}

impl RunHandle {
    pub fn run_id(&self) -> Uuid {
        self.run_id
    }

    /// Foto puntual del estado de la corrida.
    pub fn status(&self) -> RunSnapshot {
        let events = self.event_store.list(self.run_id);
        self.repository.load(self.run_id, &events).snapshot()
    }

    /// Log de eventos de la corrida hasta el momento.
    pub fn events(&self) -> Vec<crate::event::SetupEvent> {
        self.event_store.list(self.run_id)
    }

    /// Espera el resultado terminal de la corrida.
    pub async fn wait(&mut self) -> RunOutcome {
        match self.outcome_rx.wait_for(|o| o.is_terminal()).await {
            Ok(outcome) => outcome.clone(),
            // El task soltó el sender sin notificar; el replay decide.
            Err(_) => self.status().outcome,
        }
    }
}
