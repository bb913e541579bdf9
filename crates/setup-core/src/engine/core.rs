//! Core SetupEngine implementation

use std::sync::Arc;

use uuid::Uuid;

use crate::engine::EngineBuilderInit;
use crate::errors::SetupError;
use crate::event::{EventStore, SetupEvent, SetupEventKind};
use crate::run::{RunDefinition, RunOutcome, RunRepository, RunSnapshot};
use crate::step::{StepDefinition, StepRunResult};

/// Motor de ejecución de corridas de aprovisionamiento.
///
/// Responsable de orquestar la ejecución de pasos en orden estricto,
/// registrar cada transición en el event store y cortar en el primer fallo.
pub struct SetupEngine<E, R>
    where E: EventStore,
          R: RunRepository
{
    event_store: Arc<E>,
    repository: R,
    default_run_id: Option<Uuid>,
    default_definition: Option<RunDefinition>,
}

impl<E, R> SetupEngine<E, R>
    where E: EventStore,
          R: RunRepository
{
    /// Crea un nuevo builder para configurar el engine.
    #[inline]
    pub fn builder(event_store: Arc<E>, repository: R) -> EngineBuilderInit<E, R> {
        EngineBuilderInit { event_store, repository }
    }

    /// Crea un nuevo engine con stores en memoria.
    #[inline]
    pub fn new() -> EngineBuilderInit<crate::event::InMemoryEventStore, crate::run::InMemoryRunRepository> {
        EngineBuilderInit { event_store: Arc::new(crate::event::InMemoryEventStore::default()),
                            repository: crate::run::InMemoryRunRepository::new() }
    }

    /// Crea un nuevo motor con los stores proporcionados.
    pub fn new_with_stores(event_store: Arc<E>, repository: R) -> Self {
        Self { event_store,
               repository,
               default_run_id: None,
               default_definition: None }
    }

    /// Acceso a la store de eventos compartida.
    pub fn event_store(&self) -> &Arc<E> {
        &self.event_store
    }

    /// Ensure a RunInitialized event exists and return the current events
    /// for the run (including the possibly newly appended RunInitialized).
    fn load_or_init(&mut self, run_id: Uuid, definition: &RunDefinition) -> Vec<SetupEvent> {
        let mut events = self.event_store.list(run_id);
        let has_init = events.iter().any(|e| matches!(e.kind, SetupEventKind::RunInitialized { .. }));
        if !has_init {
            let ev = self.event_store
                         .append_kind(run_id, SetupEventKind::RunInitialized { step_ids: definition.step_ids() });
            events.push(ev);
        }
        self.default_run_id = Some(run_id);
        events
    }

    /// Define/genera un `run_id` por defecto si no existe aún y lo retorna.
    pub fn ensure_default_run_id(&mut self) -> Uuid {
        if self.default_run_id.is_none() {
            self.default_run_id = Some(Uuid::new_v4());
        }
        self.default_run_id.unwrap()
    }

    /// Fija explícitamente un `run_id` por defecto.
    pub fn set_default_run_id(&mut self, run_id: Uuid) {
        self.default_run_id = Some(run_id);
    }

    /// Obtiene el `run_id` por defecto si está configurado.
    pub fn default_run_id(&self) -> Option<Uuid> {
        self.default_run_id
    }

    /// Configura la definición por defecto de la corrida.
    pub fn set_default_definition(&mut self, definition: RunDefinition) {
        self.default_definition = Some(definition);
    }

    /// Ejecuta la corrida completa usando la definición por defecto y
    /// retorna el id de la corrida ejecutada.
    pub async fn run(&mut self) -> Result<Uuid, SetupError> {
        let run_id = self.ensure_default_run_id();
        let def = self.default_definition
                      .take()
                      .ok_or_else(|| SetupError::Internal("no default definition configured".into()))?;

        let result = self.run_to_completion(run_id, &def).await;
        self.default_definition = Some(def);
        result
    }

    /// Avanza un paso en la corrida por defecto.
    pub async fn next(&mut self) -> Result<(), SetupError> {
        let run_id = self.ensure_default_run_id();
        let def = self.default_definition
                      .take()
                      .ok_or_else(|| SetupError::Internal("no default definition configured".into()))?;

        let result = self.next_with(run_id, &def).await;
        self.default_definition = Some(def);
        result
    }

    /// Alias de `next`.
    pub async fn step(&mut self) -> Result<(), SetupError> {
        self.next().await
    }

    /// Ejecuta una corrida específica hasta su finalización.
    pub async fn run_to_completion(&mut self, run_id: Uuid, definition: &RunDefinition) -> Result<Uuid, SetupError> {
        loop {
            match self.next_with(run_id, definition).await {
                Ok(()) => continue,
                Err(SetupError::RunCompleted) => return Ok(run_id),
                Err(e) => return Err(e),
            }
        }
    }

    /// Ejecuta el siguiente paso pendiente de la corrida.
    pub(crate) async fn next_with(&mut self, run_id: Uuid, definition: &RunDefinition) -> Result<(), SetupError> {
        let events = self.load_or_init(run_id, definition);
        let instance = self.repository.load(run_id, &events);

        match instance.outcome {
            RunOutcome::Succeeded => return Err(SetupError::RunCompleted),
            RunOutcome::Failed { .. } => return Err(SetupError::RunHasFailed),
            _ => {}
        }

        let cursor = instance.cursor;
        if cursor >= definition.len() {
            // Definición vacía: cerrar la corrida sin pasos.
            self.complete_run(run_id);
            return Err(SetupError::RunCompleted);
        }

        let step_def = &definition.steps[cursor];
        let _started = self.event_store.append_kind(run_id,
                                                    SetupEventKind::StepStarted { step_index: cursor,
                                                                                  step_id: step_def.id().to_string() });

        match step_def.run().await {
            StepRunResult::Success { detail } => {
                self.handle_step_success(run_id, cursor, step_def.as_ref(), detail, definition)
            }
            StepRunResult::Failure { reason } => self.handle_step_failure(run_id, cursor, step_def.as_ref(), reason),
        }
    }

    fn handle_step_success(&mut self,
                           run_id: Uuid,
                           cursor: usize,
                           step_def: &dyn StepDefinition,
                           detail: Option<String>,
                           definition: &RunDefinition)
                           -> Result<(), SetupError> {
        let _finished = self.event_store.append_kind(run_id,
                                                     SetupEventKind::StepCompleted { step_index: cursor,
                                                                                     step_id: step_def.id().to_string(),
                                                                                     detail });

        if cursor + 1 == definition.len() {
            self.complete_run(run_id);
        }

        Ok(())
    }

    fn handle_step_failure(&mut self,
                           run_id: Uuid,
                           cursor: usize,
                           step_def: &dyn StepDefinition,
                           reason: String)
                           -> Result<(), SetupError> {
        let _ = self.event_store.append_kind(run_id,
                                             SetupEventKind::StepFailed { step_index: cursor,
                                                                          step_id: step_def.id().to_string(),
                                                                          reason: reason.clone() });

        Err(SetupError::StepFailed { step: step_def.id().to_string(),
                                     reason })
    }

    fn complete_run(&self, run_id: Uuid) {
        let _ = self.event_store.append_kind(run_id, SetupEventKind::RunCompleted);
    }

    /// Lista eventos de la corrida por defecto.
    pub fn events(&self) -> Option<Vec<SetupEvent>> {
        self.default_run_id.map(|rid| self.event_store.list(rid))
    }

    /// Foto del estado de una corrida concreta (replay sobre la store).
    pub fn snapshot_for(&self, run_id: Uuid) -> RunSnapshot {
        let events = self.event_store.list(run_id);
        self.repository.load(run_id, &events).snapshot()
    }

    /// Foto del estado de la corrida por defecto si está configurada.
    pub fn snapshot(&self) -> Option<RunSnapshot> {
        self.default_run_id.map(|rid| self.snapshot_for(rid))
    }
}

impl Default for SetupEngine<crate::event::InMemoryEventStore, crate::run::InMemoryRunRepository> {
    fn default() -> Self {
        Self::new_with_stores(Arc::new(crate::event::InMemoryEventStore::default()),
                              crate::run::InMemoryRunRepository::new())
    }
}
