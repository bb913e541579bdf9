//! Tipos de corrida: estado reconstruido (RunInstance) y definición
//! (RunDefinition).
//!
//! El repositorio aplica un replay lineal: consume eventos en orden y
//! actualiza un `RunInstance` por evento. Los ids de pasos viajan en
//! `RunInitialized`, así el replay no necesita la definición viva (que
//! contiene las acciones y queda dentro del task del motor).
use chrono::{DateTime, Utc};
use indexmap::IndexMap;
use serde::Serialize;
use uuid::Uuid;

use crate::event::{SetupEvent, SetupEventKind};
use crate::step::{StepDefinition, StepStatus};

/// Definición inmutable de la corrida: pasos en orden de ejecución.
pub struct RunDefinition {
    pub steps: Vec<Box<dyn StepDefinition>>,
}

impl RunDefinition {
    pub fn new(steps: Vec<Box<dyn StepDefinition>>) -> Self {
        Self { steps }
    }

    pub fn len(&self) -> usize {
        self.steps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    /// Ids de pasos en orden; es lo que se fija en `RunInitialized`.
    pub fn step_ids(&self) -> Vec<String> {
        self.steps.iter().map(|s| s.id().to_string()).collect()
    }
}

/// Resultado global de una corrida.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum RunOutcome {
    /// Sin eventos todavía.
    NotStarted,
    /// La corrida está en curso.
    Running,
    /// Todos los pasos completados.
    Succeeded,
    /// Un paso falló; los posteriores quedaron pendientes.
    Failed { step_id: String, reason: String },
}

impl RunOutcome {
    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::Succeeded | Self::Failed { .. })
    }
}

/// Estado de un paso en la instancia.
pub struct StepSlot {
    pub step_id: String,
    pub status: StepStatus,
    pub detail: Option<String>,
    pub reason: Option<String>,
    pub started_at: Option<DateTime<Utc>>,
    pub finished_at: Option<DateTime<Utc>>,
}

/// Estado completo de una corrida, reconstruido por replay.
pub struct RunInstance {
    pub id: Uuid,
    pub steps: Vec<StepSlot>,
    pub cursor: usize,
    pub outcome: RunOutcome,
}

impl RunInstance {
    /// Proyección para sondeo: órden 1-based del paso en ejecución (si lo
    /// hay), estado por paso en orden de definición y resultado global.
    pub fn snapshot(&self) -> RunSnapshot {
        let current_step_order = self.steps
                                     .iter()
                                     .position(|s| matches!(s.status, StepStatus::Running))
                                     .map(|i| i + 1);
        let statuses: IndexMap<String, StepStatus> =
            self.steps.iter().map(|s| (s.step_id.clone(), s.status)).collect();
        RunSnapshot { current_step_order,
                      statuses,
                      outcome: self.outcome.clone() }
    }
}

/// Foto puntual de la corrida, segura de sondear mientras corre.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RunSnapshot {
    pub current_step_order: Option<usize>,
    pub statuses: IndexMap<String, StepStatus>,
    pub outcome: RunOutcome,
}

/// Trait para reconstruir (`replay`) el estado de una corrida a partir de
/// eventos.
pub trait RunRepository: Send + Sync {
    fn load(&self, run_id: Uuid, events: &[SetupEvent]) -> RunInstance;
}

pub struct InMemoryRunRepository;

impl InMemoryRunRepository {
    pub fn new() -> Self {
        Self
    }
}

impl Default for InMemoryRunRepository {
    fn default() -> Self {
        Self::new()
    }
}

impl RunRepository for InMemoryRunRepository {
    fn load(&self, run_id: Uuid, events: &[SetupEvent]) -> RunInstance {
        let mut steps: Vec<StepSlot> = Vec::new();
        let mut outcome = RunOutcome::NotStarted;
        for ev in events {
            match &ev.kind {
                SetupEventKind::RunInitialized { step_ids } => {
                    steps = step_ids.iter()
                                    .map(|id| StepSlot { step_id: id.clone(),
                                                         status: StepStatus::Pending,
                                                         detail: None,
                                                         reason: None,
                                                         started_at: None,
                                                         finished_at: None })
                                    .collect();
                    outcome = RunOutcome::Running;
                }
                SetupEventKind::StepStarted { step_index, .. } => {
                    if let Some(slot) = steps.get_mut(*step_index) {
                        slot.status = StepStatus::Running;
                        slot.started_at = Some(ev.ts);
                    }
                }
                SetupEventKind::StepCompleted { step_index, detail, .. } => {
                    if let Some(slot) = steps.get_mut(*step_index) {
                        slot.status = StepStatus::Completed;
                        slot.detail = detail.clone();
                        slot.finished_at = Some(ev.ts);
                    }
                }
                SetupEventKind::StepFailed { step_index, step_id, reason } => {
                    if let Some(slot) = steps.get_mut(*step_index) {
                        slot.status = StepStatus::Failed;
                        slot.reason = Some(reason.clone());
                        slot.finished_at = Some(ev.ts);
                    }
                    outcome = RunOutcome::Failed { step_id: step_id.clone(),
                                                   reason: reason.clone() };
                }
                SetupEventKind::RunCompleted => outcome = RunOutcome::Succeeded,
            }
        }
        let cursor = steps.iter()
                          .position(|s| matches!(s.status, StepStatus::Pending))
                          .unwrap_or(steps.len());
        RunInstance { id: run_id,
                      steps,
                      cursor,
                      outcome }
    }
}
