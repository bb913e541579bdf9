//! Tipos de evento de la corrida y estructura `SetupEvent`.
//!
//! Rol en la corrida:
//! - Cada ejecución del `SetupEngine` emite eventos a un `EventStore`
//!   append-only.
//! - Estos eventos permiten reconstruir el estado del `RunRepository`
//!   (replay) sin depender de estructuras mutables.
//! - El enum `SetupEventKind` define el contrato observable y estable del
//!   motor.
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Tipos de eventos soportados por el motor de instalación.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum SetupEventKind {
    /// Emisión inicial de una corrida: fija los ids de pasos en orden.
    /// Invariante: Debe ser el primer evento de un `run_id`.
    RunInitialized { step_ids: Vec<String> },
    /// Un paso comenzó su ejecución. No implica éxito.
    StepStarted { step_index: usize, step_id: String },
    /// Un paso terminó correctamente, con un detalle opcional para mostrar.
    StepCompleted {
        step_index: usize,
        step_id: String,
        detail: Option<String>,
    },
    /// Un paso terminó con error terminal. La corrida no continúa
    /// (stop-on-failure).
    StepFailed {
        step_index: usize,
        step_id: String,
        reason: String,
    },
    /// Evento de cierre: todos los pasos terminaron correctamente.
    RunCompleted,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SetupEvent {
    pub seq: u64, // asignado por el EventStore (orden append)
    pub run_id: Uuid,
    pub kind: SetupEventKind,
    pub ts: DateTime<Utc>, // metadato de observabilidad
}
