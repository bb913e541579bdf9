//! setup-core: Motor lineal de aprovisionamiento
//!
//! Una corrida ejecuta pasos en orden estricto hasta completarse o hasta el
//! primer fallo. El estado se registra como eventos append-only y se
//! reconstruye por replay, de modo que el progreso por paso sea
//! consultable en cualquier punto de la corrida.

pub mod engine;
pub mod errors;
pub mod event;
pub mod run;
pub mod runner;
pub mod step;

pub use engine::{EngineBuilder, EngineBuilderInit, SetupEngine};
pub use errors::SetupError;
pub use event::{EventStore, InMemoryEventStore, SetupEvent, SetupEventKind};
pub use run::{InMemoryRunRepository, RunDefinition, RunInstance, RunOutcome, RunRepository, RunSnapshot, StepSlot};
pub use runner::{RunHandle, SetupRunner};
pub use step::{StepDefinition, StepRunResult, StepStatus};
