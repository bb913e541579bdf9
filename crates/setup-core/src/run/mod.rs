mod types;

pub use types::{InMemoryRunRepository, RunDefinition, RunInstance, RunOutcome, RunRepository, RunSnapshot, StepSlot};
