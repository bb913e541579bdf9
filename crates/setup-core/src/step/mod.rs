//! Definiciones relacionadas a pasos.
//!
//! Un paso es la unidad de trabajo de aprovisionamiento: una acción
//! asíncrona que termina en éxito o en fallo con razón. Este módulo define:
//! - `StepDefinition`: interfaz neutral usada por el motor.
//! - `StepRunResult`: resultado abstracto de una acción.
//! - `StepStatus`: estado observable por paso.

mod definition;
mod run_result;
mod status;

pub use definition::StepDefinition;
pub use run_result::StepRunResult;
pub use status::StepStatus;
