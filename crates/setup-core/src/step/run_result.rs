/// Resultado abstracto de ejecutar un paso.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StepRunResult {
    /// El paso terminó bien; `detail` es una línea legible para mostrar.
    Success { detail: Option<String> },
    /// El paso falló con una razón legible. El motor no interpreta la razón.
    Failure { reason: String },
}
