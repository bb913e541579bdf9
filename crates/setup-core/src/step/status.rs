use serde::{Deserialize, Serialize};

/// Estado de un paso en tiempo de ejecución.
///
/// Las transiciones válidas son:
/// - `Pending` -> `Running`
/// - `Running` -> `Completed`
/// - `Running` -> `Failed`
///
/// `Completed` y `Failed` son terminales; no se permiten reversiones ni
/// reintentos dentro de la misma corrida.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum StepStatus {
    /// El paso está pendiente de ejecución.
    Pending,
    /// El paso está en ejecución.
    Running,
    /// El paso finalizó correctamente.
    Completed,
    /// El paso falló.
    Failed,
}

impl StepStatus {
    /// `true` si el paso ya no va a cambiar de estado.
    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::Completed | Self::Failed)
    }
}
