use async_trait::async_trait;

use super::run_result::StepRunResult;

/// Trait que define un paso de aprovisionamiento.
///
/// La acción es asíncrona: el motor queda suspendido hasta que resuelva.
/// Implementaciones capturan su configuración al construirse y no deben
/// depender de estado mutable compartido.
#[async_trait]
pub trait StepDefinition: Send + Sync {
    /// Identificador estable y único dentro de la corrida.
    fn id(&self) -> &str;

    /// Título amigable para UI. Por defecto el id.
    fn title(&self) -> &str {
        self.id()
    }

    /// Ejecuta la acción del paso hasta éxito o fallo con razón.
    async fn run(&self) -> StepRunResult;
}
