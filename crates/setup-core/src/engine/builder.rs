//! Builder para `SetupEngine`.
//!
//! Obliga a declarar el primer paso antes de encadenar el resto; `build`
//! consume el builder y deja la definición resultante como definición por
//! defecto del engine. Los pasos no encadenan artefactos entre sí, así que
//! no hay validación de tipos entre etapas.

use std::sync::Arc;

use crate::engine::SetupEngine;
use crate::event::EventStore;
use crate::run::{RunDefinition, RunRepository};
use crate::step::StepDefinition;

/// Estado inicial del builder.
///
/// Contiene las stores necesarias para crear un `SetupEngine`. Antes de
/// poder añadir pasos debemos definir el primero.
pub struct EngineBuilderInit<E: EventStore, R: RunRepository> {
    /// Store de eventos que usará el engine.
    pub event_store: Arc<E>,
    /// Repositorio de replay de la corrida.
    pub repository: R,
}

impl<E: EventStore, R: RunRepository> EngineBuilderInit<E, R> {
    /// Define el primer paso de la corrida y transiciona al builder completo.
    #[inline]
    pub fn first_step<S>(self, step: S) -> EngineBuilder<E, R>
        where S: StepDefinition + 'static
    {
        EngineBuilder { event_store: self.event_store,
                        repository: self.repository,
                        steps: vec![Box::new(step)] }
    }
}

/// Builder principal que acumula pasos en orden de ejecución.
pub struct EngineBuilder<E: EventStore, R: RunRepository> {
    event_store: Arc<E>,
    repository: R,
    steps: Vec<Box<dyn StepDefinition>>,
}

impl<E: EventStore, R: RunRepository> EngineBuilder<E, R> {
    /// Añade el siguiente paso de la corrida.
    #[inline]
    pub fn add_step<S>(mut self, next: S) -> Self
        where S: StepDefinition + 'static
    {
        self.steps.push(Box::new(next));
        self
    }

    /// Construye el `SetupEngine` final usando las stores y la lista de pasos.
    #[inline]
    pub fn build(self) -> SetupEngine<E, R> {
        let mut engine = SetupEngine::new_with_stores(self.event_store, self.repository);
        engine.set_default_definition(RunDefinition::new(self.steps));
        engine
    }
}
