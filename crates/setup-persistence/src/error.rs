//! Errores de persistencia.
//! Mapea errores de IO / serialización a variantes semánticas del estado de
//! instalación.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum PersistenceError {
    #[error("state io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("state serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}
