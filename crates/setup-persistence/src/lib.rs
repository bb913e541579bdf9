//! setup-persistence
//!
//! Estado de instalación de WebSchedulr en disco. El único estado que
//! sobrevive entre intentos es el marcador de instalado, el usuario admin y
//! la configuración derivada; nada de historial de corridas.
//!
//! Módulos:
//! - `store`: documento clave-valor con escritura atómica.
//! - `config`: carga de configuración desde .env.

pub mod config;
pub mod error;
pub mod store;

pub use config::{init_dotenv, StateConfig, DEFAULT_STATE_PATH};
pub use error::PersistenceError;
pub use store::{InstallStateStore, KEY_ADMIN_USERNAME, KEY_DB_CONFIG, KEY_INSTALLED};
