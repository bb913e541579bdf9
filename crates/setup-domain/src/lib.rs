//! setup-domain: tipos del dominio de instalación de WebSchedulr.
//!
//! - `DatabaseKind` y `AppEnv`: opciones cerradas del formulario.
//! - `InstallProfile`: entrada validada del instalador (la puerta de
//!   precondiciones previa al secuenciador).
//! - `EnvConfig`: configuración derivada que se persiste al tener éxito.

mod database;
mod env;
mod errors;
mod profile;

pub use database::{is_local_host, DatabaseKind, SQLITE_DATABASE_PATH};
pub use env::{AppEnv, EnvConfig, APP_NAME};
pub use errors::DomainError;
pub use profile::{AdminAccount, DatabaseSettings, InstallProfile};
