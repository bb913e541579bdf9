//! Carga de configuración del estado de instalación desde variables de
//! entorno. Usa convención `SCHEDULR_STATE_PATH` con un default local.

use std::env;
use std::path::PathBuf;

use dotenvy::dotenv;
use once_cell::sync::Lazy;

/// Ruta por defecto del archivo de estado cuando no hay variable definida.
pub const DEFAULT_STATE_PATH: &str = "schedulr_state.json";

// Carga perezosa del archivo .env una sola vez.
static DOTENV_LOADED: Lazy<()> = Lazy::new(|| {
    let _ = dotenv(); // ignora error si no existe .env
});

#[derive(Debug, Clone)]
pub struct StateConfig {
    pub path: PathBuf,
}

impl StateConfig {
    pub fn from_env() -> Self {
        // asegura que .env se haya cargado
        Lazy::force(&DOTENV_LOADED);
        let path = env::var("SCHEDULR_STATE_PATH").map(PathBuf::from)
                                                  .unwrap_or_else(|_| PathBuf::from(DEFAULT_STATE_PATH));
        Self { path }
    }
}

/// Forzar carga temprana de .env desde aplicaciones externas si se desea.
pub fn init_dotenv() {
    Lazy::force(&DOTENV_LOADED);
}
