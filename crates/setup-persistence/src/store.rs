//! Estado de instalación como documento clave-valor en disco.
//!
//! Tres claves, todas con valor string, escritas únicamente cuando la
//! corrida completa reporta éxito:
//! - `webschedulr_installed`: `"true"` una vez instalado.
//! - `webschedulr_admin_username`: usuario admin de la corrida.
//! - `webschedulr_db_config`: `EnvConfig` serializado.
//!
//! La escritura pasa por archivo temporal + rename para no dejar nunca un
//! estado a medio escribir.

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use setup_domain::EnvConfig;

use crate::config::StateConfig;
use crate::error::PersistenceError;

pub const KEY_INSTALLED: &str = "webschedulr_installed";
pub const KEY_ADMIN_USERNAME: &str = "webschedulr_admin_username";
pub const KEY_DB_CONFIG: &str = "webschedulr_db_config";

pub struct InstallStateStore {
    path: PathBuf,
}

impl InstallStateStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn from_env() -> Self {
        Self::new(StateConfig::from_env().path)
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read_map(&self) -> Result<BTreeMap<String, String>, PersistenceError> {
        let bytes = match fs::read(&self.path) {
            Ok(bytes) => bytes,
            // Sin archivo todavía: estado vacío, no instalado.
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(BTreeMap::new()),
            Err(e) => return Err(e.into()),
        };
        let map = serde_json::from_slice(&bytes)?;
        Ok(map)
    }

    fn write_map(&self, map: &BTreeMap<String, String>) -> Result<(), PersistenceError> {
        let text = serde_json::to_string_pretty(map)?;
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }
        let tmp = self.path.with_extension("json.tmp");
        fs::write(&tmp, text.as_bytes())?;
        fs::rename(&tmp, &self.path)?;
        Ok(())
    }

    pub fn get(&self, key: &str) -> Result<Option<String>, PersistenceError> {
        Ok(self.read_map()?.get(key).cloned())
    }

    /// `true` sólo cuando el marcador vale exactamente `"true"`.
    pub fn is_installed(&self) -> Result<bool, PersistenceError> {
        Ok(self.get(KEY_INSTALLED)?.as_deref() == Some("true"))
    }

    pub fn admin_username(&self) -> Result<Option<String>, PersistenceError> {
        self.get(KEY_ADMIN_USERNAME)
    }

    /// Configuración derivada de la última instalación exitosa, si existe.
    pub fn db_config(&self) -> Result<Option<EnvConfig>, PersistenceError> {
        match self.get(KEY_DB_CONFIG)? {
            Some(raw) => Ok(Some(serde_json::from_str(&raw)?)),
            None => Ok(None),
        }
    }

    /// Registra una instalación exitosa: marcador, usuario admin y
    /// configuración, en una sola escritura.
    pub fn record_installation(&self, admin_username: &str, config: &EnvConfig) -> Result<(), PersistenceError> {
        let mut map = self.read_map()?;
        map.insert(KEY_INSTALLED.to_string(), "true".to_string());
        map.insert(KEY_ADMIN_USERNAME.to_string(), admin_username.to_string());
        map.insert(KEY_DB_CONFIG.to_string(), serde_json::to_string(config)?);
        self.write_map(&map)?;
        log::info!("installation recorded for admin '{}' at {}", admin_username, self.path.display());
        Ok(())
    }

    /// Borra el estado de instalación (permite reinstalar).
    pub fn reset(&self) -> Result<(), PersistenceError> {
        match fs::remove_file(&self.path) {
            Ok(()) => {
                log::debug!("install state removed at {}", self.path.display());
                Ok(())
            }
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }
}
