//! Modo de entorno y configuración derivada.
//!
//! `EnvConfig` es el objeto que se persiste al finalizar una instalación
//! exitosa: las claves en mayúsculas reproducen el archivo de entorno de la
//! aplicación. Para variantes en red se incluyen host/puerto/credenciales;
//! para SQLite sólo la ruta del archivo.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::database::{DatabaseKind, SQLITE_DATABASE_PATH};
use crate::errors::DomainError;
use crate::profile::InstallProfile;

/// Nombre de la aplicación tal como aparece en la configuración generada.
pub const APP_NAME: &str = "WebSchedulr";

/// Modo de ejecución de la aplicación instalada.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AppEnv {
    Production,
    Development,
}

impl AppEnv {
    /// Flag de debug derivado: activo sólo en desarrollo.
    pub fn debug(&self) -> bool {
        matches!(self, Self::Development)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Production => "production",
            Self::Development => "development",
        }
    }
}

impl Default for AppEnv {
    fn default() -> Self {
        Self::Production
    }
}

impl fmt::Display for AppEnv {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for AppEnv {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "production" => Ok(Self::Production),
            "development" => Ok(Self::Development),
            other => Err(DomainError::ValidationError(format!("unknown environment mode: {other}"))),
        }
    }
}

/// Configuración derivada del perfil, lista para serializar.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EnvConfig {
    #[serde(rename = "APP_NAME")]
    pub app_name: String,
    #[serde(rename = "APP_ENV")]
    pub app_env: AppEnv,
    #[serde(rename = "APP_DEBUG")]
    pub app_debug: bool,
    #[serde(rename = "APP_URL")]
    pub app_url: String,
    #[serde(rename = "DB_CONNECTION")]
    pub db_connection: DatabaseKind,
    #[serde(rename = "ADMIN_USERNAME")]
    pub admin_username: String,
    #[serde(rename = "DB_HOST", default, skip_serializing_if = "Option::is_none")]
    pub db_host: Option<String>,
    #[serde(rename = "DB_PORT", default, skip_serializing_if = "Option::is_none")]
    pub db_port: Option<u16>,
    /// Nombre de la base para variantes en red; ruta del archivo para SQLite.
    #[serde(rename = "DB_DATABASE")]
    pub db_database: String,
    #[serde(rename = "DB_USERNAME", default, skip_serializing_if = "Option::is_none")]
    pub db_username: Option<String>,
    #[serde(rename = "DB_PASSWORD", default, skip_serializing_if = "Option::is_none")]
    pub db_password: Option<String>,
}

impl EnvConfig {
    /// Deriva la configuración a persistir desde un perfil validado.
    pub fn from_profile(profile: &InstallProfile) -> Self {
        let db = profile.database();
        let base = Self { app_name: APP_NAME.to_string(),
                          app_env: profile.environment(),
                          app_debug: profile.environment().debug(),
                          app_url: profile.app_url().to_string(),
                          db_connection: db.kind,
                          admin_username: profile.admin().username().to_string(),
                          db_host: None,
                          db_port: None,
                          db_database: String::new(),
                          db_username: None,
                          db_password: None };

        if db.kind.requires_connection() {
            Self { db_host: Some(db.host.clone()),
                   db_port: Some(db.port),
                   db_database: db.name.clone(),
                   db_username: Some(db.user.clone()),
                   db_password: Some(db.password.clone()),
                   ..base }
        } else {
            Self { db_database: SQLITE_DATABASE_PATH.to_string(),
                   ..base }
        }
    }

    /// Render en formato dotenv, una clave por línea y en orden estable.
    pub fn to_env_string(&self) -> String {
        let mut lines = vec![format!("APP_NAME={}", self.app_name),
                             format!("APP_ENV={}", self.app_env),
                             format!("APP_DEBUG={}", self.app_debug),
                             format!("APP_URL={}", self.app_url),
                             String::new(),
                             format!("DB_CONNECTION={}", self.db_connection)];
        if let Some(host) = &self.db_host {
            lines.push(format!("DB_HOST={host}"));
        }
        if let Some(port) = self.db_port {
            lines.push(format!("DB_PORT={port}"));
        }
        lines.push(format!("DB_DATABASE={}", self.db_database));
        if let Some(user) = &self.db_username {
            lines.push(format!("DB_USERNAME={user}"));
        }
        if let Some(password) = &self.db_password {
            lines.push(format!("DB_PASSWORD={password}"));
        }
        lines.push(String::new());
        lines.push(format!("ADMIN_USERNAME={}", self.admin_username));
        lines.join("\n")
    }
}
