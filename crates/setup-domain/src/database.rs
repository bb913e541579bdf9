use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::errors::DomainError;

/// Ruta fija del archivo SQLite cuando se elige la variante sin
/// configuración.
pub const SQLITE_DATABASE_PATH: &str = "database/webschedulr.sqlite";

/// Motores de base de datos soportados por el instalador.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DatabaseKind {
    /// Variante sin configuración: un archivo local, sin host ni
    /// credenciales.
    Sqlite,
    Mysql,
    Postgresql,
}

impl DatabaseKind {
    /// `true` para las variantes en red, que requieren datos de conexión.
    pub fn requires_connection(&self) -> bool {
        !matches!(self, Self::Sqlite)
    }

    /// Puerto convencional del motor, si aplica.
    pub fn default_port(&self) -> Option<u16> {
        match self {
            Self::Sqlite => None,
            Self::Mysql => Some(3306),
            Self::Postgresql => Some(5432),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Sqlite => "sqlite",
            Self::Mysql => "mysql",
            Self::Postgresql => "postgresql",
        }
    }
}

impl fmt::Display for DatabaseKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DatabaseKind {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "sqlite" => Ok(Self::Sqlite),
            "mysql" => Ok(Self::Mysql),
            "postgresql" => Ok(Self::Postgresql),
            other => Err(DomainError::ValidationError(format!("unknown database kind: {other}"))),
        }
    }
}

/// Hosts considerados la máquina local. La regla demo de conexión sólo
/// falla contra hosts remotos.
pub fn is_local_host(host: &str) -> bool {
    matches!(host, "localhost" | "127.0.0.1" | "::1")
}
