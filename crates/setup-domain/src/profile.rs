//! Perfil de instalación: cuenta admin, conexión a base de datos y modo de
//! entorno. La validación ocurre en los constructores; un perfil inválido
//! nunca llega al secuenciador.

use serde::{Deserialize, Serialize};

use crate::database::DatabaseKind;
use crate::env::AppEnv;
use crate::errors::DomainError;

/// Datos de conexión del formulario de instalación. Los campos ausentes en
/// la entrada toman los valores del formulario original.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DatabaseSettings {
    pub kind: DatabaseKind,
    pub host: String,
    pub port: u16,
    pub name: String,
    pub user: String,
    pub password: String,
}

impl Default for DatabaseSettings {
    fn default() -> Self {
        Self { kind: DatabaseKind::Mysql,
               host: "localhost".to_string(),
               port: 3306,
               name: "webschedulr".to_string(),
               user: "root".to_string(),
               password: String::new() }
    }
}

impl DatabaseSettings {
    /// Variante sin configuración: los campos de conexión se ignoran.
    pub fn sqlite() -> Self {
        Self { kind: DatabaseKind::Sqlite,
               ..Self::default() }
    }

    /// Variante en red con el puerto convencional del motor.
    pub fn networked(kind: DatabaseKind, host: impl Into<String>, name: impl Into<String>, user: impl Into<String>, password: impl Into<String>) -> Self {
        Self { kind,
               host: host.into(),
               port: kind.default_port().unwrap_or(3306),
               name: name.into(),
               user: user.into(),
               password: password.into() }
    }

    fn validate(&self) -> Result<(), DomainError> {
        if self.kind.requires_connection()
           && (self.host.is_empty() || self.name.is_empty() || self.user.is_empty())
        {
            return Err(DomainError::ValidationError("All database connection fields are required".to_string()));
        }
        Ok(())
    }
}

/// Cuenta de administrador a crear durante la instalación.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AdminAccount {
    username: String,
    password: String,
}

impl AdminAccount {
    /// Valida usuario, contraseña y su confirmación.
    pub fn new(username: &str, password: &str, confirmation: &str) -> Result<Self, DomainError> {
        if username.is_empty() || password.is_empty() {
            return Err(DomainError::ValidationError("Username and password are required".to_string()));
        }
        if password != confirmation {
            return Err(DomainError::ValidationError("Passwords do not match".to_string()));
        }
        Ok(AdminAccount { username: username.to_string(),
                          password: password.to_string() })
    }

    pub fn username(&self) -> &str {
        &self.username
    }

    pub fn password(&self) -> &str {
        &self.password
    }
}

/// Perfil completo y validado de una instalación.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InstallProfile {
    admin: AdminAccount,
    database: DatabaseSettings,
    environment: AppEnv,
    app_url: String,
}

impl InstallProfile {
    pub fn new(admin: AdminAccount,
               database: DatabaseSettings,
               environment: AppEnv,
               app_url: impl Into<String>)
               -> Result<Self, DomainError> {
        database.validate()?;
        let app_url = app_url.into();
        if app_url.is_empty() {
            return Err(DomainError::ValidationError("Application URL is required".to_string()));
        }
        Ok(InstallProfile { admin,
                            database,
                            environment,
                            app_url })
    }

    pub fn admin(&self) -> &AdminAccount {
        &self.admin
    }

    pub fn database(&self) -> &DatabaseSettings {
        &self.database
    }

    pub fn environment(&self) -> AppEnv {
        self.environment
    }

    pub fn app_url(&self) -> &str {
        &self.app_url
    }
}
