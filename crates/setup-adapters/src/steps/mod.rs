//! Pasos concretos del instalador, en su orden fijo de ejecución.

mod admin;
mod connection;
mod database;
mod env;
mod tables;

pub use admin::CreateAdminStep;
pub use connection::TestConnectionStep;
pub use database::CreateDatabaseStep;
pub use env::WriteEnvStep;
pub use tables::CreateTablesStep;

use setup_core::RunDefinition;
use setup_domain::{EnvConfig, InstallProfile};

/// Construye la secuencia fija de instalación a partir de un perfil
/// validado: connection -> database -> tables -> admin -> env.
///
/// Ningún paso puede saltarse ni reordenarse una vez que la corrida
/// comienza; los posteriores dependen lógicamente de los previos.
pub fn install_steps(profile: &InstallProfile) -> RunDefinition {
    RunDefinition::new(vec![Box::new(TestConnectionStep::from_settings(profile.database())),
                            Box::new(CreateDatabaseStep::from_settings(profile.database())),
                            Box::new(CreateTablesStep::new()),
                            Box::new(CreateAdminStep::new(profile.admin().username())),
                            Box::new(WriteEnvStep::new(EnvConfig::from_profile(profile)))])
}
