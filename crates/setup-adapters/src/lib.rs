//! setup-adapters: acciones simuladas de aprovisionamiento de WebSchedulr.
//!
//! Cada paso es un stand-in con retardo fijo de la operación real (probar
//! conexión, crear base, migrar esquema, crear admin, emitir .env). Una
//! implementación con backend real sustituye cada acción detrás del mismo
//! contrato `StepDefinition`, sin tocar el secuenciador.

pub mod steps;

pub use steps::{install_steps, CreateAdminStep, CreateDatabaseStep, CreateTablesStep, TestConnectionStep, WriteEnvStep};
