//! WebSchedulr Setup Library
//!
//! Este crate actúa como la fachada del instalador:
//! - Expone `installer` con la orquestación completa (verificación previa,
//!   secuencia de pasos, persistencia sólo ante éxito).
//! - Reexporta los crates miembros para clientes que necesiten las piezas.
//!
//! Puede usarse desde `main.rs` (demo) o por otros crates/clientes.

pub mod installer;

pub use installer::{run_install, run_install_with_progress, InstallError, InstallReport};

pub use setup_adapters;
pub use setup_core;
pub use setup_domain;
pub use setup_persistence;

#[cfg(test)]
mod tests {
    use super::installer::InstallError;

    #[test]
    fn install_error_display() {
        let e = InstallError::Step { step: "connection".into(),
                                     reason: "Access denied for user".into() };
        assert_eq!(e.to_string(), "installation failed at step connection: Access denied for user");
        assert_eq!(InstallError::AlreadyInstalled.to_string(), "WebSchedulr is already installed");
    }
}
