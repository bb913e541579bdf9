//! Orquestación completa de una instalación de WebSchedulr.
//!
//! Reproduce la secuencia del envío del formulario: verificación de
//! instalado, corrida de los cinco pasos y, sólo ante éxito global,
//! persistencia del marcador, el usuario admin y la configuración derivada.
//! Un intento fallido no escribe nada; reintentar crea una corrida nueva
//! desde el paso 1.

use std::time::Duration;

use thiserror::Error;
use uuid::Uuid;

use setup_adapters::install_steps;
use setup_core::{RunOutcome, RunSnapshot, SetupRunner};
use setup_domain::{DomainError, EnvConfig, InstallProfile};
use setup_persistence::{InstallStateStore, PersistenceError};

/// Cadencia de sondeo del progreso mientras la corrida avanza.
pub const POLL_INTERVAL: Duration = Duration::from_millis(120);

#[derive(Debug, Error)]
pub enum InstallError {
    #[error("WebSchedulr is already installed")]
    AlreadyInstalled,
    #[error(transparent)]
    Validation(#[from] DomainError),
    #[error("installation failed at step {step}: {reason}")]
    Step { step: String, reason: String },
    #[error(transparent)]
    Persistence(#[from] PersistenceError),
}

/// Resultado de una instalación exitosa.
#[derive(Debug, Clone)]
pub struct InstallReport {
    pub run_id: Uuid,
    pub admin_username: String,
    pub config: EnvConfig,
}

/// Corre la instalación completa sin observador de progreso.
pub async fn run_install(profile: &InstallProfile, store: &InstallStateStore) -> Result<InstallReport, InstallError> {
    run_install_with_progress(profile, store, |_| {}).await
}

/// Corre la instalación completa invocando `on_progress` en cada cambio de
/// foto de la corrida (incluida la terminal).
pub async fn run_install_with_progress<F>(profile: &InstallProfile,
                                          store: &InstallStateStore,
                                          mut on_progress: F)
                                          -> Result<InstallReport, InstallError>
    where F: FnMut(&RunSnapshot)
{
    if store.is_installed()? {
        return Err(InstallError::AlreadyInstalled);
    }

    let mut handle = SetupRunner::start(install_steps(profile));

    let mut last: Option<RunSnapshot> = None;
    loop {
        let snapshot = handle.status();
        let changed = last.as_ref() != Some(&snapshot);
        if changed {
            on_progress(&snapshot);
            last = Some(snapshot.clone());
        }
        if snapshot.outcome.is_terminal() {
            break;
        }
        tokio::time::sleep(POLL_INTERVAL).await;
    }

    match handle.wait().await {
        RunOutcome::Succeeded => {
            // La persistencia ocurre una sola vez, después del éxito global.
            let config = EnvConfig::from_profile(profile);
            store.record_installation(profile.admin().username(), &config)?;
            log::info!("WebSchedulr installed for admin '{}'", profile.admin().username());
            Ok(InstallReport { run_id: handle.run_id(),
                               admin_username: profile.admin().username().to_string(),
                               config })
        }
        RunOutcome::Failed { step_id, reason } => Err(InstallError::Step { step: step_id, reason }),
        other => Err(InstallError::Step { step: "sequencer".to_string(),
                                          reason: format!("unexpected non-terminal outcome: {other:?}") }),
    }
}
