//! CLI del instalador de WebSchedulr.
//!
//! Subcomandos:
//! - `install --profile <FILE> [--state <PATH>]`: corre la secuencia de
//!   instalación desde un perfil JSON, mostrando el progreso por paso.
//! - `status [--state <PATH>]`: muestra el estado persistido.
//! - `reset [--state <PATH>]`: borra el estado (permite reinstalar).

use std::path::PathBuf;
use std::time::Duration;

use serde::Deserialize;

use setup_adapters::install_steps;
use setup_core::{RunOutcome, SetupEventKind, SetupRunner};
use setup_domain::{AdminAccount, AppEnv, DatabaseSettings, EnvConfig, InstallProfile};
use setup_persistence::{InstallStateStore, StateConfig};

/// Forma del perfil JSON tal como lo escribe el operador.
#[derive(Debug, Deserialize)]
struct ProfileInput {
    username: String,
    password: String,
    confirm_password: String,
    #[serde(default)]
    database: DatabaseSettings,
    #[serde(default)]
    environment: AppEnv,
    #[serde(default = "default_app_url")]
    app_url: String,
}

fn default_app_url() -> String {
    "http://localhost".to_string()
}

fn parse_profile(path: &PathBuf) -> Result<InstallProfile, String> {
    let raw = std::fs::read_to_string(path).map_err(|e| format!("no se pudo leer {}: {e}", path.display()))?;
    let input: ProfileInput = serde_json::from_str(&raw).map_err(|e| format!("perfil inválido: {e}"))?;
    let admin = AdminAccount::new(&input.username, &input.password, &input.confirm_password).map_err(|e| e.to_string())?;
    InstallProfile::new(admin, input.database, input.environment, input.app_url).map_err(|e| e.to_string())
}

fn state_store(state: Option<PathBuf>) -> InstallStateStore {
    match state {
        Some(path) => InstallStateStore::new(path),
        None => InstallStateStore::new(StateConfig::from_env().path),
    }
}

async fn run_install(profile_path: PathBuf, state: Option<PathBuf>) -> i32 {
    let profile = match parse_profile(&profile_path) {
        Ok(p) => p,
        Err(msg) => {
            eprintln!("[schedulr install] {msg}");
            return 3;
        }
    };

    let store = state_store(state);
    match store.is_installed() {
        Ok(true) => {
            eprintln!("[schedulr install] WebSchedulr ya está instalado (estado en {})", store.path().display());
            return 4;
        }
        Ok(false) => {}
        Err(e) => {
            eprintln!("[schedulr install] estado ilegible: {e}");
            return 5;
        }
    }

    println!("Installing WebSchedulr...");
    let mut handle = SetupRunner::start(install_steps(&profile));

    // Imprime eventos a medida que aparecen; el log es la fuente de verdad.
    let mut seen = 0usize;
    loop {
        let events = handle.events();
        for ev in events.iter().skip(seen) {
            match &ev.kind {
                SetupEventKind::StepStarted { step_index, step_id } => {
                    println!("  [{}/5] {step_id}...", step_index + 1);
                }
                SetupEventKind::StepCompleted { detail, .. } => {
                    match detail {
                        Some(d) => println!("        ok: {d}"),
                        None => println!("        ok"),
                    }
                }
                SetupEventKind::StepFailed { step_id, reason, .. } => {
                    println!("        FAILED {step_id}: {reason}");
                }
                _ => {}
            }
        }
        seen = events.len();
        if handle.status().outcome.is_terminal() {
            break;
        }
        tokio::time::sleep(Duration::from_millis(120)).await;
    }

    match handle.wait().await {
        RunOutcome::Succeeded => {
            let config = EnvConfig::from_profile(&profile);
            if let Err(e) = store.record_installation(profile.admin().username(), &config) {
                eprintln!("[schedulr install] la instalación terminó pero no se pudo guardar el estado: {e}");
                return 5;
            }
            println!("Installation complete (run {})", handle.run_id());
            println!("{}", config.to_env_string());
            0
        }
        RunOutcome::Failed { step_id, reason } => {
            eprintln!("[schedulr install] instalación fallida en el paso {step_id}: {reason}");
            5
        }
        other => {
            eprintln!("[schedulr install] resultado inesperado: {other:?}");
            5
        }
    }
}

fn show_status(state: Option<PathBuf>) -> i32 {
    let store = state_store(state);
    match store.is_installed() {
        Ok(true) => {
            println!("installed: true");
            if let Ok(Some(username)) = store.admin_username() {
                println!("admin: {username}");
            }
            if let Ok(Some(config)) = store.db_config() {
                println!("database: {}", config.db_connection);
            }
            0
        }
        Ok(false) => {
            println!("installed: false");
            0
        }
        Err(e) => {
            eprintln!("[schedulr status] estado ilegible: {e}");
            5
        }
    }
}

fn reset_state(state: Option<PathBuf>) -> i32 {
    let store = state_store(state);
    match store.reset() {
        Ok(()) => {
            println!("estado de instalación borrado");
            0
        }
        Err(e) => {
            eprintln!("[schedulr reset] {e}");
            5
        }
    }
}

#[tokio::main]
async fn main() {
    // Cargar .env si existe para obtener SCHEDULR_STATE_PATH
    let _ = dotenvy::dotenv();
    let args: Vec<String> = std::env::args().collect();

    let mut profile: Option<PathBuf> = None;
    let mut state: Option<PathBuf> = None;
    let mut i = 2;
    while i < args.len() {
        match args[i].as_str() {
            "--profile" => {
                i += 1;
                if i < args.len() {
                    profile = Some(PathBuf::from(&args[i]));
                }
            }
            "--state" => {
                i += 1;
                if i < args.len() {
                    state = Some(PathBuf::from(&args[i]));
                }
            }
            _ => {}
        }
        i += 1;
    }

    let code = match args.get(1).map(String::as_str) {
        Some("install") => {
            if let Some(profile_path) = profile {
                run_install(profile_path, state).await
            } else {
                eprintln!("Uso: schedulr-setup install --profile <FILE> [--state <PATH>]");
                2
            }
        }
        Some("status") => show_status(state),
        Some("reset") => reset_state(state),
        _ => {
            eprintln!("Uso: schedulr-setup <install|status|reset> [--profile <FILE>] [--state <PATH>]");
            2
        }
    };
    std::process::exit(code);
}
