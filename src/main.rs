//! Demo del instalador: corre la secuencia completa con un perfil SQLite de
//! ejemplo e imprime el progreso y la configuración generada.

use schedulr_setup::installer::{run_install_with_progress, InstallError};
use setup_domain::{AdminAccount, AppEnv, DatabaseSettings, InstallProfile};
use setup_persistence::InstallStateStore;

#[tokio::main]
async fn main() {
    // Cargar .env si existe para obtener SCHEDULR_STATE_PATH
    let _ = dotenvy::dotenv();

    let profile = match demo_profile() {
        Ok(p) => p,
        Err(e) => {
            eprintln!("[setup-demo] perfil inválido: {e}");
            std::process::exit(3);
        }
    };

    let store = InstallStateStore::from_env();
    let result = run_install_with_progress(&profile, &store, |snapshot| {
                     if let Some(order) = snapshot.current_step_order {
                         println!("  paso {}/{} en ejecución", order, snapshot.statuses.len());
                     }
                 }).await;

    match result {
        Ok(report) => {
            println!("Instalación completa (run {})", report.run_id);
            println!("admin: {}", report.admin_username);
            println!("\n{}", report.config.to_env_string());
        }
        Err(InstallError::AlreadyInstalled) => {
            println!("WebSchedulr ya está instalado; use `schedulr-setup reset` para reinstalar");
        }
        Err(e) => {
            eprintln!("[setup-demo] error: {e}");
            std::process::exit(5);
        }
    }
}

fn demo_profile() -> Result<InstallProfile, setup_domain::DomainError> {
    let admin = AdminAccount::new("admin", "changeme", "changeme")?;
    InstallProfile::new(admin, DatabaseSettings::sqlite(), AppEnv::Development, "http://localhost")
}
