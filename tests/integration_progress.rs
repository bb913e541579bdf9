//! Observabilidad del progreso durante una instalación en curso.

use schedulr_setup::installer::run_install_with_progress;
use setup_core::{RunOutcome, RunSnapshot, StepStatus};
use setup_domain::{AdminAccount, AppEnv, DatabaseSettings, InstallProfile};
use setup_persistence::InstallStateStore;

#[tokio::test(start_paused = true)]
async fn progress_snapshots_cover_the_whole_run() {
    let dir = tempfile::tempdir().unwrap();
    let store = InstallStateStore::new(dir.path().join("state.json"));
    let admin = AdminAccount::new("admin", "pw", "pw").unwrap();
    let profile = InstallProfile::new(admin, DatabaseSettings::sqlite(), AppEnv::Production, "http://localhost").unwrap();

    let mut snapshots: Vec<RunSnapshot> = Vec::new();
    run_install_with_progress(&profile, &store, |s| snapshots.push(s.clone())).await
                                                                              .expect("install should succeed");

    assert!(!snapshots.is_empty());

    // La primera foto ya cubre los cinco pasos.
    let first = &snapshots[0];
    assert_eq!(first.statuses.len(), 5);
    assert!(first.statuses.values().all(|s| *s != StepStatus::Failed));

    // La última es terminal y sin paso en ejecución.
    let last = snapshots.last().unwrap();
    assert_eq!(last.outcome, RunOutcome::Succeeded);
    assert_eq!(last.current_step_order, None);
    assert!(last.statuses.values().all(|s| *s == StepStatus::Completed));

    // El orden del paso en ejecución nunca retrocede.
    let orders: Vec<usize> = snapshots.iter().filter_map(|s| s.current_step_order).collect();
    assert!(orders.windows(2).all(|w| w[0] <= w[1]), "step order went backwards: {orders:?}");

    // En algún punto intermedio hubo progreso parcial observable.
    assert!(snapshots.iter().any(|s| {
                        s.statuses.values().any(|st| *st == StepStatus::Completed)
                        && s.statuses.values().any(|st| *st == StepStatus::Pending)
                    }),
            "no intermediate snapshot with partial progress");
}
