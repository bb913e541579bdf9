//! Replay de eventos a estado de corrida: el repositorio debe reconstruir
//! el estado por paso en cualquier prefijo del log.

use setup_core::{EventStore, InMemoryEventStore, InMemoryRunRepository, RunOutcome, RunRepository, SetupEventKind, StepStatus};
use uuid::Uuid;

fn ids() -> Vec<String> {
    vec!["connection".into(), "database".into(), "tables".into(), "admin".into(), "env".into()]
}

#[test]
fn replay_empty_log_is_not_started() {
    let repo = InMemoryRunRepository::new();
    let instance = repo.load(Uuid::new_v4(), &[]);
    assert_eq!(instance.outcome, RunOutcome::NotStarted);
    assert!(instance.steps.is_empty());
}

#[test]
fn replay_initialized_has_all_pending() {
    let store = InMemoryEventStore::default();
    let repo = InMemoryRunRepository::new();
    let run_id = Uuid::new_v4();
    store.append_kind(run_id, SetupEventKind::RunInitialized { step_ids: ids() });

    let instance = repo.load(run_id, &store.list(run_id));
    assert_eq!(instance.outcome, RunOutcome::Running);
    assert_eq!(instance.steps.len(), 5);
    assert!(instance.steps.iter().all(|s| s.status == StepStatus::Pending));
    assert_eq!(instance.cursor, 0);

    let snapshot = instance.snapshot();
    assert_eq!(snapshot.current_step_order, None);
    assert_eq!(snapshot.statuses.len(), 5);
}

#[test]
fn replay_mid_step_reports_running_order() {
    let store = InMemoryEventStore::default();
    let repo = InMemoryRunRepository::new();
    let run_id = Uuid::new_v4();
    store.append_kind(run_id, SetupEventKind::RunInitialized { step_ids: ids() });
    store.append_kind(run_id,
                      SetupEventKind::StepStarted { step_index: 0,
                                                    step_id: "connection".into() });
    store.append_kind(run_id,
                      SetupEventKind::StepCompleted { step_index: 0,
                                                      step_id: "connection".into(),
                                                      detail: Some("Connected to mysql server at localhost:3306".into()) });
    store.append_kind(run_id,
                      SetupEventKind::StepStarted { step_index: 1,
                                                    step_id: "database".into() });

    let snapshot = repo.load(run_id, &store.list(run_id)).snapshot();
    assert_eq!(snapshot.current_step_order, Some(2));
    assert_eq!(snapshot.statuses["connection"], StepStatus::Completed);
    assert_eq!(snapshot.statuses["database"], StepStatus::Running);
    assert_eq!(snapshot.statuses["tables"], StepStatus::Pending);
    assert_eq!(snapshot.outcome, RunOutcome::Running);
}

#[test]
fn replay_failure_partitions_statuses() {
    // Falla el paso 3: los previos completados, los posteriores pendientes.
    let store = InMemoryEventStore::default();
    let repo = InMemoryRunRepository::new();
    let run_id = Uuid::new_v4();
    store.append_kind(run_id, SetupEventKind::RunInitialized { step_ids: ids() });
    for (i, id) in ["connection", "database"].iter().enumerate() {
        store.append_kind(run_id,
                          SetupEventKind::StepStarted { step_index: i,
                                                        step_id: (*id).into() });
        store.append_kind(run_id,
                          SetupEventKind::StepCompleted { step_index: i,
                                                          step_id: (*id).into(),
                                                          detail: None });
    }
    store.append_kind(run_id,
                      SetupEventKind::StepStarted { step_index: 2,
                                                    step_id: "tables".into() });
    store.append_kind(run_id,
                      SetupEventKind::StepFailed { step_index: 2,
                                                   step_id: "tables".into(),
                                                   reason: "disk full".into() });

    let instance = repo.load(run_id, &store.list(run_id));
    assert_eq!(instance.outcome,
               RunOutcome::Failed { step_id: "tables".into(),
                                    reason: "disk full".into() });
    let statuses: Vec<StepStatus> = instance.steps.iter().map(|s| s.status).collect();
    assert_eq!(statuses,
               vec![StepStatus::Completed,
                    StepStatus::Completed,
                    StepStatus::Failed,
                    StepStatus::Pending,
                    StepStatus::Pending]);
    assert_eq!(instance.steps[2].reason.as_deref(), Some("disk full"));

    // Terminal: el paso en fallo no cuenta como "en ejecución".
    assert_eq!(instance.snapshot().current_step_order, None);
}

#[test]
fn replay_completed_run_is_succeeded() {
    let store = InMemoryEventStore::default();
    let repo = InMemoryRunRepository::new();
    let run_id = Uuid::new_v4();
    store.append_kind(run_id, SetupEventKind::RunInitialized { step_ids: ids() });
    for (i, id) in ids().iter().enumerate() {
        store.append_kind(run_id,
                          SetupEventKind::StepStarted { step_index: i,
                                                        step_id: id.clone() });
        store.append_kind(run_id,
                          SetupEventKind::StepCompleted { step_index: i,
                                                          step_id: id.clone(),
                                                          detail: None });
    }
    store.append_kind(run_id, SetupEventKind::RunCompleted);

    let snapshot = repo.load(run_id, &store.list(run_id)).snapshot();
    assert_eq!(snapshot.outcome, RunOutcome::Succeeded);
    assert_eq!(snapshot.current_step_order, None);
    assert!(snapshot.statuses.values().all(|s| *s == StepStatus::Completed));
}
