use chrono::Utc;
use dashmap::DashMap;
use uuid::Uuid;

use super::{SetupEvent, SetupEventKind};

/// Almacenamiento de eventos append-only.
///
/// Recibe `&self` porque una corrida en un task y un handle que sondea
/// comparten la misma store.
pub trait EventStore: Send + Sync {
    /// Agrega un evento a partir de su kind y devuelve el evento completo (con seq y ts).
    fn append_kind(&self, run_id: Uuid, kind: SetupEventKind) -> SetupEvent;
    /// Lista eventos de una corrida (orden ascendente por seq).
    fn list(&self, run_id: Uuid) -> Vec<SetupEvent>;
}

#[derive(Debug, Default)]
pub struct InMemoryEventStore {
    inner: DashMap<Uuid, Vec<SetupEvent>>,
}

impl EventStore for InMemoryEventStore {
    fn append_kind(&self, run_id: Uuid, kind: SetupEventKind) -> SetupEvent {
        let mut entry = self.inner.entry(run_id).or_default();
        let seq = entry.len() as u64;
        let ev = SetupEvent { seq, run_id, kind, ts: Utc::now() };
        entry.push(ev.clone());
        ev
    }

    fn list(&self, run_id: Uuid) -> Vec<SetupEvent> {
        self.inner.get(&run_id).map(|v| v.clone()).unwrap_or_default()
    }
}
