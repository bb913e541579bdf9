mod store;
mod types;

pub use store::{EventStore, InMemoryEventStore};
pub use types::{SetupEvent, SetupEventKind};
