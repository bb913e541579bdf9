//! Motor de ejecución: builder + core.

mod builder;
mod core;

pub use builder::{EngineBuilder, EngineBuilderInit};
pub use core::SetupEngine;
