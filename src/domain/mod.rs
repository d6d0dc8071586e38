//! Domain layer: models, ports, and the engine error taxonomy.

pub mod errors;
pub mod models;
pub mod ports;

pub use errors::{EngineError, EngineResult};
