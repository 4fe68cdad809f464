//! Nombres y persistencia de los resultados de producción.

pub mod naming;
pub mod persister;

pub use naming::{base_name, FileNamer};
pub use persister::OutputPersister;
