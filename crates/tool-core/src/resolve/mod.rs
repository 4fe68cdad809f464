//! Clasificación, resolución de firmas y expansión en instancias.
//!
//! Flujo: `classify` agrupa los artifacts por tipo → `resolve` elige la
//! primera firma satisfacible que consume todas las colas → la
//! `ResolvedBinding` resultante se expande en una secuencia perezosa de
//! `ToolArgs` (una instancia, o una por artifact del slot bulk).

pub mod binding;
pub mod classifier;
pub mod expander;
pub mod resolver;

pub use binding::{BoundSlot, ResolvedBinding};
pub use classifier::classify;
pub use expander::Expansion;
pub use resolver::resolve;
