//! ToolFlow Rust Library
//!
//! Fachada del workspace para clientes embebidos:
//! - `domain`: artefactos GBX (`Node`, `NodeFile`, catálogo de clases).
//! - `engine`: motor de resolución, expansión y ejecución.
//! - `adapters`: loader de archivos y herramientas de ejemplo.
//! - `persistence`: stores sobre el sistema de archivos.

pub use tool_adapters as adapters;
pub use tool_core as engine;
pub use tool_domain as domain;
pub use tool_persistence as persistence;

pub use tool_core::{CoreError, RunContext, RunOptions, RunReport, Tool, ToolDescriptor, ToolRunner};
