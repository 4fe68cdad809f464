//! Orquestación de una ejecución de herramienta.
//!
//! classify → resolve → expand → por instancia: construir → attach de
//! configuración → (assets) → producir → persistir. Todo en un único hilo
//! lógico; las instancias se procesan en el orden del expander.

pub mod driver;
pub mod report;
pub mod runner;

pub use driver::{Production, ProductionDriver};
pub use report::{ProductionRecord, RunReport};
pub use runner::{RunContext, RunOptions, ToolRunner};
