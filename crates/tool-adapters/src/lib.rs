//! tool-adapters: puente entre archivos de entrada y el motor.
//!
//! Este crate provee:
//! - `FileLoader`: convierte una ruta en un `Artifact` tipado (nodo GBX,
//!   texto o bytes opacos como fallback).
//! - Herramientas de ejemplo registradas por la CLI: `CopyMapTool` y
//!   `GhostBundleTool`.

pub mod loader;
pub mod tools;

pub use loader::{FileLoader, LoadError};
