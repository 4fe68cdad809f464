//! Colaboradores de almacenamiento que el motor consume por trait.
//!
//! Las implementaciones en memoria viven aquí (tests y ejecuciones
//! embebidas); las de sistema de archivos en `tool-persistence`.

pub mod assets;
pub mod config;
pub mod output;

pub use assets::{AssetSource, InMemoryAssetSource, NoAssets, ToolAssets};
pub use config::{ConfigStore, InMemoryConfigStore};
pub use output::{InMemoryOutputWriter, OutputWriter};
