//! tool-persistence: colaboradores de almacenamiento sobre el sistema de
//! archivos.
//!
//! - `FsConfigStore`: configuraciones como JSON legible en
//!   `{config_dir}/{ruta-herramienta}/{identidad}.json`.
//! - `FsOutputWriter`: escribe los archivos producidos, creando directorios.
//! - `FsAssetSource`: lee `{assets_dir}/Tools/{id}/{ruta}`.
//! - `StorageConfig`: directorios por defecto desde variables de entorno.

pub mod config;
pub mod error;
pub mod fs;

pub use config::{init_dotenv, StorageConfig};
pub use error::PersistenceError;
pub use fs::{FsAssetSource, FsConfigStore, FsOutputWriter};
