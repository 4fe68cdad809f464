use std::path::Path;

use tool_core::{OutputWriter, StorageError};

use crate::error::PersistenceError;

/// Escribe cada archivo en su ruta, creando los directorios que falten.
/// Un archivo existente con el mismo nombre se reemplaza.
#[derive(Debug, Default, Clone, Copy)]
pub struct FsOutputWriter;

impl OutputWriter for FsOutputWriter {
    fn write_file(&mut self, path: &Path, bytes: &[u8]) -> Result<(), StorageError> {
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent).map_err(|e| PersistenceError::io("create dir", parent, e))?;
        }
        std::fs::write(path, bytes).map_err(|e| PersistenceError::io("write output", path, e))?;
        Ok(())
    }
}
