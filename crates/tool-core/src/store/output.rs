use std::path::{Path, PathBuf};

use crate::errors::StorageError;

/// Destino de los archivos producidos.
pub trait OutputWriter {
    fn write_file(&mut self, path: &Path, bytes: &[u8]) -> Result<(), StorageError>;
}

/// Guarda las escrituras en orden; una ruta repetida se sobrescribe en su
/// posición original.
#[derive(Debug, Default)]
pub struct InMemoryOutputWriter {
    pub files: Vec<(PathBuf, Vec<u8>)>,
}

impl InMemoryOutputWriter {
    pub fn get(&self, path: &Path) -> Option<&[u8]> {
        self.files.iter().find(|(p, _)| p == path).map(|(_, b)| b.as_slice())
    }

    pub fn paths(&self) -> Vec<&Path> {
        self.files.iter().map(|(p, _)| p.as_path()).collect()
    }
}

impl OutputWriter for InMemoryOutputWriter {
    fn write_file(&mut self, path: &Path, bytes: &[u8]) -> Result<(), StorageError> {
        match self.files.iter_mut().find(|(p, _)| p == path) {
            Some((_, existing)) => *existing = bytes.to_vec(),
            None => self.files.push((path.to_path_buf(), bytes.to_vec())),
        }
        Ok(())
    }
}
