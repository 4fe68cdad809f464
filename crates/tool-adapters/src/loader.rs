//! Loader de archivos de entrada.
//!
//! Orden de decisión para cada archivo:
//! 1. UTF-8 válido sin ningún byte NUL → `TextFile`.
//! 2. Cabecera GBX decodificable → `Node` (con la ruta como origen).
//! 3. En otro caso → `BinFile`. El fallo de decodificación se registra y no
//!    aborta la carga.
use std::path::{Path, PathBuf};

use log::{debug, warn};
use thiserror::Error;
use tool_core::Artifact;
use tool_domain::{BinFile, ClassRegistry, Node, TextFile};

#[derive(Debug, Error)]
pub enum LoadError {
    #[error("cannot read '{}': {source}", path.display())]
    Io { path: PathBuf, source: std::io::Error },
}

pub struct FileLoader<'a> {
    classes: &'a ClassRegistry,
}

impl<'a> FileLoader<'a> {
    pub fn new(classes: &'a ClassRegistry) -> Self {
        Self { classes }
    }

    pub fn load(&self, path: &Path) -> Result<Artifact, LoadError> {
        let bytes = std::fs::read(path).map_err(|source| LoadError::Io { path: path.to_path_buf(),
                                                                        source })?;
        Ok(self.load_bytes(&path.to_string_lossy(), bytes))
    }

    /// Carga todas las rutas en orden; el primer error de IO aborta.
    pub fn load_all<P: AsRef<Path>>(&self, paths: &[P]) -> Result<Vec<Artifact>, LoadError> {
        paths.iter().map(|p| self.load(p.as_ref())).collect()
    }

    /// Clasifica bytes ya leídos. `origin` sólo se usa para logs y como
    /// origen del nodo.
    pub fn load_bytes(&self, origin: &str, bytes: Vec<u8>) -> Artifact {
        if !bytes.contains(&0) {
            if let Ok(text) = String::from_utf8(bytes.clone()) {
                debug!("{origin}: text ({} bytes)", text.len());
                return Artifact::Text(TextFile::new(text));
            }
        }
        match Node::decode(&bytes) {
            Ok(node) => {
                let class = node.class();
                debug!("{origin}: {} v{}", self.classes.name(class).unwrap_or("unknown class"), node.version());
                Artifact::Node(node.with_origin(Some(origin)))
            }
            Err(e) => {
                warn!("{origin}: not a readable GBX ({e}), loaded as binary");
                Artifact::Binary(BinFile::new(bytes))
            }
        }
    }
}
