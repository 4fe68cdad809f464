//! Implementaciones sobre el sistema de archivos.

pub mod asset_source;
pub mod config_store;
pub mod output_writer;

pub use asset_source::FsAssetSource;
pub use config_store::FsConfigStore;
pub use output_writer::FsOutputWriter;

use std::path::{Component, Path, PathBuf};

use crate::error::PersistenceError;

/// Une `relative` a `root` rechazando rutas absolutas y `..`.
pub(crate) fn join_inside(root: &Path, relative: &str) -> Result<PathBuf, PersistenceError> {
    let rel = Path::new(relative);
    let clean = rel.components().all(|c| matches!(c, Component::Normal(_) | Component::CurDir));
    if relative.is_empty() || !clean {
        return Err(PersistenceError::InvalidPath(relative.to_string()));
    }
    Ok(root.join(rel))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_paths_escaping_the_root() {
        assert!(join_inside(Path::new("root"), "a/b.json").is_ok());
        assert!(join_inside(Path::new("root"), "../secret").is_err());
        assert!(join_inside(Path::new("root"), "/etc/passwd").is_err());
        assert!(join_inside(Path::new("root"), "").is_err());
    }
}
