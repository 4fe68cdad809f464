use std::io::ErrorKind;
use std::path::PathBuf;

use log::debug;
use serde_json::Value;
use tool_core::{ConfigStore, StorageError};

use super::join_inside;
use crate::error::PersistenceError;

/// `{root}/{scope}/{identity}.json`, JSON con formato legible.
#[derive(Debug, Clone)]
pub struct FsConfigStore {
    root: PathBuf,
}

impl FsConfigStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn path_for(&self, scope: &str, identity: &str) -> Result<PathBuf, PersistenceError> {
        join_inside(&self.root, &format!("{scope}/{identity}.json"))
    }
}

impl ConfigStore for FsConfigStore {
    fn load(&self, scope: &str, identity: &str) -> Result<Option<Value>, StorageError> {
        let path = self.path_for(scope, identity)?;
        let raw = match std::fs::read(&path) {
            Ok(raw) => raw,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(PersistenceError::io("read config", path, e).into()),
        };
        let value = serde_json::from_slice(&raw).map_err(|source| PersistenceError::Json { path: path.clone(),
                                                                                           source })?;
        debug!("config loaded from {}", path.display());
        Ok(Some(value))
    }

    fn save(&mut self, scope: &str, identity: &str, value: &Value) -> Result<(), StorageError> {
        let path = self.path_for(scope, identity)?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| PersistenceError::io("create dir", parent, e))?;
        }
        let mut text = serde_json::to_string_pretty(value).map_err(|source| PersistenceError::Json { path: path.clone(),
                                                                                                     source })?;
        text.push('\n');
        std::fs::write(&path, text).map_err(|e| PersistenceError::io("write config", &path, e))?;
        debug!("config saved to {}", path.display());
        Ok(())
    }
}
