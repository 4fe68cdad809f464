use std::path::PathBuf;

use async_trait::async_trait;
use tool_core::{AssetSource, StorageError};

use super::join_inside;
use crate::error::PersistenceError;

/// Lee `{root}/Tools/{asset_id}/{path}`.
#[derive(Debug, Clone)]
pub struct FsAssetSource {
    root: PathBuf,
}

impl FsAssetSource {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }
}

#[async_trait]
impl AssetSource for FsAssetSource {
    async fn read(&self, asset_id: &str, path: &str) -> Result<Vec<u8>, StorageError> {
        let tool_dir = join_inside(&self.root.join("Tools"), asset_id)?;
        let file = join_inside(&tool_dir, path)?;
        match tokio::fs::read(&file).await {
            Ok(bytes) => Ok(bytes),
            Err(e) => Err(PersistenceError::io("read asset", file, e).into()),
        }
    }
}
