//! Assets de herramientas: archivos auxiliares que una herramienta lee antes
//! de producir (plantillas, tablas de etiquetas...).
use std::collections::HashMap;

use async_trait::async_trait;

use crate::errors::{StorageError, ToolError};

#[async_trait]
pub trait AssetSource: Send + Sync {
    async fn read(&self, asset_id: &str, path: &str) -> Result<Vec<u8>, StorageError>;
}

/// Fuente vacía para ejecuciones sin assets; toda lectura falla.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoAssets;

#[async_trait]
impl AssetSource for NoAssets {
    async fn read(&self, asset_id: &str, path: &str) -> Result<Vec<u8>, StorageError> {
        Err(StorageError::new("read asset", format!("{asset_id}/{path}"), "no asset source configured"))
    }
}

#[derive(Debug, Default)]
pub struct InMemoryAssetSource {
    pub inner: HashMap<(String, String), Vec<u8>>,
}

impl InMemoryAssetSource {
    pub fn with(mut self, asset_id: &str, path: &str, bytes: impl Into<Vec<u8>>) -> Self {
        self.inner.insert((asset_id.to_string(), path.to_string()), bytes.into());
        self
    }
}

#[async_trait]
impl AssetSource for InMemoryAssetSource {
    async fn read(&self, asset_id: &str, path: &str) -> Result<Vec<u8>, StorageError> {
        self.inner
            .get(&(asset_id.to_string(), path.to_string()))
            .cloned()
            .ok_or_else(|| StorageError::new("read asset", format!("{asset_id}/{path}"), "not found"))
    }
}

/// Vista de la fuente de assets limitada al identificador de una herramienta.
#[derive(Clone, Copy)]
pub struct ToolAssets<'a> {
    asset_id: &'a str,
    source: &'a dyn AssetSource,
}

impl<'a> ToolAssets<'a> {
    pub fn new(asset_id: &'a str, source: &'a dyn AssetSource) -> Self {
        Self { asset_id, source }
    }

    pub fn asset_id(&self) -> &str {
        self.asset_id
    }

    pub async fn read(&self, path: &str) -> Result<Vec<u8>, ToolError> {
        self.source.read(self.asset_id, path).await.map_err(|e| ToolError::Asset { path: path.to_string(),
                                                                                   reason: e.message })
    }

    pub async fn read_text(&self, path: &str) -> Result<String, ToolError> {
        let bytes = self.read(path).await?;
        String::from_utf8(bytes).map_err(|e| ToolError::Asset { path: path.to_string(),
                                                                reason: e.to_string() })
    }
}
