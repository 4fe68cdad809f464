//! Errores de persistencia.
//! Se traducen a `StorageError` en la frontera con el motor.

use std::path::PathBuf;

use thiserror::Error;
use tool_core::StorageError;

#[derive(Debug, Error)]
pub enum PersistenceError {
    #[error("{operation} '{}': {source}", path.display())]
    Io {
        operation: &'static str,
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("malformed JSON in '{}': {source}", path.display())]
    Json { path: PathBuf, source: serde_json::Error },
    #[error("invalid relative path '{0}'")]
    InvalidPath(String),
}

impl PersistenceError {
    pub fn io(operation: &'static str, path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io { operation,
                   path: path.into(),
                   source }
    }

    fn operation(&self) -> &'static str {
        match self {
            Self::Io { operation, .. } => *operation,
            Self::Json { .. } => "parse",
            Self::InvalidPath(_) => "resolve",
        }
    }

    fn target(&self) -> String {
        match self {
            Self::Io { path, .. } | Self::Json { path, .. } => path.display().to_string(),
            Self::InvalidPath(path) => path.clone(),
        }
    }
}

impl From<PersistenceError> for StorageError {
    fn from(err: PersistenceError) -> Self {
        let message = match &err {
            PersistenceError::Io { source, .. } => source.to_string(),
            PersistenceError::Json { source, .. } => source.to_string(),
            PersistenceError::InvalidPath(_) => "path must stay inside its root".to_string(),
        };
        StorageError::new(err.operation(), err.target(), message)
    }
}
