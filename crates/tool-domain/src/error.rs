use thiserror::Error;

/// Errores de decodificación de nodos GBX.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("not a GBX file (missing magic)")]
    NotGbx,
    #[error("unsupported GBX version {0}")]
    UnsupportedVersion(u16),
    #[error("truncated header: needed {needed} bytes at offset {offset}")]
    Truncated { needed: usize, offset: usize },
    #[error("invalid header: {0}")]
    InvalidHeader(String),
}
