//! Errores del motor.
//!
//! Todas las variantes de `CoreError` son fatales para la ejecución actual de
//! la herramienta; ninguna se reintenta. Los fallos internos de una
//! herramienta viajan sin cambios dentro de `CoreError::Tool`.

use std::fmt;

use thiserror::Error;

use crate::model::ArtifactType;

/// Error devuelto por la lógica propia de una herramienta.
#[derive(Debug, Error)]
pub enum ToolError {
    #[error("argument #{index}: expected {expected}")]
    Argument { index: usize, expected: String },
    #[error("asset '{path}' unavailable: {reason}")]
    Asset { path: String, reason: String },
    #[error("{0}")]
    Failed(String),
}

/// Error de un colaborador de almacenamiento (config store, writer, assets).
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("{operation} failed for '{target}': {message}")]
pub struct StorageError {
    pub operation: &'static str,
    pub target: String,
    pub message: String,
}

impl StorageError {
    pub fn new(operation: &'static str, target: impl Into<String>, message: impl fmt::Display) -> Self {
        Self { operation,
               target: target.into(),
               message: message.to_string() }
    }
}

/// Slot de colección que recibiría más de un artifact.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BulkCandidate {
    pub slot: usize,
    pub ty: ArtifactType,
    pub count: usize,
}

impl fmt::Display for BulkCandidate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "slot #{} [{}] x{}", self.slot, self.ty, self.count)
    }
}

/// Motivo por el que una firma de construcción fue descartada.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RejectReason {
    MissingInput { slot: usize, ty: ArtifactType },
    AmbiguousBulk { slots: Vec<BulkCandidate> },
    Unconsumed { leftovers: Vec<(ArtifactType, usize)> },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SignatureRejection {
    pub signature: usize,
    pub reason: RejectReason,
}

impl fmt::Display for SignatureRejection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.reason {
            RejectReason::MissingInput { slot, ty } => {
                write!(f, "signature #{}: no input of type {ty} for slot #{slot}", self.signature)
            }
            RejectReason::AmbiguousBulk { slots } => {
                write!(f, "signature #{}: ambiguous bulk input ({})", self.signature, join(slots))
            }
            RejectReason::Unconsumed { leftovers } => {
                write!(f, "signature #{}: unconsumed {}", self.signature, join_leftovers(leftovers))
            }
        }
    }
}

#[derive(Debug, Error)]
pub enum CoreError {
    #[error("no usable construction signature: {}", describe_rejections(.rejections))]
    NoUsableSignature { rejections: Vec<SignatureRejection> },
    #[error("signature #{signature}: bulk input is supported for only one collection slot ({})", join(.slots))]
    AmbiguousBulkInput { signature: usize, slots: Vec<BulkCandidate> },
    #[error("signature #{signature}: inputs left unconsumed: {}", join_leftovers(.leftovers))]
    UnconsumedInput { signature: usize, leftovers: Vec<(ArtifactType, usize)> },
    #[error("tool '{tool}' declares no output capability")]
    MissingOutputCapability { tool: String },
    #[error("cannot set {config}.{field} to '{value}': {reason}")]
    FieldBinding { config: String, field: String, value: String, reason: String },
    #[error("unknown config field '{key}'")]
    UnknownConfigField { key: String },
    #[error("config field '{field}' is ambiguous between {}; qualify it as -c:<Type>:{field}", .candidates.join(", "))]
    AmbiguousOverride { field: String, candidates: Vec<String> },
    #[error("config '{config}' could not be (de)serialized: {reason}")]
    ConfigFormat { config: String, reason: String },
    #[error("unsupported output type: {shape}")]
    UnsupportedOutputShape { shape: String },
    #[error(transparent)]
    Tool(#[from] ToolError),
    #[error(transparent)]
    Storage(#[from] StorageError),
}

fn describe_rejections(rejections: &[SignatureRejection]) -> String {
    if rejections.is_empty() {
        return "tool declares no construction signature".to_string();
    }
    rejections.iter().map(|r| r.to_string()).collect::<Vec<_>>().join("; ")
}

fn join<T: fmt::Display>(items: &[T]) -> String {
    items.iter().map(|i| i.to_string()).collect::<Vec<_>>().join(", ")
}

fn join_leftovers(leftovers: &[(ArtifactType, usize)]) -> String {
    leftovers.iter().map(|(ty, n)| format!("{ty} x{n}")).collect::<Vec<_>>().join(", ")
}
