use tool_domain::{BinFile, Node, TextFile};

use super::ParameterSlot;
use crate::errors::ToolError;
use crate::model::{Artifact, ArtifactRef};

/// Función que construye la herramienta a partir de los argumentos resueltos.
pub type Constructor<T> = fn(ToolArgs) -> Result<T, ToolError>;

/// Una forma declarada de construir una instancia de `T`.
pub struct ConstructionSignature<T> {
    slots: Vec<ParameterSlot>,
    construct: Constructor<T>,
}

impl<T> ConstructionSignature<T> {
    pub fn new(slots: Vec<ParameterSlot>, construct: Constructor<T>) -> Self {
        Self { slots, construct }
    }

    pub fn slots(&self) -> &[ParameterSlot] {
        &self.slots
    }

    pub fn construct(&self, args: ToolArgs) -> Result<T, ToolError> {
        (self.construct)(args)
    }

    /// `(map: CGameCtnChallenge, ghosts: [CGameCtnGhost])`
    pub fn describe(&self) -> String {
        let slots: Vec<String> = self.slots.iter().map(|s| s.to_string()).collect();
        format!("({})", slots.join(", "))
    }
}

/// Valor asignado a un slot para una instancia concreta.
#[derive(Debug, Clone)]
pub enum SlotValue {
    One(ArtifactRef),
    Many(Vec<ArtifactRef>),
}

impl SlotValue {
    pub fn len(&self) -> usize {
        match self {
            SlotValue::One(_) => 1,
            SlotValue::Many(items) => items.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn artifacts(&self) -> Vec<&Artifact> {
        match self {
            SlotValue::One(a) => vec![a.as_ref()],
            SlotValue::Many(items) => items.iter().map(|a| a.as_ref()).collect(),
        }
    }
}

/// Argumentos de construcción de una instancia: un valor por slot, en el
/// orden de la firma.
#[derive(Debug, Clone)]
pub struct ToolArgs {
    signature: usize,
    values: Vec<SlotValue>,
}

impl ToolArgs {
    pub fn new(signature: usize, values: Vec<SlotValue>) -> Self {
        Self { signature, values }
    }

    /// Índice de la firma elegida por el resolver.
    pub fn signature_index(&self) -> usize {
        self.signature
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn value(&self, index: usize) -> Option<&SlotValue> {
        self.values.get(index)
    }

    pub fn node(&self, index: usize) -> Result<Node, ToolError> {
        self.one(index)?.as_node().cloned().ok_or_else(|| mismatch(index, "a node"))
    }

    pub fn nodes(&self, index: usize) -> Result<Vec<Node>, ToolError> {
        self.many(index)?.iter()
                         .map(|a| a.as_node().cloned().ok_or_else(|| mismatch(index, "nodes")))
                         .collect()
    }

    pub fn text(&self, index: usize) -> Result<TextFile, ToolError> {
        self.one(index)?.as_text().cloned().ok_or_else(|| mismatch(index, "a text file"))
    }

    pub fn texts(&self, index: usize) -> Result<Vec<TextFile>, ToolError> {
        self.many(index)?.iter()
                         .map(|a| a.as_text().cloned().ok_or_else(|| mismatch(index, "text files")))
                         .collect()
    }

    pub fn binary(&self, index: usize) -> Result<BinFile, ToolError> {
        self.one(index)?.as_binary().cloned().ok_or_else(|| mismatch(index, "a binary file"))
    }

    pub fn binaries(&self, index: usize) -> Result<Vec<BinFile>, ToolError> {
        self.many(index)?.iter()
                         .map(|a| a.as_binary().cloned().ok_or_else(|| mismatch(index, "binary files")))
                         .collect()
    }

    fn one(&self, index: usize) -> Result<&Artifact, ToolError> {
        match self.values.get(index) {
            Some(SlotValue::One(a)) => Ok(a),
            _ => Err(mismatch(index, "a single value")),
        }
    }

    fn many(&self, index: usize) -> Result<&[ArtifactRef], ToolError> {
        match self.values.get(index) {
            Some(SlotValue::Many(items)) => Ok(items),
            _ => Err(mismatch(index, "a collection")),
        }
    }
}

fn mismatch(index: usize, expected: &str) -> ToolError {
    ToolError::Argument { index,
                          expected: expected.to_string() }
}
