//! Resultado de invocar una capacidad de producción.
//!
//! Tipo cerrado: el persister decide por variante y nunca por inspección del
//! valor. `Text` y `Binary` existen para herramientas que devuelven datos no
//! estructurados; el persister no sabe nombrarlos y los rechaza.
use tool_domain::{BinFile, Node, NodeFile, TextFile};

use super::ArtifactType;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProductionResult {
    /// Nada que persistir.
    Empty,
    RawNode(Node),
    NamedArtifact(NodeFile),
    Many(Vec<ProductionResult>),
    Text(TextFile),
    Binary(BinFile),
}

impl ProductionResult {
    /// `true` si no hay nada que persistir (también colecciones de vacíos).
    pub fn is_empty(&self) -> bool {
        match self {
            ProductionResult::Empty => true,
            ProductionResult::Many(items) => items.iter().all(ProductionResult::is_empty),
            _ => false,
        }
    }

    /// Nombre corto de la variante.
    pub fn shape(&self) -> &'static str {
        match self {
            ProductionResult::Empty => "Empty",
            ProductionResult::RawNode(_) => "Node",
            ProductionResult::NamedArtifact(_) => "NodeFile",
            ProductionResult::Many(_) => "Many",
            ProductionResult::Text(_) => "TextFile",
            ProductionResult::Binary(_) => "BinFile",
        }
    }

    /// Etiqueta legible derivada del valor, p.ej. `NodeFile<CGameCtnChallenge>`.
    pub fn describe(&self) -> String {
        match self {
            ProductionResult::RawNode(node) => ArtifactType::Node(node.class()).to_string(),
            ProductionResult::NamedArtifact(file) => format!("NodeFile<{}>", ArtifactType::Node(file.node.class())),
            ProductionResult::Many(items) => {
                let inner: Vec<String> = items.iter().map(ProductionResult::describe).collect();
                format!("[{}]", inner.join(", "))
            }
            other => other.shape().to_string(),
        }
    }

    /// Número de archivos que produciría este resultado.
    pub fn output_count(&self) -> usize {
        match self {
            ProductionResult::Empty => 0,
            ProductionResult::Many(items) => items.iter().map(ProductionResult::output_count).sum(),
            _ => 1,
        }
    }
}

impl From<Node> for ProductionResult {
    fn from(node: Node) -> Self {
        ProductionResult::RawNode(node)
    }
}

impl From<NodeFile> for ProductionResult {
    fn from(file: NodeFile) -> Self {
        ProductionResult::NamedArtifact(file)
    }
}

impl<T: Into<ProductionResult>> From<Option<T>> for ProductionResult {
    fn from(value: Option<T>) -> Self {
        value.map_or(ProductionResult::Empty, Into::into)
    }
}

impl<T: Into<ProductionResult>> From<Vec<T>> for ProductionResult {
    fn from(items: Vec<T>) -> Self {
        ProductionResult::Many(items.into_iter().map(Into::into).collect())
    }
}
