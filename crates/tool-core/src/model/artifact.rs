//! Artifact tipado producido por el loader a partir de una ruta.
//!
//! El tipo concreto (`ArtifactType`) es la clave de agrupación del
//! clasificador y la etiqueta que declaran los slots de una firma. Un nodo
//! estructurado se distingue además por su `ClassId`.
use std::fmt;
use std::sync::Arc;

use tool_domain::{BinFile, ClassId, Node, TextFile};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ArtifactType {
    Node(ClassId),
    Text,
    Binary,
}

impl fmt::Display for ArtifactType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ArtifactType::Node(class) => match class.known_name() {
                Some(name) => f.write_str(name),
                None => write!(f, "Node({class})"),
            },
            ArtifactType::Text => f.write_str("TextFile"),
            ArtifactType::Binary => f.write_str("BinFile"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Artifact {
    Node(Node),
    Text(TextFile),
    Binary(BinFile),
}

/// Los artifacts se comparten entre instancias (slots fijos en modo split).
pub type ArtifactRef = Arc<Artifact>;

impl Artifact {
    pub fn artifact_type(&self) -> ArtifactType {
        match self {
            Artifact::Node(node) => ArtifactType::Node(node.class()),
            Artifact::Text(_) => ArtifactType::Text,
            Artifact::Binary(_) => ArtifactType::Binary,
        }
    }

    pub fn as_node(&self) -> Option<&Node> {
        match self {
            Artifact::Node(node) => Some(node),
            _ => None,
        }
    }

    pub fn as_text(&self) -> Option<&TextFile> {
        match self {
            Artifact::Text(text) => Some(text),
            _ => None,
        }
    }

    pub fn as_binary(&self) -> Option<&BinFile> {
        match self {
            Artifact::Binary(bin) => Some(bin),
            _ => None,
        }
    }
}

impl From<Node> for Artifact {
    fn from(node: Node) -> Self {
        Artifact::Node(node)
    }
}

impl From<TextFile> for Artifact {
    fn from(text: TextFile) -> Self {
        Artifact::Text(text)
    }
}

impl From<BinFile> for Artifact {
    fn from(bin: BinFile) -> Self {
        Artifact::Binary(bin)
    }
}
