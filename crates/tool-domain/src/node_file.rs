use crate::node::Node;

/// Nodo producido por una herramienta junto con un nombre de archivo
/// opcional. Un nombre vacío o sólo con espacios equivale a `None`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NodeFile {
    pub node: Node,
    file_name: Option<String>,
}

impl NodeFile {
    pub fn new(node: Node) -> Self {
        Self { node, file_name: None }
    }

    pub fn named(node: Node, file_name: impl Into<String>) -> Self {
        Self { node,
               file_name: Some(file_name.into()) }
    }

    pub fn file_name(&self) -> Option<&str> {
        self.file_name.as_deref().map(str::trim).filter(|n| !n.is_empty())
    }
}

impl From<NodeFile> for Node {
    fn from(file: NodeFile) -> Self {
        file.node
    }
}
