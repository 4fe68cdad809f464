use std::sync::Arc;

use log::debug;

use crate::model::{Artifact, InputQueueMap};

/// Agrupa artifacts por su tipo concreto conservando el orden de entrada.
///
/// Nunca falla: un tipo que ninguna firma usa queda en su propia cola y el
/// resolver lo reportará como no consumido.
pub fn classify<I>(artifacts: I) -> InputQueueMap
    where I: IntoIterator<Item = Artifact>
{
    let mut queues = InputQueueMap::new();
    for artifact in artifacts {
        queues.push(Arc::new(artifact));
    }
    debug!("classified {} inputs into {:?}", queues.total(), queues.leftovers());
    queues
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::ArtifactType;
    use tool_domain::{BinFile, ClassId, Node, TextFile};

    #[test]
    fn groups_by_concrete_type_preserving_order() {
        let a = Node::build(ClassId::MAP, &[], b"a");
        let b = Node::build(ClassId::MAP, &[], b"b");
        let inputs = vec![Artifact::from(a.clone()),
                          Artifact::from(TextFile::new("t")),
                          Artifact::from(Node::build(ClassId::GHOST, &[], b"")),
                          Artifact::from(b.clone()),
                          Artifact::from(BinFile::new(vec![1]))];

        let queues = classify(inputs);

        assert_eq!(queues.total(), 5);
        assert_eq!(queues.types().collect::<Vec<_>>(),
                   vec![ArtifactType::Node(ClassId::MAP),
                        ArtifactType::Text,
                        ArtifactType::Node(ClassId::GHOST),
                        ArtifactType::Binary]);
        let maps = queues.queue(ArtifactType::Node(ClassId::MAP)).expect("map queue");
        assert_eq!(maps[0].as_node(), Some(&a));
        assert_eq!(maps[1].as_node(), Some(&b));
    }
}
