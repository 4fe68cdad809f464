//! Modelos neutrales del motor (artifacts tipados, colas por tipo y
//! resultados de producción).

pub mod artifact;
pub mod queue;
pub mod result;

pub use artifact::{Artifact, ArtifactRef, ArtifactType};
pub use queue::InputQueueMap;
pub use result::ProductionResult;
