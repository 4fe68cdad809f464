//! `InputQueueMap`: colas FIFO de artifacts agrupadas por tipo concreto.
//!
//! Invariantes:
//! - cada artifact clasificado vive en exactamente una cola;
//! - el orden dentro de una cola es el orden de descubrimiento;
//! - las claves conservan el orden en que cada tipo apareció por primera vez
//!   (sólo afecta a mensajes, nunca a la elección de firma).
use std::collections::VecDeque;

use indexmap::IndexMap;

use super::{ArtifactRef, ArtifactType};

#[derive(Debug, Clone, Default)]
pub struct InputQueueMap {
    queues: IndexMap<ArtifactType, VecDeque<ArtifactRef>>,
}

impl InputQueueMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Encola un artifact bajo su tipo concreto.
    pub fn push(&mut self, artifact: ArtifactRef) {
        let ty = artifact.artifact_type();
        self.queues.entry(ty).or_default().push_back(artifact);
    }

    pub fn queue(&self, ty: ArtifactType) -> Option<&VecDeque<ArtifactRef>> {
        self.queues.get(&ty)
    }

    pub fn len_of(&self, ty: ArtifactType) -> usize {
        self.queues.get(&ty).map_or(0, VecDeque::len)
    }

    /// Saca el primer artifact (FIFO) del tipo dado.
    pub fn pop_front(&mut self, ty: ArtifactType) -> Option<ArtifactRef> {
        self.queues.get_mut(&ty).and_then(VecDeque::pop_front)
    }

    /// Vacía la cola del tipo dado conservando el orden.
    pub fn take_all(&mut self, ty: ArtifactType) -> Vec<ArtifactRef> {
        self.queues.get_mut(&ty).map(|q| q.drain(..).collect()).unwrap_or_default()
    }

    /// Tipos presentes en orden de descubrimiento.
    pub fn types(&self) -> impl Iterator<Item = ArtifactType> + '_ {
        self.queues.keys().copied()
    }

    pub fn total(&self) -> usize {
        self.queues.values().map(VecDeque::len).sum()
    }

    pub fn is_drained(&self) -> bool {
        self.total() == 0
    }

    /// Colas no vacías como `(tipo, cantidad)`.
    pub fn leftovers(&self) -> Vec<(ArtifactType, usize)> {
        self.queues.iter().filter(|(_, q)| !q.is_empty()).map(|(ty, q)| (*ty, q.len())).collect()
    }
}
