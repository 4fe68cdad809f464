use crate::model::ArtifactRef;

use super::Expansion;

/// Valor resuelto para un slot de la firma elegida.
#[derive(Debug, Clone)]
pub enum BoundSlot {
    Single(ArtifactRef),
    Collection(Vec<ArtifactRef>),
}

impl BoundSlot {
    pub fn len(&self) -> usize {
        match self {
            BoundSlot::Single(_) => 1,
            BoundSlot::Collection(items) => items.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Asignación canónica de artifacts a los slots de una firma.
///
/// Invariante: cada slot singleton tiene exactamente un artifact y a lo sumo
/// un slot de colección (`bulk_slot`) tiene más de uno.
#[derive(Debug, Clone)]
pub struct ResolvedBinding {
    signature: usize,
    slots: Vec<BoundSlot>,
    bulk_slot: Option<usize>,
}

impl ResolvedBinding {
    pub(crate) fn new(signature: usize, slots: Vec<BoundSlot>, bulk_slot: Option<usize>) -> Self {
        Self { signature,
               slots,
               bulk_slot }
    }

    pub fn signature_index(&self) -> usize {
        self.signature
    }

    pub fn slots(&self) -> &[BoundSlot] {
        &self.slots
    }

    /// Slot de colección con más de un artifact, si existe.
    pub fn bulk_slot(&self) -> Option<usize> {
        self.bulk_slot
    }

    /// Total de artifacts asignados.
    pub fn artifact_count(&self) -> usize {
        self.slots.iter().map(BoundSlot::len).sum()
    }

    /// Secuencia perezosa de instancias. Puede llamarse de nuevo para
    /// recomputarla desde el principio.
    pub fn expand(&self, single_output: bool) -> Expansion {
        Expansion::new(self.clone(), single_output)
    }
}
