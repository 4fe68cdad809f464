use std::iter::FusedIterator;

use crate::signature::{SlotValue, ToolArgs};

use super::{BoundSlot, ResolvedBinding};

/// Secuencia perezosa de argumentos de instancia.
///
/// Sin slot bulk (o en modo `single_output`) produce una sola instancia con
/// los valores tal cual. Con un slot bulk de N artifacts produce N
/// instancias: los demás slots se repiten y el slot bulk recibe una colección
/// con el artifact i-ésimo.
#[derive(Debug, Clone)]
pub struct Expansion {
    binding: ResolvedBinding,
    split_slot: Option<usize>,
    next: usize,
    count: usize,
}

impl Expansion {
    pub(crate) fn new(binding: ResolvedBinding, single_output: bool) -> Self {
        let split_slot = if single_output { None } else { binding.bulk_slot() };
        let count = split_slot.and_then(|slot| binding.slots().get(slot))
                              .map_or(1, BoundSlot::len);
        Self { binding,
               split_slot,
               next: 0,
               count }
    }

    /// `true` si cada instancia recibe un único artifact del slot bulk.
    pub fn is_split(&self) -> bool {
        self.split_slot.is_some()
    }

    fn args_for(&self, instance: usize) -> ToolArgs {
        let values = self.binding
                         .slots()
                         .iter()
                         .enumerate()
                         .map(|(slot, bound)| match bound {
                             BoundSlot::Single(artifact) => SlotValue::One(artifact.clone()),
                             BoundSlot::Collection(items) if Some(slot) == self.split_slot => {
                                 SlotValue::Many(items.get(instance).cloned().into_iter().collect())
                             }
                             BoundSlot::Collection(items) => SlotValue::Many(items.clone()),
                         })
                         .collect();
        ToolArgs::new(self.binding.signature_index(), values)
    }
}

impl Iterator for Expansion {
    type Item = ToolArgs;

    fn next(&mut self) -> Option<ToolArgs> {
        if self.next >= self.count {
            return None;
        }
        let args = self.args_for(self.next);
        self.next += 1;
        Some(args)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.count - self.next;
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for Expansion {}

impl FusedIterator for Expansion {}
