//! Resolución de firmas de construcción.
//!
//! Las firmas se prueban en el orden en que la herramienta las declara; cada
//! intento consume de una copia de las colas y sólo la firma aceptada se
//! confirma sobre las colas reales. Una firma se acepta cuando:
//! - todo slot singleton recibe exactamente un artifact (FIFO);
//! - a lo sumo un slot de colección recibe más de un artifact;
//! - al terminar no queda ningún artifact sin consumir.
use log::debug;

use crate::errors::{BulkCandidate, CoreError, RejectReason, SignatureRejection};
use crate::model::InputQueueMap;
use crate::signature::{Cardinality, ParameterSlot};

use super::{BoundSlot, ResolvedBinding};

/// Elige la primera firma satisfacible y confirma su consumo en `queues`.
///
/// Si ninguna firma es válida el error prioriza la información más útil:
/// artifacts sobrantes (`UnconsumedInput`), luego ambigüedad bulk
/// (`AmbiguousBulkInput`) y en último caso la lista completa de intentos
/// (`NoUsableSignature`).
pub fn resolve<'s, I>(signatures: I, queues: &mut InputQueueMap) -> Result<ResolvedBinding, CoreError>
    where I: IntoIterator<Item = &'s [ParameterSlot]>
{
    let mut rejections = Vec::new();
    for (index, slots) in signatures.into_iter().enumerate() {
        let mut trial = queues.clone();
        match try_signature(index, slots, &mut trial) {
            Ok(binding) => {
                debug!("signature #{index} accepted ({} artifacts, bulk slot {:?})",
                       binding.artifact_count(),
                       binding.bulk_slot());
                *queues = trial;
                return Ok(binding);
            }
            Err(reason) => {
                let rejection = SignatureRejection { signature: index,
                                                     reason };
                debug!("{rejection}");
                rejections.push(rejection);
            }
        }
    }
    Err(rejection_error(rejections))
}

fn try_signature(index: usize, slots: &[ParameterSlot], queues: &mut InputQueueMap) -> Result<ResolvedBinding, RejectReason> {
    let mut bound = Vec::with_capacity(slots.len());
    let mut bulk = Vec::new();

    for (slot_index, slot) in slots.iter().enumerate() {
        match slot.cardinality {
            Cardinality::Single => {
                let artifact = queues.pop_front(slot.ty)
                                     .ok_or(RejectReason::MissingInput { slot: slot_index,
                                                                         ty: slot.ty })?;
                bound.push(BoundSlot::Single(artifact));
            }
            Cardinality::Collection => {
                let items = queues.take_all(slot.ty);
                if items.len() > 1 {
                    bulk.push(BulkCandidate { slot: slot_index,
                                              ty: slot.ty,
                                              count: items.len() });
                }
                bound.push(BoundSlot::Collection(items));
            }
        }
    }

    if bulk.len() > 1 {
        return Err(RejectReason::AmbiguousBulk { slots: bulk });
    }
    if !queues.is_drained() {
        return Err(RejectReason::Unconsumed { leftovers: queues.leftovers() });
    }
    Ok(ResolvedBinding::new(index, bound, bulk.first().map(|b| b.slot)))
}

fn rejection_error(rejections: Vec<SignatureRejection>) -> CoreError {
    let unconsumed = rejections.iter().find_map(|r| match &r.reason {
                                          RejectReason::Unconsumed { leftovers } => Some((r.signature, leftovers.clone())),
                                          _ => None,
                                      });
    if let Some((signature, leftovers)) = unconsumed {
        return CoreError::UnconsumedInput { signature, leftovers };
    }
    let ambiguous = rejections.iter().find_map(|r| match &r.reason {
                                         RejectReason::AmbiguousBulk { slots } => Some((r.signature, slots.clone())),
                                         _ => None,
                                     });
    if let Some((signature, slots)) = ambiguous {
        return CoreError::AmbiguousBulkInput { signature, slots };
    }
    CoreError::NoUsableSignature { rejections }
}
