//! Firmas de construcción declaradas estáticamente por cada herramienta.
//!
//! Una firma es una lista ordenada de `ParameterSlot` (tipo + cardinalidad)
//! más la función que construye la instancia a partir de los `ToolArgs`
//! resueltos. Las firmas se prueban en el orden declarado.

pub mod definition;
pub mod slot;

pub use definition::{ConstructionSignature, Constructor, SlotValue, ToolArgs};
pub use slot::{Cardinality, ParameterSlot};
