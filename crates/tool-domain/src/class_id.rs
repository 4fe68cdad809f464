//! Identificadores de clase GBX y catálogo de extensiones.
//!
//! Cada nodo GBX declara en su cabecera un `ClassId` de 32 bits. El catálogo
//! asocia a cada clase conocida un nombre legible y, cuando existe, la
//! extensión usada al guardar (`<stamp>_<id>.<ext>.Gbx`).
//!
//! El `ClassRegistry` se construye una sola vez en el punto de entrada del
//! proceso y se pasa explícitamente al loader y al persister.
use std::collections::HashMap;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ClassId(pub u32);

impl ClassId {
    pub const MAP: ClassId = ClassId(0x0304_3000);
    pub const REPLAY: ClassId = ClassId(0x0309_3000);
    pub const GHOST: ClassId = ClassId(0x0309_2000);
    pub const MEDIA_CLIP: ClassId = ClassId(0x0307_9000);
    pub const COLLECTION: ClassId = ClassId(0x0303_3000);
    pub const ITEM_MODEL: ClassId = ClassId(0x2E00_2000);

    /// Nombre de la clase si figura en la tabla incorporada.
    pub fn known_name(self) -> Option<&'static str> {
        KNOWN_CLASSES.iter().find(|c| c.id == self).map(|c| c.name)
    }

    /// Clases antiguas (motor 0x24) que se leen con su id moderno.
    pub fn remap(self) -> ClassId {
        match self.0 {
            0x2400_3000 => ClassId::MAP,
            0x2403_F000 => ClassId::REPLAY,
            _ => self,
        }
    }
}

impl fmt::Display for ClassId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "0x{:08X}", self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClassInfo {
    pub id: ClassId,
    pub name: &'static str,
    pub extension: Option<&'static str>,
}

const KNOWN_CLASSES: &[ClassInfo] = &[ClassInfo { id: ClassId::MAP,
                                                  name: "CGameCtnChallenge",
                                                  extension: Some("Map") },
                                      ClassInfo { id: ClassId::REPLAY,
                                                  name: "CGameCtnReplayRecord",
                                                  extension: Some("Replay") },
                                      ClassInfo { id: ClassId::GHOST,
                                                  name: "CGameCtnGhost",
                                                  extension: Some("Ghost") },
                                      ClassInfo { id: ClassId::MEDIA_CLIP,
                                                  name: "CGameCtnMediaClip",
                                                  extension: Some("Clip") },
                                      ClassInfo { id: ClassId::ITEM_MODEL,
                                                  name: "CGameItemModel",
                                                  extension: Some("Item") },
                                      // sin extensión registrada
                                      ClassInfo { id: ClassId::COLLECTION,
                                                  name: "CGameCtnCollection",
                                                  extension: None }];

/// Catálogo de clases consultado por el loader (nombres) y por el
/// persister (extensiones).
#[derive(Debug, Clone, Default)]
pub struct ClassRegistry {
    classes: HashMap<ClassId, ClassInfo>,
}

impl ClassRegistry {
    /// Registro vacío: ninguna clase tiene nombre ni extensión.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Registro con la tabla de clases incorporada.
    pub fn with_known_classes() -> Self {
        let mut registry = Self::empty();
        for info in KNOWN_CLASSES {
            registry.register(*info);
        }
        registry
    }

    /// Añade o reemplaza una clase.
    pub fn register(&mut self, info: ClassInfo) {
        self.classes.insert(info.id, info);
    }

    pub fn get(&self, id: ClassId) -> Option<&ClassInfo> {
        self.classes.get(&id)
    }

    pub fn name(&self, id: ClassId) -> Option<&'static str> {
        self.get(id).map(|c| c.name)
    }

    pub fn extension(&self, id: ClassId) -> Option<&'static str> {
        self.get(id).and_then(|c| c.extension)
    }

    pub fn len(&self) -> usize {
        self.classes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.classes.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_classes_have_names_and_extensions() {
        let registry = ClassRegistry::with_known_classes();
        assert_eq!(registry.name(ClassId::MAP), Some("CGameCtnChallenge"));
        assert_eq!(registry.extension(ClassId::REPLAY), Some("Replay"));
        assert_eq!(registry.extension(ClassId::COLLECTION), None);
        assert_eq!(registry.extension(ClassId(0x1234_5000)), None);
    }

    #[test]
    fn legacy_ids_are_remapped() {
        assert_eq!(ClassId(0x2400_3000).remap(), ClassId::MAP);
        assert_eq!(ClassId::GHOST.remap(), ClassId::GHOST);
    }

    #[test]
    fn display_is_hex() {
        assert_eq!(ClassId::MAP.to_string(), "0x03043000");
    }
}
