use std::fmt;

use tool_domain::ClassId;

use crate::model::ArtifactType;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cardinality {
    /// Exactamente un artifact.
    Single,
    /// Cero o más artifacts, en orden (candidato a slot bulk).
    Collection,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParameterSlot {
    pub name: &'static str,
    pub ty: ArtifactType,
    pub cardinality: Cardinality,
}

impl ParameterSlot {
    pub const fn single(name: &'static str, ty: ArtifactType) -> Self {
        Self { name,
               ty,
               cardinality: Cardinality::Single }
    }

    pub const fn collection(name: &'static str, ty: ArtifactType) -> Self {
        Self { name,
               ty,
               cardinality: Cardinality::Collection }
    }

    pub const fn node(name: &'static str, class: ClassId) -> Self {
        Self::single(name, ArtifactType::Node(class))
    }

    pub const fn nodes(name: &'static str, class: ClassId) -> Self {
        Self::collection(name, ArtifactType::Node(class))
    }

    pub const fn text(name: &'static str) -> Self {
        Self::single(name, ArtifactType::Text)
    }

    pub const fn texts(name: &'static str) -> Self {
        Self::collection(name, ArtifactType::Text)
    }

    pub const fn binary(name: &'static str) -> Self {
        Self::single(name, ArtifactType::Binary)
    }

    pub const fn binaries(name: &'static str) -> Self {
        Self::collection(name, ArtifactType::Binary)
    }

    pub fn is_collection(&self) -> bool {
        self.cardinality == Cardinality::Collection
    }
}

impl fmt::Display for ParameterSlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.cardinality {
            Cardinality::Single => write!(f, "{}: {}", self.name, self.ty),
            Cardinality::Collection => write!(f, "{}: [{}]", self.name, self.ty),
        }
    }
}
