//! Overrides de campos de configuración.
//!
//! Claves aceptadas (sin distinguir mayúsculas):
//! - `-c:<campo>`: el campo debe existir en exactamente un tipo de
//!   configuración de la herramienta;
//! - `-c:<Tipo>:<campo>`: calificada por el nombre del tipo.
//!
//! El prefijo `-c:` es opcional. Cada literal se valida contra el tipo del
//! campo al resolver, de modo que un valor inválido falla al arrancar.
use log::debug;

use super::field::FieldSpec;
use crate::constants::OVERRIDE_PREFIX;
use crate::errors::CoreError;

/// Override resuelto contra el esquema de la herramienta.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldOverride {
    pub config: &'static str,
    pub field: &'static str,
    pub value: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OverrideSet {
    overrides: Vec<FieldOverride>,
}

impl OverrideSet {
    pub fn empty() -> Self {
        Self::default()
    }

    /// Resuelve pares `(clave, valor)` en el orden dado contra los esquemas
    /// `(TYPE_NAME, campos)` de la herramienta.
    pub fn resolve<S>(raw: &[(String, String)], schemas: S) -> Result<Self, CoreError>
        where S: IntoIterator<Item = (&'static str, &'static [FieldSpec])>
    {
        let schemas: Vec<(&'static str, &'static [FieldSpec])> = schemas.into_iter().collect();
        let mut overrides = Vec::with_capacity(raw.len());
        for (key, value) in raw {
            let (config, spec) = lookup(key, &schemas)?;
            validate_literal(config, spec, value)?;
            debug!("override {config}.{} = '{value}'", spec.name);
            overrides.push(FieldOverride { config,
                                           field: spec.name,
                                           value: value.clone() });
        }
        Ok(Self { overrides })
    }

    /// Overrides dirigidos a un tipo de configuración, en orden de llegada.
    pub fn for_config<'s>(&'s self, type_name: &'s str) -> impl Iterator<Item = &'s FieldOverride> + 's {
        self.overrides.iter().filter(move |o| o.config == type_name)
    }

    pub fn len(&self) -> usize {
        self.overrides.len()
    }

    pub fn is_empty(&self) -> bool {
        self.overrides.is_empty()
    }
}

fn lookup(key: &str, schemas: &[(&'static str, &'static [FieldSpec])]) -> Result<(&'static str, FieldSpec), CoreError> {
    let stripped = strip_prefix(key);
    let unknown = || CoreError::UnknownConfigField { key: key.to_string() };

    if let Some((ty, field)) = stripped.split_once(':') {
        let (config, fields) = schemas.iter().find(|(name, _)| name.eq_ignore_ascii_case(ty)).ok_or_else(unknown)?;
        let spec = fields.iter().find(|f| f.name.eq_ignore_ascii_case(field)).ok_or_else(unknown)?;
        return Ok((*config, *spec));
    }

    let matches: Vec<(&'static str, FieldSpec)> =
        schemas.iter()
               .filter_map(|(config, fields)| {
                   fields.iter().find(|f| f.name.eq_ignore_ascii_case(stripped)).map(|spec| (*config, *spec))
               })
               .collect();
    match matches.as_slice() {
        [] => Err(unknown()),
        [single] => Ok(*single),
        many => Err(CoreError::AmbiguousOverride { field: stripped.to_string(),
                                                   candidates: many.iter().map(|(c, _)| c.to_string()).collect() }),
    }
}

fn strip_prefix(key: &str) -> &str {
    match key.get(..OVERRIDE_PREFIX.len()) {
        Some(head) if head.eq_ignore_ascii_case(OVERRIDE_PREFIX) => &key[OVERRIDE_PREFIX.len()..],
        _ => key,
    }
}

fn validate_literal(config: &str, spec: FieldSpec, value: &str) -> Result<(), CoreError> {
    spec.check(value).map_err(|reason| CoreError::FieldBinding { config: config.to_string(),
                                                                 field: spec.name.to_string(),
                                                                 value: value.to_string(),
                                                                 reason })
}
