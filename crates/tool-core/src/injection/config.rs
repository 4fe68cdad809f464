//! Objetos de configuración: trait tipado y su vista dinámica.
use std::any::Any;
use std::fmt;

use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;

use super::field::{FieldError, FieldSpec};
use crate::errors::CoreError;

/// Configuración editable por el usuario, persistida por nombre.
///
/// Normalmente se declara con `tool_config!`.
pub trait ToolConfig: Serialize + DeserializeOwned + Default + Clone + fmt::Debug + Send + Sync + 'static {
    /// Nombre del tipo; califica overrides (`-c:<TYPE_NAME>:<campo>`) e
    /// identidades cuando una herramienta tiene varias configuraciones.
    const TYPE_NAME: &'static str;

    fn fields() -> &'static [FieldSpec];

    /// Asigna `raw` al campo `field` tras convertirlo a su tipo.
    fn set_field(&mut self, field: &str, raw: &str) -> Result<(), FieldError>;
}

/// Vista sin tipo de una configuración cargada.
pub trait ConfigObject: fmt::Debug + Send + Sync {
    fn type_name(&self) -> &'static str;

    fn fields(&self) -> &'static [FieldSpec];

    fn apply_field(&mut self, field: &str, raw: &str) -> Result<(), CoreError>;

    fn to_value(&self) -> Result<Value, CoreError>;

    fn as_any(&self) -> &dyn Any;
}

impl<C: ToolConfig> ConfigObject for C {
    fn type_name(&self) -> &'static str {
        C::TYPE_NAME
    }

    fn fields(&self) -> &'static [FieldSpec] {
        <C as ToolConfig>::fields()
    }

    fn apply_field(&mut self, field: &str, raw: &str) -> Result<(), CoreError> {
        ToolConfig::set_field(self, field, raw).map_err(|e| match e {
                                                   FieldError::Unknown => {
                                                       CoreError::UnknownConfigField { key: format!("{}:{field}", C::TYPE_NAME) }
                                                   }
                                                   FieldError::Invalid(reason) => CoreError::FieldBinding { config: C::TYPE_NAME.to_string(),
                                                                                                            field: field.to_string(),
                                                                                                            value: raw.to_string(),
                                                                                                            reason },
                                               })
    }

    fn to_value(&self) -> Result<Value, CoreError> {
        serde_json::to_value(self).map_err(|e| CoreError::ConfigFormat { config: C::TYPE_NAME.to_string(),
                                                                         reason: e.to_string() })
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}

/// Reconstruye una configuración desde su forma persistida.
pub fn decode_config<C: ToolConfig>(value: Value) -> Result<C, CoreError> {
    serde_json::from_value(value).map_err(|e| CoreError::ConfigFormat { config: C::TYPE_NAME.to_string(),
                                                                         reason: e.to_string() })
}
