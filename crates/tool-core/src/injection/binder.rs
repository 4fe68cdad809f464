//! `ConfigBinder`: carga, override y asignación de configuraciones.
//!
//! Ciclo por ejecución:
//! 1. `load`: cada capacidad de configuración se lee del store (o se crea
//!    por defecto) y recibe sus overrides en orden. Sólo si todas quedan
//!    válidas se guardan de vuelta.
//! 2. `attach`: por instancia, se asigna una copia a la herramienta.
//!
//! Tras `load` las configuraciones no vuelven a mutarse durante la ejecución.
use log::{debug, info};

use super::config::ConfigObject;
use super::overrides::OverrideSet;
use crate::constants::DEFAULT_CONFIG_NAME;
use crate::errors::CoreError;
use crate::store::ConfigStore;
use crate::tool::ToolDescriptor;

#[derive(Debug)]
pub struct ConfigBinder {
    configs: Vec<Box<dyn ConfigObject>>,
}

impl ConfigBinder {
    /// Identidad persistida: `{custom ?? "Default"}`, con sufijo
    /// `.{TypeName}` si la herramienta tiene más de una configuración.
    pub fn identity(custom: Option<&str>, type_name: &str, config_count: usize) -> String {
        let base = custom.map(str::trim).filter(|s| !s.is_empty()).unwrap_or(DEFAULT_CONFIG_NAME);
        if config_count > 1 {
            format!("{base}.{type_name}")
        } else {
            base.to_string()
        }
    }

    pub fn load<T>(descriptor: &ToolDescriptor<T>,
                   custom: Option<&str>,
                   overrides: &OverrideSet,
                   store: &mut dyn ConfigStore)
                   -> Result<Self, CoreError> {
        let scope = descriptor.route();
        let count = descriptor.configs().len();
        let mut loaded = Vec::with_capacity(count);

        for capability in descriptor.configs() {
            let identity = Self::identity(custom, capability.type_name(), count);
            let mut object = match store.load(scope, &identity)? {
                Some(value) => capability.decode(value)?,
                None => {
                    info!("config {scope}/{identity} not found, using defaults");
                    capability.default_object()
                }
            };
            for o in overrides.for_config(capability.type_name()) {
                debug!("{scope}/{identity}: {} = '{}'", o.field, o.value);
                object.apply_field(o.field, &o.value)?;
            }
            let value = object.to_value()?;
            loaded.push((identity, value, object));
        }

        // sólo se guarda cuando todas las configuraciones son válidas
        let mut configs = Vec::with_capacity(count);
        for (identity, value, object) in loaded {
            store.save(scope, &identity, &value)?;
            configs.push(object);
        }
        Ok(Self { configs })
    }

    /// Asigna a `tool` una copia de cada configuración cargada.
    pub fn attach<T>(&self, descriptor: &ToolDescriptor<T>, tool: &mut T) -> Result<(), CoreError> {
        for (capability, object) in descriptor.configs().iter().zip(&self.configs) {
            capability.attach(tool, object.as_ref())?;
        }
        Ok(())
    }

    pub fn configs(&self) -> &[Box<dyn ConfigObject>] {
        &self.configs
    }
}
