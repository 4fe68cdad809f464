//! `ToolDescriptor`: tabla estática que describe una herramienta.
//!
//! Metadatos (nombre, ruta kebab-case, autores), firmas de construcción en
//! orden de preferencia, capacidades de configuración, capacidades de
//! producción y, opcionalmente, el identificador de sus assets.
use std::fmt;

use serde_json::Value;
use tool_domain::naming::to_kebab_case;

use crate::errors::{CoreError, ToolError};
use crate::injection::{decode_config, ConfigObject, FieldSpec, ToolConfig};
use crate::model::ProductionResult;
use crate::signature::{ConstructionSignature, Constructor, ParameterSlot};

type AttachFn<T> = Box<dyn Fn(&mut T, &dyn ConfigObject) -> Result<(), CoreError> + Send + Sync>;

/// Capacidad de configuración: un tipo `ToolConfig` y cómo asignarlo.
pub struct ConfigCapability<T> {
    type_name: &'static str,
    fields: &'static [FieldSpec],
    default: fn() -> Box<dyn ConfigObject>,
    decode: fn(Value) -> Result<Box<dyn ConfigObject>, CoreError>,
    attach: AttachFn<T>,
}

impl<T: 'static> ConfigCapability<T> {
    pub fn new<C: ToolConfig>(setter: fn(&mut T, C)) -> Self {
        let attach = move |tool: &mut T, object: &dyn ConfigObject| -> Result<(), CoreError> {
            let config = object.as_any().downcast_ref::<C>().ok_or_else(|| {
                                                                 CoreError::ConfigFormat { config: C::TYPE_NAME.to_string(),
                                                                                           reason: format!("bound object is {}",
                                                                                                           object.type_name()) }
                                                             })?;
            setter(tool, config.clone());
            Ok(())
        };
        Self { type_name: C::TYPE_NAME,
               fields: <C as ToolConfig>::fields(),
               default: default_object::<C>,
               decode: decode_object::<C>,
               attach: Box::new(attach) }
    }
}

fn default_object<C: ToolConfig>() -> Box<dyn ConfigObject> {
    Box::new(C::default())
}

fn decode_object<C: ToolConfig>(value: Value) -> Result<Box<dyn ConfigObject>, CoreError> {
    Ok(Box::new(decode_config::<C>(value)?))
}

impl<T> ConfigCapability<T> {
    pub fn type_name(&self) -> &'static str {
        self.type_name
    }

    pub fn fields(&self) -> &'static [FieldSpec] {
        self.fields
    }

    pub fn default_object(&self) -> Box<dyn ConfigObject> {
        (self.default)()
    }

    pub fn decode(&self, value: Value) -> Result<Box<dyn ConfigObject>, CoreError> {
        (self.decode)(value)
    }

    pub fn attach(&self, tool: &mut T, object: &dyn ConfigObject) -> Result<(), CoreError> {
        (self.attach)(tool, object)
    }
}

pub type ProduceFn<T> = fn(&mut T) -> Result<ProductionResult, ToolError>;

/// Capacidad de producción con su etiqueta declarada.
pub struct OutputCapability<T> {
    pub label: &'static str,
    pub produce: ProduceFn<T>,
}

/// Resumen sin tipo de un descriptor, para listados.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToolInfo {
    pub name: String,
    pub route: String,
    pub description: Option<String>,
    pub authors: Vec<String>,
    pub github: Option<String>,
    pub signatures: Vec<String>,
    pub configs: Vec<&'static str>,
    pub outputs: Vec<&'static str>,
    pub asset_id: Option<String>,
}

impl fmt::Display for ToolInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.route, self.name)?;
        if let Some(description) = &self.description {
            write!(f, ": {description}")?;
        }
        Ok(())
    }
}

pub struct ToolDescriptor<T> {
    name: String,
    route: String,
    description: Option<String>,
    authors: Vec<String>,
    github: Option<String>,
    signatures: Vec<ConstructionSignature<T>>,
    configs: Vec<ConfigCapability<T>>,
    outputs: Vec<OutputCapability<T>>,
    asset_id: Option<String>,
}

impl<T: 'static> ToolDescriptor<T> {
    pub fn builder(name: impl Into<String>) -> ToolDescriptorBuilder<T> {
        let name = name.into();
        ToolDescriptorBuilder { inner: ToolDescriptor { route: to_kebab_case(&name),
                                                        name,
                                                        description: None,
                                                        authors: Vec::new(),
                                                        github: None,
                                                        signatures: Vec::new(),
                                                        configs: Vec::new(),
                                                        outputs: Vec::new(),
                                                        asset_id: None } }
    }
}

impl<T> ToolDescriptor<T> {
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn route(&self) -> &str {
        &self.route
    }

    pub fn signatures(&self) -> &[ConstructionSignature<T>] {
        &self.signatures
    }

    pub fn configs(&self) -> &[ConfigCapability<T>] {
        &self.configs
    }

    pub fn outputs(&self) -> &[OutputCapability<T>] {
        &self.outputs
    }

    pub fn asset_id(&self) -> Option<&str> {
        self.asset_id.as_deref()
    }

    /// Falla si la herramienta no declara ninguna capacidad de producción.
    pub fn validate(&self) -> Result<(), CoreError> {
        if self.outputs.is_empty() {
            return Err(CoreError::MissingOutputCapability { tool: self.name.clone() });
        }
        Ok(())
    }

    /// Esquemas `(TYPE_NAME, campos)` para resolver overrides.
    pub fn config_schemas(&self) -> Vec<(&'static str, &'static [FieldSpec])> {
        self.configs.iter().map(|c| (c.type_name, c.fields)).collect()
    }

    pub fn info(&self) -> ToolInfo {
        ToolInfo { name: self.name.clone(),
                   route: self.route.clone(),
                   description: self.description.clone(),
                   authors: self.authors.clone(),
                   github: self.github.clone(),
                   signatures: self.signatures.iter().map(ConstructionSignature::describe).collect(),
                   configs: self.configs.iter().map(|c| c.type_name).collect(),
                   outputs: self.outputs.iter().map(|o| o.label).collect(),
                   asset_id: self.asset_id.clone() }
    }
}

pub struct ToolDescriptorBuilder<T> {
    inner: ToolDescriptor<T>,
}

impl<T: 'static> ToolDescriptorBuilder<T> {
    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.inner.description = Some(description.into());
        self
    }

    pub fn authors(mut self, authors: &[&str]) -> Self {
        self.inner.authors = authors.iter().map(|a| a.to_string()).collect();
        self
    }

    pub fn github(mut self, repository: impl Into<String>) -> Self {
        self.inner.github = Some(repository.into());
        self
    }

    /// Añade una firma; el orden de declaración es el orden de prueba.
    pub fn signature(mut self, slots: &[ParameterSlot], construct: Constructor<T>) -> Self {
        self.inner.signatures.push(ConstructionSignature::new(slots.to_vec(), construct));
        self
    }

    pub fn config<C: ToolConfig>(mut self, setter: fn(&mut T, C)) -> Self {
        self.inner.configs.push(ConfigCapability::new(setter));
        self
    }

    pub fn output(mut self, label: &'static str, produce: ProduceFn<T>) -> Self {
        self.inner.outputs.push(OutputCapability { label, produce });
        self
    }

    /// Declara la capacidad de carga de assets (`Assets/Tools/<id>/...`).
    pub fn assets(mut self, asset_id: impl Into<String>) -> Self {
        self.inner.asset_id = Some(asset_id.into());
        self
    }

    pub fn build(self) -> ToolDescriptor<T> {
        self.inner
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::signature::ToolArgs;
    use tool_domain::ClassId;

    struct Counter {
        maps: usize,
        config: CounterConfig,
    }

    crate::tool_config!(CounterConfig { step: u32 = 1 });

    fn construct(args: ToolArgs) -> Result<Counter, ToolError> {
        Ok(Counter { maps: args.nodes(0)?.len(),
                     config: CounterConfig::default() })
    }

    fn count(tool: &mut Counter) -> Result<ProductionResult, ToolError> {
        tool.maps += tool.config.step as usize;
        Ok(ProductionResult::Empty)
    }

    #[test]
    fn route_is_derived_from_name() {
        let descriptor = ToolDescriptor::<Counter>::builder("Count Maps").output("count", count).build();
        assert_eq!(descriptor.route(), "count-maps");
        assert!(descriptor.validate().is_ok());
    }

    #[test]
    fn tool_without_outputs_is_rejected() {
        let descriptor = ToolDescriptor::<Counter>::builder("Nothing").signature(&[ParameterSlot::nodes("maps", ClassId::MAP)],
                                                                                construct)
                                                                     .build();
        assert!(matches!(descriptor.validate(), Err(CoreError::MissingOutputCapability { ref tool }) if tool == "Nothing"));
    }

    #[test]
    fn config_capability_attaches_by_type() {
        let descriptor = ToolDescriptor::<Counter>::builder("Counter").config::<CounterConfig>(|t, c| t.config = c)
                                                                     .output("count", count)
                                                                     .build();
        let capability = &descriptor.configs()[0];
        let mut object = capability.default_object();
        object.apply_field("step", "5").expect("step");

        let mut tool = Counter { maps: 0,
                                 config: CounterConfig::default() };
        capability.attach(&mut tool, object.as_ref()).expect("attach");
        assert_eq!(tool.config.step, 5);
        assert_eq!(descriptor.info().configs, vec!["CounterConfig"]);
    }
}
