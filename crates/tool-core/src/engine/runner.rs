use std::path::PathBuf;

use log::info;
use tool_domain::ClassRegistry;

use super::driver::ProductionDriver;
use super::report::{ProductionRecord, RunReport};
use crate::errors::CoreError;
use crate::injection::{ConfigBinder, OverrideSet};
use crate::model::Artifact;
use crate::output::{FileNamer, OutputPersister};
use crate::resolve::{classify, resolve};
use crate::signature::ConstructionSignature;
use crate::store::{AssetSource, ConfigStore, OutputWriter};
use crate::tool::{Tool, ToolDescriptor};

/// Opciones de una ejecución (línea de comandos o llamador embebido).
#[derive(Debug, Clone)]
pub struct RunOptions {
    /// Fuerza una única instancia aunque haya un slot bulk.
    pub single_output: bool,
    pub custom_config: Option<String>,
    pub output_dir: PathBuf,
    /// Pares `(clave, valor)` en orden de llegada; ver `OverrideSet`.
    pub overrides: Vec<(String, String)>,
}

impl Default for RunOptions {
    fn default() -> Self {
        Self { single_output: false,
               custom_config: None,
               output_dir: PathBuf::from("Output"),
               overrides: Vec::new() }
    }
}

/// Colaboradores externos de una ejecución.
pub struct RunContext<'a> {
    pub classes: &'a ClassRegistry,
    pub configs: &'a mut dyn ConfigStore,
    pub outputs: &'a mut dyn OutputWriter,
    pub assets: &'a dyn AssetSource,
}

pub struct ToolRunner<T> {
    descriptor: ToolDescriptor<T>,
    options: RunOptions,
    namer: FileNamer,
}

impl<T: Tool> ToolRunner<T> {
    /// Valida el descriptor antes de aceptar ninguna entrada.
    pub fn new(options: RunOptions) -> Result<Self, CoreError> {
        let descriptor = T::descriptor();
        descriptor.validate()?;
        Ok(Self { descriptor,
                  options,
                  namer: FileNamer::new() })
    }

    pub fn with_namer(mut self, namer: FileNamer) -> Self {
        self.namer = namer;
        self
    }

    pub fn descriptor(&self) -> &ToolDescriptor<T> {
        &self.descriptor
    }

    /// Ejecuta la herramienta sobre `inputs`. Cualquier error de overrides,
    /// resolución o configuración aborta antes de construir instancias.
    pub async fn run(&self, inputs: Vec<Artifact>, ctx: RunContext<'_>) -> Result<RunReport, CoreError> {
        let descriptor = &self.descriptor;
        let overrides = OverrideSet::resolve(&self.options.overrides, descriptor.config_schemas())?;

        let mut queues = classify(inputs);
        let binding = resolve(descriptor.signatures().iter().map(ConstructionSignature::slots), &mut queues)?;
        let signature = &descriptor.signatures()[binding.signature_index()];

        let binder = ConfigBinder::load(descriptor, self.options.custom_config.as_deref(), &overrides, ctx.configs)?;

        let instances = binding.expand(self.options.single_output);
        info!("{}: signature #{} {} -> {} instance(s)",
              descriptor.name(),
              binding.signature_index(),
              signature.describe(),
              instances.len());

        let persister = OutputPersister::new(&self.options.output_dir, ctx.classes, &self.namer);
        let driver = ProductionDriver::new(ctx.assets);
        let mut report = RunReport { tool: descriptor.name().to_string(),
                                     signature: binding.signature_index(),
                                     instances: instances.len(),
                                     productions: Vec::new() };

        for (instance, args) in instances.enumerate() {
            let mut tool = signature.construct(args)?;
            binder.attach(descriptor, &mut tool)?;
            for production in driver.drive(descriptor, &mut tool).await? {
                let written = if production.result.is_empty() {
                    Vec::new()
                } else {
                    persister.persist(&production.result, &mut *ctx.outputs)?
                };
                report.productions.push(ProductionRecord { instance,
                                                           capability: production.capability,
                                                           label: production.label,
                                                           shape: production.result.shape(),
                                                           elapsed: production.elapsed,
                                                           written });
            }
        }
        Ok(report)
    }
}
