use std::time::{Duration, Instant};

use log::{debug, info};

use crate::errors::CoreError;
use crate::model::ProductionResult;
use crate::store::{AssetSource, ToolAssets};
use crate::tool::{Tool, ToolDescriptor};

/// Resultado de una capacidad de producción con su duración.
#[derive(Debug, Clone)]
pub struct Production {
    pub capability: &'static str,
    /// Etiqueta derivada del valor, p.ej. `NodeFile<CGameCtnChallenge>`.
    pub label: String,
    pub result: ProductionResult,
    pub elapsed: Duration,
}

/// Invoca las capacidades de producción de una instancia en orden de
/// declaración. Si la herramienta declara assets, los carga antes.
pub struct ProductionDriver<'a> {
    assets: &'a dyn AssetSource,
}

impl<'a> ProductionDriver<'a> {
    pub fn new(assets: &'a dyn AssetSource) -> Self {
        Self { assets }
    }

    pub async fn drive<T: Tool>(&self, descriptor: &ToolDescriptor<T>, tool: &mut T) -> Result<Vec<Production>, CoreError> {
        if let Some(asset_id) = descriptor.asset_id() {
            let start = Instant::now();
            tool.load_assets(ToolAssets::new(asset_id, self.assets)).await?;
            debug!("{}: assets '{asset_id}' loaded in {:?}", descriptor.name(), start.elapsed());
        }

        let mut productions = Vec::with_capacity(descriptor.outputs().len());
        for output in descriptor.outputs() {
            let start = Instant::now();
            let result = (output.produce)(tool)?;
            let elapsed = start.elapsed();
            let label = result.describe();
            info!("{} [{}] produced {label} in {elapsed:?}", descriptor.name(), output.label);
            productions.push(Production { capability: output.label,
                                          label,
                                          result,
                                          elapsed });
        }
        Ok(productions)
    }
}
