//! Contrato de herramienta.
//!
//! Una herramienta declara estáticamente, en su `ToolDescriptor`, cómo se
//! construye (firmas), qué configuraciones recibe y qué produce. El motor
//! nunca inspecciona el tipo en tiempo de ejecución.

pub mod descriptor;

use async_trait::async_trait;

pub use descriptor::{ConfigCapability, OutputCapability, ToolDescriptor, ToolDescriptorBuilder, ToolInfo};

use crate::errors::ToolError;
use crate::store::ToolAssets;

#[async_trait]
pub trait Tool: Send + Sized + 'static {
    fn descriptor() -> ToolDescriptor<Self>;

    /// Se espera por instancia antes de cualquier producción, sólo si el
    /// descriptor declara un identificador de assets.
    async fn load_assets(&mut self, assets: ToolAssets<'_>) -> Result<(), ToolError> {
        let _ = assets;
        Ok(())
    }
}
