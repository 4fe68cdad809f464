//! Configuración de herramientas: esquema de campos, overrides y binder.
//!
//! Cada tipo de configuración declara una tabla estática de campos
//! (`FieldSpec`) con un setter tipado. Los overrides de línea de comandos se
//! resuelven contra esa tabla al arrancar, antes de tocar ninguna entrada,
//! y el `ConfigBinder` los aplica una sola vez sobre la configuración cargada.

pub mod binder;
pub mod config;
pub mod field;
pub mod macros;
pub mod overrides;

pub use binder::ConfigBinder;
pub use config::{decode_config, ConfigObject, ToolConfig};
pub use field::{FieldError, FieldKind, FieldSpec, FieldValue};
pub use overrides::{FieldOverride, OverrideSet};
