//! tool-core: motor de resolución, expansión y ejecución de herramientas.
pub mod constants;
pub mod engine;
pub mod errors;
pub mod injection;
pub mod model;
pub mod output;
pub mod resolve;
pub mod signature;
pub mod store;
pub mod tool;

pub use engine::{ProductionRecord, RunContext, RunOptions, RunReport, ToolRunner};
pub use errors::{CoreError, StorageError, ToolError};
pub use injection::{ConfigBinder, OverrideSet, ToolConfig};
pub use model::{Artifact, ArtifactType, InputQueueMap, ProductionResult};
pub use output::{FileNamer, OutputPersister};
pub use resolve::{classify, resolve, ResolvedBinding};
pub use signature::{ParameterSlot, ToolArgs};
pub use store::{AssetSource, ConfigStore, InMemoryAssetSource, InMemoryConfigStore, InMemoryOutputWriter, NoAssets, OutputWriter,
                ToolAssets};
pub use tool::{Tool, ToolDescriptor, ToolInfo};

// tool_config! se exporta en la raíz vía #[macro_export]
