//! Herramientas disponibles en la CLI y su ejecución sobre el sistema de
//! archivos.
use log::info;
use thiserror::Error;
use tool_adapters::tools::{CopyMapTool, GhostBundleTool};
use tool_adapters::{FileLoader, LoadError};
use tool_core::{CoreError, RunContext, RunOptions, RunReport, Tool, ToolInfo, ToolRunner};
use tool_domain::ClassRegistry;
use tool_persistence::{FsAssetSource, FsConfigStore, FsOutputWriter, StorageConfig};

use crate::args::{ArgsError, RunArgs};

#[derive(Debug, Error)]
pub enum CliError {
    #[error(transparent)]
    Args(#[from] ArgsError),
    #[error("unknown tool '{0}' (see --list)")]
    UnknownTool(String),
    #[error(transparent)]
    Load(#[from] LoadError),
    #[error(transparent)]
    Core(#[from] CoreError),
}

impl CliError {
    /// 2 uso, 4 entradas/resolución/configuración, 5 resto.
    pub fn exit_code(&self) -> i32 {
        match self {
            CliError::Args(_) | CliError::UnknownTool(_) => 2,
            CliError::Load(_) => 4,
            CliError::Core(e) => match e {
                CoreError::NoUsableSignature { .. }
                | CoreError::AmbiguousBulkInput { .. }
                | CoreError::UnconsumedInput { .. }
                | CoreError::FieldBinding { .. }
                | CoreError::UnknownConfigField { .. }
                | CoreError::AmbiguousOverride { .. } => 4,
                _ => 5,
            },
        }
    }
}

pub fn tool_infos() -> Vec<ToolInfo> {
    vec![CopyMapTool::descriptor().info(), GhostBundleTool::descriptor().info()]
}

pub async fn dispatch(args: &RunArgs, storage: &StorageConfig, classes: &ClassRegistry) -> Result<RunReport, CliError> {
    let route = args.tool.to_ascii_lowercase();
    if route == CopyMapTool::descriptor().route() {
        return run_tool::<CopyMapTool>(args, storage, classes).await;
    }
    if route == GhostBundleTool::descriptor().route() {
        return run_tool::<GhostBundleTool>(args, storage, classes).await;
    }
    Err(CliError::UnknownTool(args.tool.clone()))
}

async fn run_tool<T: Tool>(args: &RunArgs, storage: &StorageConfig, classes: &ClassRegistry) -> Result<RunReport, CliError> {
    let options = RunOptions { single_output: args.single_output,
                               custom_config: args.config.clone(),
                               output_dir: args.output_dir.clone().unwrap_or_else(|| storage.output_dir.clone()),
                               overrides: args.overrides.clone() };
    let runner = ToolRunner::<T>::new(options)?;

    let inputs = FileLoader::new(classes).load_all(args.inputs.as_slice())?;
    info!("{}: {} input(s) loaded", runner.descriptor().name(), inputs.len());

    let mut configs = FsConfigStore::new(&storage.config_dir);
    let mut outputs = FsOutputWriter;
    let assets = FsAssetSource::new(&storage.assets_dir);
    let report = runner.run(inputs,
                            RunContext { classes,
                                         configs: &mut configs,
                                         outputs: &mut outputs,
                                         assets: &assets })
                       .await?;
    Ok(report)
}
