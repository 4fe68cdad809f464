//! GhostBundleTool: extrae los ghosts de entrada con nombres estables y,
//! si se dio una repetición, la copia junto a ellos.
//!
//! Firmas, en orden de preferencia:
//! - `(replay: CGameCtnReplayRecord, ghosts: [CGameCtnGhost])`
//! - `(ghosts: [CGameCtnGhost])`
//!
//! Declara dos configuraciones, así que sus identidades persistidas llevan
//! sufijo (`Default.BundleConfig`, `Default.NamingConfig`). Lee
//! `labels.json` de sus assets antes de producir.
use async_trait::async_trait;
use serde::Deserialize;
use tool_core::signature::ParameterSlot;
use tool_core::{tool_config, ProductionResult, Tool, ToolArgs, ToolAssets, ToolDescriptor, ToolError};
use tool_domain::naming::sanitize_file_name;
use tool_domain::{ClassId, Node, NodeFile};

const LABELS_FILE: &str = "labels.json";

tool_config!(BundleConfig { include_replay: bool = true,
                            // 0 = sin límite
                            max_ghosts: u32 = 0 });

tool_config!(NamingConfig { prefix: String = "Ghost".to_string(),
                            separator: String = "_".to_string() });

/// Contenido de `labels.json`.
#[derive(Debug, Default, Deserialize)]
struct Labels {
    prefix: Option<String>,
}

pub struct GhostBundleTool {
    replay: Option<Node>,
    ghosts: Vec<Node>,
    bundle: BundleConfig,
    naming: NamingConfig,
    label: Option<String>,
}

impl GhostBundleTool {
    fn with_replay(args: ToolArgs) -> Result<Self, ToolError> {
        Ok(Self::new(Some(args.node(0)?), args.nodes(1)?))
    }

    fn ghosts_only(args: ToolArgs) -> Result<Self, ToolError> {
        Ok(Self::new(None, args.nodes(0)?))
    }

    fn new(replay: Option<Node>, ghosts: Vec<Node>) -> Self {
        Self { replay,
               ghosts,
               bundle: BundleConfig::default(),
               naming: NamingConfig::default(),
               label: None }
    }

    fn produce_ghosts(&mut self) -> Result<ProductionResult, ToolError> {
        let limit = match self.bundle.max_ghosts {
            0 => usize::MAX,
            n => n as usize,
        };
        let prefix = self.label.as_deref().unwrap_or(&self.naming.prefix);
        let files: Vec<NodeFile> = self.ghosts
                                       .iter()
                                       .take(limit)
                                       .enumerate()
                                       .map(|(i, ghost)| {
                                           let stem = ghost.origin_stem().map_or_else(|| format!("{i:02}"), str::to_string);
                                           let name = sanitize_file_name(&format!("{prefix}{}{stem}", self.naming.separator));
                                           NodeFile::named(ghost.clone(), format!("{name}.Ghost.Gbx"))
                                       })
                                       .collect();
        Ok(files.into())
    }

    fn produce_replay(&mut self) -> Result<ProductionResult, ToolError> {
        if !self.bundle.include_replay {
            return Ok(ProductionResult::Empty);
        }
        Ok(self.replay.clone().into())
    }
}

#[async_trait]
impl Tool for GhostBundleTool {
    fn descriptor() -> ToolDescriptor<Self> {
        ToolDescriptor::builder("GhostBundle").description("Extracts ghosts with stable names.")
                                              .authors(&["toolflow"])
                                              .signature(&[ParameterSlot::node("replay", ClassId::REPLAY),
                                                           ParameterSlot::nodes("ghosts", ClassId::GHOST)],
                                                         Self::with_replay)
                                              .signature(&[ParameterSlot::nodes("ghosts", ClassId::GHOST)], Self::ghosts_only)
                                              .config::<BundleConfig>(|tool, config| tool.bundle = config)
                                              .config::<NamingConfig>(|tool, config| tool.naming = config)
                                              .output("ghosts", Self::produce_ghosts)
                                              .output("replay", Self::produce_replay)
                                              .assets("GhostBundle")
                                              .build()
    }

    async fn load_assets(&mut self, assets: ToolAssets<'_>) -> Result<(), ToolError> {
        let raw = assets.read(LABELS_FILE).await?;
        let labels: Labels = serde_json::from_slice(&raw).map_err(|e| ToolError::Asset { path: LABELS_FILE.to_string(),
                                                                                         reason: e.to_string() })?;
        self.label = labels.prefix.filter(|p| !p.trim().is_empty());
        Ok(())
    }
}
