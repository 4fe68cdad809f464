//! CopyMapTool: reescribe cada mapa con un nombre derivado de su archivo de
//! origen. Con varios mapas de entrada se ejecuta una instancia por mapa.
use log::info;
use tool_core::signature::ParameterSlot;
use tool_core::{tool_config, ProductionResult, Tool, ToolArgs, ToolDescriptor, ToolError};
use tool_domain::naming::{sanitize_file_name, to_extended_ascii};
use tool_domain::{ClassId, Node, NodeFile};

tool_config!(CopyMapConfig { prefix: String = String::new(),
                             keep_name: bool = true });

pub struct CopyMapTool {
    map: Node,
    config: CopyMapConfig,
}

impl CopyMapTool {
    fn new(args: ToolArgs) -> Result<Self, ToolError> {
        Ok(Self { map: args.node(0)?,
                  config: CopyMapConfig::default() })
    }

    fn produce(&mut self) -> Result<ProductionResult, ToolError> {
        info!("{}: {} header chunks", self.map.origin().unwrap_or("map"), self.map.header_chunks().len());
        if !self.config.keep_name {
            return Ok(NodeFile::new(self.map.clone()).into());
        }
        let stem = self.map.origin_stem().unwrap_or("Map");
        let name = to_extended_ascii(&sanitize_file_name(&format!("{}{stem}", self.config.prefix)));
        Ok(NodeFile::named(self.map.clone(), format!("Maps/CopyMap/{name}.Map.Gbx")).into())
    }
}

impl Tool for CopyMapTool {
    fn descriptor() -> ToolDescriptor<Self> {
        ToolDescriptor::builder("Copy Map").description("Copies maps under a sanitized name.")
                                           .authors(&["toolflow"])
                                           .signature(&[ParameterSlot::node("map", ClassId::MAP)], Self::new)
                                           .config::<CopyMapConfig>(|tool, config| tool.config = config)
                                           .output("map", Self::produce)
                                           .build()
    }
}
