use std::path::{Path, PathBuf};

use toolflow_rust::adapters::tools::{CopyMapTool, GhostBundleTool};
use toolflow_rust::adapters::FileLoader;
use toolflow_rust::domain::{ClassId, ClassRegistry, Node, NodeFile};
use toolflow_rust::engine::signature::ParameterSlot;
use toolflow_rust::engine::{ProductionResult, ToolArgs, ToolError};
use toolflow_rust::persistence::{FsAssetSource, FsConfigStore, FsOutputWriter, StorageConfig};
use toolflow_rust::{CoreError, RunContext, RunOptions, RunReport, Tool, ToolDescriptor, ToolRunner};

/// Directorios de trabajo dentro de un tempdir.
struct Workspace {
    _dir: tempfile::TempDir,
    storage: StorageConfig,
    inputs: PathBuf,
    classes: ClassRegistry,
}

impl Workspace {
    fn new() -> Self {
        let dir = tempfile::tempdir().expect("tempdir");
        let root = dir.path().to_path_buf();
        let storage = StorageConfig { config_dir: root.join("Config"),
                                      assets_dir: root.join("Assets"),
                                      output_dir: root.join("Output") };
        let inputs = root.join("inputs");
        std::fs::create_dir_all(&inputs).expect("inputs dir");
        Self { _dir: dir,
               storage,
               inputs,
               classes: ClassRegistry::with_known_classes() }
    }

    fn input(&self, name: &str, bytes: &[u8]) -> PathBuf {
        let path = self.inputs.join(name);
        std::fs::write(&path, bytes).expect("write input");
        path
    }

    fn asset(&self, tool: &str, name: &str, text: &str) {
        let dir = self.storage.assets_dir.join("Tools").join(tool);
        std::fs::create_dir_all(&dir).expect("asset dir");
        std::fs::write(dir.join(name), text).expect("write asset");
    }

    fn output_names(&self) -> Vec<String> {
        let mut names: Vec<String> = std::fs::read_dir(&self.storage.output_dir).map(|entries| {
                                                                                       entries.filter_map(Result::ok)
                                                                                              .map(|e| e.file_name().to_string_lossy().into_owned())
                                                                                              .collect()
                                                                                   })
                                                                                   .unwrap_or_default();
        names.sort();
        names
    }

    async fn run<T: Tool>(&self, mut options: RunOptions, paths: &[PathBuf]) -> Result<RunReport, CoreError> {
        options.output_dir = self.storage.output_dir.clone();
        let runner = ToolRunner::<T>::new(options)?;
        let inputs = FileLoader::new(&self.classes).load_all(paths).expect("load inputs");
        let mut configs = FsConfigStore::new(&self.storage.config_dir);
        let mut outputs = FsOutputWriter;
        let assets = FsAssetSource::new(&self.storage.assets_dir);
        runner.run(inputs,
                   RunContext { classes: &self.classes,
                                configs: &mut configs,
                                outputs: &mut outputs,
                                assets: &assets })
              .await
    }
}

fn map_bytes(tag: &[u8]) -> Vec<u8> {
    Node::build(ClassId::MAP, &[(0x0304_3002, vec![7; 4])], tag).bytes().to_vec()
}

#[tokio::test]
async fn copy_map_writes_one_file_per_map_and_saves_default_config() {
    let ws = Workspace::new();
    let a = ws.input("Spring.Map.Gbx", &map_bytes(b"a"));
    let b = ws.input("Summer.Map.Gbx", &map_bytes(b"b"));

    let report = ws.run::<CopyMapTool>(RunOptions::default(), &[a, b]).await.expect("run");

    assert_eq!(report.instances, 2);
    assert_eq!(ws.output_names(), vec!["Spring.Map.Gbx", "Summer.Map.Gbx"]);
    assert_eq!(std::fs::read(ws.storage.output_dir.join("Summer.Map.Gbx")).expect("output"), map_bytes(b"b"));
    assert!(ws.storage.config_dir.join("copy-map").join("Default.json").is_file());
}

#[tokio::test]
async fn saved_config_is_reused_by_next_run() {
    let ws = Workspace::new();
    let a = ws.input("Spring.Map.Gbx", &map_bytes(b"a"));
    let options = RunOptions { custom_config: Some("Prefixed".to_string()),
                               overrides: vec![("-c:prefix".to_string(), "Old ".to_string())],
                               ..RunOptions::default() };
    ws.run::<CopyMapTool>(options, &[a.clone()]).await.expect("first run");

    let options = RunOptions { custom_config: Some("Prefixed".to_string()),
                               ..RunOptions::default() };
    ws.run::<CopyMapTool>(options, &[a]).await.expect("second run");

    assert_eq!(ws.output_names(), vec!["Old Spring.Map.Gbx"]);
    let saved: serde_json::Value =
        serde_json::from_str(&std::fs::read_to_string(ws.storage.config_dir.join("copy-map").join("Prefixed.json")).expect("config"))
            .expect("json");
    assert_eq!(saved["prefix"], "Old ");
}

#[tokio::test]
async fn ghost_bundle_reads_assets_from_disk() {
    let ws = Workspace::new();
    ws.asset("GhostBundle", "labels.json", r#"{ "prefix": "PB" }"#);
    let ghost = Node::build(ClassId::GHOST, &[], b"g").bytes().to_vec();
    let paths = vec![ws.input("A.Ghost.Gbx", &ghost), ws.input("B.Ghost.Gbx", &ghost)];

    let report = ws.run::<GhostBundleTool>(RunOptions::default(), &paths).await.expect("run");

    assert_eq!(report.signature, 1);
    assert_eq!(ws.output_names(), vec!["PB_A.Ghost.Gbx", "PB_B.Ghost.Gbx"]);
    assert!(ws.storage.config_dir.join("ghost-bundle").join("Default.BundleConfig.json").is_file());
    assert!(ws.storage.config_dir.join("ghost-bundle").join("Default.NamingConfig.json").is_file());
}

#[tokio::test]
async fn undecodable_file_becomes_binary_and_is_rejected_as_unconsumed() {
    let ws = Workspace::new();
    let a = ws.input("A.Map.Gbx", &map_bytes(b"a"));
    let junk = ws.input("broken.Map.Gbx", b"GBX\x02\x00\x00junk");

    let err = ws.run::<CopyMapTool>(RunOptions::default(), &[a, junk]).await.unwrap_err();

    assert!(matches!(err, CoreError::UnconsumedInput { .. }), "{err}");
    assert!(err.to_string().contains("BinFile x1"));
    assert!(ws.output_names().is_empty());
}

/// Herramienta de prueba con nombres explícitos y nodos sin extensión.
struct Exporter {
    map: Node,
}

fn export_report(tool: &mut Exporter) -> Result<ProductionResult, ToolError> {
    Ok(NodeFile::named(tool.map.clone(), "../reports/nested/report.json").into())
}

fn export_collection(_: &mut Exporter) -> Result<ProductionResult, ToolError> {
    Ok(Node::build(ClassId::COLLECTION, &[], b"c").into())
}

impl Tool for Exporter {
    fn descriptor() -> ToolDescriptor<Self> {
        ToolDescriptor::builder("Exporter").signature(&[ParameterSlot::node("map", ClassId::MAP)], |args: ToolArgs| {
                                               Ok(Exporter { map: args.node(0)? })
                                           })
                                          .output("report", export_report)
                                          .output("collection", export_collection)
                                          .build()
    }
}

#[test]
fn explicit_names_keep_base_name_and_unknown_classes_get_no_extension() {
    let ws = Workspace::new();
    let a = ws.input("A.Map.Gbx", &map_bytes(b"a"));

    let report = tokio_test::block_on(ws.run::<Exporter>(RunOptions::default(), &[a])).expect("run");

    let written: Vec<&Path> = report.written().map(PathBuf::as_path).collect();
    assert_eq!(written[0], ws.storage.output_dir.join("report.json"));

    let synthesized = written[1].file_name().and_then(|n| n.to_str()).expect("file name");
    let (stamp, rest) = synthesized.split_at(19);
    assert!(stamp.chars().all(|c| c.is_ascii_digit() || c == '-' || c == '_'), "{synthesized}");
    assert!(rest.starts_with('_') && rest.ends_with(".Gbx"), "{synthesized}");
    // sin segmento de extensión: `_{uuid}.Gbx`
    assert_eq!(rest.len(), 1 + 36 + ".Gbx".len(), "{synthesized}");
}
