use std::path::{Path, PathBuf};

use tool_adapters::tools::{CopyMapTool, GhostBundleTool};
use tool_adapters::FileLoader;
use tool_core::{CoreError, InMemoryAssetSource, InMemoryConfigStore, InMemoryOutputWriter, RunContext, RunOptions, RunReport,
                Tool, ToolRunner};
use tool_domain::{ClassId, ClassRegistry, Node};

struct Fixture {
    classes: ClassRegistry,
    configs: InMemoryConfigStore,
    outputs: InMemoryOutputWriter,
    assets: InMemoryAssetSource,
}

impl Fixture {
    fn new() -> Self {
        Self { classes: ClassRegistry::with_known_classes(),
               configs: InMemoryConfigStore::default(),
               outputs: InMemoryOutputWriter::default(),
               assets: InMemoryAssetSource::default().with("GhostBundle", "labels.json", r#"{"prefix":"Run"}"#) }
    }

    fn load(&self, files: &[(&str, Node)]) -> Vec<tool_core::Artifact> {
        let loader = FileLoader::new(&self.classes);
        files.iter().map(|(name, node)| loader.load_bytes(name, node.bytes().to_vec())).collect()
    }

    async fn run<T: Tool>(&mut self, options: RunOptions, files: &[(&str, Node)]) -> Result<RunReport, CoreError> {
        let inputs = self.load(files);
        ToolRunner::<T>::new(options)?.run(inputs,
                                           RunContext { classes: &self.classes,
                                                        configs: &mut self.configs,
                                                        outputs: &mut self.outputs,
                                                        assets: &self.assets })
                                      .await
    }
}

fn options() -> RunOptions {
    RunOptions { output_dir: PathBuf::from("Output"),
                 ..RunOptions::default() }
}

fn ghost() -> Node {
    Node::build(ClassId::GHOST, &[(0x0309_2000, vec![1])], b"ghost")
}

#[tokio::test]
async fn ghost_bundle_splits_per_ghost_and_copies_replay() {
    let mut f = Fixture::new();
    let replay = Node::build(ClassId::REPLAY, &[], b"replay");
    let report = f.run::<GhostBundleTool>(options(),
                                          &[("g/A.Ghost.Gbx", ghost()), ("r/R.Replay.Gbx", replay), ("g/B.Ghost.Gbx", ghost())])
                  .await
                  .expect("run");

    assert_eq!(report.signature, 0);
    assert_eq!(report.instances, 2);
    let paths = f.outputs.paths();
    assert_eq!(paths.len(), 4);
    assert_eq!(paths[0], Path::new("Output/Run_A.Ghost.Gbx"));
    assert_eq!(paths[2], Path::new("Output/Run_B.Ghost.Gbx"));
    assert!(paths[1].to_string_lossy().ends_with(".Replay.Gbx"));
}

#[tokio::test]
async fn ghost_bundle_persists_one_identity_per_config() {
    let mut f = Fixture::new();
    let options = RunOptions { custom_config: Some("Fast".to_string()),
                               overrides: vec![("-c:include_replay".to_string(), "false".to_string())],
                               ..options() };
    let report = f.run::<GhostBundleTool>(options, &[("A.Ghost.Gbx", ghost())]).await.expect("run");

    assert_eq!(report.signature, 1);
    let mut identities: Vec<&str> = f.configs.inner.keys().map(|(_, id)| id.as_str()).collect();
    identities.sort();
    assert_eq!(identities, vec!["Fast.BundleConfig", "Fast.NamingConfig"]);
    let bundle = &f.configs.inner[&("ghost-bundle".to_string(), "Fast.BundleConfig".to_string())];
    assert_eq!(bundle["include_replay"], serde_json::json!(false));
}

#[tokio::test]
async fn ghost_bundle_single_output_writes_every_ghost_from_one_instance() {
    let mut f = Fixture::new();
    let options = RunOptions { single_output: true,
                               ..options() };
    let report = f.run::<GhostBundleTool>(options, &[("A.Ghost.Gbx", ghost()), ("B.Ghost.Gbx", ghost())])
                  .await
                  .expect("run");
    assert_eq!(report.instances, 1);
    assert_eq!(report.written().count(), 2);
}

#[tokio::test]
async fn copy_map_keeps_only_base_name() {
    let mut f = Fixture::new();
    let map = Node::build(ClassId::MAP, &[], b"map");
    f.run::<CopyMapTool>(options(), &[("maps/Winter 01.Map.Gbx", map.clone())]).await.expect("run");

    let written = Path::new("Output/Winter 01.Map.Gbx");
    assert_eq!(f.outputs.paths(), vec![written]);
    assert_eq!(f.outputs.get(written), Some(map.bytes()));
}

#[tokio::test]
async fn copy_map_rejects_extra_text_input() {
    let mut f = Fixture::new();
    let classes = ClassRegistry::with_known_classes();
    let loader = FileLoader::new(&classes);
    let mut inputs = f.load(&[("A.Map.Gbx", Node::build(ClassId::MAP, &[], b""))]);
    inputs.push(loader.load_bytes("notes.txt", b"stray".to_vec()));

    let err = ToolRunner::<CopyMapTool>::new(options()).expect("runner")
                                                      .run(inputs,
                                                           RunContext { classes: &f.classes,
                                                                        configs: &mut f.configs,
                                                                        outputs: &mut f.outputs,
                                                                        assets: &f.assets })
                                                      .await
                                                      .unwrap_err();
    assert!(err.to_string().contains("TextFile x1"), "{err}");
}

#[test]
fn loader_reads_files_from_disk() {
    let dir = tempfile::tempdir().expect("tempdir");
    let map_path = dir.path().join("A.Map.Gbx");
    std::fs::write(&map_path, Node::build(ClassId::MAP, &[], b"").bytes()).expect("write map");
    let text_path = dir.path().join("notes.txt");
    std::fs::write(&text_path, "hello").expect("write text");

    let classes = ClassRegistry::with_known_classes();
    let loader = FileLoader::new(&classes);
    let artifacts = loader.load_all(&[&map_path, &text_path]).expect("load");
    assert_eq!(artifacts.len(), 2);
    assert_eq!(artifacts[0].as_node().map(Node::class), Some(ClassId::MAP));
    assert_eq!(artifacts[1].as_text().map(|t| t.text()), Some("hello"));

    let missing = loader.load(&dir.path().join("missing.Gbx")).unwrap_err();
    assert!(missing.to_string().contains("missing.Gbx"));
}
