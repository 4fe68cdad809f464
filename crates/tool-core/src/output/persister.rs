//! `OutputPersister`: decide el nombre de cada resultado y lo escribe.
//!
//! - `RawNode` → nombre sintetizado con la extensión de su clase.
//! - `NamedArtifact` con nombre → sólo el nombre base, dentro del directorio
//!   de salida; sin nombre → igual que `RawNode`.
//! - `Many` → cada elemento en orden.
//! - `Text` / `Binary` → `UnsupportedOutputShape`.
//!
//! La forma se valida completa antes de escribir, así un resultado anidado
//! con un elemento no soportado no deja archivos a medias.
use std::path::{Path, PathBuf};

use log::info;
use tool_domain::{ClassRegistry, Node};

use super::naming::{base_name, FileNamer};
use crate::errors::CoreError;
use crate::model::ProductionResult;
use crate::store::OutputWriter;

#[derive(Debug)]
pub struct OutputPersister<'a> {
    output_dir: &'a Path,
    classes: &'a ClassRegistry,
    namer: &'a FileNamer,
}

impl<'a> OutputPersister<'a> {
    pub fn new(output_dir: &'a Path, classes: &'a ClassRegistry, namer: &'a FileNamer) -> Self {
        Self { output_dir,
               classes,
               namer }
    }

    /// Escribe el resultado y devuelve las rutas escritas, en orden.
    pub fn persist(&self, result: &ProductionResult, writer: &mut dyn OutputWriter) -> Result<Vec<PathBuf>, CoreError> {
        check_shape(result)?;
        let mut written = Vec::new();
        self.write(result, writer, &mut written)?;
        Ok(written)
    }

    fn write(&self, result: &ProductionResult, writer: &mut dyn OutputWriter, written: &mut Vec<PathBuf>) -> Result<(), CoreError> {
        match result {
            ProductionResult::Empty => {}
            ProductionResult::RawNode(node) => {
                let name = self.synthesize(node);
                written.push(self.write_node(&name, node, writer)?);
            }
            ProductionResult::NamedArtifact(file) => {
                let name = match file.file_name().and_then(base_name) {
                    Some(name) => name.to_string(),
                    None => self.synthesize(&file.node),
                };
                written.push(self.write_node(&name, &file.node, writer)?);
            }
            ProductionResult::Many(items) => {
                for item in items {
                    self.write(item, writer, written)?;
                }
            }
            other => return Err(unsupported(other)),
        }
        Ok(())
    }

    fn synthesize(&self, node: &Node) -> String {
        self.namer.synthesize(self.classes.extension(node.class()))
    }

    fn write_node(&self, name: &str, node: &Node, writer: &mut dyn OutputWriter) -> Result<PathBuf, CoreError> {
        let path = self.output_dir.join(name);
        writer.write_file(&path, node.bytes())?;
        info!("saved {}", path.display());
        Ok(path)
    }
}

fn check_shape(result: &ProductionResult) -> Result<(), CoreError> {
    match result {
        ProductionResult::Text(_) | ProductionResult::Binary(_) => Err(unsupported(result)),
        ProductionResult::Many(items) => items.iter().try_for_each(check_shape),
        _ => Ok(()),
    }
}

fn unsupported(result: &ProductionResult) -> CoreError {
    CoreError::UnsupportedOutputShape { shape: result.shape().to_string() }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::InMemoryOutputWriter;
    use tool_domain::{ClassId, NodeFile, TextFile};

    fn persist(result: ProductionResult) -> (Result<Vec<PathBuf>, CoreError>, InMemoryOutputWriter) {
        let classes = ClassRegistry::with_known_classes();
        let namer = FileNamer::new();
        let mut writer = InMemoryOutputWriter::default();
        let persister = OutputPersister::new(Path::new("out"), &classes, &namer);
        (persister.persist(&result, &mut writer), writer)
    }

    #[test]
    fn named_artifact_keeps_only_base_name() {
        let node = Node::build(ClassId::MAP, &[], b"m");
        let (paths, writer) = persist(NodeFile::named(node.clone(), "Maps/Sub/report.json").into());
        assert_eq!(paths.expect("persist"), vec![PathBuf::from("out/report.json")]);
        assert_eq!(writer.get(Path::new("out/report.json")), Some(node.bytes()));
    }

    #[test]
    fn dot_dot_name_falls_back_to_synthesized_name() {
        let (paths, _) = persist(NodeFile::named(Node::build(ClassId::MAP, &[], b""), "evil/..").into());
        let paths = paths.expect("persist");
        assert_eq!(paths.len(), 1);
        assert_eq!(paths[0].parent(), Some(Path::new("out")));
        assert!(paths[0].to_string_lossy().ends_with(".Map.Gbx"), "{}", paths[0].display());
    }

    #[test]
    fn unnamed_artifact_uses_class_extension() {
        let (paths, _) = persist(NodeFile::new(Node::build(ClassId::REPLAY, &[], b"")).into());
        let paths = paths.expect("persist");
        assert!(paths[0].to_string_lossy().ends_with(".Replay.Gbx"));
    }

    #[test]
    fn nested_unsupported_shape_writes_nothing() {
        let result = ProductionResult::Many(vec![Node::build(ClassId::MAP, &[], b"").into(),
                                                 ProductionResult::Text(TextFile::new("x"))]);
        let (outcome, writer) = persist(result);
        assert!(matches!(outcome, Err(CoreError::UnsupportedOutputShape { ref shape }) if shape == "TextFile"));
        assert!(writer.files.is_empty());
    }
}
