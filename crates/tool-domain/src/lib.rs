//! tool-domain: artefactos del dominio GBX.
//!
//! Este crate no sabe nada del motor de resolución; sólo describe los objetos
//! que el loader materializa a partir de un archivo de entrada:
//! - `Node`: nodo estructurado decodificado desde la cabecera GBX.
//! - `TextFile` / `BinFile`: texto crudo y bytes opacos (fallback).
//! - `NodeFile`: nodo producido por una herramienta con nombre opcional.
//! - `ClassId` / `ClassRegistry`: catálogo de clases y sus extensiones.
pub mod class_id;
pub mod error;
pub mod files;
pub mod naming;
pub mod node;
pub mod node_file;

pub use class_id::{ClassId, ClassInfo, ClassRegistry};
pub use error::DomainError;
pub use files::{BinFile, TextFile};
pub use node::{BodyCompression, GbxFormat, HeaderChunk, Node};
pub use node_file::NodeFile;
