//! Herramientas de ejemplo.

pub mod copy_map;
pub mod ghost_bundle;

pub use copy_map::{CopyMapConfig, CopyMapTool};
pub use ghost_bundle::{BundleConfig, GhostBundleTool, NamingConfig};
