//! Carga de directorios de trabajo desde variables de entorno.
//! Convención `TOOLFLOW_*`; cada variable es opcional.

use std::env;
use std::path::PathBuf;

use dotenvy::dotenv;
use once_cell::sync::Lazy;

// Carga perezosa del archivo .env una sola vez.
static DOTENV_LOADED: Lazy<()> = Lazy::new(|| {
    let _ = dotenv(); // ignora error si no existe .env
});

pub const CONFIG_DIR_VAR: &str = "TOOLFLOW_CONFIG_DIR";
pub const ASSETS_DIR_VAR: &str = "TOOLFLOW_ASSETS_DIR";
pub const OUTPUT_DIR_VAR: &str = "TOOLFLOW_OUTPUT_DIR";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StorageConfig {
    pub config_dir: PathBuf,
    pub assets_dir: PathBuf,
    pub output_dir: PathBuf,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self { config_dir: PathBuf::from("Config"),
               assets_dir: PathBuf::from("Assets"),
               output_dir: PathBuf::from("Output") }
    }
}

impl StorageConfig {
    pub fn from_env() -> Self {
        // asegura que .env se haya cargado
        Lazy::force(&DOTENV_LOADED);
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Igual que `from_env` pero con una función de búsqueda arbitraria.
    pub fn from_lookup<F>(lookup: F) -> Self
        where F: Fn(&str) -> Option<String>
    {
        let defaults = Self::default();
        let dir = |key: &str, default: PathBuf| lookup(key).filter(|v| !v.trim().is_empty()).map(PathBuf::from).unwrap_or(default);
        Self { config_dir: dir(CONFIG_DIR_VAR, defaults.config_dir),
               assets_dir: dir(ASSETS_DIR_VAR, defaults.assets_dir),
               output_dir: dir(OUTPUT_DIR_VAR, defaults.output_dir) }
    }
}

/// Forzar carga temprana de .env desde aplicaciones externas si se desea.
pub fn init_dotenv() {
    Lazy::force(&DOTENV_LOADED);
}
