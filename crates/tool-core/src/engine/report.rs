use std::path::PathBuf;
use std::time::Duration;

/// Una invocación de capacidad de producción dentro de la ejecución.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProductionRecord {
    pub instance: usize,
    pub capability: &'static str,
    pub label: String,
    pub shape: &'static str,
    pub elapsed: Duration,
    pub written: Vec<PathBuf>,
}

/// Resumen de una ejecución para observabilidad del llamador.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunReport {
    pub tool: String,
    pub signature: usize,
    pub instances: usize,
    pub productions: Vec<ProductionRecord>,
}

impl RunReport {
    /// Todas las rutas escritas, en orden.
    pub fn written(&self) -> impl Iterator<Item = &PathBuf> {
        self.productions.iter().flat_map(|p| p.written.iter())
    }

    pub fn total_elapsed(&self) -> Duration {
        self.productions.iter().map(|p| p.elapsed).sum()
    }
}
