//! Convención de nombres sintetizados:
//! `{yyyy-MM-dd_HH-mm-ss}_{uuid}.{ext}.Gbx`, o `{stamp}_{uuid}.Gbx` cuando la
//! clase no tiene extensión registrada.
use std::fmt;
use std::sync::Arc;

use chrono::{DateTime, Local};
use uuid::Uuid;

use crate::constants::{DOMAIN_MARKER, TIMESTAMP_FORMAT};

type Clock = Arc<dyn Fn() -> DateTime<Local> + Send + Sync>;
type IdSource = Arc<dyn Fn() -> Uuid + Send + Sync>;

#[derive(Clone)]
pub struct FileNamer {
    clock: Clock,
    ids: IdSource,
}

impl FileNamer {
    /// Reloj local y UUID v4.
    pub fn new() -> Self {
        Self { clock: Arc::new(Local::now),
               ids: Arc::new(Uuid::new_v4) }
    }

    /// Reloj fijo, útil en tests; los identificadores siguen siendo únicos.
    pub fn with_clock(now: DateTime<Local>) -> Self {
        Self { clock: Arc::new(move || now),
               ..Self::new() }
    }

    pub fn synthesize(&self, extension: Option<&str>) -> String {
        let stamp = (self.clock)().format(TIMESTAMP_FORMAT);
        let id = (self.ids)();
        match extension {
            Some(ext) => format!("{stamp}_{id}.{ext}.{DOMAIN_MARKER}"),
            None => format!("{stamp}_{id}.{DOMAIN_MARKER}"),
        }
    }
}

impl Default for FileNamer {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for FileNamer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FileNamer").finish_non_exhaustive()
    }
}

/// Último componente de un nombre con `/` o `\`; `None` si queda vacío o
/// si es `.` o `..`.
pub fn base_name(name: &str) -> Option<&str> {
    name.rsplit(['/', '\\']).next().map(str::trim).filter(|s| !matches!(*s, "" | "." | ".."))
}
