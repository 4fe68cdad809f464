//! Constantes del motor.
//!
//! Participan en la convención de nombres de salida y en la identidad de los
//! objetos de configuración persistidos.

/// Marcador de dominio añadido al final de todo nombre sintetizado.
pub const DOMAIN_MARKER: &str = "Gbx";

/// Formato del sello temporal de los nombres sintetizados.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d_%H-%M-%S";

/// Nombre de configuración cuando el usuario no elige uno.
pub const DEFAULT_CONFIG_NAME: &str = "Default";

/// Prefijo de los overrides de campo de configuración en la línea de
/// comandos (`-c:<campo>` o `-c:<Tipo>:<campo>`).
pub const OVERRIDE_PREFIX: &str = "-c:";
