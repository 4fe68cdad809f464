//! Macro para declarar configuraciones de herramientas sin boilerplate.
//!
//! Exportada en la raíz del crate:
//!   use tool_core::tool_config;

/// Declara una configuración con valores por defecto y su esquema de campos.
///
/// ```ignore
/// tool_config!(CopyMapConfig {
///     prefix: String = "Copy of ".to_string(),
///     keep_original_name: bool = true,
/// });
/// ```
///
/// Genera la struct (serde con `#[serde(default)]`), `Default` con los
/// valores dados e `impl ToolConfig` con `TYPE_NAME = "CopyMapConfig"`.
#[macro_export]
macro_rules! tool_config {
    ($(#[$meta:meta])* $name:ident { $($fname:ident : $fty:ty = $default:expr),+ $(,)? }) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
        #[serde(default)]
        pub struct $name { $(pub $fname: $fty,)+ }

        impl Default for $name {
            fn default() -> Self {
                Self { $($fname: $default,)+ }
            }
        }

        impl $crate::injection::ToolConfig for $name {
            const TYPE_NAME: &'static str = stringify!($name);

            fn fields() -> &'static [$crate::injection::FieldSpec] {
                const FIELDS: &[$crate::injection::FieldSpec] =
                    &[$($crate::injection::FieldSpec::of::<$fty>(stringify!($fname))),+];
                FIELDS
            }

            fn set_field(&mut self, field: &str, raw: &str) -> Result<(), $crate::injection::FieldError> {
                $(
                    if field == stringify!($fname) {
                        self.$fname = <$fty as $crate::injection::FieldValue>::parse_literal(raw)
                            .map_err($crate::injection::FieldError::Invalid)?;
                        return Ok(());
                    }
                )+
                Err($crate::injection::FieldError::Unknown)
            }
        }
    };
}
