use std::fmt;

/// Tipo de un campo de configuración sobreescribible.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    String,
    OptionalString,
    Bool,
    Integer,
    Float,
}

impl fmt::Display for FieldKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            FieldKind::String => "string",
            FieldKind::OptionalString => "optional string",
            FieldKind::Bool => "bool",
            FieldKind::Integer => "integer",
            FieldKind::Float => "float",
        };
        f.write_str(name)
    }
}

/// Campo de un esquema: nombre, tipo y validador del literal con el tipo
/// exacto del campo (`u8` rechaza `300` igual que el setter).
#[derive(Debug, Clone, Copy)]
pub struct FieldSpec {
    pub name: &'static str,
    pub kind: FieldKind,
    pub validate: fn(&str) -> Result<(), String>,
}

impl FieldSpec {
    pub const fn of<T: FieldValue>(name: &'static str) -> Self {
        Self { name,
               kind: T::KIND,
               validate: validate_as::<T> }
    }

    pub fn check(&self, raw: &str) -> Result<(), String> {
        (self.validate)(raw)
    }
}

fn validate_as<T: FieldValue>(raw: &str) -> Result<(), String> {
    T::parse_literal(raw).map(drop)
}

/// Fallo de un setter tipado.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldError {
    Unknown,
    Invalid(String),
}

/// Valor que puede asignarse a un campo desde un literal de texto.
pub trait FieldValue: Sized {
    const KIND: FieldKind;

    fn parse_literal(raw: &str) -> Result<Self, String>;
}

impl FieldValue for String {
    const KIND: FieldKind = FieldKind::String;

    fn parse_literal(raw: &str) -> Result<Self, String> {
        Ok(raw.to_string())
    }
}

/// Un literal vacío borra el valor.
impl FieldValue for Option<String> {
    const KIND: FieldKind = FieldKind::OptionalString;

    fn parse_literal(raw: &str) -> Result<Self, String> {
        Ok(Some(raw).filter(|s| !s.is_empty()).map(str::to_string))
    }
}

impl FieldValue for bool {
    const KIND: FieldKind = FieldKind::Bool;

    fn parse_literal(raw: &str) -> Result<Self, String> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "true" | "1" | "yes" => Ok(true),
            "false" | "0" | "no" => Ok(false),
            other => Err(format!("'{other}' is not a boolean")),
        }
    }
}

macro_rules! numeric_field {
    ($kind:expr => $($ty:ty),+) => {
        $(impl FieldValue for $ty {
            const KIND: FieldKind = $kind;

            fn parse_literal(raw: &str) -> Result<Self, String> {
                raw.trim().parse::<$ty>().map_err(|e| format!("{e} (expected {})", stringify!($ty)))
            }
        })+
    };
}

numeric_field!(FieldKind::Integer => i32, i64, u8, u16, u32, u64, usize);
numeric_field!(FieldKind::Float => f32, f64);
