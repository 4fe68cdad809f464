//! Utilidades de nombres: rutas de herramientas y nombres de archivo válidos.

/// Convierte `PascalCase` o texto con espacios a `kebab-case`.
///
/// `"GhostBundle"` → `ghost-bundle`, `"Copy Map"` → `copy-map`,
/// `"Map2Gbx"` → `map-2-gbx`.
pub fn to_kebab_case(input: &str) -> String {
    let chars: Vec<char> = input.trim().chars().collect();
    let mut out = String::with_capacity(chars.len() + 4);
    for (i, &c) in chars.iter().enumerate() {
        if c.is_whitespace() || c == '_' || c == '-' {
            if !out.is_empty() && !out.ends_with('-') {
                out.push('-');
            }
            continue;
        }
        if i > 0 && !out.ends_with('-') {
            let prev = chars[i - 1];
            let next_is_lower = chars.get(i + 1).is_some_and(|n| n.is_lowercase());
            let starts_word = c.is_uppercase() && next_is_lower;
            let after_lower = prev.is_lowercase() && (c.is_uppercase() || c.is_ascii_digit());
            if starts_word || after_lower {
                out.push('-');
            }
        }
        out.extend(c.to_lowercase());
    }
    out.trim_end_matches('-').to_string()
}

/// Reemplaza por `_` los caracteres no permitidos en nombres de archivo.
pub fn sanitize_file_name(name: &str) -> String {
    name.chars()
        .map(|c| match c {
            '<' | '>' | ':' | '"' | '/' | '\\' | '|' | '?' | '*' => '_',
            c if c.is_control() => '_',
            c => c,
        })
        .collect()
}

/// Reemplaza por `_` los caracteres fuera del rango U+0000..U+00FF.
pub fn to_extended_ascii(input: &str) -> String {
    input.chars().map(|c| if (c as u32) <= 0xFF { c } else { '_' }).collect()
}
