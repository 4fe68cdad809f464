//! Artefactos no estructurados: texto decodificado y bytes opacos.

/// Texto crudo leído de un archivo de entrada (UTF-8 sin bytes NUL).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextFile {
    text: String,
}

impl TextFile {
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn into_text(self) -> String {
        self.text
    }
}

impl From<TextFile> for String {
    fn from(file: TextFile) -> Self {
        file.text
    }
}

/// Bytes de un archivo que no pudo decodificarse como nodo.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BinFile {
    data: Vec<u8>,
}

impl BinFile {
    pub fn new(data: Vec<u8>) -> Self {
        Self { data }
    }

    pub fn data(&self) -> &[u8] {
        &self.data
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }
}

impl From<BinFile> for Vec<u8> {
    fn from(file: BinFile) -> Self {
        file.data
    }
}
