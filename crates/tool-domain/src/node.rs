//! Nodo GBX estructurado.
//!
//! Sólo se decodifica la cabecera (magic, versión, formato, clase y tabla de
//! chunks de cabecera en v6). El cuerpo se conserva tal cual: guardar un nodo
//! escribe de vuelta los bytes originales.
//!
//! Layout de cabecera soportado:
//! ```text
//! "GBX" u16:version  (v>=3) u8:format u8:ref_compr u8:body_compr  (v>=4) u8:'R'|'E'
//! (v>=3) u32:class_id
//! (v>=6) u32:user_data_size [u32:num_chunks {u32:id u32:size}* data]
//! ```
use std::sync::Arc;

use crate::class_id::ClassId;
use crate::error::DomainError;

const MAGIC: &[u8; 3] = b"GBX";
const HEAVY_FLAG: u32 = 0x8000_0000;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GbxFormat {
    Binary,
    Text,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BodyCompression {
    Compressed,
    Uncompressed,
}

/// Entrada de la tabla de chunks de cabecera.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HeaderChunk {
    pub id: u32,
    pub size: u32,
    pub heavy: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Node {
    class: ClassId,
    version: u16,
    format: GbxFormat,
    body_compression: BodyCompression,
    header_chunks: Vec<HeaderChunk>,
    bytes: Arc<[u8]>,
    origin: Option<String>,
}

impl Node {
    /// Decodifica la cabecera de un archivo GBX completo.
    pub fn decode(bytes: &[u8]) -> Result<Self, DomainError> {
        let mut r = HeaderReader { bytes, pos: 0 };
        if r.take(3)? != MAGIC {
            return Err(DomainError::NotGbx);
        }
        let version = r.u16()?;
        if !(3..=6).contains(&version) {
            return Err(DomainError::UnsupportedVersion(version));
        }
        let format = match r.u8()? {
            b'B' => GbxFormat::Binary,
            b'T' => GbxFormat::Text,
            other => return Err(DomainError::InvalidHeader(format!("format byte {other:#04x}"))),
        };
        let _ref_table = compression(r.u8()?)?;
        let body_compression = compression(r.u8()?)?;
        if version >= 4 {
            match r.u8()? {
                b'R' | b'E' => {}
                other => return Err(DomainError::InvalidHeader(format!("unknown byte {other:#04x}"))),
            }
        }
        let class = ClassId(r.u32()?).remap();

        let mut header_chunks = Vec::new();
        if version >= 6 {
            let user_data_size = r.u32()? as usize;
            if user_data_size > 0 {
                let start = r.pos;
                let count = r.u32()?;
                let mut data_len = 0usize;
                for _ in 0..count {
                    let id = r.u32()?;
                    let raw = r.u32()?;
                    let size = raw & !HEAVY_FLAG;
                    data_len += size as usize;
                    header_chunks.push(HeaderChunk { id,
                                                     size,
                                                     heavy: raw & HEAVY_FLAG != 0 });
                }
                r.take(data_len)?;
                if r.pos - start != user_data_size {
                    return Err(DomainError::InvalidHeader(format!("user data size {user_data_size} does not match chunk table ({})",
                                                                  r.pos - start)));
                }
            }
        }

        Ok(Self { class,
                  version,
                  format,
                  body_compression,
                  header_chunks,
                  bytes: Arc::from(bytes),
                  origin: None })
    }

    /// Construye un nodo v6 binario sin comprimir. Útil para herramientas
    /// que generan nodos nuevos y para fixtures de tests.
    pub fn build(class: ClassId, header_chunks: &[(u32, Vec<u8>)], body: &[u8]) -> Self {
        let mut out = Vec::with_capacity(32 + body.len());
        out.extend_from_slice(MAGIC);
        out.extend_from_slice(&6u16.to_le_bytes());
        out.extend_from_slice(b"BUUR");
        out.extend_from_slice(&class.0.to_le_bytes());
        if header_chunks.is_empty() {
            out.extend_from_slice(&0u32.to_le_bytes());
        } else {
            let data_len: usize = header_chunks.iter().map(|(_, d)| d.len()).sum();
            let user_data_size = 4 + 8 * header_chunks.len() + data_len;
            out.extend_from_slice(&(user_data_size as u32).to_le_bytes());
            out.extend_from_slice(&(header_chunks.len() as u32).to_le_bytes());
            for (id, data) in header_chunks {
                out.extend_from_slice(&id.to_le_bytes());
                out.extend_from_slice(&(data.len() as u32).to_le_bytes());
            }
            for (_, data) in header_chunks {
                out.extend_from_slice(data);
            }
        }
        // num_nodes + tabla de referencias vacía
        out.extend_from_slice(&1u32.to_le_bytes());
        out.extend_from_slice(&0u32.to_le_bytes());
        out.extend_from_slice(body);

        let chunks = header_chunks.iter()
                                  .map(|(id, data)| HeaderChunk { id: *id,
                                                                  size: data.len() as u32,
                                                                  heavy: false })
                                  .collect();
        Self { class,
               version: 6,
               format: GbxFormat::Binary,
               body_compression: BodyCompression::Uncompressed,
               header_chunks: chunks,
               bytes: Arc::from(out),
               origin: None }
    }

    /// Anota el nombre del archivo del que se cargó el nodo.
    pub fn with_origin(mut self, origin: Option<&str>) -> Self {
        self.origin = origin.map(str::to_owned);
        self
    }

    pub fn class(&self) -> ClassId {
        self.class
    }

    pub fn version(&self) -> u16 {
        self.version
    }

    pub fn format(&self) -> GbxFormat {
        self.format
    }

    pub fn body_compression(&self) -> BodyCompression {
        self.body_compression
    }

    pub fn header_chunks(&self) -> &[HeaderChunk] {
        &self.header_chunks
    }

    pub fn bytes(&self) -> &[u8] {
        &self.bytes
    }

    pub fn origin(&self) -> Option<&str> {
        self.origin.as_deref()
    }

    /// Nombre de origen sin directorios ni extensiones (`A.Map.Gbx` → `A`).
    pub fn origin_stem(&self) -> Option<&str> {
        let name = self.origin()?.rsplit(['/', '\\']).next()?;
        name.split('.').next().filter(|s| !s.is_empty())
    }
}

fn compression(byte: u8) -> Result<BodyCompression, DomainError> {
    match byte {
        b'C' => Ok(BodyCompression::Compressed),
        b'U' => Ok(BodyCompression::Uncompressed),
        other => Err(DomainError::InvalidHeader(format!("compression byte {other:#04x}"))),
    }
}

struct HeaderReader<'a> {
    bytes: &'a [u8],
    pos: usize,
}

impl<'a> HeaderReader<'a> {
    fn take(&mut self, n: usize) -> Result<&'a [u8], DomainError> {
        let end = self.pos.checked_add(n).filter(|end| *end <= self.bytes.len());
        match end {
            Some(end) => {
                let slice = &self.bytes[self.pos..end];
                self.pos = end;
                Ok(slice)
            }
            None => Err(DomainError::Truncated { needed: n,
                                                 offset: self.pos }),
        }
    }

    fn u8(&mut self) -> Result<u8, DomainError> {
        Ok(self.take(1)?[0])
    }

    fn u16(&mut self) -> Result<u16, DomainError> {
        let b = self.take(2)?;
        Ok(u16::from_le_bytes([b[0], b[1]]))
    }

    fn u32(&mut self) -> Result<u32, DomainError> {
        let b = self.take(4)?;
        Ok(u32::from_le_bytes([b[0], b[1], b[2], b[3]]))
    }
}
