use crate::domain::model::Sequence;
use crate::domain::ports::Storage;
use crate::utils::error::Result;
use serde::Serialize;
use std::io;

/// JSON formatter that separates array elements with `", "`.
///
/// Produces `[0.0, 0.005, 0.01]`, which is also how the sequence prints on the
/// console.
#[derive(Debug, Clone, Copy, Default)]
struct ListFormatter;

impl serde_json::ser::Formatter for ListFormatter {
    fn begin_array_value<W>(&mut self, writer: &mut W, first: bool) -> io::Result<()>
    where
        W: ?Sized + io::Write,
    {
        if first {
            Ok(())
        } else {
            writer.write_all(b", ")
        }
    }
}

pub struct OutputWriter<S: Storage> {
    storage: S,
}

impl<S: Storage> OutputWriter<S> {
    pub fn new(storage: S) -> Self {
        Self { storage }
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    /// 序列化為 JSON 陣列（無結尾換行）
    pub fn encode(sequence: &Sequence) -> Result<Vec<u8>> {
        let mut buffer = Vec::new();
        let mut serializer = serde_json::Serializer::with_formatter(&mut buffer, ListFormatter);
        sequence.serialize(&mut serializer)?;
        Ok(buffer)
    }

    pub fn decode(data: &[u8]) -> Result<Sequence> {
        Ok(serde_json::from_slice(data)?)
    }

    /// Overwrites `path` with the encoded sequence and returns the byte count.
    pub fn write(&self, sequence: &Sequence, path: &str) -> Result<usize> {
        let data = Self::encode(sequence)?;
        tracing::debug!("Writing {} bytes to {}", data.len(), path);
        self.storage.write_file(path, &data)?;
        Ok(data.len())
    }

    pub fn read(&self, path: &str) -> Result<Sequence> {
        let data = self.storage.read_file(path)?;
        Self::decode(&data)
    }
}
