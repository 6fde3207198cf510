use crate::domain::model::RangeSpec;
use crate::utils::error::Result;

pub trait Storage: Send + Sync {
    fn read_file(&self, path: &str) -> Result<Vec<u8>>;
    /// Creates or truncates `path`; the parent directory must already exist.
    fn write_file(&self, path: &str, data: &[u8]) -> Result<()>;
}

pub trait ConfigProvider: Send + Sync {
    fn range(&self) -> RangeSpec;
    fn output_path(&self) -> &str;
}
