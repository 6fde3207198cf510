pub mod engine;
pub mod generator;
pub mod writer;

pub use crate::domain::model::{RangeSpec, RunSummary, Sequence};
pub use crate::domain::ports::{ConfigProvider, Storage};
pub use crate::utils::error::Result;
