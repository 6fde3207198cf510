use serde::{Deserialize, Serialize};

pub const DEFAULT_LOWER: f64 = 0.0;
pub const DEFAULT_UPPER: f64 = 1.0;
pub const DEFAULT_STEP: f64 = 0.005;
pub const DEFAULT_OUTPUT_PATH: &str = "dropdownOptions.json";

/// 生成序列所需的三個參數：下界、上界與步長。
///
/// 數值不做任何驗證；非正步長或 `upper < lower` 只會產生退化的結果。
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RangeSpec {
    pub lower: f64,
    pub upper: f64,
    pub step: f64,
}

impl RangeSpec {
    pub fn new(lower: f64, upper: f64, step: f64) -> Self {
        Self { lower, upper, step }
    }

    pub fn generate(&self) -> Sequence {
        Sequence::from(crate::core::generator::generate(
            self.lower, self.upper, self.step,
        ))
    }

    pub fn element_count(&self) -> usize {
        crate::core::generator::element_count(self.lower, self.upper, self.step)
    }
}

impl Default for RangeSpec {
    fn default() -> Self {
        Self::new(DEFAULT_LOWER, DEFAULT_UPPER, DEFAULT_STEP)
    }
}

/// An ordered list of generated values, serialized as a bare JSON array.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Sequence {
    values: Vec<f64>,
}

impl Sequence {
    pub fn values(&self) -> &[f64] {
        &self.values
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn first(&self) -> Option<f64> {
        self.values.first().copied()
    }

    pub fn last(&self) -> Option<f64> {
        self.values.last().copied()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, f64> {
        self.values.iter()
    }

    pub fn into_vec(self) -> Vec<f64> {
        self.values
    }

    /// 控制台輸出用的原生列表格式，例如 `[0.0, 0.005, 0.01]`
    pub fn to_console_string(&self) -> String {
        format!("{:?}", self.values)
    }
}

impl From<Vec<f64>> for Sequence {
    fn from(values: Vec<f64>) -> Self {
        Self { values }
    }
}

impl<'a> IntoIterator for &'a Sequence {
    type Item = &'a f64;
    type IntoIter = std::slice::Iter<'a, f64>;

    fn into_iter(self) -> Self::IntoIter {
        self.values.iter()
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct RunSummary {
    pub output_path: String,
    pub count: usize,
    pub first: Option<f64>,
    pub last: Option<f64>,
    pub bytes_written: usize,
}
