use serde::{Deserialize, Serialize};

/// One aggregate row: a dimension label and its download total
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChartRecord {
    pub label: String,
    pub total: u64,
}

impl ChartRecord {
    pub fn new(label: impl Into<String>, total: u64) -> Self {
        Self {
            label: label.into(),
            total,
        }
    }
}

/// Records in the order the upstream returned them
pub type ChartResult = Vec<ChartRecord>;
