use serde::{Deserialize, Serialize};

use crate::utils::format::format_archive_timestamp;

/// One property's queue position over time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ArchiveSeries {
    pub name: String,
    #[serde(default)]
    pub color: Option<String>,
    /// Position at each category; `None` where the property was not listed
    pub data: Vec<Option<u32>>,
}

/// Queue history from `/archive`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Archive {
    /// Snapshot times as Unix seconds
    pub categories: Vec<i64>,
    pub series: Vec<ArchiveSeries>,
}

impl Archive {
    /// X axis labels for the snapshot times, in display time.
    pub fn category_labels(&self) -> Vec<String> {
        self.categories
            .iter()
            .map(|&secs| format_archive_timestamp(secs).unwrap_or_else(|| secs.to_string()))
            .collect()
    }

    pub fn is_empty(&self) -> bool {
        self.series.is_empty()
    }
}
