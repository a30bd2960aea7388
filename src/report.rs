use crate::{index::IndexText, page_range::PageRange};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SplitOutcome {
    pub input: String,
    pub output: String,
    pub range: PageRange,
    pub source_page_count: u32,
    pub written_pages: u32,
    pub output_bytes: u64,
    pub output_sha256: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IndexSummary {
    pub source: String,
    pub page_count: u32,
    pub chars: usize,
    pub lines: usize,
}

impl From<&IndexText> for IndexSummary {
    fn from(index: &IndexText) -> Self {
        Self {
            source: index.source.clone(),
            page_count: index.page_count,
            chars: index.text.chars().count(),
            lines: index.text.lines().count(),
        }
    }
}
