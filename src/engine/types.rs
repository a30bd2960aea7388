use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PageText {
    pub page_number: u32,
    pub text: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SplitChunk {
    pub start_page: u32,
    pub end_page: u32,
    pub source_page_count: u32,
    pub written_pages: u32,
    pub path: String,
}
