use crate::{engine::Engine, error::Result};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{debug, info};

/// Extracted text of a book's index, loaded once and passed to the classifier.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IndexText {
    pub source: String,
    pub page_count: u32,
    pub text: String,
}

impl IndexText {
    /// Wraps an already-extracted string, e.g. a fixture in tests.
    pub fn from_text(text: impl Into<String>) -> Self {
        Self {
            source: String::new(),
            page_count: 0,
            text: text.into(),
        }
    }

    pub fn as_str(&self) -> &str {
        &self.text
    }
}

pub fn load_index(engine: &dyn Engine, path: &Path) -> Result<IndexText> {
    let pages = engine.page_texts(path)?;

    let mut text = String::new();
    for page in &pages {
        debug!("index page {} chars={}", page.page_number, page.text.len());
        text.push_str(&page.text);
        text.push('\n');
    }
    let text = text.trim().to_string();

    info!(
        "index {} pages={} chars={}",
        path.display(),
        pages.len(),
        text.chars().count()
    );

    Ok(IndexText {
        source: path.display().to_string(),
        page_count: pages.len() as u32,
        text,
    })
}
