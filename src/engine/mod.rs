pub mod lopdf_backend;
pub mod types;

use crate::{error::Result, page_range::PageRange};
use std::path::Path;

pub use lopdf_backend::LopdfEngine;
pub use types::{PageText, SplitChunk};

pub trait Engine {
    /// Extracted text of every page, in document order.
    fn page_texts(&self, input: &Path) -> Result<Vec<PageText>>;
    fn split_pdf(&self, input: &Path, range: PageRange, output: &Path) -> Result<SplitChunk>;
}
