use crate::{
    engine::Engine,
    error::{Error, Result},
    page_range::PageRange,
    report::SplitOutcome,
    util::{ensure_parent, hash_file},
};
use std::path::Path;
use tracing::info;

/// Writes pages `range` of `input` to `output`, replacing any existing file.
pub fn split_pdf(
    engine: &dyn Engine,
    input: &Path,
    range: PageRange,
    output: &Path,
) -> Result<SplitOutcome> {
    if same_file(input, output) {
        return Err(Error::OutputIsInput(output.to_path_buf()));
    }
    ensure_parent(output)?;

    let chunk = engine.split_pdf(input, range, output)?;
    let (output_bytes, output_sha256) = hash_file(output)?;

    info!(
        "split {} pages {} of {} -> {} ({} pages, {} bytes)",
        input.display(),
        range,
        chunk.source_page_count,
        output.display(),
        chunk.written_pages,
        output_bytes
    );

    Ok(SplitOutcome {
        input: input.display().to_string(),
        output: chunk.path,
        range,
        source_page_count: chunk.source_page_count,
        written_pages: chunk.written_pages,
        output_bytes,
        output_sha256,
    })
}

fn same_file(a: &Path, b: &Path) -> bool {
    match (std::fs::canonicalize(a), std::fs::canonicalize(b)) {
        (Ok(a), Ok(b)) => a == b,
        _ => a == b,
    }
}
