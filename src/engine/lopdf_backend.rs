use super::{types::*, Engine};
use crate::{
    error::{Error, Result},
    page_range::PageRange,
};
use lopdf::{Document, Object, ObjectId};
use std::path::Path;
use tracing::debug;

/// Page attributes a page may inherit from its ancestors in the page tree.
const INHERITABLE: [&[u8]; 4] = [b"Resources", b"MediaBox", b"CropBox", b"Rotate"];

/// Catalog entries that point at pages of the source document.
const PAGE_BOUND_CATALOG_KEYS: [&[u8]; 3] = [b"Outlines", b"Dests", b"PageLabels"];

const MAX_TREE_DEPTH: usize = 64;

/// In-process PDF backend built on `lopdf`.
#[derive(Debug, Default, Clone, Copy)]
pub struct LopdfEngine;

impl LopdfEngine {
    pub fn new() -> Self {
        Self
    }

    fn load(&self, input: &Path) -> Result<Document> {
        let bytes = std::fs::read(input).map_err(|e| Error::file_access(input, e))?;
        debug!("loaded {} ({} bytes)", input.display(), bytes.len());
        Document::load_mem(&bytes).map_err(|e| Error::decode(input, e))
    }
}

impl Engine for LopdfEngine {
    fn page_texts(&self, input: &Path) -> Result<Vec<PageText>> {
        let doc = self.load(input)?;
        doc.get_pages()
            .keys()
            .map(|&page_number| {
                doc.extract_text(&[page_number])
                    .map(|text| PageText { page_number, text })
                    .map_err(|e| Error::decode(input, e))
            })
            .collect()
    }

    fn split_pdf(&self, input: &Path, range: PageRange, output: &Path) -> Result<SplitChunk> {
        let mut doc = self.load(input)?;
        let pages = doc.get_pages();
        let source_page_count = pages.len() as u32;
        range.validate(source_page_count)?;

        let keep = range.to_zero_based();
        let kept: Vec<ObjectId> = pages
            .values()
            .enumerate()
            .filter(|(idx, _)| keep.contains(idx))
            .map(|(_, &id)| id)
            .collect();
        debug!(
            "split {} keep={:?} ({} of {} pages)",
            input.display(),
            keep,
            kept.len(),
            source_page_count
        );

        flatten_page_tree(&mut doc, &kept).map_err(|e| Error::decode(input, e))?;
        doc.prune_objects();
        doc.renumber_objects();
        let written_pages = doc.get_pages().len() as u32;

        let mut buf = Vec::new();
        doc.save_to(&mut buf).map_err(|e| Error::encode(output, e))?;
        std::fs::write(output, &buf).map_err(|e| Error::file_access(output, e))?;

        Ok(SplitChunk {
            start_page: range.start_page,
            end_page: range.end_page,
            source_page_count,
            written_pages,
            path: output.display().to_string(),
        })
    }
}

/// Rewrites the root `Pages` node so its only kids are `kept`, in order.
///
/// Inherited attributes are copied onto each kept page first, since the
/// intermediate nodes they came from become unreachable. Everything else is
/// left for `prune_objects`.
fn flatten_page_tree(doc: &mut Document, kept: &[ObjectId]) -> lopdf::Result<()> {
    let catalog_id = doc.trailer.get(b"Root").and_then(Object::as_reference)?;
    let root_pages_id = doc
        .get_dictionary(catalog_id)
        .and_then(|catalog| catalog.get(b"Pages"))
        .and_then(Object::as_reference)?;

    let mut patches = Vec::with_capacity(kept.len());
    for &page_id in kept {
        let page = doc.get_dictionary(page_id)?;
        let mut attrs: Vec<(&[u8], Object)> = Vec::new();
        for key in INHERITABLE {
            if page.has(key) {
                continue;
            }
            if let Some(value) = inherited(doc, page_id, key) {
                attrs.push((key, value));
            }
        }
        patches.push((page_id, attrs));
    }

    for (page_id, attrs) in patches {
        let page = doc.get_object_mut(page_id).and_then(Object::as_dict_mut)?;
        for (key, value) in attrs {
            page.set(key, value);
        }
        page.set("Parent", root_pages_id);
    }

    let root = doc
        .get_object_mut(root_pages_id)
        .and_then(Object::as_dict_mut)?;
    root.set(
        "Kids",
        kept.iter().map(|&id| Object::Reference(id)).collect::<Vec<_>>(),
    );
    root.set("Count", kept.len() as i64);

    let catalog = doc.get_object_mut(catalog_id).and_then(Object::as_dict_mut)?;
    for key in PAGE_BOUND_CATALOG_KEYS {
        catalog.remove(key);
    }
    Ok(())
}

fn inherited(doc: &Document, page_id: ObjectId, key: &[u8]) -> Option<Object> {
    let mut node = doc.get_dictionary(page_id).ok()?;
    for _ in 0..MAX_TREE_DEPTH {
        if let Ok(value) = node.get(key) {
            return Some(value.clone());
        }
        let parent = node.get(b"Parent").and_then(Object::as_reference).ok()?;
        node = doc.get_dictionary(parent).ok()?;
    }
    None
}
