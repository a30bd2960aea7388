#![allow(dead_code)]

use lopdf::content::{Content, Operation};
use lopdf::{dictionary, Document, Object, Stream};
use std::path::{Path, PathBuf};

pub fn marker(page: u32) -> String {
    format!("Marker{page:04}")
}

pub fn markers(pages: u32) -> Vec<String> {
    (1..=pages).map(marker).collect()
}

/// One page per entry, each page drawing its entry as a single text run.
pub fn make_pdf(page_texts: &[String]) -> Document {
    let mut doc = Document::with_version("1.5");
    let pages_id = doc.new_object_id();
    let font_id = doc.add_object(dictionary! {
        "Type" => "Font",
        "Subtype" => "Type1",
        "BaseFont" => "Courier",
    });
    let resources_id = doc.add_object(dictionary! {
        "Font" => dictionary! {
            "F1" => font_id,
        },
    });

    let mut kids: Vec<Object> = Vec::new();
    for text in page_texts {
        let content = Content {
            operations: vec![
                Operation::new("BT", vec![]),
                Operation::new("Tf", vec!["F1".into(), 24.into()]),
                Operation::new("Td", vec![72.into(), 720.into()]),
                Operation::new("Tj", vec![Object::string_literal(text.as_str())]),
                Operation::new("ET", vec![]),
            ],
        };
        let content_id = doc.add_object(Stream::new(
            dictionary! {},
            content.encode().expect("encode content"),
        ));
        let page_id = doc.add_object(dictionary! {
            "Type" => "Page",
            "Parent" => pages_id,
            "Contents" => content_id,
            "Resources" => resources_id,
            "MediaBox" => vec![0.into(), 0.into(), 612.into(), 792.into()],
        });
        kids.push(page_id.into());
    }

    let count = kids.len() as i64;
    doc.objects.insert(
        pages_id,
        Object::Dictionary(dictionary! {
            "Type" => "Pages",
            "Kids" => kids,
            "Count" => count,
        }),
    );
    let catalog_id = doc.add_object(dictionary! {
        "Type" => "Catalog",
        "Pages" => pages_id,
    });
    doc.trailer.set("Root", catalog_id);
    doc
}

pub fn write_pdf(dir: &Path, name: &str, page_texts: &[String]) -> PathBuf {
    let path = dir.join(name);
    let mut doc = make_pdf(page_texts);
    doc.save(&path).expect("save fixture pdf");
    path
}

/// Text of every page of the PDF at `path`, extracted directly with lopdf.
pub fn page_texts(path: &Path) -> Vec<String> {
    let doc = Document::load(path).expect("load pdf");
    doc.get_pages()
        .keys()
        .map(|&n| doc.extract_text(&[n]).expect("extract text"))
        .collect()
}

/// Like `make_pdf`, but pages sit under intermediate `Pages` nodes of
/// `fanout` kids each and inherit `Resources`, `MediaBox` and `Rotate` from
/// the root node.
pub fn make_nested_pdf(page_texts: &[String], fanout: usize) -> Document {
    let mut doc = Document::with_version("1.5");
    let root_id = doc.new_object_id();
    let font_id = doc.add_object(dictionary! {
        "Type" => "Font",
        "Subtype" => "Type1",
        "BaseFont" => "Courier",
    });

    let mut branches: Vec<Object> = Vec::new();
    for group in page_texts.chunks(fanout.max(1)) {
        let branch_id = doc.new_object_id();
        let mut kids: Vec<Object> = Vec::new();
        for text in group {
            let content = Content {
                operations: vec![
                    Operation::new("BT", vec![]),
                    Operation::new("Tf", vec!["F1".into(), 24.into()]),
                    Operation::new("Td", vec![72.into(), 720.into()]),
                    Operation::new("Tj", vec![Object::string_literal(text.as_str())]),
                    Operation::new("ET", vec![]),
                ],
            };
            let content_id = doc.add_object(Stream::new(
                dictionary! {},
                content.encode().expect("encode content"),
            ));
            let page_id = doc.add_object(dictionary! {
                "Type" => "Page",
                "Parent" => branch_id,
                "Contents" => content_id,
            });
            kids.push(page_id.into());
        }
        let count = kids.len() as i64;
        doc.objects.insert(
            branch_id,
            Object::Dictionary(dictionary! {
                "Type" => "Pages",
                "Parent" => root_id,
                "Kids" => kids,
                "Count" => count,
            }),
        );
        branches.push(branch_id.into());
    }

    doc.objects.insert(
        root_id,
        Object::Dictionary(dictionary! {
            "Type" => "Pages",
            "Kids" => branches,
            "Count" => page_texts.len() as i64,
            "Resources" => dictionary! {
                "Font" => dictionary! {
                    "F1" => font_id,
                },
            },
            "MediaBox" => vec![0.into(), 0.into(), 612.into(), 792.into()],
            "Rotate" => 90,
        }),
    );
    let catalog_id = doc.add_object(dictionary! {
        "Type" => "Catalog",
        "Pages" => root_id,
    });
    doc.trailer.set("Root", catalog_id);
    doc
}

pub fn write_nested_pdf(dir: &Path, name: &str, page_texts: &[String], fanout: usize) -> PathBuf {
    let path = dir.join(name);
    let mut doc = make_nested_pdf(page_texts, fanout);
    doc.save(&path).expect("save fixture pdf");
    path
}
