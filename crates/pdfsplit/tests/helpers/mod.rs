//! Shared fixtures for pdfsplit integration tests.

#![allow(dead_code)]

use lopdf::{EncryptionState, EncryptionVersion, Object, Permissions, Stream, StringFormat, dictionary};
use std::path::{Path, PathBuf};

/// Build a minimal PDF whose page `i` shows `texts[i]` in Helvetica.
pub fn pdf_with_pages(texts: &[&str]) -> Vec<u8> {
    save(&mut build_document(texts))
}

/// Like [`pdf_with_pages`], encrypted (RC4, 128-bit) with `user_password`.
pub fn encrypted_pdf_with_pages(texts: &[&str], user_password: &str) -> Vec<u8> {
    let mut doc = build_document(texts);
    // Encryption keys are derived from the first trailer ID.
    doc.trailer.set(
        "ID",
        Object::Array(vec![
            Object::String((1u8..=16).collect(), StringFormat::Literal),
            Object::String((1u8..=16).rev().collect(), StringFormat::Literal),
        ]),
    );

    let version = EncryptionVersion::V2 {
        document: &doc,
        owner_password: "owner",
        user_password,
        key_length: 128,
        permissions: Permissions::all(),
    };
    let state = EncryptionState::try_from(version).expect("derive encryption state");
    doc.encrypt(&state).expect("encrypt fixture PDF");
    save(&mut doc)
}

fn build_document(texts: &[&str]) -> lopdf::Document {
    let mut doc = lopdf::Document::with_version("1.5");

    let font_id = doc.add_object(dictionary! {
        "Type" => "Font",
        "Subtype" => "Type1",
        "BaseFont" => "Helvetica",
    });

    let pages_id = doc.new_object_id();
    let mut kids = Vec::new();
    for text in texts {
        let content = format!("BT /F1 12 Tf 72 720 Td ({text}) Tj ET");
        let content_id = doc.add_object(Stream::new(dictionary! {}, content.into_bytes()));
        let page_id = doc.add_object(dictionary! {
            "Type" => "Page",
            "Parent" => pages_id,
            "MediaBox" => vec![0.into(), 0.into(), 612.into(), 792.into()],
            "Contents" => content_id,
            "Resources" => dictionary! {
                "Font" => dictionary! { "F1" => font_id },
            },
        });
        kids.push(Object::Reference(page_id));
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

fn save(doc: &mut lopdf::Document) -> Vec<u8> {
    let mut buf = Vec::new();
    doc.save_to(&mut buf).expect("serialize fixture PDF");
    buf
}

/// Write a fixture PDF named `file_name` into `dir` and return its path.
pub fn write_pdf(dir: &Path, file_name: &str, texts: &[&str]) -> PathBuf {
    let path = dir.join(file_name);
    std::fs::write(&path, pdf_with_pages(texts)).expect("write fixture PDF");
    path
}

/// Path of the text file for one page under `output_root`.
pub fn text_path(output_root: &Path, document: &str, page_index: usize) -> PathBuf {
    output_root
        .join(document)
        .join(page_index.to_string())
        .join("text_layer.txt")
}

/// Sorted page directory names written for `document`.
pub fn page_dirs(output_root: &Path, document: &str) -> Vec<usize> {
    let mut pages: Vec<usize> = std::fs::read_dir(output_root.join(document))
        .map(|entries| {
            entries
                .filter_map(|e| e.ok())
                .filter_map(|e| e.file_name().to_str().and_then(|n| n.parse().ok()))
                .collect()
        })
        .unwrap_or_default();
    pages.sort_unstable();
    pages
}
