use std::path::Path;

use lopdf::{Document, EncryptionState, EncryptionVersion, Object, Permissions, StringFormat, dictionary};

/// Builds an unencrypted document with `page_count` pages and the given
/// document-information entries (an empty slice means no Info dictionary).
#[allow(dead_code)]
pub fn build_pdf(page_count: usize, info: &[(&str, &str)]) -> Document {
    let mut doc = Document::with_version("1.5");

    let pages_id = doc.new_object_id();
    let font_id = doc.add_object(dictionary! {
        "Type" => "Font",
        "Subtype" => "Type1",
        "BaseFont" => "Helvetica",
    });
    let resources_id = doc.add_object(dictionary! {
        "Font" => dictionary! { "F1" => font_id },
    });

    let mut kids: Vec<Object> = Vec::new();
    for _ in 0..page_count {
        let content = lopdf::Stream::new(
            dictionary! {},
            b"BT /F1 12 Tf 100 700 Td (Hello) Tj ET".to_vec(),
        );
        let content_id = doc.add_object(Object::Stream(content));
        let page_id = doc.add_object(dictionary! {
            "Type" => "Page",
            "Parent" => pages_id,
            "MediaBox" => vec![
                Object::Integer(0),
                Object::Integer(0),
                Object::Integer(612),
                Object::Integer(792),
            ],
            "Resources" => resources_id,
            "Contents" => content_id,
        });
        kids.push(page_id.into());
    }

    doc.objects.insert(
        pages_id,
        Object::Dictionary(dictionary! {
            "Type" => "Pages",
            "Kids" => kids,
            "Count" => page_count as i64,
        }),
    );

    let catalog_id = doc.add_object(dictionary! {
        "Type" => "Catalog",
        "Pages" => pages_id,
    });
    doc.trailer.set("Root", catalog_id);

    if !info.is_empty() {
        let mut dict = lopdf::Dictionary::new();
        for (key, value) in info {
            dict.set(*key, Object::string_literal(*value));
        }
        let info_id = doc.add_object(dict);
        doc.trailer.set("Info", info_id);
    }

    doc
}

/// Builds a one-page document encrypted with a non-empty user password, so
/// loading it cannot silently decrypt.
#[allow(dead_code)]
pub fn build_encrypted_pdf() -> Document {
    let mut doc = build_pdf(1, &[("Title", "Locked")]);

    // An ID entry in the trailer is required for encryption.
    doc.trailer.set(
        "ID",
        Object::Array(vec![
            Object::String(vec![1u8; 16], StringFormat::Literal),
            Object::String(vec![2u8; 16], StringFormat::Literal),
        ]),
    );

    let version = EncryptionVersion::V2 {
        document: &doc,
        owner_password: "owner",
        user_password: "secret",
        key_length: 128,
        permissions: Permissions::all(),
    };
    let state = EncryptionState::try_from(version).unwrap();
    doc.encrypt(&state).unwrap();
    doc
}

/// Saves `doc` as `name` in `dir` and returns the full path.
#[allow(dead_code)]
pub fn save_pdf(doc: &mut Document, dir: &Path, name: &str) -> std::path::PathBuf {
    let path = dir.join(name);
    doc.save(&path).unwrap();
    path
}
