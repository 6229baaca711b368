use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use log::debug;
use lopdf::{Dictionary, Document, Object};

use crate::error::{Error, Result};

/// Everything the report template needs, gathered in one pass over the
/// document. Constructed once per extraction and immutable afterwards.
#[derive(Debug, Clone)]
pub struct MetadataReport {
    /// Path to the source PDF, as given by the caller.
    pub file_path: PathBuf,
    /// Size of the source file in bytes at read time.
    pub file_size: u64,
    pub title: String,
    pub author: String,
    pub subject: String,
    pub creator: String,
    pub producer: String,
    /// Raw PDF date string (e.g. `D:20240501123000Z`), not normalized.
    pub creation_date: String,
    /// Raw PDF date string, not normalized.
    pub modification_date: String,
    pub page_count: usize,
    /// Always `false` on a successfully constructed report; encrypted
    /// documents abort extraction instead.
    pub encrypted: bool,
}

/// Case-insensitive `.pdf` suffix test. The TUI rejects other extensions
/// before opening the file; the CLI skips this check and lets the parser
/// fail instead.
pub fn has_pdf_extension(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("pdf"))
}

/// Opens `path` through lopdf and gathers the document-information fields,
/// page count and file size into a [`MetadataReport`].
///
/// Every information field is looked up independently under its fixed key;
/// a missing or undecodable value yields `sentinel` for that field only. A
/// document that reports itself encrypted aborts with [`Error::Encrypted`].
/// The source file is opened read-only and never modified.
pub fn extract(path: &Path, sentinel: &str) -> Result<MetadataReport> {
    let file_size = match fs::metadata(path) {
        Ok(meta) => meta.len(),
        Err(err) if err.kind() == io::ErrorKind::NotFound => {
            return Err(Error::NotFound(path.to_path_buf()));
        }
        Err(err) => return Err(Error::Io(err)),
    };

    let doc = Document::load(path)?;
    if doc.is_encrypted() {
        return Err(Error::Encrypted);
    }

    let page_count = doc.get_pages().len();
    debug!("{}: {} pages, {} bytes", path.display(), page_count, file_size);

    // A missing or malformed Info entry is an empty mapping, not an error.
    let info = info_dictionary(&doc);

    Ok(MetadataReport {
        file_path: path.to_path_buf(),
        file_size,
        title: info_text(info, b"Title", sentinel),
        author: info_text(info, b"Author", sentinel),
        subject: info_text(info, b"Subject", sentinel),
        creator: info_text(info, b"Creator", sentinel),
        producer: info_text(info, b"Producer", sentinel),
        creation_date: info_text(info, b"CreationDate", sentinel),
        modification_date: info_text(info, b"ModDate", sentinel),
        page_count,
        encrypted: false,
    })
}

fn info_dictionary(doc: &Document) -> Option<&Dictionary> {
    match doc.trailer.get(b"Info").ok()? {
        Object::Reference(id) => doc.get_dictionary(*id).ok(),
        Object::Dictionary(dict) => Some(dict),
        _ => None,
    }
}

fn info_text(info: Option<&Dictionary>, key: &[u8], sentinel: &str) -> String {
    info.and_then(|dict| dict.get(key).ok())
        .and_then(|obj| obj.as_str().ok())
        .map(decode_text_string)
        .unwrap_or_else(|| sentinel.to_string())
}

/// PDF text strings are UTF-16BE when they carry a BOM, and close enough to
/// Latin-1 otherwise that a lossy UTF-8 read matches what viewers show.
fn decode_text_string(bytes: &[u8]) -> String {
    if bytes.starts_with(&[0xFE, 0xFF]) {
        let (text, _, _) = encoding_rs::UTF_16BE.decode(&bytes[2..]);
        text.into_owned()
    } else {
        String::from_utf8_lossy(bytes).into_owned()
    }
}
