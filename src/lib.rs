//! Reads a PDF's document-information dictionary and page count through
//! [`lopdf`] and renders the result as a plain-text report that is saved
//! next to the source file.
//!
//! The crate does no PDF parsing of its own; `lopdf` handles all document
//! structure. Two binaries sit on top of this library: `pdfreport-cli`
//! (line-oriented) and `pdfreport-tui` (full-screen terminal UI).

mod error;
pub use error::{Error, Result};

mod metadata;
pub use metadata::{MetadataReport, extract, has_pdf_extension};

mod report;
pub use report::{REPORT_FILE_NAME, format_report, save_report};
