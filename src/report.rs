use std::fs;
use std::path::{Path, PathBuf};

use chrono::NaiveDateTime;
use log::debug;

use crate::error::{Error, Result};
use crate::metadata::MetadataReport;

/// Name of the report file written next to the source PDF.
pub const REPORT_FILE_NAME: &str = "pdf_report.txt";

const RULE: &str = "========================================";

/// Renders `report` into the fixed plain-text template. Deterministic for
/// identical `(report, now)`; field values are interpolated verbatim.
pub fn format_report(report: &MetadataReport, now: NaiveDateTime) -> String {
    let file_name = report
        .file_path
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_default();
    let size_kb = report.file_size as f64 / 1024.0;
    let encrypted = if report.encrypted { "Yes" } else { "No" };

    format!(
        "PDF Metadata Report\n\
         Generated on: {now}\n\
         {RULE}\n\
         \n\
         File: {file_name}\n\
         Path: {path}\n\
         Size: {size_kb:.2} KB\n\
         \n\
         Title: {title}\n\
         Author: {author}\n\
         Subject: {subject}\n\
         Creator: {creator}\n\
         Producer: {producer}\n\
         Created: {created}\n\
         Modified: {modified}\n\
         Pages: {pages}\n\
         Encrypted: {encrypted}\n\
         \n\
         {RULE}\n",
        now = now.format("%Y-%m-%d %H:%M:%S"),
        path = report.file_path.display(),
        title = report.title,
        author = report.author,
        subject = report.subject,
        creator = report.creator,
        producer = report.producer,
        created = report.creation_date,
        modified = report.modification_date,
        pages = report.page_count,
    )
}

/// Writes `text` to `pdf_report.txt` in the source PDF's directory,
/// overwriting any previous report, and returns the path written.
pub fn save_report(report: &MetadataReport, text: &str) -> Result<PathBuf> {
    let dir = report.file_path.parent().unwrap_or_else(|| Path::new("."));
    let path = dir.join(REPORT_FILE_NAME);
    fs::write(&path, text).map_err(Error::Save)?;
    debug!("report written to {}", path.display());
    Ok(path)
}
