/// Accounting-export upload types
///
/// Uploads come in two kinds with different processing pipelines: PDF
/// documents go through asynchronous OCR extraction, while spreadsheet
/// exports (CSV, Excel) are parsed synchronously. The kind is decided by
/// file name alone.
use bytes::Bytes;
use serde::{Deserialize, Serialize};

/// Processing pipeline a file is routed to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FileKind {
    /// Document image path, extracted asynchronously via OCR
    #[serde(rename = "pdf")]
    Pdf,

    /// Tabular export path, parsed synchronously
    #[serde(rename = "spreadsheet")]
    Spreadsheet,
}

impl FileKind {
    /// Classifies a file by its name, case-insensitively
    ///
    /// Anything that does not end in `.pdf` takes the spreadsheet path.
    pub fn from_file_name(name: &str) -> Self {
        if name.to_lowercase().ends_with(".pdf") {
            FileKind::Pdf
        } else {
            FileKind::Spreadsheet
        }
    }
}

/// An accounting export ready to upload
#[derive(Debug, Clone)]
pub struct UploadFile {
    /// Original file name, used to pick the processing pipeline
    pub file_name: String,

    /// Raw file contents
    pub bytes: Bytes,
}

impl UploadFile {
    /// Wraps a file name and its contents
    pub fn new(file_name: impl Into<String>, bytes: impl Into<Bytes>) -> Self {
        Self {
            file_name: file_name.into(),
            bytes: bytes.into(),
        }
    }

    /// Processing pipeline this file will be routed to
    pub fn kind(&self) -> FileKind {
        FileKind::from_file_name(&self.file_name)
    }
}

/// Outcome of an upload
///
/// The optional fields are present only on the OCR path, where statement
/// extraction happens after the upload returns.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UploadReceipt {
    /// Human-readable confirmation
    pub message: String,

    /// Financial statements created immediately by this upload
    ///
    /// Zero on the OCR path; extraction completes later.
    pub statements_created: u32,

    /// Company the upload was attached to
    pub company_id: i64,

    /// File classification, reported on the OCR path
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file_type: Option<FileKind>,

    /// Set when extraction continues asynchronously after the upload
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ocr_processing: Option<bool>,

    /// Extra context about deferred processing
    #[serde(skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
}
