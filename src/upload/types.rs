use crate::upload::selection::file_label;
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Visual state of the status line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StatusClass {
    #[default]
    Neutral,
    Error,
    Success,
}

/// One change to the status surface, as sent from an upload worker.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StatusUpdate {
    Status { text: String, class: StatusClass },
    Loading(bool),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectedFile {
    pub path: PathBuf,
    pub name: String,
}

impl SelectedFile {
    pub fn from_path(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref();
        Self {
            path: path.to_path_buf(),
            name: file_label(Some(path)),
        }
    }
}

/// A validated submission. Only built once both fields passed the checks.
#[derive(Debug, Clone)]
pub struct UploadRequest {
    pub email: String,
    pub file: SelectedFile,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct UploadResult {
    #[serde(rename = "jobId")]
    pub job_id: String,
    #[serde(default)]
    pub status: Option<String>,
}
