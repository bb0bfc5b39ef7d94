use std::io;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum UploadError {
    #[error("Please enter an email address")]
    MissingEmail,
    #[error("Please select a file")]
    MissingFile,
    #[error("Upload failed: {}", status_line(.code, .reason))]
    Status { code: u16, reason: String },
    #[error("Failed to read file: {0}")]
    Read(#[from] io::Error),
    #[error("{0}")]
    Transport(#[from] reqwest::Error),
    #[error("Failed to parse upload response: {0}")]
    Parse(#[from] serde_json::Error),
}

fn status_line(code: &u16, reason: &str) -> String {
    if reason.is_empty() {
        code.to_string()
    } else {
        format!("{} {}", code, reason)
    }
}
