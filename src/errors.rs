use crate::upload::UploadError;
use std::io;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("Failed to open the uploader window: {0}")]
    Gui(#[from] eframe::Error),
    #[error("Failed to start the async runtime: {0}")]
    Runtime(#[from] io::Error),
    #[error("{0}")]
    Upload(#[from] UploadError),
}
