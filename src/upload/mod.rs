mod console;
mod error;
mod selection;
mod types;
mod uploader;
mod view;

pub use console::ConsoleView;
pub use error::UploadError;
pub use selection::{file_label, DEFAULT_FILE_LABEL};
pub use types::{SelectedFile, StatusClass, StatusUpdate, UploadRequest, UploadResult};
pub use uploader::{build_upload_url, Uploader};
pub use view::StatusView;
