use std::path::Path;

pub const DEFAULT_FILE_LABEL: &str = "Choose a FASTQ file";

/// Text for the label next to the file picker.
pub fn file_label(selected: Option<&Path>) -> String {
    selected
        .and_then(|path| path.file_name())
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| DEFAULT_FILE_LABEL.to_string())
}
