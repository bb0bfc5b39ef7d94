mod state;
mod ui;

use crate::config::Config;
use crate::upload::{
    file_label, SelectedFile, StatusClass, StatusUpdate, StatusView, Uploader,
};
use eframe::{egui, App};
use log::{error, info};
pub use state::UploadState;
use std::fs;
use std::path::PathBuf;
use std::sync::mpsc::{self as std_mpsc, Sender};

/// Forwards status changes from the upload worker to the UI thread.
struct ChannelView {
    sender: Sender<StatusUpdate>,
    ctx: egui::Context,
}

impl ChannelView {
    fn push(&self, update: StatusUpdate) {
        self.sender.send(update).unwrap_or_default();
        self.ctx.request_repaint();
    }
}

impl StatusView for ChannelView {
    fn set_status(&mut self, text: &str, class: StatusClass) {
        self.push(StatusUpdate::Status {
            text: text.to_string(),
            class,
        });
    }

    fn set_loading(&mut self, loading: bool) {
        self.push(StatusUpdate::Loading(loading));
    }
}

pub struct GeneUploader {
    email: String,
    selected_file: Option<SelectedFile>,
    selected_size: Option<u64>,
    file_label: String,
    state: UploadState,
    uploader: Uploader,
}

impl GeneUploader {
    pub fn new(_cc: &eframe::CreationContext<'_>, config: &Config) -> Self {
        info!("Initializing gene uploader against {}", config.endpoint);
        Self::with_uploader(Uploader::new(config.endpoint.clone()))
    }

    fn with_uploader(uploader: Uploader) -> Self {
        Self {
            email: String::new(),
            selected_file: None,
            selected_size: None,
            file_label: file_label(None),
            state: UploadState::default(),
            uploader,
        }
    }

    /// Picks or clears the file and refreshes the label next to the picker.
    pub fn select_file(&mut self, path: Option<PathBuf>) {
        self.file_label = file_label(path.as_deref());
        self.selected_size = path
            .as_ref()
            .and_then(|p| fs::metadata(p).ok())
            .map(|meta| meta.len());
        self.selected_file = path.map(SelectedFile::from_path);
    }

    pub fn start_upload(&mut self, ctx: &egui::Context) {
        if self.state.is_busy() {
            return;
        }

        let (sender, receiver) = std_mpsc::channel();
        self.state.status_receiver = Some(receiver);

        let mut view = ChannelView {
            sender,
            ctx: ctx.clone(),
        };
        let uploader = self.uploader.clone();
        let email = self.email.clone();
        let file = self.selected_file.clone();

        std::thread::spawn(move || {
            let rt = match tokio::runtime::Builder::new_current_thread()
                .enable_all()
                .build()
            {
                Ok(rt) => rt,
                Err(e) => {
                    error!("Failed to create upload runtime: {}", e);
                    view.set_status(&format!("Error: {}", e), StatusClass::Error);
                    return;
                }
            };
            rt.block_on(async {
                // The outcome has already been reported through the view.
                let _ = uploader.submit(&mut view, &email, file.as_ref()).await;
            });
        });
    }

    pub fn update_state(&mut self, ctx: &egui::Context) {
        if self.state.drain_updates() {
            ctx.request_repaint();
        }
    }
}

impl App for GeneUploader {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.update_state(ctx);
        self.render(ctx);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::upload::DEFAULT_FILE_LABEL;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn selecting_and_clearing_updates_label() {
        let mut app = GeneUploader::with_uploader(Uploader::new("http://127.0.0.1:9"));
        assert_eq!(app.file_label, DEFAULT_FILE_LABEL);

        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("sample.fastq");
        fs::write(&path, "@r1\nACGT\n+\n!!!!\n").unwrap();

        app.select_file(Some(path.clone()));
        assert_eq!(app.file_label, "sample.fastq");
        assert_eq!(app.selected_size, Some(16));
        assert_eq!(app.selected_file, Some(SelectedFile::from_path(&path)));

        app.select_file(None);
        assert_eq!(app.file_label, DEFAULT_FILE_LABEL);
        assert_eq!(app.selected_size, None);
        assert!(app.selected_file.is_none());
    }

    #[test]
    fn validation_failure_is_reported_through_the_channel() {
        let mut app = GeneUploader::with_uploader(Uploader::new("http://127.0.0.1:9"));
        let mut tmp = NamedTempFile::new().unwrap();
        writeln!(tmp, "@r1").unwrap();
        app.select_file(Some(tmp.path().to_path_buf()));

        let ctx = egui::Context::default();
        app.start_upload(&ctx);
        assert!(!app.state.can_upload());

        // Wait for the worker to finish and drop its sender.
        while app.state.is_busy() {
            app.update_state(&ctx);
            std::thread::yield_now();
        }

        assert_eq!(app.state.status_text, "Please enter an email address");
        assert_eq!(app.state.status_class, StatusClass::Error);
        assert!(!app.state.spinner_visible());
        assert!(app.state.can_upload());
    }
}
