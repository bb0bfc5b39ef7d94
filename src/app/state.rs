use crate::upload::{StatusClass, StatusUpdate};
use derivative::Derivative;
use log::error;
use std::sync::mpsc::{Receiver, TryRecvError};

const WORKER_LOST_MESSAGE: &str = "Error: the upload stopped unexpectedly";

#[derive(Derivative, Default)]
#[derivative(Debug)]
pub struct UploadState {
    pub status_text: String,
    pub status_class: StatusClass,
    pub is_loading: bool,
    #[derivative(Debug = "ignore")]
    pub status_receiver: Option<Receiver<StatusUpdate>>,
}

impl UploadState {
    pub fn apply(&mut self, update: StatusUpdate) {
        match update {
            StatusUpdate::Status { text, class } => {
                self.status_text = text;
                self.status_class = class;
            }
            StatusUpdate::Loading(loading) => self.is_loading = loading,
        }
    }

    /// A worker owns the channel until it drops its sender.
    pub fn is_busy(&self) -> bool {
        self.status_receiver.is_some()
    }

    pub fn can_upload(&self) -> bool {
        !self.is_loading && !self.is_busy()
    }

    pub fn spinner_visible(&self) -> bool {
        self.is_loading
    }

    /// Applies every pending update. Returns true if anything changed.
    pub fn drain_updates(&mut self) -> bool {
        let Some(receiver) = &self.status_receiver else {
            return false;
        };

        let mut pending = Vec::new();
        let mut disconnected = false;
        loop {
            match receiver.try_recv() {
                Ok(update) => pending.push(update),
                Err(TryRecvError::Empty) => break,
                Err(TryRecvError::Disconnected) => {
                    disconnected = true;
                    break;
                }
            }
        }

        let mut had_updates = !pending.is_empty();
        for update in pending {
            self.apply(update);
        }

        if disconnected {
            self.status_receiver = None;
            if self.is_loading {
                // The worker went away without leaving the loading state.
                error!("Upload worker exited while still loading");
                self.apply(StatusUpdate::Status {
                    text: WORKER_LOST_MESSAGE.to_string(),
                    class: StatusClass::Error,
                });
                self.is_loading = false;
            }
            had_updates = true;
        }

        had_updates
    }
}
