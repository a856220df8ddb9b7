//! Background dispatch of committed activities
//!
//! The core commits locally and hands the entry to this dispatcher; a
//! single worker thread performs the network call, so a slow or dead
//! endpoint never blocks or rolls back a local update.

use std::sync::mpsc::{Sender, channel};
use std::thread::{self, JoinHandle};

use tracing::debug;

use super::{ActivityUpload, RemoteClient};

/// Fire-and-forget queue in front of [`RemoteClient::submit_activity`]
pub struct SyncDispatcher {
    tx: Option<Sender<ActivityUpload>>,
    worker: Option<JoinHandle<()>>,
}

impl SyncDispatcher {
    /// Start the worker thread. With no endpoint configured the
    /// dispatcher accepts submissions and drops them.
    pub fn start(endpoint: Option<String>) -> Self {
        let Some(endpoint) = endpoint else {
            return Self {
                tx: None,
                worker: None,
            };
        };

        let (tx, rx) = channel::<ActivityUpload>();
        let worker = thread::spawn(move || {
            let client = RemoteClient::new(endpoint);
            while let Ok(activity) = rx.recv() {
                client.submit_activity(&activity);
            }
            debug!("sync dispatcher drained");
        });

        Self {
            tx: Some(tx),
            worker: Some(worker),
        }
    }

    /// Queue one committed activity. Never blocks and never fails the
    /// caller; a closed or missing channel drops the submission.
    pub fn submit(&self, activity: ActivityUpload) {
        if let Some(tx) = &self.tx {
            let _ = tx.send(activity);
        }
    }

    /// Close the queue and wait for already-queued submissions to finish.
    /// Used at command exit so a short-lived process doesn't strand the
    /// last entry; the attempt itself stays best-effort.
    pub fn finish(mut self) {
        self.tx.take();
        if let Some(worker) = self.worker.take() {
            let _ = worker.join();
        }
    }
}
