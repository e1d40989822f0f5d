//! Background CSV loading.
//!
//! Each request parses on its own worker thread and reports back over a
//! channel that the UI drains once per frame. Requests are numbered; only the
//! outcome of the newest one is handed out, so a slow parse of an older file
//! can never overwrite a newer selection.

use std::path::{Path, PathBuf};
use std::sync::mpsc::{channel, Receiver, Sender};

use crate::data::rows::{CsvRow, RowParser};
use crate::error::Result;

/// Result of one finished parse.
#[derive(Debug)]
pub struct LoadOutcome {
    pub generation: u64,
    pub path: PathBuf,
    pub result: Result<Vec<CsvRow>>,
}

pub struct Loader {
    parser: RowParser,
    tx: Sender<LoadOutcome>,
    rx: Receiver<LoadOutcome>,
    generation: u64,
    pending: Option<u64>,
}

impl Default for Loader {
    fn default() -> Self {
        Self::new(RowParser::default())
    }
}

impl Loader {
    pub fn new(parser: RowParser) -> Self {
        let (tx, rx) = channel();
        Self {
            parser,
            tx,
            rx,
            generation: 0,
            pending: None,
        }
    }

    /// Start parsing `path` in the background. Returns the request number.
    pub fn request(&mut self, path: &Path) -> u64 {
        self.generation += 1;
        let generation = self.generation;
        self.pending = Some(generation);

        let parser = self.parser.clone();
        let tx = self.tx.clone();
        let path = path.to_path_buf();
        tracing::info!(path = %path.display(), generation, "loading CSV");
        std::thread::spawn(move || {
            let result = parser.parse_file(&path);
            // The receiver lives as long as the loader; a send error only
            // means the app is shutting down.
            let _ = tx.send(LoadOutcome {
                generation,
                path,
                result,
            });
        });
        generation
    }

    pub fn is_loading(&self) -> bool {
        self.pending.is_some()
    }

    /// Drain finished parses and return the newest request's outcome, if it
    /// has arrived. Outcomes of superseded requests are dropped.
    pub fn poll(&mut self) -> Option<LoadOutcome> {
        let mut latest = None;
        while let Ok(outcome) = self.rx.try_recv() {
            if Some(outcome.generation) == self.pending {
                self.pending = None;
                latest = Some(outcome);
            } else {
                tracing::debug!(
                    generation = outcome.generation,
                    path = %outcome.path.display(),
                    "discarding superseded load"
                );
            }
        }
        latest
    }
}
