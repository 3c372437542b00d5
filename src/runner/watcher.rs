// Teeny Tiny - A one-pass compiler translating BASIC-like programs into C
// Copyright (C) 2026  Marcel Joachim Kloubert <marcel@kloubert.dev>
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU Affero General Public License as published by
// the Free Software Foundation, either version 3 of the License, or
// (at your option) any later version.
//
// This program is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
// GNU Affero General Public License for more details.
//
// You should have received a copy of the GNU Affero General Public License
// along with this program.  If not, see <https://www.gnu.org/licenses/>.

//! File watching for re-translation on save.
//!
//! This module provides the `SourceWatcher` struct for monitoring source
//! files and signalling the CLI to translate again.
//!
//! # Editor Compatibility
//!
//! Editors either write the file in place or write a temporary file and
//! rename it over the original. The watcher covers both by watching the
//! parent directory and filtering events for the target files.

use std::collections::HashSet;
use std::path::{Path, PathBuf};
use std::sync::mpsc::{self, Receiver, RecvTimeoutError};
use std::time::Duration;

use notify::{Event, EventKind, RecommendedWatcher, RecursiveMode, Watcher};

use super::RunnerError;

/// Quiet period that ends a burst of file change events.
const DEBOUNCE_DURATION: Duration = Duration::from_millis(100);

/// Watches source files for changes.
///
/// # Example
///
/// ```no_run
/// use std::path::PathBuf;
/// use teenytiny::runner::SourceWatcher;
///
/// let watcher = SourceWatcher::new(&[PathBuf::from("hello.teeny")]).expect("Failed to create watcher");
///
/// println!("Watching for changes...");
/// watcher.wait_for_change().expect("Watch error");
/// println!("File changed!");
/// ```
pub struct SourceWatcher {
    /// The underlying file system watcher, kept alive with the receiver.
    _watcher: RecommendedWatcher,
    /// Receiver for file system events.
    rx: Receiver<Result<Event, notify::Error>>,
    /// Canonical paths being watched.
    paths: Vec<PathBuf>,
}

impl SourceWatcher {
    /// Create a new SourceWatcher for the given paths.
    ///
    /// # Errors
    ///
    /// Returns `RunnerError::WatchError` if a path cannot be resolved or
    /// its directory cannot be watched.
    pub fn new(paths: &[PathBuf]) -> Result<Self, RunnerError> {
        let (tx, rx) = mpsc::channel();

        let mut watcher = notify::recommended_watcher(tx)
            .map_err(|e| RunnerError::WatchError(format!("Failed to create watcher: {}", e)))?;

        let mut canonical_paths = Vec::with_capacity(paths.len());
        let mut watched_dirs = HashSet::new();

        for path in paths {
            let canonical = path.canonicalize().map_err(|e| {
                RunnerError::WatchError(format!("Cannot resolve path {}: {}", path.display(), e))
            })?;

            if let Some(parent) = canonical.parent() {
                if watched_dirs.insert(parent.to_path_buf()) {
                    watcher
                        .watch(parent, RecursiveMode::NonRecursive)
                        .map_err(|e| {
                            RunnerError::WatchError(format!(
                                "Failed to watch {}: {}",
                                parent.display(),
                                e
                            ))
                        })?;
                    log::debug!("watching directory {}", parent.display());
                }
            }

            canonical_paths.push(canonical);
        }

        Ok(Self {
            _watcher: watcher,
            rx,
            paths: canonical_paths,
        })
    }

    /// Get the watched paths.
    pub fn paths(&self) -> &[PathBuf] {
        &self.paths
    }

    /// Block until a watched file changes.
    ///
    /// Events arriving within [`DEBOUNCE_DURATION`] of each other are
    /// collapsed into one change.
    pub fn wait_for_change(&self) -> Result<(), RunnerError> {
        loop {
            let event = self
                .rx
                .recv()
                .map_err(|e| RunnerError::WatchError(format!("Watch channel closed: {}", e)))?
                .map_err(|e| RunnerError::WatchError(format!("Watch error: {}", e)))?;

            if self.is_relevant_event(&event) {
                break;
            }
        }

        loop {
            match self.rx.recv_timeout(DEBOUNCE_DURATION) {
                Ok(_) => continue,
                Err(RecvTimeoutError::Timeout) => return Ok(()),
                Err(RecvTimeoutError::Disconnected) => {
                    return Err(RunnerError::WatchError("Watch channel closed".to_string()))
                }
            }
        }
    }

    /// Check whether `path` refers to one of the watched files.
    pub fn matches(&self, path: &Path) -> bool {
        // A renamed-over file may not resolve yet; compare by directory
        // and name instead.
        let canonical = path.canonicalize().unwrap_or_else(|_| path.to_path_buf());

        self.paths.iter().any(|watched| {
            canonical == *watched
                || (canonical.file_name() == watched.file_name()
                    && canonical.parent() == watched.parent())
        })
    }

    /// Only modifications and creations of watched files count.
    fn is_relevant_event(&self, event: &Event) -> bool {
        matches!(event.kind, EventKind::Modify(_) | EventKind::Create(_))
            && event.paths.iter().any(|path| self.matches(path))
    }
}
