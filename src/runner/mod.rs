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

//! Runner module for building generated C and file watching.
//!
//! This module provides functionality to:
//! - Detect a C compiler
//! - Compile generated C into an executable and run it
//! - Watch source files for changes

mod cc;
mod watcher;

pub use cc::{find_c_compiler, CcRunner, C_COMPILERS};
pub use watcher::SourceWatcher;

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur during runner operations.
#[derive(Debug, Error)]
pub enum RunnerError {
    /// No C compiler was found on the system.
    #[error("No C compiler found. Install cc, gcc or clang, or specify one with --cc or CC")]
    CompilerNotFound,

    /// The specified C compiler path does not exist.
    #[error("C compiler path does not exist: {0}")]
    InvalidCompilerPath(PathBuf),

    /// The C compiler would read or overwrite a file that is not C source.
    #[error("Cannot build {0}: the generated C file must have a .c extension")]
    NotCSource(PathBuf),

    /// A process could not be started.
    #[error("Failed to start {program}: {source}")]
    SpawnFailed {
        program: String,
        #[source]
        source: io::Error,
    },

    /// The C compiler rejected the generated code.
    #[error("C compiler failed with {status}:\n{stderr}")]
    BuildFailed { status: String, stderr: String },

    /// Error watching files.
    #[error("File watch error: {0}")]
    WatchError(String),
}
