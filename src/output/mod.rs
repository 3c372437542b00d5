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

//! Output module for the Teeny Tiny compiler.
//!
//! This module decides where generated files go and writes them:
//! - C source files
//! - The executable path used when the C file is built

mod c;

pub use c::write_c;

use std::path::{Path, PathBuf};

/// The extension of generated C files.
pub const C_EXTENSION: &str = "c";

/// The default C output path for a source file: the same path with a `.c`
/// extension.
pub fn default_output_path(source: &Path) -> PathBuf {
    source.with_extension(C_EXTENSION)
}

/// The executable built from a C file: the same path without its extension.
pub fn executable_path(c_path: &Path) -> PathBuf {
    let path = c_path.with_extension("");
    if cfg!(windows) {
        path.with_extension("exe")
    } else {
        path
    }
}
