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

//! C file writer for the Teeny Tiny compiler.

use std::fs::File;
use std::io::{self, Write};
use std::path::Path;

/// Write generated C source to a file, replacing any existing content.
pub fn write_c(code: &str, path: &Path) -> io::Result<()> {
    let mut file = File::create(path)?;
    file.write_all(code.as_bytes())?;
    file.flush()?;

    log::debug!("wrote {} bytes to {}", code.len(), path.display());
    Ok(())
}
