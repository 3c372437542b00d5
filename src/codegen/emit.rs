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

//! The in-memory code sink.
//!
//! `Emitter` accumulates header and body fragments in append order and
//! joins them when translation finishes.

use super::CodeSink;

/// Default [`CodeSink`]: two ordered fragment buffers.
#[derive(Debug, Clone, Default)]
pub struct Emitter {
    /// Header fragments, one per line.
    header: Vec<String>,
    /// Completed body fragments.
    body: Vec<String>,
    /// Body text emitted since the last line terminator.
    pending: String,
}

impl Emitter {
    /// Create an empty emitter.
    pub fn new() -> Self {
        Self::default()
    }

    /// The header fragments in append order.
    pub fn header(&self) -> &[String] {
        &self.header
    }

    /// The completed body fragments in append order.
    pub fn body(&self) -> &[String] {
        &self.body
    }

    /// The header section as a single string.
    pub fn header_text(&self) -> String {
        self.header.concat()
    }

    /// The body section as a single string, including any unterminated text.
    pub fn body_text(&self) -> String {
        let mut text = self.body.concat();
        text.push_str(&self.pending);
        text
    }

    /// Join header and body into the final C source.
    pub fn finish(self) -> String {
        let mut output = self.header_text();
        output.push_str(&self.body_text());
        output
    }
}

impl CodeSink for Emitter {
    fn emit(&mut self, text: &str) {
        self.pending.push_str(text);
    }

    fn emit_line(&mut self, text: &str) {
        let mut fragment = std::mem::take(&mut self.pending);
        fragment.push_str(text);
        fragment.push('\n');
        self.body.push(fragment);
    }

    fn header_line(&mut self, text: &str) {
        self.header.push(format!("{}\n", text));
    }
}
