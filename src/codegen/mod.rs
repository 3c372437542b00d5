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

//! Code generation module for the Teeny Tiny compiler.
//!
//! Code is generated while parsing: the parser pushes C text into a
//! [`CodeSink`] as it recognizes each construct. The sink keeps two ordered
//! sections, a header (includes, the `main` prologue and variable
//! declarations) and a body (statements). The final C program is the header
//! followed by the body.
//!
//! # Module Structure
//!
//! - `constants` - Fixed C text (includes, formats, block delimiters)
//! - `emit` - The default in-memory sink (Emitter)
//! - `fragments` - C statements built from names and literals

pub mod constants;
mod emit;
pub mod fragments;

pub use emit::Emitter;

/// An append-only destination for generated C text.
///
/// Implementations must not reorder or drop fragments. They perform no
/// validation; producing well-formed C is the parser's job.
pub trait CodeSink {
    /// Append text to the body fragment under construction.
    fn emit(&mut self, text: &str);

    /// Append text and a line terminator to the body, closing the fragment.
    fn emit_line(&mut self, text: &str);

    /// Append text and a line terminator to the header.
    fn header_line(&mut self, text: &str);
}

impl<S: CodeSink + ?Sized> CodeSink for &mut S {
    fn emit(&mut self, text: &str) {
        (**self).emit(text);
    }

    fn emit_line(&mut self, text: &str) {
        (**self).emit_line(text);
    }

    fn header_line(&mut self, text: &str) {
        (**self).header_line(text);
    }
}
