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

//! Teeny Tiny Compiler Library
//!
//! This library translates Teeny Tiny programs, a small BASIC-like
//! language, into C source code in a single pass.
//!
//! # Modules
//!
//! - [`error`] - Error types and error reporting
//! - [`lexer`] - Tokenization of source code
//! - [`parser`] - One-pass parsing with direct C emission
//! - [`analyzer`] - Variable and label bookkeeping
//! - [`codegen`] - Code sinks and C text fragments
//! - [`output`] - Writing generated C files
//! - [`runner`] - Building and running generated C, file watching
//!
//! # Example
//!
//! ```no_run
//! use std::path::Path;
//!
//! fn compile(source: &str, output_path: &Path) -> Result<(), Box<dyn std::error::Error>> {
//!     // Translate
//!     let c_source = teenytiny::translate(source)?;
//!
//!     // Write output
//!     teenytiny::output::write_c(&c_source, output_path)?;
//!
//!     Ok(())
//! }
//! ```

pub mod analyzer;
pub mod codegen;
pub mod error;
pub mod lexer;
pub mod output;
pub mod parser;
pub mod runner;

// Re-export commonly used types
pub use codegen::{CodeSink, Emitter};
pub use error::{format_error, render_report, CompileError, ErrorCode, Result, SourceLocation, Span};
pub use lexer::{Token, TokenKind};

/// The version of the Teeny Tiny compiler.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// The name of the compiler.
pub const NAME: &str = "Teeny Tiny";

/// Translate Teeny Tiny source code to C.
///
/// This is the main entry point. Lexing, parsing, checking and code
/// generation all happen in one pass over the source.
///
/// # Example
///
/// ```no_run
/// let source = "LET a = 1\nPRINT a\n";
///
/// match teenytiny::translate(source) {
///     Ok(c_source) => print!("{}", c_source),
///     Err(e) => eprintln!("Compilation error: {}", e),
/// }
/// ```
pub fn translate(source: &str) -> std::result::Result<String, CompileError> {
    translate_into(source, Emitter::new()).map(Emitter::finish)
}

/// Translate Teeny Tiny source code into a caller-supplied sink.
///
/// Returns the sink once the whole program has been translated and every
/// GOTO has been resolved.
pub fn translate_into<S: CodeSink>(source: &str, sink: S) -> std::result::Result<S, CompileError> {
    parser::parse_into(source, sink)
}
