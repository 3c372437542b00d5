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

//! Lexer module for the Teeny Tiny compiler.
//!
//! This module turns source text into a lazy stream of tokens. It handles:
//! - Keywords and identifiers
//! - Number literals (digits with an optional decimal part)
//! - String literals
//! - Operators
//! - Newlines (statement terminators) and comments (starting with #)
//!
//! # Module Structure
//!
//! - `helpers` - Character navigation (LexerHelpers trait)
//! - `identifiers` - Identifier and keyword scanning (IdentifierScanner trait)
//! - `numbers` - Number scanning (NumberScanner trait)
//! - `operators` - Operator scanning (OperatorScanner trait)
//! - `strings` - String scanning (StringScanner trait)
//! - `tokens` - Token definitions

mod helpers;
mod identifiers;
mod numbers;
mod operators;
mod strings;
mod tokens;

pub use tokens::{Token, TokenKind};

use std::borrow::Cow;

use helpers::LexerHelpers;
use identifiers::IdentifierScanner;
use numbers::NumberScanner;
use operators::OperatorScanner;
use strings::StringScanner;

use crate::error::{CompileError, Span};

/// The lexer state for tokenizing source code.
pub struct Lexer<'source> {
    /// The source code being tokenized, always ending with a newline.
    source: Cow<'source, str>,
    /// Current byte position in the source.
    position: usize,
    /// Set once EOF or an error has been yielded by the iterator.
    finished: bool,
}

impl<'source> Lexer<'source> {
    /// Create a new lexer for the given source code.
    ///
    /// A trailing newline is appended when the source lacks one, so the
    /// last statement is always terminated.
    pub fn new(source: &'source str) -> Self {
        let source = if source.ends_with('\n') {
            Cow::Borrowed(source)
        } else {
            Cow::Owned(format!("{}\n", source))
        };

        Self {
            source,
            position: 0,
            finished: false,
        }
    }

    /// The normalized source text the spans refer to.
    pub fn source(&self) -> &str {
        &self.source
    }

    /// Get the next token from the source.
    ///
    /// Once the input is exhausted this keeps returning EOF.
    pub fn next_token(&mut self) -> Result<(Token, Span), CompileError> {
        let (token, span) = self.scan_token()?;
        log::trace!("token {} {:?} at {}..{}", token.kind, token.text, span.start, span.end);
        Ok((token, span))
    }

    fn scan_token(&mut self) -> Result<(Token, Span), CompileError> {
        self.skip_whitespace();
        self.skip_comment();

        let start = self.position;
        let Some(c) = self.peek() else {
            return Ok((Token::eof(), Span::new(start, start)));
        };

        match c {
            '\n' => {
                self.advance();
                Ok((Token::new("\n", TokenKind::Newline), self.span_from(start)))
            }
            '"' => self.scan_string(),
            c if c.is_ascii_digit() => self.scan_number(),
            c if c.is_ascii_alphabetic() => Ok(self.scan_identifier()),
            c => self.scan_operator(c),
        }
    }
}

impl<'source> Iterator for Lexer<'source> {
    type Item = Result<(Token, Span), CompileError>;

    /// Yields tokens up to and including EOF, or up to the first error.
    fn next(&mut self) -> Option<Self::Item> {
        if self.finished {
            return None;
        }

        let result = self.next_token();
        match &result {
            Ok((token, _)) if token.kind != TokenKind::Eof => {}
            _ => self.finished = true,
        }
        Some(result)
    }
}

/// Tokenize source code into a vector of tokens with spans, ending with EOF.
pub fn tokenize(source: &str) -> Result<Vec<(Token, Span)>, CompileError> {
    Lexer::new(source).collect()
}
