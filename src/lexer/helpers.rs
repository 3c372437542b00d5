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

//! Lexer helper methods for character navigation and span creation.
//!
//! This module provides utility methods for the lexer including:
//! - Character stream navigation (peek, advance)
//! - Skipping of blanks and comments
//! - Span creation

use super::Lexer;
use crate::error::Span;

/// Trait for lexer helper operations.
pub trait LexerHelpers<'source> {
    /// Check if we've reached the end of the source.
    fn is_at_end(&self) -> bool;

    /// Peek at the current character without advancing.
    fn peek(&self) -> Option<char>;

    /// Advance to the next character and return it.
    fn advance(&mut self) -> Option<char>;

    /// Create a span from start position to current position.
    fn span_from(&self, start: usize) -> Span;

    /// Skip spaces, tabs and carriage returns (but not newlines).
    fn skip_whitespace(&mut self);

    /// Skip a comment (from # up to, not including, the newline).
    fn skip_comment(&mut self);
}

impl<'source> LexerHelpers<'source> for Lexer<'source> {
    fn is_at_end(&self) -> bool {
        self.position >= self.source.len()
    }

    fn peek(&self) -> Option<char> {
        self.source[self.position..].chars().next()
    }

    fn advance(&mut self) -> Option<char> {
        let c = self.peek()?;
        self.position += c.len_utf8();
        Some(c)
    }

    fn span_from(&self, start: usize) -> Span {
        Span::new(start, self.position)
    }

    fn skip_whitespace(&mut self) {
        while let Some(' ' | '\t' | '\r') = self.peek() {
            self.advance();
        }
    }

    fn skip_comment(&mut self) {
        if self.peek() != Some('#') {
            return;
        }
        while let Some(c) = self.peek() {
            if c == '\n' {
                break;
            }
            self.advance();
        }
    }
}
