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

//! String literal scanning for the lexer.
//!
//! String text ends up verbatim inside a C `printf` format string, so there
//! are no escape sequences and `%`, `\` and carriage returns are rejected.
//! A string must close on the line it starts.

use super::helpers::LexerHelpers;
use super::{Lexer, Token, TokenKind};
use crate::error::{CompileError, ErrorCode, Span};

/// Trait for string scanning operations.
pub trait StringScanner<'source> {
    /// Scan a string literal starting at the opening quote.
    fn scan_string(&mut self) -> Result<(Token, Span), CompileError>;
}

impl<'source> StringScanner<'source> for Lexer<'source> {
    fn scan_string(&mut self) -> Result<(Token, Span), CompileError> {
        let start = self.position;
        self.advance(); // consume opening "
        let text_start = self.position;

        loop {
            match self.peek() {
                Some('"') => break,
                None | Some('\n') => {
                    return Err(CompileError::new(
                        ErrorCode::UnterminatedString,
                        "Unterminated string literal",
                        self.span_from(start),
                    )
                    .with_hint("Close the string with '\"' before the end of the line"));
                }
                Some(c @ ('\r' | '\\' | '%')) => {
                    let at = self.position;
                    return Err(CompileError::new(
                        ErrorCode::IllegalCharacterInString,
                        format!("Illegal character in string: {}", c.escape_default()),
                        Span::new(at, at + c.len_utf8()),
                    )
                    .with_hint("Strings are printed with printf; '%', '\\' and escapes are not allowed"));
                }
                Some(_) => {
                    self.advance();
                }
            }
        }

        let text = self.source[text_start..self.position].to_string();
        self.advance(); // consume closing "

        Ok((Token::new(text, TokenKind::String), self.span_from(start)))
    }
}
