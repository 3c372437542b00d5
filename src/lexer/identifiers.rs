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

//! Identifier and keyword scanning for the lexer.
//!
//! Identifiers are runs of ASCII letters only; digits and underscores end
//! the run. Keywords are matched case-sensitively.

use super::helpers::LexerHelpers;
use super::{Lexer, Token};
use crate::error::Span;

/// Trait for identifier scanning operations.
pub trait IdentifierScanner<'source> {
    /// Scan an identifier or keyword.
    fn scan_identifier(&mut self) -> (Token, Span);
}

impl<'source> IdentifierScanner<'source> for Lexer<'source> {
    fn scan_identifier(&mut self) -> (Token, Span) {
        let start = self.position;

        while self.peek().is_some_and(|c| c.is_ascii_alphabetic()) {
            self.advance();
        }

        let span = self.span_from(start);
        let token = Token::from_keyword_or_identifier(&self.source[start..self.position]);
        (token, span)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lexer::TokenKind;

    #[test]
    fn test_identifier() {
        let (token, span) = Lexer::new("counter = 1").scan_identifier();
        assert_eq!(token, Token::new("counter", TokenKind::Ident));
        assert_eq!(span, Span::new(0, 7));
    }

    #[test]
    fn test_keyword() {
        let (token, _) = Lexer::new("WHILE").scan_identifier();
        assert_eq!(token.kind, TokenKind::While);
    }

    #[test]
    fn test_lowercase_keyword_is_identifier() {
        let (token, _) = Lexer::new("while").scan_identifier();
        assert_eq!(token.kind, TokenKind::Ident);
    }

    #[test]
    fn test_identifier_stops_at_digit_and_underscore() {
        let (token, _) = Lexer::new("abc1").scan_identifier();
        assert_eq!(token.text, "abc");
        let (token, _) = Lexer::new("ab_c").scan_identifier();
        assert_eq!(token.text, "ab");
    }

    #[test]
    fn test_keyword_prefix_is_identifier() {
        let (token, _) = Lexer::new("PRINTER").scan_identifier();
        assert_eq!(token, Token::new("PRINTER", TokenKind::Ident));
    }
}
