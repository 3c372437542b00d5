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

//! Number scanning for the lexer.
//!
//! Numbers are a run of digits with an optional decimal part. There is no
//! sign (unary minus belongs to the grammar) and no exponent. The text is
//! kept verbatim because it is emitted into C as written.

use super::helpers::LexerHelpers;
use super::{Lexer, Token, TokenKind};
use crate::error::{CompileError, ErrorCode, Span};

/// Trait for number scanning operations.
pub trait NumberScanner<'source> {
    /// Scan a number literal starting at the current digit.
    fn scan_number(&mut self) -> Result<(Token, Span), CompileError>;

    /// Consume a maximal run of ASCII digits.
    fn consume_digits(&mut self);
}

impl<'source> NumberScanner<'source> for Lexer<'source> {
    fn scan_number(&mut self) -> Result<(Token, Span), CompileError> {
        let start = self.position;
        self.consume_digits();

        if self.peek() == Some('.') {
            self.advance();

            // must have at least one digit after the decimal point
            if !self.peek().is_some_and(|c| c.is_ascii_digit()) {
                return Err(CompileError::new(
                    ErrorCode::InvalidDecimalLiteral,
                    "Illegal character in number: expected a digit after '.'",
                    self.span_from(start),
                )
                .with_hint("Write 3.0 instead of 3."));
            }

            self.consume_digits();
        }

        let span = self.span_from(start);
        Ok((Token::new(&self.source[start..self.position], TokenKind::Number), span))
    }

    fn consume_digits(&mut self) {
        while self.peek().is_some_and(|c| c.is_ascii_digit()) {
            self.advance();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_integer() {
        let (token, span) = Lexer::new("42 ").scan_number().unwrap();
        assert_eq!(token, Token::new("42", TokenKind::Number));
        assert_eq!(span, Span::new(0, 2));
    }

    #[test]
    fn test_decimal() {
        let (token, _) = Lexer::new("3.14").scan_number().unwrap();
        assert_eq!(token.text, "3.14");
    }

    #[test]
    fn test_leading_zeros_kept_verbatim() {
        let (token, _) = Lexer::new("007.50").scan_number().unwrap();
        assert_eq!(token.text, "007.50");
    }

    #[test]
    fn test_trailing_point_rejected() {
        let err = Lexer::new("3.").scan_number().unwrap_err();
        assert_eq!(err.code, ErrorCode::InvalidDecimalLiteral);
        assert_eq!(err.span, Span::new(0, 2));
    }

    #[test]
    fn test_point_followed_by_letter_rejected() {
        let err = Lexer::new("1.e5").scan_number().unwrap_err();
        assert_eq!(err.code, ErrorCode::InvalidDecimalLiteral);
    }

    #[test]
    fn test_number_stops_at_letter() {
        let (token, _) = Lexer::new("12ab").scan_number().unwrap();
        assert_eq!(token.text, "12");
    }
}
