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

//! Operator scanning for the lexer.
//!
//! This module handles scanning of:
//! - Arithmetic operators (+, -, *, /)
//! - Assignment (=)
//! - Comparison operators (==, !=, <, >, <=, >=)

use super::helpers::LexerHelpers;
use super::{Lexer, Token, TokenKind};
use crate::error::{CompileError, ErrorCode, Span};

/// Trait for operator scanning operations.
pub trait OperatorScanner<'source> {
    /// Scan an operator starting with `first`, which is the current character.
    fn scan_operator(&mut self, first: char) -> Result<(Token, Span), CompileError>;

    /// Consume a following `=` if present and pick the matching kind.
    fn with_equals(&mut self, paired: TokenKind, single: TokenKind) -> TokenKind;
}

impl<'source> OperatorScanner<'source> for Lexer<'source> {
    fn scan_operator(&mut self, first: char) -> Result<(Token, Span), CompileError> {
        let start = self.position;
        self.advance();

        let kind = match first {
            '+' => TokenKind::Plus,
            '-' => TokenKind::Minus,
            '*' => TokenKind::Asterisk,
            '/' => TokenKind::Slash,
            '=' => self.with_equals(TokenKind::EqEq, TokenKind::Eq),
            '>' => self.with_equals(TokenKind::GtEq, TokenKind::Gt),
            '<' => self.with_equals(TokenKind::LtEq, TokenKind::Lt),
            '!' => {
                if self.peek() == Some('=') {
                    self.advance();
                    TokenKind::NotEq
                } else {
                    let next = self
                        .peek()
                        .map(|c| c.escape_default().to_string())
                        .unwrap_or_default();
                    return Err(CompileError::new(
                        ErrorCode::InvalidBangOperator,
                        format!("Expected !=, got !{}", next),
                        self.span_from(start),
                    )
                    .with_hint("'!' is only valid as part of '!='"));
                }
            }
            _ => {
                return Err(CompileError::new(
                    ErrorCode::InvalidCharacter,
                    format!("Unknown token: {}", first.escape_default()),
                    self.span_from(start),
                ));
            }
        };

        let span = self.span_from(start);
        Ok((Token::new(&self.source[start..self.position], kind), span))
    }

    fn with_equals(&mut self, paired: TokenKind, single: TokenKind) -> TokenKind {
        if self.peek() == Some('=') {
            self.advance();
            paired
        } else {
            single
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scan(source: &str) -> Result<(Token, Span), CompileError> {
        let mut lexer = Lexer::new(source);
        let first = lexer.peek().unwrap();
        lexer.scan_operator(first)
    }

    #[test]
    fn test_single_character_operators() {
        assert_eq!(scan("+").unwrap().0, Token::new("+", TokenKind::Plus));
        assert_eq!(scan("-").unwrap().0, Token::new("-", TokenKind::Minus));
        assert_eq!(scan("*").unwrap().0, Token::new("*", TokenKind::Asterisk));
        assert_eq!(scan("/").unwrap().0, Token::new("/", TokenKind::Slash));
    }

    #[test]
    fn test_two_character_operators_win() {
        assert_eq!(scan("==").unwrap().0, Token::new("==", TokenKind::EqEq));
        assert_eq!(scan(">=").unwrap().0, Token::new(">=", TokenKind::GtEq));
        assert_eq!(scan("<=").unwrap().0, Token::new("<=", TokenKind::LtEq));
        assert_eq!(scan("!=").unwrap().0, Token::new("!=", TokenKind::NotEq));
    }

    #[test]
    fn test_operator_span() {
        let (_, span) = scan(">= 1").unwrap();
        assert_eq!(span, Span::new(0, 2));
    }

    #[test]
    fn test_bare_bang() {
        let err = scan("!x").unwrap_err();
        assert_eq!(err.code, ErrorCode::InvalidBangOperator);
        assert_eq!(err.message, "Expected !=, got !x");
    }

    #[test]
    fn test_unknown_character() {
        let err = scan("@").unwrap_err();
        assert_eq!(err.code, ErrorCode::InvalidCharacter);
        assert_eq!(err.message, "Unknown token: @");
    }
}
