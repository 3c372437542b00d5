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

//! Parser helper methods for token stream navigation and error handling.
//!
//! This module provides utility methods for the parser including:
//! - Two-token lookahead (current and peek)
//! - Token matching and expectation
//! - Error creation

use super::Parser;
use crate::codegen::CodeSink;
use crate::error::{CompileError, ErrorCode, Span};
use crate::lexer::{Token, TokenKind};

/// Trait for parser helper operations.
pub trait ParserHelpers {
    /// Check if the current token is of the given kind.
    fn check_token(&self, kind: TokenKind) -> bool;

    /// Check if the lookahead token is of the given kind.
    fn check_peek(&self, kind: TokenKind) -> bool;

    /// Advance to the next token and return the one just consumed.
    fn next_token(&mut self) -> Result<(Token, Span), CompileError>;

    /// Require the current token to be of the given kind, then advance.
    fn match_token(&mut self, kind: TokenKind) -> Result<(Token, Span), CompileError>;

    /// Create an error at the current token, tagged with the source line.
    fn error(&self, code: ErrorCode, message: impl Into<String>) -> CompileError;
}

impl<'source, S: CodeSink> ParserHelpers for Parser<'source, S> {
    fn check_token(&self, kind: TokenKind) -> bool {
        self.current.0.kind == kind
    }

    fn check_peek(&self, kind: TokenKind) -> bool {
        self.peek.0.kind == kind
    }

    fn next_token(&mut self) -> Result<(Token, Span), CompileError> {
        let next = self.lexer.next_token()?;
        let peek = std::mem::replace(&mut self.peek, next);
        Ok(std::mem::replace(&mut self.current, peek))
    }

    fn match_token(&mut self, kind: TokenKind) -> Result<(Token, Span), CompileError> {
        if !self.check_token(kind) {
            return Err(self.error(
                ErrorCode::UnexpectedToken,
                format!("Expected {}, got {}", kind, self.current.0.kind),
            ));
        }
        self.next_token()
    }

    fn error(&self, code: ErrorCode, message: impl Into<String>) -> CompileError {
        CompileError::new(
            code,
            format!("{} (line {})", message.into(), self.line),
            self.current.1.clone(),
        )
    }
}
