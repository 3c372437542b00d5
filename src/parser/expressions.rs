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

//! Expression parsing for the parser.
//!
//! Precedence comes from the nesting of the rules, lowest first:
//! comparison, `+`/`-`, `*`/`/`, unary sign, primary. Operator text is
//! emitted verbatim between its operands, so C sees the same grouping.

use super::helpers::ParserHelpers;
use super::Parser;
use crate::codegen::CodeSink;
use crate::error::{CompileError, ErrorCode};
use crate::lexer::TokenKind;

/// Extension trait for expression parsing.
pub trait ExpressionParser {
    /// comparison ::= expression (("==" | "!=" | ">" | ">=" | "<" | "<=") expression)+
    fn parse_comparison(&mut self) -> Result<(), CompileError>;

    /// expression ::= term {( "-" | "+" ) term}
    fn parse_expression(&mut self) -> Result<(), CompileError>;

    /// term ::= unary {( "/" | "*" ) unary}
    fn parse_term(&mut self) -> Result<(), CompileError>;

    /// unary ::= ["+" | "-"] primary
    fn parse_unary(&mut self) -> Result<(), CompileError>;

    /// primary ::= number | ident
    fn parse_primary(&mut self) -> Result<(), CompileError>;

    /// Emit the current operator token and advance past it.
    fn emit_operator(&mut self) -> Result<(), CompileError>;
}

impl<'source, S: CodeSink> ExpressionParser for Parser<'source, S> {
    fn parse_comparison(&mut self) -> Result<(), CompileError> {
        self.parse_expression()?;

        if !self.current.0.kind.is_comparison() {
            return Err(self
                .error(
                    ErrorCode::ExpectedComparisonOperator,
                    format!("Expected comparison operator at: {}", self.current.0),
                )
                .with_hint("Conditions need one of ==, !=, <, <=, >, >="));
        }

        while self.current.0.kind.is_comparison() {
            self.emit_operator()?;
            self.parse_expression()?;
        }
        Ok(())
    }

    fn parse_expression(&mut self) -> Result<(), CompileError> {
        self.parse_term()?;
        while self.check_token(TokenKind::Plus) || self.check_token(TokenKind::Minus) {
            self.emit_operator()?;
            // `5--3` would lex as a decrement in C
            if self.check_token(TokenKind::Plus) || self.check_token(TokenKind::Minus) {
                self.sink.emit(" ");
            }
            self.parse_term()?;
        }
        Ok(())
    }

    fn parse_term(&mut self) -> Result<(), CompileError> {
        self.parse_unary()?;
        while self.check_token(TokenKind::Asterisk) || self.check_token(TokenKind::Slash) {
            self.emit_operator()?;
            self.parse_unary()?;
        }
        Ok(())
    }

    fn parse_unary(&mut self) -> Result<(), CompileError> {
        if self.check_token(TokenKind::Plus) || self.check_token(TokenKind::Minus) {
            self.emit_operator()?;
        }
        self.parse_primary()
    }

    fn parse_primary(&mut self) -> Result<(), CompileError> {
        match self.current.0.kind {
            TokenKind::Number => {}
            TokenKind::Ident => {
                if !self.symbols.is_declared(&self.current.0.text) {
                    return Err(self
                        .error(
                            ErrorCode::UndefinedVariable,
                            format!(
                                "Referencing variable before assignment: {}",
                                self.current.0.text
                            ),
                        )
                        .with_hint("Assign it with LET or INPUT before using it"));
                }
            }
            _ => {
                return Err(self.error(
                    ErrorCode::ExpectedExpression,
                    format!("Unexpected token at {}", self.current.0),
                ));
            }
        }

        let (token, _) = self.next_token()?;
        self.sink.emit(&token.text);
        Ok(())
    }

    fn emit_operator(&mut self) -> Result<(), CompileError> {
        let (token, _) = self.next_token()?;
        self.sink.emit(&token.text);
        Ok(())
    }
}
