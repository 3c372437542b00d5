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

//! Statement parsing for the parser.
//!
//! Each statement is translated to C as soon as it is recognized.

use log::debug;

use super::control_flow::ControlFlowParser;
use super::expressions::ExpressionParser;
use super::helpers::ParserHelpers;
use super::Parser;
use crate::codegen::constants::{PRINT_NUMBER_CLOSE, PRINT_NUMBER_OPEN, RND_SEED, STATEMENT_END};
use crate::codegen::{fragments, CodeSink};
use crate::error::{CompileError, ErrorCode, Span};
use crate::lexer::{Token, TokenKind};

/// Extension trait for statement parsing.
pub trait StatementParser {
    /// Parse one statement including its terminating newlines.
    fn parse_statement(&mut self) -> Result<(), CompileError>;

    /// nl ::= '\n'+
    fn parse_newline(&mut self) -> Result<(), CompileError>;

    /// "PRINT" (expression | string)
    fn parse_print(&mut self) -> Result<(), CompileError>;

    /// "LABEL" ident
    fn parse_label(&mut self) -> Result<(), CompileError>;

    /// "GOTO" ident
    fn parse_goto(&mut self) -> Result<(), CompileError>;

    /// "LET" ident "=" expression
    fn parse_let(&mut self) -> Result<(), CompileError>;

    /// "INPUT" ident
    fn parse_input(&mut self) -> Result<(), CompileError>;

    /// "RND" ident
    fn parse_rnd(&mut self) -> Result<(), CompileError>;

    /// Consume an identifier that is written into the C output as a name.
    fn match_c_name(&mut self) -> Result<(Token, Span), CompileError>;

    /// Declare a variable on first assignment.
    fn declare_variable(&mut self, name: &str);
}

impl<'source, S: CodeSink> StatementParser for Parser<'source, S> {
    fn parse_statement(&mut self) -> Result<(), CompileError> {
        let kind = self.current.0.kind;
        debug!("line {}: {} statement", self.line, kind);

        match kind {
            TokenKind::Print => self.parse_print()?,
            TokenKind::If => self.parse_if()?,
            TokenKind::While => self.parse_while()?,
            TokenKind::Label => self.parse_label()?,
            TokenKind::Goto => self.parse_goto()?,
            TokenKind::Let => self.parse_let()?,
            TokenKind::Input => self.parse_input()?,
            TokenKind::Rnd => self.parse_rnd()?,
            TokenKind::Else | TokenKind::Elseif | TokenKind::Int | TokenKind::Abs => {
                return Err(self
                    .error(
                        ErrorCode::ExpectedStatement,
                        format!("Invalid statement at {}", self.current.0),
                    )
                    .with_hint(format!("{} is reserved but not supported", kind)));
            }
            _ => {
                return Err(self.error(
                    ErrorCode::ExpectedStatement,
                    format!("Invalid statement at {}", self.current.0),
                ));
            }
        }

        self.parse_newline()
    }

    fn parse_newline(&mut self) -> Result<(), CompileError> {
        self.match_token(TokenKind::Newline)?;
        self.line += 1;

        while self.check_token(TokenKind::Newline) {
            self.next_token()?;
            self.line += 1;
        }
        Ok(())
    }

    fn parse_print(&mut self) -> Result<(), CompileError> {
        self.next_token()?;

        if self.check_token(TokenKind::String) {
            let (token, _) = self.next_token()?;
            self.sink.emit_line(&fragments::print_string(&token.text));
        } else {
            self.sink.emit(PRINT_NUMBER_OPEN);
            self.parse_expression()?;
            self.sink.emit_line(PRINT_NUMBER_CLOSE);
        }
        Ok(())
    }

    fn parse_label(&mut self) -> Result<(), CompileError> {
        self.next_token()?;

        if self.check_token(TokenKind::Ident) && self.labels.is_declared(&self.current.0.text) {
            return Err(self
                .error(
                    ErrorCode::DuplicateLabel,
                    format!("Label already exists: {}", self.current.0.text),
                )
                .with_hint("Each LABEL name may be declared only once"));
        }

        let (token, _) = self.match_c_name()?;
        self.labels.declare(&token.text);
        debug!("declared label {}", token.text);
        self.sink.emit_line(&fragments::label(&token.text));
        Ok(())
    }

    fn parse_goto(&mut self) -> Result<(), CompileError> {
        self.next_token()?;
        let (token, span) = self.match_c_name()?;
        self.labels.record_goto(&token.text, span);
        self.sink.emit_line(&fragments::goto(&token.text));
        Ok(())
    }

    fn parse_let(&mut self) -> Result<(), CompileError> {
        self.next_token()?;
        let (token, _) = self.match_c_name()?;
        self.declare_variable(&token.text);

        self.sink.emit(&fragments::assignment_target(&token.text));
        self.match_token(TokenKind::Eq)?;
        self.parse_expression()?;
        self.sink.emit_line(STATEMENT_END);
        Ok(())
    }

    fn parse_input(&mut self) -> Result<(), CompileError> {
        self.next_token()?;
        let (token, _) = self.match_c_name()?;
        self.declare_variable(&token.text);

        for line in fragments::input_read(&token.text) {
            self.sink.emit_line(&line);
        }
        Ok(())
    }

    fn parse_rnd(&mut self) -> Result<(), CompileError> {
        self.next_token()?;
        let (token, _) = self.match_c_name()?;

        // The binding is a local declaration; the symbol table is left alone.
        self.sink.emit_line(RND_SEED);
        self.sink.emit_line(&fragments::rnd_binding(&token.text));
        Ok(())
    }

    fn match_c_name(&mut self) -> Result<(Token, Span), CompileError> {
        if self.check_token(TokenKind::Ident) && fragments::is_reserved(&self.current.0.text) {
            return Err(self
                .error(
                    ErrorCode::ReservedIdentifier,
                    format!("Name is reserved in the generated C: {}", self.current.0.text),
                )
                .with_hint("Pick a name that is not a C keyword or C library name"));
        }
        self.match_token(TokenKind::Ident)
    }

    fn declare_variable(&mut self, name: &str) {
        if self.symbols.declare(name) {
            debug!("declared variable {}", name);
            self.sink.header_line(&fragments::declaration(name));
        }
    }
}
