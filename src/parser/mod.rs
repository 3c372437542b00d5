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

//! Parser module for the Teeny Tiny compiler.
//!
//! A one-pass recursive descent parser. It pulls tokens from the lexer with
//! two tokens of lookahead and pushes C text into a [`CodeSink`] as each
//! construct is recognized, so no syntax tree is built. Variables and labels
//! are tracked while parsing; GOTO targets are resolved once the whole
//! program has been read, since labels may appear after the jump.
//!
//! # Module Structure
//!
//! - `control_flow` - IF and WHILE blocks (ControlFlowParser trait)
//! - `expressions` - Comparisons and arithmetic (ExpressionParser trait)
//! - `helpers` - Token stream navigation and error handling (ParserHelpers trait)
//! - `statements` - Statement parsing (StatementParser trait)

mod control_flow;
mod expressions;
mod helpers;
mod statements;

use helpers::ParserHelpers;
use statements::StatementParser;

use crate::analyzer::{LabelTable, SymbolTable};
use crate::codegen::constants::{BLOCK_CLOSE, INCLUDES, MAIN_OPEN, MAIN_RETURN};
use crate::codegen::CodeSink;
use crate::error::{CompileError, ErrorCode, SourceLocation, Span};
use crate::lexer::{Lexer, Token, TokenKind};

/// The parser state.
pub struct Parser<'source, S: CodeSink> {
    /// Token source.
    lexer: Lexer<'source>,
    /// The token being examined.
    current: (Token, Span),
    /// One token of lookahead.
    peek: (Token, Span),
    /// Destination for generated C.
    sink: S,
    /// Variables assigned so far.
    symbols: SymbolTable,
    /// Declared labels and recorded GOTO targets.
    labels: LabelTable,
    /// Current source line, 1-based.
    line: usize,
}

impl<'source, S: CodeSink> Parser<'source, S> {
    /// Create a parser and prime the two lookahead tokens.
    pub fn new(source: &'source str, sink: S) -> Result<Self, CompileError> {
        let mut lexer = Lexer::new(source);
        let current = lexer.next_token()?;
        let peek = lexer.next_token()?;

        Ok(Self {
            lexer,
            current,
            peek,
            sink,
            symbols: SymbolTable::new(),
            labels: LabelTable::new(),
            line: 1,
        })
    }

    // ========================================
    // Program Parsing
    // ========================================

    /// program ::= {statement}
    ///
    /// Emits the prologue, translates every statement, closes `main`, and
    /// then checks that every GOTO names a declared label.
    pub fn program(&mut self) -> Result<(), CompileError> {
        for include in INCLUDES {
            self.sink.header_line(include);
        }
        self.sink.header_line(MAIN_OPEN);

        while self.check_token(TokenKind::Newline) {
            self.next_token()?;
            self.line += 1;
        }

        while !self.check_token(TokenKind::Eof) {
            self.parse_statement()?;
        }

        self.sink.emit_line(MAIN_RETURN);
        self.sink.emit_line(BLOCK_CLOSE);

        if let Some((name, span)) = self.labels.first_unresolved() {
            let line = SourceLocation::from_offset(self.lexer.source(), span.start).line;
            return Err(CompileError::new(
                ErrorCode::UndefinedLabel,
                format!(
                    "Attempting to GOTO to undeclared label: {} (line {})",
                    name, line
                ),
                span.clone(),
            )
            .with_hint(format!("Add `LABEL {}` somewhere in the program", name)));
        }

        Ok(())
    }

    /// Variables declared so far.
    pub fn symbols(&self) -> &SymbolTable {
        &self.symbols
    }

    /// Labels declared and GOTO targets recorded so far.
    pub fn labels(&self) -> &LabelTable {
        &self.labels
    }

    /// Consume the parser and return its sink.
    pub fn into_sink(self) -> S {
        self.sink
    }
}

/// Translate `source`, writing the generated C into `sink`.
///
/// On error the sink's partial contents are discarded with the parser.
pub fn parse_into<S: CodeSink>(source: &str, sink: S) -> Result<S, CompileError> {
    let mut parser = Parser::new(source, sink)?;
    parser.program()?;
    Ok(parser.into_sink())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::codegen::Emitter;
    use pretty_assertions::assert_eq;

    /// A sink that records every call, for checking emission order.
    #[derive(Debug, Default)]
    struct RecordingSink {
        calls: Vec<SinkCall>,
    }

    #[derive(Debug, PartialEq)]
    enum SinkCall {
        Emit(String),
        Line(String),
        Header(String),
    }

    impl CodeSink for RecordingSink {
        fn emit(&mut self, text: &str) {
            self.calls.push(SinkCall::Emit(text.to_string()));
        }

        fn emit_line(&mut self, text: &str) {
            self.calls.push(SinkCall::Line(text.to_string()));
        }

        fn header_line(&mut self, text: &str) {
            self.calls.push(SinkCall::Header(text.to_string()));
        }
    }

    fn header(text: &str) -> SinkCall {
        SinkCall::Header(text.to_string())
    }

    fn emit(text: &str) -> SinkCall {
        SinkCall::Emit(text.to_string())
    }

    fn line(text: &str) -> SinkCall {
        SinkCall::Line(text.to_string())
    }

    fn prologue() -> Vec<SinkCall> {
        vec![
            header("#include <stdio.h>"),
            header("#include <stdlib.h>"),
            header("#include <time.h>"),
            header("int main(void){"),
        ]
    }

    // ========================================
    // Emission Order Tests
    // ========================================

    #[test]
    fn test_empty_program_calls() {
        let sink = parse_into("", RecordingSink::default()).unwrap();
        let mut expected = prologue();
        expected.extend([line("return 0;"), line("}")]);
        assert_eq!(sink.calls, expected);
    }

    #[test]
    fn test_operands_emitted_in_order() {
        let sink = parse_into("PRINT 1 + 2 * 3", RecordingSink::default()).unwrap();
        let mut expected = prologue();
        expected.extend([
            emit("printf(\"%.2f\\n\", (float)("),
            emit("1"),
            emit("+"),
            emit("2"),
            emit("*"),
            emit("3"),
            line("));"),
            line("return 0;"),
            line("}"),
        ]);
        assert_eq!(sink.calls, expected);
    }

    #[test]
    fn test_declaration_goes_to_header_mid_body() {
        let sink = parse_into("PRINT \"a\"\nLET x = 1", RecordingSink::default()).unwrap();
        let mut expected = prologue();
        expected.extend([
            line("printf(\"a\\n\");"),
            header("float x;"),
            emit("x = "),
            emit("1"),
            line(";"),
            line("return 0;"),
            line("}"),
        ]);
        assert_eq!(sink.calls, expected);
    }

    #[test]
    fn test_sink_by_mutable_reference() {
        let mut sink = RecordingSink::default();
        parse_into("LABEL a", &mut sink).unwrap();
        assert!(sink.calls.contains(&line("a:")));
    }

    // ========================================
    // Program Tests
    // ========================================

    #[test]
    fn test_leading_blank_lines_counted() {
        let mut parser = Parser::new("\n\nfoo\n", Emitter::new()).unwrap();
        let err = parser.program().unwrap_err();
        assert_eq!(err.message, "Invalid statement at foo (line 3)");
    }

    #[test]
    fn test_forward_goto() {
        let output = parse_into("GOTO end\nPRINT 1\nLABEL end\n", Emitter::new())
            .unwrap()
            .body_text();
        assert_eq!(
            output,
            "goto end;\nprintf(\"%.2f\\n\", (float)(1));\nend:\nreturn 0;\n}\n"
        );
    }

    #[test]
    fn test_undeclared_label_reported_after_parse() {
        let mut parser = Parser::new("PRINT 1\nGOTO nowhere\nGOTO other\n", Emitter::new()).unwrap();
        let err = parser.program().unwrap_err();
        assert_eq!(err.code, ErrorCode::UndefinedLabel);
        assert_eq!(
            err.message,
            "Attempting to GOTO to undeclared label: nowhere (line 2)"
        );
        assert_eq!(err.span, Span::new(13, 20));
        assert!(parser.into_sink().body_text().ends_with("return 0;\n}\n"));
    }

    #[test]
    fn test_tables_after_parse() {
        let mut parser = Parser::new("LET a = 1\nINPUT b\nLABEL l\nGOTO l\n", Emitter::new()).unwrap();
        parser.program().unwrap();
        assert_eq!(parser.symbols().len(), 2);
        assert!(parser.symbols().is_declared("b"));
        assert!(parser.labels().is_declared("l"));
        assert!(parser.labels().first_unresolved().is_none());
    }

    #[test]
    fn test_lexical_error_surfaces() {
        let err = parse_into("PRINT 1\nLET a = 3 ! 4\n", Emitter::new()).unwrap_err();
        assert_eq!(err.code, ErrorCode::InvalidBangOperator);
    }

    #[test]
    fn test_lexical_error_in_first_tokens() {
        assert!(Parser::new("@", Emitter::new()).is_err());
    }
}
