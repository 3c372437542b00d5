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

//! Control flow parsing for the parser.
//!
//! Handles IF/THEN/ENDIF and WHILE/REPEAT/ENDWHILE blocks. The closing
//! keyword's trailing newline is consumed by the enclosing statement.

use super::expressions::ExpressionParser;
use super::helpers::ParserHelpers;
use super::statements::StatementParser;
use super::Parser;
use crate::codegen::constants::{BLOCK_CLOSE, BLOCK_OPEN, IF_OPEN, WHILE_OPEN};
use crate::codegen::CodeSink;
use crate::error::CompileError;
use crate::lexer::TokenKind;

/// Extension trait for control flow parsing.
pub trait ControlFlowParser {
    /// "IF" comparison "THEN" nl {statement} "ENDIF"
    fn parse_if(&mut self) -> Result<(), CompileError>;

    /// "WHILE" comparison "REPEAT" nl {statement} "ENDWHILE"
    fn parse_while(&mut self) -> Result<(), CompileError>;

    /// Parse `opener comparison keyword nl {statement} terminator`.
    fn parse_conditional_block(
        &mut self,
        opener: &str,
        keyword: TokenKind,
        terminator: TokenKind,
    ) -> Result<(), CompileError>;
}

impl<'source, S: CodeSink> ControlFlowParser for Parser<'source, S> {
    fn parse_if(&mut self) -> Result<(), CompileError> {
        self.parse_conditional_block(IF_OPEN, TokenKind::Then, TokenKind::Endif)
    }

    fn parse_while(&mut self) -> Result<(), CompileError> {
        self.parse_conditional_block(WHILE_OPEN, TokenKind::Repeat, TokenKind::Endwhile)
    }

    fn parse_conditional_block(
        &mut self,
        opener: &str,
        keyword: TokenKind,
        terminator: TokenKind,
    ) -> Result<(), CompileError> {
        self.next_token()?;
        self.sink.emit(opener);
        self.parse_comparison()?;

        self.match_token(keyword)?;
        self.parse_newline()?;
        self.sink.emit_line(BLOCK_OPEN);

        while !self.check_token(terminator) && !self.check_token(TokenKind::Eof) {
            self.parse_statement()?;
        }

        self.match_token(terminator)?;
        self.sink.emit_line(BLOCK_CLOSE);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::codegen::Emitter;
    use crate::error::ErrorCode;

    fn body(source: &str) -> Result<String, CompileError> {
        let mut parser = Parser::new(source, Emitter::new())?;
        parser.symbols.declare("a");
        while !parser.check_token(TokenKind::Eof) {
            parser.parse_statement()?;
        }
        Ok(parser.into_sink().body_text())
    }

    #[test]
    fn test_if_block() {
        assert_eq!(
            body("IF a > 1 THEN\nPRINT a\nENDIF").unwrap(),
            "if(a>1){\nprintf(\"%.2f\\n\", (float)(a));\n}\n"
        );
    }

    #[test]
    fn test_empty_while_block() {
        assert_eq!(body("WHILE a < 10 REPEAT\nENDWHILE").unwrap(), "while(a<10){\n}\n");
    }

    #[test]
    fn test_nested_blocks() {
        let source = "WHILE a < 3 REPEAT\nIF a == 1 THEN\nPRINT \"one\"\nENDIF\nLET a = a + 1\nENDWHILE\n";
        assert_eq!(
            body(source).unwrap(),
            "while(a<3){\nif(a==1){\nprintf(\"one\\n\");\n}\na = a+1;\n}\n"
        );
    }

    #[test]
    fn test_blank_lines_inside_block() {
        assert_eq!(
            body("IF 1 == 1 THEN\n\n\nPRINT \"x\"\n\nENDIF").unwrap(),
            "if(1==1){\nprintf(\"x\\n\");\n}\n"
        );
    }

    #[test]
    fn test_missing_then() {
        let err = body("IF a > 1\nPRINT a\nENDIF").unwrap_err();
        assert_eq!(err.code, ErrorCode::UnexpectedToken);
        assert!(err.message.starts_with("Expected THEN, got NEWLINE"));
    }

    #[test]
    fn test_unclosed_block() {
        let err = body("WHILE a < 3 REPEAT\nPRINT a\n").unwrap_err();
        assert_eq!(err.code, ErrorCode::UnexpectedToken);
        assert!(err.message.starts_with("Expected ENDWHILE, got EOF"));
    }

    #[test]
    fn test_wrong_terminator() {
        let err = body("IF a > 1 THEN\nENDWHILE\n").unwrap_err();
        assert_eq!(err.code, ErrorCode::ExpectedStatement);
        assert!(err.message.starts_with("Invalid statement at ENDWHILE"));
    }
}
