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

//! Error types for the Teeny Tiny compiler.
//!
//! Translation is fail-fast: the first lexical, syntax or semantic problem
//! aborts the run and is returned as a single [`CompileError`]. This module
//! also renders errors for humans, either as a plain report or through
//! `ariadne`.

use std::ops::Range;

use ariadne::{Color, Config, IndexType, Label, Report, ReportKind, Source};
use thiserror::Error;

/// A source span representing a range in the source code.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Span {
    /// Start byte offset (inclusive)
    pub start: usize,
    /// End byte offset (exclusive)
    pub end: usize,
}

impl Span {
    /// Create a new span.
    pub fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    /// Get the length of this span.
    pub fn len(&self) -> usize {
        self.end - self.start
    }

    /// Check if the span is empty.
    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }
}

/// The two families of translation failures.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// A malformed token.
    Lexical,
    /// A grammar mismatch or a failed declaration/label check.
    Syntax,
}

/// Error codes for the compiler.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCode {
    // Lexical errors (E001-E025)
    InvalidCharacter,
    InvalidBangOperator,
    UnterminatedString,
    IllegalCharacterInString,
    InvalidDecimalLiteral,

    // Syntax errors (E100-E105)
    UnexpectedToken,
    ExpectedExpression,
    ExpectedStatement,
    ExpectedComparisonOperator,

    // Semantic errors (E200-E251)
    UndefinedVariable,
    ReservedIdentifier,
    DuplicateLabel,
    UndefinedLabel,
}

impl std::fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.code())
    }
}

impl ErrorCode {
    /// Get the numeric code for this error.
    pub fn code(&self) -> &'static str {
        match self {
            // Lexical errors
            ErrorCode::InvalidCharacter => "E001",
            ErrorCode::InvalidBangOperator => "E002",
            ErrorCode::UnterminatedString => "E010",
            ErrorCode::IllegalCharacterInString => "E011",
            ErrorCode::InvalidDecimalLiteral => "E025",

            // Syntax errors
            ErrorCode::UnexpectedToken => "E100",
            ErrorCode::ExpectedExpression => "E103",
            ErrorCode::ExpectedStatement => "E104",
            ErrorCode::ExpectedComparisonOperator => "E105",

            // Semantic errors
            ErrorCode::UndefinedVariable => "E200",
            ErrorCode::ReservedIdentifier => "E201",
            ErrorCode::DuplicateLabel => "E250",
            ErrorCode::UndefinedLabel => "E251",
        }
    }

    /// Classify this code as lexical or syntax/semantic.
    pub fn kind(&self) -> ErrorKind {
        match self {
            ErrorCode::InvalidCharacter
            | ErrorCode::InvalidBangOperator
            | ErrorCode::UnterminatedString
            | ErrorCode::IllegalCharacterInString
            | ErrorCode::InvalidDecimalLiteral => ErrorKind::Lexical,
            _ => ErrorKind::Syntax,
        }
    }
}

/// A compiler error with source location.
#[derive(Debug, Error)]
#[error("[{code}] {message}")]
pub struct CompileError {
    /// The error code.
    pub code: ErrorCode,
    /// The error message.
    pub message: String,
    /// The source span where the error occurred.
    pub span: Span,
    /// Optional hint for fixing the error.
    pub hint: Option<String>,
}

impl CompileError {
    /// Create a new compile error.
    pub fn new(code: ErrorCode, message: impl Into<String>, span: Span) -> Self {
        Self {
            code,
            message: message.into(),
            span,
            hint: None,
        }
    }

    /// Add a hint to this error.
    pub fn with_hint(mut self, hint: impl Into<String>) -> Self {
        self.hint = Some(hint.into());
        self
    }

    /// Get the error code string.
    pub fn code_str(&self) -> &'static str {
        self.code.code()
    }

    /// Whether the error was raised by the tokenizer.
    pub fn is_lexical(&self) -> bool {
        self.code.kind() == ErrorKind::Lexical
    }
}

/// Result type for compiler operations.
pub type Result<T> = std::result::Result<T, CompileError>;

/// Source location with line and column information.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceLocation {
    /// Line number (1-indexed).
    pub line: usize,
    /// Column number (1-indexed).
    pub column: usize,
    /// The content of the line.
    pub line_content: String,
}

impl SourceLocation {
    /// Calculate line and column from a byte offset in source code.
    pub fn from_offset(source: &str, offset: usize) -> Self {
        let mut offset = offset.min(source.len());
        while !source.is_char_boundary(offset) {
            offset -= 1;
        }
        let before = &source[..offset];

        let line = before.chars().filter(|&c| c == '\n').count() + 1;

        let last_newline = before.rfind('\n').map(|i| i + 1).unwrap_or(0);
        let column = before[last_newline..].chars().count() + 1;

        let line_end = source[offset..]
            .find('\n')
            .map(|i| offset + i)
            .unwrap_or(source.len());
        let line_content = source[last_newline..line_end].to_string();

        Self {
            line,
            column,
            line_content,
        }
    }
}

/// Format an error with source context.
pub fn format_error(error: &CompileError, source: &str, filename: Option<&str>) -> String {
    let loc = SourceLocation::from_offset(source, error.span.start);
    let filename = filename.unwrap_or("<input>");

    let mut output = String::new();

    // Error header
    output.push_str(&format!("error[{}]: {}\n", error.code_str(), error.message));

    // Location
    output.push_str(&format!("  --> {}:{}:{}\n", filename, loc.line, loc.column));

    // Source context
    let line_num_width = loc.line.to_string().len();
    output.push_str(&format!("{:>width$} |\n", "", width = line_num_width));
    output.push_str(&format!(
        "{:>width$} | {}\n",
        loc.line,
        loc.line_content,
        width = line_num_width
    ));

    // Underline the error span
    let underline_start = loc.column - 1;
    let underline_len = error
        .span
        .len()
        .min(loc.line_content.len().saturating_sub(underline_start))
        .max(1);
    output.push_str(&format!(
        "{:>width$} | {:>start$}{}\n",
        "",
        "",
        "^".repeat(underline_len),
        width = line_num_width,
        start = underline_start
    ));

    if let Some(hint) = &error.hint {
        output.push_str(&format!(
            "{:>width$} = hint: {}\n",
            "",
            hint,
            width = line_num_width
        ));
    }

    output
}

/// Render an error as an `ariadne` report.
///
/// Falls back to [`format_error`] if the report cannot be written.
pub fn render_report(
    error: &CompileError,
    source: &str,
    filename: Option<&str>,
    color: bool,
) -> String {
    let filename = filename.unwrap_or("<input>");
    let range = label_range(&error.span, source);

    let mut builder = Report::build(ReportKind::Error, filename, range.start)
        .with_code(error.code_str())
        .with_message(&error.message)
        .with_config(
            Config::default()
                .with_color(color)
                .with_index_type(IndexType::Byte),
        )
        .with_label(
            Label::new((filename, range))
                .with_message(&error.message)
                .with_color(Color::Red),
        );
    if let Some(hint) = &error.hint {
        builder = builder.with_help(hint);
    }

    let mut buffer = Vec::new();
    match builder
        .finish()
        .write((filename, Source::from(source)), &mut buffer)
    {
        Ok(()) => String::from_utf8_lossy(&buffer).into_owned(),
        Err(_) => format_error(error, source, Some(filename)),
    }
}

/// Clamp a span into the source on char boundaries and widen empty spans
/// to one character.
fn label_range(span: &Span, source: &str) -> Range<usize> {
    let floor = |offset: usize| {
        let mut offset = offset.min(source.len());
        while !source.is_char_boundary(offset) {
            offset -= 1;
        }
        offset
    };

    let start = floor(span.start);
    let end = floor(span.end).max(start);
    if start < end {
        return start..end;
    }

    match source[start..].chars().next() {
        Some(c) => start..start + c.len_utf8(),
        None => match source[..start].chars().next_back() {
            Some(c) => start - c.len_utf8()..start,
            None => start..end,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_span_creation() {
        let span = Span::new(10, 20);
        assert_eq!(span.start, 10);
        assert_eq!(span.end, 20);
        assert_eq!(span.len(), 10);
        assert!(!span.is_empty());
    }

    #[test]
    fn test_error_code() {
        assert_eq!(ErrorCode::InvalidCharacter.code(), "E001");
        assert_eq!(ErrorCode::UnexpectedToken.code(), "E100");
        assert_eq!(ErrorCode::UndefinedVariable.code(), "E200");
        assert_eq!(ErrorCode::ReservedIdentifier.code(), "E201");
        assert_eq!(ErrorCode::UndefinedLabel.code(), "E251");
    }

    #[test]
    fn test_error_kind() {
        assert_eq!(ErrorCode::InvalidDecimalLiteral.kind(), ErrorKind::Lexical);
        assert_eq!(ErrorCode::UnterminatedString.kind(), ErrorKind::Lexical);
        assert_eq!(ErrorCode::UnexpectedToken.kind(), ErrorKind::Syntax);
        assert_eq!(ErrorCode::DuplicateLabel.kind(), ErrorKind::Syntax);
    }

    #[test]
    fn test_compile_error() {
        let error = CompileError::new(
            ErrorCode::UndefinedVariable,
            "Referencing variable before assignment: foo",
            Span::new(0, 3),
        )
        .with_hint("Assign it with LET or INPUT first");

        assert_eq!(error.code_str(), "E200");
        assert!(error.hint.is_some());
        assert!(!error.is_lexical());
        assert_eq!(
            error.to_string(),
            "[E200] Referencing variable before assignment: foo"
        );
    }

    #[test]
    fn test_source_location() {
        let loc = SourceLocation::from_offset("LET a = 1\nPRINT b\n", 16);
        assert_eq!(loc.line, 2);
        assert_eq!(loc.column, 7);
        assert_eq!(loc.line_content, "PRINT b");
    }

    #[test]
    fn test_source_location_past_end() {
        let loc = SourceLocation::from_offset("PRINT 1", 100);
        assert_eq!(loc.line, 1);
        assert_eq!(loc.column, 8);
    }

    #[test]
    fn test_format_error() {
        let source = "LET a = 1\nPRINT b\n";
        let error = CompileError::new(
            ErrorCode::UndefinedVariable,
            "Referencing variable before assignment: b",
            Span::new(16, 17),
        );
        let output = format_error(&error, source, Some("demo.teeny"));
        assert!(output.starts_with("error[E200]: Referencing variable before assignment: b\n"));
        assert!(output.contains("--> demo.teeny:2:7"));
        assert!(output.contains("2 | PRINT b"));
        assert!(output.contains("^"));
    }

    #[test]
    fn test_render_report_plain() {
        let source = "GOTO nowhere\n";
        let error = CompileError::new(
            ErrorCode::UndefinedLabel,
            "Attempting to GOTO to undeclared label: nowhere",
            Span::new(5, 12),
        )
        .with_hint("Declare it with LABEL nowhere");
        let output = render_report(&error, source, Some("demo.teeny"), false);
        assert!(output.contains("E251"));
        assert!(output.contains("undeclared label: nowhere"));
        assert!(output.contains("demo.teeny"));
    }

    #[test]
    fn test_label_range_empty_span_at_end() {
        assert_eq!(label_range(&Span::new(4, 4), "abcd"), 3..4);
        assert_eq!(label_range(&Span::new(1, 1), "abcd"), 1..2);
        assert_eq!(label_range(&Span::new(9, 12), "abcd"), 3..4);
    }

    #[test]
    fn test_label_range_multibyte() {
        assert_eq!(label_range(&Span::new(1, 1), "a\u{e9}b"), 1..3);
        assert_eq!(label_range(&Span::new(2, 2), "a\u{e9}b"), 1..3);
        assert_eq!(label_range(&Span::new(0, 0), ""), 0..0);
    }
}
