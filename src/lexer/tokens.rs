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

//! Token definitions for the Teeny Tiny language.

/// The category of a token.
///
/// The set is closed. `Elseif`, `Else`, `Int` and `Abs` are reserved words
/// with no grammar production; using them as a statement is a syntax error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
    /// End of input.
    Eof,
    /// End of line; terminates statements.
    Newline,
    /// Number literal, optionally with a decimal part.
    Number,
    /// Identifier (variable or label name).
    Ident,
    /// String literal without its quotes.
    String,

    // Keywords
    /// `LABEL` - jump target declaration.
    Label,
    /// `GOTO` - unconditional jump.
    Goto,
    /// `PRINT` - print a string or a number.
    Print,
    /// `INPUT` - read a number.
    Input,
    /// `LET` - assignment.
    Let,
    /// `IF` - conditional.
    If,
    /// `THEN` - end of an IF condition.
    Then,
    /// `ENDIF` - end of an IF block.
    Endif,
    /// `WHILE` - loop.
    While,
    /// `REPEAT` - end of a WHILE condition.
    Repeat,
    /// `ENDWHILE` - end of a WHILE block.
    Endwhile,
    /// `ELSEIF` - reserved.
    Elseif,
    /// `ELSE` - reserved.
    Else,
    /// `RND` - bind a random number.
    Rnd,
    /// `INT` - reserved.
    Int,
    /// `ABS` - reserved.
    Abs,

    // Operators
    /// `=` - assignment.
    Eq,
    /// `+` - addition or unary plus.
    Plus,
    /// `-` - subtraction or negation.
    Minus,
    /// `*` - multiplication.
    Asterisk,
    /// `/` - division.
    Slash,
    /// `==` - equal.
    EqEq,
    /// `!=` - not equal.
    NotEq,
    /// `<` - less than.
    Lt,
    /// `<=` - less or equal.
    LtEq,
    /// `>` - greater than.
    Gt,
    /// `>=` - greater or equal.
    GtEq,
}

impl TokenKind {
    /// Look up a keyword by its exact, case-sensitive spelling.
    pub fn from_keyword(s: &str) -> Option<TokenKind> {
        let kind = match s {
            "LABEL" => TokenKind::Label,
            "GOTO" => TokenKind::Goto,
            "PRINT" => TokenKind::Print,
            "INPUT" => TokenKind::Input,
            "LET" => TokenKind::Let,
            "IF" => TokenKind::If,
            "THEN" => TokenKind::Then,
            "ENDIF" => TokenKind::Endif,
            "WHILE" => TokenKind::While,
            "REPEAT" => TokenKind::Repeat,
            "ENDWHILE" => TokenKind::Endwhile,
            "ELSEIF" => TokenKind::Elseif,
            "ELSE" => TokenKind::Else,
            "RND" => TokenKind::Rnd,
            "INT" => TokenKind::Int,
            "ABS" => TokenKind::Abs,
            _ => return None,
        };
        Some(kind)
    }

    /// Check if this kind is a keyword.
    pub fn is_keyword(&self) -> bool {
        matches!(
            self,
            TokenKind::Label
                | TokenKind::Goto
                | TokenKind::Print
                | TokenKind::Input
                | TokenKind::Let
                | TokenKind::If
                | TokenKind::Then
                | TokenKind::Endif
                | TokenKind::While
                | TokenKind::Repeat
                | TokenKind::Endwhile
                | TokenKind::Elseif
                | TokenKind::Else
                | TokenKind::Rnd
                | TokenKind::Int
                | TokenKind::Abs
        )
    }

    /// Check if this kind is an operator.
    pub fn is_operator(&self) -> bool {
        matches!(
            self,
            TokenKind::Eq
                | TokenKind::Plus
                | TokenKind::Minus
                | TokenKind::Asterisk
                | TokenKind::Slash
        ) || self.is_comparison()
    }

    /// Check if this kind is a comparison operator.
    pub fn is_comparison(&self) -> bool {
        matches!(
            self,
            TokenKind::EqEq
                | TokenKind::NotEq
                | TokenKind::Lt
                | TokenKind::LtEq
                | TokenKind::Gt
                | TokenKind::GtEq
        )
    }

    /// Get the name of this kind as used in diagnostics.
    pub fn name(&self) -> &'static str {
        match self {
            TokenKind::Eof => "EOF",
            TokenKind::Newline => "NEWLINE",
            TokenKind::Number => "NUMBER",
            TokenKind::Ident => "IDENT",
            TokenKind::String => "STRING",
            TokenKind::Label => "LABEL",
            TokenKind::Goto => "GOTO",
            TokenKind::Print => "PRINT",
            TokenKind::Input => "INPUT",
            TokenKind::Let => "LET",
            TokenKind::If => "IF",
            TokenKind::Then => "THEN",
            TokenKind::Endif => "ENDIF",
            TokenKind::While => "WHILE",
            TokenKind::Repeat => "REPEAT",
            TokenKind::Endwhile => "ENDWHILE",
            TokenKind::Elseif => "ELSEIF",
            TokenKind::Else => "ELSE",
            TokenKind::Rnd => "RND",
            TokenKind::Int => "INT",
            TokenKind::Abs => "ABS",
            TokenKind::Eq => "EQ",
            TokenKind::Plus => "PLUS",
            TokenKind::Minus => "MINUS",
            TokenKind::Asterisk => "ASTERISK",
            TokenKind::Slash => "SLASH",
            TokenKind::EqEq => "EQEQ",
            TokenKind::NotEq => "NOTEQ",
            TokenKind::Lt => "LT",
            TokenKind::LtEq => "LTEQ",
            TokenKind::Gt => "GT",
            TokenKind::GtEq => "GTEQ",
        }
    }
}

impl std::fmt::Display for TokenKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// A token: the exact source text and its category.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    /// The source text. String tokens exclude their quotes; EOF is empty.
    pub text: String,
    /// The token category.
    pub kind: TokenKind,
}

impl Token {
    /// Create a new token.
    pub fn new(text: impl Into<String>, kind: TokenKind) -> Self {
        Self {
            text: text.into(),
            kind,
        }
    }

    /// Create the end-of-input token.
    pub fn eof() -> Self {
        Self::new("", TokenKind::Eof)
    }

    /// Classify a run of letters as a keyword or an identifier.
    pub fn from_keyword_or_identifier(s: &str) -> Token {
        let kind = TokenKind::from_keyword(s).unwrap_or(TokenKind::Ident);
        Token::new(s, kind)
    }
}

impl std::fmt::Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.kind {
            TokenKind::Number | TokenKind::Ident => write!(f, "{}", self.text),
            TokenKind::String => write!(f, "\"{}\"", self.text),
            _ => write!(f, "{}", self.kind),
        }
    }
}
