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

//! Property-based tests for the Teeny Tiny compiler.
//!
//! These tests verify important invariants and properties that should
//! hold for all inputs, using proptest for random input generation.

use proptest::prelude::*;
use teenytiny::codegen::fragments::is_reserved;
use teenytiny::{lexer, translate, TokenKind};

/// Length of the source as the lexer sees it, with its trailing newline.
fn normalized_len(source: &str) -> usize {
    if source.ends_with('\n') {
        source.len()
    } else {
        source.len() + 1
    }
}

// ============================================================================
// Lexer Property Tests
// ============================================================================

proptest! {
    /// Property: Token spans are well formed and within source bounds.
    #[test]
    fn prop_lexer_spans_in_bounds(source in "[a-zA-Z0-9 +\\-*/=<>!.\"#\\n]{0,200}") {
        if let Ok(tokens) = lexer::tokenize(&source) {
            let source_len = normalized_len(&source);
            for (token, span) in &tokens {
                prop_assert!(span.start <= span.end, "Invalid span {:?}", span);
                prop_assert!(
                    span.end <= source_len,
                    "Token {:?} span end {} exceeds source length {}",
                    token, span.end, source_len
                );
            }
        }
    }

    /// Property: Token spans are ordered and non-overlapping.
    #[test]
    fn prop_lexer_spans_non_overlapping(source in "[a-zA-Z0-9 +\\-*/=<>\\n]{0,200}") {
        if let Ok(tokens) = lexer::tokenize(&source) {
            for window in tokens.windows(2) {
                let (_, span1) = &window[0];
                let (_, span2) = &window[1];
                prop_assert!(
                    span1.end <= span2.start,
                    "Overlapping spans: {:?} and {:?}", span1, span2
                );
            }
        }
    }

    /// Property: A successful token stream ends with exactly one EOF,
    /// preceded by a NEWLINE.
    #[test]
    fn prop_lexer_ends_with_newline_eof(source in "[a-zA-Z0-9 +\\-*/=<>\\n]{0,200}") {
        if let Ok(tokens) = lexer::tokenize(&source) {
            let kinds: Vec<_> = tokens.iter().map(|(t, _)| t.kind).collect();
            prop_assert!(kinds.len() >= 2);
            prop_assert_eq!(kinds[kinds.len() - 1], TokenKind::Eof);
            prop_assert_eq!(kinds[kinds.len() - 2], TokenKind::Newline);
            prop_assert_eq!(kinds.iter().filter(|k| **k == TokenKind::Eof).count(), 1);
        }
    }

    /// Property: Lexer produces consistent results (deterministic).
    #[test]
    fn prop_lexer_deterministic(source in "[ -~\\n]{0,200}") {
        let result1 = lexer::tokenize(&source);
        let result2 = lexer::tokenize(&source);

        match (result1, result2) {
            (Ok(tokens1), Ok(tokens2)) => prop_assert_eq!(tokens1, tokens2),
            (Err(e1), Err(e2)) => {
                prop_assert_eq!(e1.code, e2.code);
                prop_assert_eq!(e1.span, e2.span);
            }
            _ => prop_assert!(false, "Inconsistent results on same input"),
        }
    }

    /// Property: Number literals are scanned as one token with their exact text.
    #[test]
    fn prop_number_text_preserved(number in "[0-9]{1,8}(\\.[0-9]{1,4})?") {
        let tokens = lexer::tokenize(&number).unwrap();
        prop_assert_eq!(tokens.len(), 3);
        prop_assert_eq!(tokens[0].0.kind, TokenKind::Number);
        prop_assert_eq!(&tokens[0].0.text, &number);
    }

    /// Property: A letter run is a keyword exactly when its spelling is one.
    #[test]
    fn prop_word_classification(word in "[A-Za-z]{1,12}") {
        let tokens = lexer::tokenize(&word).unwrap();
        let token = &tokens[0].0;
        prop_assert_eq!(&token.text, &word);
        match TokenKind::from_keyword(&word) {
            Some(kind) => prop_assert_eq!(token.kind, kind),
            None => prop_assert_eq!(token.kind, TokenKind::Ident),
        }
    }
}

// ============================================================================
// Translation Property Tests
// ============================================================================

/// Strategy for a program that assigns every variable before reading it.
fn declared_program() -> impl Strategy<Value = (Vec<String>, String)> {
    (
        prop::collection::vec("[a-z]{1,6}", 1..8),
        prop::collection::vec(0u32..1000, 1..8),
        prop::sample::select(vec!["+", "-", "*", "/"]),
    )
        .prop_filter("keywords are not identifiers", |(names, _, _)| {
            names
                .iter()
                .all(|n| TokenKind::from_keyword(n).is_none() && !is_reserved(n))
        })
        .prop_map(|(names, values, op)| {
            let mut source = String::new();
            for (i, name) in names.iter().enumerate() {
                source.push_str(&format!("LET {} = {}\n", name, values[i % values.len()]));
            }
            for window in names.windows(2) {
                source.push_str(&format!("PRINT {} {} {}\n", window[0], op, window[1]));
            }
            (names, source)
        })
}

proptest! {
    /// Property: Translation is deterministic.
    #[test]
    fn prop_translate_deterministic((_, source) in declared_program()) {
        let first = translate(&source).unwrap();
        let second = translate(&source).unwrap();
        prop_assert_eq!(first, second);
    }

    /// Property: Every assigned variable is declared exactly once.
    #[test]
    fn prop_variables_declared_once((names, source) in declared_program()) {
        let output = translate(&source).unwrap();
        for name in &names {
            let declaration = format!("float {};\n", name);
            prop_assert_eq!(output.matches(declaration.as_str()).count(), 1);
        }
    }

    /// Property: Declarations come before the first statement.
    #[test]
    fn prop_declarations_in_header((names, source) in declared_program()) {
        let output = translate(&source).unwrap();
        let first_statement = output.find(&format!("{} = ", names[0])).unwrap();
        let last_declaration = output.rfind("float ").unwrap();
        prop_assert!(last_declaration < first_statement);
    }

    /// Property: Safe string text is printed verbatim.
    #[test]
    fn prop_print_string_verbatim(text in "[ !#$&-\\[\\]-~]{0,40}") {
        let output = translate(&format!("PRINT \"{}\"\n", text)).unwrap();
        let expected = format!("printf(\"{}\\n\");\n", text);
        prop_assert!(output.contains(&expected));
    }

    /// Property: Reading a never-assigned variable always fails.
    #[test]
    fn prop_undeclared_read_fails(name in "[a-z]{1,6}") {
        prop_assume!(TokenKind::from_keyword(&name).is_none());
        let err = translate(&format!("PRINT {}\n", name)).unwrap_err();
        prop_assert_eq!(err.code, teenytiny::ErrorCode::UndefinedVariable);
    }

    /// Property: A name is either accepted as a variable or rejected as
    /// reserved by C, never passed through as broken C.
    #[test]
    fn prop_reserved_names_rejected(name in "[a-z]{1,6}") {
        prop_assume!(TokenKind::from_keyword(&name).is_none());
        let result = translate(&format!("LET {} = 1\n", name));
        if is_reserved(&name) {
            prop_assert_eq!(result.unwrap_err().code, teenytiny::ErrorCode::ReservedIdentifier);
        } else {
            prop_assert!(result.is_ok());
        }
    }
}
