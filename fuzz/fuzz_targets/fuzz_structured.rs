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

//! Structure-aware fuzz target for the Teeny Tiny parser.
//!
//! Builds programs from well-formed statements so the fuzzer spends its
//! time in the parser rather than in the lexer's error paths. Any program
//! that only reads assigned variables and jumps to declared labels must
//! translate.
//!
//! Run with:
//!   cargo +nightly fuzz run fuzz_structured

#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;

const NAMES: [&str; 4] = ["a", "b", "c", "d"];
const COMPARISONS: [&str; 6] = ["==", "!=", "<", "<=", ">", ">="];
const OPERATORS: [&str; 4] = ["+", "-", "*", "/"];

#[derive(Arbitrary, Debug)]
enum Statement {
    Print(u8),
    PrintText(u8),
    Let(u8, u16, u8, u8),
    Input(u8),
    Rnd(u8),
    If(u8, u8, Vec<Statement>),
    While(u8, u8, Vec<Statement>),
    Goto(u8),
}

fn name(index: u8) -> &'static str {
    NAMES[index as usize % NAMES.len()]
}

fn render(statements: &[Statement], source: &mut String) {
    for statement in statements {
        match statement {
            Statement::Print(v) => source.push_str(&format!("PRINT {}\n", name(*v))),
            Statement::PrintText(n) => source.push_str(&format!("PRINT \"line {}\"\n", n)),
            Statement::Let(v, value, op, w) => source.push_str(&format!(
                "LET {} = {} {} {}\n",
                name(*v),
                value,
                OPERATORS[*op as usize % OPERATORS.len()],
                name(*w)
            )),
            Statement::Input(v) => source.push_str(&format!("INPUT {}\n", name(*v))),
            Statement::Rnd(n) => source.push_str(&format!("RND r{}\n", name(*n))),
            Statement::If(v, cmp, body) => {
                source.push_str(&format!(
                    "IF {} {} 0 THEN\n",
                    name(*v),
                    COMPARISONS[*cmp as usize % COMPARISONS.len()]
                ));
                render(body, source);
                source.push_str("ENDIF\n");
            }
            Statement::While(v, cmp, body) => {
                source.push_str(&format!(
                    "WHILE {} {} 0 REPEAT\n",
                    name(*v),
                    COMPARISONS[*cmp as usize % COMPARISONS.len()]
                ));
                render(body, source);
                source.push_str("ENDWHILE\n");
            }
            Statement::Goto(v) => source.push_str(&format!("GOTO {}\n", name(*v))),
        }
    }
}

fuzz_target!(|statements: Vec<Statement>| {
    // Every variable is assigned and every label declared up front.
    let mut source = String::new();
    for name in NAMES {
        source.push_str(&format!("LET {} = 0\nLABEL {}\n", name, name));
    }
    render(&statements, &mut source);

    if let Err(e) = teenytiny::translate(&source) {
        panic!("valid program rejected: {}\n{}", e, source);
    }
});
