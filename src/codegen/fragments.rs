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

//! C statements built from source names and literals.
//!
//! Names and string text are inserted verbatim. The lexer guarantees that
//! identifiers are plain letters and that strings contain no `%`, `\` or
//! line breaks; the parser rejects names for which [`is_reserved`] holds.

use super::constants::{C_RESERVED_NAMES, NUMERIC_TYPE, RND_MAX};

/// Whether `name` would clash with C when inserted verbatim.
pub fn is_reserved(name: &str) -> bool {
    C_RESERVED_NAMES.contains(&name)
}

/// Print a string literal followed by a newline.
pub fn print_string(text: &str) -> String {
    format!("printf(\"{}\\n\");", text)
}

/// Declare a numeric variable.
pub fn declaration(name: &str) -> String {
    format!("{} {};", NUMERIC_TYPE, name)
}

/// Left-hand side of an assignment; the expression follows.
pub fn assignment_target(name: &str) -> String {
    format!("{} = ", name)
}

/// A jump target.
pub fn label(name: &str) -> String {
    format!("{}:", name)
}

/// An unconditional jump.
pub fn goto(name: &str) -> String {
    format!("goto {};", name)
}

/// Read a number into `name`.
///
/// On a failed read the variable becomes zero and one non-numeric input
/// token is discarded.
pub fn input_read(name: &str) -> [String; 4] {
    [
        format!("if(0 == scanf(\"%f\", &{})) {{", name),
        format!("{} = 0;", name),
        "scanf(\"%*s\");".to_string(),
        "}".to_string(),
    ]
}

/// Declare `name` and bind it to a random integer in 1..=RND_MAX.
pub fn rnd_binding(name: &str) -> String {
    format!("{} {} = rand() % {} + 1;", NUMERIC_TYPE, name, RND_MAX)
}
