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

//! Fixed C text used by the code generator.
//!
//! The generated program depends on these exact conventions: three
//! standard headers, one `main` holding every statement, and `float` as the
//! only numeric type.

/// Standard headers for `printf`/`scanf`, `rand`/`srand` and `time`.
pub const INCLUDES: [&str; 3] = [
    "#include <stdio.h>",
    "#include <stdlib.h>",
    "#include <time.h>",
];

/// Opening line of the generated `main`.
pub const MAIN_OPEN: &str = "int main(void){";

/// Return statement closing `main`.
pub const MAIN_RETURN: &str = "return 0;";

/// The C type of every variable.
pub const NUMERIC_TYPE: &str = "float";

/// Opening of a numeric print; the expression follows.
pub const PRINT_NUMBER_OPEN: &str = "printf(\"%.2f\\n\", (float)(";

/// Closing of a numeric print.
pub const PRINT_NUMBER_CLOSE: &str = "));";

/// Opening of an IF block; the condition follows.
pub const IF_OPEN: &str = "if(";

/// Opening of a WHILE loop; the condition follows.
pub const WHILE_OPEN: &str = "while(";

/// Ends a condition and opens the block.
pub const BLOCK_OPEN: &str = "){";

/// Closes a block or `main`.
pub const BLOCK_CLOSE: &str = "}";

/// Terminates an assignment.
pub const STATEMENT_END: &str = ";";

/// Reseeds the generator; emitted before every RND binding.
pub const RND_SEED: &str = "srand(time(0));";

/// RND yields integers in 1..=RND_MAX.
pub const RND_MAX: u32 = 100;

/// Letter-only names that cannot be declared or used as labels in the
/// generated program: C keywords, the functions it calls, and the macros
/// and streams of its headers.
pub const C_RESERVED_NAMES: &[&str] = &[
    // Keywords
    "auto", "bool", "break", "case", "char", "const", "constexpr", "continue", "default", "do",
    "double", "else", "enum", "extern", "false", "float", "for", "goto", "if", "inline", "int",
    "long", "nullptr", "register", "restrict", "return", "short", "signed", "sizeof", "static",
    "struct", "switch", "true", "typedef", "typeof", "union", "unsigned", "void", "volatile",
    "while",
    // Called by the generated code
    "main", "printf", "rand", "scanf", "srand", "time",
    // Header macros and streams
    "EOF", "FILE", "NULL", "stderr", "stdin", "stdout",
];
