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

//! Symbol table for the translator.
//!
//! Teeny Tiny has a single global scope and a single numeric type, so the
//! table is a set of names. A name enters the table the first time it is the
//! target of LET or INPUT.

use std::collections::HashSet;

/// The set of declared variable names.
#[derive(Debug, Default)]
pub struct SymbolTable {
    names: HashSet<String>,
}

impl SymbolTable {
    /// Create an empty symbol table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Declare a variable. Returns `false` if it was already declared.
    pub fn declare(&mut self, name: &str) -> bool {
        if self.names.contains(name) {
            return false;
        }
        self.names.insert(name.to_string())
    }

    /// Check whether a variable has been declared.
    pub fn is_declared(&self, name: &str) -> bool {
        self.names.contains(name)
    }

    /// Number of declared variables.
    pub fn len(&self) -> usize {
        self.names.len()
    }

    /// Check if no variable has been declared.
    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_declare_once() {
        let mut symbols = SymbolTable::new();
        assert!(symbols.is_empty());
        assert!(symbols.declare("a"));
        assert!(!symbols.declare("a"));
        assert_eq!(symbols.len(), 1);
    }

    #[test]
    fn test_lookup() {
        let mut symbols = SymbolTable::new();
        symbols.declare("count");
        assert!(symbols.is_declared("count"));
        assert!(!symbols.is_declared("Count"));
    }
}
