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

//! Label and GOTO bookkeeping.
//!
//! Labels must be unique, which is checked when each LABEL is seen. GOTO may
//! jump forward, so targets are only checked once the whole program has been
//! read.

use std::collections::HashSet;

use crate::error::Span;

/// Declared labels and the GOTO targets that must resolve to them.
#[derive(Debug, Default)]
pub struct LabelTable {
    /// Labels introduced by LABEL.
    declared: HashSet<String>,
    /// GOTO targets in source order, with the span of the target name.
    gotos: Vec<(String, Span)>,
}

impl LabelTable {
    /// Create an empty label table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Declare a label. Returns `false` if the label already exists.
    pub fn declare(&mut self, name: &str) -> bool {
        if self.declared.contains(name) {
            return false;
        }
        self.declared.insert(name.to_string())
    }

    /// Record a GOTO target for the end-of-program check.
    pub fn record_goto(&mut self, name: &str, span: Span) {
        self.gotos.push((name.to_string(), span));
    }

    /// Check whether a label has been declared.
    pub fn is_declared(&self, name: &str) -> bool {
        self.declared.contains(name)
    }

    /// The first GOTO, in source order, whose target was never declared.
    pub fn first_unresolved(&self) -> Option<(&str, &Span)> {
        self.gotos
            .iter()
            .find(|(name, _)| !self.declared.contains(name))
            .map(|(name, span)| (name.as_str(), span))
    }
}
