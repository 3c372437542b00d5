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

//! One-pass semantic bookkeeping for the Teeny Tiny compiler.
//!
//! There is no separate analysis pass. The parser consults these tables
//! while it emits code:
//! - `symbol_table` - variables declared by LET or INPUT
//! - `labels` - declared labels and GOTO targets, checked at end of program

mod labels;
mod symbol_table;

pub use labels::LabelTable;
pub use symbol_table::SymbolTable;
