/*
 * This file is part of bsp-levels.
 *
 * bsp-levels is free software: you can redistribute it and/or modify it
 * under the terms of the GNU General Public License as published by the Free
 * Software Foundation, either version 3 of the License, or (at your option)
 * any later version.
 *
 * This program is distributed in the hope that it will be useful, but WITHOUT
 * ANY WARRANTY; without even the implied warranty of MERCHANTABILITY or
 * FITNESS FOR A PARTICULAR PURPOSE.  See the GNU General Public License for
 * more details.
 *
 * You should have received a copy of the GNU General Public License along
 * with this program.  If not, see <http://www.gnu.org/licenses/>.
 */

//! The brace/quote entity mini-grammar, shared by all four dialects.
//!
//! A lump is a sequence of `{ "key" "value" ... }` blocks. The parser is a
//! single forward pass with one byte of lookahead and no backtracking.
//! Nested blocks are depth-tracked but their content is not emitted; only
//! whitespace and braces are tolerated below depth one.

use std::collections::HashMap;
use std::mem;

use crate::model::Entity;
use crate::types::{BspError, Result};

/// Whitespace between structural tokens: space, tab, CR, LF, NUL.
fn is_space(b: u8) -> bool {
    matches!(b, b' ' | b'\t' | b'\r' | b'\n' | 0)
}

/// Read a quoted run starting at `start` (just past the opening quote).
/// Returns the captured text and the index past the closing quote.
fn quoted(data: &[u8], start: usize) -> Result<(String, usize)> {
    match data[start..].iter().position(|&b| b == b'"') {
        Some(len) => {
            let text = String::from_utf8_lossy(&data[start..start + len]).into_owned();
            Ok((text, start + len + 1))
        }
        None => Err(BspError::UnterminatedString { offset: start }),
    }
}

/// Parse the given data as an entities lump.
///
/// Blocks are emitted in file order. Duplicate keys within a block resolve
/// last-write-wins. A block, or a key awaiting its value, left open at end
/// of input is dropped without error; an open quoted string is not.
pub fn from_data(data: &[u8]) -> Result<Vec<Entity>> {
    let mut entities = Vec::new();
    let mut attrs: HashMap<String, String> = HashMap::new();
    let mut depth: i32 = 0;

    let mut i = 0;
    while i < data.len() {
        let c = data[i];
        i += 1;

        match c {
            b'{' => depth += 1,
            b'}' => {
                if depth == 1 {
                    entities.push(Entity {
                        attributes: mem::replace(&mut attrs, HashMap::new()),
                    });
                }
                depth -= 1;
            }
            b'"' if depth == 1 => {
                let (key, rest) = quoted(data, i)?;
                i = rest;

                // Only spaces and tabs may separate a key from its value.
                // A key still awaiting its value at end of input is dropped,
                // like an open block.
                while i < data.len() {
                    let c = data[i];
                    i += 1;

                    match c {
                        b' ' | b'\t' => continue,
                        b'"' => {
                            let (value, rest) = quoted(data, i)?;
                            i = rest;
                            attrs.insert(key, value);
                            break;
                        }
                        byte => {
                            return Err(BspError::UnexpectedByte {
                                byte,
                                offset: i - 1,
                            })
                        }
                    }
                }
            }
            b if is_space(b) => {}
            byte => {
                return Err(BspError::UnexpectedByte {
                    byte,
                    offset: i - 1,
                })
            }
        }
    }

    Ok(entities)
}
