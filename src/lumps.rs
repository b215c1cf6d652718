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

//! The byte-range lump directory shared by all four dialects.
//!
//! Every dialect follows its signature with a run of (offset, size) pairs.
//! Offsets are relative to the start of the whole file, but decoders work on
//! the post-signature remainder, so spans subtract the header length.

use crate::helpers::slice_to_u32;
use crate::types::{BspError, Result};

/// Size of one directory entry on disk.
const ENTRY_SIZE: usize = 8;

/// One lump directory entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LumpEntry {
    /// Offset from the beginning of the file to the start of the lump.
    pub offset: u32,
    /// Length of the lump in bytes.
    pub size: u32,
}

impl LumpEntry {
    /// Resolve this entry to a slice of `buf`, where `buf` is the file with
    /// its `header_len`-byte signature already removed.
    ///
    /// An offset or size of zero means the lump is absent and yields an
    /// empty slice. A span reaching outside `buf` is a format error, never
    /// truncated. `lump` is only used to label the error.
    pub fn span<'a>(&self, header_len: usize, buf: &'a [u8], lump: usize) -> Result<&'a [u8]> {
        if self.offset == 0 || self.size == 0 {
            return Ok(&[]);
        }

        let out_of_range = |start: usize| BspError::LumpOutOfRange {
            lump,
            start,
            end: start.wrapping_add(self.size as usize),
            len: buf.len(),
        };

        let start = (self.offset as usize)
            .checked_sub(header_len)
            .ok_or_else(|| out_of_range(self.offset as usize))?;
        let end = start
            .checked_add(self.size as usize)
            .ok_or_else(|| out_of_range(start))?;

        buf.get(start..end).ok_or_else(|| out_of_range(start))
    }
}

/// Decode the `count`-entry directory at the start of `buf` (the
/// post-signature remainder of the file).
pub fn table_from_data(buf: &[u8], count: usize) -> Result<Vec<LumpEntry>> {
    let dir_len = count * ENTRY_SIZE;
    if buf.len() < dir_len {
        return Err(BspError::Truncated {
            what: "lump directory",
            need: dir_len,
            have: buf.len(),
        });
    }

    let mut entries = Vec::with_capacity(count);
    for n in 0..count {
        let base = &buf[n * ENTRY_SIZE..(n + 1) * ENTRY_SIZE];
        entries.push(LumpEntry {
            offset: slice_to_u32(&base[0..4]),
            size: slice_to_u32(&base[4..8]),
        });
    }

    Ok(entries)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn absent_lump_yields_empty_span() {
        let buf = [0u8; 32];
        let zero_size = LumpEntry { offset: 16, size: 0 };
        let zero_offset = LumpEntry { offset: 0, size: 8 };
        assert_eq!(zero_size.span(4, &buf, 0).unwrap(), &[] as &[u8]);
        assert_eq!(zero_offset.span(4, &buf, 0).unwrap(), &[] as &[u8]);
    }

    #[test]
    fn span_subtracts_header_length() {
        let buf: Vec<u8> = (0u8..16).collect();
        let entry = LumpEntry { offset: 8, size: 4 };
        assert_eq!(entry.span(4, &buf, 0).unwrap(), &[4, 5, 6, 7]);
    }

    #[test]
    fn span_outside_buffer_is_fatal() {
        let buf = [0u8; 16];
        let entry = LumpEntry {
            offset: 12,
            size: 200,
        };
        match entry.span(4, &buf, 3) {
            Err(BspError::LumpOutOfRange { lump: 3, .. }) => {}
            other => panic!("expected LumpOutOfRange, got {:?}", other),
        }
    }

    #[test]
    fn span_offset_below_header_is_fatal() {
        let buf = [0u8; 16];
        let entry = LumpEntry { offset: 2, size: 4 };
        assert!(entry.span(4, &buf, 0).is_err());
    }

    #[test]
    fn short_directory_is_fatal() {
        let buf = [0u8; 10];
        match table_from_data(&buf, 15) {
            Err(BspError::Truncated { need: 120, .. }) => {}
            other => panic!("expected Truncated, got {:?}", other),
        }
    }

    #[test]
    fn directory_entries_decode_le() {
        let mut buf = Vec::new();
        for &(o, s) in &[(0x10u32, 0x20u32), (0x30, 0x04)] {
            buf.extend_from_slice(&o.to_le_bytes());
            buf.extend_from_slice(&s.to_le_bytes());
        }
        let table = table_from_data(&buf, 2).unwrap();
        assert_eq!(
            table,
            vec![
                LumpEntry {
                    offset: 0x10,
                    size: 0x20
                },
                LumpEntry {
                    offset: 0x30,
                    size: 0x04
                },
            ]
        );
    }
}
