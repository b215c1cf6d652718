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

//! Edge vertex-index pairs and the signed face-edge table.
//!
//! An edge names two vertices; faces reference edges through a table of
//! signed indices where a negative entry means "use the edge reversed".
//! That sign convention is the winding and is preserved exactly.

use crate::helpers::{slice_to_i16, slice_to_i32, slice_to_u16};
use crate::types::{BspError, Result};

const EDGE_SIZE: usize = 4;

/// A pair of indices into the vertex table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EdgeIndex {
    pub a: usize,
    pub b: usize,
}

/// Decode the edge lump, validating both endpoints against the vertex table.
pub fn from_data(data: &[u8], n_verts: usize) -> Result<Vec<EdgeIndex>> {
    if data.len() % EDGE_SIZE != 0 {
        return Err(BspError::BadLumpSize {
            lump: "edges",
            len: data.len(),
            record: EDGE_SIZE,
        });
    }
    let length = data.len() / EDGE_SIZE;

    let mut edges = Vec::with_capacity(length);
    for n in 0..length {
        let record = &data[n * EDGE_SIZE..(n + 1) * EDGE_SIZE];
        let a = slice_to_u16(&record[0..2]) as usize;
        let b = slice_to_u16(&record[2..4]) as usize;
        if a >= n_verts || b >= n_verts {
            return Err(BspError::IndexOutOfRange {
                what: "edge vertex",
                index: a.max(b) as i64,
                len: n_verts,
            });
        }
        edges.push(EdgeIndex { a, b });
    }

    Ok(edges)
}

/// Decode a face-edge table of i16 entries (Quake 1/Quake 2), validating
/// each entry's magnitude against the edge table. Signs are kept.
pub fn face_edges_i16(data: &[u8], n_edges: usize) -> Result<Vec<i32>> {
    if data.len() % 2 != 0 {
        return Err(BspError::BadLumpSize {
            lump: "face-edge table",
            len: data.len(),
            record: 2,
        });
    }

    let mut table = Vec::with_capacity(data.len() / 2);
    for n in 0..data.len() / 2 {
        let raw = i32::from(slice_to_i16(&data[n * 2..n * 2 + 2]));
        table.push(validated(raw, n_edges)?);
    }
    Ok(table)
}

/// Decode a face-edge table of i32 entries (Half-Life).
pub fn face_edges_i32(data: &[u8], n_edges: usize) -> Result<Vec<i32>> {
    if data.len() % 4 != 0 {
        return Err(BspError::BadLumpSize {
            lump: "face-edge table",
            len: data.len(),
            record: 4,
        });
    }

    let mut table = Vec::with_capacity(data.len() / 4);
    for n in 0..data.len() / 4 {
        let raw = slice_to_i32(&data[n * 4..n * 4 + 4]);
        table.push(validated(raw, n_edges)?);
    }
    Ok(table)
}

fn validated(raw: i32, n_edges: usize) -> Result<i32> {
    let magnitude = i64::from(raw).abs();
    if magnitude >= n_edges as i64 {
        return Err(BspError::IndexOutOfRange {
            what: "face edge",
            index: i64::from(raw),
            len: n_edges,
        });
    }
    Ok(raw)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn edge_lump(pairs: &[(u16, u16)]) -> Vec<u8> {
        let mut buf = Vec::new();
        for &(a, b) in pairs {
            buf.extend_from_slice(&a.to_le_bytes());
            buf.extend_from_slice(&b.to_le_bytes());
        }
        buf
    }

    #[test]
    fn decodes_pairs() {
        let buf = edge_lump(&[(0, 1), (1, 2)]);
        let edges = from_data(&buf, 3).unwrap();
        assert_eq!(edges, vec![EdgeIndex { a: 0, b: 1 }, EdgeIndex { a: 1, b: 2 }]);
    }

    #[test]
    fn endpoint_out_of_range_is_fatal() {
        let buf = edge_lump(&[(0, 7)]);
        assert!(matches!(
            from_data(&buf, 3),
            Err(BspError::IndexOutOfRange { what: "edge vertex", .. })
        ));
    }

    #[test]
    fn signed_entries_keep_their_sign() {
        let mut buf = Vec::new();
        for &v in &[1i16, -2, 0] {
            buf.extend_from_slice(&v.to_le_bytes());
        }
        assert_eq!(face_edges_i16(&buf, 3).unwrap(), vec![1, -2, 0]);
    }

    #[test]
    fn magnitude_out_of_range_is_fatal() {
        let mut buf = Vec::new();
        buf.extend_from_slice(&(-5i16).to_le_bytes());
        assert!(face_edges_i16(&buf, 3).is_err());
    }

    #[test]
    fn wide_entries_decode() {
        let mut buf = Vec::new();
        for &v in &[3i32, -1] {
            buf.extend_from_slice(&v.to_le_bytes());
        }
        assert_eq!(face_edges_i32(&buf, 4).unwrap(), vec![3, -1]);
    }
}
