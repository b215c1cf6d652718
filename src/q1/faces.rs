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

//! Face records and edge-loop assembly for the edge-based dialects.
//!
//! Quake 1, Half-Life and Quake 2 share the same 20-byte face record; only
//! their face-edge-table widths differ, which is resolved before this module
//! runs. Each face names a run of signed face-edge entries; a negative entry
//! selects the edge with its endpoints swapped.

use crate::helpers::{slice_to_u16, slice_to_u32};
use crate::model::{Edge, Face, Geometry, TexInfo, Vector3};
use crate::q1::edges::EdgeIndex;
use crate::types::{BspError, Result};

/// plane, side, first edge, edge count, texinfo, 4 light bytes, lightmap.
const FACE_SIZE: usize = 20;

pub fn from_data(
    data: &[u8],
    face_edges: &[i32],
    edges: &[EdgeIndex],
    verts: &[Vector3],
    n_planes: usize,
    tex_infos: &[TexInfo],
) -> Result<Vec<Face>> {
    if data.len() % FACE_SIZE != 0 {
        return Err(BspError::BadLumpSize {
            lump: "faces",
            len: data.len(),
            record: FACE_SIZE,
        });
    }
    let length = data.len() / FACE_SIZE;

    let mut faces = Vec::with_capacity(length);
    for n in 0..length {
        let record = &data[n * FACE_SIZE..(n + 1) * FACE_SIZE];

        let plane = slice_to_u16(&record[0..2]) as usize;
        if plane >= n_planes {
            return Err(BspError::IndexOutOfRange {
                what: "face plane",
                index: plane as i64,
                len: n_planes,
            });
        }

        let side = slice_to_u16(&record[2..4]);
        let first_edge = slice_to_u32(&record[4..8]) as usize;
        let num_edges = slice_to_u16(&record[8..10]) as usize;

        let end = first_edge
            .checked_add(num_edges)
            .filter(|&end| end <= face_edges.len())
            .ok_or_else(|| BspError::IndexOutOfRange {
                what: "face edge run",
                index: first_edge as i64 + num_edges as i64,
                len: face_edges.len(),
            })?;

        let tex_info_idx = slice_to_u16(&record[10..12]) as usize;
        let tex_info = tex_infos.get(tex_info_idx).ok_or(BspError::IndexOutOfRange {
            what: "face texinfo",
            index: tex_info_idx as i64,
            len: tex_infos.len(),
        })?;

        faces.push(Face {
            geometry: Geometry::Edges(resolve_loop(&face_edges[first_edge..end], edges, verts)),
            front: side == 0,
            plane: Some(plane),
            tex_info: tex_info.clone(),
        });
    }

    Ok(faces)
}

/// Turn a run of signed face-edge entries into concrete edges. Entries were
/// bounds-validated when the table was decoded.
fn resolve_loop(run: &[i32], edges: &[EdgeIndex], verts: &[Vector3]) -> Vec<Edge> {
    let mut out = Vec::with_capacity(run.len());
    for &fei in run {
        let edge = if fei < 0 {
            let e = edges[(-fei) as usize];
            Edge {
                a: verts[e.b],
                b: verts[e.a],
            }
        } else {
            let e = edges[fei as usize];
            Edge {
                a: verts[e.a],
                b: verts[e.b],
            }
        };
        out.push(edge);
    }
    out
}
