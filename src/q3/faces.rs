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

//! Quake 3 faces: 104-byte records resolved to triangulated vertex runs.
//!
//! Only polygon and mesh faces produce output; patches and billboards are
//! skipped. A face's vertices come from the mesh-vertex table, each entry
//! an offset from the face's first vertex.

use crate::helpers::slice_to_u32;
use crate::model::{Face, Geometry, TexInfo, Vector3};
use crate::types::{BspError, Result};

pub const FACE_SIZE: usize = 104;

const TYPE_POLYGON: u32 = 1;
const TYPE_MESH: u32 = 3;

pub fn from_data(
    data: &[u8],
    verts: &[Vector3],
    mesh_verts: &[u32],
    tex_infos: &[TexInfo],
) -> Result<Vec<Face>> {
    if data.len() % FACE_SIZE != 0 {
        return Err(BspError::BadLumpSize {
            lump: "faces",
            len: data.len(),
            record: FACE_SIZE,
        });
    }

    let mut out = Vec::new();
    for record in data.chunks_exact(FACE_SIZE) {
        let kind = slice_to_u32(&record[8..12]);
        if kind != TYPE_POLYGON && kind != TYPE_MESH {
            continue;
        }

        let texture = slice_to_u32(&record[0..4]) as usize;
        let first_vertex = slice_to_u32(&record[12..16]) as u64;
        let first_mesh_vert = slice_to_u32(&record[20..24]) as u64;
        let num_mesh_verts = slice_to_u32(&record[24..28]) as u64;

        let tex_info = tex_infos
            .get(texture)
            .cloned()
            .ok_or(BspError::IndexOutOfRange {
                what: "face texture",
                index: texture as i64,
                len: tex_infos.len(),
            })?;

        let mut run = Vec::with_capacity(num_mesh_verts as usize);
        for i in 0..num_mesh_verts {
            let mv = mesh_verts
                .get((first_mesh_vert + i) as usize)
                .ok_or(BspError::IndexOutOfRange {
                    what: "mesh vertex",
                    index: (first_mesh_vert + i) as i64,
                    len: mesh_verts.len(),
                })?;

            let index = first_vertex + u64::from(*mv);
            let vert = verts
                .get(index as usize)
                .ok_or(BspError::IndexOutOfRange {
                    what: "face vertex",
                    index: index as i64,
                    len: verts.len(),
                })?;
            run.push(*vert);
        }

        out.push(Face {
            geometry: Geometry::Vertices(run),
            front: true,
            plane: None,
            tex_info,
        });
    }

    Ok(out)
}
