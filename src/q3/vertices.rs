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

//! Quake 3 vertices and mesh-vertex indices.
//!
//! A vertex record is 44 bytes (position, surface and lightmap coordinates,
//! normal, colour); only the position is kept. Mesh-vertex entries are
//! plain u32 offsets relative to a face's first vertex, so they can only be
//! bounds-checked at face-resolution time.

use crate::helpers::{slice_to_u32, slice_to_vec3};
use crate::model::Vector3;
use crate::types::{BspError, Result};

pub const VERTEX_SIZE: usize = 44;
pub const MESH_VERT_SIZE: usize = 4;

pub fn from_data(data: &[u8]) -> Result<Vec<Vector3>> {
    if data.len() % VERTEX_SIZE != 0 {
        return Err(BspError::BadLumpSize {
            lump: "vertices",
            len: data.len(),
            record: VERTEX_SIZE,
        });
    }

    Ok(data
        .chunks_exact(VERTEX_SIZE)
        .map(|record| slice_to_vec3(&record[0..12]))
        .collect())
}

pub fn mesh_verts_from_data(data: &[u8]) -> Result<Vec<u32>> {
    if data.len() % MESH_VERT_SIZE != 0 {
        return Err(BspError::BadLumpSize {
            lump: "mesh vertices",
            len: data.len(),
            record: MESH_VERT_SIZE,
        });
    }

    Ok(data.chunks_exact(MESH_VERT_SIZE).map(slice_to_u32).collect())
}
