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

//! The Quake 2 dialect (`IBSP` version 38).
//!
//! Planes, vertices, edges and faces share Quake 1's record layouts; only
//! the texture information differs, carrying an inline 32-byte name per
//! record instead of an index into a texture lump.

pub mod textures;

use log::{debug, trace};

use crate::entities;
use crate::lumps;
use crate::model::Model;
use crate::q1::{edges, faces, planes, vertices};
use crate::types::{DecodeFlags, Result};

pub const HEADER_LEN: usize = 8;
pub const NUM_LUMPS: usize = 19;

pub const LUMP_ENTITIES: usize = 0;
pub const LUMP_PLANES: usize = 1;
pub const LUMP_VERTICES: usize = 2;
pub const LUMP_TEX_INFO: usize = 5;
pub const LUMP_FACES: usize = 6;
pub const LUMP_EDGES: usize = 11;
pub const LUMP_FACE_EDGE_TABLE: usize = 12;

/// Decode a Quake 2 BSP from the post-signature remainder of the file.
pub fn decode(buf: &[u8], flags: DecodeFlags) -> Result<Model> {
    debug!("decoding quake 2 bsp, {} bytes", buf.len());
    let lumps = lumps::table_from_data(buf, NUM_LUMPS)?;
    let span = |lump: usize| lumps[lump].span(HEADER_LEN, buf, lump);

    let entities = entities::from_data(span(LUMP_ENTITIES)?)?;
    if flags.contains(DecodeFlags::ENTITIES_ONLY) {
        return Ok(Model {
            entities,
            ..Model::default()
        });
    }

    let planes = planes::from_data(span(LUMP_PLANES)?)?;
    let verts = vertices::from_data(span(LUMP_VERTICES)?)?;
    let (tex_infos, textures) = textures::from_data(span(LUMP_TEX_INFO)?)?;
    let edge_table = edges::from_data(span(LUMP_EDGES)?, verts.len())?;
    let face_edges = edges::face_edges_i16(span(LUMP_FACE_EDGE_TABLE)?, edge_table.len())?;
    let faces = faces::from_data(
        span(LUMP_FACES)?,
        &face_edges,
        &edge_table,
        &verts,
        planes.len(),
        &tex_infos,
    )?;

    trace!(
        "quake 2 bsp: {} entities, {} planes, {} faces, {} textures",
        entities.len(),
        planes.len(),
        faces.len(),
        textures.len()
    );

    Ok(Model {
        entities,
        planes,
        faces,
        tex_infos,
        textures,
    })
}
