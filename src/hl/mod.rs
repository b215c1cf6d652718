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

//! The Half-Life dialect (version 30).
//!
//! Layout-wise this is Quake 1 with two changes: each internal texture
//! embeds its own palette, and the face-edge table widens to 32-bit
//! entries.

pub mod textures;

use log::{debug, trace};

use crate::entities;
use crate::lumps;
use crate::model::Model;
use crate::q1::{self, edges, faces, planes, tex_info, vertices};
use crate::types::{DecodeFlags, Result};

pub const HEADER_LEN: usize = q1::HEADER_LEN;
pub const NUM_LUMPS: usize = q1::NUM_LUMPS;

/// Decode a Half-Life BSP from the post-signature remainder of the file.
pub fn decode(buf: &[u8], flags: DecodeFlags) -> Result<Model> {
    debug!("decoding half-life bsp, {} bytes", buf.len());
    let lumps = lumps::table_from_data(buf, NUM_LUMPS)?;
    let span = |lump: usize| lumps[lump].span(HEADER_LEN, buf, lump);

    let entities = entities::from_data(span(q1::LUMP_ENTITIES)?)?;
    if flags.contains(DecodeFlags::ENTITIES_ONLY) {
        return Ok(Model {
            entities,
            ..Model::default()
        });
    }

    let planes = planes::from_data(span(q1::LUMP_PLANES)?)?;
    let verts = vertices::from_data(span(q1::LUMP_VERTICES)?)?;
    let textures = textures::from_data(span(q1::LUMP_TEXTURES)?, flags)?;
    let tex_infos = tex_info::from_data(span(q1::LUMP_TEX_INFO)?, textures.len())?;
    let edge_table = edges::from_data(span(q1::LUMP_EDGES)?, verts.len())?;
    let face_edges = edges::face_edges_i32(span(q1::LUMP_FACE_EDGE_TABLE)?, edge_table.len())?;
    let faces = faces::from_data(
        span(q1::LUMP_FACES)?,
        &face_edges,
        &edge_table,
        &verts,
        planes.len(),
        &tex_infos,
    )?;

    trace!(
        "half-life bsp: {} entities, {} planes, {} faces, {} textures",
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

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{DataSource, Geometry};
    use crate::test_support::build_file;

    /// A one-face square map in the Half-Life layout: wide face-edge
    /// entries and a texture with an embedded palette.
    fn square_map() -> Vec<u8> {
        let mut verts = Vec::new();
        for v in &[
            [0.0f32, 0.0, 0.0],
            [64.0, 0.0, 0.0],
            [64.0, 64.0, 0.0],
            [0.0, 64.0, 0.0],
        ] {
            for f in v {
                verts.extend_from_slice(&f.to_le_bytes());
            }
        }

        let mut edge_lump = Vec::new();
        for &(a, b) in &[(0u16, 1u16), (1, 2), (2, 3), (0, 3)] {
            edge_lump.extend_from_slice(&a.to_le_bytes());
            edge_lump.extend_from_slice(&b.to_le_bytes());
        }

        let mut face_edge_lump = Vec::new();
        for &fe in &[0i32, 1, 2, -3] {
            face_edge_lump.extend_from_slice(&fe.to_le_bytes());
        }

        let mut plane_lump = Vec::new();
        for f in &[0.0f32, 0.0, 1.0, 0.0] {
            plane_lump.extend_from_slice(&f.to_le_bytes());
        }
        plane_lump.extend_from_slice(&2u32.to_le_bytes());

        let tex_lump = textures::tests::hl_miptex_lump(b"+0button", &[[0, 0, 255], [80, 80, 80]]);
        let tex_info_lump = crate::q1::tex_info::tests::tex_info_bytes(
            [1.0, 0.0, 0.0],
            0.0,
            [0.0, 1.0, 0.0],
            0.0,
            0,
            0,
        );
        let face_lump = crate::q1::faces::tests::face_bytes(0, 0, 0, 4, 0);
        let ent_lump = b"{ \"classname\" \"worldspawn\" }".to_vec();

        build_file(
            &[0x1e, 0, 0, 0],
            NUM_LUMPS,
            &[
                (q1::LUMP_ENTITIES, &ent_lump),
                (q1::LUMP_PLANES, &plane_lump),
                (q1::LUMP_TEXTURES, &tex_lump),
                (q1::LUMP_VERTICES, &verts),
                (q1::LUMP_TEX_INFO, &tex_info_lump),
                (q1::LUMP_FACES, &face_lump),
                (q1::LUMP_EDGES, &edge_lump),
                (q1::LUMP_FACE_EDGE_TABLE, &face_edge_lump),
            ],
        )
    }

    #[test]
    fn whole_file_decodes() {
        let file = square_map();
        let model = decode(&file[HEADER_LEN..], DecodeFlags::empty()).unwrap();

        assert_eq!(model.entities.len(), 1);
        assert_eq!(model.faces.len(), 1);
        match &model.faces[0].geometry {
            Geometry::Edges(loop_) => assert_eq!(loop_.len(), 4),
            other => panic!("expected edge geometry, got {:?}", other),
        }

        assert_eq!(model.textures[0].name, "+0button");
        match &model.textures[0].source {
            DataSource::Internal(px) => {
                // palette slot 0 is the transparency key
                assert_eq!(px.palette[0].a, 0);
                assert_eq!(px.palette[1].a, 0xff);
            }
            other => panic!("expected internal source, got {:?}", other),
        }
    }

    #[test]
    fn wide_face_edge_entries_decode() {
        let file = square_map();
        let model = decode(&file[HEADER_LEN..], DecodeFlags::empty()).unwrap();
        match &model.faces[0].geometry {
            Geometry::Edges(loop_) => {
                for pair in loop_.windows(2) {
                    assert_eq!(pair[0].b, pair[1].a);
                }
            }
            other => panic!("expected edge geometry, got {:?}", other),
        }
    }
}
