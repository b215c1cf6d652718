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

//! The Quake 1 dialect (version 29).
//!
//! Half-Life and Quake 2 share most of Quake 1's record layouts; their
//! decoders borrow the lump modules here rather than repeating them.

pub mod edges;
pub mod faces;
pub mod planes;
pub mod tex_info;
pub mod textures;
pub mod vertices;

use log::{debug, trace};

use crate::entities;
use crate::lumps;
use crate::model::Model;
use crate::types::{DecodeFlags, Result};

pub const HEADER_LEN: usize = 4;
pub const NUM_LUMPS: usize = 15;

pub const LUMP_ENTITIES: usize = 0;
pub const LUMP_PLANES: usize = 1;
pub const LUMP_TEXTURES: usize = 2;
pub const LUMP_VERTICES: usize = 3;
pub const LUMP_TEX_INFO: usize = 6;
pub const LUMP_FACES: usize = 7;
pub const LUMP_EDGES: usize = 12;
pub const LUMP_FACE_EDGE_TABLE: usize = 13;

/// Decode a Quake 1 BSP from the post-signature remainder of the file.
pub fn decode(buf: &[u8], flags: DecodeFlags) -> Result<Model> {
    debug!("decoding quake 1 bsp, {} bytes", buf.len());
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
    let textures = textures::from_data(span(LUMP_TEXTURES)?, flags)?;
    let tex_infos = tex_info::from_data(span(LUMP_TEX_INFO)?, textures.len())?;
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
        "quake 1 bsp: {} entities, {} planes, {} faces, {} textures",
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
pub(crate) mod tests {
    use super::*;
    use crate::model::{DataSource, Geometry, PlaneType, Vector3};
    use crate::test_support::build_file;
    use crate::types::BspError;

    /// A one-face square map: four vertices, four edges, one plane, one
    /// internal texture.
    pub(crate) fn square_map() -> Vec<u8> {
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

        // last edge stored 0->3 but wound 3->0, so its entry is negative
        let mut face_edge_lump = Vec::new();
        for &fe in &[0i16, 1, 2, -3] {
            face_edge_lump.extend_from_slice(&fe.to_le_bytes());
        }

        let mut plane_lump = Vec::new();
        for f in &[0.0f32, 0.0, 1.0, 0.0] {
            plane_lump.extend_from_slice(&f.to_le_bytes());
        }
        plane_lump.extend_from_slice(&2u32.to_le_bytes());

        let tex_lump = textures::tests::miptex_lump(b"metal1", 2, 2, &[9, 9, 9, 9]);
        let tex_info_lump =
            tex_info::tests::tex_info_bytes([1.0, 0.0, 0.0], 4.0, [0.0, 1.0, 0.0], 8.0, 0, 0);
        let face_lump = faces::tests::face_bytes(0, 0, 0, 4, 0);

        let ent_lump = b"{ \"classname\" \"worldspawn\" }".to_vec();

        build_file(
            &[0x1d, 0, 0, 0],
            NUM_LUMPS,
            &[
                (LUMP_ENTITIES, &ent_lump),
                (LUMP_PLANES, &plane_lump),
                (LUMP_TEXTURES, &tex_lump),
                (LUMP_VERTICES, &verts),
                (LUMP_TEX_INFO, &tex_info_lump),
                (LUMP_FACES, &face_lump),
                (LUMP_EDGES, &edge_lump),
                (LUMP_FACE_EDGE_TABLE, &face_edge_lump),
            ],
        )
    }

    #[test]
    fn whole_file_decodes() {
        let file = square_map();
        let model = decode(&file[HEADER_LEN..], DecodeFlags::empty()).unwrap();

        assert_eq!(model.entities.len(), 1);
        assert_eq!(model.planes.len(), 1);
        assert_eq!(model.planes[0].kind, PlaneType::AxialZ);
        assert_eq!(model.textures.len(), 1);
        assert_eq!(model.textures[0].name, "metal1");
        assert_eq!(model.tex_infos.len(), 1);
        assert_eq!(model.tex_infos[0].ds, 4.0);
        assert_eq!(model.tex_infos[0].dt, 8.0);

        assert_eq!(model.faces.len(), 1);
        let face = &model.faces[0];
        assert_eq!(face.plane, Some(0));
        assert_eq!(face.tex_info, model.tex_infos[0]);
        match &face.geometry {
            Geometry::Edges(loop_) => {
                assert_eq!(loop_.len(), 4);
                // the negative face-edge entry reversed edge 3 (0 -> 3)
                assert_eq!(loop_[3].a, Vector3::new(0.0, 64.0, 0.0));
                assert_eq!(loop_[3].b, Vector3::new(0.0, 0.0, 0.0));
                // continuity of the loop
                for pair in loop_.windows(2) {
                    assert_eq!(pair[0].b, pair[1].a);
                }
            }
            other => panic!("expected edge geometry, got {:?}", other),
        }
    }

    #[test]
    fn entities_only_stops_early() {
        let file = square_map();
        let model = decode(&file[HEADER_LEN..], DecodeFlags::ENTITIES_ONLY).unwrap();
        assert_eq!(model.entities.len(), 1);
        assert!(model.faces.is_empty());
        assert!(model.textures.is_empty());
    }

    #[test]
    fn decode_is_idempotent() {
        let file = square_map();
        let a = decode(&file[HEADER_LEN..], DecodeFlags::empty()).unwrap();
        let b = decode(&file[HEADER_LEN..], DecodeFlags::empty()).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn corrupt_lump_directory_is_fatal() {
        let mut file = square_map();
        // point the vertex lump far outside the buffer
        let dir = HEADER_LEN + LUMP_VERTICES * 8;
        file[dir..dir + 4].copy_from_slice(&0x00ff_0000u32.to_le_bytes());
        assert!(matches!(
            decode(&file[HEADER_LEN..], DecodeFlags::empty()),
            Err(BspError::LumpOutOfRange { .. })
        ));
    }

    #[test]
    fn no_textures_keeps_catalogue_names() {
        let file = square_map();
        let model = decode(&file[HEADER_LEN..], DecodeFlags::NO_TEXTURES).unwrap();
        assert_eq!(model.textures[0].name, "metal1");
        assert_eq!(model.textures[0].source, DataSource::External);
        assert_eq!(model.tex_infos[0].texture, 0);
    }
}
