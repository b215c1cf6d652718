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

//! The Quake 3 dialect (`IBSP` version 46).
//!
//! Shares nothing with the earlier layouts beyond the lump directory:
//! planes drop the type field, vertices grow to 44-byte records, faces are
//! triangulated vertex runs indexed through a mesh-vertex table, and
//! textures are a standalone lump of named records.

pub mod faces;
pub mod planes;
pub mod textures;
pub mod vertices;

use log::{debug, trace};

use crate::entities;
use crate::lumps;
use crate::model::Model;
use crate::types::{DecodeFlags, Result};

pub const HEADER_LEN: usize = 8;
pub const NUM_LUMPS: usize = 17;

pub const LUMP_ENTITIES: usize = 0;
pub const LUMP_TEXTURES: usize = 1;
pub const LUMP_PLANES: usize = 2;
pub const LUMP_VERTICES: usize = 10;
pub const LUMP_MESH_VERTICES: usize = 11;
pub const LUMP_FACES: usize = 13;

/// Decode a Quake 3 BSP from the post-signature remainder of the file.
pub fn decode(buf: &[u8], flags: DecodeFlags) -> Result<Model> {
    debug!("decoding quake 3 bsp, {} bytes", buf.len());
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
    let mesh_verts = vertices::mesh_verts_from_data(span(LUMP_MESH_VERTICES)?)?;
    let (tex_infos, textures) = textures::from_data(span(LUMP_TEXTURES)?)?;
    let faces = faces::from_data(span(LUMP_FACES)?, &verts, &mesh_verts, &tex_infos)?;

    trace!(
        "quake 3 bsp: {} entities, {} planes, {} faces, {} textures",
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
    use crate::model::{Geometry, PlaneType, Vector3};
    use crate::test_support::build_file;

    /// A one-triangle map in the Quake 3 layout.
    pub(crate) fn triangle_map() -> Vec<u8> {
        let mut vert_lump = Vec::new();
        for p in &[[0.0f32, 0.0, 0.0], [64.0, 0.0, 0.0], [0.0, 64.0, 0.0]] {
            vert_lump.extend(vertices::tests::vertex_bytes(*p));
        }

        let mut mesh_vert_lump = Vec::new();
        for n in &[0u32, 1, 2] {
            mesh_vert_lump.extend_from_slice(&n.to_le_bytes());
        }

        let mut plane_lump = Vec::new();
        for f in &[0.0f32, 0.0, 1.0, 0.0] {
            plane_lump.extend_from_slice(&f.to_le_bytes());
        }

        let tex_lump = textures::tests::texture_bytes(b"textures/base_wall/c_met5_2");
        let face_lump = faces::tests::face_bytes(0, 1, 0, 3, 0, 3);
        let ent_lump = b"{ \"classname\" \"worldspawn\" }".to_vec();

        build_file(
            b"IBSP\x2e\x00\x00\x00",
            NUM_LUMPS,
            &[
                (LUMP_ENTITIES, &ent_lump),
                (LUMP_TEXTURES, &tex_lump),
                (LUMP_PLANES, &plane_lump),
                (LUMP_VERTICES, &vert_lump),
                (LUMP_MESH_VERTICES, &mesh_vert_lump),
                (LUMP_FACES, &face_lump),
            ],
        )
    }

    #[test]
    fn whole_file_decodes() {
        let file = triangle_map();
        let model = decode(&file[HEADER_LEN..], DecodeFlags::empty()).unwrap();

        assert_eq!(model.entities.len(), 1);
        assert_eq!(model.planes.len(), 1);
        assert_eq!(model.planes[0].kind, PlaneType::Untyped);
        assert_eq!(model.textures.len(), 1);
        assert_eq!(model.textures[0].name, "textures/base_wall/c_met5_2");

        assert_eq!(model.faces.len(), 1);
        let face = &model.faces[0];
        assert_eq!(face.plane, None);
        assert!(face.front);
        match &face.geometry {
            Geometry::Vertices(run) => {
                assert_eq!(run.len(), 3);
                assert_eq!(run[1], Vector3::new(64.0, 0.0, 0.0));
            }
            other => panic!("expected vertex geometry, got {:?}", other),
        }
    }

    #[test]
    fn entities_only_stops_early() {
        let file = triangle_map();
        let model = decode(&file[HEADER_LEN..], DecodeFlags::ENTITIES_ONLY).unwrap();
        assert_eq!(model.entities.len(), 1);
        assert!(model.faces.is_empty());
        assert!(model.textures.is_empty());
    }
}
