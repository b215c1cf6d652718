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

//! Quake 2 texture information.
//!
//! There is no texture-definition lump; every 76-byte texture-info record
//! embeds a 32-byte name. The catalogue is synthesized by deduplicating
//! those names (exact bytes, first-seen order), always with an external
//! data source. Each record's `next` field indexes another texture-info
//! record, chaining animated textures; out-of-range or self-referential
//! successors are left unresolved.

use std::collections::HashMap;

use crate::helpers::{slice_to_f32, slice_to_u32, slice_to_vec3, texture_name};
use crate::model::{DataSource, TexFlags, TexInfo, Texture};
use crate::types::{BspError, Result};

pub const TEX_INFO_SIZE: usize = 76;

/// Decode the texture-info lump into per-record [`TexInfo`]s and the
/// deduplicated texture catalogue they reference.
pub fn from_data(lump: &[u8]) -> Result<(Vec<TexInfo>, Vec<Texture>)> {
    if lump.len() % TEX_INFO_SIZE != 0 {
        return Err(BspError::BadLumpSize {
            lump: "texture info",
            len: lump.len(),
            record: TEX_INFO_SIZE,
        });
    }

    let records: Vec<&[u8]> = lump.chunks_exact(TEX_INFO_SIZE).collect();

    // first pass: name fields -> catalogue entries, first occurrence wins
    let mut catalogue: HashMap<&[u8], usize> = HashMap::new();
    let mut textures = Vec::new();
    let mut tex_infos = Vec::with_capacity(records.len());
    for record in &records {
        let field = &record[40..72];
        let texture = *catalogue.entry(field).or_insert_with(|| {
            textures.push(Texture {
                name: texture_name(field),
                source: DataSource::External,
                next: None,
            });
            textures.len() - 1
        });

        tex_infos.push(TexInfo {
            s: slice_to_vec3(&record[0..12]),
            ds: f64::from(slice_to_f32(&record[12..16])),
            t: slice_to_vec3(&record[16..28]),
            dt: f64::from(slice_to_f32(&record[28..32])),
            texture,
            flags: TexFlags::empty(),
        });
    }

    // second pass: chain animated textures through `next`
    for (record, info) in records.iter().zip(tex_infos.iter()) {
        let next = slice_to_u32(&record[72..76]) as usize;
        if let Some(successor) = tex_infos.get(next) {
            if successor.texture != info.texture {
                textures[info.texture].next = Some(successor.texture);
            }
        }
    }

    Ok((tex_infos, textures))
}
