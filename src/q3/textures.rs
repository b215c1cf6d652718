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

//! Quake 3 texture records: 64-byte name plus surface and contents flags.
//!
//! Like Quake 2 there is no pixel payload, so the catalogue deduplicates
//! names into external-source textures. Faces reference the raw records by
//! index, so one [`TexInfo`] is emitted per record with zeroed UV bases;
//! the dialect stores its surface coordinates per vertex instead.

use std::collections::HashMap;

use crate::helpers::texture_name;
use crate::model::{DataSource, TexFlags, TexInfo, Texture, Vector3};
use crate::types::{BspError, Result};

pub const TEXTURE_SIZE: usize = 72;

/// Decode the texture lump into per-record [`TexInfo`]s and the
/// deduplicated catalogue they reference.
pub fn from_data(lump: &[u8]) -> Result<(Vec<TexInfo>, Vec<Texture>)> {
    if lump.len() % TEXTURE_SIZE != 0 {
        return Err(BspError::BadLumpSize {
            lump: "textures",
            len: lump.len(),
            record: TEXTURE_SIZE,
        });
    }

    let mut catalogue: HashMap<&[u8], usize> = HashMap::new();
    let mut textures = Vec::new();
    let mut tex_infos = Vec::with_capacity(lump.len() / TEXTURE_SIZE);
    for record in lump.chunks_exact(TEXTURE_SIZE) {
        let field = &record[0..64];
        let texture = *catalogue.entry(field).or_insert_with(|| {
            textures.push(Texture {
                name: texture_name(field),
                source: DataSource::External,
                next: None,
            });
            textures.len() - 1
        });

        tex_infos.push(TexInfo {
            s: Vector3::zeros(),
            ds: 0.0,
            t: Vector3::zeros(),
            dt: 0.0,
            texture,
            flags: TexFlags::empty(),
        });
    }

    Ok((tex_infos, textures))
}
