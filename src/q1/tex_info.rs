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

//! Texture-info records for Quake 1 and Half-Life.
//!
//! These dialects bind a face to a texture through an index into the
//! file's own texture catalogue, plus an animation flag.

use crate::helpers::{slice_to_f32, slice_to_u32, slice_to_vec3};
use crate::model::{TexFlags, TexInfo};
use crate::types::{BspError, Result};

/// S basis + offset, T basis + offset, texture id, animation flag.
const TEX_INFO_SIZE: usize = 40;

pub fn from_data(data: &[u8], n_textures: usize) -> Result<Vec<TexInfo>> {
    if data.len() % TEX_INFO_SIZE != 0 {
        return Err(BspError::BadLumpSize {
            lump: "texinfo",
            len: data.len(),
            record: TEX_INFO_SIZE,
        });
    }
    let length = data.len() / TEX_INFO_SIZE;

    let mut infos = Vec::with_capacity(length);
    for n in 0..length {
        let record = &data[n * TEX_INFO_SIZE..(n + 1) * TEX_INFO_SIZE];

        let texture = slice_to_u32(&record[32..36]) as usize;
        if texture >= n_textures {
            return Err(BspError::IndexOutOfRange {
                what: "texinfo texture",
                index: texture as i64,
                len: n_textures,
            });
        }

        let mut flags = TexFlags::empty();
        if slice_to_u32(&record[36..40]) != 0 {
            flags |= TexFlags::ANIMATED;
        }

        infos.push(TexInfo {
            s: slice_to_vec3(&record[0..12]),
            ds: f64::from(slice_to_f32(&record[12..16])),
            t: slice_to_vec3(&record[16..28]),
            dt: f64::from(slice_to_f32(&record[28..32])),
            texture,
            flags,
        });
    }

    Ok(infos)
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use crate::model::Vector3;

    pub(crate) fn tex_info_bytes(
        s: [f32; 3],
        ds: f32,
        t: [f32; 3],
        dt: f32,
        texture: u32,
        anim: u32,
    ) -> Vec<u8> {
        let mut buf = Vec::new();
        for f in &s {
            buf.extend_from_slice(&f.to_le_bytes());
        }
        buf.extend_from_slice(&ds.to_le_bytes());
        for f in &t {
            buf.extend_from_slice(&f.to_le_bytes());
        }
        buf.extend_from_slice(&dt.to_le_bytes());
        buf.extend_from_slice(&texture.to_le_bytes());
        buf.extend_from_slice(&anim.to_le_bytes());
        buf
    }

    #[test]
    fn offsets_decode_independently() {
        let buf = tex_info_bytes([1.0, 0.0, 0.0], 8.0, [0.0, 1.0, 0.0], -16.0, 0, 0);
        let infos = from_data(&buf, 1).unwrap();
        assert_eq!(infos[0].s, Vector3::new(1.0, 0.0, 0.0));
        assert_eq!(infos[0].ds, 8.0);
        assert_eq!(infos[0].dt, -16.0);
        assert_eq!(infos[0].flags, TexFlags::empty());
    }

    #[test]
    fn animation_flag_set() {
        let buf = tex_info_bytes([1.0, 0.0, 0.0], 0.0, [0.0, 1.0, 0.0], 0.0, 0, 2);
        let infos = from_data(&buf, 1).unwrap();
        assert!(infos[0].flags.contains(TexFlags::ANIMATED));
    }

    #[test]
    fn texture_index_out_of_range_is_fatal() {
        let buf = tex_info_bytes([1.0, 0.0, 0.0], 0.0, [0.0, 1.0, 0.0], 0.0, 3, 0);
        assert!(matches!(
            from_data(&buf, 2),
            Err(BspError::IndexOutOfRange { what: "texinfo texture", .. })
        ));
    }
}
