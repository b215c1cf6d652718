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

//! Raw f32-triple vertex positions, shared by Quake 1, Half-Life and Quake 2.

use crate::helpers::slice_to_vec3;
use crate::model::Vector3;
use crate::types::{BspError, Result};

const VERTEX_SIZE: usize = 12;

pub fn from_data(data: &[u8]) -> Result<Vec<Vector3>> {
    if data.len() % VERTEX_SIZE != 0 {
        return Err(BspError::BadLumpSize {
            lump: "vertices",
            len: data.len(),
            record: VERTEX_SIZE,
        });
    }
    let length = data.len() / VERTEX_SIZE;

    let mut verts = Vec::with_capacity(length);
    for n in 0..length {
        verts.push(slice_to_vec3(&data[n * VERTEX_SIZE..(n + 1) * VERTEX_SIZE]));
    }

    Ok(verts)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_triples() {
        let mut buf = Vec::new();
        for f in &[1.0f32, 2.0, 3.0, -4.0, -5.0, -6.0] {
            buf.extend_from_slice(&f.to_le_bytes());
        }
        let verts = from_data(&buf).unwrap();
        assert_eq!(verts, vec![
            Vector3::new(1.0, 2.0, 3.0),
            Vector3::new(-4.0, -5.0, -6.0),
        ]);
    }

    #[test]
    fn ragged_lump_is_fatal() {
        assert!(from_data(&[0u8; 13]).is_err());
    }
}
