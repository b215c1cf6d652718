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

//! Helper functions for parsing

use std::convert::TryInto;

use crate::model::Vector3;

/// Turn a slice into a le u16.
/// # Panics
/// If slice is not 2 bytes long.
pub fn slice_to_u16(slice: &[u8]) -> u16 {
    u16::from_le_bytes(slice.try_into().unwrap())
}

/// Turn a slice into a le i16, the signed face-edge-table datatype.
/// # Panics
/// If slice is not 2 bytes long.
pub fn slice_to_i16(slice: &[u8]) -> i16 {
    i16::from_le_bytes(slice.try_into().unwrap())
}

/// Turn a slice into a le u32, used for offsets, counts and bitflags.
/// # Panics
/// If slice is not 4 bytes long.
pub fn slice_to_u32(slice: &[u8]) -> u32 {
    u32::from_le_bytes(slice.try_into().unwrap())
}

/// Turn a slice into a le i32.
/// # Panics
/// If slice is not 4 bytes long.
pub fn slice_to_i32(slice: &[u8]) -> i32 {
    i32::from_le_bytes(slice.try_into().unwrap())
}

/// Turn a slice into a le f32, the float datatype in a bsp file.
/// # Panics
/// If slice is not 4 bytes long.
pub fn slice_to_f32(slice: &[u8]) -> f32 {
    f32::from_bits(u32::from_le_bytes(slice.try_into().unwrap()))
}

/// Turn a slice of three le f32s into a Vector3, promoting to f64.
/// # Panics
/// If slice isn't 12 bytes long.
pub fn slice_to_vec3(slice: &[u8]) -> Vector3 {
    Vector3::new(
        f64::from(slice_to_f32(&slice[0..4])),
        f64::from(slice_to_f32(&slice[4..8])),
        f64::from(slice_to_f32(&slice[8..12])),
    )
}

/// Decode a fixed-width texture name field: NUL-terminated within the field,
/// truncated at the field bound when no terminator is present, lower-cased.
pub fn texture_name(field: &[u8]) -> String {
    let len = field.iter().position(|&b| b == 0).unwrap_or(field.len());
    String::from_utf8_lossy(&field[..len]).to_ascii_lowercase()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn name_truncates_at_nul() {
        let mut field = [0u8; 16];
        field[..6].copy_from_slice(b"metal1");
        assert_eq!(texture_name(&field), "metal1");
    }

    #[test]
    fn name_without_nul_spans_whole_field() {
        let field = *b"SIXTEENBYTENAMES";
        assert_eq!(texture_name(&field), "sixteenbytenames");
    }

    #[test]
    fn vec3_promotes_f32() {
        let mut buf = Vec::new();
        for f in &[1.5f32, -2.0, 0.25] {
            buf.extend_from_slice(&f.to_le_bytes());
        }
        assert_eq!(slice_to_vec3(&buf), Vector3::new(1.5, -2.0, 0.25));
    }
}
