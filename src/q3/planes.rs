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

//! Quake 3 planes: 16-byte records with no axis-type field.

use crate::helpers::{slice_to_f32, slice_to_vec3};
use crate::model::{Plane, PlaneType};
use crate::types::{BspError, Result};

pub const PLANE_SIZE: usize = 16;

pub fn from_data(data: &[u8]) -> Result<Vec<Plane>> {
    if data.len() % PLANE_SIZE != 0 {
        return Err(BspError::BadLumpSize {
            lump: "planes",
            len: data.len(),
            record: PLANE_SIZE,
        });
    }

    Ok(data
        .chunks_exact(PLANE_SIZE)
        .map(|record| Plane {
            normal: slice_to_vec3(&record[0..12]),
            dist: f64::from(slice_to_f32(&record[12..16])),
            kind: PlaneType::Untyped,
        })
        .collect())
}
