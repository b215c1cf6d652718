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

//! Typed splitting planes, shared by Quake 1, Half-Life and Quake 2.

use crate::helpers::{slice_to_f32, slice_to_u32, slice_to_vec3};
use crate::model::{Plane, PlaneType};
use crate::types::{BspError, Result};

/// 3 x f32 normal, f32 distance, u32 type.
const PLANE_SIZE: usize = 20;

pub fn from_data(data: &[u8]) -> Result<Vec<Plane>> {
    if data.len() % PLANE_SIZE != 0 {
        return Err(BspError::BadLumpSize {
            lump: "planes",
            len: data.len(),
            record: PLANE_SIZE,
        });
    }
    let length = data.len() / PLANE_SIZE;

    let mut planes = Vec::with_capacity(length);
    for n in 0..length {
        let plane = &data[n * PLANE_SIZE..(n + 1) * PLANE_SIZE];
        planes.push(Plane {
            normal: slice_to_vec3(&plane[0..12]),
            dist: f64::from(slice_to_f32(&plane[12..16])),
            kind: plane_type(slice_to_u32(&plane[16..20]))?,
        });
    }

    Ok(planes)
}

fn plane_type(raw: u32) -> Result<PlaneType> {
    Ok(match raw {
        0 => PlaneType::AxialX,
        1 => PlaneType::AxialY,
        2 => PlaneType::AxialZ,
        3 => PlaneType::NonAxialX,
        4 => PlaneType::NonAxialY,
        5 => PlaneType::NonAxialZ,
        other => return Err(BspError::BadPlaneType(other)),
    })
}
