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

//! Decoders for id-Tech BSP level files.
//!
//! Four dialects are supported: Quake 1, Half-Life, Quake 2 and Quake 3.
//! [`decode`] picks the dialect from the file's leading signature bytes and
//! produces a [`Model`]: entities, planes, faces with resolved geometry,
//! and a texture catalogue. The returned model owns all of its data, so it
//! can outlive the source buffer and move freely between threads.
//!
//! ```no_run
//! use bsp_levels::{decode, DecodeFlags};
//!
//! let data = std::fs::read("maps/e1m1.bsp").unwrap();
//! let model = decode(&data, DecodeFlags::empty()).unwrap();
//! for ent in &model.entities {
//!     println!("{:?}", ent.attr("classname"));
//! }
//! ```

#[macro_use]
extern crate bitflags;
extern crate nalgebra as na;

/// All positions and bases are promoted from on-disk f32 at load time.
pub type Vector3 = na::base::Vector3<f64>;

pub mod dispatch;
pub mod entities;
pub mod helpers;
pub mod hl;
pub mod lumps;
pub mod model;
pub mod palette;
pub mod q1;
pub mod q2;
pub mod q3;
pub mod types;

#[cfg(test)]
mod test_support;

pub use dispatch::{decode, decode_reader};
pub use model::{
    DataSource, Edge, Entity, Face, Geometry, IndexedPixels, Model, Palette, Plane, PlaneType,
    TexFlags, TexInfo, Texture,
};
pub use types::{BspError, DecodeFlags, Result, RGB, RGBA};
