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

//! The dialect-independent model produced by a decode.
//!
//! Back references between parts (face to plane, texinfo to texture, texture
//! to its animation successor) are indices into the owning [`Model`]'s
//! arrays, so a model is relocatable and freely shareable across threads.

use std::borrow::Cow;
use std::collections::HashMap;

use crate::types::RGBA;
pub use crate::Vector3;

/// Index of a [`Plane`] in [`Model::planes`].
pub type PlaneRef = usize;
/// Index of a [`Texture`] in [`Model::textures`].
pub type TextureRef = usize;

/// On-disk plane classification. Informational only; it is decoded, never
/// re-derived from the normal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlaneType {
    AxialX,
    AxialY,
    AxialZ,
    NonAxialX,
    NonAxialY,
    NonAxialZ,
    /// Quake 3 planes carry no type field.
    Untyped,
}

/// A splitting plane.
#[derive(Debug, Clone, PartialEq)]
pub struct Plane {
    pub normal: Vector3,
    pub dist: f64,
    pub kind: PlaneType,
}

/// An ordered pair of endpoints; the direction encodes winding.
#[derive(Debug, Clone, PartialEq)]
pub struct Edge {
    pub a: Vector3,
    pub b: Vector3,
}

bitflags!(
    /// Per-texinfo flags.
    pub struct TexFlags: u32 {
        const ANIMATED = 0x1;
    }
);

/// A 256-entry RGBA lookup table for indexed pixels.
pub type Palette = [RGBA; 256];

/// Indexed pixel data for a texture embedded in the file.
///
/// Pixels are copied out of the source buffer, so the model outlives it.
#[derive(Debug, Clone, PartialEq)]
pub struct IndexedPixels {
    /// One palette index per texel, row-major.
    pub pixels: Vec<u8>,
    pub width: u32,
    pub height: u32,
    /// Embedded palette (Half-Life) or the crate's default table (Quake 1).
    pub palette: Cow<'static, Palette>,
}

/// Where a texture's pixels come from.
///
/// The variant is fixed by the dialect: Quake 2 and Quake 3 files name their
/// textures but never embed pixels; Quake 1 and Half-Life may do either.
#[derive(Debug, Clone, PartialEq)]
pub enum DataSource {
    /// Pixels are resolved out-of-band by name (archive lookup).
    External,
    /// Pixels are embedded in the file.
    Internal(IndexedPixels),
}

/// A texture referenced by one or more texinfos.
#[derive(Debug, Clone, PartialEq)]
pub struct Texture {
    /// Lower-cased, NUL-truncated within the dialect's fixed name field.
    pub name: String,
    pub source: DataSource,
    /// Successor in a Quake 2 animation chain.
    pub next: Option<TextureRef>,
}

/// A UV projection basis bound to a texture.
#[derive(Debug, Clone, PartialEq)]
pub struct TexInfo {
    pub s: Vector3,
    pub ds: f64,
    pub t: Vector3,
    pub dt: f64,
    pub texture: TextureRef,
    pub flags: TexFlags,
}

/// A key/value block from the entity lump. Duplicate keys within a block
/// resolve last-write-wins; order within a block is not meaningful.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Entity {
    pub attributes: HashMap<String, String>,
}

impl Entity {
    pub fn attr(&self, key: &str) -> Option<&str> {
        self.attributes.get(key).map(String::as_str)
    }
}

/// A face's boundary. The edge-based and vertex-based forms come from
/// different dialect families and are deliberately not unified.
#[derive(Debug, Clone, PartialEq)]
pub enum Geometry {
    /// Ordered edge loop (Quake 1, Half-Life, Quake 2).
    Edges(Vec<Edge>),
    /// Ordered triangulated vertices (Quake 3).
    Vertices(Vec<Vector3>),
}

/// A renderable surface.
#[derive(Debug, Clone, PartialEq)]
pub struct Face {
    pub geometry: Geometry,
    /// True when the face lies on the front side of its plane.
    pub front: bool,
    /// None for triangle-soup dialects.
    pub plane: Option<PlaneRef>,
    /// Copied, not referenced; many faces may carry equal texinfos.
    pub tex_info: TexInfo,
}

/// Everything decoded from one BSP file. Produced once per decode call and
/// fully owned by the caller; never mutated afterwards by this crate.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Model {
    pub entities: Vec<Entity>,
    pub planes: Vec<Plane>,
    pub faces: Vec<Face>,
    pub tex_infos: Vec<TexInfo>,
    pub textures: Vec<Texture>,
}

impl Model {
    pub fn texture(&self, idx: TextureRef) -> &Texture {
        &self.textures[idx]
    }

    pub fn plane(&self, idx: PlaneRef) -> &Plane {
        &self.planes[idx]
    }
}
