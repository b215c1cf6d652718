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

//! Half-Life textures: the Quake 1 miptex catalogue plus an embedded
//! palette per internal texture.
//!
//! The palette sits after the last stored mip level. Its offset is probed
//! from the third mip down to the first (each adjusted by that mip's
//! pixel-count divisor), falling back to "right after the full-resolution
//! pixels". The table opens with a u16 entry count followed by RGB triples;
//! pure blue is the transparency key, and unused slots pad out to 256 with
//! transparent black.

use std::borrow::Cow;

use crate::helpers::slice_to_u16;
use crate::model::{DataSource, IndexedPixels, Palette, Texture};
use crate::q1::textures::{directory, pixel_range, MipTex};
use crate::types::{BspError, DecodeFlags, Result, RGB, RGBA};

const TRANSPARENT_BLACK: RGBA = RGBA {
    r: 0,
    g: 0,
    b: 0,
    a: 0,
};

/// The reserved transparency key: pure blue.
const COLOR_KEY: RGB = RGB {
    r: 0,
    g: 0,
    b: 0xff,
};

/// Decode the Half-Life texture lump.
pub fn from_data(lump: &[u8], flags: DecodeFlags) -> Result<Vec<Texture>> {
    let mut textures = Vec::new();

    for entry in directory(lump)? {
        let mip = match entry {
            Some(mip) => mip,
            None => {
                textures.push(Texture {
                    name: String::new(),
                    source: DataSource::External,
                    next: None,
                });
                continue;
            }
        };

        let source = if flags.contains(DecodeFlags::NO_TEXTURES) {
            DataSource::External
        } else {
            let count = mip.width as usize * mip.height as usize;
            DataSource::Internal(IndexedPixels {
                pixels: pixel_range(&mip, mip.mips[0], count)?.to_vec(),
                width: mip.width,
                height: mip.height,
                palette: Cow::Owned(palette_from_mip(&mip)?),
            })
        };

        textures.push(Texture {
            name: mip.name,
            source,
            next: None,
        });
    }

    Ok(textures)
}

/// Locate and decode the embedded palette of one miptex.
fn palette_from_mip(mip: &MipTex<'_>) -> Result<Palette> {
    let count = mip.width as usize * mip.height as usize;

    // First non-zero mip offset wins, largest divisor first.
    let offset = if mip.mips[3] != 0 {
        mip.mips[3] as usize + count / 64
    } else if mip.mips[2] != 0 {
        mip.mips[2] as usize + count / 16
    } else if mip.mips[1] != 0 {
        mip.mips[1] as usize + count / 4
    } else {
        mip.mips[0] as usize + count
    };

    let out_of_range = |index: usize| BspError::IndexOutOfRange {
        what: "texture palette",
        index: index as i64,
        len: mip.body.len(),
    };

    let len = slice_to_u16(
        mip.body
            .get(offset..offset + 2)
            .ok_or_else(|| out_of_range(offset))?,
    ) as usize;
    if len > 256 {
        return Err(BspError::IndexOutOfRange {
            what: "palette entries",
            index: len as i64,
            len: 256,
        });
    }

    let triples = mip
        .body
        .get(offset + 2..offset + 2 + len * 3)
        .ok_or_else(|| out_of_range(offset + 2))?;

    let mut palette = [TRANSPARENT_BLACK; 256];
    for (slot, triple) in palette.iter_mut().zip(triples.chunks_exact(3)) {
        let rgb = RGB::from_slice(triple);
        *slot = RGBA {
            r: rgb.r,
            g: rgb.g,
            b: rgb.b,
            a: if rgb == COLOR_KEY { 0 } else { 0xff },
        };
    }

    Ok(palette)
}
