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

//! The miptex texture catalogue used by Quake 1 and Half-Life.
//!
//! The lump opens with a u32 texture count and that many u32 offsets, each
//! pointing at a 40-byte miptex header (name, dimensions, four mip offsets)
//! within the lump. A directory offset of 0 or 0xffffffff is the sentinel
//! for "resolved externally by name".

use std::borrow::Cow;

use crate::helpers::{slice_to_u32, texture_name};
use crate::model::{DataSource, IndexedPixels, Texture};
use crate::palette::DEFAULT_PALETTE;
use crate::types::{BspError, DecodeFlags, Result};

pub const MIPTEX_HEADER_SIZE: usize = 40;
const EXTERNAL_SENTINEL: u32 = 0xffff_ffff;

/// A miptex header plus the lump tail it indexes into; `None` when the
/// directory entry carries the external sentinel.
pub struct MipTex<'a> {
    pub name: String,
    pub width: u32,
    pub height: u32,
    /// Offsets of the four mip levels, relative to the header start.
    pub mips: [u32; 4],
    /// The lump from the header start onward; pixel and palette offsets
    /// are resolved against this.
    pub body: &'a [u8],
}

/// Walk the miptex directory. An empty lump holds no textures.
pub fn directory(lump: &[u8]) -> Result<Vec<Option<MipTex<'_>>>> {
    if lump.is_empty() {
        return Ok(Vec::new());
    }
    if lump.len() < 4 {
        return Err(BspError::Truncated {
            what: "miptex directory",
            need: 4,
            have: lump.len(),
        });
    }

    let count = slice_to_u32(&lump[0..4]) as usize;
    let dir_end = 4 + count * 4;
    if lump.len() < dir_end {
        return Err(BspError::Truncated {
            what: "miptex directory",
            need: dir_end,
            have: lump.len(),
        });
    }

    let mut out = Vec::with_capacity(count);
    for n in 0..count {
        let offset = slice_to_u32(&lump[4 + n * 4..8 + n * 4]);
        if offset == 0 || offset == EXTERNAL_SENTINEL {
            out.push(None);
            continue;
        }

        let body = lump
            .get(offset as usize..)
            .filter(|body| body.len() >= MIPTEX_HEADER_SIZE)
            .ok_or(BspError::IndexOutOfRange {
                what: "miptex header",
                index: i64::from(offset),
                len: lump.len(),
            })?;

        out.push(Some(MipTex {
            name: texture_name(&body[0..16]),
            width: slice_to_u32(&body[16..20]),
            height: slice_to_u32(&body[20..24]),
            mips: [
                slice_to_u32(&body[24..28]),
                slice_to_u32(&body[28..32]),
                slice_to_u32(&body[32..36]),
                slice_to_u32(&body[36..40]),
            ],
            body,
        }));
    }

    Ok(out)
}

/// Slice `count` pixel bytes out of a miptex body, bounds-checked.
pub fn pixel_range<'a>(mip: &MipTex<'a>, offset: u32, count: usize) -> Result<&'a [u8]> {
    (offset as usize)
        .checked_add(count)
        .and_then(|end| mip.body.get(offset as usize..end))
        .ok_or(BspError::IndexOutOfRange {
            what: "texture pixels",
            index: i64::from(offset),
            len: mip.body.len(),
        })
}

/// Decode the Quake 1 texture lump.
///
/// Quake 1 files embed indexed pixels but no palette; internal textures
/// borrow the crate's default palette table.
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
                palette: Cow::Borrowed(&DEFAULT_PALETTE),
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
