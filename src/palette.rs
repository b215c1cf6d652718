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

//! The default 256-entry palette.
//!
//! Quake 1 BSPs store indexed pixels but no palette; the real palette lives
//! in an external archive entry. Internal textures from that dialect borrow
//! this table instead so they stay renderable on their own. The final slot
//! is the reserved transparent entry.

use crate::model::Palette;
use crate::types::RGBA;

const fn rgba(r: u8, g: u8, b: u8, a: u8) -> RGBA {
    RGBA { r, g, b, a }
}

/// Process-wide default palette. Read-only; decoders must never copy and
/// mutate it per call.
pub static DEFAULT_PALETTE: Palette = [
    rgba(0x00, 0x00, 0x00, 0xff), rgba(0x1f, 0x1f, 0x1f, 0xff),
    rgba(0x3f, 0x3f, 0x3f, 0xff), rgba(0x5b, 0x5b, 0x5b, 0xff),
    rgba(0x7b, 0x7b, 0x7b, 0xff), rgba(0x9b, 0x9b, 0x9b, 0xff),
    rgba(0xbb, 0xbb, 0xbb, 0xff), rgba(0xdb, 0xdb, 0xdb, 0xff),
    rgba(0xff, 0xff, 0xff, 0xff), rgba(0xff, 0xff, 0xff, 0xff),
    rgba(0xff, 0xff, 0xff, 0xff), rgba(0xff, 0xff, 0xff, 0xff),
    rgba(0xff, 0xff, 0xff, 0xff), rgba(0xff, 0xff, 0xff, 0xff),
    rgba(0xff, 0xff, 0xff, 0xff), rgba(0xff, 0xff, 0xff, 0xff),
    rgba(0xcf, 0x97, 0x4b, 0xff), rgba(0xa7, 0x7b, 0x3b, 0xff),
    rgba(0xa7, 0x7b, 0x3b, 0xff), rgba(0xa7, 0x7b, 0x3b, 0xff),
    rgba(0x8b, 0x67, 0x2f, 0xff), rgba(0x8b, 0x67, 0x2f, 0xff),
    rgba(0x6f, 0x53, 0x27, 0xff), rgba(0x63, 0x4b, 0x23, 0xff),
    rgba(0x63, 0x4b, 0x23, 0xff), rgba(0x53, 0x3f, 0x1f, 0xff),
    rgba(0x4f, 0x3b, 0x1b, 0xff), rgba(0x43, 0x2b, 0x17, 0xff),
    rgba(0x33, 0x27, 0x13, 0xff), rgba(0x2b, 0x1f, 0x13, 0xff),
    rgba(0x27, 0x1b, 0x0f, 0xff), rgba(0x1f, 0x17, 0x0f, 0xff),
    rgba(0xb3, 0xc7, 0xd3, 0xff), rgba(0xb3, 0xc7, 0xd3, 0xff),
    rgba(0xbb, 0xbb, 0xbb, 0xff), rgba(0xab, 0xab, 0xab, 0xff),
    rgba(0x9b, 0x9b, 0x9b, 0xff), rgba(0x9b, 0x9b, 0x9b, 0xff),
    rgba(0x8b, 0x8b, 0x8b, 0xff), rgba(0x7b, 0x7b, 0x7b, 0xff),
    rgba(0x6b, 0x6b, 0x6b, 0xff), rgba(0x5b, 0x5b, 0x5b, 0xff),
    rgba(0x5b, 0x5b, 0x5b, 0xff), rgba(0x4b, 0x4b, 0x4b, 0xff),
    rgba(0x47, 0x3f, 0x43, 0xff), rgba(0x3b, 0x37, 0x37, 0xff),
    rgba(0x2f, 0x2f, 0x2f, 0xff), rgba(0x27, 0x27, 0x27, 0xff),
    rgba(0xff, 0xff, 0xa7, 0xff), rgba(0xeb, 0x97, 0x7f, 0xff),
    rgba(0xeb, 0x97, 0x7f, 0xff), rgba(0xcf, 0x97, 0x4b, 0xff),
    rgba(0xff, 0xff, 0xa7, 0xff), rgba(0xff, 0xff, 0x7f, 0xff),
    rgba(0xff, 0xff, 0x53, 0xff), rgba(0xcf, 0x97, 0x4b, 0xff),
    rgba(0xff, 0xff, 0x53, 0xff), rgba(0xff, 0xff, 0x53, 0xff),
    rgba(0xff, 0xff, 0x53, 0xff), rgba(0xff, 0xd7, 0x17, 0xff),
    rgba(0xeb, 0x9f, 0x27, 0xff), rgba(0xaf, 0x77, 0x1f, 0xff),
    rgba(0x77, 0x4f, 0x17, 0xff), rgba(0x43, 0x2b, 0x17, 0xff),
    rgba(0xeb, 0x97, 0x7f, 0xff), rgba(0xff, 0x93, 0x00, 0xff),
    rgba(0xef, 0x7f, 0x00, 0xff), rgba(0xe3, 0x6b, 0x00, 0xff),
    rgba(0xd3, 0x57, 0x00, 0xff), rgba(0xc7, 0x47, 0x00, 0xff),
    rgba(0xc7, 0x47, 0x00, 0xff), rgba(0xab, 0x2b, 0x00, 0xff),
    rgba(0x9b, 0x1f, 0x00, 0xff), rgba(0x8f, 0x17, 0x00, 0xff),
    rgba(0x73, 0x17, 0x0b, 0xff), rgba(0x67, 0x17, 0x07, 0xff),
    rgba(0x57, 0x13, 0x00, 0xff), rgba(0x43, 0x0f, 0x00, 0xff),
    rgba(0x33, 0x0b, 0x00, 0xff), rgba(0x23, 0x0b, 0x00, 0xff),
    rgba(0xd7, 0xbb, 0xb7, 0xff), rgba(0xeb, 0x97, 0x7f, 0xff),
    rgba(0xeb, 0x97, 0x7f, 0xff), rgba(0xcb, 0x9b, 0x93, 0xff),
    rgba(0xbf, 0x7b, 0x6f, 0xff), rgba(0xa7, 0x8b, 0x77, 0xff),
    rgba(0x8f, 0x77, 0x53, 0xff), rgba(0x8f, 0x77, 0x53, 0xff),
    rgba(0x87, 0x6b, 0x57, 0xff), rgba(0x7b, 0x5f, 0x4b, 0xff),
    rgba(0x67, 0x4f, 0x3b, 0xff), rgba(0x5f, 0x47, 0x37, 0xff),
    rgba(0x4b, 0x37, 0x2b, 0xff), rgba(0x3f, 0x2f, 0x23, 0xff),
    rgba(0x2b, 0x1f, 0x13, 0xff), rgba(0x1f, 0x17, 0x0f, 0xff),
    rgba(0xcb, 0x8b, 0x23, 0xff), rgba(0xaf, 0x77, 0x1f, 0xff),
    rgba(0x9f, 0x57, 0x33, 0xff), rgba(0x8b, 0x67, 0x2f, 0xff),
    rgba(0x63, 0x4b, 0x23, 0xff), rgba(0x4f, 0x3b, 0x1b, 0xff),
    rgba(0x33, 0x27, 0x13, 0xff), rgba(0x1f, 0x17, 0x0f, 0xff),
    rgba(0xff, 0xff, 0xa7, 0xff), rgba(0xff, 0xff, 0xd3, 0xff),
    rgba(0xff, 0xff, 0xff, 0xff), rgba(0xff, 0xff, 0xff, 0xff),
    rgba(0xff, 0xff, 0xff, 0xff), rgba(0xff, 0xff, 0xff, 0xff),
    rgba(0xff, 0xff, 0xff, 0xff), rgba(0xff, 0xff, 0xff, 0xff),
    rgba(0xff, 0xff, 0xff, 0xff), rgba(0xff, 0xff, 0xff, 0xff),
    rgba(0xcb, 0xd7, 0xdf, 0xff), rgba(0x9f, 0xb7, 0xc3, 0xff),
    rgba(0x77, 0x7b, 0xcf, 0xff), rgba(0x5b, 0x87, 0x9b, 0xff),
    rgba(0x47, 0x77, 0x8b, 0xff), rgba(0x2f, 0x67, 0x7f, 0xff),
    rgba(0x2f, 0x67, 0x7f, 0xff), rgba(0x17, 0x53, 0x6f, 0xff),
    rgba(0x13, 0x4b, 0x67, 0xff), rgba(0x0b, 0x3f, 0x53, 0xff),
    rgba(0x07, 0x2f, 0x3f, 0xff), rgba(0x00, 0x1f, 0x2b, 0xff),
    rgba(0x00, 0x0f, 0x13, 0xff), rgba(0x00, 0x00, 0x00, 0xff),
    rgba(0xeb, 0xd3, 0xc7, 0xff), rgba(0xeb, 0x97, 0x7f, 0xff),
    rgba(0xeb, 0x97, 0x7f, 0xff), rgba(0xeb, 0x97, 0x7f, 0xff),
    rgba(0xbf, 0x7b, 0x6f, 0xff), rgba(0xc3, 0x73, 0x53, 0xff),
    rgba(0xb3, 0x5b, 0x4f, 0xff), rgba(0xb3, 0x5b, 0x4f, 0xff),
    rgba(0x9f, 0x4b, 0x3f, 0xff), rgba(0x7b, 0x47, 0x47, 0xff),
    rgba(0x63, 0x33, 0x33, 0xff), rgba(0x57, 0x2b, 0x2b, 0xff),
    rgba(0x3f, 0x1f, 0x1f, 0xff), rgba(0x27, 0x1b, 0x13, 0xff),
    rgba(0x17, 0x0f, 0x0b, 0xff), rgba(0x00, 0x00, 0x00, 0xff),
    rgba(0xff, 0xff, 0xff, 0xff), rgba(0xff, 0xff, 0xd3, 0xff),
    rgba(0xff, 0xff, 0xd3, 0xff), rgba(0xff, 0xff, 0xd3, 0xff),
    rgba(0xff, 0xff, 0xd3, 0xff), rgba(0xeb, 0xd3, 0xc7, 0xff),
    rgba(0xd7, 0xbb, 0xb7, 0xff), rgba(0xc7, 0xab, 0x9b, 0xff),
    rgba(0xc7, 0xab, 0x9b, 0xff), rgba(0x97, 0x9f, 0x7b, 0xff),
    rgba(0x87, 0x8b, 0x6b, 0xff), rgba(0x73, 0x73, 0x57, 0xff),
    rgba(0x5b, 0x5b, 0x43, 0xff), rgba(0x43, 0x43, 0x33, 0xff),
    rgba(0x2f, 0x2f, 0x23, 0xff), rgba(0x1b, 0x1b, 0x17, 0xff),
    rgba(0xeb, 0x97, 0x7f, 0xff), rgba(0xeb, 0x97, 0x7f, 0xff),
    rgba(0xeb, 0x97, 0x7f, 0xff), rgba(0xc3, 0x73, 0x53, 0xff),
    rgba(0xc3, 0x73, 0x53, 0xff), rgba(0xb3, 0x5b, 0x4f, 0xff),
    rgba(0xa7, 0x3b, 0x2b, 0xff), rgba(0xa7, 0x3b, 0x2b, 0xff),
    rgba(0x9f, 0x2f, 0x23, 0xff), rgba(0x8b, 0x27, 0x13, 0xff),
    rgba(0x6b, 0x2b, 0x1b, 0xff), rgba(0x57, 0x1f, 0x13, 0xff),
    rgba(0x43, 0x17, 0x0b, 0xff), rgba(0x2b, 0x0b, 0x00, 0xff),
    rgba(0x1b, 0x00, 0x00, 0xff), rgba(0x00, 0x00, 0x00, 0xff),
    rgba(0xff, 0xff, 0xff, 0xff), rgba(0xff, 0xff, 0xff, 0xff),
    rgba(0xff, 0xff, 0xff, 0xff), rgba(0xeb, 0xeb, 0xeb, 0xff),
    rgba(0xcb, 0xd7, 0xdf, 0xff), rgba(0xb3, 0xc7, 0xd3, 0xff),
    rgba(0x9f, 0xb7, 0xc3, 0xff), rgba(0x77, 0x7b, 0xcf, 0xff),
    rgba(0x77, 0x7b, 0xcf, 0xff), rgba(0x67, 0x6b, 0xb7, 0xff),
    rgba(0x5b, 0x5b, 0x9b, 0xff), rgba(0x4b, 0x4f, 0x7f, 0xff),
    rgba(0x3f, 0x3f, 0x67, 0xff), rgba(0x2f, 0x2f, 0x4b, 0xff),
    rgba(0x23, 0x1f, 0x2f, 0xff), rgba(0x17, 0x0f, 0x0b, 0xff),
    rgba(0xff, 0xff, 0xff, 0xff), rgba(0xff, 0xff, 0xd3, 0xff),
    rgba(0xff, 0xff, 0xd3, 0xff), rgba(0xff, 0xff, 0xa7, 0xff),
    rgba(0xff, 0xff, 0xa7, 0xff), rgba(0xff, 0xff, 0x7f, 0xff),
    rgba(0x9b, 0xab, 0x7b, 0xff), rgba(0x9b, 0xab, 0x7b, 0xff),
    rgba(0x87, 0x97, 0x63, 0xff), rgba(0x5f, 0xa7, 0x2f, 0xff),
    rgba(0x5f, 0x8f, 0x33, 0xff), rgba(0x5f, 0x7b, 0x33, 0xff),
    rgba(0x3f, 0x4f, 0x1b, 0xff), rgba(0x2f, 0x3b, 0x0b, 0xff),
    rgba(0x23, 0x2f, 0x07, 0xff), rgba(0x1b, 0x23, 0x00, 0xff),
    rgba(0x00, 0xff, 0x00, 0xff), rgba(0x00, 0xff, 0x00, 0xff),
    rgba(0xff, 0xff, 0x27, 0xff), rgba(0xff, 0xff, 0x53, 0xff),
    rgba(0xff, 0xff, 0x53, 0xff), rgba(0xff, 0xff, 0x53, 0xff),
    rgba(0xff, 0xff, 0x53, 0xff), rgba(0xff, 0xff, 0xff, 0xff),
    rgba(0xff, 0xff, 0xff, 0xff), rgba(0xff, 0xff, 0xff, 0xff),
    rgba(0xff, 0xff, 0xff, 0xff), rgba(0xff, 0xff, 0xa7, 0xff),
    rgba(0xff, 0xff, 0x53, 0xff), rgba(0xff, 0xff, 0x53, 0xff),
    rgba(0xff, 0xff, 0x27, 0xff), rgba(0xff, 0xff, 0x27, 0xff),
    rgba(0xff, 0xff, 0x27, 0xff), rgba(0xff, 0xff, 0x27, 0xff),
    rgba(0xff, 0xeb, 0x1f, 0xff), rgba(0xff, 0xd7, 0x17, 0xff),
    rgba(0xff, 0xab, 0x07, 0xff), rgba(0xff, 0x93, 0x00, 0xff),
    rgba(0xff, 0x93, 0x00, 0xff), rgba(0xff, 0x93, 0x00, 0xff),
    rgba(0xff, 0x00, 0x00, 0xff), rgba(0xff, 0x00, 0x00, 0xff),
    rgba(0xff, 0x00, 0x00, 0xff), rgba(0xef, 0x00, 0x00, 0xff),
    rgba(0x9b, 0x1f, 0x00, 0xff), rgba(0x7f, 0x0f, 0x00, 0xff),
    rgba(0x5f, 0x00, 0x00, 0xff), rgba(0x2f, 0x00, 0x00, 0xff),
    rgba(0xff, 0x00, 0x00, 0xff), rgba(0x37, 0x37, 0xff, 0xff),
    rgba(0xff, 0x00, 0x00, 0xff), rgba(0x00, 0x00, 0xff, 0xff),
    rgba(0x5b, 0x5b, 0x43, 0xff), rgba(0x37, 0x37, 0x2b, 0xff),
    rgba(0x23, 0x23, 0x1b, 0xff), rgba(0xff, 0xff, 0xff, 0xff),
    rgba(0xff, 0xff, 0xa7, 0xff), rgba(0xeb, 0x97, 0x7f, 0xff),
    rgba(0xeb, 0x9f, 0x27, 0xff), rgba(0xff, 0xff, 0xff, 0xff),
    rgba(0xff, 0xff, 0xff, 0xff), rgba(0xff, 0xff, 0xff, 0xff),
    rgba(0xeb, 0xd3, 0xc7, 0xff), rgba(0x9f, 0x5b, 0x53, 0x00),];
