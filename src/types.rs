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

//! Error taxonomy, decode flags and small shared value types.

use std::convert::TryInto;
use std::io;

use thiserror::Error;

/// An error encountered while decoding a BSP file.
///
/// Every variant is fatal: no partial model is ever returned, and the
/// dialect is pinned at dispatch time so a later failure is never grounds
/// for retrying another dialect.
#[derive(Debug, Error)]
pub enum BspError {
    /// The leading bytes match no registered dialect signature.
    #[error("unrecognized bsp signature")]
    UnrecognizedSignature,

    /// The buffer is too short to hold a required structure.
    #[error("{what} needs {need} bytes, only {have} available")]
    Truncated {
        what: &'static str,
        need: usize,
        have: usize,
    },

    /// A lump's declared span falls outside the file buffer.
    #[error("lump {lump} spans [{start:#x}, {end:#x}) outside {len:#x} byte buffer")]
    LumpOutOfRange {
        lump: usize,
        start: usize,
        end: usize,
        len: usize,
    },

    /// A lump's byte length is not an exact multiple of its record size.
    #[error("{lump} lump length {len} is not a multiple of {record} byte records")]
    BadLumpSize {
        lump: &'static str,
        len: usize,
        record: usize,
    },

    /// An index read from the file falls outside its target table.
    #[error("{what} index {index} out of range (table holds {len})")]
    IndexOutOfRange {
        what: &'static str,
        index: i64,
        len: usize,
    },

    /// A plane's on-disk type field is not one of the six known values.
    #[error("unknown plane type {0}")]
    BadPlaneType(u32),

    /// A byte outside the entity grammar appeared in a structural position.
    #[error("unexpected byte {byte:#04x} at offset {offset} in entity text")]
    UnexpectedByte { byte: u8, offset: usize },

    /// A quoted key or value ran to the end of the entity lump unclosed.
    #[error("unterminated string starting at offset {offset} in entity text")]
    UnterminatedString { offset: usize },

    /// An I/O failure from the byte source, propagated unchanged.
    #[error(transparent)]
    Io(#[from] io::Error),
}

/// Standard result type.
pub type Result<T> = std::result::Result<T, BspError>;

bitflags!(
    /// Options accepted by [`decode`](crate::decode).
    pub struct DecodeFlags: u32 {
        /// Stop after the entity lump; all other model tables stay empty.
        const ENTITIES_ONLY = 0x1;

        /// Catalogue textures by name only, skipping pixel and palette
        /// materialization.
        const NO_TEXTURES = 0x2;

        /// Accepted for compatibility; lightmaps are never decoded.
        const NO_LIGHTMAPS = 0x4;
    }
);

/// RGBA Colour (0-255)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RGBA {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl RGBA {
    /// Interpret the given bytes as an RGBA colour.
    pub fn from_bytes(bytes: [u8; 4]) -> RGBA {
        RGBA {
            r: bytes[0],
            g: bytes[1],
            b: bytes[2],
            a: bytes[3],
        }
    }
}

/// RGB Colour (0-255)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RGB {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl RGB {
    /// Interpret the given bytes as an RGB colour.
    pub fn from_bytes(bytes: [u8; 3]) -> RGB {
        RGB {
            r: bytes[0],
            g: bytes[1],
            b: bytes[2],
        }
    }

    /// Convert a slice to an RGB colour
    /// # Panics
    /// If slice is not 3 bytes long.
    pub fn from_slice(slice: &[u8]) -> RGB {
        RGB::from_bytes(slice.try_into().unwrap())
    }
}
