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

//! Dialect dispatch: match the file's leading bytes against each
//! registered signature and hand the remainder to that dialect's decoder.

use std::io::Read;

use log::debug;

use crate::model::Model;
use crate::types::{BspError, DecodeFlags, Result};
use crate::{hl, q1, q2, q3};

struct Dialect {
    name: &'static str,
    signature: &'static [u8],
    decode: fn(&[u8], DecodeFlags) -> Result<Model>,
}

static DIALECTS: [Dialect; 4] = [
    Dialect {
        name: "quake 1",
        signature: &[0x1d, 0x00, 0x00, 0x00],
        decode: q1::decode,
    },
    Dialect {
        name: "half-life",
        signature: &[0x1e, 0x00, 0x00, 0x00],
        decode: hl::decode,
    },
    Dialect {
        name: "quake 2",
        signature: b"IBSP\x26\x00\x00\x00",
        decode: q2::decode,
    },
    Dialect {
        name: "quake 3",
        signature: b"IBSP\x2e\x00\x00\x00",
        decode: q3::decode,
    },
];

/// Decode a BSP file of any recognized dialect.
///
/// The signature is matched in registration order; its bytes are consumed
/// before the dialect decoder runs, so lump offsets (which are
/// file-absolute) are corrected by each dialect's header length.
pub fn decode(data: &[u8], flags: DecodeFlags) -> Result<Model> {
    for dialect in &DIALECTS {
        if data.len() >= dialect.signature.len()
            && &data[..dialect.signature.len()] == dialect.signature
        {
            debug!("signature matched dialect {}", dialect.name);
            return (dialect.decode)(&data[dialect.signature.len()..], flags);
        }
    }

    Err(BspError::UnrecognizedSignature)
}

/// Read a whole BSP stream into memory and decode it.
pub fn decode_reader<R: Read>(mut reader: R, flags: DecodeFlags) -> Result<Model> {
    let mut data = Vec::new();
    reader.read_to_end(&mut data)?;
    decode(&data, flags)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Geometry;

    #[test]
    fn quake1_signature_dispatches() {
        let file = crate::q1::tests::square_map();
        let model = decode(&file, DecodeFlags::empty()).unwrap();
        assert!(matches!(model.faces[0].geometry, Geometry::Edges(_)));
        assert_eq!(model.textures[0].name, "metal1");
    }

    #[test]
    fn quake2_signature_dispatches() {
        let file = crate::q2::tests::square_map();
        let model = decode(&file, DecodeFlags::empty()).unwrap();
        assert_eq!(model.textures[0].name, "e1u1/metal1");
    }

    #[test]
    fn quake3_signature_dispatches() {
        let file = crate::q3::tests::triangle_map();
        let model = decode(&file, DecodeFlags::empty()).unwrap();
        assert!(matches!(model.faces[0].geometry, Geometry::Vertices(_)));
    }

    #[test]
    fn unknown_signature_is_fatal() {
        assert!(matches!(
            decode(b"VBSP\x13\x00\x00\x00", DecodeFlags::empty()),
            Err(BspError::UnrecognizedSignature)
        ));
        // shorter than any signature
        assert!(matches!(
            decode(b"\x1d", DecodeFlags::empty()),
            Err(BspError::UnrecognizedSignature)
        ));
    }

    #[test]
    fn decode_reader_matches_decode() {
        let file = crate::q1::tests::square_map();
        let from_slice = decode(&file, DecodeFlags::empty()).unwrap();
        let from_reader = decode_reader(&file[..], DecodeFlags::empty()).unwrap();
        assert_eq!(from_slice, from_reader);
    }
}
