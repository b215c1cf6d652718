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

//! Builders for hand-assembled BSP files used across the dialect tests.

/// Assemble a whole file: signature, lump directory, then the listed lump
/// payloads packed back to back. Offsets in the directory are file-absolute;
/// lumps not listed get a zero entry.
pub(crate) fn build_file(signature: &[u8], num_lumps: usize, lumps: &[(usize, &[u8])]) -> Vec<u8> {
    let data_start = signature.len() + num_lumps * 8;

    let mut dir = vec![(0u32, 0u32); num_lumps];
    let mut payload = Vec::new();
    for (index, bytes) in lumps {
        dir[*index] = ((data_start + payload.len()) as u32, bytes.len() as u32);
        payload.extend_from_slice(bytes);
    }

    let mut out = signature.to_vec();
    for (offset, size) in dir {
        out.extend_from_slice(&offset.to_le_bytes());
        out.extend_from_slice(&size.to_le_bytes());
    }
    out.extend_from_slice(&payload);
    out
}
