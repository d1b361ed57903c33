//! Utility functions for GLB construction

use anyhow::{Context, Result};
use gltf_json as json;

/// GLB container magic
pub const GLB_MAGIC: &[u8; 4] = b"glTF";
/// GLB container version written by [`assemble_glb`]
pub const GLB_VERSION: u32 = 2;
/// Chunk type tag for the JSON chunk ("JSON")
pub const CHUNK_JSON: u32 = 0x4E4F534A;
/// Chunk type tag for the binary chunk ("BIN\0")
pub const CHUNK_BIN: u32 = 0x004E4942;

/// Compute bounding box for positions
///
/// Empty input yields `[0.0; 3]` for both corners so the accessor bounds stay finite.
pub fn compute_bounds(positions: &[[f32; 3]]) -> (Vec<f32>, Vec<f32>) {
    if positions.is_empty() {
        return (vec![0.0; 3], vec![0.0; 3]);
    }

    let mut min = [f32::MAX; 3];
    let mut max = [f32::MIN; 3];

    for pos in positions {
        for i in 0..3 {
            min[i] = min[i].min(pos[i]);
            max[i] = max[i].max(pos[i]);
        }
    }

    (min.to_vec(), max.to_vec())
}

/// Align buffer to 4-byte boundary
pub fn align_buffer(buffer: &mut Vec<u8>) {
    while buffer.len() % 4 != 0 {
        buffer.push(0);
    }
}

/// Assemble GLB binary from JSON and buffer data
pub fn assemble_glb(root: &json::Root, buffer_data: &[u8]) -> Result<Vec<u8>> {
    let json_string =
        json::serialize::to_string(root).context("Failed to serialize GLTF JSON")?;
    let json_bytes = json_string.as_bytes();

    let json_padding = (4 - (json_bytes.len() % 4)) % 4;
    let json_chunk_length = json_bytes.len() + json_padding;

    let buffer_padding = (4 - (buffer_data.len() % 4)) % 4;
    let buffer_chunk_length = buffer_data.len() + buffer_padding;

    // Header + JSON chunk; the BIN chunk is omitted when there is no binary payload
    let mut total_length = 12 + 8 + json_chunk_length;
    if !buffer_data.is_empty() {
        total_length += 8 + buffer_chunk_length;
    }
    let total_length_u32 =
        u32::try_from(total_length).context("GLB exceeds the 4 GiB container limit")?;

    let mut glb = Vec::with_capacity(total_length);

    glb.extend_from_slice(GLB_MAGIC);
    glb.extend_from_slice(&GLB_VERSION.to_le_bytes());
    glb.extend_from_slice(&total_length_u32.to_le_bytes());

    glb.extend_from_slice(&(json_chunk_length as u32).to_le_bytes());
    glb.extend_from_slice(&CHUNK_JSON.to_le_bytes());
    glb.extend_from_slice(json_bytes);
    glb.resize(glb.len() + json_padding, 0x20); // JSON pads with spaces

    if !buffer_data.is_empty() {
        glb.extend_from_slice(&(buffer_chunk_length as u32).to_le_bytes());
        glb.extend_from_slice(&CHUNK_BIN.to_le_bytes());
        glb.extend_from_slice(buffer_data);
        glb.resize(glb.len() + buffer_padding, 0);
    }

    Ok(glb)
}
