//! High-level mesh construction

use crate::buffer::{AccessorIndex, BufferBuilder};

/// Accessor indices for a mesh
#[derive(Debug, Clone)]
pub struct MeshAccessors {
    pub positions: AccessorIndex,
    pub normals: Option<AccessorIndex>,
    pub indices: Option<AccessorIndex>,
}

/// Triangle indices in the narrowest component type the caller chose
#[derive(Debug, Clone)]
enum Indices {
    U16(Vec<u16>),
    U32(Vec<u32>),
}

/// Builder for mesh data
pub struct MeshBuilder {
    positions: Vec<[f32; 3]>,
    normals: Option<Vec<[f32; 3]>>,
    indices: Option<Indices>,
}

impl MeshBuilder {
    pub fn new() -> Self {
        Self {
            positions: Vec::new(),
            normals: None,
            indices: None,
        }
    }

    /// Set positions (required)
    pub fn positions(mut self, positions: &[[f32; 3]]) -> Self {
        self.positions = positions.to_vec();
        self
    }

    /// Set normals (optional)
    pub fn normals(mut self, normals: &[[f32; 3]]) -> Self {
        self.normals = Some(normals.to_vec());
        self
    }

    /// Set u16 indices (optional)
    pub fn indices_u16(mut self, indices: &[u16]) -> Self {
        self.indices = Some(Indices::U16(indices.to_vec()));
        self
    }

    /// Set u32 indices (optional)
    pub fn indices_u32(mut self, indices: &[u32]) -> Self {
        self.indices = Some(Indices::U32(indices.to_vec()));
        self
    }

    /// Set indices, stored as u16 when every index fits
    ///
    /// glTF reserves the maximum value of the index component type, so 65535
    /// already forces u32 storage.
    pub fn indices(self, indices: &[u32]) -> Self {
        if indices.iter().all(|&i| i < u16::MAX as u32) {
            let narrow: Vec<u16> = indices.iter().map(|&i| i as u16).collect();
            self.indices_u16(&narrow)
        } else {
            self.indices_u32(indices)
        }
    }

    /// Build and pack into buffer
    pub fn build(self, buffer: &mut BufferBuilder) -> MeshAccessors {
        let positions = buffer.pack_positions(&self.positions);
        let normals = self.normals.as_ref().map(|n| buffer.pack_vec3(n));
        let indices = self.indices.as_ref().map(|indices| match indices {
            Indices::U16(i) => buffer.pack_indices_u16(i),
            Indices::U32(i) => buffer.pack_indices_u32(i),
        });

        MeshAccessors {
            positions,
            normals,
            indices,
        }
    }
}

impl Default for MeshBuilder {
    fn default() -> Self {
        Self::new()
    }
}
