//! Low-level buffer packing with automatic alignment and accessor creation

use crate::utils::{align_buffer, compute_bounds};
use gltf_json as json;
use gltf_json::accessor::{ComponentType, GenericComponentType, Type};
use gltf_json::validation::Checked::Valid;

/// Accessor index returned by buffer operations
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AccessorIndex(pub u32);

impl AccessorIndex {
    pub fn as_json_index(&self) -> json::Index<json::Accessor> {
        json::Index::new(self.0)
    }
}

/// Layout of one packed block, used to emit its view and accessor
struct BlockLayout {
    offset: usize,
    count: usize,
    component_type: ComponentType,
    type_: Type,
    target: json::buffer::Target,
    bounds: Option<(Vec<f32>, Vec<f32>)>,
}

/// Builder for binary buffer with automatic alignment
pub struct BufferBuilder {
    buffer: Vec<u8>,
    views: Vec<json::buffer::View>,
    accessors: Vec<json::Accessor>,
}

impl BufferBuilder {
    /// Create a new empty buffer builder
    pub fn new() -> Self {
        Self {
            buffer: Vec::new(),
            views: Vec::new(),
            accessors: Vec::new(),
        }
    }

    /// Get the current accessor count
    pub fn accessor_count(&self) -> u32 {
        self.accessors.len() as u32
    }

    /// Get the binary buffer data
    pub fn data(&self) -> &[u8] {
        &self.buffer
    }

    /// Get the buffer views
    pub fn views(&self) -> &[json::buffer::View] {
        &self.views
    }

    /// Get the accessors
    pub fn accessors(&self) -> &[json::Accessor] {
        &self.accessors
    }

    /// Pack Vec3 positions with bounds calculation
    pub fn pack_positions(&mut self, positions: &[[f32; 3]]) -> AccessorIndex {
        let offset = self.buffer.len();
        for pos in positions {
            self.buffer.extend_from_slice(bytemuck::cast_slice(pos));
        }

        self.finish_block(BlockLayout {
            offset,
            count: positions.len(),
            component_type: ComponentType::F32,
            type_: Type::Vec3,
            target: json::buffer::Target::ArrayBuffer,
            bounds: Some(compute_bounds(positions)),
        })
    }

    /// Pack Vec3 data without bounds (normals, etc.)
    pub fn pack_vec3(&mut self, data: &[[f32; 3]]) -> AccessorIndex {
        let offset = self.buffer.len();
        for item in data {
            self.buffer.extend_from_slice(bytemuck::cast_slice(item));
        }

        self.finish_block(BlockLayout {
            offset,
            count: data.len(),
            component_type: ComponentType::F32,
            type_: Type::Vec3,
            target: json::buffer::Target::ArrayBuffer,
            bounds: None,
        })
    }

    /// Pack u16 indices
    pub fn pack_indices_u16(&mut self, indices: &[u16]) -> AccessorIndex {
        let offset = self.buffer.len();
        for idx in indices {
            self.buffer.extend_from_slice(&idx.to_le_bytes());
        }

        self.finish_block(BlockLayout {
            offset,
            count: indices.len(),
            component_type: ComponentType::U16,
            type_: Type::Scalar,
            target: json::buffer::Target::ElementArrayBuffer,
            bounds: None,
        })
    }

    /// Pack u32 indices (meshes with more than 65536 vertices)
    pub fn pack_indices_u32(&mut self, indices: &[u32]) -> AccessorIndex {
        let offset = self.buffer.len();
        for idx in indices {
            self.buffer.extend_from_slice(&idx.to_le_bytes());
        }

        self.finish_block(BlockLayout {
            offset,
            count: indices.len(),
            component_type: ComponentType::U32,
            type_: Type::Scalar,
            target: json::buffer::Target::ElementArrayBuffer,
            bounds: None,
        })
    }

    /// Record the view and accessor for the bytes written since `layout.offset`,
    /// then pad the buffer so the next block starts 4-byte aligned.
    fn finish_block(&mut self, layout: BlockLayout) -> AccessorIndex {
        let byte_length = self.buffer.len() - layout.offset;

        self.views.push(json::buffer::View {
            buffer: json::Index::new(0),
            byte_length: byte_length.into(),
            byte_offset: Some((layout.offset as u64).into()),
            byte_stride: None,
            extensions: Default::default(),
            extras: Default::default(),
            name: None,
            target: Some(Valid(layout.target)),
        });

        let (min, max) = match layout.bounds {
            Some((min, max)) => (
                Some(json::Value::Array(
                    min.into_iter().map(json::Value::from).collect(),
                )),
                Some(json::Value::Array(
                    max.into_iter().map(json::Value::from).collect(),
                )),
            ),
            None => (None, None),
        };

        let accessor_idx = self.accessors.len() as u32;
        self.accessors.push(json::Accessor {
            buffer_view: Some(json::Index::new(self.views.len() as u32 - 1)),
            byte_offset: Some(0u64.into()),
            count: layout.count.into(),
            component_type: Valid(GenericComponentType(layout.component_type)),
            extensions: Default::default(),
            extras: Default::default(),
            type_: Valid(layout.type_),
            min,
            max,
            name: None,
            normalized: false,
            sparse: None,
        });

        align_buffer(&mut self.buffer);
        AccessorIndex(accessor_idx)
    }
}

impl Default for BufferBuilder {
    fn default() -> Self {
        Self::new()
    }
}
