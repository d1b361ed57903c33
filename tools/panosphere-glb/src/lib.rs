//! GLB writing utilities for panosphere mesh tools
//!
//! Builder-pattern APIs for constructing binary glTF files:
//! - BufferBuilder: Pack binary data with automatic alignment
//! - MeshBuilder: Positions, normals and indices for one triangle primitive
//! - GltfBuilder: Top-level GLTF document construction
//!
//! # Example
//!
//! ```no_run
//! use panosphere_glb::*;
//!
//! let mut buffer = BufferBuilder::new();
//! let mesh = MeshBuilder::new()
//!     .positions(&[[0.0, 0.0, 0.0], [1.0, 0.0, 0.0], [0.5, 1.0, 0.0]])
//!     .normals(&[[0.0, 0.0, 1.0]; 3])
//!     .indices_u16(&[0, 1, 2])
//!     .build(&mut buffer);
//!
//! let root = GltfBuilder::new()
//!     .buffer_byte_length(buffer.data().len() as u64)
//!     .add_mesh_from_accessors("Triangle", &mesh)
//!     .add_mesh_node("Triangle")
//!     .add_scene("Scene", &[0])
//!     .build(buffer.views(), buffer.accessors(), "panosphere-glb");
//!
//! let glb_bytes = assemble_glb(&root, buffer.data()).unwrap();
//! ```

pub mod buffer;
pub mod document;
pub mod mesh;
pub mod utils;

pub use buffer::{AccessorIndex, BufferBuilder};
pub use document::GltfBuilder;
pub use mesh::{MeshAccessors, MeshBuilder};
pub use utils::{align_buffer, assemble_glb, compute_bounds};

// Re-export commonly used gltf-json types
pub use gltf_json as json;
