//! GLB export for generated meshes

use anyhow::{Context, Result, bail};
use panosphere_glb::{BufferBuilder, GltfBuilder, MeshBuilder, assemble_glb};
use std::fs;
use std::path::Path;

use crate::geometry::MeshData;

/// Name given to the mesh and its node inside the asset
pub const MESH_NAME: &str = "Sphere";

/// Value of the glTF `asset.generator` field
pub const GENERATOR: &str = concat!(env!("CARGO_PKG_NAME"), " ", env!("CARGO_PKG_VERSION"));

/// Encode a mesh as a single-scene GLB
pub fn encode_glb(mesh: &MeshData) -> Result<Vec<u8>> {
    let mut buffer = BufferBuilder::new();
    let accessors = MeshBuilder::new()
        .positions(&mesh.positions)
        .normals(&mesh.normals)
        .indices(&mesh.indices)
        .build(&mut buffer);

    let root = GltfBuilder::new()
        .buffer_byte_length(buffer.data().len() as u64)
        .add_mesh_from_accessors(MESH_NAME, &accessors)
        .add_mesh_node(MESH_NAME)
        .add_scene("Scene", &[0])
        .build(buffer.views(), buffer.accessors(), GENERATOR);

    assemble_glb(&root, buffer.data())
}

/// Write a mesh to `path`, replacing any existing file
///
/// The format follows the extension; only `.glb` is supported. The parent
/// directory must already exist.
pub fn export_glb(mesh: &MeshData, path: &Path) -> Result<u64> {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .map(|s| s.to_lowercase())
        .unwrap_or_default();

    if ext != "glb" {
        bail!("Unsupported output format: {:?} (use .glb)", path);
    }

    let glb = encode_glb(mesh)?;
    fs::write(path, &glb).with_context(|| format!("Failed to write GLB: {}", path.display()))?;

    tracing::debug!(
        "Wrote {} ({} bytes, {} vertices, {} triangles)",
        path.display(),
        glb.len(),
        mesh.vertex_count(),
        mesh.triangle_count()
    );

    Ok(glb.len() as u64)
}
