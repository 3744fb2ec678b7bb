//! glTF scene loading through the `gltf` crate.

use gltf::mesh::Semantic;
use gltf::{Accessor, Document};

use crate::error::MiddlewareError;

/// A glTF document with its buffers loaded.
pub struct Scene {
    pub document: Document,
    pub buffers: Vec<gltf::buffer::Data>,
}

/// Load a glTF document, resolving embedded `data:` buffers.
pub fn load_gltf(data: &[u8]) -> Result<Scene, MiddlewareError> {
    let (document, buffers, _images) = gltf::import_slice(data)?;
    tracing::debug!(
        meshes = document.meshes().count(),
        buffers = buffers.len(),
        "Loaded glTF document"
    );
    Ok(Scene { document, buffers })
}

impl Scene {
    pub fn mesh_count(&self) -> usize {
        self.document.meshes().count()
    }

    pub fn node_names(&self) -> Vec<String> {
        self.document
            .nodes()
            .filter_map(|n| n.name().map(str::to_string))
            .collect()
    }

    /// Vertex positions of the first primitive of the named mesh.
    pub fn mesh_positions(&self, mesh_name: &str) -> Result<Vec<[f32; 3]>, MiddlewareError> {
        let mesh = self
            .document
            .meshes()
            .find(|m| m.name() == Some(mesh_name))
            .ok_or_else(|| MiddlewareError::Missing(format!("mesh {:?} not found", mesh_name)))?;
        let primitive = mesh.primitives().next().ok_or_else(|| {
            MiddlewareError::Missing(format!("mesh {:?} has no primitives", mesh_name))
        })?;

        let reader = primitive.reader(|buffer| self.buffers.get(buffer.index()).map(|d| &d.0[..]));
        let positions = reader.read_positions().ok_or_else(|| {
            MiddlewareError::Missing(format!("mesh {:?} has no positions", mesh_name))
        })?;
        Ok(positions.collect())
    }

    /// Raw bytes of the named mesh's POSITION accessor.
    pub fn position_bytes(&self, mesh_name: &str) -> Result<Vec<u8>, MiddlewareError> {
        let accessor = self
            .document
            .meshes()
            .find(|m| m.name() == Some(mesh_name))
            .and_then(|m| m.primitives().next())
            .and_then(|p| p.get(&Semantic::Positions))
            .ok_or_else(|| {
                MiddlewareError::Missing(format!("mesh {:?} has no POSITION accessor", mesh_name))
            })?;
        self.accessor_bytes(&accessor)
    }

    /// Raw bytes of a tightly packed accessor.
    fn accessor_bytes(&self, accessor: &Accessor<'_>) -> Result<Vec<u8>, MiddlewareError> {
        let view = accessor
            .view()
            .ok_or_else(|| MiddlewareError::Missing("sparse accessor has no view".to_string()))?;
        if view.stride().is_some_and(|stride| stride != accessor.size()) {
            return Err(MiddlewareError::Missing(
                "interleaved accessors are not supported".to_string(),
            ));
        }

        let buffer = self
            .buffers
            .get(view.buffer().index())
            .ok_or_else(|| MiddlewareError::Missing("buffer not loaded".to_string()))?;
        let start = view.offset() + accessor.offset();
        let end = start + accessor.count() * accessor.size();
        buffer
            .0
            .get(start..end)
            .map(<[u8]>::to_vec)
            .ok_or_else(|| MiddlewareError::Missing("accessor exceeds buffer".to_string()))
    }
}
