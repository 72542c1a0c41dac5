use bevy::asset::RenderAssetUsages;
use bevy::prelude::*;
use bevy::render::mesh::{MeshVertexAttribute, PrimitiveTopology, VertexAttributeValues};
use bevy::render::render_resource::VertexFormat;

use super::reveal_mesh::{ATTRIBUTE_QUAD_CORNER, QUAD_CORNERS};

pub const ATTRIBUTE_STAR_SIZE: MeshVertexAttribute =
    MeshVertexAttribute::new("Vertex_StarSize", 918_273_643, VertexFormat::Float32);

/// Quad-expanded star mesh. Kept in the main world so regenerated stars can
/// be written into the existing attribute buffers.
pub fn create_star_mesh(positions: &[[f32; 3]], sizes: &[f32]) -> Mesh {
    let vertex_count = positions.len() * QUAD_CORNERS.len();
    let corners: Vec<[f32; 2]> = (0..vertex_count)
        .map(|i| QUAD_CORNERS[i % QUAD_CORNERS.len()])
        .collect();

    let mut mesh = Mesh::new(PrimitiveTopology::TriangleList, RenderAssetUsages::default());
    mesh.insert_attribute(Mesh::ATTRIBUTE_POSITION, vec![[0.0; 3]; vertex_count]);
    mesh.insert_attribute(ATTRIBUTE_STAR_SIZE, vec![0.0; vertex_count]);
    mesh.insert_attribute(ATTRIBUTE_QUAD_CORNER, corners);
    write_star_positions(&mut mesh, positions);
    write_star_sizes(&mut mesh, sizes);
    mesh
}

/// Overwrite the per-vertex star centres without reallocating the buffer.
pub fn write_star_positions(mesh: &mut Mesh, positions: &[[f32; 3]]) {
    if let Some(VertexAttributeValues::Float32x3(vertices)) =
        mesh.attribute_mut(Mesh::ATTRIBUTE_POSITION)
    {
        for (quad, position) in vertices.chunks_mut(QUAD_CORNERS.len()).zip(positions) {
            quad.fill(*position);
        }
    }
}

/// Overwrite the per-vertex star sizes without reallocating the buffer.
pub fn write_star_sizes(mesh: &mut Mesh, sizes: &[f32]) {
    if let Some(VertexAttributeValues::Float32(vertices)) = mesh.attribute_mut(ATTRIBUTE_STAR_SIZE)
    {
        for (quad, size) in vertices.chunks_mut(QUAD_CORNERS.len()).zip(sizes) {
            quad.fill(*size);
        }
    }
}
