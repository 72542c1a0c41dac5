use bevy::asset::RenderAssetUsages;
use bevy::prelude::*;
use bevy::render::mesh::{MeshVertexAttribute, PrimitiveTopology};
use bevy::render::render_resource::VertexFormat;

use super::partition::RevealGeometry;

/// Reveal group of the vertex, evaluated per vertex in the shaders.
pub const ATTRIBUTE_REVEAL_GROUP: MeshVertexAttribute =
    MeshVertexAttribute::new("Vertex_RevealGroup", 918_273_640, VertexFormat::Float32);

/// Barycentric coordinate used by the wireframe fragment stage to find edges.
pub const ATTRIBUTE_BARYCENTRIC: MeshVertexAttribute =
    MeshVertexAttribute::new("Vertex_Barycentric", 918_273_641, VertexFormat::Float32x3);

/// Corner of the screen-aligned quad a point or star expands into, in [-0.5, 0.5].
pub const ATTRIBUTE_QUAD_CORNER: MeshVertexAttribute =
    MeshVertexAttribute::new("Vertex_QuadCorner", 918_273_642, VertexFormat::Float32x2);

/// Two triangles per point, wound counter-clockwise.
pub const QUAD_CORNERS: [[f32; 2]; 6] = [
    [-0.5, -0.5],
    [0.5, -0.5],
    [0.5, 0.5],
    [-0.5, -0.5],
    [0.5, 0.5],
    [-0.5, 0.5],
];

const BARYCENTRIC_CORNERS: [[f32; 3]; 3] = [[1.0, 0.0, 0.0], [0.0, 1.0, 0.0], [0.0, 0.0, 1.0]];

/// Edge view: the retained triangles with a barycentric tag per corner.
pub fn create_edge_mesh(geometry: &RevealGeometry) -> Mesh {
    let barycentric: Vec<[f32; 3]> = (0..geometry.vertex_count())
        .map(|i| BARYCENTRIC_CORNERS[i % 3])
        .collect();

    let mut mesh = Mesh::new(PrimitiveTopology::TriangleList, RenderAssetUsages::RENDER_WORLD);
    mesh.insert_attribute(Mesh::ATTRIBUTE_POSITION, geometry.positions().to_vec());
    mesh.insert_attribute(ATTRIBUTE_REVEAL_GROUP, geometry.groups().to_vec());
    mesh.insert_attribute(ATTRIBUTE_BARYCENTRIC, barycentric);
    mesh
}

/// Point view: every retained vertex expands to a quad in the vertex shader.
/// All six vertices of a quad carry the point's position and group.
pub fn create_point_quad_mesh(geometry: &RevealGeometry) -> Mesh {
    let quad_vertex_count = geometry.vertex_count() * QUAD_CORNERS.len();
    let mut positions = Vec::with_capacity(quad_vertex_count);
    let mut groups = Vec::with_capacity(quad_vertex_count);
    let mut corners = Vec::with_capacity(quad_vertex_count);

    for (position, group) in geometry.positions().iter().zip(geometry.groups()) {
        for corner in QUAD_CORNERS {
            positions.push(*position);
            groups.push(*group);
            corners.push(corner);
        }
    }

    let mut mesh = Mesh::new(PrimitiveTopology::TriangleList, RenderAssetUsages::RENDER_WORLD);
    mesh.insert_attribute(Mesh::ATTRIBUTE_POSITION, positions);
    mesh.insert_attribute(ATTRIBUTE_REVEAL_GROUP, groups);
    mesh.insert_attribute(ATTRIBUTE_QUAD_CORNER, corners);
    mesh
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::mesh::partition::partition_positions;
    use bevy::render::mesh::VertexAttributeValues;

    fn sample_geometry() -> RevealGeometry {
        let source: Vec<[f32; 3]> = (0..36).map(|i| [i as f32, 1.0, 2.0]).collect();
        partition_positions(&source)
    }

    #[test]
    fn edge_mesh_tags_triangle_corners() {
        let geometry = sample_geometry();
        let mesh = create_edge_mesh(&geometry);

        assert_eq!(mesh.count_vertices(), geometry.vertex_count());
        let Some(VertexAttributeValues::Float32x3(barycentric)) =
            mesh.attribute(ATTRIBUTE_BARYCENTRIC)
        else {
            panic!("barycentric attribute missing");
        };
        assert_eq!(barycentric[0], [1.0, 0.0, 0.0]);
        assert_eq!(barycentric[4], [0.0, 1.0, 0.0]);
        assert_eq!(barycentric[5], [0.0, 0.0, 1.0]);
    }

    #[test]
    fn point_mesh_expands_every_point_to_six_vertices() {
        let geometry = sample_geometry();
        let mesh = create_point_quad_mesh(&geometry);

        assert_eq!(mesh.count_vertices(), geometry.vertex_count() * 6);
        let Some(VertexAttributeValues::Float32(groups)) = mesh.attribute(ATTRIBUTE_REVEAL_GROUP)
        else {
            panic!("group attribute missing");
        };
        // Retained vertex 6 starts group 1; its quad begins at 36.
        assert_eq!(groups[35], 0.0);
        assert_eq!(groups[36], 1.0);
    }
}
