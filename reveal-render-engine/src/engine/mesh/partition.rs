use std::sync::Arc;

use bevy::prelude::*;
use bevy::render::mesh::{PrimitiveTopology, VertexAttributeValues};
use constants::reveal::{RETAINED_VERTICES_PER_WINDOW, SOURCE_WINDOW_VERTICES, VERTICES_PER_GROUP};
use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum GeometryError {
    #[error("mesh has no vertex positions")]
    MissingPositions,
    #[error("vertex positions are not Float32x3")]
    UnsupportedPositionFormat,
    #[error("primitive topology {0:?} is not a triangle list")]
    UnsupportedTopology(PrimitiveTopology),
    #[error("index {index} is out of range for {vertex_count} vertices")]
    IndexOutOfRange { index: usize, vertex_count: usize },
    #[error("model contains no mesh primitives")]
    NoPrimitives,
    #[error("no complete triangle survived simplification of {0} source vertices")]
    EmptyAfterSimplification(usize),
}

/// Simplified vertex positions with the reveal group of every vertex.
///
/// Built once per loaded model and shared by the edge and point renderables.
#[derive(Debug, Clone, PartialEq)]
pub struct RevealGeometry {
    positions: Vec<[f32; 3]>,
    groups: Vec<f32>,
}

impl RevealGeometry {
    pub fn positions(&self) -> &[[f32; 3]] {
        &self.positions
    }

    pub fn groups(&self) -> &[f32] {
        &self.groups
    }

    pub fn vertex_count(&self) -> usize {
        self.positions.len()
    }

    pub fn group_count(&self) -> usize {
        self.vertex_count().div_ceil(VERTICES_PER_GROUP)
    }
}

pub type SharedRevealGeometry = Arc<RevealGeometry>;

/// Reduce a triangle soup and tag every retained vertex with its reveal group.
///
/// Each window of nine source vertices contributes its leading triangle. A
/// trailing window whose leading triangle is incomplete is dropped.
pub fn partition_positions(source: &[[f32; 3]]) -> RevealGeometry {
    let mut positions = Vec::with_capacity(
        source.len() / SOURCE_WINDOW_VERTICES * RETAINED_VERTICES_PER_WINDOW
            + RETAINED_VERTICES_PER_WINDOW,
    );

    for window in source.chunks(SOURCE_WINDOW_VERTICES) {
        if let Some(triangle) = window.get(..RETAINED_VERTICES_PER_WINDOW) {
            positions.extend_from_slice(triangle);
        }
    }

    let groups = (0..positions.len())
        .map(|i| (i / VERTICES_PER_GROUP) as f32)
        .collect();

    RevealGeometry { positions, groups }
}

/// Read a triangle-list mesh's positions as a non-indexed triangle soup.
pub fn triangle_soup_positions(mesh: &Mesh) -> Result<Vec<[f32; 3]>, GeometryError> {
    let topology = mesh.primitive_topology();
    if topology != PrimitiveTopology::TriangleList {
        return Err(GeometryError::UnsupportedTopology(topology));
    }

    let positions = match mesh.attribute(Mesh::ATTRIBUTE_POSITION) {
        Some(VertexAttributeValues::Float32x3(positions)) => positions,
        Some(_) => return Err(GeometryError::UnsupportedPositionFormat),
        None => return Err(GeometryError::MissingPositions),
    };

    let Some(indices) = mesh.indices() else {
        return Ok(positions.clone());
    };

    indices
        .iter()
        .map(|index| {
            positions
                .get(index)
                .copied()
                .ok_or(GeometryError::IndexOutOfRange {
                    index,
                    vertex_count: positions.len(),
                })
        })
        .collect()
}

/// Concatenate the triangle soups of several meshes and partition the result.
pub fn build_reveal_geometry<'a>(
    meshes: impl IntoIterator<Item = &'a Mesh>,
) -> Result<SharedRevealGeometry, GeometryError> {
    let mut source = Vec::new();
    let mut primitive_count = 0;

    for mesh in meshes {
        source.extend(triangle_soup_positions(mesh)?);
        primitive_count += 1;
    }

    if primitive_count == 0 {
        return Err(GeometryError::NoPrimitives);
    }

    let geometry = partition_positions(&source);
    if geometry.vertex_count() == 0 {
        return Err(GeometryError::EmptyAfterSimplification(source.len()));
    }

    Ok(Arc::new(geometry))
}

#[cfg(test)]
mod tests {
    use super::*;
    use bevy::asset::RenderAssetUsages;
    use bevy::render::mesh::Indices;

    fn numbered_vertices(count: usize) -> Vec<[f32; 3]> {
        (0..count).map(|i| [i as f32, 0.0, 0.0]).collect()
    }

    #[test]
    fn two_source_triangles_keep_one_triangle_in_group_zero() {
        // 18 floats: one partial window with a complete leading triangle.
        let geometry = partition_positions(&numbered_vertices(6));

        assert_eq!(geometry.vertex_count(), 3);
        assert_eq!(geometry.groups(), &[0.0, 0.0, 0.0]);
        assert_eq!(geometry.positions()[2], [2.0, 0.0, 0.0]);
    }

    #[test]
    fn keeps_leading_triangle_of_every_window() {
        let geometry = partition_positions(&numbered_vertices(27));
        let kept: Vec<f32> = geometry.positions().iter().map(|p| p[0]).collect();

        assert_eq!(kept, vec![0.0, 1.0, 2.0, 9.0, 10.0, 11.0, 18.0, 19.0, 20.0]);
    }

    #[test]
    fn drops_incomplete_trailing_triangle() {
        // Second window holds only two vertices.
        let geometry = partition_positions(&numbered_vertices(11));

        assert_eq!(geometry.vertex_count(), 3);
    }

    #[test]
    fn six_vertices_share_a_group() {
        let geometry = partition_positions(&numbered_vertices(9 * 5));
        let expected: Vec<f32> = (0..15).map(|i| (i / 6) as f32).collect();

        assert_eq!(geometry.groups(), expected.as_slice());
        assert_eq!(geometry.group_count(), 3);
    }

    #[test]
    fn groups_never_decrease() {
        let geometry = partition_positions(&numbered_vertices(9 * 40 + 4));

        assert!(geometry.groups().windows(2).all(|pair| pair[0] <= pair[1]));
        assert_eq!(geometry.groups().len(), geometry.vertex_count());
    }

    #[test]
    fn partition_is_deterministic() {
        let source: Vec<[f32; 3]> = (0..200)
            .map(|i| [(i as f32).sin(), (i as f32).cos(), i as f32 * 0.5])
            .collect();

        assert_eq!(partition_positions(&source), partition_positions(&source));
    }

    #[test]
    fn indexed_mesh_is_expanded_before_partitioning() {
        let mut mesh = Mesh::new(PrimitiveTopology::TriangleList, RenderAssetUsages::default());
        mesh.insert_attribute(
            Mesh::ATTRIBUTE_POSITION,
            vec![[0.0, 0.0, 0.0], [1.0, 0.0, 0.0], [0.0, 1.0, 0.0], [1.0, 1.0, 0.0]],
        );
        mesh.insert_indices(Indices::U32(vec![0, 1, 2, 2, 1, 3]));

        let soup = triangle_soup_positions(&mesh).unwrap();

        assert_eq!(soup.len(), 6);
        assert_eq!(soup[3], [0.0, 1.0, 0.0]);
        assert_eq!(soup[5], [1.0, 1.0, 0.0]);
    }

    #[test]
    fn non_triangle_primitives_are_rejected() {
        let mut mesh = Mesh::new(PrimitiveTopology::LineList, RenderAssetUsages::default());
        mesh.insert_attribute(Mesh::ATTRIBUTE_POSITION, numbered_vertices(6));

        assert_eq!(
            triangle_soup_positions(&mesh),
            Err(GeometryError::UnsupportedTopology(PrimitiveTopology::LineList))
        );
    }

    #[test]
    fn out_of_range_index_fails_instead_of_shifting_triangles() {
        let mut mesh = Mesh::new(PrimitiveTopology::TriangleList, RenderAssetUsages::default());
        mesh.insert_attribute(Mesh::ATTRIBUTE_POSITION, numbered_vertices(3));
        mesh.insert_indices(Indices::U16(vec![0, 1, 7, 0, 1, 2]));

        assert_eq!(
            triangle_soup_positions(&mesh),
            Err(GeometryError::IndexOutOfRange {
                index: 7,
                vertex_count: 3
            })
        );
    }

    #[test]
    fn mesh_without_positions_is_rejected() {
        let mesh = Mesh::new(PrimitiveTopology::TriangleList, RenderAssetUsages::default());

        assert_eq!(
            triangle_soup_positions(&mesh),
            Err(GeometryError::MissingPositions)
        );
    }

    #[test]
    fn empty_model_is_rejected() {
        let meshes: Vec<Mesh> = Vec::new();

        assert_eq!(
            build_reveal_geometry(&meshes).unwrap_err(),
            GeometryError::NoPrimitives
        );
    }

    #[test]
    fn primitives_are_concatenated_in_order() {
        let mut first = Mesh::new(PrimitiveTopology::TriangleList, RenderAssetUsages::default());
        first.insert_attribute(Mesh::ATTRIBUTE_POSITION, numbered_vertices(9));
        let mut second = Mesh::new(PrimitiveTopology::TriangleList, RenderAssetUsages::default());
        second.insert_attribute(Mesh::ATTRIBUTE_POSITION, vec![[100.0, 0.0, 0.0]; 3]);

        let geometry = build_reveal_geometry([&first, &second]).unwrap();

        assert_eq!(geometry.vertex_count(), 6);
        assert_eq!(geometry.positions()[3], [100.0, 0.0, 0.0]);
    }
}
