use bevy::gltf::{Gltf, GltfMesh};
use bevy::prelude::*;
use bevy::render::view::NoFrustumCulling;

use crate::engine::core::app_state::AppState;
use crate::engine::loading::model_loader::ModelLoader;
use crate::engine::loading::progress::LoadingProgress;
use crate::engine::mesh::partition::{GeometryError, SharedRevealGeometry, build_reveal_geometry};
use crate::engine::mesh::reveal_mesh::{create_edge_mesh, create_point_quad_mesh};
use crate::engine::render::coordinator::{ModelAppearance, ModelRenderables, ModelTransform};
use crate::engine::shaders::{RevealPointMaterial, RevealWireframeMaterial};

/// Every primitive of every mesh in the file, in document order, simplified
/// into one geometry.
pub fn collect_model_geometry(
    gltf: &Gltf,
    gltf_meshes: &Assets<GltfMesh>,
    meshes: &Assets<Mesh>,
) -> Result<SharedRevealGeometry, GeometryError> {
    let primitives = gltf
        .meshes
        .iter()
        .filter_map(|handle| gltf_meshes.get(handle))
        .flat_map(|gltf_mesh| gltf_mesh.primitives.iter())
        .filter_map(|primitive| meshes.get(&primitive.mesh));

    build_reveal_geometry(primitives)
}

pub fn create_renderables_when_ready(
    mut loading_progress: ResMut<LoadingProgress>,
    mut commands: Commands,
    model_loader: Res<ModelLoader>,
    gltfs: Res<Assets<Gltf>>,
    gltf_meshes: Res<Assets<GltfMesh>>,
    mut meshes: ResMut<Assets<Mesh>>,
    mut wireframe_materials: ResMut<Assets<RevealWireframeMaterial>>,
    mut point_materials: ResMut<Assets<RevealPointMaterial>>,
    model_transform: Res<ModelTransform>,
    appearance: Res<ModelAppearance>,
    mut next_state: ResMut<NextState<AppState>>,
) {
    if loading_progress.renderables_created || !loading_progress.model_loaded {
        return;
    }
    let Some(gltf) = model_loader.handle().and_then(|handle| gltfs.get(handle)) else {
        return;
    };

    let geometry = match collect_model_geometry(gltf, &gltf_meshes, &meshes) {
        Ok(geometry) => geometry,
        Err(err) => {
            error!("Model has no usable geometry: {err}");
            loading_progress.fail(err.to_string());
            next_state.set(AppState::LoadFailed);
            return;
        }
    };

    let mut wireframe_material = RevealWireframeMaterial::default();
    appearance.write_wireframe(&mut wireframe_material);
    let mut point_material = RevealPointMaterial::default();
    appearance.write_points(&mut point_material);
    let wireframe_material = wireframe_materials.add(wireframe_material);
    let point_material = point_materials.add(point_material);

    let transform = model_transform.to_transform();
    let edges = commands
        .spawn((
            Mesh3d(meshes.add(create_edge_mesh(&geometry))),
            MeshMaterial3d(wireframe_material.clone()),
            transform,
            Visibility::Visible,
        ))
        .id();
    let points = commands
        .spawn((
            Mesh3d(meshes.add(create_point_quad_mesh(&geometry))),
            MeshMaterial3d(point_material.clone()),
            transform,
            Visibility::Visible,
            // Quads are expanded in the vertex stage, outside the mesh bounds.
            NoFrustumCulling,
        ))
        .id();

    info!(
        "Model views spawned: {} vertices in {} reveal groups",
        geometry.vertex_count(),
        geometry.group_count()
    );

    commands.insert_resource(ModelRenderables {
        geometry,
        edges,
        points,
        wireframe_material,
        point_material,
    });
    loading_progress.renderables_created = true;
    next_state.set(AppState::Running);
}
