use bevy::prelude::*;

use crate::constants::render_settings::{
    DEFAULT_MODEL_POSITION, DEFAULT_MODEL_ROTATION_DEGREES, DEFAULT_MODEL_SCALE,
    DEFAULT_POINT_COLOUR, DEFAULT_POINT_HOVER_COLOUR, DEFAULT_POINT_SIZE,
    DEFAULT_WIREFRAME_COLOUR,
};
use crate::engine::animation::damping::{CursorState, HoverState};
use crate::engine::animation::reveal::RevealState;
use crate::engine::mesh::partition::SharedRevealGeometry;
use crate::engine::shaders::{RevealPointMaterial, RevealWireframeMaterial};

/// Both views of the loaded model. Inserted once loading succeeds; its
/// absence means there is nothing to animate yet.
#[derive(Resource, Debug, Clone)]
pub struct ModelRenderables {
    pub geometry: SharedRevealGeometry,
    pub edges: Entity,
    pub points: Entity,
    pub wireframe_material: Handle<RevealWireframeMaterial>,
    pub point_material: Handle<RevealPointMaterial>,
}

/// Scalars shared by both materials for the current tick.
#[derive(Resource, Debug, Clone, Copy, Default, PartialEq)]
pub struct FrameUniforms {
    pub progress: f32,
    pub cursor: Vec2,
    pub hover: f32,
}

impl FrameUniforms {
    pub fn capture(reveal: &RevealState, cursor: &CursorState, hover: &HoverState) -> Self {
        Self {
            progress: reveal.progress(),
            cursor: cursor.damped(),
            hover: hover.strength(),
        }
    }
}

/// Placement of the model, applied identically to both views.
#[derive(Resource, Debug, Clone, Copy, PartialEq)]
pub struct ModelTransform {
    pub position: Vec3,
    pub scale: f32,
    /// XYZ Euler angles in degrees.
    pub rotation_degrees: Vec3,
}

impl Default for ModelTransform {
    fn default() -> Self {
        Self {
            position: DEFAULT_MODEL_POSITION,
            scale: DEFAULT_MODEL_SCALE,
            rotation_degrees: DEFAULT_MODEL_ROTATION_DEGREES,
        }
    }
}

impl ModelTransform {
    pub fn to_transform(&self) -> Transform {
        let radians = Vec3::new(
            self.rotation_degrees.x.to_radians(),
            self.rotation_degrees.y.to_radians(),
            self.rotation_degrees.z.to_radians(),
        );
        Transform {
            translation: self.position,
            rotation: Quat::from_euler(EulerRot::XYZ, radians.x, radians.y, radians.z),
            scale: Vec3::splat(self.scale),
        }
    }
}

/// Colours and point size chosen in the parameter panel.
#[derive(Resource, Debug, Clone, Copy, PartialEq)]
pub struct ModelAppearance {
    pub wireframe_colour: Color,
    pub point_colour: Color,
    pub point_hover_colour: Color,
    pub point_size: f32,
}

impl Default for ModelAppearance {
    fn default() -> Self {
        Self {
            wireframe_colour: DEFAULT_WIREFRAME_COLOUR,
            point_colour: DEFAULT_POINT_COLOUR,
            point_hover_colour: DEFAULT_POINT_HOVER_COLOUR,
            point_size: DEFAULT_POINT_SIZE,
        }
    }
}

impl ModelAppearance {
    pub fn write_wireframe(&self, material: &mut RevealWireframeMaterial) {
        material.uniforms.colour = self.wireframe_colour.into();
    }

    pub fn write_points(&self, material: &mut RevealPointMaterial) {
        material.uniforms.colour = self.point_colour.into();
        material.uniforms.hover_colour = self.point_hover_colour.into();
        material.uniforms.point_size = self.point_size;
    }
}

/// Snapshot the animation state once, after the proximity update.
pub fn capture_frame_uniforms(
    reveal: Res<RevealState>,
    cursor: Res<CursorState>,
    hover: Res<HoverState>,
    mut frame: ResMut<FrameUniforms>,
) {
    *frame = FrameUniforms::capture(&reveal, &cursor, &hover);
}

/// Copy the frame snapshot into both materials.
pub fn broadcast_frame_uniforms(
    frame: Res<FrameUniforms>,
    renderables: Res<ModelRenderables>,
    mut wireframe_materials: ResMut<Assets<RevealWireframeMaterial>>,
    mut point_materials: ResMut<Assets<RevealPointMaterial>>,
) {
    if let Some(material) = wireframe_materials.get_mut(&renderables.wireframe_material) {
        material.uniforms.progress = frame.progress;
    }

    if let Some(material) = point_materials.get_mut(&renderables.point_material) {
        material.uniforms.progress = frame.progress;
        material.uniforms.cursor = frame.cursor;
        material.uniforms.hover = frame.hover;
    }
}

pub fn apply_model_appearance(
    appearance: Res<ModelAppearance>,
    renderables: Res<ModelRenderables>,
    mut wireframe_materials: ResMut<Assets<RevealWireframeMaterial>>,
    mut point_materials: ResMut<Assets<RevealPointMaterial>>,
) {
    if !appearance.is_changed() {
        return;
    }

    if let Some(material) = wireframe_materials.get_mut(&renderables.wireframe_material) {
        appearance.write_wireframe(material);
    }
    if let Some(material) = point_materials.get_mut(&renderables.point_material) {
        appearance.write_points(material);
    }
}

pub fn sync_model_transform(
    model: Res<ModelTransform>,
    renderables: Res<ModelRenderables>,
    mut transforms: Query<&mut Transform>,
) {
    if !model.is_changed() && !renderables.is_added() {
        return;
    }

    let target = model.to_transform();
    for entity in [renderables.edges, renderables.points] {
        if let Ok(mut transform) = transforms.get_mut(entity) {
            *transform = target;
        }
    }
}
