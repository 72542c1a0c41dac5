/// Reveal and star field shader materials
use bevy::pbr::{MaterialPipeline, MaterialPipelineKey};
use bevy::render::mesh::MeshVertexBufferLayoutRef;
use bevy::render::render_resource::{
    RenderPipelineDescriptor, ShaderType, SpecializedMeshPipelineError,
};
use bevy::{
    prelude::*,
    reflect::TypePath,
    render::render_resource::{AsBindGroup, ShaderRef},
};

use crate::constants::path::{
    POINTS_SHADER_PATH, STARFIELD_SHADER_PATH, WIREFRAME_SHADER_PATH,
};
use crate::constants::render_settings::{
    DEFAULT_POINT_COLOUR, DEFAULT_POINT_HOVER_COLOUR, DEFAULT_POINT_SIZE,
    DEFAULT_STAR_COLOUR_PRIMARY, DEFAULT_STAR_COLOUR_SECONDARY, DEFAULT_WIREFRAME_COLOUR,
};
use crate::engine::mesh::reveal_mesh::{
    ATTRIBUTE_BARYCENTRIC, ATTRIBUTE_QUAD_CORNER, ATTRIBUTE_REVEAL_GROUP,
};
use crate::engine::mesh::star_mesh::ATTRIBUTE_STAR_SIZE;
use constants::interaction::{
    HOVER_ALPHA_GAIN, HOVER_DISTANCE_SCALE, HOVER_FALLOFF_EDGE, HOVER_SIZE_GAIN,
};
use constants::reveal::{REVEAL_TRANSITION_BAND, TOTAL_REVEAL_GROUPS};
use constants::starfield::{DEFAULT_STAR_BLUR, STAR_PERSPECTIVE_SCALE};

#[derive(Debug, Clone, Copy, ShaderType)]
pub struct WireframeUniform {
    pub colour: LinearRgba,
    pub progress: f32,
    // Reveal curve shared with `animation::reveal::local_progress`.
    pub total_groups: f32,
    pub transition_band: f32,
}

impl Default for WireframeUniform {
    fn default() -> Self {
        Self {
            colour: DEFAULT_WIREFRAME_COLOUR.into(),
            progress: 0.0,
            total_groups: TOTAL_REVEAL_GROUPS,
            transition_band: REVEAL_TRANSITION_BAND,
        }
    }
}

/// Edge view of the model: barycentric wireframe faded in per reveal group.
#[derive(Asset, TypePath, AsBindGroup, Debug, Clone, Default)]
pub struct RevealWireframeMaterial {
    #[uniform(0)]
    pub uniforms: WireframeUniform,
}

impl Material for RevealWireframeMaterial {
    fn vertex_shader() -> ShaderRef {
        WIREFRAME_SHADER_PATH.into()
    }

    fn fragment_shader() -> ShaderRef {
        WIREFRAME_SHADER_PATH.into()
    }

    fn alpha_mode(&self) -> AlphaMode {
        AlphaMode::Blend
    }

    fn specialize(
        _pipeline: &MaterialPipeline<Self>,
        descriptor: &mut RenderPipelineDescriptor,
        layout: &MeshVertexBufferLayoutRef,
        _key: MaterialPipelineKey<Self>,
    ) -> Result<(), SpecializedMeshPipelineError> {
        let vertex_layout = layout.0.get_layout(&[
            Mesh::ATTRIBUTE_POSITION.at_shader_location(0),
            ATTRIBUTE_REVEAL_GROUP.at_shader_location(1),
            ATTRIBUTE_BARYCENTRIC.at_shader_location(2),
        ])?;
        descriptor.vertex.buffers = vec![vertex_layout];
        // Both faces are drawn and the surface still occludes what is behind it.
        descriptor.primitive.cull_mode = None;
        if let Some(depth_stencil) = descriptor.depth_stencil.as_mut() {
            depth_stencil.depth_write_enabled = true;
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Copy, ShaderType)]
pub struct PointUniform {
    pub colour: LinearRgba,
    pub hover_colour: LinearRgba,
    pub cursor: Vec2,
    pub progress: f32,
    pub hover: f32,
    pub point_size: f32,
    pub total_groups: f32,
    pub transition_band: f32,
    pub hover_distance_scale: f32,
    pub hover_falloff_edge: f32,
    pub hover_size_gain: f32,
    pub hover_alpha_gain: f32,
}

impl Default for PointUniform {
    fn default() -> Self {
        Self {
            colour: DEFAULT_POINT_COLOUR.into(),
            hover_colour: DEFAULT_POINT_HOVER_COLOUR.into(),
            cursor: Vec2::ZERO,
            progress: 0.0,
            hover: 0.0,
            point_size: DEFAULT_POINT_SIZE,
            total_groups: TOTAL_REVEAL_GROUPS,
            transition_band: REVEAL_TRANSITION_BAND,
            hover_distance_scale: HOVER_DISTANCE_SCALE,
            hover_falloff_edge: HOVER_FALLOFF_EDGE,
            hover_size_gain: HOVER_SIZE_GAIN,
            hover_alpha_gain: HOVER_ALPHA_GAIN,
        }
    }
}

/// Point view of the model: revealed like the wireframe, grown and tinted
/// near the damped cursor.
#[derive(Asset, TypePath, AsBindGroup, Debug, Clone, Default)]
pub struct RevealPointMaterial {
    #[uniform(0)]
    pub uniforms: PointUniform,
}

impl Material for RevealPointMaterial {
    fn vertex_shader() -> ShaderRef {
        POINTS_SHADER_PATH.into()
    }

    fn fragment_shader() -> ShaderRef {
        POINTS_SHADER_PATH.into()
    }

    fn alpha_mode(&self) -> AlphaMode {
        AlphaMode::Blend
    }

    fn specialize(
        _pipeline: &MaterialPipeline<Self>,
        descriptor: &mut RenderPipelineDescriptor,
        layout: &MeshVertexBufferLayoutRef,
        _key: MaterialPipelineKey<Self>,
    ) -> Result<(), SpecializedMeshPipelineError> {
        let vertex_layout = layout.0.get_layout(&[
            Mesh::ATTRIBUTE_POSITION.at_shader_location(0),
            ATTRIBUTE_REVEAL_GROUP.at_shader_location(1),
            ATTRIBUTE_QUAD_CORNER.at_shader_location(2),
        ])?;
        descriptor.vertex.buffers = vec![vertex_layout];
        descriptor.primitive.cull_mode = None;
        Ok(())
    }
}

#[derive(Debug, Clone, Copy, ShaderType)]
pub struct StarFieldUniform {
    pub colour_primary: LinearRgba,
    pub colour_secondary: LinearRgba,
    pub blur_strength: f32,
    pub pixel_ratio: f32,
    pub perspective_scale: f32,
}

impl Default for StarFieldUniform {
    fn default() -> Self {
        Self {
            colour_primary: DEFAULT_STAR_COLOUR_PRIMARY.into(),
            colour_secondary: DEFAULT_STAR_COLOUR_SECONDARY.into(),
            blur_strength: DEFAULT_STAR_BLUR,
            pixel_ratio: 1.0,
            perspective_scale: STAR_PERSPECTIVE_SCALE,
        }
    }
}

/// Additive soft-disc star sprites. No reveal or hover coupling.
#[derive(Asset, TypePath, AsBindGroup, Debug, Clone, Default)]
pub struct StarFieldMaterial {
    #[uniform(0)]
    pub uniforms: StarFieldUniform,
}

impl Material for StarFieldMaterial {
    fn vertex_shader() -> ShaderRef {
        STARFIELD_SHADER_PATH.into()
    }

    fn fragment_shader() -> ShaderRef {
        STARFIELD_SHADER_PATH.into()
    }

    fn alpha_mode(&self) -> AlphaMode {
        AlphaMode::Add
    }

    fn specialize(
        _pipeline: &MaterialPipeline<Self>,
        descriptor: &mut RenderPipelineDescriptor,
        layout: &MeshVertexBufferLayoutRef,
        _key: MaterialPipelineKey<Self>,
    ) -> Result<(), SpecializedMeshPipelineError> {
        let vertex_layout = layout.0.get_layout(&[
            Mesh::ATTRIBUTE_POSITION.at_shader_location(0),
            ATTRIBUTE_STAR_SIZE.at_shader_location(1),
            ATTRIBUTE_QUAD_CORNER.at_shader_location(2),
        ])?;
        descriptor.vertex.buffers = vec![vertex_layout];
        descriptor.primitive.cull_mode = None;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::animation::reveal::local_progress;

    #[test]
    fn both_reveal_materials_carry_the_host_reveal_curve() {
        let wireframe = WireframeUniform::default();
        let points = PointUniform::default();

        assert_eq!(wireframe.total_groups, TOTAL_REVEAL_GROUPS);
        assert_eq!(wireframe.transition_band, REVEAL_TRANSITION_BAND);
        assert_eq!(points.total_groups, wireframe.total_groups);
        assert_eq!(points.transition_band, wireframe.transition_band);

        // A group at the curve's midpoint is still hidden at its lower edge.
        let group = wireframe.total_groups * 0.5;
        assert_eq!(local_progress(group, 0.5), 0.0);
        assert_eq!(local_progress(group, 0.5 + wireframe.transition_band), 1.0);
    }

    #[test]
    fn hover_and_star_tuning_reach_the_shaders() {
        let points = PointUniform::default();
        assert_eq!(points.hover_distance_scale, HOVER_DISTANCE_SCALE);
        assert_eq!(points.hover_falloff_edge, HOVER_FALLOFF_EDGE);
        assert_eq!(points.hover_size_gain, HOVER_SIZE_GAIN);
        assert_eq!(points.hover_alpha_gain, HOVER_ALPHA_GAIN);

        assert_eq!(
            StarFieldUniform::default().perspective_scale,
            STAR_PERSPECTIVE_SCALE
        );
    }
}
