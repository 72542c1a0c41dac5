use bevy::prelude::*;
use bevy_egui::{EguiContexts, egui};
use constants::panel::{
    CAMERA_FOV_DEGREES_RANGE, MODEL_POSITION_RANGE, MODEL_ROTATION_DEGREES_RANGE,
    MODEL_SCALE_RANGE, POINT_SIZE_RANGE, STAR_BLUR_RANGE, STAR_SIZE_RANGE, STAR_SPREAD_RANGE,
};

use super::parameter_panel::{Axis, ParameterChange, ParameterChangeEvent, ParameterSource};
use crate::engine::camera::orbit_camera::CameraLens;
use crate::engine::render::coordinator::{ModelAppearance, ModelTransform};
use crate::engine::scene::starfield::{StarField, StarFieldSettings};

/// True while the pointer is over the panel or dragging one of its widgets.
/// Camera input is ignored meanwhile.
#[derive(Resource, Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct PanelPointerCapture(pub bool);

/// Editable copy of every panel control. Colours are sRGB triples.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PanelValues {
    pub position: Vec3,
    pub scale: f32,
    pub rotation_degrees: Vec3,
    pub wireframe_colour: [f32; 3],
    pub point_colour: [f32; 3],
    pub point_hover_colour: [f32; 3],
    pub point_size: f32,
    pub fov_degrees: f32,
    pub star_size: f32,
    pub star_blur: f32,
    pub star_colour_primary: [f32; 3],
    pub star_colour_secondary: [f32; 3],
    pub star_spread: f32,
}

impl PanelValues {
    pub fn capture(
        model: &ModelTransform,
        appearance: &ModelAppearance,
        lens: &CameraLens,
        stars: &StarField,
        star_settings: &StarFieldSettings,
    ) -> Self {
        Self {
            position: model.position,
            scale: model.scale,
            rotation_degrees: model.rotation_degrees,
            wireframe_colour: to_srgb(appearance.wireframe_colour),
            point_colour: to_srgb(appearance.point_colour),
            point_hover_colour: to_srgb(appearance.point_hover_colour),
            point_size: appearance.point_size,
            fov_degrees: lens.fov_degrees,
            star_size: stars.size_scale(),
            star_blur: star_settings.blur_strength,
            star_colour_primary: to_srgb(star_settings.colour_primary),
            star_colour_secondary: to_srgb(star_settings.colour_secondary),
            star_spread: stars.spread(),
        }
    }

    /// One change per control that differs between `self` and `edited`.
    pub fn changes_to(&self, edited: &Self) -> Vec<ParameterChange> {
        let mut changes = Vec::new();

        for (axis, before, after) in axis_pairs(self.position, edited.position) {
            if before != after {
                changes.push(ParameterChange::ModelPosition(axis, after));
            }
        }
        if self.scale != edited.scale {
            changes.push(ParameterChange::ModelScale(edited.scale));
        }
        for (axis, before, after) in axis_pairs(self.rotation_degrees, edited.rotation_degrees) {
            if before != after {
                changes.push(ParameterChange::ModelRotationDegrees(axis, after));
            }
        }

        let colours: [([f32; 3], [f32; 3], fn(Color) -> ParameterChange); 5] = [
            (
                self.wireframe_colour,
                edited.wireframe_colour,
                ParameterChange::WireframeColour,
            ),
            (self.point_colour, edited.point_colour, ParameterChange::PointColour),
            (
                self.point_hover_colour,
                edited.point_hover_colour,
                ParameterChange::PointHoverColour,
            ),
            (
                self.star_colour_primary,
                edited.star_colour_primary,
                ParameterChange::StarColourPrimary,
            ),
            (
                self.star_colour_secondary,
                edited.star_colour_secondary,
                ParameterChange::StarColourSecondary,
            ),
        ];
        for (before, after, change) in colours {
            if before != after {
                changes.push(change(from_srgb(after)));
            }
        }

        let scalars: [(f32, f32, fn(f32) -> ParameterChange); 5] = [
            (self.point_size, edited.point_size, ParameterChange::PointSize),
            (self.fov_degrees, edited.fov_degrees, ParameterChange::CameraFovDegrees),
            (self.star_size, edited.star_size, ParameterChange::StarSize),
            (self.star_blur, edited.star_blur, ParameterChange::StarBlur),
            (self.star_spread, edited.star_spread, ParameterChange::StarSpread),
        ];
        for (before, after, change) in scalars {
            if before != after {
                changes.push(change(after));
            }
        }

        changes
    }
}

fn axis_pairs(before: Vec3, after: Vec3) -> [(Axis, f32, f32); 3] {
    [
        (Axis::X, before.x, after.x),
        (Axis::Y, before.y, after.y),
        (Axis::Z, before.z, after.z),
    ]
}

fn to_srgb(colour: Color) -> [f32; 3] {
    let srgba = colour.to_srgba();
    [srgba.red, srgba.green, srgba.blue]
}

fn from_srgb([red, green, blue]: [f32; 3]) -> Color {
    Color::srgb(red, green, blue)
}

fn vec3_sliders(
    ui: &mut egui::Ui,
    label: &str,
    value: &mut Vec3,
    range: &std::ops::RangeInclusive<f32>,
    suffix: &str,
) {
    ui.label(label);
    for (name, component) in [("x", &mut value.x), ("y", &mut value.y), ("z", &mut value.z)] {
        ui.add(
            egui::Slider::new(component, range.clone())
                .text(name)
                .suffix(suffix),
        );
    }
}

fn colour_row(ui: &mut egui::Ui, label: &str, colour: &mut [f32; 3]) {
    ui.horizontal(|ui| {
        ui.color_edit_button_rgb(colour);
        ui.label(label);
    });
}

fn panel_controls(ui: &mut egui::Ui, values: &mut PanelValues) {
    egui::CollapsingHeader::new("Model")
        .default_open(true)
        .show(ui, |ui| {
            vec3_sliders(ui, "Position", &mut values.position, &MODEL_POSITION_RANGE, "");
            ui.add(egui::Slider::new(&mut values.scale, MODEL_SCALE_RANGE).text("scale"));
            vec3_sliders(
                ui,
                "Rotation",
                &mut values.rotation_degrees,
                &MODEL_ROTATION_DEGREES_RANGE,
                "°",
            );
        });

    egui::CollapsingHeader::new("Appearance")
        .default_open(true)
        .show(ui, |ui| {
            colour_row(ui, "wireframe", &mut values.wireframe_colour);
            colour_row(ui, "points", &mut values.point_colour);
            colour_row(ui, "points on hover", &mut values.point_hover_colour);
            ui.add(
                egui::Slider::new(&mut values.point_size, POINT_SIZE_RANGE)
                    .text("point size on hover"),
            );
        });

    egui::CollapsingHeader::new("Camera")
        .default_open(false)
        .show(ui, |ui| {
            ui.add(
                egui::Slider::new(&mut values.fov_degrees, CAMERA_FOV_DEGREES_RANGE)
                    .text("field of view")
                    .suffix("°"),
            );
        });

    egui::CollapsingHeader::new("Stars")
        .default_open(false)
        .show(ui, |ui| {
            ui.add(egui::Slider::new(&mut values.star_size, STAR_SIZE_RANGE).text("size"));
            ui.add(egui::Slider::new(&mut values.star_blur, STAR_BLUR_RANGE).text("blur"));
            colour_row(ui, "colour 1", &mut values.star_colour_primary);
            colour_row(ui, "colour 2", &mut values.star_colour_secondary);
            ui.add(egui::Slider::new(&mut values.star_spread, STAR_SPREAD_RANGE).text("spread"));
        });
}

/// Draw the panel and turn every edited control into a `ParameterChangeEvent`.
pub fn draw_parameter_panel(
    mut contexts: EguiContexts,
    model: Res<ModelTransform>,
    appearance: Res<ModelAppearance>,
    lens: Res<CameraLens>,
    stars: Res<StarField>,
    star_settings: Res<StarFieldSettings>,
    mut capture: ResMut<PanelPointerCapture>,
    mut parameter_events: EventWriter<ParameterChangeEvent>,
) {
    let Some(ctx) = contexts.try_ctx_mut() else {
        return;
    };

    let current = PanelValues::capture(&model, &appearance, &lens, &stars, &star_settings);
    let mut edited = current;
    egui::Window::new("Parameters")
        .default_width(260.0)
        .resizable(false)
        .show(ctx, |ui| panel_controls(ui, &mut edited));

    capture.set_if_neq(PanelPointerCapture(
        ctx.wants_pointer_input() || ctx.is_pointer_over_area(),
    ));

    parameter_events.write_batch(current.changes_to(&edited).into_iter().map(|change| {
        ParameterChangeEvent {
            change,
            source: ParameterSource::Panel,
        }
    }));
}
