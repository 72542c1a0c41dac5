use bevy::prelude::*;
use constants::panel::{
    CAMERA_FOV_DEGREES_RANGE, MODEL_POSITION_RANGE, MODEL_ROTATION_DEGREES_RANGE,
    MODEL_SCALE_RANGE, POINT_SIZE_RANGE, STAR_BLUR_RANGE, STAR_SIZE_RANGE, STAR_SPREAD_RANGE,
    clamp_to,
};

use crate::engine::camera::orbit_camera::CameraLens;
use crate::engine::render::coordinator::{ModelAppearance, ModelTransform};
use crate::engine::scene::starfield::{StarField, StarFieldSettings, StarRng};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    X,
    Y,
    Z,
}

impl Axis {
    fn component_mut(self, vector: &mut Vec3) -> &mut f32 {
        match self {
            Self::X => &mut vector.x,
            Self::Y => &mut vector.y,
            Self::Z => &mut vector.z,
        }
    }
}

/// One control of the parameter panel set to a new value.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ParameterChange {
    ModelPosition(Axis, f32),
    ModelScale(f32),
    ModelRotationDegrees(Axis, f32),
    WireframeColour(Color),
    PointColour(Color),
    PointHoverColour(Color),
    PointSize(f32),
    CameraFovDegrees(f32),
    StarSize(f32),
    StarBlur(f32),
    StarColourPrimary(Color),
    StarColourSecondary(Color),
    StarSpread(f32),
}

/// Where a parameter change came from, for logging.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParameterSource {
    Settings,
    Panel,
    Keyboard,
}

/// Event fired when a panel control changes, from settings, the panel window or
/// keyboard shortcuts.
#[derive(Event, Debug, Clone, Copy)]
pub struct ParameterChangeEvent {
    pub change: ParameterChange,
    pub source: ParameterSource,
}

/// The only writer of panel-controlled state. Every value is clamped into the
/// range its control allows.
pub fn apply_parameter_changes(
    mut events: EventReader<ParameterChangeEvent>,
    mut model: ResMut<ModelTransform>,
    mut appearance: ResMut<ModelAppearance>,
    mut lens: ResMut<CameraLens>,
    mut stars: ResMut<StarField>,
    mut star_settings: ResMut<StarFieldSettings>,
    mut star_rng: ResMut<StarRng>,
) {
    for event in events.read() {
        debug!("Parameter {:?} via {:?}", event.change, event.source);

        match event.change {
            ParameterChange::ModelPosition(axis, value) => {
                *axis.component_mut(&mut model.position) = clamp_to(&MODEL_POSITION_RANGE, value);
            }
            ParameterChange::ModelScale(value) => {
                model.scale = clamp_to(&MODEL_SCALE_RANGE, value);
            }
            ParameterChange::ModelRotationDegrees(axis, degrees) => {
                *axis.component_mut(&mut model.rotation_degrees) =
                    clamp_to(&MODEL_ROTATION_DEGREES_RANGE, degrees);
            }
            ParameterChange::WireframeColour(colour) => appearance.wireframe_colour = colour,
            ParameterChange::PointColour(colour) => appearance.point_colour = colour,
            ParameterChange::PointHoverColour(colour) => appearance.point_hover_colour = colour,
            ParameterChange::PointSize(value) => {
                appearance.point_size = clamp_to(&POINT_SIZE_RANGE, value);
            }
            ParameterChange::CameraFovDegrees(value) => {
                lens.fov_degrees = clamp_to(&CAMERA_FOV_DEGREES_RANGE, value);
            }
            ParameterChange::StarSize(value) => {
                let value = clamp_to(&STAR_SIZE_RANGE, value);
                if value != stars.size_scale() {
                    stars.set_size_scale(value, &mut star_rng.0);
                }
            }
            ParameterChange::StarBlur(value) => {
                star_settings.blur_strength = clamp_to(&STAR_BLUR_RANGE, value);
            }
            ParameterChange::StarColourPrimary(colour) => star_settings.colour_primary = colour,
            ParameterChange::StarColourSecondary(colour) => {
                star_settings.colour_secondary = colour;
            }
            ParameterChange::StarSpread(value) => {
                let value = clamp_to(&STAR_SPREAD_RANGE, value);
                if value != stars.spread() {
                    stars.set_spread(value, &mut star_rng.0);
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    use super::*;

    fn panel_app() -> App {
        let mut rng = StdRng::seed_from_u64(42);
        let stars = StarField::generate(16, 20.0, 0.1, &mut rng);

        let mut app = App::new();
        app.add_event::<ParameterChangeEvent>()
            .init_resource::<ModelTransform>()
            .init_resource::<ModelAppearance>()
            .init_resource::<CameraLens>()
            .init_resource::<StarFieldSettings>()
            .insert_resource(stars)
            .insert_resource(StarRng(rng))
            .add_systems(Update, apply_parameter_changes);
        app
    }

    fn send(app: &mut App, change: ParameterChange) {
        app.world_mut().send_event(ParameterChangeEvent {
            change,
            source: ParameterSource::Keyboard,
        });
    }

    #[test]
    fn values_are_clamped_to_control_ranges() {
        let mut app = panel_app();
        send(&mut app, ParameterChange::ModelScale(12.0));
        send(&mut app, ParameterChange::ModelPosition(Axis::X, -40.0));
        send(&mut app, ParameterChange::ModelRotationDegrees(Axis::Z, 400.0));
        send(&mut app, ParameterChange::PointSize(0.0));
        send(&mut app, ParameterChange::CameraFovDegrees(179.0));
        send(&mut app, ParameterChange::StarBlur(0.0));
        app.update();

        let model = app.world().resource::<ModelTransform>();
        assert_eq!(model.scale, 5.0);
        assert_eq!(model.position.x, -10.0);
        assert_eq!(model.rotation_degrees.z, 360.0);
        assert_eq!(app.world().resource::<ModelAppearance>().point_size, 1.0);
        assert_eq!(app.world().resource::<CameraLens>().fov_degrees, 120.0);
        assert_eq!(app.world().resource::<StarFieldSettings>().blur_strength, 0.1);
    }

    #[test]
    fn axis_changes_leave_other_axes_alone() {
        let mut app = panel_app();
        let before = app.world().resource::<ModelTransform>().position;
        send(&mut app, ParameterChange::ModelPosition(Axis::Y, 1.5));
        app.update();

        let after = app.world().resource::<ModelTransform>().position;
        assert_eq!(after, Vec3::new(before.x, 1.5, before.z));
    }

    #[test]
    fn star_spread_regenerates_positions_only() {
        let mut app = panel_app();
        let sizes = app.world().resource::<StarField>().sizes().to_vec();
        send(&mut app, ParameterChange::StarSpread(60.0));
        app.update();

        let stars = app.world().resource::<StarField>();
        assert_eq!(stars.spread(), 50.0);
        assert_eq!(stars.sizes(), sizes.as_slice());
        assert!(stars.positions().iter().flatten().all(|c| c.abs() <= 25.0));
    }

    #[test]
    fn colours_pass_through() {
        let mut app = panel_app();
        send(&mut app, ParameterChange::PointHoverColour(Color::WHITE));
        send(&mut app, ParameterChange::StarColourSecondary(Color::BLACK));
        app.update();

        assert_eq!(
            app.world().resource::<ModelAppearance>().point_hover_colour,
            Color::WHITE
        );
        assert_eq!(
            app.world().resource::<StarFieldSettings>().colour_secondary,
            Color::BLACK
        );
    }
}
