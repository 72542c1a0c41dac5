use bevy::input::mouse::{MouseMotion, MouseScrollUnit, MouseWheel};
use bevy::prelude::*;

use crate::constants::render_settings::{
    CAMERA_DEFAULT_FOV_DEGREES, CAMERA_FAR, CAMERA_NEAR, CAMERA_START_POSITION,
};
use crate::tools::panel_window::PanelPointerCapture;

const YAW_SENSITIVITY: f32 = 0.0035;
const PITCH_SENSITIVITY: f32 = 0.0030;
const PITCH_LIMIT: f32 = 1.55;
const MIN_RADIUS: f32 = 1.0;
const MAX_RADIUS: f32 = 50.0;
const ZOOM_STEP: f32 = 0.1;

/// Spherical orbit around `focus`. Input moves the targets; the camera
/// eases toward them every frame.
#[derive(Resource, Debug, Clone, Copy, PartialEq)]
pub struct OrbitCamera {
    pub focus: Vec3,
    pub yaw: f32,
    pub pitch: f32,
    pub radius: f32,
    pub target_yaw: f32,
    pub target_pitch: f32,
    pub target_radius: f32,
}

impl Default for OrbitCamera {
    fn default() -> Self {
        Self::from_position(CAMERA_START_POSITION, Vec3::ZERO)
    }
}

impl OrbitCamera {
    pub fn from_position(position: Vec3, focus: Vec3) -> Self {
        let offset = position - focus;
        let radius = offset.length().max(MIN_RADIUS);
        let yaw = offset.x.atan2(offset.z);
        let pitch = (offset.y / radius).clamp(-1.0, 1.0).asin();

        Self {
            focus,
            yaw,
            pitch,
            radius,
            target_yaw: yaw,
            target_pitch: pitch,
            target_radius: radius,
        }
    }

    pub fn position(&self) -> Vec3 {
        self.focus
            + Vec3::new(
                self.radius * self.pitch.cos() * self.yaw.sin(),
                self.radius * self.pitch.sin(),
                self.radius * self.pitch.cos() * self.yaw.cos(),
            )
    }

    pub fn transform(&self) -> Transform {
        Transform::from_translation(self.position()).looking_at(self.focus, Vec3::Y)
    }

    pub fn rotate(&mut self, delta: Vec2) {
        self.target_yaw -= delta.x * YAW_SENSITIVITY;
        self.target_pitch =
            (self.target_pitch + delta.y * PITCH_SENSITIVITY).clamp(-PITCH_LIMIT, PITCH_LIMIT);
    }

    /// Positive `amount` moves toward the focus.
    pub fn zoom(&mut self, amount: f32) {
        self.target_radius =
            (self.target_radius * (1.0 - amount * ZOOM_STEP)).clamp(MIN_RADIUS, MAX_RADIUS);
    }

    pub fn ease(&mut self, factor: f32) {
        let factor = factor.clamp(0.0, 1.0);
        self.yaw += (self.target_yaw - self.yaw) * factor;
        self.pitch += (self.target_pitch - self.pitch) * factor;
        self.radius += (self.target_radius - self.radius) * factor;
    }
}

/// Perspective field of view, in degrees.
#[derive(Resource, Debug, Clone, Copy, PartialEq)]
pub struct CameraLens {
    pub fov_degrees: f32,
}

impl Default for CameraLens {
    fn default() -> Self {
        Self {
            fov_degrees: CAMERA_DEFAULT_FOV_DEGREES,
        }
    }
}

impl CameraLens {
    pub fn projection(&self) -> Projection {
        Projection::Perspective(PerspectiveProjection {
            fov: self.fov_degrees.to_radians(),
            near: CAMERA_NEAR,
            far: CAMERA_FAR,
            ..default()
        })
    }
}

pub fn spawn_orbit_camera(mut commands: Commands, orbit: Res<OrbitCamera>, lens: Res<CameraLens>) {
    commands.spawn((Camera3d::default(), lens.projection(), orbit.transform()));
}

pub fn orbit_camera_controller(
    mut cameras: Query<&mut Transform, With<Camera3d>>,
    mut orbit: ResMut<OrbitCamera>,
    mouse_button: Res<ButtonInput<MouseButton>>,
    mut mouse_motion: EventReader<MouseMotion>,
    mut scroll_events: EventReader<MouseWheel>,
    panel_capture: Res<PanelPointerCapture>,
    time: Res<Time>,
) {
    let mouse_delta: Vec2 = mouse_motion.read().map(|m| m.delta).sum();
    let scroll: f32 = scroll_events
        .read()
        .map(|ev| match ev.unit {
            MouseScrollUnit::Line => ev.y,
            MouseScrollUnit::Pixel => ev.y * 0.05,
        })
        .sum();

    // Drags and scrolls over the panel belong to its widgets.
    if !panel_capture.0 {
        if mouse_button.pressed(MouseButton::Left) && mouse_delta != Vec2::ZERO {
            orbit.rotate(mouse_delta);
        }
        if scroll.abs() > f32::EPSILON {
            orbit.zoom(scroll);
        }
    }

    orbit.ease(12.0 * time.delta_secs());

    let Ok(mut transform) = cameras.single_mut() else {
        return;
    };
    *transform = orbit.transform();
}

pub fn apply_camera_lens(
    lens: Res<CameraLens>,
    mut projections: Query<&mut Projection, With<Camera3d>>,
) {
    if !lens.is_changed() {
        return;
    }

    for mut projection in &mut projections {
        if let Projection::Perspective(perspective) = projection.as_mut() {
            perspective.fov = lens.fov_degrees.to_radians();
        }
    }
}
