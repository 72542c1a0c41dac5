use bevy::prelude::*;

// sRGB equivalents of #1f8fff, #89cfeb, #00bfff, #80c1ff and #cccccc.

pub const DEFAULT_WIREFRAME_COLOUR: Color = Color::srgb(0.121_569, 0.560_784, 1.0);
pub const DEFAULT_POINT_COLOUR: Color = Color::srgb(0.537_255, 0.811_765, 0.921_569);
pub const DEFAULT_POINT_HOVER_COLOUR: Color = Color::srgb(0.0, 0.749_020, 1.0);
pub const DEFAULT_POINT_SIZE: f32 = 4.0;

pub const DEFAULT_STAR_COLOUR_PRIMARY: Color = Color::srgb(0.501_961, 0.756_863, 1.0);
pub const DEFAULT_STAR_COLOUR_SECONDARY: Color = Color::srgb(0.8, 0.8, 0.8);

pub const DEFAULT_MODEL_POSITION: Vec3 = Vec3::new(0.0, -2.6, 0.0);
/// 213 rad about Y, wrapped into the panel's degree range.
pub const DEFAULT_MODEL_ROTATION_DEGREES: Vec3 = Vec3::new(0.0, 324.0, 0.0);
pub const DEFAULT_MODEL_SCALE: f32 = 1.0;

pub const CAMERA_START_POSITION: Vec3 = Vec3::new(-7.2, 0.1, 3.2);
pub const CAMERA_DEFAULT_FOV_DEGREES: f32 = 75.0;
pub const CAMERA_NEAR: f32 = 0.1;
pub const CAMERA_FAR: f32 = 100.0;

pub const CLEAR_COLOUR: Color = Color::BLACK;
