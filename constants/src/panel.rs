//! Value ranges enforced by the parameter panel controls.

use std::ops::RangeInclusive;

pub const MODEL_POSITION_RANGE: RangeInclusive<f32> = -10.0..=10.0;
pub const MODEL_SCALE_RANGE: RangeInclusive<f32> = 0.1..=5.0;
pub const MODEL_ROTATION_DEGREES_RANGE: RangeInclusive<f32> = 0.0..=360.0;
pub const POINT_SIZE_RANGE: RangeInclusive<f32> = 1.0..=10.0;
pub const CAMERA_FOV_DEGREES_RANGE: RangeInclusive<f32> = 10.0..=120.0;
pub const STAR_SIZE_RANGE: RangeInclusive<f32> = 0.1..=5.0;
pub const STAR_BLUR_RANGE: RangeInclusive<f32> = 0.1..=1.0;
pub const STAR_SPREAD_RANGE: RangeInclusive<f32> = 5.0..=50.0;

/// Clamp a value into a panel range.
pub fn clamp_to(range: &RangeInclusive<f32>, value: f32) -> f32 {
    value.clamp(*range.start(), *range.end())
}
