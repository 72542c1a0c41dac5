/// Exponential smoothing factor for cursor and hover damping, per tick.
pub const DAMPING_FACTOR: f32 = 0.1;

/// Screen-space distance magnification used by the per-point hover falloff.
pub const HOVER_DISTANCE_SCALE: f32 = 3.0;

/// Upper edge of the per-point hover falloff, after magnification.
pub const HOVER_FALLOFF_EDGE: f32 = 0.8;

/// Point size multiplier at full hover (size * (1 + effect * N)).
pub const HOVER_SIZE_GAIN: f32 = 5.0;

/// Alpha multiplier at full hover (alpha * (1 + effect * N)).
pub const HOVER_ALPHA_GAIN: f32 = 0.5;

/// World-space distance from the cursor ray within which a point counts as hit.
pub const POINT_HIT_THRESHOLD: f32 = 1.0;

/// Aggregate hover level above which the cursor switches to a pointer icon.
pub const HOVER_CURSOR_THRESHOLD: f32 = 0.5;

/// Device pixel ratio ceiling regardless of what the host reports.
pub const MAX_PIXEL_RATIO: f32 = 2.0;
