/// Number of background stars.
pub const STAR_COUNT: usize = 2000;

/// Default cube edge length the stars are scattered across.
pub const DEFAULT_STAR_SPREAD: f32 = 20.0;

/// Default upper bound of the random per-star size.
pub const DEFAULT_STAR_SIZE: f32 = 0.1;

/// Default mix weight between the two star colours.
pub const DEFAULT_STAR_BLUR: f32 = 0.3;

/// Perspective scale applied to star sizes in the vertex stage.
pub const STAR_PERSPECTIVE_SCALE: f32 = 300.0;
