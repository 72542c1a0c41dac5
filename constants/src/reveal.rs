/// Source vertices examined per simplification window (three triangles).
pub const SOURCE_WINDOW_VERTICES: usize = 9;

/// Leading vertices kept from each window (one triangle).
pub const RETAINED_VERTICES_PER_WINDOW: usize = 3;

/// Consecutive retained vertices that share one reveal group.
pub const VERTICES_PER_GROUP: usize = 6;

/// Group count the progress scalar is spread across.
pub const TOTAL_REVEAL_GROUPS: f32 = 2000.0;

/// Width of the smooth transition band between neighbouring groups.
pub const REVEAL_TRANSITION_BAND: f32 = 0.005;

/// Seconds from start until the whole mesh is drawn.
pub const DEFAULT_DRAW_DURATION_SECS: f32 = 3.0;
