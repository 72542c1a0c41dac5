//! Time-driven animation state shared by the model views.
//!
//! Both animations advance once per tick from the same clock.

/// Exponential damping for the cursor and the aggregate hover level.
pub mod damping;

/// Reveal progress and the per-group smooth threshold.
///
/// The host-side threshold matches the vertex stage of the reveal shaders.
pub mod reveal;
