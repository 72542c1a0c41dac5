//! Runtime systems around the scene: diagnostics, overlays and viewport upkeep.

/// FPS tracking for the native overlay and periodic log output.
pub mod fps_tracking;

/// Loading and failure messages shown until the model is running.
pub mod status_overlay;

/// Star pixel ratio cap and resize handling.
///
/// The capped ratio feeds the star field's size scaling.
pub mod viewport;
