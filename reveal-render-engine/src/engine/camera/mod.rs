//! Orbit camera for viewing the model.
//!
//! Provides damped rotate and zoom around a fixed focus point plus the
//! perspective lens the parameter panel adjusts.

/// Orbit camera resource, controller system and field of view.
pub mod orbit_camera;
