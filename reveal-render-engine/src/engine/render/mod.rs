//! Per-frame coordination of the two model views.
//!
//! Owns the frame snapshot that is copied into both reveal materials and keeps
//! the edge and point entities on one shared transform.

/// Model renderables, frame uniforms and transform sync.
pub mod coordinator;
