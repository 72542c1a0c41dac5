//! Shared tuning constants for the reveal renderer.
//!
//! Kept free of engine types so the values can be read by tooling and tests
//! without pulling in the renderer.

pub mod interaction;
pub mod panel;
pub mod reveal;
pub mod starfield;
