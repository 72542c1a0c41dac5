//! Scene elements that live independently of the loaded model.

/// Randomised star field backdrop with in-place regeneration.
///
/// Spread and size changes rewrite the existing vertex buffers instead of
/// spawning a new mesh.
pub mod starfield;
