//! Mesh generation for the reveal renderer.
//!
//! Simplifies loaded model geometry into reveal groups and builds the GPU
//! vertex layouts for the wireframe, point and star field views.

/// Lossy simplification of model triangles and reveal group assignment.
pub mod partition;

/// Edge and point-quad meshes derived from one shared reveal geometry.
///
/// Points expand to screen-aligned quads in the vertex shader.
pub mod reveal_mesh;

/// Quad-expanded star meshes with in-place attribute rewrites.
pub mod star_mesh;
