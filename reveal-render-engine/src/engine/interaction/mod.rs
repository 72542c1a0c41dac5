//! Pointer handling and cursor proximity against the point view.

/// Window pointer positions to normalised device coordinates.
pub mod pointer;

/// Ray hit test through the damped cursor and hover cursor feedback.
pub mod proximity;
