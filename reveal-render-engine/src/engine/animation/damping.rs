use std::ops::{Add, Mul, Sub};

use bevy::prelude::*;
use constants::interaction::DAMPING_FACTOR;

/// A value that eases toward a target by a fixed fraction every tick.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Damped<T> {
    value: T,
    factor: f32,
}

impl<T> Damped<T>
where
    T: Copy + Add<Output = T> + Sub<Output = T> + Mul<f32, Output = T>,
{
    pub fn new(value: T, factor: f32) -> Self {
        debug_assert!(factor > 0.0 && factor < 1.0);
        Self { value, factor }
    }

    pub fn value(&self) -> T {
        self.value
    }

    /// Advance one tick toward `target`.
    pub fn step_toward(&mut self, target: T) -> T {
        self.value = self.value + (target - self.value) * self.factor;
        self.value
    }
}

/// Cursor position in normalised device coordinates.
///
/// Pointer events only move the target; the damped position changes only in
/// [`CursorState::tick`].
#[derive(Resource, Debug, Clone, Copy)]
pub struct CursorState {
    target: Vec2,
    damped: Damped<Vec2>,
}

impl Default for CursorState {
    fn default() -> Self {
        Self {
            target: Vec2::ZERO,
            damped: Damped::new(Vec2::ZERO, DAMPING_FACTOR),
        }
    }
}

impl CursorState {
    pub fn target(&self) -> Vec2 {
        self.target
    }

    pub fn set_target(&mut self, target: Vec2) {
        self.target = target;
    }

    pub fn damped(&self) -> Vec2 {
        self.damped.value()
    }

    pub fn tick(&mut self) -> Vec2 {
        self.damped.step_toward(self.target)
    }
}

/// Coarse hover level driven by the cursor ray hit test.
#[derive(Resource, Debug, Clone, Copy)]
pub struct HoverState {
    strength: Damped<f32>,
}

impl Default for HoverState {
    fn default() -> Self {
        Self {
            strength: Damped::new(0.0, DAMPING_FACTOR),
        }
    }
}

impl HoverState {
    pub fn strength(&self) -> f32 {
        self.strength.value()
    }

    pub fn tick(&mut self, hit: bool) -> f32 {
        self.strength.step_toward(if hit { 1.0 } else { 0.0 })
    }
}
