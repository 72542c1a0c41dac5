use bevy::prelude::*;
use constants::reveal::{DEFAULT_DRAW_DURATION_SECS, REVEAL_TRANSITION_BAND, TOTAL_REVEAL_GROUPS};

use crate::engine::render::coordinator::ModelRenderables;

/// Cubic Hermite threshold: 0 at or below `edge0`, 1 at or above `edge1`.
pub fn smooth_step(edge0: f32, edge1: f32, x: f32) -> f32 {
    if x <= edge0 {
        return 0.0;
    }
    if x >= edge1 {
        return 1.0;
    }
    let t = (x - edge0) / (edge1 - edge0);
    t * t * (3.0 - 2.0 * t)
}

/// Reveal factor of one group at a given overall progress.
///
/// Mirrors the vertex stage of both reveal shaders. Both edges are capped so
/// that every group saturates once progress reaches 1.
pub fn local_progress(group: f32, progress: f32) -> f32 {
    let lower = (group / TOTAL_REVEAL_GROUPS).min(1.0 - REVEAL_TRANSITION_BAND);
    let upper = (lower + REVEAL_TRANSITION_BAND).min(1.0);
    smooth_step(lower, upper, progress)
}

/// Overall progress after `elapsed` seconds of a `duration` second draw.
pub fn progress_at(elapsed: f32, duration: f32) -> f32 {
    if duration <= 0.0 {
        return 1.0;
    }
    (elapsed / duration).clamp(0.0, 1.0)
}

/// Frame-global reveal progress, derived from the shared clock each tick.
#[derive(Resource, Debug, Clone, Copy)]
pub struct RevealState {
    pub draw_duration: f32,
    started_at: f32,
    progress: f32,
    completed: bool,
}

impl Default for RevealState {
    fn default() -> Self {
        Self::with_duration(DEFAULT_DRAW_DURATION_SECS)
    }
}

impl RevealState {
    pub fn with_duration(draw_duration: f32) -> Self {
        Self {
            draw_duration,
            started_at: 0.0,
            progress: 0.0,
            completed: false,
        }
    }

    pub fn progress(&self) -> f32 {
        self.progress
    }

    /// Clock reading the draw is measured from.
    pub fn started_at(&self) -> f32 {
        self.started_at
    }

    pub fn restart(&mut self, now: f32) {
        self.started_at = now;
        self.progress = 0.0;
        self.completed = false;
    }

    /// Recompute progress; returns true on the tick the last group saturates.
    pub fn advance(&mut self, elapsed: f32, last_group: f32) -> bool {
        self.progress = progress_at(elapsed, self.draw_duration);
        let finished = local_progress(last_group, self.progress) >= 1.0;
        let just_finished = finished && !self.completed;
        self.completed = finished;
        just_finished
    }
}

/// The draw starts when the model becomes visible, not at app start.
pub fn start_reveal(time: Res<Time>, mut reveal: ResMut<RevealState>) {
    reveal.restart(time.elapsed_secs());
    info!("Reveal started ({:.1}s draw)", reveal.draw_duration);
}

pub fn advance_reveal(
    time: Res<Time>,
    renderables: Res<ModelRenderables>,
    mut reveal: ResMut<RevealState>,
) {
    let last_group = renderables.geometry.group_count().saturating_sub(1) as f32;
    let elapsed = time.elapsed_secs() - reveal.started_at();

    if reveal.advance(elapsed, last_group) {
        info!(
            "Reveal complete: {} groups drawn after {:.2}s",
            renderables.geometry.group_count(),
            elapsed
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE_GROUPS: [f32; 7] = [0.0, 1.0, 10.0, 500.0, 1000.0, 1999.0, 5000.0];

    #[test]
    fn smooth_step_clamps_and_eases() {
        assert_eq!(smooth_step(0.0, 1.0, -1.0), 0.0);
        assert_eq!(smooth_step(0.0, 1.0, 2.0), 1.0);
        assert_eq!(smooth_step(0.0, 1.0, 0.5), 0.5);
        assert!(smooth_step(0.0, 1.0, 0.25) < 0.25);
    }

    #[test]
    fn full_reveal_after_duration() {
        for elapsed in [3.0, 3.5, 10.0, 1.0e6] {
            let progress = progress_at(elapsed, 3.0);
            assert_eq!(progress, 1.0);
            for group in SAMPLE_GROUPS {
                assert_eq!(local_progress(group, progress), 1.0);
            }
        }
    }

    #[test]
    fn nothing_visible_before_start() {
        for elapsed in [0.0, -1.0] {
            let progress = progress_at(elapsed, 3.0);
            assert_eq!(progress, 0.0);
            for group in SAMPLE_GROUPS {
                assert_eq!(local_progress(group, progress), 0.0);
            }
        }
    }

    #[test]
    fn earlier_groups_never_lag() {
        for step in 0..=200 {
            let progress = step as f32 / 200.0;
            for pair in SAMPLE_GROUPS.windows(2) {
                assert!(local_progress(pair[0], progress) >= local_progress(pair[1], progress));
            }
        }
    }

    #[test]
    fn midpoint_group_transitions_within_band() {
        let progress = progress_at(1.5, 3.0);
        assert_eq!(progress, 0.5);

        let group = 0.5 * TOTAL_REVEAL_GROUPS;
        assert_eq!(local_progress(group, 0.5), 0.0);
        let inside = local_progress(group, 0.5025);
        assert!(inside > 0.0 && inside < 1.0);
        assert!(local_progress(group, 0.504) < 1.0);
        assert_eq!(local_progress(group, 0.5051), 1.0);
    }

    #[test]
    fn completion_is_reported_once() {
        let mut reveal = RevealState::with_duration(3.0);

        assert!(!reveal.advance(1.0, 1999.0));
        assert!(reveal.advance(3.0, 1999.0));
        assert!(!reveal.advance(4.0, 1999.0));
        assert_eq!(reveal.progress(), 1.0);
    }

    #[test]
    fn restart_resets_the_draw() {
        let mut reveal = RevealState::with_duration(3.0);
        reveal.advance(5.0, 10.0);

        reveal.restart(7.5);
        assert_eq!(reveal.progress(), 0.0);
        assert_eq!(reveal.started_at(), 7.5);
        assert!(reveal.advance(3.0, 10.0));
    }
}
