use bevy::prelude::*;

use crate::engine::animation::damping::CursorState;

/// Window pixel coordinates (origin top-left) to normalised device coordinates.
pub fn cursor_to_ndc(position: Vec2, viewport_size: Vec2) -> Vec2 {
    Vec2::new(
        (position.x / viewport_size.x) * 2.0 - 1.0,
        -(position.y / viewport_size.y) * 2.0 + 1.0,
    )
}

/// Inverse of [`cursor_to_ndc`].
pub fn ndc_to_cursor(ndc: Vec2, viewport_size: Vec2) -> Vec2 {
    Vec2::new(
        (ndc.x + 1.0) * 0.5 * viewport_size.x,
        (1.0 - ndc.y) * 0.5 * viewport_size.y,
    )
}

/// Pointer moves only retarget the cursor; damping happens in the tick.
pub fn track_pointer_target(
    mut cursor_moved: EventReader<CursorMoved>,
    windows: Query<&Window>,
    mut cursor: ResMut<CursorState>,
) {
    let Some(event) = cursor_moved.read().last() else {
        return;
    };
    let Ok(window) = windows.get(event.window) else {
        return;
    };

    let viewport_size = window.size();
    if viewport_size.x <= 0.0 || viewport_size.y <= 0.0 {
        return;
    }

    cursor.set_target(cursor_to_ndc(event.position, viewport_size));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn viewport_centre_maps_to_origin() {
        let size = Vec2::new(1280.0, 720.0);

        assert_eq!(cursor_to_ndc(size * 0.5, size), Vec2::ZERO);
    }

    #[test]
    fn corners_map_to_unit_square() {
        let size = Vec2::new(800.0, 600.0);

        assert_eq!(cursor_to_ndc(Vec2::ZERO, size), Vec2::new(-1.0, 1.0));
        assert_eq!(cursor_to_ndc(size, size), Vec2::new(1.0, -1.0));
    }

    #[test]
    fn ndc_round_trips_to_pixels() {
        let size = Vec2::new(1024.0, 768.0);
        let pixel = Vec2::new(300.0, 500.0);

        let back = ndc_to_cursor(cursor_to_ndc(pixel, size), size);
        assert!((back - pixel).length() < 1e-3);
    }

    #[test]
    fn pointer_events_only_move_the_target() {
        let mut app = App::new();
        app.add_event::<CursorMoved>()
            .init_resource::<CursorState>()
            .add_systems(Update, track_pointer_target);

        let window = app
            .world_mut()
            .spawn(Window {
                resolution: (400.0, 200.0).into(),
                ..default()
            })
            .id();
        app.world_mut().send_event(CursorMoved {
            window,
            position: Vec2::new(200.0, 100.0),
            delta: None,
        });
        app.world_mut()
            .resource_mut::<CursorState>()
            .set_target(Vec2::ONE);
        app.update();

        let cursor = app.world().resource::<CursorState>();
        assert_eq!(cursor.target(), Vec2::ZERO);
        assert_eq!(cursor.damped(), Vec2::ZERO);
    }
}
