use bevy::prelude::*;
use bevy::window::{PrimaryWindow, SystemCursorIcon};
use bevy::winit::cursor::CursorIcon;
use constants::interaction::{HOVER_CURSOR_THRESHOLD, POINT_HIT_THRESHOLD};

use super::pointer::ndc_to_cursor;
use crate::engine::animation::damping::{CursorState, HoverState};
use crate::engine::render::coordinator::ModelRenderables;

/// Whether any point lies within `threshold` of the ray, ignoring points
/// behind its origin. Stops at the first hit.
pub fn ray_hits_any_point(
    ray: Ray3d,
    world_from_local: &GlobalTransform,
    points: &[[f32; 3]],
    threshold: f32,
) -> bool {
    let threshold_sq = threshold * threshold;
    let direction = *ray.direction;

    points
        .iter()
        .map(|point| world_from_local.transform_point(Vec3::from_array(*point)))
        .any(|point| {
            let along = (point - ray.origin).dot(direction);
            along >= 0.0 && (ray.origin + direction * along).distance_squared(point) < threshold_sq
        })
}

/// Ray from the camera through a cursor position given in NDC.
pub fn cursor_ray(camera: &Camera, camera_transform: &GlobalTransform, ndc: Vec2) -> Option<Ray3d> {
    let viewport_size = camera.logical_viewport_size()?;
    camera
        .viewport_to_world(camera_transform, ndc_to_cursor(ndc, viewport_size))
        .ok()
}

/// Per-tick proximity update: damp the cursor, hit-test the point view
/// through the damped cursor, then damp the aggregate hover level.
pub fn update_proximity(
    cameras: Query<(&Camera, &GlobalTransform), With<Camera3d>>,
    renderables: Res<ModelRenderables>,
    transforms: Query<&GlobalTransform>,
    mut cursor: ResMut<CursorState>,
    mut hover: ResMut<HoverState>,
) {
    let damped = cursor.tick();

    let hit = match (cameras.single(), transforms.get(renderables.points)) {
        (Ok((camera, camera_transform)), Ok(points_transform)) => {
            cursor_ray(camera, camera_transform, damped).is_some_and(|ray| {
                ray_hits_any_point(
                    ray,
                    points_transform,
                    renderables.geometry.positions(),
                    POINT_HIT_THRESHOLD,
                )
            })
        }
        _ => false,
    };

    hover.tick(hit);
}

/// Host-side hover feedback: pointer cursor while the model is hovered.
pub fn update_hover_cursor(
    mut commands: Commands,
    hover: Res<HoverState>,
    windows: Query<Entity, With<PrimaryWindow>>,
    mut hovering: Local<bool>,
) {
    let now_hovering = hover.strength() > HOVER_CURSOR_THRESHOLD;
    if now_hovering == *hovering {
        return;
    }
    *hovering = now_hovering;

    let Ok(window) = windows.single() else {
        return;
    };
    let icon = if now_hovering {
        SystemCursorIcon::Pointer
    } else {
        SystemCursorIcon::Default
    };
    commands.entity(window).insert(CursorIcon::from(icon));
    debug!("Model hover {}", if now_hovering { "entered" } else { "left" });
}
