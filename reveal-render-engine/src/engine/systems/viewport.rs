use bevy::prelude::*;
use bevy::window::{PrimaryWindow, WindowResized};
use constants::interaction::MAX_PIXEL_RATIO;

/// Host pixel ratio capped for the star sprite sizes. The swapchain keeps the
/// window's physical resolution.
#[derive(Resource, Debug, Clone, Copy, PartialEq)]
pub struct PixelRatio(pub f32);

impl Default for PixelRatio {
    fn default() -> Self {
        Self(1.0)
    }
}

pub fn capped_pixel_ratio(host_ratio: f32) -> f32 {
    host_ratio.min(MAX_PIXEL_RATIO)
}

pub fn cap_pixel_ratio(
    windows: Query<&Window, With<PrimaryWindow>>,
    mut pixel_ratio: ResMut<PixelRatio>,
) {
    let Ok(window) = windows.single() else {
        return;
    };

    let capped = PixelRatio(capped_pixel_ratio(window.resolution.base_scale_factor()));
    if pixel_ratio.set_if_neq(capped) {
        info!("Star pixel ratio set to {:.2}", capped.0);
    }
}

pub fn log_viewport_resize(mut resized: EventReader<WindowResized>) {
    if let Some(event) = resized.read().last() {
        debug!("Viewport resized to {:.0}x{:.0}", event.width, event.height);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ratio_is_capped_at_two() {
        assert_eq!(capped_pixel_ratio(1.0), 1.0);
        assert_eq!(capped_pixel_ratio(1.5), 1.5);
        assert_eq!(capped_pixel_ratio(3.0), MAX_PIXEL_RATIO);
    }

    #[test]
    fn dense_displays_are_capped_without_touching_the_window() {
        let mut window = Window::default();
        window.resolution.set_scale_factor(3.0);

        let mut app = App::new();
        app.init_resource::<PixelRatio>()
            .add_systems(Update, cap_pixel_ratio);
        let window = app.world_mut().spawn((window, PrimaryWindow)).id();
        app.update();

        assert_eq!(*app.world().resource::<PixelRatio>(), PixelRatio(MAX_PIXEL_RATIO));
        let window = app.world().get::<Window>(window).unwrap();
        assert_eq!(window.resolution.scale_factor_override(), None);
        assert_eq!(window.resolution.scale_factor(), 3.0);
    }
}
