use bevy::asset::AssetMetaCheck;
use bevy::diagnostic::FrameTimeDiagnosticsPlugin;
use bevy::log::LogPlugin;
use bevy::prelude::*;
use bevy_common_assets::json::JsonAssetPlugin;
use bevy_egui::EguiPlugin;

use crate::constants::render_settings::CLEAR_COLOUR;
// Crate engine modules
use crate::engine::animation::damping::{CursorState, HoverState};
use crate::engine::animation::reveal::{RevealState, advance_reveal, start_reveal};
use crate::engine::assets::scene_settings::SceneSettings;
use crate::engine::camera::orbit_camera::{
    CameraLens, OrbitCamera, apply_camera_lens, orbit_camera_controller, spawn_orbit_camera,
};
use crate::engine::core::app_state::{AppState, log_state_transitions};
use crate::engine::core::window_config::create_window_config;
use crate::engine::interaction::pointer::track_pointer_target;
use crate::engine::interaction::proximity::{update_hover_cursor, update_proximity};
use crate::engine::loading::model_loader::{ModelLoader, check_model_loading, start_model_loading};
use crate::engine::loading::progress::{LoadingProgress, log_loading_progress};
use crate::engine::loading::renderable_creator::create_renderables_when_ready;
use crate::engine::loading::settings_loader::{SettingsLoader, load_scene_settings, start_loading};
use crate::engine::render::coordinator::{
    FrameUniforms, ModelAppearance, ModelTransform, apply_model_appearance,
    broadcast_frame_uniforms, capture_frame_uniforms, sync_model_transform,
};
use crate::engine::scene::starfield::{
    StarField, StarFieldSettings, StarRng, apply_star_appearance, spawn_star_field,
    upload_star_field,
};
use crate::engine::shaders::{RevealPointMaterial, RevealWireframeMaterial, StarFieldMaterial};
use crate::engine::systems::fps_tracking::fps_log_system;
use crate::engine::systems::status_overlay::{spawn_status_overlay, update_status_overlay};
use crate::engine::systems::viewport::{PixelRatio, cap_pixel_ratio, log_viewport_resize};
// Crate tools modules
use crate::tools::panel_shortcuts::handle_panel_keyboard_shortcuts;
use crate::tools::panel_window::{PanelPointerCapture, draw_parameter_panel};
use crate::tools::parameter_panel::{ParameterChangeEvent, apply_parameter_changes};

#[cfg(not(target_arch = "wasm32"))]
use crate::engine::core::app_state::FpsText;
#[cfg(not(target_arch = "wasm32"))]
use crate::engine::systems::fps_tracking::fps_text_update_system;

const LOG_FILTER: &str = "info,wgpu=error,naga=warn";

/// Per-frame model animation systems.
#[derive(SystemSet, Debug, Clone, PartialEq, Eq, Hash)]
pub struct ModelTick;

/// One tick of the model animation, in order. Gated on `Running`, so nothing
/// here sees a missing `ModelRenderables`.
pub fn add_model_tick_systems(app: &mut App) {
    app.add_systems(
        Update,
        (
            advance_reveal,
            update_proximity,
            capture_frame_uniforms,
            broadcast_frame_uniforms,
            apply_model_appearance,
            sync_model_transform,
            update_hover_cursor,
        )
            .chain()
            .in_set(ModelTick)
            .run_if(in_state(AppState::Running)),
    );
}

pub fn create_app() -> App {
    let mut app = App::new();

    app.add_plugins(create_default_plugins())
        .init_state::<AppState>()
        .add_plugins(MaterialPlugin::<RevealWireframeMaterial>::default())
        .add_plugins(MaterialPlugin::<RevealPointMaterial>::default())
        .add_plugins(MaterialPlugin::<StarFieldMaterial>::default())
        .add_plugins(FrameTimeDiagnosticsPlugin::default())
        .add_plugins(EguiPlugin {
            enable_multipass_for_primary_context: false,
        })
        // Registers SceneSettings as a loadable asset type from JSON files.
        .add_plugins(JsonAssetPlugin::<SceneSettings>::new(&["json"]))
        .insert_resource(ClearColor(CLEAR_COLOUR));

    let mut star_rng = StarRng::default();
    let star_field = StarField::with_defaults(&mut star_rng.0);

    // Initialise resources early
    app.init_resource::<LoadingProgress>()
        .init_resource::<SettingsLoader>()
        .init_resource::<ModelLoader>()
        .init_resource::<RevealState>()
        .init_resource::<CursorState>()
        .init_resource::<HoverState>()
        .init_resource::<FrameUniforms>()
        .init_resource::<ModelTransform>()
        .init_resource::<ModelAppearance>()
        .init_resource::<OrbitCamera>()
        .init_resource::<CameraLens>()
        .init_resource::<PixelRatio>()
        .init_resource::<PanelPointerCapture>()
        .init_resource::<StarFieldSettings>()
        .insert_resource(star_field)
        .insert_resource(star_rng)
        .add_event::<ParameterChangeEvent>();

    app.add_systems(
        Startup,
        (setup, spawn_orbit_camera, spawn_star_field, start_loading).chain(),
    )
    .add_systems(
        Update,
        (
            // Loading phase systems
            load_scene_settings,
            start_model_loading,
            check_model_loading,
            create_renderables_when_ready,
            log_loading_progress,
        )
            .chain()
            .run_if(in_state(AppState::Loading)),
    )
    .add_systems(OnEnter(AppState::Running), start_reveal);

    // Systems that run in every state: input, panel, camera and star field.
    app.add_systems(
        Update,
        (
            track_pointer_target,
            draw_parameter_panel,
            handle_panel_keyboard_shortcuts, // Native shortcuts or no-op for WASM
            apply_parameter_changes,
            orbit_camera_controller,
            apply_camera_lens,
            cap_pixel_ratio,
            log_viewport_resize,
            upload_star_field,
            apply_star_appearance,
            update_status_overlay,
            log_state_transitions,
            fps_log_system,
        )
            .chain(),
    );

    app.configure_sets(Update, ModelTick.after(apply_parameter_changes));
    add_model_tick_systems(&mut app);

    // Add fps_text_update_system only for native builds.
    #[cfg(not(target_arch = "wasm32"))]
    {
        app.add_systems(Update, fps_text_update_system);
    }

    app
}

// Startup system that only handles basic initialisation
fn setup(mut commands: Commands) {
    spawn_status_overlay(&mut commands);

    #[cfg(not(target_arch = "wasm32"))]
    {
        create_native_overlays(&mut commands);
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn create_native_overlays(commands: &mut Commands) {
    commands
        .spawn(Node {
            width: Val::Percent(100.0),
            height: Val::Percent(100.0),
            ..default()
        })
        .with_children(|parent| {
            parent.spawn((
                Text::new("FPS: "),
                TextFont {
                    font_size: 16.0,
                    ..default()
                },
                TextColor(Color::srgb(1., 0., 0.)),
                Node {
                    position_type: PositionType::Absolute,
                    bottom: Val::Px(12.0),
                    right: Val::Px(12.0),
                    ..default()
                },
                FpsText,
            ));
        });
}

fn create_default_plugins() -> impl PluginGroup {
    let window_config = WindowPlugin {
        primary_window: Some(create_window_config()),
        ..default()
    };

    let asset_config = AssetPlugin {
        meta_check: AssetMetaCheck::Never,
        ..default()
    };

    let log_config = LogPlugin {
        filter: LOG_FILTER.into(),
        ..default()
    };

    DefaultPlugins
        .set(window_config)
        .set(asset_config)
        .set(log_config)
}
