use bevy::asset::LoadState;
use bevy::prelude::*;

use crate::constants::path::SCENE_SETTINGS_PATH;
use crate::engine::animation::reveal::RevealState;
use crate::engine::assets::scene_settings::SceneSettings;
use crate::engine::loading::model_loader::ModelLoader;
use crate::engine::loading::progress::LoadingProgress;
use crate::tools::parameter_panel::{ParameterChangeEvent, ParameterSource};

#[derive(Resource, Default)]
pub struct SettingsLoader {
    handle: Option<Handle<SceneSettings>>,
}

// Start the loading process
pub fn start_loading(mut settings_loader: ResMut<SettingsLoader>, asset_server: Res<AssetServer>) {
    info!("Loading scene settings from {SCENE_SETTINGS_PATH}");
    settings_loader.handle = Some(asset_server.load(SCENE_SETTINGS_PATH));
}

/// Wait for the settings file, or fall back to defaults if it cannot be read.
pub fn load_scene_settings(
    mut loading_progress: ResMut<LoadingProgress>,
    settings_loader: Res<SettingsLoader>,
    mut model_loader: ResMut<ModelLoader>,
    mut reveal: ResMut<RevealState>,
    mut parameter_events: EventWriter<ParameterChangeEvent>,
    asset_server: Res<AssetServer>,
    settings_assets: Res<Assets<SceneSettings>>,
) {
    if loading_progress.settings_loaded {
        return;
    }
    let Some(handle) = &settings_loader.handle else {
        return;
    };

    let settings = match settings_assets.get(handle) {
        Some(settings) => {
            info!("✓ Scene settings loaded");
            settings.clone()
        }
        None => match asset_server.get_load_state(handle) {
            Some(LoadState::Failed(err)) => {
                warn!("Scene settings unavailable, using defaults: {err}");
                SceneSettings::default()
            }
            _ => return,
        },
    };

    parameter_events.write_batch(apply_scene_settings(
        &settings,
        &mut reveal,
        &mut model_loader,
    ));
    loading_progress.settings_loaded = true;
}

/// Take the draw duration and model path from the settings and turn the
/// remaining values into panel events.
pub fn apply_scene_settings(
    settings: &SceneSettings,
    reveal: &mut RevealState,
    model_loader: &mut ModelLoader,
) -> Vec<ParameterChangeEvent> {
    reveal.draw_duration = settings.draw_duration_secs;
    model_loader.request(&settings.model_path);

    settings
        .parameter_changes()
        .into_iter()
        .map(|change| ParameterChangeEvent {
            change,
            source: ParameterSource::Settings,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tools::parameter_panel::ParameterChange;

    #[test]
    fn settings_configure_reveal_and_model() {
        let mut settings = SceneSettings::default();
        settings.draw_duration_secs = 5.0;
        settings.model_path = "models/skull.glb".to_string();
        settings.model.scale = 1.5;

        let mut reveal = RevealState::default();
        let mut model_loader = ModelLoader::default();
        let events = apply_scene_settings(&settings, &mut reveal, &mut model_loader);

        assert_eq!(reveal.draw_duration, 5.0);
        assert_eq!(model_loader.path(), Some("models/skull.glb"));
        assert!(events.iter().all(|e| e.source == ParameterSource::Settings));
        assert!(
            events
                .iter()
                .any(|e| e.change == ParameterChange::ModelScale(1.5))
        );
    }
}
