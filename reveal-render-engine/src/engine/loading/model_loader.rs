use bevy::asset::RecursiveDependencyLoadState;
use bevy::gltf::Gltf;
use bevy::prelude::*;

use crate::engine::core::app_state::AppState;
use crate::engine::loading::progress::LoadingProgress;

#[derive(Resource, Default)]
pub struct ModelLoader {
    path: Option<String>,
    handle: Option<Handle<Gltf>>,
}

impl ModelLoader {
    /// Ask for a model; loading begins on the next run of [`start_model_loading`].
    pub fn request(&mut self, path: &str) {
        self.path = Some(path.to_string());
        self.handle = None;
    }

    pub fn path(&self) -> Option<&str> {
        self.path.as_deref()
    }

    pub fn handle(&self) -> Option<&Handle<Gltf>> {
        self.handle.as_ref()
    }
}

pub fn start_model_loading(mut model_loader: ResMut<ModelLoader>, asset_server: Res<AssetServer>) {
    if model_loader.handle.is_some() {
        return;
    }
    let Some(path) = model_loader.path.clone() else {
        return;
    };

    info!("Loading model from {path}");
    model_loader.handle = Some(asset_server.load(path));
}

/// Mark the model loaded once it and its dependencies are in, or move to
/// `LoadFailed` if anything in it failed.
pub fn check_model_loading(
    mut loading_progress: ResMut<LoadingProgress>,
    model_loader: Res<ModelLoader>,
    asset_server: Res<AssetServer>,
    mut next_state: ResMut<NextState<AppState>>,
) {
    if loading_progress.model_loaded || loading_progress.has_failed() {
        return;
    }
    let Some(handle) = model_loader.handle() else {
        return;
    };

    if asset_server.is_loaded_with_dependencies(handle) {
        info!("✓ Model loaded");
        loading_progress.model_loaded = true;
        return;
    }

    if let Some(RecursiveDependencyLoadState::Failed(err)) =
        asset_server.get_recursive_dependency_load_state(handle)
    {
        let path = model_loader.path().unwrap_or_default();
        error!("Failed to load model {path}: {err}");
        loading_progress.fail(format!("{path}: {err}"));
        next_state.set(AppState::LoadFailed);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_request_replaces_the_previous_one() {
        let mut loader = ModelLoader::default();
        assert_eq!(loader.path(), None);

        loader.request("models/brain.glb");
        loader.request("models/other.glb");

        assert_eq!(loader.path(), Some("models/other.glb"));
        assert!(loader.handle().is_none());
    }
}
