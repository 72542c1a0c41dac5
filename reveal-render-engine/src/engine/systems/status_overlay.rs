use bevy::prelude::*;

use crate::engine::core::app_state::AppState;
use crate::engine::loading::progress::LoadingProgress;

#[derive(Component)]
pub struct StatusText;

/// Overlay text for a state, or `None` once the model is on screen.
pub fn status_message(state: AppState, progress: &LoadingProgress) -> Option<String> {
    match state {
        AppState::Loading => Some(format!(
            "Loading model... {:.0}%",
            progress.fraction() * 100.0
        )),
        AppState::LoadFailed => Some(match progress.failure() {
            Some(reason) => format!("Model failed to load: {reason}"),
            None => "Model failed to load".to_string(),
        }),
        AppState::Running => None,
    }
}

pub fn spawn_status_overlay(commands: &mut Commands) {
    commands.spawn((
        Text::new("Loading model..."),
        TextFont {
            font_size: 18.0,
            ..default()
        },
        TextColor(Color::srgb(0.8, 0.8, 0.8)),
        Node {
            position_type: PositionType::Absolute,
            top: Val::Px(12.0),
            left: Val::Px(12.0),
            ..default()
        },
        StatusText,
    ));
}

pub fn update_status_overlay(
    state: Res<State<AppState>>,
    progress: Res<LoadingProgress>,
    mut overlays: Query<(&mut Text, &mut Visibility), With<StatusText>>,
) {
    if !state.is_changed() && !progress.is_changed() {
        return;
    }

    let message = status_message(*state.get(), &progress);
    for (mut text, mut visibility) in &mut overlays {
        match &message {
            Some(message) => {
                text.0.clone_from(message);
                *visibility = Visibility::Inherited;
            }
            None => *visibility = Visibility::Hidden,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn loading_reports_stage_fraction() {
        let mut progress = LoadingProgress::default();
        progress.settings_loaded = true;

        let message = status_message(AppState::Loading, &progress).unwrap();
        assert!(message.contains("33%"));
    }

    #[test]
    fn failure_names_the_reason() {
        let mut progress = LoadingProgress::default();
        progress.fail("model contains no mesh primitives");

        let message = status_message(AppState::LoadFailed, &progress).unwrap();
        assert!(message.contains("no mesh primitives"));
    }

    #[test]
    fn hidden_while_running() {
        assert_eq!(
            status_message(AppState::Running, &LoadingProgress::default()),
            None
        );
    }
}
