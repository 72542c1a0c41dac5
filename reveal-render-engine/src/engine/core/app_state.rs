use bevy::prelude::*;

/// Scene lifecycle. The star field runs in every state; the model views
/// exist and animate only in `Running`.
#[derive(Debug, Clone, Copy, Default, Eq, PartialEq, Hash, States)]
pub enum AppState {
    #[default]
    Loading,
    Running,
    LoadFailed,
}

#[derive(Component)]
pub struct FpsText;

pub fn log_state_transitions(mut transitions: EventReader<StateTransitionEvent<AppState>>) {
    for transition in transitions.read() {
        if let (Some(exited), Some(entered)) = (transition.exited, transition.entered) {
            if exited != entered {
                info!("→ Transitioning from {exited:?} to {entered:?}");
            }
        }
    }
}
