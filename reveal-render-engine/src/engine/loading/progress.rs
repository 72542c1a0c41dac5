use bevy::prelude::*;

#[derive(Resource, Default, Debug)]
pub struct LoadingProgress {
    pub settings_loaded: bool,
    pub model_loaded: bool,
    pub renderables_created: bool,
    failure: Option<String>,
}

impl LoadingProgress {
    const STAGES: f32 = 3.0;

    /// Fraction of loading stages completed, in [0, 1].
    pub fn fraction(&self) -> f32 {
        let done = [
            self.settings_loaded,
            self.model_loaded,
            self.renderables_created,
        ]
        .into_iter()
        .filter(|stage| *stage)
        .count();
        done as f32 / Self::STAGES
    }

    pub fn fail(&mut self, reason: impl Into<String>) {
        self.failure = Some(reason.into());
    }

    pub fn failure(&self) -> Option<&str> {
        self.failure.as_deref()
    }

    pub fn has_failed(&self) -> bool {
        self.failure.is_some()
    }
}

pub fn log_loading_progress(progress: Res<LoadingProgress>) {
    if progress.is_changed() && !progress.has_failed() {
        info!("Loading {:.0}%", progress.fraction() * 100.0);
    }
}
