//! Content domain: data-driven arena tuning loaded from RON at startup.

mod data;
mod loader;
mod validation;

pub use data::{ArenaLayout, ArenaTuning, BossTuning, MeleeTuning, PlayerTuning};
pub use loader::{TuningLoadError, load_tuning, parse_tuning};

use bevy::prelude::*;
use std::path::Path;

pub const TUNING_PATH: &str = "assets/data/arena.ron";

pub struct ContentPlugin;

impl Plugin for ContentPlugin {
    fn build(&self, app: &mut App) {
        app.insert_resource(load_tuning_or_default(Path::new(TUNING_PATH)));
    }
}

/// Tuning never blocks the session: any failure falls back to the defaults.
pub fn load_tuning_or_default(path: &Path) -> ArenaTuning {
    match load_tuning(path) {
        Ok(tuning) => {
            info!("Loaded arena tuning from {}", path.display());
            tuning
        }
        Err(e) => {
            warn!("{}; using built-in tuning", e);
            ArenaTuning::default()
        }
    }
}
