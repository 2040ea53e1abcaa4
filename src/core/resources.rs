//! Core domain: shared resources for session configuration.

use bevy::prelude::*;
use rand::Rng;

pub const SEED_ENV_VAR: &str = "ARENA_SEED";

#[derive(Resource, Debug)]
pub struct RunConfig {
    pub seed: u64,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            seed: seed_from_env().unwrap_or_else(|| rand::rng().random()),
        }
    }
}

/// Seed pinned through the environment for reproducible sessions.
fn seed_from_env() -> Option<u64> {
    let raw = std::env::var(SEED_ENV_VAR).ok()?;
    match raw.trim().parse() {
        Ok(seed) => Some(seed),
        Err(e) => {
            warn!("Ignoring {}={:?}: {}", SEED_ENV_VAR, raw, e);
            None
        }
    }
}
