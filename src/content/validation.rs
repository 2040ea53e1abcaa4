//! Sanity checks for tuning values that would break the simulation.

use super::data::ArenaTuning;

/// A single rejected tuning field.
#[derive(Debug, PartialEq)]
pub struct ValidationError {
    pub field: &'static str,
    pub reason: &'static str,
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "'{}' {}", self.field, self.reason)
    }
}

pub fn validate_tuning(tuning: &ArenaTuning) -> Result<(), ValidationError> {
    let reject = |field, reason| Err(ValidationError { field, reason });

    if !(tuning.tick_rate_hz > 0.0) {
        return reject("tick_rate_hz", "must be positive");
    }
    if !(tuning.player.friction > 0.0 && tuning.player.friction < 1.0) {
        return reject("player.friction", "must be between 0 and 1 exclusive");
    }
    if tuning.player.max_health == 0 {
        return reject("player.max_health", "must be positive");
    }
    if tuning.boss.max_health == 0 {
        return reject("boss.max_health", "must be positive");
    }
    if tuning.boss.speed < 0 || tuning.boss.dead_zone < 0 {
        return reject("boss.speed", "speed and dead_zone must not be negative");
    }
    if tuning.layout.platforms.is_empty() {
        return reject("layout.platforms", "needs at least one platform");
    }
    // Deserialized rects bypass the clamp in Rect::new.
    if tuning.layout.platforms.iter().any(|p| p.w < 0 || p.h < 0) {
        return reject("layout.platforms", "width and height must not be negative");
    }
    Ok(())
}
