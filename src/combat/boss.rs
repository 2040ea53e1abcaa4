//! Combat domain: boss chase AI, spin attack and contact damage.

use bevy::prelude::*;
use rand::Rng;

use crate::combat::{Boss, Strike, StrikeKind};
use crate::geometry::rotated_bounds;
use crate::movement::Player;

impl Boss {
    /// Advance one tick against `player`. `rng` decides spin starts.
    ///
    /// At most one damage source is checked per tick: a spinning body that
    /// overlaps the player deals spin damage, otherwise any overlap deals
    /// contact damage. The body keeps its last rotated bounds after a spin
    /// ends, until the next spin rebuilds them from `base_size`.
    pub fn update<R: Rng + ?Sized>(&mut self, player: &mut Player, rng: &mut R) -> Option<Strike> {
        if self.is_dead() {
            return None;
        }

        if !self.spin.is_spinning() {
            self.chase(player.rect.center_x());
        }

        if self.spin.cooldown_remaining == 0 && rng.random_range(0..=self.tuning.spin_chance_range) == 1
        {
            self.spin.ticks_remaining = self.tuning.spin_ticks;
            self.spin.cooldown_remaining = self.tuning.spin_cooldown_ticks;
            info!("Boss spin started at x={}", self.rect.center_x());
        }

        let mut strike = None;

        if self.spin.is_spinning() {
            self.spin.angle = (self.spin.angle + self.tuning.spin_degrees_per_tick).rem_euclid(360.0);
            let (w, h) = rotated_bounds(self.base_size.0, self.base_size.1, self.spin.angle);
            self.rect = self.rect.resized_about_center(w, h);
            self.spin.ticks_remaining -= 1;

            if self.rect.intersects(&player.rect) {
                strike = Some(Strike {
                    kind: StrikeKind::Spin,
                    outcome: player.take_damage(self.tuning.spin_damage),
                });
            }
        }

        self.spin.cooldown_remaining = self.spin.cooldown_remaining.saturating_sub(1);
        self.rect.set_bottom(self.tuning.ground_line);

        if strike.is_none() && self.rect.intersects(&player.rect) {
            strike = Some(Strike {
                kind: StrikeKind::Contact,
                outcome: player.take_damage(self.tuning.contact_damage),
            });
        }

        strike
    }

    fn chase(&mut self, target_x: i32) {
        let center_x = self.rect.center_x();
        if target_x < center_x - self.tuning.dead_zone {
            self.rect.x -= self.tuning.speed;
        } else if target_x > center_x + self.tuning.dead_zone {
            self.rect.x += self.tuning.speed;
        }
    }
}
