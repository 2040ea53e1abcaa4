//! Combat domain: the player's melee swing and its cooldown.

use crate::combat::Boss;
use crate::content::MeleeTuning;
use crate::movement::Player;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AttackOutcome {
    /// Cooldown still running or the player is dead; nothing happened.
    Refused,
    /// Swing started but the attack area missed the boss.
    Whiff,
    /// Swing connected. `dealt` can be below the tuned damage at low boss health.
    Hit { dealt: u32 },
}

#[derive(Debug, Clone, PartialEq)]
pub struct MeleeState {
    pub cooldown_remaining: u32,
    pub tuning: MeleeTuning,
}

impl MeleeState {
    pub fn new(tuning: &MeleeTuning) -> Self {
        Self {
            cooldown_remaining: 0,
            tuning: tuning.clone(),
        }
    }

    pub fn ready(&self) -> bool {
        self.cooldown_remaining == 0
    }

    /// Swing once. The attack area is the player's box grown by the tuned
    /// reach, tested against the boss's current (possibly rotated) box.
    pub fn try_attack(&mut self, player: &Player, boss: &mut Boss) -> AttackOutcome {
        if !self.ready() || player.is_dead() {
            return AttackOutcome::Refused;
        }

        self.cooldown_remaining = self.tuning.cooldown_ticks;

        let reach = player
            .rect
            .inflate(self.tuning.reach_w, self.tuning.reach_h);
        if !reach.intersects(&boss.rect) {
            return AttackOutcome::Whiff;
        }

        AttackOutcome::Hit {
            dealt: boss.receive_hit(self.tuning.damage),
        }
    }

    pub fn tick(&mut self) {
        self.cooldown_remaining = self.cooldown_remaining.saturating_sub(1);
    }
}
