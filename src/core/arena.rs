//! Core domain: the session world and its fixed tick.

use bevy::prelude::*;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use crate::combat::{AttackOutcome, Boss, MeleeState, Strike};
use crate::content::ArenaTuning;
use crate::geometry::Rect;
use crate::movement::{Player, TickInput};

/// Everything the session owns. Entities borrow from here for the duration
/// of one tick and never hold references to each other between ticks.
#[derive(Resource, Debug)]
pub struct Arena {
    pub player: Player,
    pub boss: Boss,
    pub platforms: Vec<Rect>,
    pub melee: MeleeState,
    pub tick: u64,
    rng: ChaCha8Rng,
}

/// What happened during one tick.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TickReport {
    pub attack: Option<AttackOutcome>,
    pub strike: Option<Strike>,
}

impl Arena {
    pub fn new(
        tuning: &ArenaTuning,
        player_size: (i32, i32),
        boss_size: (i32, i32),
        seed: u64,
    ) -> Self {
        Self {
            player: Player::new(&tuning.player, player_size),
            boss: Boss::new(&tuning.boss, boss_size),
            platforms: tuning.layout.platforms.clone(),
            melee: MeleeState::new(&tuning.melee),
            tick: 0,
            rng: ChaCha8Rng::seed_from_u64(seed),
        }
    }

    /// Run one tick: discrete triggers, player, boss, then cooldowns.
    pub fn step(&mut self, input: &TickInput) -> TickReport {
        let mut report = TickReport::default();

        if input.roll {
            self.player.start_roll();
        }
        if input.attack {
            report.attack = Some(self.melee.try_attack(&self.player, &mut self.boss));
        }

        self.player.update(&self.platforms, &input.held);
        report.strike = self.boss.update(&mut self.player, &mut self.rng);

        self.melee.tick();
        self.tick += 1;
        report
    }
}
