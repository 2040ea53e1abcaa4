//! Core domain: session setup and the fixed-tick driver.

use bevy::prelude::*;

use crate::combat::{AttackOutcome, StrikeKind};
use crate::content::ArenaTuning;
use crate::core::{Arena, RunConfig};
use crate::movement::{PendingTriggers, held_input};
use crate::sprites::ArenaArt;

pub(crate) fn setup_camera(mut commands: Commands) {
    commands.spawn(Camera2d);
}

pub(crate) fn configure_tick_rate(tuning: Res<ArenaTuning>, mut fixed: ResMut<Time<Fixed>>) {
    fixed.set_timestep_hz(tuning.tick_rate_hz);
}

pub(crate) fn spawn_arena(
    mut commands: Commands,
    tuning: Res<ArenaTuning>,
    art: Res<ArenaArt>,
    run_config: Res<RunConfig>,
) {
    let arena = Arena::new(
        &tuning,
        art.player.size(),
        art.boss.size(),
        run_config.seed,
    );

    info!(
        "Starting session with seed: {}, player body {:?}, boss body {:?}, {} platform(s)",
        run_config.seed,
        arena.player.rect.size(),
        arena.boss.rect.size(),
        arena.platforms.len()
    );

    commands.insert_resource(arena);
}

pub(crate) fn advance_arena(
    keyboard: Res<ButtonInput<KeyCode>>,
    mut pending: ResMut<PendingTriggers>,
    arena: Option<ResMut<Arena>>,
) {
    let Some(mut arena) = arena else {
        return;
    };

    let input = pending.drain(held_input(&keyboard));
    let boss_was_alive = !arena.boss.is_dead();
    let report = arena.step(&input);

    if let Some(AttackOutcome::Hit { dealt }) = report.attack {
        info!(
            "Melee hit for {}, boss health {}/{}",
            dealt, arena.boss.health, arena.boss.max_health
        );
    }

    if let Some(strike) = report.strike {
        let source = match strike.kind {
            StrikeKind::Spin => "spin",
            StrikeKind::Contact => "contact",
        };
        if strike.outcome.landed() {
            info!(
                "Boss {} hit, player health {}/{}",
                source, arena.player.health, arena.player.max_health
            );
        } else {
            debug!("Boss {} ignored by invincibility", source);
        }
    }

    if boss_was_alive && arena.boss.is_dead() {
        info!("Boss defeated after {} ticks", arena.tick);
    }
}
