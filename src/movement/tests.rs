//! Movement domain: tests for player physics, rolling and damage intake.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use super::{Axis, DamageOutcome, Facing, Player, PlayerInput};
use crate::content::PlayerTuning;
use crate::geometry::Rect;

fn floor() -> Vec<Rect> {
    vec![Rect::new(0, 640, 1280, 80)]
}

fn player() -> Player {
    Player::new(&PlayerTuning::default(), (50, 50))
}

/// Player that has settled onto the floor and may jump this tick.
fn grounded_player() -> Player {
    let mut player = player();
    let platforms = floor();
    for _ in 0..2 {
        player.update(&platforms, &PlayerInput::default());
    }
    assert!(player.on_ground);
    player
}

fn approx(a: f32, b: f32) -> bool {
    (a - b).abs() < 1e-4
}

const HOLD_LEFT: PlayerInput = PlayerInput {
    left: true,
    right: false,
    jump: false,
};

const HOLD_RIGHT: PlayerInput = PlayerInput {
    left: false,
    right: true,
    jump: false,
};

const HOLD_JUMP: PlayerInput = PlayerInput {
    left: false,
    right: false,
    jump: true,
};

// -----------------------------------------------------------------------------
// Spawn
// -----------------------------------------------------------------------------

#[test]
fn test_player_spawns_standing_on_spawn_point() {
    let player = player();
    assert_eq!(player.rect, Rect::new(175, 590, 50, 50));
    assert_eq!(player.health, 100);
    assert_eq!(player.max_health, 100);
    assert_eq!(player.facing, Facing::Right);
    assert!(!player.on_ground);
}

#[test]
fn test_settling_on_floor_sets_on_ground() {
    let player = grounded_player();
    assert_eq!(player.rect.bottom(), 640);
    assert_eq!(player.vel_y, 0.0);
}

// -----------------------------------------------------------------------------
// Horizontal movement
// -----------------------------------------------------------------------------

#[test]
fn test_accel_then_friction() {
    let mut player = grounded_player();
    let platforms = floor();

    player.update(&platforms, &HOLD_RIGHT);
    assert!(approx(player.vel_x, 0.68));
    assert_eq!(player.facing, Facing::Right);

    player.update(&platforms, &HOLD_LEFT);
    assert!(approx(player.vel_x, (0.68 - 0.8) * 0.85));
    assert_eq!(player.facing, Facing::Left);
}

#[test]
fn test_holding_right_moves_right() {
    let mut player = grounded_player();
    let platforms = floor();
    let start_x = player.rect.x;

    for _ in 0..30 {
        player.update(&platforms, &HOLD_RIGHT);
    }

    assert!(player.rect.x > start_x);
    assert!(player.vel_x > 4.0 && player.vel_x < 4.6);
}

#[test]
fn test_velocity_decays_without_input() {
    let mut player = grounded_player();
    let platforms = floor();
    player.vel_x = 4.0;

    for _ in 0..60 {
        player.update(&platforms, &PlayerInput::default());
    }

    assert!(player.vel_x.abs() < 0.01);
}

// -----------------------------------------------------------------------------
// Jumping
// -----------------------------------------------------------------------------

#[test]
fn test_jump_from_ground_rises_then_lands() {
    let mut player = grounded_player();
    let platforms = floor();
    let rest_y = player.rect.y;

    player.update(&platforms, &HOLD_JUMP);
    assert_eq!(player.vel_y, -12.0);
    assert!(!player.on_ground);
    assert_eq!(player.rect.y, rest_y - 12);

    player.update(&platforms, &PlayerInput::default());
    assert!(player.rect.y < rest_y - 12);

    let mut landed = false;
    for _ in 0..60 {
        player.update(&platforms, &PlayerInput::default());
        if player.on_ground {
            landed = true;
            break;
        }
    }
    assert!(landed);
    assert_eq!(player.rect.y, rest_y);
}

#[test]
fn test_no_jump_while_airborne() {
    let mut player = player();
    player.update(&floor(), &HOLD_JUMP);
    assert!(player.vel_y > 0.0);
}

#[test]
fn test_no_jump_while_rolling() {
    let mut player = grounded_player();
    player.start_roll();
    player.update(&floor(), &HOLD_JUMP);
    assert!(player.vel_y >= 0.0);
    assert_eq!(player.rect.bottom(), 640);
}

// -----------------------------------------------------------------------------
// Rolling
// -----------------------------------------------------------------------------

#[test]
fn test_start_roll_sets_timers() {
    let mut player = player();
    player.start_roll();

    assert!(player.roll.is_rolling);
    assert_eq!(player.roll.ticks_remaining, 12);
    assert_eq!(player.roll.cooldown_remaining, 40);
    assert_eq!(player.invincibility, 15);
}

#[test]
fn test_start_roll_is_noop_while_rolling() {
    let mut player = player();
    player.start_roll();
    player.update(&floor(), &PlayerInput::default());
    let before = player.clone();

    player.start_roll();
    assert_eq!(player, before);
}

#[test]
fn test_roll_overrides_input_for_its_whole_duration() {
    let mut player = grounded_player();
    let platforms = floor();
    player.start_roll();

    for tick in 0..12 {
        assert!(player.roll.is_rolling, "tick {tick}");
        player.update(&platforms, &HOLD_LEFT);
        assert_eq!(player.vel_x, 12.0, "tick {tick}");
        assert_eq!(player.facing, Facing::Right);
    }

    assert!(!player.roll.is_rolling);
    assert_eq!(player.rect.x, 175 + 12 * 12);
}

#[test]
fn test_roll_follows_facing_left() {
    let mut player = grounded_player();
    let platforms = floor();
    player.update(&platforms, &HOLD_LEFT);
    player.start_roll();

    player.update(&platforms, &HOLD_RIGHT);
    assert_eq!(player.vel_x, -12.0);
    assert_eq!(player.facing, Facing::Left);
}

#[test]
fn test_roll_cooldown_blocks_restart_until_expired() {
    let mut player = grounded_player();
    let platforms = floor();
    player.start_roll();

    for _ in 0..12 {
        player.update(&platforms, &PlayerInput::default());
    }
    assert_eq!(player.roll.cooldown_remaining, 28);

    player.start_roll();
    assert!(!player.roll.is_rolling);

    for _ in 0..28 {
        player.update(&platforms, &PlayerInput::default());
    }
    assert_eq!(player.roll.cooldown_remaining, 0);

    player.start_roll();
    assert!(player.roll.is_rolling);
}

// -----------------------------------------------------------------------------
// Collision
// -----------------------------------------------------------------------------

#[test]
fn test_collide_horizontal_moving_right_stops_at_wall() {
    let wall = Rect::new(300, 0, 20, 640);
    let platforms = vec![wall];
    let mut player = player();
    player.rect = Rect::new(265, 590, 50, 50);
    player.vel_x = 5.0;

    player.collide(&platforms, Axis::Horizontal);

    assert_eq!(player.rect.right(), 300);
    assert_eq!(player.vel_x, 0.0);
    assert!(!player.rect.intersects(&wall));
}

#[test]
fn test_collide_horizontal_moving_left_stops_at_wall() {
    let wall = Rect::new(300, 0, 20, 640);
    let platforms = vec![wall];
    let mut player = player();
    player.rect = Rect::new(305, 590, 50, 50);
    player.vel_x = -3.0;

    player.collide(&platforms, Axis::Horizontal);

    assert_eq!(player.rect.left(), 320);
    assert_eq!(player.vel_x, 0.0);
    assert!(!player.rect.intersects(&wall));
}

#[test]
fn test_collide_vertical_landing_sets_on_ground() {
    let platforms = floor();
    let mut player = player();
    player.rect = Rect::new(175, 600, 50, 50);
    player.vel_y = 9.0;

    player.collide(&platforms, Axis::Vertical);

    assert_eq!(player.rect.bottom(), 640);
    assert!(player.on_ground);
    assert_eq!(player.vel_y, 0.0);
    assert!(!player.rect.intersects(&platforms[0]));
}

#[test]
fn test_collide_vertical_hitting_ceiling() {
    let ceiling = Rect::new(0, 0, 1280, 100);
    let mut player = player();
    player.rect = Rect::new(175, 95, 50, 50);
    player.vel_y = -5.0;

    player.collide(&[ceiling], Axis::Vertical);

    assert_eq!(player.rect.top(), 100);
    assert!(!player.on_ground);
    assert_eq!(player.vel_y, 0.0);
}

#[test]
fn test_walking_into_wall_during_update() {
    let platforms = vec![Rect::new(0, 640, 1280, 80), Rect::new(400, 0, 40, 640)];
    let mut player = grounded_player();

    for _ in 0..200 {
        player.update(&platforms, &HOLD_RIGHT);
        assert!(!player.rect.intersects(&platforms[1]));
    }
    assert_eq!(player.rect.right(), 400);
}

#[test]
fn test_endless_fall_saturates_position() {
    let mut player = player();
    player.rect.y = i32::MAX - 100;
    player.vel_y = 1.0e9;

    for _ in 0..5 {
        player.update(&[], &PlayerInput::default());
    }

    assert_eq!(player.rect.y, i32::MAX);
    assert_eq!(player.rect.bottom(), i32::MAX);
    assert!(!player.on_ground);
}

#[test]
fn test_falling_off_the_platform_keeps_falling() {
    let platforms = vec![Rect::new(0, 640, 100, 80)];
    let mut player = player();

    for _ in 0..600 {
        player.update(&platforms, &PlayerInput::default());
    }

    assert!(player.rect.top() > 640);
    assert!(player.vel_y > 0.0);
}

// -----------------------------------------------------------------------------
// Damage
// -----------------------------------------------------------------------------

#[test]
fn test_take_damage_applies_and_opens_window() {
    let mut player = player();
    let outcome = player.take_damage(30);

    assert_eq!(outcome, DamageOutcome::Applied { dealt: 30 });
    assert_eq!(player.health, 70);
    assert_eq!(player.invincibility, 60);
}

#[test]
fn test_take_damage_ignored_while_invincible() {
    let mut player = player();
    player.invincibility = 10;

    assert_eq!(player.take_damage(30), DamageOutcome::Ignored);
    assert_eq!(player.health, 100);
    assert_eq!(player.invincibility, 10);
}

#[test]
fn test_take_damage_floors_at_zero() {
    let mut player = player();
    player.health = 20;

    assert_eq!(player.take_damage(30), DamageOutcome::Applied { dealt: 20 });
    assert_eq!(player.health, 0);
    assert!(player.is_dead());
}

#[test]
fn test_roll_grants_invincibility() {
    let mut player = player();
    player.start_roll();
    assert!(!player.take_damage(5).landed());
    assert_eq!(player.health, 100);
}

#[test]
fn test_repeated_contact_kills_then_freezes_player() {
    let mut player = grounded_player();
    let platforms = floor();

    for _ in 0..10 {
        player.invincibility = 0;
        player.take_damage(30);
    }
    assert_eq!(player.health, 0);

    player.start_roll();
    player.vel_x = 3.0;
    let frozen = player.clone();
    for input in [HOLD_LEFT, HOLD_RIGHT, HOLD_JUMP, PlayerInput::default()] {
        player.update(&platforms, &input);
        assert_eq!(player, frozen);
    }

    assert_eq!(player.take_damage(5), DamageOutcome::Ignored);
}

#[test]
fn test_health_stays_in_range_under_random_play() {
    let mut rng = ChaCha8Rng::seed_from_u64(7);
    let platforms = floor();
    let mut player = player();

    for _ in 0..2000 {
        let input = PlayerInput {
            left: rng.random_bool(0.5),
            right: rng.random_bool(0.5),
            jump: rng.random_bool(0.2),
        };
        if rng.random_bool(0.05) {
            player.start_roll();
        }
        if rng.random_bool(0.1) {
            player.take_damage(rng.random_range(0..40));
        }
        player.update(&platforms, &input);

        assert!(player.health <= player.max_health);
    }
}
