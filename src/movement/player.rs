//! Movement domain: per-tick player physics, rolling and damage intake.

use bevy::prelude::*;

use crate::geometry::Rect;
use crate::movement::{Axis, DamageOutcome, Facing, Player, PlayerInput};

impl Player {
    /// Advance one tick. A dead player is frozen: nothing moves and no timer
    /// decays.
    pub fn update(&mut self, platforms: &[Rect], input: &PlayerInput) {
        if self.is_dead() {
            return;
        }

        let tuning = &self.tuning;

        if !self.roll.is_rolling {
            if input.left {
                self.vel_x -= tuning.accel;
                self.facing = Facing::Left;
            }
            if input.right {
                self.vel_x += tuning.accel;
                self.facing = Facing::Right;
            }
        }

        self.vel_x *= tuning.friction;
        self.vel_y += tuning.gravity;

        if input.jump && self.on_ground && !self.roll.is_rolling {
            self.vel_y = tuning.jump_impulse;
            debug!("Player jump from y={}", self.rect.y);
        }

        if self.roll.is_rolling {
            self.vel_x = self.facing.sign() * tuning.roll_speed;
            self.roll.ticks_remaining = self.roll.ticks_remaining.saturating_sub(1);
            if self.roll.ticks_remaining == 0 {
                self.roll.is_rolling = false;
            }
        }

        // Fractional velocity is truncated toward zero when applied. Nothing
        // stops a fall off the last platform, so positions saturate.
        self.rect.x = self.rect.x.saturating_add(self.vel_x as i32);
        self.collide(platforms, Axis::Horizontal);

        self.rect.y = self.rect.y.saturating_add(self.vel_y as i32);
        self.on_ground = false;
        self.collide(platforms, Axis::Vertical);

        self.invincibility = self.invincibility.saturating_sub(1);
        self.roll.cooldown_remaining = self.roll.cooldown_remaining.saturating_sub(1);
    }

    /// Begin a roll in the current facing direction. No-op while rolling or
    /// cooling down.
    pub fn start_roll(&mut self) {
        if self.roll.cooldown_remaining != 0 || self.roll.is_rolling {
            return;
        }

        self.roll.is_rolling = true;
        self.roll.ticks_remaining = self.tuning.roll_ticks;
        self.roll.cooldown_remaining = self.tuning.roll_cooldown_ticks;
        self.invincibility = self.tuning.roll_invincibility_ticks;
        debug!("Player roll started facing {:?}", self.facing);
    }

    /// Push the player out of every platform it overlaps on `axis` and zero
    /// the matching velocity component. Platforms are applied in order.
    pub fn collide(&mut self, platforms: &[Rect], axis: Axis) {
        for platform in platforms {
            if !self.rect.intersects(platform) {
                continue;
            }

            match axis {
                Axis::Horizontal => {
                    if self.vel_x > 0.0 {
                        self.rect.set_right(platform.left());
                    }
                    if self.vel_x < 0.0 {
                        self.rect.set_left(platform.right());
                    }
                    self.vel_x = 0.0;
                }
                Axis::Vertical => {
                    if self.vel_y > 0.0 {
                        self.rect.set_bottom(platform.top());
                        self.on_ground = true;
                    }
                    if self.vel_y < 0.0 {
                        self.rect.set_top(platform.bottom());
                    }
                    self.vel_y = 0.0;
                }
            }
        }
    }

    /// Apply damage unless invincible or dead. A landed hit opens a fresh
    /// invincibility window.
    pub fn take_damage(&mut self, amount: u32) -> DamageOutcome {
        if self.is_invincible() || self.is_dead() {
            return DamageOutcome::Ignored;
        }

        let dealt = amount.min(self.health);
        self.health -= dealt;
        self.invincibility = self.tuning.hit_invincibility_ticks;

        if self.is_dead() {
            info!("Player defeated");
        }
        DamageOutcome::Applied { dealt }
    }
}
