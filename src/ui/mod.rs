//! UI domain: in-session HUD health bars and the defeat banner.

mod death;
mod hud_boss;
mod hud_player;
mod layout;

pub use death::PlayerDeathState;

use bevy::prelude::*;

use crate::core::Arena;
use crate::ui::death::{detect_player_death, spawn_defeat_banner};
use crate::ui::hud_boss::{spawn_boss_healthbar, update_boss_healthbar};
use crate::ui::hud_player::{spawn_player_healthbar_ui, update_player_healthbar};

pub struct UiPlugin;

impl Plugin for UiPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<PlayerDeathState>()
            .add_systems(
                Startup,
                (
                    spawn_player_healthbar_ui,
                    spawn_boss_healthbar,
                    spawn_defeat_banner,
                ),
            )
            .add_systems(
                Update,
                (
                    update_player_healthbar,
                    update_boss_healthbar,
                    detect_player_death,
                )
                    .run_if(resource_exists::<Arena>),
            );
    }
}
