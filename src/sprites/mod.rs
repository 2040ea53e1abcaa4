//! Sprites domain: art resolution with placeholder fallback, and render
//! sync from the simulation to Bevy sprites.

mod art;
mod manifest;
mod render;

pub use art::{ArenaArt, Art, ArtLoadError, load_art, resolve_art};
pub use manifest::{PlaceholderDef, SpriteAssetDef, SpriteManifest};
pub use render::{boss_rotation, boss_visible, player_visible, screen_to_world};

pub(crate) use render::resolve_arena_art;

use bevy::prelude::*;

use crate::core::{Arena, spawn_arena};
use crate::sprites::render::{
    spawn_arena_visuals, swap_failed_art, sync_boss_sprite, sync_player_sprite,
};

pub struct SpritesPlugin;

impl Plugin for SpritesPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Startup, resolve_arena_art)
            .add_systems(Startup, spawn_arena_visuals.after(spawn_arena))
            .add_systems(
                Update,
                (sync_player_sprite, sync_boss_sprite, swap_failed_art)
                    .run_if(resource_exists::<Arena>),
            );
    }
}
