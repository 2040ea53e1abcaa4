//! Core domain: session world, fixed-tick loop, and camera setup.

mod arena;
mod resources;
mod systems;

pub use arena::{Arena, TickReport};
pub use resources::RunConfig;

pub(crate) use systems::spawn_arena;

use bevy::prelude::*;

use crate::core::systems::{advance_arena, configure_tick_rate, setup_camera};
use crate::sprites::resolve_arena_art;

pub const SCREEN_WIDTH: u32 = 1280;
pub const SCREEN_HEIGHT: u32 = 720;

pub struct CorePlugin;

impl Plugin for CorePlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<RunConfig>()
            .insert_resource(ClearColor(Color::srgb_u8(111, 135, 135)))
            .add_systems(
                Startup,
                (
                    setup_camera,
                    configure_tick_rate,
                    spawn_arena.after(resolve_arena_art),
                ),
            )
            .add_systems(FixedUpdate, advance_arena);
    }
}
