mod combat;
mod content;
mod core;
mod geometry;
mod movement;
mod sprites;
mod ui;

use bevy::prelude::*;

use crate::core::{SCREEN_HEIGHT, SCREEN_WIDTH};

fn main() {
    App::new()
        .add_plugins(DefaultPlugins.set(WindowPlugin {
            primary_window: Some(Window {
                title: "Jesus Is Coming".to_string(),
                resolution: (SCREEN_WIDTH, SCREEN_HEIGHT).into(),
                resizable: false,
                ..default()
            }),
            ..default()
        }))
        .add_plugins((
            content::ContentPlugin,
            core::CorePlugin,
            movement::MovementPlugin,
            sprites::SpritesPlugin,
            ui::UiPlugin,
        ))
        .run();
}
