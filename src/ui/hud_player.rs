//! UI domain: player HUD health bar.

use bevy::prelude::*;

use crate::core::Arena;
use crate::ui::layout::{LABEL_FONT_SIZE, PLAYER_BAR, spawn_bar};

/// Marker for the player's HUD health bar container
#[derive(Component)]
pub struct PlayerHealthBarUI;

/// Marker for the player's health bar fill element
#[derive(Component)]
pub struct PlayerHealthBarFill;

pub(crate) fn spawn_player_healthbar_ui(mut commands: Commands) {
    spawn_bar(&mut commands, &PLAYER_BAR, PlayerHealthBarUI, PlayerHealthBarFill);

    commands.spawn((
        Text::new("Player"),
        TextFont {
            font_size: LABEL_FONT_SIZE,
            ..default()
        },
        TextColor(Color::WHITE),
        Node {
            position_type: PositionType::Absolute,
            left: Val::Px(PLAYER_BAR.left),
            top: Val::Px(PLAYER_BAR.top - 22.0),
            ..default()
        },
    ));
}

pub(crate) fn update_player_healthbar(
    arena: Res<Arena>,
    mut fill_query: Query<&mut Node, With<PlayerHealthBarFill>>,
) {
    let player = &arena.player;
    for mut node in &mut fill_query {
        node.width = Val::Px(PLAYER_BAR.fill_width(player.health, player.max_health));
    }
}
