//! UI domain: defeat banner shown once the player's health reaches zero.

use bevy::prelude::*;

use crate::core::Arena;

const BANNER_LEFT: f32 = 520.0;
const BANNER_TOP: f32 = 360.0;

/// Marker for the "PLAYER DEFEATED" text
#[derive(Component)]
pub struct DefeatBanner;

/// Resource tracking if the player has died (logs the transition once)
#[derive(Resource, Default)]
pub struct PlayerDeathState {
    pub is_dead: bool,
}

pub(crate) fn spawn_defeat_banner(mut commands: Commands) {
    commands.spawn((
        DefeatBanner,
        Text::new("PLAYER DEFEATED"),
        TextFont {
            font_size: 24.0,
            ..default()
        },
        TextColor(Color::srgb_u8(255, 50, 50)),
        Node {
            position_type: PositionType::Absolute,
            left: Val::Px(BANNER_LEFT),
            top: Val::Px(BANNER_TOP),
            ..default()
        },
        Visibility::Hidden,
    ));
}

pub(crate) fn detect_player_death(
    arena: Res<Arena>,
    mut death_state: ResMut<PlayerDeathState>,
    mut banner_query: Query<&mut Visibility, With<DefeatBanner>>,
) {
    if death_state.is_dead || !arena.player.is_dead() {
        return;
    }

    death_state.is_dead = true;
    info!("Showing defeat banner after {} ticks", arena.tick);

    for mut vis in &mut banner_query {
        *vis = Visibility::Inherited;
    }
}
