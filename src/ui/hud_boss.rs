//! UI domain: boss health bar UI.

use bevy::prelude::*;

use crate::core::Arena;
use crate::ui::layout::{BOSS_BAR, LABEL_FONT_SIZE, spawn_bar};

/// Marker for the boss health bar UI container
#[derive(Component)]
pub struct BossHealthBarUI;

/// Marker for the boss health bar fill element
#[derive(Component)]
pub struct BossHealthBarFill;

/// Marker for boss name label
#[derive(Component)]
pub struct BossNameLabel;

pub(crate) fn spawn_boss_healthbar(mut commands: Commands) {
    spawn_bar(&mut commands, &BOSS_BAR, BossHealthBarUI, BossHealthBarFill);

    // Full bar width so the name centres over the bar
    commands
        .spawn((
            BossNameLabel,
            Node {
                position_type: PositionType::Absolute,
                left: Val::Px(BOSS_BAR.left),
                top: Val::Px(BOSS_BAR.top - 30.0),
                width: Val::Px(BOSS_BAR.width),
                justify_content: JustifyContent::Center,
                ..default()
            },
        ))
        .with_child((
            Text::new("Evil Man"),
            TextFont {
                font_size: LABEL_FONT_SIZE,
                ..default()
            },
            TextColor(Color::WHITE),
        ));
}

pub(crate) fn update_boss_healthbar(
    arena: Res<Arena>,
    mut fill_query: Query<&mut Node, With<BossHealthBarFill>>,
    mut visibility_query: Query<&mut Visibility, Or<(With<BossHealthBarUI>, With<BossNameLabel>)>>,
) {
    let boss = &arena.boss;
    for mut node in &mut fill_query {
        node.width = Val::Px(BOSS_BAR.fill_width(boss.health, boss.max_health));
    }

    // The bar goes away with the boss
    let visibility = if boss.is_dead() {
        Visibility::Hidden
    } else {
        Visibility::Inherited
    };
    for mut vis in &mut visibility_query {
        vis.set_if_neq(visibility);
    }
}
