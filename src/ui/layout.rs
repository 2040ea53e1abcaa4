//! UI domain: fixed health bar geometry in window pixels.

use bevy::prelude::*;

pub(crate) const BAR_BACKGROUND: Color = Color::srgb(60.0 / 255.0, 60.0 / 255.0, 60.0 / 255.0);
pub(crate) const BAR_BORDER: Color = Color::WHITE;
pub(crate) const BAR_BORDER_PX: f32 = 2.0;
pub(crate) const LABEL_FONT_SIZE: f32 = 24.0;

/// Where a health bar sits on screen and how it is coloured.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HealthBarLayout {
    pub left: f32,
    pub top: f32,
    pub width: f32,
    pub height: f32,
    pub fill: Color,
}

impl HealthBarLayout {
    /// Width available to the fill inside the border.
    pub fn inner_width(&self) -> f32 {
        self.width - 2.0 * BAR_BORDER_PX
    }

    /// Filled width for `current` out of `max`, clamped to the bar.
    pub fn fill_width(&self, current: u32, max: u32) -> f32 {
        self.inner_width() * fill_ratio(current, max)
    }
}

pub fn fill_ratio(current: u32, max: u32) -> f32 {
    if max == 0 {
        return 0.0;
    }
    (current as f32 / max as f32).clamp(0.0, 1.0)
}

pub const PLAYER_BAR: HealthBarLayout = HealthBarLayout {
    left: 20.0,
    top: 20.0,
    width: 250.0,
    height: 20.0,
    fill: Color::srgb(30.0 / 255.0, 200.0 / 255.0, 30.0 / 255.0),
};

pub const BOSS_BAR: HealthBarLayout = HealthBarLayout {
    left: 340.0,
    top: 30.0,
    width: 600.0,
    height: 25.0,
    fill: Color::srgb(200.0 / 255.0, 30.0 / 255.0, 30.0 / 255.0),
};

/// Background, border and a fill child sized to the current ratio.
pub(crate) fn spawn_bar<R: Component, F: Component>(
    commands: &mut Commands,
    layout: &HealthBarLayout,
    root_marker: R,
    fill_marker: F,
) {
    commands
        .spawn((
            root_marker,
            Node {
                position_type: PositionType::Absolute,
                left: Val::Px(layout.left),
                top: Val::Px(layout.top),
                width: Val::Px(layout.width),
                height: Val::Px(layout.height),
                border: UiRect::all(Val::Px(BAR_BORDER_PX)),
                ..default()
            },
            BackgroundColor(BAR_BACKGROUND),
            BorderColor::all(BAR_BORDER),
        ))
        .with_children(|parent| {
            parent.spawn((
                fill_marker,
                Node {
                    width: Val::Px(layout.inner_width()),
                    height: Val::Percent(100.0),
                    ..default()
                },
                BackgroundColor(layout.fill),
            ));
        });
}
