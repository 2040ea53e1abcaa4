//! Render sync: screen-space simulation boxes to Bevy world-space sprites.

use bevy::asset::LoadState;
use bevy::prelude::*;
use std::path::Path;

use super::art::{Art, ArenaArt, placeholder_color, resolve_art};
use super::manifest::{BOSS_KEY, PLAYER_KEY, PlaceholderDef, SpriteManifest};
use crate::combat::{Boss, BossSprite};
use crate::core::{Arena, SCREEN_HEIGHT, SCREEN_WIDTH};
use crate::geometry::Rect;
use crate::movement::{Player, PlayerSprite};

pub const MANIFEST_PATH: &str = "assets/sprites/manifest.json";
pub const ASSET_ROOT: &str = "assets";

const PLATFORM_COLOR: Color = Color::srgb(64.0 / 255.0, 82.0 / 255.0, 65.0 / 255.0);

const PLATFORM_Z: f32 = 0.0;
const BOSS_Z: f32 = 1.0;
const PLAYER_Z: f32 = 2.0;

/// Marker for platform sprites.
#[derive(Component, Debug)]
pub struct PlatformSprite;

/// Placeholder to swap in if an image handle fails to load.
#[derive(Component, Debug)]
pub struct ArtFallback(pub PlaceholderDef);

/// Centre of a screen-space rect in world space (origin at window centre,
/// y up).
pub fn screen_to_world(rect: &Rect) -> Vec2 {
    let cx = rect.x as f32 + rect.w as f32 / 2.0;
    let cy = rect.y as f32 + rect.h as f32 / 2.0;
    Vec2::new(
        cx - SCREEN_WIDTH as f32 / 2.0,
        SCREEN_HEIGHT as f32 / 2.0 - cy,
    )
}

/// A living player is always drawn. Once dead, the frozen invincibility
/// timer decides whether the body flickers on or off.
pub fn player_visible(player: &Player) -> bool {
    !player.is_dead() || player.invincibility % 10 < 5
}

pub fn boss_visible(boss: &Boss) -> bool {
    !boss.is_dead()
}

/// Boss sprite rotation. Positive angles turn counter-clockwise.
pub fn boss_rotation(boss: &Boss) -> Quat {
    if boss.spin.is_spinning() {
        Quat::from_rotation_z(boss.spin.angle.to_radians())
    } else {
        Quat::IDENTITY
    }
}

fn visibility(visible: bool) -> Visibility {
    if visible {
        Visibility::Inherited
    } else {
        Visibility::Hidden
    }
}

fn size_vec(size: (i32, i32)) -> Vec2 {
    Vec2::new(size.0 as f32, size.1 as f32)
}

pub(crate) fn resolve_arena_art(mut commands: Commands) {
    let manifest = SpriteManifest::load_from_file(Path::new(MANIFEST_PATH));
    let builtin = SpriteManifest::default();
    let root = Path::new(ASSET_ROOT);

    let resolve = |key: &str| -> Art {
        match manifest.get(key).or_else(|| builtin.get(key)) {
            Some(def) => resolve_art(key, def, root),
            None => {
                warn!("No sprite entry for {}; using a grey placeholder", key);
                Art::Placeholder(PlaceholderDef {
                    size: (50, 50),
                    color: [128, 128, 128],
                })
            }
        }
    };

    let art = ArenaArt {
        player: resolve(PLAYER_KEY),
        boss: resolve(BOSS_KEY),
    };
    if art.player.is_placeholder() || art.boss.is_placeholder() {
        info!(
            "Placeholder art in use (player: {}, boss: {})",
            art.player.is_placeholder(),
            art.boss.is_placeholder()
        );
    }
    commands.insert_resource(art);
}

fn sprite_for(art: &Art, asset_server: &AssetServer) -> (Sprite, Option<ArtFallback>) {
    match art {
        Art::Image {
            path,
            size,
            fallback,
        } => (
            Sprite {
                image: asset_server.load(path.clone()),
                custom_size: Some(size_vec(*size)),
                ..default()
            },
            Some(ArtFallback(*fallback)),
        ),
        Art::Placeholder(placeholder) => (
            Sprite {
                color: placeholder_color(placeholder),
                custom_size: Some(size_vec(placeholder.size)),
                ..default()
            },
            None,
        ),
    }
}

pub(crate) fn spawn_arena_visuals(
    mut commands: Commands,
    arena: Res<Arena>,
    art: Res<ArenaArt>,
    asset_server: Res<AssetServer>,
) {
    for platform in &arena.platforms {
        commands.spawn((
            PlatformSprite,
            Sprite {
                color: PLATFORM_COLOR,
                custom_size: Some(size_vec(platform.size())),
                ..default()
            },
            Transform::from_translation(screen_to_world(platform).extend(PLATFORM_Z)),
        ));
    }

    let (sprite, fallback) = sprite_for(&art.boss, &asset_server);
    let mut boss = commands.spawn((
        BossSprite,
        sprite,
        Transform::from_translation(screen_to_world(&arena.boss.rect).extend(BOSS_Z)),
    ));
    if let Some(fallback) = fallback {
        boss.insert(fallback);
    }

    let (sprite, fallback) = sprite_for(&art.player, &asset_server);
    let mut player = commands.spawn((
        PlayerSprite,
        sprite,
        Transform::from_translation(screen_to_world(&arena.player.rect).extend(PLAYER_Z)),
    ));
    if let Some(fallback) = fallback {
        player.insert(fallback);
    }
}

pub(crate) fn sync_player_sprite(
    arena: Res<Arena>,
    mut query: Query<(&mut Transform, &mut Visibility), With<PlayerSprite>>,
) {
    for (mut transform, mut vis) in &mut query {
        let pos = screen_to_world(&arena.player.rect);
        transform.translation.x = pos.x;
        transform.translation.y = pos.y;
        *vis = visibility(player_visible(&arena.player));
    }
}

pub(crate) fn sync_boss_sprite(
    arena: Res<Arena>,
    mut query: Query<(&mut Transform, &mut Visibility), With<BossSprite>>,
) {
    for (mut transform, mut vis) in &mut query {
        let pos = screen_to_world(&arena.boss.rect);
        transform.translation.x = pos.x;
        transform.translation.y = pos.y;
        transform.rotation = boss_rotation(&arena.boss);
        *vis = visibility(boss_visible(&arena.boss));
    }
}

/// The asset server may still fail on art that decoded at startup (the file
/// changed or went away). Draw the placeholder colour at the same size.
pub(crate) fn swap_failed_art(
    mut commands: Commands,
    asset_server: Res<AssetServer>,
    mut query: Query<(Entity, &mut Sprite, &ArtFallback)>,
) {
    for (entity, mut sprite, fallback) in &mut query {
        if !matches!(asset_server.load_state(sprite.image.id()), LoadState::Failed(_)) {
            continue;
        }

        warn!("Sprite image failed to load; drawing placeholder colour");
        sprite.image = Handle::default();
        sprite.color = placeholder_color(&fallback.0);
        commands.entity(entity).remove::<ArtFallback>();
    }
}
