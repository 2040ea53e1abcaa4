//! Sprite manifest loading.
//!
//! The manifest names the image for each body and the placeholder to draw
//! when that image is unavailable. A missing or unreadable manifest falls
//! back to the built-in entries.

use bevy::prelude::*;
use serde::Deserialize;
use std::collections::HashMap;
use std::fs;
use std::path::Path;

pub const PLAYER_KEY: &str = "player";
pub const BOSS_KEY: &str = "boss";

/// Definition of a single body's art.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct SpriteAssetDef {
    /// Path to the image file, relative to assets/.
    pub path: String,
    /// Drawn (and collision) size when the image is used.
    pub size: (i32, i32),
    pub placeholder: PlaceholderDef,
}

/// Solid rectangle drawn instead of missing art.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
pub struct PlaceholderDef {
    pub size: (i32, i32),
    /// sRGB bytes.
    pub color: [u8; 3],
}

/// Raw manifest JSON structure.
#[derive(Debug, Deserialize)]
struct ManifestJson {
    version: u32,
    assets: HashMap<String, SpriteAssetDef>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct SpriteManifest {
    pub version: u32,
    pub assets: HashMap<String, SpriteAssetDef>,
}

impl Default for SpriteManifest {
    fn default() -> Self {
        let assets = HashMap::from([
            (
                PLAYER_KEY.to_string(),
                SpriteAssetDef {
                    path: "sprites/man.png".to_string(),
                    size: (80, 80),
                    placeholder: PlaceholderDef {
                        size: (50, 50),
                        color: [0, 255, 0],
                    },
                },
            ),
            (
                BOSS_KEY.to_string(),
                SpriteAssetDef {
                    path: "sprites/evil.png".to_string(),
                    size: (220, 220),
                    placeholder: PlaceholderDef {
                        size: (200, 200),
                        color: [255, 0, 0],
                    },
                },
            ),
        ]);
        Self { version: 1, assets }
    }
}

impl SpriteManifest {
    pub fn from_json(contents: &str) -> Result<Self, serde_json::Error> {
        let manifest: ManifestJson = serde_json::from_str(contents)?;
        Ok(Self {
            version: manifest.version,
            assets: manifest.assets,
        })
    }

    /// Load the manifest from a JSON file, keeping the built-in entries for
    /// any key the file does not define.
    pub fn load_from_file(path: &Path) -> Self {
        let mut manifest = Self::default();

        if !path.exists() {
            warn!(
                "Sprite manifest not found at {:?}, using built-in manifest",
                path
            );
            return manifest;
        }

        let contents = match fs::read_to_string(path) {
            Ok(c) => c,
            Err(e) => {
                error!("Failed to read sprite manifest: {}", e);
                return manifest;
            }
        };

        match Self::from_json(&contents) {
            Ok(loaded) => {
                manifest.version = loaded.version;
                manifest.assets.extend(loaded.assets);
                info!(
                    "Loaded sprite manifest v{} with {} assets",
                    manifest.version,
                    manifest.assets.len()
                );
            }
            Err(e) => error!("Failed to parse sprite manifest: {}", e),
        }

        manifest
    }

    /// Get a sprite definition by key.
    pub fn get(&self, key: &str) -> Option<&SpriteAssetDef> {
        self.assets.get(key)
    }
}
