//! Explicit art resolution: an image when it can be found, a solid
//! placeholder otherwise. Resolution never fails the session.

use bevy::asset::RenderAssetUsages;
use bevy::image::{CompressedImageFormats, ImageSampler, ImageType};
use bevy::prelude::*;
use std::fs;
use std::path::Path;

use super::manifest::{PlaceholderDef, SpriteAssetDef};

/// Error type for art that could not be used.
#[derive(Debug)]
pub struct ArtLoadError {
    pub file: String,
    pub message: String,
}

impl std::fmt::Display for ArtLoadError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Failed to load {}: {}", self.file, self.message)
    }
}

impl std::error::Error for ArtLoadError {}

#[derive(Debug, Clone, PartialEq)]
pub enum Art {
    Image {
        /// Path relative to the asset root, as passed to the asset server.
        path: String,
        size: (i32, i32),
        /// Drawn instead if the image later fails to load.
        fallback: PlaceholderDef,
    },
    Placeholder(PlaceholderDef),
}

impl Art {
    /// Body size handed to the simulation.
    pub fn size(&self) -> (i32, i32) {
        match self {
            Art::Image { size, .. } => *size,
            Art::Placeholder(placeholder) => placeholder.size,
        }
    }

    pub fn is_placeholder(&self) -> bool {
        matches!(self, Art::Placeholder(_))
    }
}

/// Art resolved once at startup for both bodies.
#[derive(Resource, Debug, Clone)]
pub struct ArenaArt {
    pub player: Art,
    pub boss: Art,
}

/// Check that the image named by `def` exists under `asset_root` and
/// decodes, so a broken file falls back to the placeholder body size.
pub fn load_art(def: &SpriteAssetDef, asset_root: &Path) -> Result<Art, ArtLoadError> {
    let full_path = asset_root.join(&def.path);
    let file = full_path.display().to_string();

    let metadata = fs::metadata(&full_path).map_err(|e| ArtLoadError {
        file: file.clone(),
        message: format!("IO error: {}", e),
    })?;
    if !metadata.is_file() {
        return Err(ArtLoadError {
            file,
            message: "not a file".to_string(),
        });
    }
    if def.size.0 <= 0 || def.size.1 <= 0 {
        return Err(ArtLoadError {
            file,
            message: format!("invalid draw size {:?}", def.size),
        });
    }

    let bytes = fs::read(&full_path).map_err(|e| ArtLoadError {
        file: file.clone(),
        message: format!("IO error: {}", e),
    })?;
    let extension = full_path
        .extension()
        .and_then(|ext| ext.to_str())
        .unwrap_or_default();
    Image::from_buffer(
        &bytes,
        ImageType::Extension(extension),
        CompressedImageFormats::NONE,
        true,
        ImageSampler::Default,
        RenderAssetUsages::default(),
    )
    .map_err(|e| ArtLoadError {
        file,
        message: format!("Decode error: {}", e),
    })?;

    Ok(Art::Image {
        path: def.path.clone(),
        size: def.size,
        fallback: def.placeholder,
    })
}

/// Like [`load_art`], substituting the placeholder on any error.
pub fn resolve_art(key: &str, def: &SpriteAssetDef, asset_root: &Path) -> Art {
    match load_art(def, asset_root) {
        Ok(art) => {
            info!("Using art {} for {}", def.path, key);
            art
        }
        Err(e) => {
            warn!("{}; drawing {} as a placeholder", e, key);
            Art::Placeholder(def.placeholder)
        }
    }
}

pub fn placeholder_color(placeholder: &PlaceholderDef) -> Color {
    let [r, g, b] = placeholder.color;
    Color::srgb_u8(r, g, b)
}
