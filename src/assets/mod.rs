//! Asset management module
//!
//! Loads the twelve piece sprites from `<asset dir>/pieces/<code>.png`, decodes
//! them with the `image` crate and resizes each to the board tile size.
//!
//! Loading is all-or-nothing: [`AssetStore::load`] either returns a store with
//! every [`PieceCode`] present or fails with [`AssetError::MissingAsset`]. The
//! cache is never mutated after construction.

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use image::imageops::FilterType;
use image::RgbaImage;
use tracing::{debug, info};

use crate::game::types::PieceCode;

/// Subdirectory of the asset root holding piece sprites
pub const PIECES_SUBDIR: &str = "pieces";

/// Largest accepted tile edge in pixels
pub const MAX_TILE_SIZE: u32 = 512;

/// Errors raised while building the sprite cache
#[derive(Debug, thiserror::Error)]
pub enum AssetError {
    /// The asset root does not exist or is not a directory
    #[error("Asset location '{}' does not exist", path.display())]
    AssetDirectory { path: PathBuf },

    /// A piece sprite could not be found or decoded
    #[error("Missing asset for piece {code} at '{}': {reason}", path.display())]
    MissingAsset {
        code: PieceCode,
        path: PathBuf,
        reason: String,
    },

    /// Tile size outside `1..=MAX_TILE_SIZE`
    #[error("Tile size {size}px is outside 1..={max}px")]
    InvalidTileSize { size: u32, max: u32 },
}

/// Result type alias for asset operations
pub type AssetResult<T> = Result<T, AssetError>;

/// Write-once cache of tile-sized piece sprites
#[derive(Debug, Clone)]
pub struct AssetStore {
    root: PathBuf,
    tile_size: u32,
    sprites: HashMap<PieceCode, RgbaImage>,
}

impl AssetStore {
    /// Decodes and resizes every piece sprite under `asset_dir`
    ///
    /// # Errors
    ///
    /// - [`AssetError::AssetDirectory`] if `asset_dir` is not a directory
    /// - [`AssetError::MissingAsset`] on the first sprite that is absent or
    ///   fails to decode; nothing is cached in that case
    pub fn load(asset_dir: impl AsRef<Path>, tile_size: u32) -> AssetResult<Self> {
        let root = asset_dir.as_ref().to_path_buf();
        if !(1..=MAX_TILE_SIZE).contains(&tile_size) {
            return Err(AssetError::InvalidTileSize {
                size: tile_size,
                max: MAX_TILE_SIZE,
            });
        }
        if !root.is_dir() {
            return Err(AssetError::AssetDirectory { path: root });
        }

        let mut sprites = HashMap::with_capacity(12);
        for code in PieceCode::all() {
            let path = Self::sprite_path(&root, code);
            let decoded = image::open(&path).map_err(|e| AssetError::MissingAsset {
                code,
                path: path.clone(),
                reason: e.to_string(),
            })?;
            let sprite = decoded
                .resize_exact(tile_size, tile_size, FilterType::Triangle)
                .to_rgba8();
            debug!("[ASSETS] Loaded {} from {:?}", code, path);
            sprites.insert(code, sprite);
        }

        info!(
            "[ASSETS] Preloaded {} piece sprites at {}px from {:?}",
            sprites.len(),
            tile_size,
            root
        );
        Ok(Self {
            root,
            tile_size,
            sprites,
        })
    }

    /// Location a sprite is expected at, whether or not it exists
    pub fn sprite_path(root: &Path, code: PieceCode) -> PathBuf {
        root.join(PIECES_SUBDIR).join(code.file_name())
    }

    /// Cached sprite for `code`
    ///
    /// A miss can only happen if the store was built by hand; it is still
    /// reported rather than drawn as an empty square.
    pub fn sprite(&self, code: PieceCode) -> AssetResult<&RgbaImage> {
        self.sprites.get(&code).ok_or_else(|| AssetError::MissingAsset {
            code,
            path: Self::sprite_path(&self.root, code),
            reason: "not in cache".to_string(),
        })
    }

    pub fn tile_size(&self) -> u32 {
        self.tile_size
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn len(&self) -> usize {
        self.sprites.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sprites.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (PieceCode, &RgbaImage)> {
        self.sprites.iter().map(|(code, sprite)| (*code, sprite))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::Rgba;

    fn temp_assets(skip: Option<&str>) -> PathBuf {
        let dir = std::env::temp_dir().join(format!("chessdesk-assets-{}", uuid::Uuid::new_v4()));
        std::fs::create_dir_all(dir.join(PIECES_SUBDIR)).unwrap();
        for code in PieceCode::all() {
            if Some(code.to_string().as_str()) == skip {
                continue;
            }
            RgbaImage::from_pixel(16, 16, Rgba([10, 20, 30, 255]))
                .save(AssetStore::sprite_path(&dir, code))
                .unwrap();
        }
        dir
    }

    #[test]
    fn test_load_all_sprites_resized() {
        let dir = temp_assets(None);
        let store = AssetStore::load(&dir, 40).unwrap();
        assert_eq!(store.len(), 12);
        for code in PieceCode::all() {
            let sprite = store.sprite(code).unwrap();
            assert_eq!(sprite.dimensions(), (40, 40));
        }
        std::fs::remove_dir_all(dir).ok();
    }

    #[test]
    fn test_missing_sprite_fails_whole_load() {
        let dir = temp_assets(Some("BQ"));
        match AssetStore::load(&dir, 40) {
            Err(AssetError::MissingAsset { code, .. }) => assert_eq!(code.to_string(), "BQ"),
            other => panic!("expected MissingAsset, got {:?}", other.map(|s| s.len())),
        }
        std::fs::remove_dir_all(dir).ok();
    }

    #[test]
    fn test_undecodable_sprite_fails() {
        let dir = temp_assets(None);
        std::fs::write(dir.join(PIECES_SUBDIR).join("WP.png"), b"not a png").unwrap();
        let err = AssetStore::load(&dir, 40).unwrap_err();
        assert!(matches!(err, AssetError::MissingAsset { .. }));
        std::fs::remove_dir_all(dir).ok();
    }

    #[test]
    fn test_missing_directory() {
        let dir = std::env::temp_dir().join(format!("chessdesk-none-{}", uuid::Uuid::new_v4()));
        let err = AssetStore::load(&dir, 40).unwrap_err();
        assert!(matches!(err, AssetError::AssetDirectory { .. }));
    }

    #[test]
    fn test_tile_size_out_of_range_rejected() {
        let dir = temp_assets(None);
        for size in [0, MAX_TILE_SIZE + 1, u32::MAX] {
            assert!(matches!(
                AssetStore::load(&dir, size),
                Err(AssetError::InvalidTileSize { .. })
            ));
        }
        assert!(AssetStore::load(&dir, MAX_TILE_SIZE).is_ok());
        std::fs::remove_dir_all(dir).ok();
    }
}
