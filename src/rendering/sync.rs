//! Canvas to scene synchronisation
//!
//! Mirrors the board view's [`Canvas`] into Bevy entities. Each drawn item
//! becomes one entity carrying a [`CanvasItemId`]; the sync system diffs ids
//! so a piece-layer refresh only respawns piece sprites.
//!
//! # Coordinates
//!
//! Canvas space has its origin top-left with y down. The 2D camera is centred
//! on the board, so a canvas point maps to `(x - w/2, h/2 - y)`.

use std::collections::{HashMap, HashSet};

use bevy::asset::RenderAssetUsages;
use bevy::prelude::*;
use bevy::render::render_resource::{Extent3d, TextureDimension, TextureFormat};

use crate::game::types::PieceCode;
use crate::rendering::board::view::BoardView;
use crate::rendering::canvas::{Canvas, CanvasItem, Shape, TextAnchor};

/// The board view shown in the primary window
#[derive(Resource)]
pub struct ActiveBoard(pub BoardView);

/// Links a scene entity to the canvas item it mirrors
#[derive(Component, Debug, Clone, Copy, PartialEq, Eq)]
pub struct CanvasItemId(pub u64);

/// GPU textures for the cached piece sprites
#[derive(Resource, Debug, Default)]
pub struct PieceTextures(pub HashMap<PieceCode, Handle<Image>>);

/// Uploads every cached sprite as an image asset
pub fn upload_piece_textures(
    board: Res<ActiveBoard>,
    mut images: ResMut<Assets<Image>>,
    mut textures: ResMut<PieceTextures>,
) {
    for (code, sprite) in board.0.assets().iter() {
        let (width, height) = sprite.dimensions();
        let image = Image::new(
            Extent3d {
                width,
                height,
                depth_or_array_layers: 1,
            },
            TextureDimension::D2,
            sprite.as_raw().clone(),
            TextureFormat::Rgba8UnormSrgb,
            RenderAssetUsages::RENDER_WORLD,
        );
        textures.0.insert(code, images.add(image));
    }
    info!("[BOARD] Uploaded {} piece textures", textures.0.len());
}

/// Spawns and despawns entities until they match the canvas
pub fn sync_canvas_system(
    mut commands: Commands,
    board: Res<ActiveBoard>,
    textures: Res<PieceTextures>,
    existing: Query<(Entity, &CanvasItemId)>,
    mut synced_revision: Local<Option<u64>>,
) {
    let view = &board.0;
    let canvas = view.canvas();
    if *synced_revision == Some(canvas.revision()) {
        return;
    }

    let live: HashSet<u64> = canvas.items().iter().map(|item| item.id).collect();
    let mut present = HashSet::new();
    let mut despawned = 0;
    for (entity, id) in &existing {
        if live.contains(&id.0) {
            present.insert(id.0);
        } else {
            commands.entity(entity).despawn();
            despawned += 1;
        }
    }

    let tile = view.tile_size() as f32;
    let mut spawned = 0;
    for item in canvas.items() {
        if present.contains(&item.id) {
            continue;
        }
        if spawn_item(&mut commands, canvas, item, &textures, tile) {
            spawned += 1;
        }
    }

    debug!(
        "[BOARD] Synced canvas revision {}: +{} -{}",
        canvas.revision(),
        spawned,
        despawned
    );
    *synced_revision = Some(canvas.revision());
}

/// Canvas pixel to world position at `depth`
pub fn canvas_to_world(canvas: &Canvas, x: f32, y: f32, depth: f32) -> Vec3 {
    Vec3::new(x - canvas.width() / 2.0, canvas.height() / 2.0 - y, depth)
}

/// Returns `false` when a piece has no uploaded texture; the item is skipped
/// rather than drawn blank
fn spawn_item(
    commands: &mut Commands,
    canvas: &Canvas,
    item: &CanvasItem,
    textures: &PieceTextures,
    tile: f32,
) -> bool {
    let depth = item.layer.depth();
    let id = CanvasItemId(item.id);
    match &item.shape {
        Shape::Rect { x1, y1, x2, y2, fill } => {
            let centre = canvas_to_world(canvas, (x1 + x2) / 2.0, (y1 + y2) / 2.0, depth);
            commands.spawn((
                id,
                Sprite::from_color(Color::from(*fill), Vec2::new(x2 - x1, y2 - y1)),
                Transform::from_translation(centre),
            ));
            true
        }
        Shape::Text {
            x,
            y,
            text,
            anchor,
            font_size,
            color,
        } => {
            // Text2d is centred on its transform; shift by an estimated box size
            let half_w = font_size * 0.3 * text.chars().count() as f32;
            let half_h = font_size * 0.5;
            let (cx, cy) = match anchor {
                TextAnchor::NorthWest => (x + half_w, y + half_h),
                TextAnchor::SouthEast => (x - half_w, y - half_h),
            };
            commands.spawn((
                id,
                Text2d::new(text.clone()),
                TextFont {
                    font_size: *font_size,
                    ..default()
                },
                TextColor(Color::from(*color)),
                Transform::from_translation(canvas_to_world(canvas, cx, cy, depth)),
            ));
            true
        }
        Shape::Image { x, y, code, square } => {
            let Some(image) = textures.0.get(code).cloned() else {
                error!("[BOARD] No texture uploaded for {} on {}, not drawing it", code, square);
                return false;
            };
            commands.spawn((
                id,
                Name::new(format!("{code} on {square}")),
                Sprite {
                    image,
                    custom_size: Some(Vec2::splat(tile)),
                    ..default()
                },
                Transform::from_translation(canvas_to_world(canvas, *x, *y, depth)),
            ));
            true
        }
    }
}
