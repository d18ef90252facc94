//! Retained drawing surface for the board view
//!
//! The canvas is a display list in pixel space (origin top-left, y down). Every
//! item gets a unique, never-reused id and one [`Layer`] tag, so a caller can
//! clear a whole layer (`delete_tag`) without touching the others. The Bevy
//! mirror in [`crate::rendering::plugin`] diffs on ids, and headless
//! consumers (tests, snapshots) read [`Canvas::items`] directly.

use bevy::color::Srgba;

use crate::game::types::{PieceCode, Square};

/// Tag attached to every drawn item
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Layer {
    Tile,
    Label,
    Piece,
}

impl Layer {
    /// Stacking order used when the list is mirrored into a scene
    pub fn depth(self) -> f32 {
        match self {
            Layer::Tile => 0.0,
            Layer::Label => 1.0,
            Layer::Piece => 2.0,
        }
    }
}

/// Which corner of the text box sits on the item's point
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextAnchor {
    NorthWest,
    SouthEast,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Shape {
    Rect {
        x1: f32,
        y1: f32,
        x2: f32,
        y2: f32,
        fill: Srgba,
    },
    Text {
        x: f32,
        y: f32,
        text: String,
        anchor: TextAnchor,
        font_size: f32,
        color: Srgba,
    },
    /// Sprite centred on `(x, y)`
    Image {
        x: f32,
        y: f32,
        code: PieceCode,
        square: Square,
    },
}

#[derive(Debug, Clone, PartialEq)]
pub struct CanvasItem {
    pub id: u64,
    pub layer: Layer,
    pub shape: Shape,
}

#[derive(Debug, Clone)]
pub struct Canvas {
    width: f32,
    height: f32,
    items: Vec<CanvasItem>,
    next_id: u64,
    revision: u64,
}

impl Canvas {
    pub fn new(width: f32, height: f32) -> Self {
        Self {
            width,
            height,
            items: Vec::new(),
            next_id: 1,
            revision: 0,
        }
    }

    pub fn width(&self) -> f32 {
        self.width
    }

    pub fn height(&self) -> f32 {
        self.height
    }

    /// Bumped on every mutation
    pub fn revision(&self) -> u64 {
        self.revision
    }

    fn push(&mut self, layer: Layer, shape: Shape) -> u64 {
        let id = self.next_id;
        self.next_id += 1;
        self.revision += 1;
        self.items.push(CanvasItem { id, layer, shape });
        id
    }

    pub fn create_rect(&mut self, x1: f32, y1: f32, x2: f32, y2: f32, fill: Srgba) -> u64 {
        self.push(Layer::Tile, Shape::Rect { x1, y1, x2, y2, fill })
    }

    pub fn create_text(
        &mut self,
        x: f32,
        y: f32,
        text: impl Into<String>,
        anchor: TextAnchor,
        font_size: f32,
        color: Srgba,
    ) -> u64 {
        self.push(
            Layer::Label,
            Shape::Text {
                x,
                y,
                text: text.into(),
                anchor,
                font_size,
                color,
            },
        )
    }

    pub fn create_image(&mut self, x: f32, y: f32, code: PieceCode, square: Square) -> u64 {
        self.push(Layer::Piece, Shape::Image { x, y, code, square })
    }

    /// Removes every item
    pub fn delete_all(&mut self) {
        self.items.clear();
        self.revision += 1;
    }

    /// Removes every item on `layer`, returning how many were dropped
    pub fn delete_tag(&mut self, layer: Layer) -> usize {
        let before = self.items.len();
        self.items.retain(|item| item.layer != layer);
        self.revision += 1;
        before - self.items.len()
    }

    pub fn items(&self) -> &[CanvasItem] {
        &self.items
    }

    pub fn with_tag(&self, layer: Layer) -> impl Iterator<Item = &CanvasItem> {
        self.items.iter().filter(move |item| item.layer == layer)
    }

    pub fn without_tag(&self, layer: Layer) -> impl Iterator<Item = &CanvasItem> {
        self.items.iter().filter(move |item| item.layer != layer)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::types::{PieceColor, PieceKind};

    fn pawn() -> PieceCode {
        PieceCode::new(PieceColor::White, PieceKind::Pawn)
    }

    #[test]
    fn test_ids_are_unique_and_increasing() {
        let mut canvas = Canvas::new(80.0, 80.0);
        let a = canvas.create_rect(0.0, 0.0, 10.0, 10.0, Srgba::WHITE);
        let b = canvas.create_text(0.0, 0.0, "A", TextAnchor::NorthWest, 8.0, Srgba::BLACK);
        canvas.delete_all();
        let c = canvas.create_image(5.0, 5.0, pawn(), Square { file: 0, rank: 0 });
        assert!(a < b && b < c);
        assert_eq!(canvas.len(), 1);
    }

    #[test]
    fn test_delete_tag_only_touches_that_layer() {
        let mut canvas = Canvas::new(80.0, 80.0);
        canvas.create_rect(0.0, 0.0, 10.0, 10.0, Srgba::WHITE);
        canvas.create_image(5.0, 5.0, pawn(), Square { file: 0, rank: 1 });
        canvas.create_image(15.0, 5.0, pawn(), Square { file: 1, rank: 1 });
        let removed = canvas.delete_tag(Layer::Piece);
        assert_eq!(removed, 2);
        assert_eq!(canvas.len(), 1);
        assert_eq!(canvas.with_tag(Layer::Tile).count(), 1);
        assert_eq!(canvas.with_tag(Layer::Piece).count(), 0);
    }

    #[test]
    fn test_revision_bumps_on_every_mutation() {
        let mut canvas = Canvas::new(80.0, 80.0);
        let r0 = canvas.revision();
        canvas.create_rect(0.0, 0.0, 1.0, 1.0, Srgba::WHITE);
        let r1 = canvas.revision();
        canvas.delete_tag(Layer::Label);
        let r2 = canvas.revision();
        assert!(r0 < r1 && r1 < r2);
    }

    #[test]
    fn test_layer_depth_orders_pieces_on_top() {
        assert!(Layer::Tile.depth() < Layer::Label.depth());
        assert!(Layer::Label.depth() < Layer::Piece.depth());
    }
}
