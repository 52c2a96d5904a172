//! Static walls and the consumables the body eats

use serde::{Deserialize, Serialize};

use super::rect::{Bounds, Rect};
use crate::Color;
use crate::consts::CONSUMABLE_SIZE;

/// A wall. Immutable once placed.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Obstacle {
    pub rect: Rect,
    pub color: Color,
}

impl Obstacle {
    pub fn new(color: Color, x: i32, y: i32, width: i32, height: i32) -> Self {
        Self {
            rect: Rect::new(x, y, width, height),
            color,
        }
    }
}

impl Bounds for Obstacle {
    fn bounds(&self) -> Rect {
        self.rect
    }
}

/// Something to eat ("mouse")
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Consumable {
    pub rect: Rect,
}

impl Consumable {
    /// A standard-size consumable with its corner at (x, y)
    pub fn at(x: i32, y: i32) -> Self {
        Self {
            rect: Rect::new(x, y, CONSUMABLE_SIZE, CONSUMABLE_SIZE),
        }
    }
}

impl Bounds for Consumable {
    fn bounds(&self) -> Rect {
        self.rect
    }
}
