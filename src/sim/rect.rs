//! Axis-aligned rectangle geometry
//!
//! Every collidable thing on the board (body segments, walls, consumables)
//! is an integer rectangle: an origin (top-left corner) and an extent.
//! Board coordinates grow right (+x) and down (+y).

use glam::IVec2;
use serde::{Deserialize, Serialize};

/// An integer rectangle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Rect {
    /// Top-left corner
    pub origin: IVec2,
    /// Width (x) and height (y)
    pub size: IVec2,
}

impl Rect {
    pub const fn new(x: i32, y: i32, width: i32, height: i32) -> Self {
        Self {
            origin: IVec2::new(x, y),
            size: IVec2::new(width, height),
        }
    }

    #[inline]
    pub fn left(&self) -> i32 {
        self.origin.x
    }

    #[inline]
    pub fn right(&self) -> i32 {
        self.origin.x + self.size.x
    }

    #[inline]
    pub fn top(&self) -> i32 {
        self.origin.y
    }

    #[inline]
    pub fn bottom(&self) -> i32 {
        self.origin.y + self.size.y
    }

    #[inline]
    pub fn width(&self) -> i32 {
        self.size.x
    }

    #[inline]
    pub fn height(&self) -> i32 {
        self.size.y
    }

    /// Move so the left edge sits at `x`, keeping the size
    pub fn set_left(&mut self, x: i32) {
        self.origin.x = x;
    }

    /// Move so the right edge sits at `x`, keeping the size
    pub fn set_right(&mut self, x: i32) {
        self.origin.x = x - self.size.x;
    }

    /// Move so the top edge sits at `y`, keeping the size
    pub fn set_top(&mut self, y: i32) {
        self.origin.y = y;
    }

    /// Move so the bottom edge sits at `y`, keeping the size
    pub fn set_bottom(&mut self, y: i32) {
        self.origin.y = y - self.size.y;
    }

    /// A rectangle with no area never collides with anything
    pub fn is_empty(&self) -> bool {
        self.size.x <= 0 || self.size.y <= 0
    }

    /// True when the two rectangles share some area (touching edges don't count)
    pub fn intersects(&self, other: &Rect) -> bool {
        !self.is_empty()
            && !other.is_empty()
            && self.left() < other.right()
            && other.left() < self.right()
            && self.top() < other.bottom()
            && other.top() < self.bottom()
    }

    /// True when `other` lies entirely within this rectangle
    pub fn contains(&self, other: &Rect) -> bool {
        other.left() >= self.left()
            && other.right() <= self.right()
            && other.top() >= self.top()
            && other.bottom() <= self.bottom()
    }
}

/// Anything that occupies a rectangle on the board
pub trait Bounds {
    fn bounds(&self) -> Rect;
}

impl Bounds for Rect {
    fn bounds(&self) -> Rect {
        *self
    }
}
