//! A single straight piece of the body
//!
//! Position is tracked at fractional precision; the rectangle used for
//! drawing and collisions is its floor-truncated integer projection.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::direction::Direction;
use super::rect::{Bounds, Rect};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Segment {
    /// Heading, fixed for the segment's lifetime
    pub direction: Direction,
    /// Extent perpendicular to `direction`
    thickness: f32,
    /// Extent along `direction`
    length: f32,
    /// Authoritative top-left corner
    position: Vec2,
    /// Integer projection of position/length/thickness
    rect: Rect,
}

impl Segment {
    /// A zero-length segment at `position`
    pub fn new(direction: Direction, thickness: f32, position: Vec2) -> Self {
        let mut segment = Self {
            direction,
            thickness,
            length: 0.0,
            position,
            rect: Rect::default(),
        };
        segment.refresh_rect();
        segment
    }

    #[inline]
    pub fn length(&self) -> f32 {
        self.length
    }

    #[inline]
    pub fn thickness(&self) -> f32 {
        self.thickness
    }

    #[inline]
    pub fn position(&self) -> Vec2 {
        self.position
    }

    #[inline]
    pub fn rect(&self) -> Rect {
        self.rect
    }

    /// Direct access to the rectangle, for corner alignment at insertion.
    /// Call [`Segment::sync_position_from_rect`] afterwards.
    pub(crate) fn rect_mut(&mut self) -> &mut Rect {
        &mut self.rect
    }

    /// Lengthen (or shorten, with a negative delta) along the heading.
    ///
    /// The origin is left where it is. Length never drops below zero.
    /// Returns the new length.
    pub fn add_length(&mut self, delta: f32) -> f32 {
        self.length = (self.length + delta).max(0.0);
        self.refresh_rect();
        self.length
    }

    /// Shift the fractional position, returning it
    pub fn move_by(&mut self, delta: Vec2) -> Vec2 {
        self.position += delta;
        self.rect.origin = self.position.floor().as_ivec2();
        self.position
    }

    /// Re-anchor the fractional position on the rectangle's integer origin
    pub fn sync_position_from_rect(&mut self) {
        self.position = self.rect.origin.as_vec2();
    }

    fn refresh_rect(&mut self) {
        let along = self.length.floor().max(0.0) as i32;
        let across = self.thickness.floor().max(0.0) as i32;
        self.rect.origin = self.position.floor().as_ivec2();
        self.rect.size = if self.direction.is_horizontal() {
            glam::IVec2::new(along, across)
        } else {
            glam::IVec2::new(across, along)
        };
    }
}

impl Bounds for Segment {
    fn bounds(&self) -> Rect {
        self.rect
    }
}
