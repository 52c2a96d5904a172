//! The player's body: a chain of segments, head first
//!
//! The body moves by growing its head and shrinking its tail by the same
//! amount each tick, so its total length only changes when it eats. Turning
//! inserts a new head segment that overlaps the corner of the old one by one
//! thickness, which keeps the silhouette seamless.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::direction::Direction;
use super::rect::Rect;
use super::segment::Segment;
use crate::consts::SELF_COLLISION_START;

/// Heading of a freshly spawned body
pub const START_DIRECTION: Direction = Direction::Left;

/// What happened to a directional command
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Turn {
    /// Same axis as the current heading, or a turn is already pending
    Ignored,
    /// A new head segment was inserted
    Applied,
    /// The turn would double back alongside the previous segment; it is
    /// held until the head is long enough to clear it
    Deferred,
}

/// Where and how long the body is when (re)spawned
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Spawn {
    pub position: Vec2,
    pub length: f32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Body {
    /// Head at index 0, tail last. Never empty.
    segments: Vec<Segment>,
    thickness: f32,
    /// Speed in pixels per second
    velocity: f32,
    direction: Direction,
    /// Turn waiting for the head to clear the segment behind it
    pending_turn: Option<Direction>,
    spawn: Spawn,
}

impl Body {
    /// Create a body heading left whose single segment starts at `position`
    /// and spans `length`
    pub fn new(position: Vec2, length: f32, thickness: f32, velocity: f32) -> Self {
        let mut body = Self {
            segments: Vec::new(),
            thickness,
            velocity,
            direction: START_DIRECTION,
            pending_turn: None,
            spawn: Spawn { position, length },
        };
        body.respawn();
        body
    }

    /// Put the body back at its spawn point with its starting length.
    /// Velocity is kept.
    pub fn resurrect(&mut self) {
        self.respawn();
    }

    fn respawn(&mut self) {
        self.direction = START_DIRECTION;
        self.pending_turn = None;
        self.segments.clear();
        self.insert_head(Some(self.spawn.position));
        let extra = (self.spawn.length - self.thickness).max(0.0);
        self.segments[0].add_length(extra);
    }

    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    pub fn head(&self) -> &Segment {
        &self.segments[0]
    }

    pub fn tail(&self) -> &Segment {
        &self.segments[self.segments.len() - 1]
    }

    pub fn thickness(&self) -> f32 {
        self.thickness
    }

    pub fn velocity(&self) -> f32 {
        self.velocity
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    pub fn pending_turn(&self) -> Option<Direction> {
        self.pending_turn
    }

    pub fn spawn(&self) -> Spawn {
        self.spawn
    }

    pub fn change_velocity(&mut self, change: f32) {
        self.velocity += change;
    }

    /// Visible length: segment lengths minus the corner overlaps
    pub fn total_length(&self) -> f32 {
        let sum: f32 = self.segments.iter().map(|s| s.length()).sum();
        sum - (self.segments.len() - 1) as f32 * self.thickness
    }

    /// Segments the head can crash into (everything past the first three)
    pub fn self_collidables(&self) -> &[Segment] {
        self.segments.get(SELF_COLLISION_START..).unwrap_or(&[])
    }

    pub fn move_left(&mut self) -> Turn {
        self.steer(Direction::Left)
    }

    pub fn move_right(&mut self) -> Turn {
        self.steer(Direction::Right)
    }

    pub fn move_up(&mut self) -> Turn {
        self.steer(Direction::Up)
    }

    pub fn move_down(&mut self) -> Turn {
        self.steer(Direction::Down)
    }

    /// Request a new heading
    pub fn steer(&mut self, direction: Direction) -> Turn {
        if self.pending_turn.is_some() || direction.same_axis(self.direction) {
            return Turn::Ignored;
        }

        // Doubling back alongside the segment behind the head would overlap
        // it straight away
        if self.segments.len() > 1
            && direction == self.segments[1].direction.opposite()
            && !self.turn_is_clear()
        {
            log::debug!(
                "Turn {:?} deferred (head length {:.1})",
                direction,
                self.head().length()
            );
            self.pending_turn = Some(direction);
            return Turn::Deferred;
        }

        self.direction = direction;
        self.insert_head(None);
        Turn::Applied
    }

    /// The head is long enough to double back without touching the
    /// segment behind it
    fn turn_is_clear(&self) -> bool {
        self.head().length() > self.thickness * 2.0 + 1.0
    }

    /// Displacement for one tick at `tick_hz` ticks per second
    pub fn displacement(&self, tick_hz: f32) -> Vec2 {
        self.direction.unit() * (self.velocity / tick_hz)
    }

    /// Advance one tick: apply a pending turn if it is now clear, extend the
    /// head and pull the tail in by the same distance
    pub fn advance(&mut self, tick_hz: f32) {
        if let Some(direction) = self.pending_turn {
            if self.turn_is_clear() {
                log::debug!("Deferred turn {:?} applied", direction);
                self.pending_turn = None;
                self.direction = direction;
                self.insert_head(None);
            }
        }

        let step = self.displacement(tick_hz);
        let distance = step.x.abs() + step.y.abs();

        if self.segments.len() > 1 {
            let head = &mut self.segments[0];
            head.add_length(distance);
            // Up/left heads keep their origin on the leading edge
            if !head.direction.is_positive() {
                head.move_by(step);
            }
            self.shrink_tail(distance);
        } else {
            // Nothing to pull in behind a lone segment: slide it
            self.segments[0].move_by(step);
        }
    }

    /// Remove `amount` of length from the tail end, dropping segments that
    /// shrink down to the corner overlap
    fn shrink_tail(&mut self, amount: f32) {
        let mut remaining = amount;
        while remaining > 0.0 {
            let count = self.segments.len();
            let thickness = self.thickness;
            let Some(tail) = self.segments.last_mut() else {
                break;
            };
            let new_length = tail.length() - remaining;
            if new_length <= thickness && count > 1 {
                // Whatever the tail couldn't absorb comes off the next one
                self.segments.pop();
                remaining = thickness - new_length;
            } else {
                tail.add_length(-remaining);
                // Down/right tails keep their origin on the trailing edge
                if tail.direction.is_positive() {
                    tail.move_by(tail.direction.unit() * remaining);
                }
                remaining = 0.0;
            }
        }
    }

    /// Lengthen the tail end by `amount`, leaving the rest of the body where
    /// it is
    pub fn grow_tail(&mut self, amount: f32) {
        let last = self.segments.len() - 1;
        let tail = &mut self.segments[last];
        tail.add_length(amount);
        if tail.direction.is_positive() {
            tail.move_by(-tail.direction.unit() * amount);
        }
    }

    /// Insert a new head segment heading in `self.direction`.
    ///
    /// With an explicit position the segment starts there; otherwise it is
    /// placed over the leading corner of the current head.
    fn insert_head(&mut self, position: Option<Vec2>) {
        let start = match position {
            Some(p) => p,
            None => self.segments[0].position(),
        };
        let mut segment = Segment::new(self.direction, self.thickness, start);
        segment.add_length(self.thickness);

        if position.is_none() {
            align_to_previous(&mut segment, self.segments[0].rect(), self.segments[0].direction);
            segment.sync_position_from_rect();
        }

        self.segments.insert(0, segment);
    }
}

/// Line a new head up with the leading end of the previous head so the two
/// share exactly one thickness-square at the corner
fn align_to_previous(segment: &mut Segment, previous: Rect, previous_direction: Direction) {
    let direction = segment.direction;
    let rect = segment.rect_mut();
    match previous_direction {
        Direction::Up => {
            rect.set_top(previous.top());
            if direction == Direction::Left {
                rect.set_right(previous.right());
            } else {
                rect.set_left(previous.left());
            }
        }
        Direction::Down => {
            rect.set_bottom(previous.bottom());
            if direction == Direction::Left {
                rect.set_right(previous.right());
            } else {
                rect.set_left(previous.left());
            }
        }
        Direction::Left => {
            rect.set_left(previous.left());
            if direction == Direction::Up {
                rect.set_bottom(previous.bottom());
            } else {
                rect.set_top(previous.top());
            }
        }
        Direction::Right => {
            rect.set_right(previous.right());
            if direction == Direction::Up {
                rect.set_bottom(previous.bottom());
            } else {
                rect.set_top(previous.top());
            }
        }
    }
}
