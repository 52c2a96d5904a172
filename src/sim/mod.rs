//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Fixed timestep only
//! - Seeded RNG only (one stream per level)
//! - Integer rectangles for every collision test
//! - No rendering or platform dependencies

pub mod body;
pub mod collision;
pub mod direction;
pub mod entities;
pub mod layouts;
pub mod level;
pub mod rect;
pub mod segment;
pub mod state;
pub mod tick;

pub use body::{Body, Turn};
pub use collision::{hits_any, remove_hits};
pub use direction::Direction;
pub use entities::{Consumable, Obstacle};
pub use level::{BodyDef, Level, LevelDef, LevelOutcome};
pub use rect::{Bounds, Rect};
pub use segment::Segment;
pub use state::{Banner, GamePhase, Session};
pub use tick::{Command, TickInput, tick};
