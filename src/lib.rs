//! Snake Levels - a level-based segmented snake arcade game
//!
//! Core modules:
//! - `sim`: Deterministic simulation (body movement, collisions, levels, session)
//! - `renderer`: Per-tick frame snapshots and the renderers that consume them
//! - `input`: Discrete commands and the sources that produce them
//! - `strings`: Localization table
//! - `highscores`: Persistent top-score list
//! - `settings`: Runtime configuration

pub mod clock;
pub mod error;
pub mod highscores;
pub mod input;
pub mod renderer;
pub mod settings;
pub mod sim;
pub mod strings;

pub use error::{Error, Result};
pub use highscores::{HighScoreSink, HighScores};
pub use settings::Settings;
pub use strings::{StringId, Strings};

/// RGBA color, components in 0.0..=1.0
pub type Color = [f32; 4];

/// Game configuration constants
pub mod consts {
    /// Default frame rate (ticks per second)
    pub const DEFAULT_FRAME_RATE: u32 = 60;

    /// Board (playfield) dimensions in pixels
    pub const BOARD_WIDTH: i32 = 700;
    pub const BOARD_HEIGHT: i32 = 500;
    /// Status panel drawn above the board
    pub const PANEL_HEIGHT: i32 = 100;
    /// Full window size
    pub const WINDOW_WIDTH: i32 = BOARD_WIDTH;
    pub const WINDOW_HEIGHT: i32 = BOARD_HEIGHT + PANEL_HEIGHT;

    /// Thickness of the border walls on every level
    pub const BORDER_WALL: i32 = 20;

    /// Length added to the tail for every consumable eaten
    pub const GROW_LENGTH: f32 = 20.0;
    /// Side of a consumable's square
    pub const CONSUMABLE_SIZE: i32 = 10;
    /// Velocity added every tick while a level is in bonus mode (px/s)
    pub const BONUS_ACCELERATION: f32 = 0.05;
    /// Consumables eaten in bonus mode per extra life
    pub const LIFE_VALUE: u32 = 10;
    /// Segments before this index never take part in self-collision
    pub const SELF_COLLISION_START: usize = 3;
}

/// Named colors used by levels and the HUD
pub mod palette {
    use super::Color;

    pub const BLACK: Color = [0.0, 0.0, 0.0, 1.0];
    pub const WHITE: Color = [1.0, 1.0, 1.0, 1.0];
    pub const RED: Color = [1.0, 0.0, 0.0, 1.0];
    pub const GREEN: Color = [0.0, 1.0, 0.0, 1.0];
    pub const BLUE: Color = [0.0, 0.0, 1.0, 1.0];
    pub const YELLOW: Color = [1.0, 1.0, 0.0, 1.0];
    pub const GREY: Color = [0.867, 0.867, 0.867, 1.0];
    pub const MAROON: Color = [0.5, 0.0, 0.0, 1.0];
    pub const FOREST: Color = [0.0, 0.5, 0.0, 1.0];
    pub const NAVY: Color = [0.0, 0.0, 0.5, 1.0];

    /// Body segments
    pub const BODY: Color = GREEN;
    /// Consumables
    pub const CONSUMABLE: Color = GREY;
    /// Status panel background
    pub const PANEL: Color = BLUE;
}
