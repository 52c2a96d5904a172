//! Rendering boundary
//!
//! The simulation never draws. Once per tick the session is captured into a
//! [`Frame`]: plain rectangles with colors plus the semantic HUD values, and
//! whatever consumes frames implements [`Renderer`].

pub mod shapes;
pub mod text;
pub mod vertex;

pub use shapes::VertexBatch;
pub use text::TextRenderer;
pub use vertex::Vertex;

use crate::Color;
use crate::palette;
use crate::sim::{Banner, Body, Consumable, GamePhase, Level, Obstacle, Rect, Session};
use crate::strings::StringId;

/// What a rectangle belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DrawKind {
    Body,
    Consumable,
    Wall,
}

/// One filled rectangle in board coordinates
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DrawRect {
    pub rect: Rect,
    pub color: Color,
    pub kind: DrawKind,
}

/// Anything that can hand its rectangles to a renderer
pub trait Drawable {
    fn draw(&self, out: &mut Vec<DrawRect>);
}

impl Drawable for Obstacle {
    fn draw(&self, out: &mut Vec<DrawRect>) {
        out.push(DrawRect {
            rect: self.rect,
            color: self.color,
            kind: DrawKind::Wall,
        });
    }
}

impl Drawable for Consumable {
    fn draw(&self, out: &mut Vec<DrawRect>) {
        out.push(DrawRect {
            rect: self.rect,
            color: palette::CONSUMABLE,
            kind: DrawKind::Consumable,
        });
    }
}

impl Drawable for Body {
    fn draw(&self, out: &mut Vec<DrawRect>) {
        out.extend(self.segments().iter().map(|s| DrawRect {
            rect: s.rect(),
            color: palette::BODY,
            kind: DrawKind::Body,
        }));
    }
}

/// Body first, then consumables, then walls
impl Drawable for Level {
    fn draw(&self, out: &mut Vec<DrawRect>) {
        self.body().draw(out);
        for consumable in self.consumables() {
            consumable.draw(out);
        }
        for wall in self.walls() {
            wall.draw(out);
        }
    }
}

/// Status panel values
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Hud {
    pub score: u64,
    pub lives: u32,
    /// 1-based level number
    pub level: usize,
    pub eaten: u32,
    pub finish: u32,
    pub complete: bool,
    pub progress: f32,
}

/// Message drawn over the board
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Overlay {
    Paused,
    LevelComplete,
    GameOver { score: u64 },
}

impl Overlay {
    pub fn text_id(&self) -> StringId {
        match self {
            Overlay::Paused => StringId::Play001Continue,
            Overlay::LevelComplete => StringId::Play002LevelUp,
            Overlay::GameOver { .. } => StringId::Play003GameOver,
        }
    }
}

/// Everything needed to draw one tick
#[derive(Debug, Clone, PartialEq)]
pub struct Frame {
    pub background: Color,
    pub rects: Vec<DrawRect>,
    pub hud: Hud,
    pub overlay: Option<Overlay>,
}

impl Frame {
    pub fn capture(session: &Session) -> Self {
        let level = session.level();
        let mut rects = Vec::with_capacity(
            level.body().segments().len() + level.consumables().len() + level.walls().len(),
        );
        level.draw(&mut rects);

        let overlay = match (session.phase, session.banner()) {
            (GamePhase::Paused, Some(Banner::LevelComplete)) => Some(Overlay::LevelComplete),
            (GamePhase::Paused, None) => Some(Overlay::Paused),
            (GamePhase::GameOver, _) => Some(Overlay::GameOver {
                score: session.score,
            }),
            _ => None,
        };

        Self {
            background: level.def().background,
            rects,
            hud: Hud {
                score: session.score,
                lives: session.lives,
                level: session.level_index() + 1,
                eaten: level.eaten_count(),
                finish: level.finish_threshold(),
                complete: level.is_complete(),
                progress: level.progress(),
            },
            overlay,
        }
    }
}

/// Consumes one frame per tick
pub trait Renderer {
    fn render(&mut self, frame: &Frame);
}
