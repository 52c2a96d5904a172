//! The authored campaign and JSON level packs
//!
//! Nine levels of increasing difficulty. Every level shares the border
//! walls; later levels add their own obstacles, the last few built
//! symmetrically or in loops.

use std::path::Path;

use glam::{IVec2, Vec2};

use super::entities::Obstacle;
use super::level::{BodyDef, LevelDef};
use crate::consts::{BOARD_HEIGHT, BOARD_WIDTH, BORDER_WALL, LIFE_VALUE};
use crate::error::{Error, Result, read_to_string};
use crate::palette::*;
use crate::Color;

const W: i32 = BOARD_WIDTH;
const H: i32 = BOARD_HEIGHT;
const CX: i32 = W / 2;
const CY: i32 = H / 2;

/// Standard body thickness
const THICKNESS: f32 = 10.0;
const STANDARD_LENGTH: f32 = 100.0;
const LONG_LENGTH: f32 = 200.0;
const SHORT_LENGTH: f32 = 40.0;

/// Board size the campaign was authored for
pub fn board() -> IVec2 {
    IVec2::new(W, H)
}

/// The four walls around the edge of the board
pub fn border_walls(color: Color) -> Vec<Obstacle> {
    let b = BORDER_WALL;
    vec![
        Obstacle::new(color, 0, 0, W, b),
        Obstacle::new(color, W - b, b, b, H - 2 * b),
        Obstacle::new(color, 0, H - b, W, b),
        Obstacle::new(color, 0, b, b, H - 2 * b),
    ]
}

/// Body centred on the board
fn centred(length: f32) -> Vec2 {
    Vec2::new(CX as f32 - length / 2.0, CY as f32 - THICKNESS / 2.0)
}

/// Body centred horizontally near the bottom of the board
fn low(length: f32) -> Vec2 {
    Vec2::new(CX as f32 - length / 2.0, (H - 50) as f32)
}

#[allow(clippy::too_many_arguments)]
fn level(
    background: Color,
    wall_color: Color,
    length: f32,
    position: Vec2,
    speed: f32,
    acceleration: f32,
    consumables: u32,
    finish_threshold: u32,
    extra_walls: Vec<Obstacle>,
) -> LevelDef {
    let mut walls = border_walls(wall_color);
    walls.extend(extra_walls);
    LevelDef {
        background,
        body: BodyDef {
            position,
            length,
            thickness: THICKNESS,
            speed,
            acceleration,
        },
        consumables,
        finish_threshold,
        life_value: LIFE_VALUE,
        walls,
    }
}

/// All nine levels in play order
pub fn campaign() -> Vec<LevelDef> {
    vec![
        level_01(),
        level_02(),
        level_03(),
        level_04(),
        level_05(),
        level_06(),
        level_07(),
        level_08(),
        level_09(),
    ]
}

/// Border only
fn level_01() -> LevelDef {
    let len = STANDARD_LENGTH;
    level(BLACK, BLUE, len, centred(len), 240.0, 1.8, 10, 75, Vec::new())
}

/// Four brackets, one near each corner
fn level_02() -> LevelDef {
    let len = STANDARD_LENGTH;
    let c = FOREST;
    let walls = vec![
        Obstacle::new(c, 100, 100, 200, 20),
        Obstacle::new(c, 100, 120, 20, 50),
        Obstacle::new(c, 100, H - 170, 20, 50),
        Obstacle::new(c, 100, H - 120, 200, 20),
        Obstacle::new(c, W - 300, 100, 200, 20),
        Obstacle::new(c, W - 120, 120, 20, 50),
        Obstacle::new(c, W - 120, H - 170, 20, 50),
        Obstacle::new(c, W - 300, H - 120, 200, 20),
    ];
    level(BLACK, c, len, centred(len), 180.0, 3.0, 10, 50, walls)
}

/// Two crosses
fn level_03() -> LevelDef {
    let len = LONG_LENGTH;
    let c = RED;
    let walls = vec![
        Obstacle::new(c, 125, 240, 150, 20),
        Obstacle::new(c, 190, 175, 20, 150),
        Obstacle::new(c, W - 255, 240, 150, 20),
        Obstacle::new(c, W - 190, 175, 20, 150),
    ];
    level(BLACK, c, len, low(len), 300.0, 3.0, 10, 50, walls)
}

/// A bar splitting the board down the middle
fn level_04() -> LevelDef {
    let len = STANDARD_LENGTH;
    let c = YELLOW;
    let position = Vec2::new(CX as f32 - len - 30.0, CY as f32 - THICKNESS / 2.0);
    let walls = vec![Obstacle::new(c, CX - 10, 50, 20, H - 100)];
    level(BLACK, c, len, position, 300.0, 1.8, 15, 60, walls)
}

/// Two long bars above and below the start
fn level_05() -> LevelDef {
    let len = STANDARD_LENGTH;
    let walls = vec![
        Obstacle::new(MAROON, 50, CY - 95, W - 100, 20),
        Obstacle::new(MAROON, 50, CY + 75, W - 100, 20),
    ];
    level(BLACK, FOREST, len, centred(len), 180.0, 1.2, 15, 55, walls)
}

/// Three stacked bars
fn level_06() -> LevelDef {
    let len = LONG_LENGTH;
    let walls = vec![
        Obstacle::new(YELLOW, 100, CY - 95, W - 200, 20),
        Obstacle::new(BLUE, 250, CY - 10, W - 500, 20),
        Obstacle::new(YELLOW, 100, CY + 75, W - 200, 20),
    ];
    level(BLACK, BLUE, len, low(len), 180.0, 3.6, 10, 65, walls)
}

/// A box around the start with its corners open
fn level_07() -> LevelDef {
    let len = SHORT_LENGTH;
    let walls = vec![
        Obstacle::new(WHITE, CX - 100, CY - 170, 200, 20),
        Obstacle::new(WHITE, CX + 150, CY - 100, 20, 200),
        Obstacle::new(WHITE, CX - 100, CY + 150, 200, 20),
        Obstacle::new(WHITE, CX - 170, CY - 100, 20, 200),
    ];
    level(NAVY, FOREST, len, centred(len), 240.0, 3.6, 10, 70, walls)
}

/// Four arms reaching in from the border, starting in the bottom right
fn level_08() -> LevelDef {
    let len = STANDARD_LENGTH;
    let c = FOREST;
    let position = Vec2::new(W as f32 - len - 30.0, (H - 20) as f32 - THICKNESS);
    let vertical = (H - 220) / 2;
    let horizontal = (W - 220) / 2;
    let walls = vec![
        Obstacle::new(c, CX - 10, 0, 20, vertical),
        Obstacle::new(c, CX + 110, CY - 10, horizontal, 20),
        Obstacle::new(c, CX - 10, CY + 110, 20, vertical),
        Obstacle::new(c, 0, CY - 10, horizontal, 20),
    ];
    level(NAVY, c, len, position, 360.0, 6.0, 10, 30, walls)
}

/// A dashed frame
fn level_09() -> LevelDef {
    let len = STANDARD_LENGTH;
    let c = MAROON;
    let mut walls = Vec::new();
    for i in 0..6 {
        let a = i * 100;
        walls.push(Obstacle::new(c, CX - 275 + a, 75, 50, 20));
        walls.push(Obstacle::new(c, CX - 275 + a, H - 95, 50, 20));
        if i < 4 {
            walls.push(Obstacle::new(c, 75, CY - 175 + a, 20, 50));
            walls.push(Obstacle::new(c, W - 95, CY - 175 + a, 20, 50));
        }
    }
    level(NAVY, c, len, centred(len), 240.0, 2.4, 15, 75, walls)
}

/// Parse and validate a JSON array of level definitions
pub fn parse_pack(json: &str, board: IVec2) -> Result<Vec<LevelDef>> {
    let levels: Vec<LevelDef> = serde_json::from_str(json)?;
    if levels.is_empty() {
        return Err(Error::InvalidLevel {
            index: 0,
            reason: "level pack is empty".to_string(),
        });
    }
    for (index, def) in levels.iter().enumerate() {
        def.validate(index, board)?;
    }
    Ok(levels)
}

/// Load a level pack from disk in place of the built-in campaign
pub fn load_pack(path: &Path, board: IVec2) -> Result<Vec<LevelDef>> {
    let json = read_to_string(path)?;
    let levels = parse_pack(&json, board)?;
    log::info!("Loaded {} levels from {}", levels.len(), path.display());
    Ok(levels)
}
