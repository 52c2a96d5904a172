//! A playable level: walls, consumables, the body, and completion tracking

use glam::{IVec2, Vec2};
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::body::Body;
use super::collision::{hits_any, remove_hits};
use super::entities::{Consumable, Obstacle};
use super::rect::Rect;
use crate::consts::{BONUS_ACCELERATION, GROW_LENGTH, LIFE_VALUE};
use crate::error::{Error, Result};
use crate::Color;

/// How the body starts out on a level
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BodyDef {
    /// Top-left corner of the starting segment
    pub position: Vec2,
    /// Starting length
    pub length: f32,
    pub thickness: f32,
    /// Starting speed (px/s)
    pub speed: f32,
    /// Speed gained per consumable eaten (px/s)
    pub acceleration: f32,
}

/// Authored description of a level
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LevelDef {
    pub background: Color,
    pub body: BodyDef,
    /// Consumables kept on the board at all times
    pub consumables: u32,
    /// Consumables needed to complete the level
    pub finish_threshold: u32,
    /// Bonus-mode consumables per extra life
    #[serde(default = "default_life_value")]
    pub life_value: u32,
    /// Every wall, borders included
    pub walls: Vec<Obstacle>,
}

fn default_life_value() -> u32 {
    LIFE_VALUE
}

impl LevelDef {
    /// Check that the level can be played on a board of `board` size.
    /// `index` is only used to label the error.
    pub fn validate(&self, index: usize, board: IVec2) -> Result<()> {
        let invalid = |reason: &str| Error::InvalidLevel {
            index,
            reason: reason.to_string(),
        };
        let body = &self.body;
        if body.thickness < 1.0 {
            return Err(invalid("body thickness must be at least 1"));
        }
        if body.speed <= 0.0 {
            return Err(invalid("body speed must be positive"));
        }
        if body.length < body.thickness {
            return Err(invalid("body length must be at least its thickness"));
        }
        if self.life_value == 0 {
            return Err(invalid("life value must be positive"));
        }

        let start = Body::new(body.position, body.length, body.thickness, body.speed)
            .head()
            .rect();
        let area = Rect::new(0, 0, board.x, board.y);
        if !area.contains(&start) {
            return Err(invalid("body starts outside the board"));
        }
        if hits_any(&start, &self.walls) {
            return Err(invalid("body starts inside a wall"));
        }
        Ok(())
    }
}

/// What a single level update produced, for the session to act on
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LevelOutcome {
    /// Consumables eaten this tick
    pub eaten: u32,
    /// Points scored this tick
    pub points: u64,
    /// Extra lives earned this tick
    pub extra_lives: u32,
    /// The level became complete this tick
    pub completed: bool,
    /// The head ran into a wall or the body
    pub crashed: bool,
    /// The level was already complete when this tick began. A crash then
    /// finishes the level instead of costing a life.
    pub crashed_while_complete: bool,
}

#[derive(Debug, Clone)]
pub struct Level {
    def: LevelDef,
    board: Rect,
    body: Body,
    walls: Vec<Obstacle>,
    consumables: Vec<Consumable>,
    eaten_count: u32,
    complete: bool,
    /// Bonus-mode consumables counted toward the next extra life
    bonus_credit: u32,
    rng: Pcg32,
}

impl Level {
    /// Build a level from its definition. Nothing is placed until [`Level::load`].
    pub fn new(def: LevelDef, board: IVec2, seed: u64) -> Self {
        let body = spawn_body(&def);
        Self {
            def,
            board: Rect::new(0, 0, board.x, board.y),
            body,
            walls: Vec::new(),
            consumables: Vec::new(),
            eaten_count: 0,
            complete: false,
            bonus_credit: 0,
            rng: Pcg32::seed_from_u64(seed),
        }
    }

    /// Reset everything for a fresh play of this level
    pub fn load(&mut self) {
        self.eaten_count = 0;
        self.bonus_credit = 0;
        self.complete = false;
        self.body = spawn_body(&self.def);
        self.walls = self.def.walls.clone();
        self.consumables.clear();
        for _ in 0..self.def.consumables {
            self.spawn_consumable();
        }
        log::info!(
            "Level loaded: {} walls, {} consumables, {} to finish",
            self.walls.len(),
            self.consumables.len(),
            self.def.finish_threshold
        );
    }

    /// Run one tick of play
    pub fn update(&mut self, tick_hz: f32) -> LevelOutcome {
        let mut outcome = LevelOutcome::default();
        let was_complete = self.complete;

        self.body.advance(tick_hz);

        // Eat whatever the head is on
        let head = self.body.head().rect();
        let eaten = remove_hits(&head, &mut self.consumables) as u32;
        for _ in 0..eaten {
            outcome.points += self.count_consumption(1);
            self.body.grow_tail(GROW_LENGTH);
            self.spawn_consumable();
        }
        outcome.eaten = eaten;

        // Walls and our own body
        let head = self.body.head().rect();
        outcome.crashed = self.collidables().any(|r| head.intersects(&r));
        outcome.crashed_while_complete = outcome.crashed && was_complete;

        if !self.complete && self.eaten_count >= self.def.finish_threshold {
            self.complete = true;
            outcome.completed = true;
            log::info!("Level complete after {} consumables, bonus mode on", self.eaten_count);
        }

        if self.complete {
            self.body.change_velocity(BONUS_ACCELERATION);
            if self.bonus_credit >= self.def.life_value {
                self.bonus_credit -= self.def.life_value;
                outcome.extra_lives += 1;
                log::info!("Bonus credit earned an extra life");
            }
        }

        outcome
    }

    /// Record `count` consumables eaten, returning the points they are worth
    fn count_consumption(&mut self, count: u32) -> u64 {
        let mut points = count as u64;
        if self.complete {
            points *= 2;
            self.bonus_credit += count;
        }
        self.eaten_count += count;
        self.body
            .change_velocity(count as f32 * self.def.body.acceleration);
        points
    }

    /// Place a consumable somewhere free. Keeps trying until it finds a spot;
    /// authored levels always leave room.
    fn spawn_consumable(&mut self) {
        let mut attempts: u64 = 0;
        loop {
            let x = self.rng.random_range(0..self.board.width());
            let y = self.rng.random_range(0..self.board.height());
            let candidate = Consumable::at(x, y);
            if !self.is_occupied(&candidate.rect) {
                self.consumables.push(candidate);
                return;
            }
            attempts += 1;
            if attempts % 10_000 == 0 {
                log::warn!("No free spot for a consumable after {} attempts", attempts);
            }
        }
    }

    /// Put a consumable at a fixed spot
    #[cfg(test)]
    pub(crate) fn place_consumable(&mut self, consumable: Consumable) {
        self.consumables.push(consumable);
    }

    /// Anything already on the board at `rect`
    pub fn is_occupied(&self, rect: &Rect) -> bool {
        hits_any(rect, &self.walls)
            || hits_any(rect, self.body.segments())
            || hits_any(rect, &self.consumables)
    }

    /// Put the body back at its start after a non-fatal crash
    pub fn resurrect_body(&mut self) {
        self.body.resurrect();
        log::info!("Body resurrected at {:?}", self.body.spawn().position);
    }

    /// Rectangles the head must not touch: walls plus the body's own
    /// collidable segments
    pub fn collidables(&self) -> impl Iterator<Item = Rect> + '_ {
        self.walls
            .iter()
            .map(|w| w.rect)
            .chain(self.body.self_collidables().iter().map(|s| s.rect()))
    }

    pub fn def(&self) -> &LevelDef {
        &self.def
    }

    pub fn board(&self) -> Rect {
        self.board
    }

    pub fn body(&self) -> &Body {
        &self.body
    }

    pub fn body_mut(&mut self) -> &mut Body {
        &mut self.body
    }

    pub fn walls(&self) -> &[Obstacle] {
        &self.walls
    }

    pub fn consumables(&self) -> &[Consumable] {
        &self.consumables
    }

    pub fn eaten_count(&self) -> u32 {
        self.eaten_count
    }

    pub fn finish_threshold(&self) -> u32 {
        self.def.finish_threshold
    }

    pub fn is_complete(&self) -> bool {
        self.complete
    }

    pub fn bonus_credit(&self) -> u32 {
        self.bonus_credit
    }

    /// Fraction of the finish threshold eaten so far, capped at 1
    pub fn progress(&self) -> f32 {
        if self.def.finish_threshold == 0 {
            return 1.0;
        }
        (self.eaten_count as f32 / self.def.finish_threshold as f32).min(1.0)
    }
}

fn spawn_body(def: &LevelDef) -> Body {
    let b = &def.body;
    Body::new(b.position, b.length, b.thickness, b.speed)
}
