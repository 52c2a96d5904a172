//! Input sources
//!
//! Anything that turns the world into [`Command`]s implements
//! [`InputSource`]. The native binary plays itself with the [`Autopilot`];
//! tests replay fixed schedules with [`ScriptedInput`].

use std::collections::BTreeMap;

use crate::sim::{Command, Direction, GamePhase, Level, Rect, Session, TickInput};

/// Produces the commands for one tick
pub trait InputSource {
    /// Called once per tick, before the session advances
    fn poll(&mut self, session: &Session) -> Vec<Command>;

    /// Poll and wrap the result for [`crate::sim::tick`]
    fn next_input(&mut self, session: &Session) -> TickInput {
        TickInput::new(self.poll(session))
    }
}

/// Replays commands at fixed tick numbers (counting polls from zero)
#[derive(Debug, Clone, Default)]
pub struct ScriptedInput {
    schedule: BTreeMap<u64, Vec<Command>>,
    polls: u64,
}

impl ScriptedInput {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue `command` for poll number `tick`
    pub fn at(mut self, tick: u64, command: Command) -> Self {
        self.schedule.entry(tick).or_default().push(command);
        self
    }

    pub fn polls(&self) -> u64 {
        self.polls
    }

    /// True once every scheduled command has been handed out
    pub fn is_finished(&self) -> bool {
        self.schedule.is_empty()
    }
}

impl InputSource for ScriptedInput {
    fn poll(&mut self, _session: &Session) -> Vec<Command> {
        let commands = self.schedule.remove(&self.polls).unwrap_or_default();
        self.polls += 1;
        commands
    }
}

/// Demo player: chases the nearest consumable and swerves away from
/// anything a short lookahead rect in front of the head would hit
#[derive(Debug, Clone)]
pub struct Autopilot {
    /// How many ticks of travel the lookahead covers
    look_ahead_ticks: u32,
    /// Start again after a game over; otherwise quit
    restart: bool,
}

impl Default for Autopilot {
    fn default() -> Self {
        Self {
            look_ahead_ticks: 6,
            restart: true,
        }
    }
}

impl Autopilot {
    pub fn new(look_ahead_ticks: u32, restart: bool) -> Self {
        Self {
            look_ahead_ticks: look_ahead_ticks.max(1),
            restart,
        }
    }

    /// Pick a heading for this tick. None keeps the current one.
    pub fn choose(&self, level: &Level, frame_rate: u32) -> Option<Direction> {
        let body = level.body();
        if body.pending_turn().is_some() {
            return None;
        }

        let current = body.direction();
        let thickness = body.thickness() as i32;
        let front = front_square(body.head().rect(), current, thickness);
        let step = body.velocity() / frame_rate.max(1) as f32;
        let reach = ((step * self.look_ahead_ticks as f32).ceil() as i32).max(thickness * 2);

        // Candidates in order of preference: toward the food first
        let mut candidates: Vec<Direction> = Vec::with_capacity(6);
        if let Some(target) = nearest(level, front) {
            let dx = target.0 - centre(front).0;
            let dy = target.1 - centre(front).1;
            let horizontal = if dx < 0 { Direction::Left } else { Direction::Right };
            let vertical = if dy < 0 { Direction::Up } else { Direction::Down };
            if dx.abs() >= dy.abs() {
                candidates.extend([horizontal, vertical]);
            } else {
                candidates.extend([vertical, horizontal]);
            }
        }
        candidates.push(current);
        candidates.extend(current.perpendicular());

        let chosen = candidates
            .into_iter()
            .filter(|&d| d == current || !d.same_axis(current))
            .find(|&d| {
                let ahead = lookahead(front, d, thickness, reach);
                !level.collidables().any(|r| ahead.intersects(&r))
            })?;

        (chosen != current).then_some(chosen)
    }
}

impl InputSource for Autopilot {
    fn poll(&mut self, session: &Session) -> Vec<Command> {
        match session.phase {
            GamePhase::NotLoaded => Vec::new(),
            GamePhase::Paused => vec![Command::PauseToggle],
            GamePhase::GameOver if self.restart => vec![Command::Restart],
            GamePhase::GameOver => vec![Command::Quit],
            GamePhase::Playing => self
                .choose(session.level(), session.frame_rate())
                .map(Command::steer)
                .into_iter()
                .collect(),
        }
    }
}

/// The thickness-sized square at the leading end of the head
fn front_square(head: Rect, direction: Direction, thickness: i32) -> Rect {
    match direction {
        Direction::Left | Direction::Up => Rect::new(head.left(), head.top(), thickness, thickness),
        Direction::Right => Rect::new(head.right() - thickness, head.top(), thickness, thickness),
        Direction::Down => Rect::new(head.left(), head.bottom() - thickness, thickness, thickness),
    }
}

/// Strip of `reach` pixels leaving `front` toward `direction`
fn lookahead(front: Rect, direction: Direction, thickness: i32, reach: i32) -> Rect {
    match direction {
        Direction::Left => Rect::new(front.left() - reach, front.top(), reach, thickness),
        Direction::Right => Rect::new(front.right(), front.top(), reach, thickness),
        Direction::Up => Rect::new(front.left(), front.top() - reach, thickness, reach),
        Direction::Down => Rect::new(front.left(), front.bottom(), thickness, reach),
    }
}

fn centre(rect: Rect) -> (i32, i32) {
    (
        rect.left() + rect.width() / 2,
        rect.top() + rect.height() / 2,
    )
}

/// Centre of the consumable closest to `from` (Manhattan distance)
fn nearest(level: &Level, from: Rect) -> Option<(i32, i32)> {
    let (fx, fy) = centre(from);
    level
        .consumables()
        .iter()
        .map(|c| centre(c.rect))
        .min_by_key(|&(x, y)| (x - fx).abs() + (y - fy).abs())
}
