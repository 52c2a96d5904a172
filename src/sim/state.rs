//! Session state: the level list, score, lives, and game phase
//!
//! The session owns every level and drives the life/level/score
//! bookkeeping in response to what each level update reports.

use glam::IVec2;

use super::layouts;
use super::level::{Level, LevelDef, LevelOutcome};
use crate::consts::DEFAULT_FRAME_RATE;
use crate::highscores::HighScoreSink;

/// Current phase of the session
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GamePhase {
    /// Constructed, no level loaded yet
    NotLoaded,
    /// Level updates run every tick
    Playing,
    /// Input and rendering continue; the level is frozen
    Paused,
    /// Run ended; waiting for a restart
    GameOver,
}

/// Message shown over a paused board
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Banner {
    /// The previous level was just finished
    LevelComplete,
}

/// One play-through of the campaign
pub struct Session {
    /// Score, reset on restart
    pub score: u64,
    /// Spare lives
    pub lives: u32,
    /// Current phase
    pub phase: GamePhase,
    /// Simulated (unpaused) ticks
    pub time_ticks: u64,
    level_index: usize,
    levels: Vec<Level>,
    frame_rate: u32,
    seed: u64,
    banner: Option<Banner>,
    running: bool,
    high_scores: Box<dyn HighScoreSink>,
}

impl Session {
    /// Create a session over `defs`, one level per definition.
    ///
    /// An empty list falls back to the built-in campaign.
    pub fn new(
        defs: Vec<LevelDef>,
        board: IVec2,
        frame_rate: u32,
        seed: u64,
        high_scores: Box<dyn HighScoreSink>,
    ) -> Self {
        let defs = if defs.is_empty() {
            log::warn!("No levels given, using the built-in campaign");
            layouts::campaign()
        } else {
            defs
        };

        let levels = defs
            .into_iter()
            .enumerate()
            .map(|(i, def)| Level::new(def, board, level_seed(seed, i)))
            .collect();

        Self {
            score: 0,
            lives: 0,
            phase: GamePhase::NotLoaded,
            time_ticks: 0,
            level_index: 0,
            levels,
            frame_rate: frame_rate.max(1),
            seed,
            banner: None,
            running: true,
            high_scores,
        }
    }

    /// The built-in campaign at the default frame rate
    pub fn campaign(seed: u64, high_scores: Box<dyn HighScoreSink>) -> Self {
        Self::new(
            layouts::campaign(),
            layouts::board(),
            DEFAULT_FRAME_RATE,
            seed,
            high_scores,
        )
    }

    /// Start from a clean slate on the first level, paused until the
    /// player resumes
    pub fn load(&mut self) {
        self.score = 0;
        self.lives = 0;
        self.banner = None;
        self.level_index = 0;
        self.levels[0].load();
        self.phase = GamePhase::Paused;
        log::info!("Game loaded ({} levels, seed {})", self.levels.len(), self.seed);
    }

    pub fn restart(&mut self) {
        log::info!("Restarting");
        self.load();
    }

    pub fn level(&self) -> &Level {
        &self.levels[self.level_index]
    }

    pub fn level_mut(&mut self) -> &mut Level {
        &mut self.levels[self.level_index]
    }

    pub fn level_index(&self) -> usize {
        self.level_index
    }

    pub fn level_count(&self) -> usize {
        self.levels.len()
    }

    pub fn frame_rate(&self) -> u32 {
        self.frame_rate
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    pub fn banner(&self) -> Option<Banner> {
        self.banner
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn is_game_over(&self) -> bool {
        self.phase == GamePhase::GameOver
    }

    /// End the outer loop
    pub fn stop(&mut self) {
        self.running = false;
    }

    pub fn add_points(&mut self, points: u64) -> u64 {
        self.score += points;
        self.score
    }

    /// Switch between playing and paused; other phases are unaffected
    pub fn toggle_pause(&mut self) {
        match self.phase {
            GamePhase::Playing => {
                self.phase = GamePhase::Paused;
            }
            GamePhase::Paused => {
                self.banner = None;
                self.phase = GamePhase::Playing;
            }
            _ => {}
        }
    }

    /// Move on to the next level, or finish the game after the last one
    pub fn level_up(&mut self) {
        if self.level_index + 1 >= self.levels.len() {
            log::info!("Final level cleared");
            self.end();
            return;
        }
        self.level_index += 1;
        self.levels[self.level_index].load();
        self.banner = Some(Banner::LevelComplete);
        self.phase = GamePhase::Paused;
        log::info!("Level up: now on level {}", self.level_index + 1);
    }

    /// Finish the run and hand the score to the high-score store
    pub fn end(&mut self) {
        if self.phase == GamePhase::GameOver {
            return;
        }
        self.phase = GamePhase::GameOver;
        self.banner = None;
        log::info!("Game over with score {}", self.score);
        if let Some(rank) = self.high_scores.check_high_score(self.score) {
            log::info!("New high score, rank {}", rank);
        }
    }

    /// Fold a level update into the session
    pub(crate) fn apply(&mut self, outcome: LevelOutcome) {
        if outcome.points > 0 {
            self.add_points(outcome.points);
        }
        if outcome.extra_lives > 0 {
            self.lives += outcome.extra_lives;
            log::info!("Extra life! Lives: {}", self.lives);
        }
        if outcome.crashed {
            self.resolve_crash(outcome.crashed_while_complete);
        }
    }

    /// A crash finishes a level that was complete before the tick. Otherwise
    /// it costs a life or ends the game.
    fn resolve_crash(&mut self, level_finished: bool) {
        if level_finished {
            self.level_up();
        } else if self.lives > 0 {
            self.lives -= 1;
            self.level_mut().resurrect_body();
            self.phase = GamePhase::Paused;
            log::info!("Crashed, {} lives left", self.lives);
        } else {
            self.end();
        }
    }
}

/// Per-level RNG seed, distinct for every level of a run
fn level_seed(seed: u64, index: usize) -> u64 {
    seed.wrapping_add((index as u64 + 1).wrapping_mul(2654435761))
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;
    use std::rc::Rc;

    use glam::Vec2;

    use super::*;
    use crate::palette;
    use crate::sim::entities::{Consumable, Obstacle};
    use crate::sim::level::BodyDef;
    use crate::sim::tick::{Command, TickInput, tick};

    /// Counts game-over reports
    struct Reports(Rc<Cell<u32>>);

    impl HighScoreSink for Reports {
        fn check_high_score(&mut self, _score: u64) -> Option<usize> {
            self.0.set(self.0.get() + 1);
            None
        }
    }

    /// One consumable to finish, and a wall the head reaches on tick 3
    fn walled_def() -> LevelDef {
        LevelDef {
            background: palette::BLACK,
            body: BodyDef {
                position: Vec2::new(300.0, 245.0),
                length: 100.0,
                thickness: 10.0,
                speed: 240.0,
                acceleration: 1.8,
            },
            consumables: 0,
            finish_threshold: 1,
            life_value: 10,
            walls: vec![Obstacle::new(palette::BLUE, 280, 240, 10, 20)],
        }
    }

    fn session(lives: u32, reports: &Rc<Cell<u32>>) -> Session {
        let defs = vec![walled_def(), walled_def()];
        let mut s = Session::new(
            defs,
            layouts::board(),
            DEFAULT_FRAME_RATE,
            3,
            Box::new(Reports(reports.clone())),
        );
        s.load();
        s.lives = lives;
        s
    }

    /// Two ticks, then the third eats the last consumable and hits the wall
    fn eat_and_crash(s: &mut Session) {
        tick(s, &TickInput::single(Command::PauseToggle));
        tick(s, &TickInput::default());
        s.level_mut().place_consumable(Consumable::at(292, 245));
        tick(s, &TickInput::default());
    }

    #[test]
    fn test_finishing_and_crashing_together_ends_game() {
        let reports = Rc::new(Cell::new(0));
        let mut s = session(0, &reports);
        eat_and_crash(&mut s);

        assert_eq!(s.phase, GamePhase::GameOver);
        assert_eq!(s.level_index(), 0);
        assert_eq!(reports.get(), 1);
    }

    #[test]
    fn test_finishing_and_crashing_together_costs_a_life() {
        let reports = Rc::new(Cell::new(0));
        let mut s = session(1, &reports);
        eat_and_crash(&mut s);

        assert_eq!(s.phase, GamePhase::Paused);
        assert_eq!(s.lives, 0);
        assert_eq!(s.level_index(), 0);
        assert_eq!(s.banner(), None);
        assert!(s.level().is_complete());
        assert_eq!(reports.get(), 0);
    }
}
