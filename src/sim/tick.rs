//! Fixed timestep session tick
//!
//! Input is dispatched first, then the current level advances one step.
//! Commands are never applied in the middle of an update.

use serde::{Deserialize, Serialize};

use super::direction::Direction;
use super::state::{GamePhase, Session};

/// Everything the player can ask for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Command {
    MoveLeft,
    MoveRight,
    MoveUp,
    MoveDown,
    PauseToggle,
    Restart,
    Quit,
}

impl Command {
    /// Heading requested by a movement command
    pub fn direction(self) -> Option<Direction> {
        match self {
            Command::MoveLeft => Some(Direction::Left),
            Command::MoveRight => Some(Direction::Right),
            Command::MoveUp => Some(Direction::Up),
            Command::MoveDown => Some(Direction::Down),
            _ => None,
        }
    }

    pub fn steer(direction: Direction) -> Self {
        match direction {
            Direction::Left => Command::MoveLeft,
            Direction::Right => Command::MoveRight,
            Direction::Up => Command::MoveUp,
            Direction::Down => Command::MoveDown,
        }
    }
}

/// Commands gathered for a single tick
#[derive(Debug, Clone, Default)]
pub struct TickInput {
    pub commands: Vec<Command>,
}

impl TickInput {
    pub fn new(commands: Vec<Command>) -> Self {
        Self { commands }
    }

    pub fn single(command: Command) -> Self {
        Self {
            commands: vec![command],
        }
    }
}

/// Advance the session by one tick
pub fn tick(state: &mut Session, input: &TickInput) {
    for &command in &input.commands {
        dispatch(state, command);
    }

    // Paused, over, or not started: nothing moves
    if state.phase != GamePhase::Playing {
        return;
    }

    state.time_ticks += 1;
    let tick_hz = state.frame_rate() as f32;
    let outcome = state.level_mut().update(tick_hz);
    state.apply(outcome);
}

/// Route one command to its handler
fn dispatch(state: &mut Session, command: Command) {
    match command {
        Command::MoveLeft | Command::MoveRight | Command::MoveUp | Command::MoveDown => {
            if state.phase != GamePhase::Playing {
                return;
            }
            if let Some(direction) = command.direction() {
                state.level_mut().body_mut().steer(direction);
            }
        }
        Command::PauseToggle => state.toggle_pause(),
        Command::Restart => {
            if state.is_game_over() {
                state.restart();
            }
        }
        Command::Quit => state.stop(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::highscores::HighScoreSink;

    struct NoScores;

    impl HighScoreSink for NoScores {
        fn check_high_score(&mut self, _score: u64) -> Option<usize> {
            None
        }
    }

    fn session(seed: u64) -> Session {
        let mut s = Session::campaign(seed, Box::new(NoScores));
        s.load();
        s
    }

    #[test]
    fn test_tick_loads_paused() {
        let mut state = session(1);
        assert_eq!(state.phase, GamePhase::Paused);
        let before = state.level().body().head().rect();
        tick(&mut state, &TickInput::default());
        assert_eq!(state.time_ticks, 0);
        assert_eq!(state.level().body().head().rect(), before);
    }

    #[test]
    fn test_tick_pause() {
        let mut state = session(1);
        tick(&mut state, &TickInput::single(Command::PauseToggle));
        assert_eq!(state.phase, GamePhase::Playing);
        assert_eq!(state.time_ticks, 1);

        tick(&mut state, &TickInput::single(Command::PauseToggle));
        assert_eq!(state.phase, GamePhase::Paused);
        assert_eq!(state.time_ticks, 1);
    }

    #[test]
    fn test_moves_ignored_while_paused() {
        let mut state = session(1);
        tick(&mut state, &TickInput::single(Command::MoveUp));
        assert_eq!(state.level().body().segments().len(), 1);

        // Resume and turn in the same tick: input is applied in order
        tick(
            &mut state,
            &TickInput::new(vec![Command::PauseToggle, Command::MoveUp]),
        );
        assert_eq!(state.level().body().segments().len(), 2);
        assert_eq!(state.level().body().direction(), Direction::Up);
    }

    #[test]
    fn test_restart_only_when_over() {
        let mut state = session(1);
        tick(&mut state, &TickInput::single(Command::PauseToggle));
        state.score = 12;
        tick(&mut state, &TickInput::single(Command::Restart));
        assert_eq!(state.score, 12);
        assert_eq!(state.phase, GamePhase::Playing);

        state.end();
        tick(&mut state, &TickInput::single(Command::Restart));
        assert_eq!(state.score, 0);
        assert_eq!(state.phase, GamePhase::Paused);
    }

    #[test]
    fn test_quit_stops() {
        let mut state = session(1);
        assert!(state.is_running());
        tick(&mut state, &TickInput::single(Command::Quit));
        assert!(!state.is_running());
    }

    #[test]
    fn test_determinism() {
        let mut state1 = session(99999);
        let mut state2 = session(99999);

        let inputs = [
            TickInput::single(Command::PauseToggle),
            TickInput::default(),
            TickInput::single(Command::MoveUp),
            TickInput::default(),
            TickInput::single(Command::MoveRight),
            TickInput::default(),
        ];

        for input in &inputs {
            tick(&mut state1, input);
            tick(&mut state2, input);
        }

        assert_eq!(state1.time_ticks, state2.time_ticks);
        assert_eq!(state1.level().consumables(), state2.level().consumables());
        assert_eq!(
            state1.level().body().head().rect(),
            state2.level().body().head().rect()
        );
    }
}
