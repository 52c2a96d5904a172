//! Whole-session scenarios driven through `tick()`

use std::cell::RefCell;
use std::rc::Rc;

use snake_levels::HighScoreSink;
use snake_levels::input::{InputSource, ScriptedInput};
use snake_levels::sim::{
    Banner, Command, Direction, GamePhase, LevelDef, Rect, Session, TickInput, layouts, tick,
};

/// Records every score handed to the leaderboard
#[derive(Clone, Default)]
struct Spy(Rc<RefCell<Vec<u64>>>);

impl Spy {
    fn calls(&self) -> Vec<u64> {
        self.0.borrow().clone()
    }
}

impl HighScoreSink for Spy {
    fn check_high_score(&mut self, score: u64) -> Option<usize> {
        self.0.borrow_mut().push(score);
        Some(1)
    }
}

fn session_with(defs: Vec<LevelDef>, spy: &Spy) -> Session {
    let mut s = Session::new(defs, layouts::board(), 60, 42, Box::new(spy.clone()));
    s.load();
    s
}

/// Unpause, then tick until the session leaves `Playing`
fn run_until_stopped(s: &mut Session, max_ticks: usize) -> usize {
    tick(s, &TickInput::single(Command::PauseToggle));
    let mut ticks = 1;
    while s.phase == GamePhase::Playing && ticks < max_ticks {
        tick(s, &TickInput::default());
        ticks += 1;
    }
    ticks
}

/// First level, finished as soon as it starts
fn instant_finish() -> LevelDef {
    let mut def = layouts::campaign().swap_remove(0);
    def.finish_threshold = 0;
    def
}

/// First level with nothing to eat
fn empty_board() -> LevelDef {
    let mut def = layouts::campaign().swap_remove(0);
    def.consumables = 0;
    def
}

#[test]
fn test_load_state() {
    let spy = Spy::default();
    let s = session_with(layouts::campaign(), &spy);
    assert_eq!(s.phase, GamePhase::Paused);
    assert_eq!(s.score, 0);
    assert_eq!(s.lives, 0);
    assert_eq!(s.level_index(), 0);
    assert_eq!(s.level_count(), 9);
    assert_eq!(s.banner(), None);
}

#[test]
fn test_crash_with_spare_life_resurrects() {
    let spy = Spy::default();
    let mut s = session_with(layouts::campaign(), &spy);
    s.lives = 2;

    // Heading left from the middle runs into the border wall
    let ticks = run_until_stopped(&mut s, 500);
    assert!(ticks < 500);
    assert_eq!(s.phase, GamePhase::Paused);
    assert_eq!(s.lives, 1);
    assert_eq!(s.level().body().segments().len(), 1);
    assert_eq!(s.level().body().head().rect(), Rect::new(300, 245, 100, 10));
    assert!(spy.calls().is_empty());
}

#[test]
fn test_crash_without_lives_ends_once() {
    let spy = Spy::default();
    let mut s = session_with(layouts::campaign(), &spy);
    run_until_stopped(&mut s, 500);
    assert_eq!(s.phase, GamePhase::GameOver);
    assert_eq!(spy.calls(), vec![s.score]);

    // Nothing moves once over, and the score is reported only once
    let before = s.time_ticks;
    for _ in 0..10 {
        tick(&mut s, &TickInput::default());
    }
    s.end();
    assert_eq!(s.time_ticks, before);
    assert_eq!(spy.calls().len(), 1);
}

#[test]
fn test_crash_after_completion_levels_up() {
    let spy = Spy::default();
    let mut s = session_with(vec![instant_finish(), instant_finish()], &spy);
    run_until_stopped(&mut s, 500);

    assert_eq!(s.level_index(), 1);
    assert_eq!(s.phase, GamePhase::Paused);
    assert_eq!(s.banner(), Some(Banner::LevelComplete));
    assert!(!s.level().is_complete());
    assert_eq!(s.level().eaten_count(), 0);

    // Resuming clears the banner
    tick(&mut s, &TickInput::single(Command::PauseToggle));
    assert_eq!(s.banner(), None);
    assert!(spy.calls().is_empty());
}

#[test]
fn test_finishing_last_level_ends_game() {
    let spy = Spy::default();
    let mut s = session_with(vec![instant_finish()], &spy);
    run_until_stopped(&mut s, 500);
    assert_eq!(s.phase, GamePhase::GameOver);
    assert_eq!(spy.calls().len(), 1);
}

#[test]
fn test_restart_after_game_over() {
    let spy = Spy::default();
    let mut s = session_with(vec![instant_finish(), instant_finish()], &spy);
    run_until_stopped(&mut s, 500);
    assert_eq!(s.level_index(), 1);
    s.score = 30;
    s.lives = 4;
    s.end();

    tick(&mut s, &TickInput::single(Command::Restart));
    assert_eq!(s.phase, GamePhase::Paused);
    assert_eq!(s.level_index(), 0);
    assert_eq!(s.score, 0);
    assert_eq!(s.lives, 0);
    assert_eq!(s.level().body().head().rect(), Rect::new(300, 245, 100, 10));
}

#[test]
fn test_scripted_turns_through_ticks() {
    let spy = Spy::default();
    let mut s = session_with(vec![empty_board()], &spy);
    let mut input = ScriptedInput::new()
        .at(0, Command::PauseToggle)
        .at(2, Command::MoveUp)
        // Same axis as the current heading: ignored
        .at(3, Command::MoveDown)
        .at(5, Command::MoveLeft);

    for _ in 0..8 {
        let commands = input.next_input(&s);
        tick(&mut s, &commands);
    }
    assert!(input.is_finished());

    let body = s.level().body();
    assert_eq!(body.direction(), Direction::Left);
    assert_eq!(body.segments().len(), 3);
    assert!((body.total_length() - 100.0).abs() < 1e-3);
}

#[test]
fn test_quit_from_any_phase() {
    let spy = Spy::default();
    let mut s = session_with(layouts::campaign(), &spy);
    tick(&mut s, &TickInput::single(Command::Quit));
    assert!(!s.is_running());
    assert_eq!(s.phase, GamePhase::Paused);
}
