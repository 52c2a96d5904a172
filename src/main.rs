//! Snake Levels - native headless entry point
//!
//! Plays the campaign with the autopilot at a fixed frame rate, logging the
//! status panel and overlays. Usage: `snake-levels [settings.json]`

use std::path::Path;

use snake_levels::clock::FrameClock;
use snake_levels::highscores::HighScoreFile;
use snake_levels::input::{Autopilot, InputSource};
use snake_levels::renderer::{Frame, Renderer, TextRenderer, VertexBatch};
use snake_levels::sim::{Session, layouts, tick};
use snake_levels::{Settings, Strings};

fn main() {
    env_logger::init();
    log::info!("Snake Levels starting...");

    let settings = match std::env::args().nth(1) {
        Some(path) => Settings::load(Path::new(&path)),
        None => Settings::default(),
    };

    let strings = match &settings.strings_path {
        Some(path) => Strings::load(path).unwrap_or_else(|e| {
            log::warn!("Using built-in strings: {}", e);
            Strings::english()
        }),
        None => Strings::english(),
    };

    let board = layouts::board();
    let levels = match &settings.levels_path {
        Some(path) => layouts::load_pack(path, board).unwrap_or_else(|e| {
            log::warn!("Using the built-in campaign: {}", e);
            layouts::campaign()
        }),
        None => layouts::campaign(),
    };

    let scores = HighScoreFile::open(&settings.high_score_path, settings.player_name.clone());
    if let Some(top) = scores.scores().top_score() {
        log::info!("High score to beat: {}", top);
    }

    let seed = settings.seed_or_clock();
    log::info!("Seed: {}", seed);
    let mut session = Session::new(levels, board, settings.frame_rate, seed, Box::new(scores));
    session.load();

    // Without a tick cap, play one game and quit at game over
    let mut pilot = Autopilot::new(6, settings.max_ticks.is_some());
    let mut text = TextRenderer::new(strings, settings.hud_log_interval);
    let mut batch = VertexBatch::new();
    let mut clock = FrameClock::new(session.frame_rate());

    let mut ticks: u64 = 0;
    while session.is_running() {
        if settings.max_ticks.is_some_and(|max| ticks >= max) {
            log::info!("Tick limit reached");
            break;
        }

        let input = pilot.next_input(&session);
        tick(&mut session, &input);

        let frame = Frame::capture(&session);
        text.render(&frame);
        batch.render(&frame);

        ticks += 1;
        if settings.realtime {
            clock.wait();
        }
    }

    log::info!(
        "Stopped after {} ticks: level {}, score {}, {} vertices ({} bytes) in the last frame",
        ticks,
        session.level_index() + 1,
        session.score,
        batch.vertices().len(),
        batch.bytes().len()
    );
}
