//! Text-only renderer
//!
//! Resolves the HUD and overlays through the string table and writes them to
//! the log. Used by the headless binary in place of a window.

use super::{Frame, Hud, Overlay, Renderer};
use crate::strings::{StringId, Strings};

#[derive(Debug, Clone)]
pub struct TextRenderer {
    strings: Strings,
    /// Frames between HUD lines
    interval: u64,
    frames: u64,
    last_overlay: Option<Overlay>,
}

impl TextRenderer {
    pub fn new(strings: Strings, interval: u64) -> Self {
        Self {
            strings,
            interval: interval.max(1),
            frames: 0,
            last_overlay: None,
        }
    }

    pub fn strings(&self) -> &Strings {
        &self.strings
    }

    /// Panel text, left to right
    pub fn hud_line(&self, hud: &Hud) -> String {
        let score = StringId::Info001Score.marker();
        let lives = StringId::Info005Lives.marker();
        let mice = StringId::Info002Mice.marker();
        let mut line = format!(
            "L{} | {}: {} | {}: {} | {}/{} {}",
            hud.level, score, hud.score, lives, hud.lives, hud.eaten, hud.finish, mice
        );
        if hud.complete {
            line.push_str(" | ");
            line.push_str(&StringId::Info003Complete.marker());
            line.push_str(" | ");
            line.push_str(&StringId::Info004Bonus.marker());
        }
        self.strings.expand(&line)
    }

    pub fn overlay_text(&self, overlay: &Overlay) -> String {
        let message = self.strings.get(overlay.text_id());
        match overlay {
            Overlay::GameOver { score } => format!(
                "{} ({}: {})",
                message,
                self.strings.get(StringId::Info001Score),
                score
            ),
            _ => message.to_string(),
        }
    }
}

impl Renderer for TextRenderer {
    fn render(&mut self, frame: &Frame) {
        if frame.overlay != self.last_overlay {
            if let Some(overlay) = &frame.overlay {
                log::info!("{}", self.overlay_text(overlay));
            }
            self.last_overlay = frame.overlay;
        }
        if self.frames % self.interval == 0 {
            log::debug!("{}", self.hud_line(&frame.hud));
        }
        self.frames += 1;
    }
}
