//! Shape generation for 2D primitives
//!
//! Everything is built from axis-aligned quads in window pixels: the status
//! panel on top, the board below it.

use super::vertex::{Vertex, as_bytes};
use super::{Frame, Hud, Renderer};
use crate::Color;
use crate::consts::{BOARD_HEIGHT, PANEL_HEIGHT, WINDOW_WIDTH};
use crate::palette;
use crate::sim::Rect;

/// Width of the level progress bar
pub const PROGRESS_WIDTH: i32 = 425;
pub const PROGRESS_HEIGHT: i32 = 20;
/// Panel padding around the progress bar
const PAD: i32 = 20;
/// Line under the panel
const PANEL_BORDER: i32 = 5;
/// Dim layer drawn over the board behind overlay text
const OVERLAY_SHADE: Color = [0.0, 0.0, 0.0, 0.6];

/// Two triangles covering `x, y, width, height`
pub fn quad(x: f32, y: f32, width: f32, height: f32, color: Color) -> [Vertex; 6] {
    let (x2, y2) = (x + width, y + height);
    [
        Vertex::new(x, y, color),
        Vertex::new(x2, y, color),
        Vertex::new(x, y2, color),
        Vertex::new(x, y2, color),
        Vertex::new(x2, y, color),
        Vertex::new(x2, y2, color),
    ]
}

/// Quad for a board rectangle, shifted below the panel
pub fn board_rect(rect: Rect, color: Color) -> [Vertex; 6] {
    quad(
        rect.left() as f32,
        (rect.top() + PANEL_HEIGHT) as f32,
        rect.width() as f32,
        rect.height() as f32,
        color,
    )
}

/// Width of the yellow part of the progress bar
pub fn progress_fill(eaten: u32, finish: u32) -> i32 {
    if finish == 0 {
        return PROGRESS_WIDTH;
    }
    let fill = (PROGRESS_WIDTH as f64 * eaten as f64 / finish as f64).ceil() as i32;
    fill.min(PROGRESS_WIDTH)
}

/// Grey track with a yellow fill, or solid green once the level is complete
pub fn progress_bar(hud: &Hud) -> Vec<Vertex> {
    let x = PAD as f32;
    let y = (PANEL_HEIGHT - PROGRESS_HEIGHT - PAD) as f32;
    let h = PROGRESS_HEIGHT as f32;

    let mut vertices = Vec::with_capacity(12);
    if hud.complete {
        vertices.extend(quad(x, y, PROGRESS_WIDTH as f32, h, palette::GREEN));
    } else {
        vertices.extend(quad(x, y, PROGRESS_WIDTH as f32, h, palette::GREY));
        let fill = progress_fill(hud.eaten, hud.finish);
        if fill > 0 {
            vertices.extend(quad(x, y, fill as f32, h, palette::YELLOW));
        }
    }
    vertices
}

/// Triangle list for a whole frame, back to front
pub fn frame_vertices(frame: &Frame) -> Vec<Vertex> {
    let width = WINDOW_WIDTH as f32;
    let mut vertices = Vec::with_capacity((frame.rects.len() + 8) * 6);

    // Panel
    vertices.extend(quad(0.0, 0.0, width, PANEL_HEIGHT as f32, palette::PANEL));
    vertices.extend(quad(
        0.0,
        (PANEL_HEIGHT - PANEL_BORDER) as f32,
        width,
        PANEL_BORDER as f32,
        palette::BLACK,
    ));
    vertices.extend(progress_bar(&frame.hud));

    // Board
    vertices.extend(quad(
        0.0,
        PANEL_HEIGHT as f32,
        width,
        BOARD_HEIGHT as f32,
        frame.background,
    ));
    for r in &frame.rects {
        vertices.extend(board_rect(r.rect, r.color));
    }

    if frame.overlay.is_some() {
        vertices.extend(quad(
            0.0,
            PANEL_HEIGHT as f32,
            width,
            BOARD_HEIGHT as f32,
            OVERLAY_SHADE,
        ));
    }
    vertices
}

/// Renderer that keeps the triangle list of the latest frame, for a GPU
/// backend to upload
#[derive(Debug, Clone, Default)]
pub struct VertexBatch {
    vertices: Vec<Vertex>,
    frames: u64,
}

impl VertexBatch {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn vertices(&self) -> &[Vertex] {
        &self.vertices
    }

    pub fn frames(&self) -> u64 {
        self.frames
    }

    /// The last frame's vertices as an upload buffer
    pub fn bytes(&self) -> &[u8] {
        as_bytes(&self.vertices)
    }
}

impl Renderer for VertexBatch {
    fn render(&mut self, frame: &Frame) {
        self.vertices = frame_vertices(frame);
        self.frames += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn hud(eaten: u32, finish: u32, complete: bool) -> Hud {
        Hud {
            score: 0,
            lives: 0,
            level: 1,
            eaten,
            finish,
            complete,
            progress: 0.0,
        }
    }

    #[test]
    fn test_progress_fill_rounds_up() {
        assert_eq!(progress_fill(0, 75), 0);
        assert_eq!(progress_fill(1, 75), 6);
        assert_eq!(progress_fill(75, 75), PROGRESS_WIDTH);
        assert_eq!(progress_fill(90, 75), PROGRESS_WIDTH);
        assert_eq!(progress_fill(3, 0), PROGRESS_WIDTH);
    }

    #[test]
    fn test_progress_bar_colors() {
        let empty = progress_bar(&hud(0, 50, false));
        assert_eq!(empty.len(), 6);
        assert_eq!(empty[0].color, palette::GREY);

        let partial = progress_bar(&hud(10, 50, false));
        assert_eq!(partial.len(), 12);
        assert_eq!(partial[6].color, palette::YELLOW);
        // 425 * 10 / 50 = 85
        assert_eq!(partial[7].position[0] - partial[6].position[0], 85.0);

        let done = progress_bar(&hud(50, 50, true));
        assert_eq!(done.len(), 6);
        assert!(done.iter().all(|v| v.color == palette::GREEN));
    }

    #[test]
    fn test_batch_bytes_match_vertices() {
        let frame = Frame {
            background: palette::BLACK,
            rects: Vec::new(),
            hud: hud(10, 50, false),
            overlay: None,
        };
        let mut batch = VertexBatch::new();
        assert!(batch.bytes().is_empty());

        batch.render(&frame);
        assert_eq!(batch.frames(), 1);
        assert!(!batch.vertices().is_empty());
        assert_eq!(batch.bytes().len(), batch.vertices().len() * Vertex::STRIDE);
        assert_eq!(&batch.bytes()[..Vertex::STRIDE], as_bytes(&batch.vertices()[..1]));
    }

    #[test]
    fn test_board_rect_offset() {
        let v = board_rect(Rect::new(300, 245, 100, 10), palette::BODY);
        assert_eq!(v[0].position, [300.0, 345.0]);
        assert_eq!(v[5].position, [400.0, 355.0]);
    }
}
