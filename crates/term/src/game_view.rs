//! GameView: maps a `core::GameSnapshot` into a terminal framebuffer.
//!
//! This module is pure (no I/O). It can be unit-tested.

use crate::core::{GameSnapshot, MergeEvent};
use crate::fb::{CellStyle, FrameBuffer, Rgb};
use crate::types::{Prompt, GRID_SIZE};

/// Terminal viewport dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub width: u16,
    pub height: u16,
}

impl Viewport {
    pub fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnchorY {
    Center,
    Top,
}

const BOARD_BG: Rgb = Rgb::new(60, 56, 50);
const PANEL_BG: Rgb = Rgb::new(0, 0, 0);
const DARK_TEXT: Rgb = Rgb::new(119, 110, 101);
const LIGHT_TEXT: Rgb = Rgb::new(249, 246, 242);

/// A lightweight terminal renderer for the 2048 board.
pub struct GameView {
    /// Tile width in terminal columns.
    tile_w: u16,
    /// Tile height in terminal rows.
    tile_h: u16,
    /// Spacing between tiles (and between tiles and the border).
    gap: u16,
    anchor_y: AnchorY,
}

impl Default for GameView {
    fn default() -> Self {
        // 7x3 keeps tiles roughly square and fits six-digit values.
        Self {
            tile_w: 7,
            tile_h: 3,
            gap: 1,
            anchor_y: AnchorY::Center,
        }
    }
}

impl GameView {
    pub fn new(tile_w: u16, tile_h: u16) -> Self {
        Self {
            tile_w,
            tile_h,
            ..Self::default()
        }
    }

    pub fn with_anchor_y(mut self, anchor_y: AnchorY) -> Self {
        self.anchor_y = anchor_y;
        self
    }

    /// Outer size of the bordered board, in terminal cells.
    pub fn frame_size(&self) -> (u16, u16) {
        let n = GRID_SIZE as u16;
        let inner_w = n * self.tile_w + (n + 1) * self.gap;
        let inner_h = n * self.tile_h + (n + 1) * self.gap;
        (inner_w + 2, inner_h + 2)
    }

    /// Render the current game into an existing framebuffer.
    ///
    /// Tiles listed in `flash` are drawn highlighted. Callers can reuse a
    /// framebuffer across frames and only resize when the terminal changes.
    pub fn render_into(
        &self,
        snap: &GameSnapshot,
        flash: &[MergeEvent],
        viewport: Viewport,
        fb: &mut FrameBuffer,
    ) {
        fb.resize(viewport.width, viewport.height);
        fb.clear(CellStyle::default().cell(' '));

        let (frame_w, frame_h) = self.frame_size();
        let panel_w = 18u16;
        let total_w = frame_w + panel_w;
        let start_x = if viewport.width >= total_w {
            (viewport.width - total_w) / 2
        } else {
            viewport.width.saturating_sub(frame_w) / 2
        };
        let start_y = match self.anchor_y {
            AnchorY::Center => viewport.height.saturating_sub(frame_h) / 2,
            AnchorY::Top => 0,
        };

        let border = CellStyle::new(Rgb::new(200, 200, 200), PANEL_BG);
        let board_bg = CellStyle::new(BOARD_BG, BOARD_BG);
        fb.fill_rect(start_x + 1, start_y + 1, frame_w - 2, frame_h - 2, ' ', board_bg);
        self.draw_border(fb, start_x, start_y, frame_w, frame_h, border);

        for row in 0..GRID_SIZE {
            for col in 0..GRID_SIZE {
                let value = snap.board[row][col];
                let highlighted = flash
                    .iter()
                    .any(|e| e.row as usize == row && e.col as usize == col);
                self.draw_tile(fb, start_x, start_y, row as u16, col as u16, value, highlighted);
            }
        }

        self.draw_side_panel(fb, snap, viewport, start_x, start_y, frame_w);

        if let Some(prompt) = snap.prompt {
            self.draw_prompt(fb, start_x, start_y, frame_w, frame_h, prompt);
        } else if snap.game_over {
            self.draw_overlay_text(fb, start_x, start_y, frame_w, frame_h, "GAME OVER");
        }
    }

    /// Convenience helper that allocates a new framebuffer.
    pub fn render(
        &self,
        snap: &GameSnapshot,
        flash: &[MergeEvent],
        viewport: Viewport,
    ) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(snap, flash, viewport, &mut fb);
        fb
    }

    /// Top-left terminal position of tile (row, col) for a board framed at (start_x, start_y).
    pub fn tile_origin(&self, start_x: u16, start_y: u16, row: u16, col: u16) -> (u16, u16) {
        let px = start_x + 1 + self.gap + col * (self.tile_w + self.gap);
        let py = start_y + 1 + self.gap + row * (self.tile_h + self.gap);
        (px, py)
    }

    fn draw_border(&self, fb: &mut FrameBuffer, x: u16, y: u16, w: u16, h: u16, style: CellStyle) {
        if w < 2 || h < 2 {
            return;
        }

        fb.put_char(x, y, '╭', style);
        fb.put_char(x + w - 1, y, '╮', style);
        fb.put_char(x, y + h - 1, '╰', style);
        fb.put_char(x + w - 1, y + h - 1, '╯', style);

        for dx in 1..w - 1 {
            fb.put_char(x + dx, y, '─', style);
            fb.put_char(x + dx, y + h - 1, '─', style);
        }
        for dy in 1..h - 1 {
            fb.put_char(x, y + dy, '│', style);
            fb.put_char(x + w - 1, y + dy, '│', style);
        }
    }

    fn draw_tile(
        &self,
        fb: &mut FrameBuffer,
        start_x: u16,
        start_y: u16,
        row: u16,
        col: u16,
        value: u32,
        highlighted: bool,
    ) {
        let (px, py) = self.tile_origin(start_x, start_y, row, col);
        let mut style = tile_style(value);
        if highlighted {
            style = CellStyle {
                bg: style.bg.lighten(40),
                ..style
            }
            .bold();
        }

        fb.fill_rect(px, py, self.tile_w, self.tile_h, ' ', style);
        let mid_y = py + self.tile_h / 2;
        if value == 0 {
            fb.put_str_centered(px, self.tile_w, mid_y, "·", style.dim());
            return;
        }

        fb.put_u32_centered(px, self.tile_w, mid_y, value, style);
    }

    fn draw_side_panel(
        &self,
        fb: &mut FrameBuffer,
        snap: &GameSnapshot,
        viewport: Viewport,
        start_x: u16,
        start_y: u16,
        frame_w: u16,
    ) {
        let panel_x = start_x.saturating_add(frame_w).saturating_add(2);
        if panel_x >= viewport.width || viewport.width - panel_x < 12 {
            return;
        }

        let label = CellStyle::new(Rgb::new(220, 220, 220), PANEL_BG).bold();
        let value = CellStyle::new(Rgb::new(200, 200, 200), PANEL_BG);
        let help = value.dim();

        let mut y = start_y;
        for (name, v) in [
            ("SCORE", snap.score),
            ("MOVES", snap.moves),
            ("BEST", snap.best_tile),
            ("TARGET", snap.target),
        ] {
            fb.put_str(panel_x, y, name, label);
            y = y.saturating_add(1);
            fb.put_u32(panel_x, y, v, value);
            y = y.saturating_add(2);
        }

        if snap.won {
            fb.put_str(panel_x, y, "WON", CellStyle::new(Rgb::new(237, 194, 46), PANEL_BG).bold());
            y = y.saturating_add(2);
        }

        for line in ["←↑↓→ move", "r    restart", "q    quit"] {
            if y >= viewport.height {
                break;
            }
            fb.put_str(panel_x, y, line, help);
            y = y.saturating_add(1);
        }
    }

    fn draw_prompt(
        &self,
        fb: &mut FrameBuffer,
        start_x: u16,
        start_y: u16,
        frame_w: u16,
        frame_h: u16,
        prompt: Prompt,
    ) {
        let mid_y = start_y.saturating_add(frame_h / 2);
        let style = CellStyle::new(Rgb::new(255, 255, 255), PANEL_BG).bold();
        let box_w = frame_w.saturating_sub(8);
        let box_x = start_x + 4;
        fb.fill_rect(box_x, mid_y.saturating_sub(1), box_w, 4, ' ', style);
        fb.put_str_centered(box_x, box_w, mid_y.saturating_sub(1), prompt.title(), style);
        fb.put_str_centered(box_x, box_w, mid_y + 1, "Restart? (y/n)", style);
    }

    fn draw_overlay_text(
        &self,
        fb: &mut FrameBuffer,
        start_x: u16,
        start_y: u16,
        frame_w: u16,
        frame_h: u16,
        text: &str,
    ) {
        let mid_y = start_y.saturating_add(frame_h / 2);
        let style = CellStyle::new(Rgb::new(255, 255, 255), PANEL_BG).bold();
        fb.put_str_centered(start_x, frame_w, mid_y, text, style);
    }
}

/// Colours per tile value (empty, then 2 through 2048, then anything larger).
fn tile_style(value: u32) -> CellStyle {
    let (bg, fg) = match value {
        0 => (Rgb::new(80, 75, 68), DARK_TEXT),
        2 => (Rgb::new(238, 228, 218), DARK_TEXT),
        4 => (Rgb::new(237, 224, 200), DARK_TEXT),
        8 => (Rgb::new(242, 177, 121), LIGHT_TEXT),
        16 => (Rgb::new(245, 149, 99), LIGHT_TEXT),
        32 => (Rgb::new(246, 124, 95), LIGHT_TEXT),
        64 => (Rgb::new(246, 94, 59), LIGHT_TEXT),
        128 => (Rgb::new(237, 207, 114), LIGHT_TEXT),
        256 => (Rgb::new(237, 204, 97), LIGHT_TEXT),
        512 => (Rgb::new(237, 200, 80), LIGHT_TEXT),
        1024 => (Rgb::new(237, 197, 63), LIGHT_TEXT),
        2048 => (Rgb::new(237, 194, 46), LIGHT_TEXT),
        _ => (Rgb::new(30, 28, 25), LIGHT_TEXT),
    };
    CellStyle::new(fg, bg).bold()
}
