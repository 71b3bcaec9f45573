//! GameView: maps a `core::GameSnapshot` into a terminal framebuffer.
//!
//! This module is pure (no I/O). It can be unit-tested.

use crate::core::{GameSnapshot, Shape};
use crate::fb::{CellStyle, FrameBuffer, Rgb};
use crate::types::{PieceKind, Pos};

const FIELD_BG: Rgb = Rgb::new(30, 30, 40);
const PANEL_BG: Rgb = Rgb::new(0, 0, 0);

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

/// Screen placement of the playfield frame, computed per frame.
#[derive(Debug, Clone, Copy)]
struct FieldLayout {
    x: u16,
    y: u16,
    frame_w: u16,
    frame_h: u16,
}

/// A lightweight terminal renderer for the playfield and its side panel.
pub struct GameView {
    /// Board cell width in terminal columns.
    cell_w: u16,
    /// Board cell height in terminal rows.
    cell_h: u16,
    show_ghost: bool,
}

impl Default for GameView {
    fn default() -> Self {
        // 2x1 helps compensate for typical terminal glyph aspect ratio.
        Self {
            cell_w: 2,
            cell_h: 1,
            show_ghost: true,
        }
    }
}

impl GameView {
    pub fn with_ghost(mut self, show_ghost: bool) -> Self {
        self.show_ghost = show_ghost;
        self
    }

    /// Render into an existing framebuffer, resizing it to the viewport.
    pub fn render_into(&self, snap: &GameSnapshot, viewport: Viewport, fb: &mut FrameBuffer) {
        fb.resize(viewport.width, viewport.height);
        fb.clear(CellStyle::default().into_cell(' '));

        let board_w = clamp_u16(snap.width).saturating_mul(self.cell_w);
        let board_h = clamp_u16(snap.height).saturating_mul(self.cell_h);
        let frame_w = board_w.saturating_add(2);
        let frame_h = board_h.saturating_add(2);
        let layout = FieldLayout {
            x: viewport.width.saturating_sub(frame_w) / 2,
            y: viewport.height.saturating_sub(frame_h) / 2,
            frame_w,
            frame_h,
        };

        let bg = CellStyle::new(Rgb::new(80, 80, 90), FIELD_BG);
        fb.fill_rect(layout.x + 1, layout.y + 1, board_w, board_h, ' ', bg);
        draw_border(fb, layout, CellStyle::new(Rgb::new(200, 200, 200), PANEL_BG));

        // Locked cells.
        for row in 0..snap.height {
            for col in 0..snap.width {
                let pos = Pos::new(row as i32, col as i32);
                match PieceKind::from_code(snap.cell(row, col)) {
                    Some(kind) => self.draw_block(fb, layout, snap, pos, kind),
                    None => self.fill_board_cell(
                        fb,
                        layout,
                        snap,
                        pos,
                        '·',
                        CellStyle::new(Rgb::new(90, 90, 100), FIELD_BG).dim(),
                    ),
                }
            }
        }

        if !snap.game_over {
            if self.show_ghost && snap.ghost_row != snap.active.anchor.row {
                let ghost = CellStyle::new(Rgb::new(140, 140, 140), FIELD_BG).dim();
                let anchor = Pos::new(snap.ghost_row, snap.active.anchor.col);
                for pos in snap.active.shape.cells_at(anchor) {
                    self.fill_board_cell(fb, layout, snap, pos, '░', ghost);
                }
            }

            for pos in snap.active.cells() {
                self.draw_block(fb, layout, snap, pos, snap.active.kind());
            }
        }

        self.draw_side_panel(fb, snap, viewport, layout);

        if snap.game_over {
            draw_overlay_text(fb, layout, 0, "GAME OVER");
            draw_overlay_text(fb, layout, 2, "r restart");
            draw_overlay_text(fb, layout, 3, "q quit");
        }
    }

    /// Convenience helper that allocates a new framebuffer.
    pub fn render(&self, snap: &GameSnapshot, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(snap, viewport, &mut fb);
        fb
    }

    fn draw_block(
        &self,
        fb: &mut FrameBuffer,
        layout: FieldLayout,
        snap: &GameSnapshot,
        pos: Pos,
        kind: PieceKind,
    ) {
        let style = CellStyle::new(piece_color(kind), FIELD_BG).bold();
        self.fill_board_cell(fb, layout, snap, pos, '█', style);
    }

    /// Fill one board cell; cells outside the visible field are skipped.
    fn fill_board_cell(
        &self,
        fb: &mut FrameBuffer,
        layout: FieldLayout,
        snap: &GameSnapshot,
        pos: Pos,
        ch: char,
        style: CellStyle,
    ) {
        if pos.row < 0 || pos.col < 0 {
            return;
        }
        let (row, col) = (pos.row as usize, pos.col as usize);
        if row >= snap.height || col >= snap.width {
            return;
        }
        let px = (layout.x + 1).saturating_add(clamp_u16(col).saturating_mul(self.cell_w));
        let py = (layout.y + 1).saturating_add(clamp_u16(row).saturating_mul(self.cell_h));
        fb.fill_rect(px, py, self.cell_w, self.cell_h, ch, style);
    }

    fn draw_side_panel(
        &self,
        fb: &mut FrameBuffer,
        snap: &GameSnapshot,
        viewport: Viewport,
        layout: FieldLayout,
    ) {
        let panel_x = layout.x.saturating_add(layout.frame_w).saturating_add(2);
        if panel_x >= viewport.width || viewport.width - panel_x < 10 {
            return;
        }

        let label = CellStyle::new(Rgb::new(220, 220, 220), PANEL_BG).bold();
        let value = CellStyle::new(Rgb::new(200, 200, 200), PANEL_BG);

        let mut y = layout.y;
        for (name, v) in [
            ("SCORE", snap.score),
            ("LEVEL", snap.level),
            ("LINES", snap.lines),
        ] {
            fb.put_str(panel_x, y, name, label);
            fb.put_u32(panel_x, y + 1, v, value);
            y = y.saturating_add(3);
        }

        fb.put_str(panel_x, y, "SPEED", label);
        fb.put_u32(panel_x, y + 1, snap.tick_interval_ms, value);
        let digits = snap.tick_interval_ms.to_string().len() as u16;
        fb.put_str(panel_x + digits + 1, y + 1, "ms", value.dim());
        y = y.saturating_add(3);

        fb.put_str(panel_x, y, "NEXT", label);
        y = y.saturating_add(1);
        self.draw_preview(fb, panel_x, y, &snap.next);
    }

    /// Draw a shape matrix at a fixed screen position (preview panel).
    fn draw_preview(&self, fb: &mut FrameBuffer, x: u16, y: u16, shape: &Shape) {
        let style = CellStyle::new(piece_color(shape.kind()), PANEL_BG).bold();
        for (dr, dc) in shape.minos() {
            let px = x.saturating_add((dc as u16).saturating_mul(self.cell_w));
            let py = y.saturating_add((dr as u16).saturating_mul(self.cell_h));
            fb.fill_rect(px, py, self.cell_w, self.cell_h, '█', style);
        }
    }
}

fn draw_border(fb: &mut FrameBuffer, layout: FieldLayout, style: CellStyle) {
    let FieldLayout {
        x,
        y,
        frame_w: w,
        frame_h: h,
    } = layout;
    if w < 2 || h < 2 {
        return;
    }

    fb.put_char(x, y, '┌', style);
    fb.put_char(x + w - 1, y, '┐', style);
    fb.put_char(x, y + h - 1, '└', style);
    fb.put_char(x + w - 1, y + h - 1, '┘', style);

    for dx in 1..w - 1 {
        fb.put_char(x + dx, y, '─', style);
        fb.put_char(x + dx, y + h - 1, '─', style);
    }
    for dy in 1..h - 1 {
        fb.put_char(x, y + dy, '│', style);
        fb.put_char(x + w - 1, y + dy, '│', style);
    }
}

/// Centre `text` horizontally in the field, `line` rows below its middle.
fn draw_overlay_text(fb: &mut FrameBuffer, layout: FieldLayout, line: u16, text: &str) {
    let y = layout.y.saturating_add(layout.frame_h / 2).saturating_add(line);
    let text_w = text.chars().count() as u16;
    let x = layout
        .x
        .saturating_add(layout.frame_w.saturating_sub(text_w) / 2);
    let style = CellStyle::new(Rgb::new(255, 255, 255), PANEL_BG).bold();
    fb.put_str(x, y, text, style);
}

pub fn piece_color(kind: PieceKind) -> Rgb {
    match kind {
        PieceKind::I => Rgb::new(80, 220, 220),
        PieceKind::O => Rgb::new(240, 220, 80),
        PieceKind::T => Rgb::new(200, 120, 220),
        PieceKind::S => Rgb::new(100, 220, 120),
        PieceKind::Z => Rgb::new(220, 80, 80),
        PieceKind::J => Rgb::new(80, 120, 220),
        PieceKind::L => Rgb::new(255, 165, 0),
    }
}

fn clamp_u16(v: usize) -> u16 {
    v.min(u16::MAX as usize) as u16
}
