//! GameView: maps a `core::GameSnapshot` into a terminal framebuffer.
//!
//! This module is pure (no I/O). It can be unit-tested.

use crate::core::GameSnapshot;
use crate::fb::{CellStyle, FrameBuffer, Rgb};
use crate::types::{Difficulty, Direction, GameStatus, GridSize, Position};

/// Rows above the board frame used by the header line.
pub const HEADER_ROWS: u16 = 1;

const BOARD_BG: Rgb = Rgb::new(199, 233, 176);
const PAGE_BG: Rgb = Rgb::new(213, 245, 197);
const MENU_BG: Rgb = Rgb::new(245, 240, 230);
const BORDER: Rgb = Rgb::new(74, 138, 84);
const BODY: Rgb = Rgb::new(74, 138, 84);
const HEAD: Rgb = Rgb::new(47, 111, 57);
const FOOD: Rgb = Rgb::new(210, 40, 40);
const TEXT: Rgb = Rgb::new(47, 111, 57);
const ALERT: Rgb = Rgb::new(170, 51, 51);
const OVERLAY_BG: Rgb = Rgb::new(225, 242, 214);

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

/// Where the header and board frame land for a grid in a viewport.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BoardLayout {
    pub header_y: u16,
    pub frame_x: u16,
    pub frame_y: u16,
    pub frame_w: u16,
    pub frame_h: u16,
}

/// A lightweight terminal renderer for the snake game.
pub struct GameView {
    /// Board cell width in terminal columns.
    cell_w: u16,
    /// Board cell height in terminal rows.
    cell_h: u16,
}

impl Default for GameView {
    fn default() -> Self {
        // 2x1 helps compensate for typical terminal glyph aspect ratio.
        Self {
            cell_w: 2,
            cell_h: 1,
        }
    }
}

impl GameView {
    pub fn new(cell_w: u16, cell_h: u16) -> Self {
        Self {
            cell_w: cell_w.max(1),
            cell_h: cell_h.max(1),
        }
    }

    /// Largest grid that fits the viewport below the header, inside the frame.
    ///
    /// `None` if the terminal is too small for the minimum grid.
    pub fn grid_for(&self, viewport: Viewport) -> Option<GridSize> {
        let cols = viewport.width.saturating_sub(2) / self.cell_w;
        let rows = viewport.height.saturating_sub(2 + HEADER_ROWS) / self.cell_h;
        GridSize::new(cols, rows)
    }

    /// Whether the header and framed board of `grid` fit the viewport unclipped.
    pub fn fits(&self, grid: GridSize, viewport: Viewport) -> bool {
        let layout = self.layout(grid, viewport);
        layout.frame_w <= viewport.width
            && layout.frame_h.saturating_add(HEADER_ROWS) <= viewport.height
    }

    pub fn layout(&self, grid: GridSize, viewport: Viewport) -> BoardLayout {
        let frame_w = grid.cols().saturating_mul(self.cell_w).saturating_add(2);
        let frame_h = grid.rows().saturating_mul(self.cell_h).saturating_add(2);
        let total_h = frame_h.saturating_add(HEADER_ROWS);
        let top = viewport.height.saturating_sub(total_h) / 2;
        BoardLayout {
            header_y: top,
            frame_x: viewport.width.saturating_sub(frame_w) / 2,
            frame_y: top + HEADER_ROWS,
            frame_w,
            frame_h,
        }
    }

    /// Render the current state into an existing framebuffer.
    ///
    /// `cursor` is the difficulty highlighted on the menu screen.
    pub fn render_into(
        &self,
        snap: &GameSnapshot,
        cursor: Difficulty,
        viewport: Viewport,
        fb: &mut FrameBuffer,
    ) {
        fb.resize(viewport.width, viewport.height);
        match snap.status {
            GameStatus::Menu => self.draw_menu(fb, snap, cursor, viewport),
            GameStatus::Playing | GameStatus::Paused | GameStatus::GameOver => {
                self.draw_game(fb, snap, viewport)
            }
        }
    }

    /// Convenience helper that allocates a new framebuffer.
    pub fn render(
        &self,
        snap: &GameSnapshot,
        cursor: Difficulty,
        viewport: Viewport,
    ) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(snap, cursor, viewport, &mut fb);
        fb
    }

    fn draw_menu(
        &self,
        fb: &mut FrameBuffer,
        snap: &GameSnapshot,
        cursor: Difficulty,
        viewport: Viewport,
    ) {
        let bg = CellStyle::new(TEXT, MENU_BG);
        fb.clear(bg.cell(' '));

        let w = viewport.width;
        let mut y = viewport.height.saturating_sub(12) / 2;

        fb.put_str_centered(0, w, y, "S N A K E", bg.bold());
        y += 2;
        fb.put_str_centered(0, w, y, "Select level", bg.bold());
        y += 1;

        let score_label = "Last score: ";
        let line_w = score_label.len() as u16 + digits(snap.score);
        let x = w.saturating_sub(line_w) / 2;
        let x = fb.put_str(x, y, score_label, bg);
        fb.put_u32(x, y, snap.score, bg);
        y += 2;

        for (i, difficulty) in Difficulty::ALL.iter().enumerate() {
            let selected = *difficulty == cursor;
            let style = if selected {
                CellStyle::new(MENU_BG, HEAD).bold()
            } else {
                bg
            };
            let line = format!(
                "{} {}  {:<6} {:>3}ms {}",
                if selected { '>' } else { ' ' },
                i + 1,
                difficulty.label(),
                difficulty.tick_ms(),
                if selected { '<' } else { ' ' },
            );
            fb.put_str_centered(0, w, y, &line, style);
            y += 1;
        }

        y += 1;
        fb.put_str_centered(0, w, y, "↑/↓ select  enter start  1-3 quick start  q quit", bg);
    }

    fn draw_game(&self, fb: &mut FrameBuffer, snap: &GameSnapshot, viewport: Viewport) {
        fb.clear(CellStyle::new(TEXT, PAGE_BG).cell(' '));

        let layout = self.layout(snap.grid, viewport);
        self.draw_header(fb, snap, &layout);

        let board = CellStyle::new(BODY, BOARD_BG);
        fb.fill_rect(
            layout.frame_x + 1,
            layout.frame_y + 1,
            layout.frame_w.saturating_sub(2),
            layout.frame_h.saturating_sub(2),
            ' ',
            board,
        );
        draw_border(fb, &layout, CellStyle::new(BORDER, PAGE_BG));

        if snap.grid.contains(snap.food) {
            let food = CellStyle::new(FOOD, BOARD_BG);
            self.draw_glyphs(fb, &layout, snap.food, ['◖', '◗'], food);
        }

        for &segment in snap.snake.iter().skip(1) {
            if snap.grid.contains(segment) {
                self.draw_glyphs(fb, &layout, segment, ['█', '█'], board);
            }
        }
        if let Some(head) = snap.head() {
            if snap.grid.contains(head) {
                let glyphs = head_glyphs(snap.direction);
                self.draw_glyphs(fb, &layout, head, glyphs, CellStyle::new(HEAD, BOARD_BG).bold());
            }
        }

        match snap.status {
            GameStatus::Paused => self.draw_overlay(
                fb,
                &layout,
                "GAME PAUSED",
                "p resume  r restart  m menu",
                CellStyle::new(TEXT, OVERLAY_BG).bold(),
            ),
            GameStatus::GameOver => self.draw_overlay(
                fb,
                &layout,
                &snap.game_over_message,
                "r restart  m menu",
                CellStyle::new(ALERT, OVERLAY_BG).bold(),
            ),
            GameStatus::Menu | GameStatus::Playing => {}
        }
    }

    fn draw_header(&self, fb: &mut FrameBuffer, snap: &GameSnapshot, layout: &BoardLayout) {
        let style = CellStyle::new(TEXT, PAGE_BG).bold();
        let y = layout.header_y;
        let left = layout.frame_x;
        let right = layout.frame_x.saturating_add(layout.frame_w);

        let x = fb.put_str(left, y, "LEVEL ", style);
        let label_end = fb.put_str(x, y, snap.difficulty.label(), style);

        let score_w = "SCORE ".len() as u16 + digits(snap.score);
        let score_x = right.saturating_sub(score_w);
        let x = fb.put_str(score_x, y, "SCORE ", style);
        fb.put_u32(x, y, snap.score, style);

        // Indicator goes in the gap between label and score, if there is room.
        let indicator = if snap.status == GameStatus::Playing { "||" } else { "▶" };
        let gap = score_x.saturating_sub(label_end);
        if gap >= indicator.chars().count() as u16 + 2 {
            fb.put_str_centered(label_end, gap, y, indicator, style);
        }
    }

    fn draw_glyphs(
        &self,
        fb: &mut FrameBuffer,
        layout: &BoardLayout,
        pos: Position,
        glyphs: [char; 2],
        style: CellStyle,
    ) {
        let px = layout.frame_x + 1 + pos.x as u16 * self.cell_w;
        let py = layout.frame_y + 1 + pos.y as u16 * self.cell_h;
        for dy in 0..self.cell_h {
            for dx in 0..self.cell_w {
                let ch = glyphs[(dx as usize).min(1)];
                fb.put_char(px + dx, py + dy, ch, style);
            }
        }
    }

    fn draw_overlay(
        &self,
        fb: &mut FrameBuffer,
        layout: &BoardLayout,
        title: &str,
        hint: &str,
        title_style: CellStyle,
    ) {
        // Box spans the board, widening past the frame for long text.
        let text_w = title.chars().count().max(hint.chars().count()) as u16 + 2;
        let box_w = layout.frame_w.saturating_sub(2).max(text_w).min(fb.width());
        let centre = layout.frame_x + layout.frame_w / 2;
        let box_x = centre
            .saturating_sub(box_w / 2)
            .min(fb.width().saturating_sub(box_w));
        let mid_y = layout.frame_y + layout.frame_h / 2;
        let top = mid_y.saturating_sub(2);

        let bg = CellStyle::new(TEXT, OVERLAY_BG);
        fb.fill_rect(box_x, top, box_w, 5, ' ', bg);
        fb.put_str_centered(box_x, box_w, top + 1, title, title_style);
        fb.put_str_centered(box_x, box_w, top + 3, hint, bg);
    }
}

fn draw_border(fb: &mut FrameBuffer, layout: &BoardLayout, style: CellStyle) {
    let (x, y, w, h) = (layout.frame_x, layout.frame_y, layout.frame_w, layout.frame_h);
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

/// Head glyph pair pointing the way the snake faces
pub fn head_glyphs(dir: Direction) -> [char; 2] {
    match dir {
        Direction::Up => ['▟', '▙'],
        Direction::Down => ['▜', '▛'],
        Direction::Left => ['◀', '█'],
        Direction::Right => ['█', '▶'],
    }
}

fn digits(v: u32) -> u16 {
    let mut n = v;
    let mut count = 1;
    while n >= 10 {
        n /= 10;
        count += 1;
    }
    count
}
