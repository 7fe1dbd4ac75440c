//! Rendering layer. All terminal I/O lives here.
//!
//! The board is drawn on a character grid: one column per 25 pixels and one
//! row per 50 pixels, so the 600px board becomes 24 x 12 cells. A [`Scene`]
//! keeps one view per body id, created the first time the id shows up and
//! moved on every later state. No game logic is performed here.

use std::collections::HashMap;
use std::io::{self, Write};
use std::time::Instant;

use crossterm::{
    cursor,
    style::{self, Color, Print},
    terminal, QueueableCommand,
};
use log::debug;

use crate::constants::{
    BOARD_SIZE, FLOAT_BLINK_PERIOD, FLOAT_VISIBLE_UNTIL, FRAME, GAME_OVER_BANNER,
};
use crate::entities::{Body, BodyKind, GameState};
use crate::session::StateSink;

// ── Grid ──────────────────────────────────────────────────────────────────────

const PX_PER_COL: f64 = 25.0;
const PX_PER_ROW: f64 = 50.0;
pub const GRID_COLS: i32 = (BOARD_SIZE / PX_PER_COL) as i32;
pub const GRID_ROWS: i32 = (BOARD_SIZE / PX_PER_ROW) as i32;

/// Screen position of grid cell (0, 0): row 0 is the HUD, row 1 the top border.
const ORIGIN_COL: u16 = 1;
const ORIGIN_ROW: u16 = 2;

// ── Colour palette ────────────────────────────────────────────────────────────

const C_BORDER: Color = Color::DarkBlue;
const C_HUD_SCORE: Color = Color::Yellow;
const C_HUD_HIGHSCORE: Color = Color::Magenta;
const C_HINT: Color = Color::DarkGrey;
const C_GAME_OVER: Color = Color::Red;

/// `#rrggbb` becomes an RGB colour; a few names map to the terminal palette.
pub fn parse_color(color: &str) -> Color {
    if let Some(hex) = color.strip_prefix('#') {
        let channel = |i: usize| hex.get(i..i + 2).and_then(|c| u8::from_str_radix(c, 16).ok());
        if let (6, Some(r), Some(g), Some(b)) = (hex.len(), channel(0), channel(2), channel(4)) {
            return Color::Rgb { r, g, b };
        }
    }
    match color {
        "green" => Color::Green,
        "white" => Color::White,
        "red" => Color::Red,
        "blue" => Color::Blue,
        "black" => Color::Black,
        "yellow" => Color::Yellow,
        _ => Color::Reset,
    }
}

fn glyph(kind: BodyKind) -> char {
    match kind {
        BodyKind::Player => '@',
        BodyKind::Car => '█',
        BodyKind::Water => '~',
        BodyKind::Platform => '=',
        BodyKind::FloatObstacle => 'o',
        BodyKind::GoalSlot => '□',
    }
}

/// Float obstacles blink: shown for the first part of every period.
pub fn floats_visible(time: u64) -> bool {
    time % FLOAT_BLINK_PERIOD <= FLOAT_VISIBLE_UNTIL
}

// ── Scene ─────────────────────────────────────────────────────────────────────

/// A body's rectangle in grid cells, possibly hanging off the grid.
#[derive(Clone, Debug, PartialEq)]
pub struct View {
    pub glyph: char,
    pub color: Color,
    pub col: i32,
    pub row: i32,
    pub cols: i32,
    pub rows: i32,
    pub hidden: bool,
}

impl View {
    fn create(body: &Body) -> Self {
        View {
            glyph: glyph(body.kind),
            color: parse_color(body.color),
            col: 0,
            row: 0,
            cols: (body.width / PX_PER_COL).ceil() as i32,
            rows: (body.height / PX_PER_ROW).ceil() as i32,
            hidden: false,
        }
    }

    fn place(&mut self, body: &Body) {
        self.col = (body.pos.x / PX_PER_COL).floor() as i32;
        self.row = (body.pos.y / PX_PER_ROW).floor() as i32;
    }
}

/// Everything the renderer has drawn so far, keyed by body id.
#[derive(Debug)]
pub struct Scene {
    views: HashMap<String, View>,
    /// Creation order, which is also paint order.
    order: Vec<String>,
    player: Option<View>,
    score: u32,
    highscore: u32,
    banner_until: Option<Instant>,
}

impl Default for Scene {
    fn default() -> Self {
        Self::new()
    }
}

impl Scene {
    pub fn new() -> Self {
        Scene {
            views: HashMap::new(),
            order: Vec::new(),
            player: None,
            score: 0,
            highscore: 0,
            banner_until: None,
        }
    }

    /// Reflect `state` as seen at `now`.
    pub fn update(&mut self, state: &GameState, now: Instant) {
        let floats_hidden = !floats_visible(state.time);

        self.sync(&state.water, false);
        for body in &state.goal_slots {
            self.sync(body, false);
        }
        for body in &state.platforms {
            self.sync(body, false);
        }
        for body in &state.float_obstacles {
            self.sync(body, floats_hidden);
        }
        for body in &state.obstacles {
            self.sync(body, false);
        }

        // The player view is translated, never re-created.
        let player = self.player.get_or_insert_with(|| View::create(&state.player));
        player.place(&state.player);

        self.score = state.score;
        self.highscore = state.highscore;
        if state.game_over {
            self.banner_until = Some(now + GAME_OVER_BANNER);
        }
    }

    fn sync(&mut self, body: &Body, hidden: bool) {
        if !self.views.contains_key(&body.id) {
            debug!("creating view {}", body.id);
            self.order.push(body.id.clone());
        }
        let view = self
            .views
            .entry(body.id.clone())
            .or_insert_with(|| View::create(body));
        view.place(body);
        view.hidden = hidden;
    }

    pub fn view(&self, id: &str) -> Option<&View> {
        self.views.get(id)
    }

    pub fn player(&self) -> Option<&View> {
        self.player.as_ref()
    }

    /// Number of distinct non-player views ever created.
    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    pub fn banner_visible(&self, now: Instant) -> bool {
        self.banner_until.is_some_and(|until| now < until)
    }

    fn painted(&self) -> impl Iterator<Item = &View> {
        self.order
            .iter()
            .filter_map(|id| self.views.get(id))
            .filter(|view| !view.hidden)
            .chain(self.player.iter())
    }
}

// ── Terminal sink ─────────────────────────────────────────────────────────────

/// Draws the states it receives onto a terminal-like writer.
///
/// Every state updates the scene, but the screen is repainted at most once
/// per [`FRAME`], so a slow terminal cannot hold up the event fold.
pub struct TerminalRenderer<W: Write> {
    out: W,
    scene: Scene,
    last_paint: Option<Instant>,
}

impl<W: Write> TerminalRenderer<W> {
    pub fn new(out: W) -> Self {
        TerminalRenderer {
            out,
            scene: Scene::new(),
            last_paint: None,
        }
    }

    pub fn scene(&self) -> &Scene {
        &self.scene
    }

    pub fn get_ref(&self) -> &W {
        &self.out
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    /// Update the scene as of `now`, and draw one complete frame if the
    /// previous one is at least a [`FRAME`] old.
    pub fn render_at(&mut self, state: &GameState, now: Instant) -> io::Result<()> {
        self.scene.update(state, now);
        let due = self
            .last_paint
            .map_or(true, |last| now.saturating_duration_since(last) >= FRAME);
        if !due {
            return Ok(());
        }
        self.last_paint = Some(now);
        draw(&mut self.out, &self.scene, now)
    }
}

impl<W: Write> StateSink for TerminalRenderer<W> {
    fn render(&mut self, state: &GameState) -> io::Result<()> {
        self.render_at(state, Instant::now())
    }
}

// ── Drawing ───────────────────────────────────────────────────────────────────

/// Render one complete frame.
pub fn draw<W: Write>(out: &mut W, scene: &Scene, now: Instant) -> io::Result<()> {
    out.queue(terminal::BeginSynchronizedUpdate)?;
    out.queue(terminal::Clear(terminal::ClearType::All))?;

    draw_hud(out, scene)?;
    draw_border(out)?;
    for view in scene.painted() {
        draw_view(out, view)?;
    }
    draw_controls_hint(out)?;

    if scene.banner_visible(now) {
        draw_game_over(out)?;
    }

    // Park cursor in a harmless spot and flush
    out.queue(style::ResetColor)?;
    out.queue(cursor::MoveTo(0, ORIGIN_ROW + GRID_ROWS as u16 + 2))?;
    out.queue(terminal::EndSynchronizedUpdate)?;
    out.flush()
}

// ── HUD (row 0) ───────────────────────────────────────────────────────────────

fn draw_hud<W: Write>(out: &mut W, scene: &Scene) -> io::Result<()> {
    out.queue(cursor::MoveTo(1, 0))?;
    out.queue(style::SetForegroundColor(C_HUD_SCORE))?;
    out.queue(Print(format!("Score: {}", scene.score)))?;

    let highscore = format!("Highscore: {}", scene.highscore);
    let right = (GRID_COLS as u16 + 2).saturating_sub(highscore.len() as u16 + 1);
    out.queue(cursor::MoveTo(right, 0))?;
    out.queue(style::SetForegroundColor(C_HUD_HIGHSCORE))?;
    out.queue(Print(highscore))?;
    Ok(())
}

// ── Border ────────────────────────────────────────────────────────────────────

fn draw_border<W: Write>(out: &mut W) -> io::Result<()> {
    let w = GRID_COLS as usize;
    let bottom = ORIGIN_ROW + GRID_ROWS as u16;

    out.queue(style::SetForegroundColor(C_BORDER))?;
    out.queue(cursor::MoveTo(0, ORIGIN_ROW - 1))?;
    out.queue(Print(format!("┌{}┐", "─".repeat(w))))?;
    out.queue(cursor::MoveTo(0, bottom))?;
    out.queue(Print(format!("└{}┘", "─".repeat(w))))?;

    for row in ORIGIN_ROW..bottom {
        out.queue(cursor::MoveTo(0, row))?;
        out.queue(Print("│"))?;
        out.queue(cursor::MoveTo(ORIGIN_COL + GRID_COLS as u16, row))?;
        out.queue(Print("│"))?;
    }
    Ok(())
}

// ── Bodies ────────────────────────────────────────────────────────────────────

/// Fill the on-grid part of a view's rectangle with its glyph.
fn draw_view<W: Write>(out: &mut W, view: &View) -> io::Result<()> {
    let first_col = view.col.max(0);
    let last_col = (view.col + view.cols).min(GRID_COLS);
    if first_col >= last_col {
        return Ok(());
    }
    let run: String = std::iter::repeat(view.glyph)
        .take((last_col - first_col) as usize)
        .collect();

    out.queue(style::SetForegroundColor(view.color))?;
    for row in view.row.max(0)..(view.row + view.rows).min(GRID_ROWS) {
        out.queue(cursor::MoveTo(ORIGIN_COL + first_col as u16, ORIGIN_ROW + row as u16))?;
        out.queue(Print(&run))?;
    }
    Ok(())
}

// ── Controls hint (below the board) ──────────────────────────────────────────

fn draw_controls_hint<W: Write>(out: &mut W) -> io::Result<()> {
    out.queue(cursor::MoveTo(1, ORIGIN_ROW + GRID_ROWS as u16 + 1))?;
    out.queue(style::SetForegroundColor(C_HINT))?;
    out.queue(Print("Arrows: Move  R: Restart  Q: Quit"))?;
    Ok(())
}

// ── Game-over banner ──────────────────────────────────────────────────────────

fn draw_game_over<W: Write>(out: &mut W) -> io::Result<()> {
    let lines = ["╔═══════════╗", "║ GAME OVER ║", "╚═══════════╝"];
    let cx = ORIGIN_COL + GRID_COLS as u16 / 2;
    let start_row = ORIGIN_ROW + (GRID_ROWS as u16 / 2).saturating_sub(1);

    out.queue(style::SetForegroundColor(C_GAME_OVER))?;
    for (i, line) in lines.iter().enumerate() {
        let col = cx.saturating_sub(line.chars().count() as u16 / 2);
        out.queue(cursor::MoveTo(col, start_row + i as u16))?;
        out.queue(Print(*line))?;
    }
    Ok(())
}
