//! All game entity types. Pure data, no logic.

use crate::vector::Vec2;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum BodyKind {
    Player,
    Car,
    Water,
    Platform,
    FloatObstacle,
    GoalSlot,
}

impl BodyKind {
    /// Prefix used to namespace body ids, so `car0` and `platform0` never clash.
    pub fn name(self) -> &'static str {
        match self {
            BodyKind::Player => "player",
            BodyKind::Car => "car",
            BodyKind::Water => "water",
            BodyKind::Platform => "platform",
            BodyKind::FloatObstacle => "float",
            BodyKind::GoalSlot => "goal",
        }
    }
}

// ── Construction inputs ───────────────────────────────────────────────────────

/// Identity half of a body before its kind is known.
#[derive(Clone, Debug, PartialEq)]
pub struct Identity {
    pub id: String,
    pub create_time: u64,
}

/// Geometry and looks of a body before its kind is known.
#[derive(Clone, Debug, PartialEq)]
pub struct Shape {
    /// Top-left corner.
    pub pos: Vec2,
    pub color: &'static str,
    pub width: f64,
    pub height: f64,
    pub collided: bool,
}

// ── Bodies ────────────────────────────────────────────────────────────────────

/// Anything positioned, sized and drawn on the board.
///
/// Non-player bodies keep the velocity they were created with; only their
/// position changes from tick to tick. The player never has a velocity: key
/// presses move it by whole steps.
#[derive(Clone, Debug, PartialEq)]
pub struct Body {
    pub id: String,
    pub create_time: u64,
    pub kind: BodyKind,
    pub pos: Vec2,
    /// Pixels per tick.
    pub vel: Vec2,
    pub width: f64,
    pub height: f64,
    /// `#rrggbb` or a plain color name.
    pub color: &'static str,
    /// Carried along for renderers; game logic never reads it.
    pub collided: bool,
}

// ── Events ────────────────────────────────────────────────────────────────────

/// Everything that can advance the game.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Event {
    /// Key press: shift the player by `(dx, dy)`.
    Move { dx: f64, dy: f64 },
    /// Throw the board away and start over. The highscore survives.
    Restart,
    /// Clock pulse carrying the clock's running counter.
    Tick { elapsed: u64 },
}

// ── Master game state ─────────────────────────────────────────────────────────

/// The entire game state. Cloneable so pure update functions can
/// return a new copy without touching the original.
#[derive(Clone, Debug, PartialEq)]
pub struct GameState {
    /// Counter of the last tick folded in.
    pub time: u64,
    pub score: u32,
    /// Best score of the session; never reset.
    pub highscore: u32,
    /// Smallest y the player has reached, i.e. the furthest progress.
    pub player_max_y: f64,
    pub game_over: bool,
    pub player: Body,
    pub obstacles: Vec<Body>,
    pub water: Body,
    pub platforms: Vec<Body>,
    pub float_obstacles: Vec<Body>,
    pub goal_slots: Vec<Body>,
}
