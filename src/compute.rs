//! Pure game-logic functions.
//!
//! State transitions take the current `GameState` by reference and return a
//! brand-new one. Nothing here reads a clock, touches the terminal or keeps
//! state between calls.

use crate::board::{create_player, initial_state};
use crate::constants::GOAL_LINE_Y;
use crate::entities::{Body, Event, GameState};
use crate::physics::{clamp_to_board, move_body, overlap};
use crate::vector::Vec2;

// ── Termination ──────────────────────────────────────────────────────────────

/// Which losing (or finishing) conditions hold for a state.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Termination {
    /// A car overlaps the player.
    pub hit_obstacle: bool,
    /// The player is in the river without standing on anything.
    pub in_water: bool,
    /// The player made it past the goal line.
    pub reached_goal_line: bool,
}

impl Termination {
    pub fn any(&self) -> bool {
        self.hit_obstacle || self.in_water || self.reached_goal_line
    }
}

fn touches_any(player: &Body, bodies: &[Body]) -> bool {
    bodies.iter().any(|b| overlap(player, b))
}

pub fn termination(state: &GameState) -> Termination {
    let player = &state.player;

    Termination {
        hit_obstacle: touches_any(player, &state.obstacles),
        in_water: overlap(player, &state.water)
            && !(touches_any(player, &state.platforms)
                || touches_any(player, &state.float_obstacles)),
        reached_goal_line: player.pos.y < GOAL_LINE_Y,
    }
}

/// Recompute `game_over` from scratch for `state`.
pub fn handle_collisions(state: GameState) -> GameState {
    let game_over = termination(&state).any();
    GameState { game_over, ..state }
}

// ── Input-driven state transitions ───────────────────────────────────────────

/// Shift the player by `(dx, dy)`, clamped to the board. No collision or
/// scoring happens here; that waits for the next tick.
pub fn move_player(state: &GameState, dx: f64, dy: f64) -> GameState {
    let player = Body {
        pos: clamp_to_board(state.player.pos + Vec2::new(dx, dy)),
        ..state.player.clone()
    };
    GameState {
        player,
        ..state.clone()
    }
}

/// Fresh board, keeping only the session highscore.
pub fn restart(state: &GameState) -> GameState {
    GameState {
        highscore: state.highscore,
        ..initial_state()
    }
}

// ── Per-tick advancement ─────────────────────────────────────────────────────

/// Advance the simulation by one clock pulse.
///
/// Scoring and progress tracking look at the state as it was *before* this
/// tick. In particular the highscore is compared against the previous score,
/// so it trails a fresh increment by one tick.
pub fn tick(state: &GameState, elapsed: u64) -> GameState {
    let player_y = state.player.pos.y;
    let advanced = player_y < state.player_max_y;

    let player = if state.game_over {
        create_player()
    } else {
        state.player.clone()
    };

    let score = if state.game_over {
        0
    } else if advanced {
        state.score + 1
    } else {
        state.score
    };

    handle_collisions(GameState {
        time: elapsed,
        score,
        highscore: state.highscore.max(state.score),
        player_max_y: state.player_max_y.min(player_y),
        game_over: state.game_over,
        player,
        obstacles: state.obstacles.iter().map(move_body).collect(),
        water: state.water.clone(),
        platforms: state.platforms.iter().map(move_body).collect(),
        float_obstacles: state.float_obstacles.iter().map(move_body).collect(),
        goal_slots: state.goal_slots.clone(),
    })
}

// ── Reducer ──────────────────────────────────────────────────────────────────

/// The single state transition: fold one event into the state.
pub fn reduce(state: &GameState, event: &Event) -> GameState {
    match *event {
        Event::Move { dx, dy } => move_player(state, dx, dy),
        Event::Restart => restart(state),
        Event::Tick { elapsed } => tick(state, elapsed),
    }
}
