//! Fixed board layout and timing constants.
//!
//! Everything is measured in board pixels; the board is a square of
//! `BOARD_SIZE` pixels with the origin in the top-left corner.

use std::time::Duration;

/// Side length of the square board.
pub const BOARD_SIZE: f64 = 600.0;

/// Width and height of the player, also the margin used by clamping and wrapping.
pub const PLAYER_EXTENT: f64 = 50.0;

/// Distance covered by a single key press.
pub const MOVE_DISTANCE: f64 = 50.0;

/// Time stamp given to every body of the initial board.
pub const START_TIME: u64 = 0;

/// Moving bodies per lane.
pub const OBJECTS_PER_ROW: usize = 3;

/// Goal slots along the top of the board.
pub const GOAL_SLOTS: usize = 5;

/// Where the player spawns.
pub const PLAYER_START_X: f64 = 300.0;
pub const PLAYER_START_Y: f64 = BOARD_SIZE - PLAYER_EXTENT;

/// A player whose y drops below this line has crossed the board.
pub const GOAL_LINE_Y: f64 = 50.0;

/// Reference interval between two clock ticks.
pub const TICK_INTERVAL: Duration = Duration::from_millis(10);

/// Shortest time between two screen repaints (about 30 FPS).
pub const FRAME: Duration = Duration::from_millis(33);

/// How long the "Game Over" banner stays on screen.
pub const GAME_OVER_BANNER: Duration = Duration::from_millis(300);

/// Float obstacles blink with this period (in ticks) ...
pub const FLOAT_BLINK_PERIOD: u64 = 100;
/// ... and are visible while `time % FLOAT_BLINK_PERIOD` is at most this.
pub const FLOAT_VISIBLE_UNTIL: u64 = 50;
