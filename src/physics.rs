//! Collision and board-boundary rules.

use crate::constants::{BOARD_SIZE, PLAYER_EXTENT};
use crate::entities::Body;
use crate::vector::Vec2;

/// Axis-aligned rectangle intersection, `pos` being the top-left corner.
///
/// All four comparisons are strict, so rectangles that merely share an edge
/// do not overlap.
pub fn overlap(a: &Body, b: &Body) -> bool {
    a.pos.x < b.pos.x + b.width
        && a.pos.x + a.width > b.pos.x
        && a.pos.y < b.pos.y + b.height
        && a.pos.y + a.height > b.pos.y
}

/// Keep the player fully on the board: each coordinate ends up in
/// `[0, BOARD_SIZE - PLAYER_EXTENT]`.
pub fn clamp_to_board(pos: Vec2) -> Vec2 {
    let max = BOARD_SIZE - PLAYER_EXTENT;
    let clamp = |v: f64| v.clamp(0.0, max);
    Vec2::new(clamp(pos.x), clamp(pos.y))
}

/// Wrap a coordinate that left the board around to the opposite edge.
/// Bodies may hang up to `PLAYER_EXTENT` past the left/top edge before wrapping.
pub fn wrap_toroidally(pos: Vec2) -> Vec2 {
    let wrap = |v: f64| {
        if v < -PLAYER_EXTENT {
            v + BOARD_SIZE
        } else if v > BOARD_SIZE {
            v - BOARD_SIZE
        } else {
            v
        }
    };
    Vec2::new(wrap(pos.x), wrap(pos.y))
}

/// Advance a non-player body by one tick of its velocity.
pub fn move_body(body: &Body) -> Body {
    Body {
        pos: wrap_toroidally(body.pos + body.vel),
        ..body.clone()
    }
}
