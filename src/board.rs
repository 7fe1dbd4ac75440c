//! Body constructors and the fixed starting board.
//!
//! The layout is deterministic: every lane, speed and starting offset is a
//! constant, so two calls to [`initial_state`] always build equal boards.

use crate::constants::{
    BOARD_SIZE, GOAL_SLOTS, OBJECTS_PER_ROW, PLAYER_EXTENT, PLAYER_START_X, PLAYER_START_Y,
    START_TIME,
};
use crate::entities::{Body, BodyKind, GameState, Identity, Shape};
use crate::vector::Vec2;

const CAR_COLOR: &str = "#f54a4a";
const WATER_COLOR: &str = "#4a9df5";
const PLATFORM_COLOR: &str = "#6d4c40";
const FLOAT_COLOR: &str = "green";
const GOAL_COLOR: &str = "white";
const PLAYER_COLOR: &str = "green";

// ── Constructors ─────────────────────────────────────────────────────────────

/// Stamp out a body of the given kind. The final id is the kind's name
/// followed by `identity.id`.
pub fn create_body(kind: BodyKind, identity: Identity, shape: Shape, vel: Vec2) -> Body {
    Body {
        id: format!("{}{}", kind.name(), identity.id),
        create_time: identity.create_time,
        kind,
        pos: shape.pos,
        vel,
        width: shape.width,
        height: shape.height,
        color: shape.color,
        collided: shape.collided,
    }
}

pub fn create_car(identity: Identity, shape: Shape, vel: Vec2) -> Body {
    create_body(BodyKind::Car, identity, shape, vel)
}

pub fn create_water(identity: Identity, shape: Shape, vel: Vec2) -> Body {
    create_body(BodyKind::Water, identity, shape, vel)
}

pub fn create_platform(identity: Identity, shape: Shape, vel: Vec2) -> Body {
    create_body(BodyKind::Platform, identity, shape, vel)
}

pub fn create_float_obstacle(identity: Identity, shape: Shape, vel: Vec2) -> Body {
    create_body(BodyKind::FloatObstacle, identity, shape, vel)
}

pub fn create_goal_slot(identity: Identity, shape: Shape, vel: Vec2) -> Body {
    create_body(BodyKind::GoalSlot, identity, shape, vel)
}

/// The player at its spawn point: bottom centre, standing still.
pub fn create_player() -> Body {
    Body {
        id: BodyKind::Player.name().to_string(),
        create_time: START_TIME,
        kind: BodyKind::Player,
        pos: Vec2::new(PLAYER_START_X, PLAYER_START_Y),
        vel: Vec2::ZERO,
        width: PLAYER_EXTENT,
        height: PLAYER_EXTENT,
        color: PLAYER_COLOR,
        collided: false,
    }
}

// ── Lanes ────────────────────────────────────────────────────────────────────

fn identity(index: usize) -> Identity {
    Identity {
        id: index.to_string(),
        create_time: START_TIME,
    }
}

/// One lane of `OBJECTS_PER_ROW` bodies spaced 200px apart. `first_index`
/// keeps ids unique when a kind has several lanes.
fn lane(
    create: fn(Identity, Shape, Vec2) -> Body,
    first_index: usize,
    y: f64,
    (width, height): (f64, f64),
    color: &'static str,
    vel: Vec2,
) -> Vec<Body> {
    (0..OBJECTS_PER_ROW)
        .map(|i| {
            let shape = Shape {
                pos: Vec2::new(200.0 * (i + 1) as f64, y),
                color,
                width,
                height,
                collided: false,
            };
            create(identity(first_index + i), shape, vel)
        })
        .collect()
}

/// Three lanes of traffic with alternating directions.
pub fn start_cars() -> Vec<Body> {
    let size = (70.0, 50.0);
    let mut cars = lane(create_car, 0, 500.0, size, CAR_COLOR, Vec2::new(-0.7, 0.0));
    cars.extend(lane(
        create_car,
        OBJECTS_PER_ROW,
        450.0,
        size,
        CAR_COLOR,
        Vec2::new(1.0, 0.0),
    ));
    cars.extend(lane(
        create_car,
        OBJECTS_PER_ROW * 2,
        400.0,
        size,
        CAR_COLOR,
        Vec2::new(-2.0, 0.0),
    ));
    cars
}

/// The static river strip.
pub fn start_water() -> Body {
    create_water(
        Identity {
            id: "water".to_string(),
            create_time: START_TIME,
        },
        Shape {
            pos: Vec2::new(0.0, 200.0),
            color: WATER_COLOR,
            width: BOARD_SIZE,
            height: 150.0,
            collided: false,
        },
        Vec2::ZERO,
    )
}

pub fn start_platforms() -> Vec<Body> {
    lane(
        create_platform,
        0,
        300.0,
        (100.0, 50.0),
        PLATFORM_COLOR,
        Vec2::new(-2.0, 0.0),
    )
}

/// Two lanes drifting in opposite directions across the upper river.
pub fn start_float_obstacles() -> Vec<Body> {
    let size = (50.0, 50.0);
    let mut floats = lane(
        create_float_obstacle,
        0,
        250.0,
        size,
        FLOAT_COLOR,
        Vec2::new(2.0, 0.0),
    );
    floats.extend(lane(
        create_float_obstacle,
        OBJECTS_PER_ROW,
        200.0,
        size,
        FLOAT_COLOR,
        Vec2::new(-2.0, 0.0),
    ));
    floats
}

/// Evenly spaced slots along the top.
pub fn start_goal_slots() -> Vec<Body> {
    (0..GOAL_SLOTS)
        .map(|i| {
            create_goal_slot(
                identity(i),
                Shape {
                    pos: Vec2::new(100.0 * (i + 1) as f64, 100.0),
                    color: GOAL_COLOR,
                    width: 50.0,
                    height: 50.0,
                    collided: false,
                },
                Vec2::ZERO,
            )
        })
        .collect()
}

/// Build the starting board. Score and highscore start at zero.
pub fn initial_state() -> GameState {
    GameState {
        time: START_TIME,
        score: 0,
        highscore: 0,
        player_max_y: PLAYER_START_Y,
        game_over: false,
        player: create_player(),
        obstacles: start_cars(),
        water: start_water(),
        platforms: start_platforms(),
        float_obstacles: start_float_obstacles(),
        goal_slots: start_goal_slots(),
    }
}
