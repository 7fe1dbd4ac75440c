use frog_crossing::board::{create_body, create_player};
use frog_crossing::constants::BOARD_SIZE;
use frog_crossing::entities::{Body, BodyKind, Identity, Shape};
use frog_crossing::physics::*;
use frog_crossing::vector::Vec2;

fn rect(x: f64, y: f64, width: f64, height: f64) -> Body {
    create_body(
        BodyKind::Car,
        Identity {
            id: "t".to_string(),
            create_time: 0,
        },
        Shape {
            pos: Vec2::new(x, y),
            color: "red",
            width,
            height,
            collided: false,
        },
        Vec2::ZERO,
    )
}

// ── overlap ───────────────────────────────────────────────────────────────────

#[test]
fn overlap_detects_intersection() {
    let a = rect(0.0, 0.0, 50.0, 50.0);
    let b = rect(25.0, 25.0, 50.0, 50.0);
    assert!(overlap(&a, &b));
    assert!(overlap(&b, &a));
}

#[test]
fn overlap_false_when_apart() {
    let a = rect(0.0, 0.0, 50.0, 50.0);
    let b = rect(100.0, 0.0, 50.0, 50.0);
    let c = rect(0.0, 100.0, 50.0, 50.0);
    assert!(!overlap(&a, &b));
    assert!(!overlap(&a, &c));
}

#[test]
fn touching_edges_do_not_overlap() {
    let a = rect(0.0, 0.0, 50.0, 50.0);
    assert!(!overlap(&a, &rect(50.0, 0.0, 50.0, 50.0))); // right edge
    assert!(!overlap(&a, &rect(-50.0, 0.0, 50.0, 50.0))); // left edge
    assert!(!overlap(&a, &rect(0.0, 50.0, 50.0, 50.0))); // bottom edge
    assert!(!overlap(&a, &rect(0.0, -50.0, 50.0, 50.0))); // top edge
    assert!(!overlap(&a, &rect(50.0, 50.0, 10.0, 10.0))); // corner
}

#[test]
fn containment_counts_as_overlap() {
    let outer = rect(0.0, 0.0, 100.0, 100.0);
    let inner = rect(40.0, 40.0, 10.0, 10.0);
    assert!(overlap(&outer, &inner));
    assert!(overlap(&inner, &outer));
}

#[test]
fn identical_rectangles_overlap() {
    let p = create_player();
    assert!(overlap(&p, &p.clone()));
}

// ── clamp_to_board ────────────────────────────────────────────────────────────

#[test]
fn clamp_is_identity_inside_the_board() {
    for &(x, y) in &[(0.0, 0.0), (550.0, 550.0), (300.0, 125.5)] {
        assert_eq!(clamp_to_board(Vec2::new(x, y)), Vec2::new(x, y));
    }
}

#[test]
fn clamp_never_leaves_the_board() {
    let inputs = [-1000.0, -50.0, -0.1, 551.0, 600.0, 10_000.0];
    for &x in &inputs {
        for &y in &inputs {
            let p = clamp_to_board(Vec2::new(x, y));
            assert!((0.0..=550.0).contains(&p.x), "x={} -> {}", x, p.x);
            assert!((0.0..=550.0).contains(&p.y), "y={} -> {}", y, p.y);
        }
    }
    let corner = clamp_to_board(Vec2::new(-10.0, 700.0));
    assert_eq!(corner, Vec2::new(0.0, 550.0));
}

// ── wrap_toroidally ───────────────────────────────────────────────────────────

#[test]
fn wrap_far_left_moves_to_the_right() {
    assert_eq!(wrap_toroidally(Vec2::new(-51.0, 0.0)).x, -51.0 + BOARD_SIZE);
    assert_eq!(wrap_toroidally(Vec2::new(0.0, -60.0)).y, -60.0 + BOARD_SIZE);
}

#[test]
fn wrap_far_right_moves_to_the_left() {
    assert_eq!(wrap_toroidally(Vec2::new(601.0, 0.0)).x, 601.0 - BOARD_SIZE);
    assert_eq!(wrap_toroidally(Vec2::new(0.0, 650.0)).y, 650.0 - BOARD_SIZE);
}

#[test]
fn wrap_leaves_in_range_values_alone() {
    for &v in &[-50.0, -20.0, 0.0, 300.0, 600.0] {
        assert_eq!(wrap_toroidally(Vec2::new(v, v)), Vec2::new(v, v));
    }
}

#[test]
fn wrap_axes_are_independent() {
    assert_eq!(
        wrap_toroidally(Vec2::new(-70.0, 300.0)),
        Vec2::new(530.0, 300.0)
    );
}

// ── move_body ─────────────────────────────────────────────────────────────────

#[test]
fn move_body_applies_velocity_and_wraps() {
    let mut car = rect(-49.0, 400.0, 70.0, 50.0);
    car.vel = Vec2::new(-2.0, 0.0);
    let moved = move_body(&car);
    assert_eq!(moved.pos, Vec2::new(-51.0 + BOARD_SIZE, 400.0));
    assert_eq!(moved.vel, car.vel);
    assert_eq!(moved.id, car.id);
    // original untouched
    assert_eq!(car.pos.x, -49.0);
}
