use frog_crossing::vector::Vec2;

#[test]
fn add_and_subtract() {
    let a = Vec2::new(3.0, 4.0);
    let b = Vec2::new(1.0, -2.0);
    assert_eq!(a.add(b), Vec2::new(4.0, 2.0));
    assert_eq!(a.subtract(b), Vec2::new(2.0, 6.0));
    assert_eq!(a + b, a.add(b));
    assert_eq!(a - b, a.subtract(b));
}

#[test]
fn scale_and_negate() {
    let v = Vec2::new(1.5, -2.0);
    assert_eq!(v.scale(2.0), Vec2::new(3.0, -4.0));
    assert_eq!(v * 2.0, v.scale(2.0));
    assert_eq!(-v, Vec2::new(-1.5, 2.0));
}

#[test]
fn length_is_euclidean() {
    assert_eq!(Vec2::new(3.0, 4.0).length(), 5.0);
    assert_eq!(Vec2::ZERO.length(), 0.0);
}

#[test]
fn orthogonal_swaps_and_negates() {
    let v = Vec2::new(2.0, 5.0);
    assert_eq!(v.orthogonal(), Vec2::new(5.0, -2.0));
    // A quarter turn keeps the length.
    assert_eq!(v.orthogonal().length(), v.length());
}

#[test]
fn zero_is_identity_for_add() {
    let v = Vec2::new(-7.0, 0.25);
    assert_eq!(v + Vec2::ZERO, v);
    assert_eq!(Vec2::default(), Vec2::ZERO);
}

#[test]
fn operations_do_not_mutate_operands() {
    let a = Vec2::new(1.0, 1.0);
    let _ = a + Vec2::new(5.0, 5.0);
    let _ = a.scale(10.0);
    assert_eq!(a, Vec2::new(1.0, 1.0));
}
