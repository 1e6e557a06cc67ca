use entity_showcase::Vector2;
use rstest::rstest;

#[rstest]
#[case(3, 4, 5.0)]
#[case(0, 0, 0.0)]
#[case(-3, 4, 5.0)]
#[case(5, 12, 13.0)]
#[case(0, -9, 9.0)]
fn test_distance(#[case] x: i32, #[case] y: i32, #[case] expected: f64) {
    assert_eq!(Vector2::new(x, y).distance(), expected);
}

#[test]
fn test_fields_are_public_and_mutable() {
    let mut point = Vector2::new(1, 1);
    point.x = 3;
    point.y = 4;
    assert_eq!(point.distance(), 5.0);
    assert_eq!(point, Vector2::from((3, 4)));
}

#[test]
fn test_large_coordinates_do_not_overflow() {
    let d = Vector2::new(i32::MAX, i32::MAX).distance();
    let expected = f64::from(i32::MAX) * std::f64::consts::SQRT_2;
    assert!((d - expected).abs() / expected < 1e-12);
}
