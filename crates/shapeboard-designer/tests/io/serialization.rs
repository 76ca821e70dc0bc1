use shapeboard_core::{CodecError, Color, FillMode};
use shapeboard_designer::serialization::{decode_line, encode_shape, encode_shapes};
use shapeboard_designer::{Point, Shape, ShapeType};

#[test]
fn test_encode_matches_list_description() {
    let shape = Shape::build(
        ShapeType::Rectangle,
        FillMode::Frame,
        Color::Blue,
        Point::new(-3, 4),
        &[7, 2],
    )
    .unwrap();
    assert_eq!(encode_shape(&shape), "frame rectangle blue -3 4 7 2");
}

#[test]
fn test_decode_accepts_any_whitespace_and_case() {
    let shape = decode_line("  FILL\tTriangle  Yellow 5 6   3 ").unwrap();
    assert_eq!(shape.shape_type(), ShapeType::Triangle);
    assert_eq!(shape.fill(), FillMode::Fill);
    assert_eq!(shape.color(), Color::Yellow);
    assert_eq!(shape.origin(), Point::new(5, 6));
    assert_eq!(encode_shape(&shape), "fill triangle yellow 5 6 3");
}

#[test]
fn test_each_shape_type_survives_a_line() {
    let lines = [
        "fill triangle red 10 2 4",
        "frame rectangle green 0 0 5 3",
        "fill square default 40 12 6",
        "frame circle blue 20 10 7",
    ];
    for line in lines {
        let shape = decode_line(line).unwrap();
        assert_eq!(encode_shape(&shape), line);
    }
}

#[test]
fn test_square_with_two_sizes_is_rejected() {
    assert!(matches!(
        decode_line("fill square red 1 1 3 3"),
        Err(CodecError::TokenCount {
            expected: 6,
            got: 7,
            ..
        })
    ));
}

#[test]
fn test_encode_shapes_terminates_every_line() {
    let a = decode_line("fill circle red 10 10 5").unwrap();
    let b = decode_line("frame square blue 0 0 3").unwrap();
    assert_eq!(
        encode_shapes([&a, &b]),
        "fill circle red 10 10 5\nframe square blue 0 0 3\n"
    );
    assert_eq!(encode_shapes(std::iter::empty()), "");
}
