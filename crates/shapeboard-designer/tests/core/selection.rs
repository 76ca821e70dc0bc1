use shapeboard_core::{BoardError, Color, FillMode};
use shapeboard_designer::{Board, Point, Selector, Shape, ShapeType};

fn square(fill: FillMode, color: Color, x: i32, y: i32, side: i32) -> Shape {
    Shape::build(ShapeType::Square, fill, color, Point::new(x, y), &[side]).unwrap()
}

#[test]
fn test_select_by_id() {
    let mut board = Board::new();
    let id = board.add(square(FillMode::Fill, Color::Red, 0, 0, 3)).unwrap();
    assert_eq!(board.select(Selector::Id(id)), Ok(id));
    assert_eq!(board.selected_id(), Some(id));
}

#[test]
fn test_failed_select_keeps_previous_selection() {
    let mut board = Board::new();
    let id = board.add(square(FillMode::Fill, Color::Red, 0, 0, 3)).unwrap();
    board.select(Selector::Id(id)).unwrap();

    assert!(matches!(
        board.select(Selector::Id(42)),
        Err(BoardError::NotFound { .. })
    ));
    assert!(matches!(
        board.select(Selector::At(Point::new(40, 20))),
        Err(BoardError::NotFound { .. })
    ));
    assert_eq!(board.selected_id(), Some(id));
}

#[test]
fn test_select_at_uses_hit_test() {
    let mut board = Board::new();
    let id = board.add(square(FillMode::Frame, Color::Red, 0, 0, 5)).unwrap();

    assert!(board.select(Selector::At(Point::new(2, 2))).is_err());
    assert_eq!(board.select(Selector::At(Point::new(4, 2))), Ok(id));
}

#[test]
fn test_select_at_prefers_lowest_id() {
    let mut board = Board::new();
    let lower = board.add(square(FillMode::Fill, Color::Red, 0, 0, 4)).unwrap();
    let upper = board.add(square(FillMode::Fill, Color::Blue, 1, 1, 4)).unwrap();

    // The higher id is painted on top, but the lower id is found first.
    assert_eq!(board.rasterize().get(2, 2), Some('b'));
    assert_eq!(board.select(Selector::At(Point::new(2, 2))), Ok(lower));
    assert_eq!(board.select(Selector::At(Point::new(4, 4))), Ok(upper));
}

#[test]
fn test_select_removed_id_fails() {
    let mut board = Board::new();
    let id = board.add(square(FillMode::Fill, Color::Red, 0, 0, 4)).unwrap();
    board.select(Selector::Id(id)).unwrap();
    board.remove().unwrap();
    assert!(board.select(Selector::Id(id)).is_err());
}
