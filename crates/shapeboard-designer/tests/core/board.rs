use shapeboard_core::{BoardError, Color, FillMode, RejectReason};
use shapeboard_designer::{Board, Point, Selector, Shape, ShapeType};

fn circle(fill: FillMode, color: Color, x: i32, y: i32, r: i32) -> Shape {
    Shape::build(ShapeType::Circle, fill, color, Point::new(x, y), &[r]).unwrap()
}

fn rect(x: i32, y: i32, w: i32, h: i32) -> Shape {
    Shape::build(
        ShapeType::Rectangle,
        FillMode::Frame,
        Color::Blue,
        Point::new(x, y),
        &[w, h],
    )
    .unwrap()
}

#[test]
fn test_add_assigns_sequential_ids() {
    let mut board = Board::new();
    let id = board.add(circle(FillMode::Fill, Color::Red, 10, 10, 5)).unwrap();
    assert_eq!(id, 1);
    assert_eq!(board.list(), vec!["1 fill circle red 10 10 5".to_string()]);

    let second = board.add(rect(0, 0, 3, 2)).unwrap();
    assert_eq!(second, 2);
    assert_eq!(board.render_order(), vec![1, 2]);
}

#[test]
fn test_duplicate_is_rejected_without_advancing_ids() {
    let mut board = Board::new();
    board.add(circle(FillMode::Fill, Color::Red, 10, 10, 5)).unwrap();
    let err = board
        .add(circle(FillMode::Fill, Color::Red, 10, 10, 5))
        .unwrap_err();

    assert_eq!(err, BoardError::rejected(RejectReason::Duplicate));
    assert_eq!(board.len(), 1);
    assert_eq!(board.next_id(), 2);

    // Any differing field makes it a different shape.
    assert_eq!(
        board.add(circle(FillMode::Frame, Color::Red, 10, 10, 5)),
        Ok(2)
    );
}

#[test]
fn test_off_board_shapes_are_rejected() {
    let mut board = Board::new();
    assert_eq!(
        board.add(circle(FillMode::Fill, Color::Red, 100, 100, 5)),
        Err(BoardError::rejected(RejectReason::OffBoard))
    );
    assert_eq!(
        board.add(rect(80, 0, 5, 5)),
        Err(BoardError::rejected(RejectReason::OffBoard))
    );
    assert_eq!(
        board.add(rect(-5, 0, 5, 5)),
        Err(BoardError::rejected(RejectReason::OffBoard))
    );
    assert!(board.is_empty());
    assert_eq!(board.next_id(), 1);
}

#[test]
fn test_partial_overlap_is_accepted() {
    let mut board = Board::new();
    assert!(board.add(rect(78, 0, 5, 5)).is_ok());
    assert!(board.add(rect(-4, -4, 5, 5)).is_ok());
    assert!(board.add(circle(FillMode::Frame, Color::Green, -5, 3, 5)).is_ok());

    // Triangle bounds use the base span: apex off the left edge, base reaching column 0.
    let tri = Shape::build(
        ShapeType::Triangle,
        FillMode::Fill,
        Color::Yellow,
        Point::new(-2, 0),
        &[3],
    )
    .unwrap();
    assert!(board.add(tri).is_ok());
    assert_eq!(board.len(), 4);
}

#[test]
fn test_non_positive_sizes_are_rejected() {
    let mut board = Board::new();
    assert_eq!(
        board.add(rect(1, 1, 0, 3)),
        Err(BoardError::rejected(RejectReason::Degenerate))
    );
    assert_eq!(
        board.add(circle(FillMode::Fill, Color::Red, 5, 5, -1)),
        Err(BoardError::rejected(RejectReason::Degenerate))
    );
}

#[test]
fn test_custom_board_size_changes_placement() {
    let mut board = Board::with_size(10, 5);
    assert_eq!(
        board.add(rect(10, 0, 2, 2)),
        Err(BoardError::rejected(RejectReason::OffBoard))
    );
    assert!(board.add(rect(9, 4, 2, 2)).is_ok());
}

#[test]
fn test_remove_requires_selection() {
    let mut board = Board::new();
    board.add(rect(0, 0, 3, 3)).unwrap();
    assert!(matches!(board.remove(), Err(BoardError::NotFound { .. })));
    assert_eq!(board.len(), 1);
}

#[test]
fn test_remove_deletes_selected_and_clears_selection() {
    let mut board = Board::new();
    board.add(rect(0, 0, 3, 3)).unwrap();
    let id = board.add(rect(5, 5, 3, 3)).unwrap();
    board.select(Selector::Id(id)).unwrap();

    assert_eq!(board.remove(), Ok(id));
    assert_eq!(board.selected_id(), None);
    assert_eq!(board.list(), vec!["1 frame rectangle blue 0 0 3 3".to_string()]);
    assert_eq!(board.render_order(), vec![1]);

    // Ids are not reused after a remove.
    assert_eq!(board.add(rect(9, 9, 1, 1)), Ok(3));
}

#[test]
fn test_edit_requires_selection() {
    let mut board = Board::new();
    board.add(rect(0, 0, 3, 3)).unwrap();
    assert_eq!(board.edit(4, Some(4)), Err(BoardError::SelectionRequired));
}

#[test]
fn test_edit_resizes_selected_shape() {
    let mut board = Board::new();
    let id = board.add(rect(0, 0, 3, 3)).unwrap();
    board.select(Selector::Id(id)).unwrap();

    board.edit(6, Some(2)).unwrap();
    assert_eq!(board.list(), vec!["1 frame rectangle blue 0 0 6 2".to_string()]);
}

#[test]
fn test_edit_with_wrong_size_count_keeps_shape() {
    let mut board = Board::new();
    let id = board.add(rect(0, 0, 3, 3)).unwrap();
    board.select(Selector::Id(id)).unwrap();

    assert!(matches!(
        board.edit(4, None),
        Err(BoardError::InvalidArguments {
            expected: 2,
            got: 1,
            ..
        })
    ));
    assert_eq!(board.shape(id), Some(&rect(0, 0, 3, 3)));
}

#[test]
fn test_edit_rejected_when_shape_is_off_board() {
    let mut board = Board::new();
    let id = board.add(circle(FillMode::Fill, Color::Red, 10, 10, 2)).unwrap();
    board.select(Selector::Id(id)).unwrap();
    board.move_to(200, 200).unwrap();

    assert_eq!(
        board.edit(3, None),
        Err(BoardError::rejected(RejectReason::OffBoard))
    );
    assert_eq!(board.list(), vec!["1 fill circle red 200 200 2".to_string()]);

    assert_eq!(
        board.edit(0, None),
        Err(BoardError::rejected(RejectReason::Degenerate))
    );
}

#[test]
fn test_edit_may_create_an_equal_shape() {
    let mut board = Board::new();
    board.add(rect(0, 0, 3, 3)).unwrap();
    let id = board.add(rect(0, 0, 4, 4)).unwrap();
    board.select(Selector::Id(id)).unwrap();
    assert_eq!(board.edit(3, Some(3)), Ok(()));
}

#[test]
fn test_paint_recolors_selection() {
    let mut board = Board::new();
    assert_eq!(board.paint(Color::Green), Err(BoardError::SelectionRequired));

    let id = board.add(rect(0, 0, 3, 3)).unwrap();
    board.select(Selector::Id(id)).unwrap();
    board.paint(Color::Green).unwrap();
    assert_eq!(board.selected().map(|s| s.color()), Some(Color::Green));
}

#[test]
fn test_move_reports_change_and_always_promotes() {
    let mut board = Board::new();
    let first = board.add(rect(5, 5, 3, 3)).unwrap();
    let second = board.add(rect(10, 10, 3, 3)).unwrap();

    assert_eq!(board.move_to(0, 0), Err(BoardError::SelectionRequired));

    board.select(Selector::Id(first)).unwrap();
    assert_eq!(board.move_to(0, 0), Ok(true));
    assert_eq!(board.render_order(), vec![second, first]);
    assert_eq!(board.move_to(0, 0), Ok(false));
    assert_eq!(board.render_order(), vec![second, first]);

    board.select(Selector::Id(second)).unwrap();
    assert_eq!(board.move_to(10, 10), Ok(false));
    assert_eq!(board.render_order(), vec![first, second]);
}

#[test]
fn test_move_does_not_check_bounds() {
    let mut board = Board::new();
    let id = board.add(rect(5, 5, 3, 3)).unwrap();
    board.select(Selector::Id(id)).unwrap();
    assert_eq!(board.move_to(-100, 500), Ok(true));
    assert_eq!(board.rasterize().painted_count(), 0);
}

#[test]
fn test_undo_reverses_last_add() {
    let mut board = Board::new();
    board.add(rect(0, 0, 3, 3)).unwrap();
    let before = board.list();

    let id = board.add(circle(FillMode::Fill, Color::Red, 10, 10, 5)).unwrap();
    assert_eq!(board.undo(), Ok(id));
    assert_eq!(board.list(), before);
    assert_eq!(board.render_order(), vec![1]);
    assert_eq!(board.next_id(), 2);

    assert_eq!(board.undo(), Ok(1));
    assert_eq!(board.undo(), Err(BoardError::EmptyCollection));
}

#[test]
fn test_undo_clears_selection_of_undone_shape() {
    let mut board = Board::new();
    let id = board.add(rect(0, 0, 3, 3)).unwrap();
    board.select(Selector::Id(id)).unwrap();
    board.undo().unwrap();
    assert_eq!(board.selected_id(), None);
    assert_eq!(board.paint(Color::Red), Err(BoardError::SelectionRequired));
}

#[test]
fn test_undo_after_removing_latest_shape() {
    let mut board = Board::new();
    board.add(rect(0, 0, 3, 3)).unwrap();
    let latest = board.add(rect(5, 5, 3, 3)).unwrap();
    board.select(Selector::Id(latest)).unwrap();
    board.remove().unwrap();

    assert!(matches!(board.undo(), Err(BoardError::NotFound { .. })));
    assert_eq!(board.len(), 1);
    assert_eq!(board.next_id(), 3);
}

#[test]
fn test_clear() {
    let mut board = Board::new();
    assert_eq!(board.clear(), Err(BoardError::EmptyCollection));

    board.add(rect(0, 0, 3, 3)).unwrap();
    let id = board.add(rect(5, 5, 3, 3)).unwrap();
    board.select(Selector::Id(id)).unwrap();

    assert_eq!(board.clear(), Ok(2));
    assert!(board.is_empty());
    assert!(board.render_order().is_empty());
    assert_eq!(board.selected_id(), None);
    assert_eq!(board.add(rect(0, 0, 3, 3)), Ok(3));
}

#[test]
fn test_list_is_by_id_not_paint_order() {
    let mut board = Board::new();
    board.add(rect(0, 0, 3, 3)).unwrap();
    board.add(rect(5, 5, 3, 3)).unwrap();
    board.select(Selector::Id(1)).unwrap();
    board.move_to(1, 1).unwrap();

    assert_eq!(board.render_order(), vec![2, 1]);
    assert_eq!(
        board.list(),
        vec![
            "1 frame rectangle blue 1 1 3 3".to_string(),
            "2 frame rectangle blue 5 5 3 3".to_string(),
        ]
    );
}
