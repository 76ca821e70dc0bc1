use shapeboard_core::{BoardError, Color, FillMode};
use shapeboard_designer::{Board, LoadReport, Point, Selector, Shape, ShapeType};
use tempfile::TempDir;

fn populated() -> Board {
    let mut board = Board::new();
    let shapes = [
        (ShapeType::Circle, FillMode::Fill, Color::Red, 10, 10, vec![5]),
        (ShapeType::Rectangle, FillMode::Frame, Color::Blue, 78, 0, vec![5, 5]),
        (ShapeType::Triangle, FillMode::Fill, Color::Default, 40, 3, vec![4]),
    ];
    for (kind, fill, color, x, y, sizes) in shapes {
        let shape = Shape::build(kind, fill, color, Point::new(x, y), &sizes).unwrap();
        board.add(shape).unwrap();
    }
    board
}

#[test]
fn test_save_writes_one_line_per_shape() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("board.txt");
    let board = populated();

    assert_eq!(board.save(&path), Ok(3));
    let content = std::fs::read_to_string(&path).unwrap();
    assert_eq!(
        content,
        "fill circle red 10 10 5\nframe rectangle blue 78 0 5 5\nfill triangle default 40 3 4\n"
    );
}

#[test]
fn test_save_then_load_restores_board() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("board.txt");
    let mut board = populated();
    board.select(Selector::Id(2)).unwrap();
    board.remove().unwrap();
    let expected: Vec<String> = vec![
        "1 fill circle red 10 10 5".to_string(),
        "2 fill triangle default 40 3 4".to_string(),
    ];

    board.save(&path).unwrap();
    board.clear().unwrap();
    let report = board.load(&path).unwrap();

    assert_eq!(report, LoadReport { loaded: 2, skipped: 0 });
    assert_eq!(board.list(), expected);
    assert_eq!(board.render_order(), vec![1, 2]);
    assert_eq!(board.next_id(), 3);
}

#[test]
fn test_load_replaces_existing_shapes() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("board.txt");
    std::fs::write(&path, "frame square green 1 1 3\n").unwrap();

    let mut board = populated();
    board.select(Selector::Id(1)).unwrap();
    board.load(&path).unwrap();

    assert_eq!(board.list(), vec!["1 frame square green 1 1 3".to_string()]);
    assert_eq!(board.selected_id(), None);
}

#[test]
fn test_load_missing_file_leaves_board_untouched() {
    let dir = TempDir::new().unwrap();
    let mut board = populated();
    let before = board.list();

    let err = board.load(dir.path().join("missing.txt")).unwrap_err();
    assert!(matches!(err, BoardError::Io { .. }));
    assert_eq!(board.list(), before);
}

#[test]
fn test_save_to_unwritable_path_fails() {
    let dir = TempDir::new().unwrap();
    let board = populated();
    let err = board.save(dir.path().join("no_such_dir").join("board.txt"));
    assert!(matches!(err, Err(BoardError::Io { .. })));
}

#[test]
fn test_load_skips_bad_lines() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("board.txt");
    let text = "\
fill circle red 10 10 5
this is not a shape
fill circle red 10 10 5

frame rectangle blue 500 500 3 3
fill square yellow 2 2 0
frame triangle green 20 5 3
";
    std::fs::write(&path, text).unwrap();

    let mut board = Board::new();
    let report = board.load(&path).unwrap();

    assert_eq!(report, LoadReport { loaded: 2, skipped: 4 });
    assert_eq!(
        board.list(),
        vec![
            "1 fill circle red 10 10 5".to_string(),
            "2 frame triangle green 20 5 3".to_string(),
        ]
    );
}

#[test]
fn test_load_empty_file() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("empty.txt");
    std::fs::write(&path, "").unwrap();

    let mut board = populated();
    assert_eq!(board.load(&path), Ok(LoadReport::default()));
    assert!(board.is_empty());
    assert_eq!(board.next_id(), 1);
}
