//! Unit tests for the grid layout
//!
//! Covers grid sizing, the aspect-corrected target size, the right-aligned
//! x position and row-major cell assignment.

use wintile::{
    models::{Display, Point, Rect, Size, TileableWindow, WindowHandle},
    services::tiling_engine::{tile, GridDimensions, TileCommand},
};

/// Display whose working area is `width` x `height` at horizontal `offset`
fn create_test_display(offset: i32, width: i32, height: i32) -> Display {
    Display::new(
        "TEST",
        Rect::new(offset, 0, width, height + 40),
        Rect::new(offset, 0, width, height),
        offset == 0,
    )
}

fn create_window(handle: u64, width: i32, height: i32) -> TileableWindow {
    TileableWindow::new(
        WindowHandle::new(handle),
        Point::new(100, 100),
        Size::new(width, height),
    )
}

fn create_windows(count: u64, width: i32, height: i32) -> Vec<TileableWindow> {
    (1..=count)
        .map(|handle| create_window(handle, width, height))
        .collect()
}

fn cell_width_for(display: &Display, count: usize) -> i32 {
    GridDimensions::for_count(count, display.working_area)
        .unwrap()
        .cell_width
}

#[test]
fn test_five_windows_use_three_by_two() {
    let grid = GridDimensions::for_count(5, Rect::new(0, 0, 1920, 1040)).unwrap();

    assert_eq!(grid.columns, 3);
    assert_eq!(grid.rows, 2);
    assert_eq!(grid.capacity(), 6);
}

#[test]
fn test_four_windows_split_working_area_evenly() {
    let grid = GridDimensions::for_count(4, Rect::new(0, 0, 1000, 800)).unwrap();

    assert_eq!(grid.columns, 2);
    assert_eq!(grid.rows, 2);
    assert_eq!(grid.cell_width, 500);
    assert_eq!(grid.cell_height, 400);
}

#[test]
fn test_cell_size_truncates() {
    let grid = GridDimensions::for_count(3, Rect::new(0, 0, 1001, 799)).unwrap();

    assert_eq!(grid.columns, 2);
    assert_eq!(grid.rows, 2);
    assert_eq!(grid.cell_width, 500);
    assert_eq!(grid.cell_height, 399);
}

#[test]
fn test_grid_bounds_window_count() {
    let area = Rect::new(0, 0, 2560, 1400);
    for count in 1..=1000 {
        let grid = GridDimensions::for_count(count, area).unwrap();
        assert!(grid.rows * grid.columns >= count, "count {}", count);
        assert!((grid.rows - 1) * grid.columns < count, "count {}", count);
    }
}

#[test]
fn test_empty_input_produces_no_commands() {
    let commands = tile(&[], &create_test_display(0, 1000, 800));
    assert!(commands.is_empty());
}

#[test]
fn test_aspect_ratio_crosses_dimensions() {
    let display = create_test_display(0, 1000, 800);
    let commands = tile(&create_windows(4, 1600, 900), &display);

    assert_eq!(commands.len(), 4);
    for command in &commands {
        assert_eq!(command.target.width, 711);
        assert_eq!(command.target.height, 281);
    }
}

#[test]
fn test_portrait_window_gets_narrow_target() {
    let display = create_test_display(0, 1000, 800);
    let commands = tile(&[create_window(1, 900, 1600)], &display);

    // One window: one 1000 x 800 cell. 800 * 0.5625 = 450, 1000 / 0.5625 = 1777.78.
    assert_eq!(commands[0].target.width, 450);
    assert_eq!(commands[0].target.height, 1778);
}

#[test]
fn test_right_edge_lands_on_cell_boundary() {
    let display = create_test_display(1920, 1000, 800);
    let windows = vec![
        create_window(1, 1600, 900),
        create_window(2, 640, 480),
        create_window(3, 300, 900),
        create_window(4, 1000, 1000),
        create_window(5, 2560, 1080),
    ];
    let commands = tile(&windows, &display);
    let cell_width = cell_width_for(&display, windows.len());
    let offset = display.bounds.x;

    for command in &commands {
        let column = command.column as i32;
        let target_width = command.target.width;
        let expected_x = offset + column * target_width + (cell_width - target_width);

        assert_eq!(command.target.x, expected_x, "window {}", command.handle);
        assert_eq!(
            command.target.x + target_width,
            offset + column * target_width + cell_width,
            "window {}",
            command.handle
        );
    }
}

#[test]
fn test_y_follows_row_and_target_height() {
    let display = create_test_display(0, 1000, 800);
    let commands = tile(&create_windows(4, 1600, 900), &display);

    let ys: Vec<i32> = commands.iter().map(|command| command.target.y).collect();
    assert_eq!(ys, vec![0, 0, 281, 281]);
}

#[test]
fn test_display_offset_shifts_x_only() {
    let windows = create_windows(4, 1600, 900);
    let left = tile(&windows, &create_test_display(0, 1000, 800));
    let right = tile(&windows, &create_test_display(1920, 1000, 800));

    for (a, b) in left.iter().zip(right.iter()) {
        assert_eq!(b.target.x - a.target.x, 1920);
        assert_eq!(a.target.y, b.target.y);
        assert_eq!(a.target.width, b.target.width);
        assert_eq!(a.target.height, b.target.height);
    }

    let xs: Vec<i32> = right.iter().map(|command| command.target.x).collect();
    assert_eq!(xs, vec![1709, 2420, 1709, 2420]);
}

#[test]
fn test_row_major_assignment_leaves_last_row_short() {
    let display = create_test_display(0, 1920, 1040);
    let commands: Vec<TileCommand> = tile(&create_windows(5, 640, 360), &display);

    let cells: Vec<(usize, usize)> = commands
        .iter()
        .map(|command| (command.row, command.column))
        .collect();
    assert_eq!(cells, vec![(0, 0), (0, 1), (0, 2), (1, 0), (1, 1)]);

    let handles: Vec<u64> = commands.iter().map(|command| command.handle.raw()).collect();
    assert_eq!(handles, vec![1, 2, 3, 4, 5]);
}

#[test]
fn test_source_geometry_is_preserved() {
    let display = create_test_display(0, 1000, 800);
    let commands = tile(&[create_window(9, 1280, 720)], &display);

    assert_eq!(commands[0].source, Rect::new(100, 100, 1280, 720));
}
