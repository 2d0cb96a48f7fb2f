//! Contract tests for window discovery
//!
//! Runs the finder against an in-memory desktop and checks which windows
//! come back and with what geometry.

use std::collections::HashSet;
use wintile::{
    models::{RawRect, WindowFilter, WindowHandle, WINDOW_TEXT_CAPACITY},
    platform::{InMemoryWindow, InMemoryWindowSystem},
    services::WindowFinder,
};

const PIP_CLASS: &str = "MozillaDialogClass";
const PIP_TITLE: &str = "Picture-in-Picture";

fn pip(handle: u64, rect: RawRect) -> InMemoryWindow {
    InMemoryWindow::new(handle, PIP_CLASS, PIP_TITLE, rect)
}

fn desktop() -> InMemoryWindowSystem {
    InMemoryWindowSystem::new_with(
        vec![
            pip(0x30, RawRect::new(10, 10, 490, 280)),
            InMemoryWindow::new(
                0x10,
                "MozillaWindowClass",
                PIP_TITLE,
                RawRect::new(0, 0, 800, 600),
            ),
            pip(0x20, RawRect::new(-1500, 200, -1020, 470)),
            InMemoryWindow::new(
                0x40,
                PIP_CLASS,
                "Picture-in-Picture ",
                RawRect::new(0, 0, 100, 100),
            ),
            pip(0x50, RawRect::default()),
            InMemoryWindow::new(0x60, "Notepad", "Untitled", RawRect::new(5, 5, 300, 300)),
        ],
        Vec::new(),
    )
}

fn handles(raw: &[u64]) -> HashSet<WindowHandle> {
    raw.iter().copied().map(WindowHandle::new).collect()
}

#[test]
fn test_find_windows_requires_exact_class_and_title() {
    let system = desktop();
    let finder = WindowFinder::new(&system);

    let found = finder.find_windows(&WindowFilter::default()).unwrap();

    // 0x50 matches by name; its empty geometry is dropped later.
    assert_eq!(found, handles(&[0x20, 0x30, 0x50]));
}

#[test]
fn test_collect_windows_drops_empty_bounds() {
    let system = desktop();
    let finder = WindowFinder::new(&system);

    let windows = finder.collect_windows(&WindowFilter::default()).unwrap();

    assert!(windows
        .iter()
        .all(|window| window.handle != WindowHandle::new(0x50)));
    assert_eq!(windows.len(), 2);
}

#[test]
fn test_collect_windows_orders_by_handle() {
    let system = desktop();
    let finder = WindowFinder::new(&system);

    let windows = finder.collect_windows(&WindowFilter::default()).unwrap();
    let order: Vec<u64> = windows.iter().map(|window| window.handle.raw()).collect();

    assert_eq!(order, vec![0x20, 0x30]);
}

#[test]
fn test_collect_windows_reports_screen_geometry() {
    let system = desktop();
    let finder = WindowFinder::new(&system);

    let windows = finder.collect_windows(&WindowFilter::default()).unwrap();
    let secondary = windows[0];

    assert_eq!(secondary.position.x, -1500);
    assert_eq!(secondary.position.y, 200);
    assert_eq!(secondary.size.width, 480);
    assert_eq!(secondary.size.height, 270);
}

#[test]
fn test_failed_queries_skip_only_that_window() {
    let system = desktop().with_failing_queries(0x30);
    let finder = WindowFinder::new(&system);

    let windows = finder.collect_windows(&WindowFilter::default()).unwrap();
    let order: Vec<u64> = windows.iter().map(|window| window.handle.raw()).collect();

    assert_eq!(order, vec![0x20]);
}

#[test]
fn test_custom_filter_selects_other_windows() {
    let system = desktop();
    let finder = WindowFinder::new(&system);

    let found = finder
        .find_windows(&WindowFilter::new("Notepad", "Untitled"))
        .unwrap();

    assert_eq!(found, handles(&[0x60]));
}

#[test]
fn test_overlong_titles_compare_after_truncation() {
    let long_title = "t".repeat(WINDOW_TEXT_CAPACITY * 2);
    let system = InMemoryWindowSystem::new_with(
        vec![InMemoryWindow::new(
            1,
            PIP_CLASS,
            long_title.clone(),
            RawRect::new(0, 0, 10, 10),
        )],
        Vec::new(),
    );
    let finder = WindowFinder::new(&system);

    let full = finder
        .find_windows(&WindowFilter::new(PIP_CLASS, long_title))
        .unwrap();
    assert!(full.is_empty());

    let truncated = finder
        .find_windows(&WindowFilter::new(
            PIP_CLASS,
            "t".repeat(WINDOW_TEXT_CAPACITY - 1),
        ))
        .unwrap();
    assert_eq!(truncated, handles(&[1]));
}

#[test]
fn test_no_matches_is_not_an_error() {
    let system = InMemoryWindowSystem::default();
    let finder = WindowFinder::new(&system);

    let windows = finder.collect_windows(&WindowFilter::default()).unwrap();
    assert!(windows.is_empty());
}
