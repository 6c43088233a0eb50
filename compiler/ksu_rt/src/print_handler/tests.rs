#![allow(clippy::unwrap_used, clippy::expect_used, reason = "Tests can panic")]

use pretty_assertions::assert_eq;

use super::*;

#[test]
fn buffer_keeps_one_line_per_print() {
    let buffer = BufferPrintHandler::new();
    buffer.println("1 . 2 . nil");
    buffer.println("#t");
    assert_eq!(buffer.contents(), "1 . 2 . nil\n#t\n");
}

#[test]
fn only_buffers_capture() {
    let buffer = buffer_handler();
    buffer.println("hello");
    assert_eq!(buffer.captured().as_deref(), Some("hello\n"));

    let silent = silent_handler();
    silent.println("hello");
    assert_eq!(silent.captured(), None);
    assert_eq!(stdout_handler().captured(), None);
}

#[test]
fn set_print_handler_swaps_and_returns_previous() {
    let buffer = buffer_handler();
    let previous = set_print_handler(Arc::clone(&buffer));
    print_line("captured");
    assert!(Arc::ptr_eq(&active_print_handler(), &buffer));

    let restored = set_print_handler(previous);
    assert!(Arc::ptr_eq(&restored, &buffer));
    assert_eq!(buffer.captured().as_deref(), Some("captured\n"));
}

#[test]
fn active_handler_is_per_thread() {
    let buffer = buffer_handler();
    let previous = set_print_handler(Arc::clone(&buffer));

    std::thread::spawn(|| print_line("elsewhere")).join().unwrap();
    print_line("here");

    set_print_handler(previous);
    assert_eq!(buffer.captured().as_deref(), Some("here\n"));
}
