use super::*;
use pretty_assertions::assert_eq;

#[test]
fn buffer_appends_newline_per_line() {
    let handler = buffer_handler();
    handler.println("15");
    assert_eq!(handler.get_output(), "15\n");
}

#[test]
fn buffer_keeps_program_order() {
    let handler = buffer_handler();
    for line in ["1", "2", "3"] {
        handler.println(line);
    }
    assert_eq!(handler.get_output(), "1\n2\n3\n");
}

#[test]
fn stdout_captures_nothing() {
    assert_eq!(stdout_handler().get_output(), "");
}

#[test]
fn clones_share_one_buffer() {
    let handler = buffer_handler();
    let other = Arc::clone(&handler);
    other.println("42");
    assert_eq!(handler.get_output(), "42\n");
}
