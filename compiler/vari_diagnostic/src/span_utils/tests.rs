use super::*;

#[test]
fn test_offset_to_line_col() {
    let source = "abc\ndefgh\nij";
    assert_eq!(offset_to_line_col(source, 0), (1, 1)); // 'a'
    assert_eq!(offset_to_line_col(source, 2), (1, 3)); // 'c'
    assert_eq!(offset_to_line_col(source, 4), (2, 1)); // 'd'
    assert_eq!(offset_to_line_col(source, 7), (2, 4)); // 'g'
    assert_eq!(offset_to_line_col(source, 10), (3, 1)); // 'i'
}

#[test]
fn test_offset_to_line_col_empty() {
    assert_eq!(offset_to_line_col("", 0), (1, 1));
}

#[test]
fn test_offset_past_end_clamps() {
    assert_eq!(offset_to_line_col("ab", 40), (1, 3));
}

#[test]
fn test_offset_to_line_col_unicode() {
    let source = "αβγ\nδε";
    assert_eq!(offset_to_line_col(source, 2), (1, 2)); // 'β'
    assert_eq!(offset_to_line_col(source, 7), (2, 1)); // 'δ'
}

#[test]
fn test_span_start_line_col() {
    let source = "variable a = 1;\nprint(b);";
    assert_eq!(span_start_line_col(source, Span::new(22, 23)), (2, 7));
}
