//! Span utility functions for rendering source positions.

use vari_ir::Span;

/// Compute 1-based (line, column) from a byte offset.
///
/// The column counts characters (not bytes) from the start of the line.
/// Offsets past the end of `source` clamp to the end.
pub fn offset_to_line_col(source: &str, offset: u32) -> (u32, u32) {
    let offset = (offset as usize).min(source.len());
    let mut line = 1u32;
    let mut line_start = 0usize;

    for (i, byte) in source.bytes().enumerate() {
        if i >= offset {
            break;
        }
        if byte == b'\n' {
            line += 1;
            line_start = i + 1;
        }
    }

    let col = source
        .get(line_start..offset)
        .map_or(0, |text| text.chars().count());
    (line, u32::try_from(col).unwrap_or(u32::MAX).saturating_add(1))
}

/// 1-based (line, column) where a span starts.
pub fn span_start_line_col(source: &str, span: Span) -> (u32, u32) {
    offset_to_line_col(source, span.start)
}

#[cfg(test)]
mod tests;
