//! Terminal Emitter
//!
//! Human-readable diagnostic output with optional ANSI color support.

use std::io::{self, Write};

use crate::span_utils::span_start_line_col;
use crate::{Diagnostic, Label, Severity};

use super::DiagnosticEmitter;

/// ANSI color codes for terminal output.
mod colors {
    pub const ERROR: &str = "\x1b[1;31m"; // Bold red
    pub const WARNING: &str = "\x1b[1;33m"; // Bold yellow
    pub const HELP: &str = "\x1b[1;32m"; // Bold green
    pub const BOLD: &str = "\x1b[1m";
    pub const RESET: &str = "\x1b[0m";
}

/// Color output mode for terminal emitter.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ColorMode {
    /// Color when the output is a terminal.
    #[default]
    Auto,
    Always,
    Never,
}

impl ColorMode {
    /// Resolve to a boolean. `is_tty` only matters for `Auto`.
    pub fn should_use_colors(self, is_tty: bool) -> bool {
        match self {
            ColorMode::Auto => is_tty,
            ColorMode::Always => true,
            ColorMode::Never => false,
        }
    }

    /// Parse the value of a `--color=` flag.
    pub fn from_flag(value: &str) -> Option<Self> {
        match value {
            "auto" => Some(ColorMode::Auto),
            "always" => Some(ColorMode::Always),
            "never" => Some(ColorMode::Never),
            _ => None,
        }
    }
}

/// Terminal emitter with optional color support.
///
/// With source text attached, label positions render as `path:line:col`;
/// without it they fall back to raw byte spans.
pub struct TerminalEmitter<W: Write> {
    writer: W,
    colors: bool,
    source: Option<String>,
    file_path: Option<String>,
}

impl<W: Write> TerminalEmitter<W> {
    /// Create a new terminal emitter with explicit color mode.
    pub fn with_color_mode(writer: W, mode: ColorMode, is_tty: bool) -> Self {
        TerminalEmitter {
            writer,
            colors: mode.should_use_colors(is_tty),
            source: None,
            file_path: None,
        }
    }

    /// Attach the source text so spans can be shown as line and column.
    #[must_use]
    pub fn with_source(mut self, source: impl Into<String>) -> Self {
        self.source = Some(source.into());
        self
    }

    /// Attach the file path shown in front of positions.
    #[must_use]
    pub fn with_file_path(mut self, path: impl Into<String>) -> Self {
        self.file_path = Some(path.into());
        self
    }

    /// Consume the emitter, returning the writer.
    pub fn into_inner(self) -> W {
        self.writer
    }

    fn write_colored(&mut self, text: &str, color: &str) {
        if self.colors {
            let _ = write!(self.writer, "{color}{text}{}", colors::RESET);
        } else {
            let _ = write!(self.writer, "{text}");
        }
    }

    fn severity_color(severity: Severity) -> &'static str {
        match severity {
            Severity::Error => colors::ERROR,
            Severity::Warning => colors::WARNING,
        }
    }

    fn location(&self, label: &Label) -> String {
        let Some(source) = &self.source else {
            return format!("{:?}", label.span);
        };
        let (line, col) = span_start_line_col(source, label.span);
        match &self.file_path {
            Some(path) => format!("{path}:{line}:{col}"),
            None => format!("{line}:{col}"),
        }
    }

    fn write_label(&mut self, label: &Label, color: &str) {
        let location = self.location(label);
        let _ = write!(self.writer, "  --> {location}");
        if !label.message.is_empty() {
            let _ = write!(self.writer, ": ");
            self.write_colored(&label.message, color);
        }
        let _ = writeln!(self.writer);
    }
}

impl TerminalEmitter<io::Stderr> {
    /// Create a terminal emitter for stderr with explicit color mode.
    pub fn stderr(mode: ColorMode, is_tty: bool) -> Self {
        TerminalEmitter::with_color_mode(io::stderr(), mode, is_tty)
    }
}

impl<W: Write> DiagnosticEmitter for TerminalEmitter<W> {
    fn emit(&mut self, diagnostic: &Diagnostic) {
        // Header: severity[CODE]: message
        let color = Self::severity_color(diagnostic.severity);
        self.write_colored(&diagnostic.severity.to_string(), color);
        self.write_colored(&format!("[{}]", diagnostic.code), colors::BOLD);
        let _ = writeln!(self.writer, ": {}", diagnostic.message);

        for label in &diagnostic.labels {
            self.write_label(label, color);
        }

        for note in &diagnostic.notes {
            let _ = write!(self.writer, "   = ");
            self.write_colored("note", colors::BOLD);
            let _ = writeln!(self.writer, ": {note}");
        }

        for suggestion in &diagnostic.suggestions {
            let _ = write!(self.writer, "   = ");
            self.write_colored("help", colors::HELP);
            let _ = writeln!(self.writer, ": {suggestion}");
        }
    }

    fn flush(&mut self) {
        let _ = self.writer.flush();
    }
}
