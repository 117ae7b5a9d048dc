//! Colored terminal output for mirror progress
//!
//! Everything goes to stderr so stdout stays free for callers that pipe the tool.

use std::io::Write;
use termcolor::{BufferWriter, Color, ColorChoice, ColorSpec, WriteColor};

/// Output manager for consistent colored terminal output
#[derive(Debug)]
pub struct OutputManager {
    bufwtr: BufferWriter,
    quiet: bool,
}

impl Clone for OutputManager {
    fn clone(&self) -> Self {
        Self::new(self.quiet)
    }
}

impl Default for OutputManager {
    fn default() -> Self {
        Self::new(false)
    }
}

impl OutputManager {
    /// Create a new output manager; `quiet` suppresses everything but errors
    pub fn new(quiet: bool) -> Self {
        Self {
            bufwtr: BufferWriter::stderr(ColorChoice::Auto),
            quiet,
        }
    }

    fn emit(&self, marker: Option<(&str, ColorSpec)>, message: &str) {
        if self.quiet {
            return;
        }

        let mut buffer = self.bufwtr.buffer();
        if let Some((symbol, spec)) = marker {
            let _ = buffer.set_color(&spec);
            let _ = write!(&mut buffer, "{}", symbol);
            let _ = buffer.reset();
            let _ = write!(&mut buffer, " ");
        }
        let _ = writeln!(&mut buffer, "{}", message);
        let _ = self.bufwtr.print(&buffer);
    }

    /// Print an info message
    pub fn info(&self, message: &str) {
        let mut spec = ColorSpec::new();
        spec.set_fg(Some(Color::Cyan));
        self.emit(Some(("ℹ", spec)), message);
    }

    /// Print a success message
    pub fn success(&self, message: &str) {
        let mut spec = ColorSpec::new();
        spec.set_fg(Some(Color::Green)).set_bold(true);
        self.emit(Some(("✓", spec)), message);
    }

    /// Print a warning message
    pub fn warn(&self, message: &str) {
        let mut spec = ColorSpec::new();
        spec.set_fg(Some(Color::Yellow)).set_bold(true);
        self.emit(Some(("⚠", spec)), message);
    }

    /// Print an error message (always shown)
    pub fn error(&self, message: &str) {
        let mut buffer = self.bufwtr.buffer();

        if buffer
            .set_color(ColorSpec::new().set_fg(Some(Color::Red)).set_bold(true))
            .is_err()
            || write!(&mut buffer, "✗").is_err()
            || buffer.reset().is_err()
            || writeln!(&mut buffer, " {}", message).is_err()
            || self.bufwtr.print(&buffer).is_err()
        {
            eprintln!("✗ {}", message);
        }
    }

    /// Print indented text (for per-asset lines)
    pub fn indent(&self, message: &str) {
        self.emit(None, &format!("    {}", message));
    }

    /// Print a plain message
    pub fn println(&self, message: &str) {
        self.emit(None, message);
    }
}
