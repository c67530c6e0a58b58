//! Output formatting

use console::{style, Term};

/// Writes results to stdout and status messages to stderr
#[derive(Debug)]
pub struct Reporter {
    out: Term,
    err: Term,
    /// Whether to use colors
    pub use_color: bool,
    /// Quiet mode
    pub quiet: bool,
}

impl Default for Reporter {
    fn default() -> Self {
        Self::new(true, false)
    }
}

impl Reporter {
    /// Create a new reporter
    #[must_use]
    pub fn new(use_color: bool, quiet: bool) -> Self {
        Self {
            out: Term::stdout(),
            err: Term::stderr(),
            use_color,
            quiet,
        }
    }

    /// Print command output; never suppressed
    pub fn result(&self, text: &str) -> std::io::Result<()> {
        self.out.write_str(text)?;
        if !text.ends_with('\n') {
            self.out.write_line("")?;
        }
        self.out.flush()
    }

    /// Print a success message
    pub fn success(&self, message: &str) {
        if self.quiet {
            return;
        }
        let prefix = if self.use_color {
            style("✓").green().bold().to_string()
        } else {
            "OK".to_string()
        };
        let _ = self.err.write_line(&format!("{prefix} {message}"));
    }

    /// Print a warning message
    pub fn warning(&self, message: &str) {
        if self.quiet {
            return;
        }
        let prefix = if self.use_color {
            style("⚠").yellow().bold().to_string()
        } else {
            "WARN".to_string()
        };
        let _ = self.err.write_line(&format!("{prefix} {message}"));
    }

    /// Format a section heading for result text
    #[must_use]
    pub fn heading(&self, title: &str) -> String {
        if self.use_color {
            style(title).bold().to_string()
        } else {
            title.to_string()
        }
    }
}
