use nu_ansi_term::Color;
use std::io::{self, IsTerminal, Write};

/// Status lines on stderr, colored when `use_color` is set.
///
/// stdout is kept for the final report so it can be piped.
/// Whether output for one stream should be colored.
///
/// `--no-color` wins, then the config setting, then whether the stream is a terminal.
pub fn color_for(no_color: bool, configured: Option<bool>, stream_is_terminal: bool) -> bool {
    !no_color && configured.unwrap_or(stream_is_terminal)
}

#[derive(Debug, Clone, Copy)]
pub struct Console {
    use_color: bool,
    quiet: bool,
    show_progress: bool,
}

impl Console {
    pub fn new(use_color: bool, quiet: bool) -> Self {
        Self {
            use_color,
            quiet,
            show_progress: !quiet && io::stderr().is_terminal(),
        }
    }

    pub fn info(&self, message: &str) {
        if !self.quiet {
            eprintln!("{message}");
        }
    }

    pub fn success(&self, message: &str) {
        if !self.quiet {
            eprintln!("{}", self.paint(Color::Green, message));
        }
    }

    /// Errors are printed even in quiet mode
    pub fn error(&self, message: &str) {
        eprintln!("{}", self.paint(Color::Red, message));
    }

    /// Redraw the progress line in place
    pub fn progress(&self, percent: u8) {
        if self.show_progress {
            eprint!("\rProgress: {percent:>3}%");
            let _ = io::stderr().flush();
        }
    }

    /// Terminate the progress line before other output
    pub fn end_progress(&self) {
        if self.show_progress {
            eprintln!();
        }
    }

    fn paint(&self, color: Color, message: &str) -> String {
        if self.use_color {
            color.bold().paint(message).to_string()
        } else {
            message.to_string()
        }
    }
}
