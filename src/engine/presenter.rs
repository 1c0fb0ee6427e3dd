use std::io::{self, Write};

use log::warn;

/// Renders the outcome of a calculation. Exactly one of the two methods is
/// called per calculation.
pub trait Presenter {
    fn show_result(&mut self, value: f64);
    fn show_error(&mut self, message: &str);
}

/// Writes results and errors as text.
pub struct ConsolePresenter<W: Write = io::Stdout, E: Write = io::Stderr> {
    out: W,
    err: E,
}

impl ConsolePresenter {
    pub fn stdio() -> Self {
        ConsolePresenter::new(io::stdout(), io::stderr())
    }
}

impl<W: Write, E: Write> ConsolePresenter<W, E> {
    pub fn new(out: W, err: E) -> Self {
        ConsolePresenter { out, err }
    }

    pub fn into_inner(self) -> (W, E) {
        (self.out, self.err)
    }
}

impl<W: Write, E: Write> Presenter for ConsolePresenter<W, E> {
    fn show_result(&mut self, value: f64) {
        if let Err(error) = writeln!(self.out, "Result: {}", value) {
            warn!("failed to write result: {}", error);
        }
    }

    fn show_error(&mut self, message: &str) {
        if let Err(error) = writeln!(self.err, "{}", message) {
            warn!("failed to write error: {}", error);
        }
    }
}
