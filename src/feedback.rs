//! Where per-command messages go.

use std::io::Write as _;

/// Receives one human-readable message per command outcome.
pub trait Feedback {
    fn emit(&mut self, message: &str);
}

/// Prints each message as a line on stdout.
#[derive(Clone, Copy, Debug, Default)]
pub struct StdoutFeedback;

impl Feedback for StdoutFeedback {
    fn emit(&mut self, message: &str) {
        let mut out = std::io::stdout().lock();
        if let Err(e) = writeln!(out, "{message}") {
            tracing::warn!(error = %e, "failed to write feedback");
        }
    }
}

/// Collects messages in order.
impl Feedback for Vec<String> {
    fn emit(&mut self, message: &str) {
        self.push(message.to_string());
    }
}

impl<F: Feedback + ?Sized> Feedback for &mut F {
    fn emit(&mut self, message: &str) {
        (**self).emit(message);
    }
}
