use std::path::{Path, PathBuf};

use anyhow::Context;

use crate::{
    command::dispatch::{CommandOutcome, Dispatcher},
    feedback::Feedback,
    foundation::error::PhotolabResult,
};

/// Literal input that ends an interactive session.
pub const EXIT_TOKEN: &str = "exit";

/// Outcome of one script line that carried an instruction.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct LineOutcome {
    /// 1-based line number within the script.
    pub line: usize,
    pub command: String,
    pub outcome: CommandOutcome,
}

/// Ordered outcomes of a whole script.
#[derive(Clone, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct ScriptReport {
    pub source: Option<PathBuf>,
    pub lines: Vec<LineOutcome>,
}

impl ScriptReport {
    pub fn succeeded(&self) -> usize {
        self.lines.iter().filter(|l| l.outcome.is_ok()).count()
    }

    pub fn failed(&self) -> usize {
        self.lines.len() - self.succeeded()
    }
}

/// How the interactive front-end should treat one line of user input.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Input {
    Exit,
    Script(PathBuf),
    Command(String),
}

impl Input {
    /// `exit` ends the session, anything mentioning `.txt` is a script path, and every
    /// other line is a single command.
    pub fn classify(line: &str) -> Self {
        let line = line.trim();
        if line.contains(".txt") {
            Input::Script(PathBuf::from(line))
        } else if line == EXIT_TOKEN {
            Input::Exit
        } else {
            Input::Command(line.to_string())
        }
    }
}

impl<F: Feedback> Dispatcher<F> {
    /// Run every line of `text` in order. A failing line is recorded and the next one runs.
    pub fn run_script_str(&mut self, text: &str) -> ScriptReport {
        let mut report = ScriptReport::default();
        for (idx, raw) in text.lines().enumerate() {
            let line = raw.trim();
            if let Some(outcome) = self.execute_line(line) {
                report.lines.push(LineOutcome {
                    line: idx + 1,
                    command: line.to_string(),
                    outcome,
                });
            }
        }
        report
    }

    /// Read and run a script file. An unreadable file is reported through feedback and
    /// returned as an error; the store is left as it was.
    #[tracing::instrument(skip(self))]
    pub fn run_script_file(&mut self, path: &Path) -> PhotolabResult<ScriptReport> {
        let text = match std::fs::read_to_string(path)
            .with_context(|| format!("read script '{}'", path.display()))
        {
            Ok(text) => text,
            Err(e) => {
                self.feedback_mut()
                    .emit(&format!("Error reading file {e:#}"));
                return Err(e.into());
            }
        };
        let mut report = self.run_script_str(&text);
        report.source = Some(path.to_path_buf());
        tracing::info!(
            ok = report.succeeded(),
            failed = report.failed(),
            "script finished"
        );
        Ok(report)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/command/script.rs"]
mod tests;
