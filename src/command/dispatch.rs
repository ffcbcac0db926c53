use std::path::Path;

use crate::{
    codec,
    command::parse::{Command, is_blank_or_comment, parse_command},
    feedback::Feedback,
    foundation::error::{ErrorKind, PhotolabError, PhotolabResult},
    raster::{buffer::PixelBuffer, store::ImageStore},
    transform::{channels, component, convolve, flip, tone},
};

/// Result of running one command. Failures are values, never panics or early exits.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(tag = "status", rename_all = "lowercase")]
pub enum CommandOutcome {
    /// Command applied; `messages` is the feedback emitted, in order.
    Ok { messages: Vec<String> },
    /// Command rejected; the store was not modified.
    Failed { kind: ErrorKind, message: String },
}

impl CommandOutcome {
    pub fn is_ok(&self) -> bool {
        matches!(self, CommandOutcome::Ok { .. })
    }
}

/// Parses instructions, applies them to an owned [`ImageStore`], and reports each outcome
/// through a [`Feedback`] sink.
///
/// Every command reads all of its sources before writing any destination, so a command may
/// safely name the same image as both input and output.
#[derive(Debug)]
pub struct Dispatcher<F> {
    store: ImageStore,
    feedback: F,
}

impl<F: Feedback> Dispatcher<F> {
    pub fn new(feedback: F) -> Self {
        Self::with_store(ImageStore::new(), feedback)
    }

    pub fn with_store(store: ImageStore, feedback: F) -> Self {
        Self { store, feedback }
    }

    pub fn store(&self) -> &ImageStore {
        &self.store
    }

    pub fn store_mut(&mut self) -> &mut ImageStore {
        &mut self.store
    }

    pub fn feedback(&self) -> &F {
        &self.feedback
    }

    pub fn feedback_mut(&mut self) -> &mut F {
        &mut self.feedback
    }

    /// Parse and run one line. Blank and comment lines return `None` and emit nothing.
    pub fn execute_line(&mut self, line: &str) -> Option<CommandOutcome> {
        if is_blank_or_comment(line) {
            return None;
        }
        let outcome = match parse_command(line) {
            Ok(cmd) => self.execute(&cmd),
            Err(err) => self.fail(None, err),
        };
        Some(outcome)
    }

    /// Run an already-parsed command.
    #[tracing::instrument(skip(self), fields(op = %cmd.keyword()))]
    pub fn execute(&mut self, cmd: &Command) -> CommandOutcome {
        match self.apply(cmd) {
            Ok(messages) => {
                for m in &messages {
                    self.feedback.emit(m);
                }
                CommandOutcome::Ok { messages }
            }
            Err(err) => self.fail(Some(cmd), err),
        }
    }

    fn fail(&mut self, cmd: Option<&Command>, err: PhotolabError) -> CommandOutcome {
        tracing::warn!(error = %err, "command failed");
        let message = failure_message(cmd, &err);
        self.feedback.emit(&message);
        CommandOutcome::Failed {
            kind: err.kind(),
            message,
        }
    }

    fn apply(&mut self, cmd: &Command) -> PhotolabResult<Vec<String>> {
        for name in cmd.sources() {
            self.store.require(name)?;
        }
        match cmd {
            Command::Load { file, name } => {
                let img = codec::load_image(Path::new(file), name)?;
                self.store.put(name.as_str(), img);
                Ok(vec![format!("Loaded {name} from {file}")])
            }
            Command::Save { file, name } => {
                let img = self.store.require(name)?;
                codec::save_image(Path::new(file), img)?;
                Ok(vec![format!("Saved {file} using {name}")])
            }
            Command::Component {
                component: c,
                src,
                dest,
            } => {
                self.unary(src, dest, |img| component::adjust_component(img, *c))?;
                Ok(vec![format!("Created {c} component image: {dest}")])
            }
            Command::Brighten { amount, src, dest } => {
                self.unary(src, dest, |img| tone::brighten(*amount, img))?;
                Ok(vec![format!(
                    "Created a brightened image by {amount} to {dest}"
                )])
            }
            Command::Sepia { src, dest } => {
                self.unary(src, dest, tone::sepia)?;
                Ok(vec![format!("Created Sepia image: {dest}")])
            }
            Command::Blur { src, dest } => {
                self.unary(src, dest, convolve::blur)?;
                Ok(vec![format!("Created Blurred image: {dest}")])
            }
            Command::Sharpen { src, dest } => {
                self.unary(src, dest, convolve::sharpen)?;
                Ok(vec![format!("Created Sharpened image: {dest}")])
            }
            Command::HorizontalFlip { src, dest } => {
                self.unary(src, dest, flip::horizontal_flip)?;
                Ok(vec![format!("Created {dest} via horizontal flip")])
            }
            Command::VerticalFlip { src, dest } => {
                self.unary(src, dest, flip::vertical_flip)?;
                Ok(vec![format!("Created {dest} via vertical flip")])
            }
            Command::RgbSplit {
                src,
                red,
                green,
                blue,
            } => {
                let parts = channels::split(self.store.require(src)?);
                self.store.put(red.as_str(), parts.red.with_name(red.as_str()));
                self.store
                    .put(green.as_str(), parts.green.with_name(green.as_str()));
                self.store
                    .put(blue.as_str(), parts.blue.with_name(blue.as_str()));
                Ok(vec![
                    format!("Created Red image: {red}"),
                    format!("Created Green image: {green}"),
                    format!("Created Blue image: {blue}"),
                ])
            }
            Command::RgbCombine {
                dest,
                red,
                green,
                blue,
            } => {
                let out = channels::combine(
                    self.store.require(red)?,
                    self.store.require(green)?,
                    self.store.require(blue)?,
                )?;
                self.store.put(dest.as_str(), out.with_name(dest.as_str()));
                Ok(vec![format!("Created Combined image: {dest}")])
            }
        }
    }

    fn unary(
        &mut self,
        src: &str,
        dest: &str,
        f: impl FnOnce(&PixelBuffer) -> PixelBuffer,
    ) -> PhotolabResult<()> {
        let out = f(self.store.require(src)?);
        self.store.put(dest, out.with_name(dest));
        Ok(())
    }
}

fn failure_message(cmd: Option<&Command>, err: &PhotolabError) -> String {
    match err {
        PhotolabError::UnknownCommand(token) => {
            format!("Invalid command '{token}'. Please give correct command")
        }
        PhotolabError::Arity {
            command,
            expected,
            got,
        } => format!(
            "Invalid '{command}' command format. Expected {expected} arguments, got {got}"
        ),
        PhotolabError::MissingImage(name) => match cmd {
            Some(Command::RgbCombine { .. }) => {
                format!("Invalid rgb images given: Given image is null or not found: {name}")
            }
            _ => format!("Error: Given image is null or not found: {name}"),
        },
        _ => match cmd {
            Some(Command::Load { .. }) => format!("Error loading image: {err}"),
            Some(Command::Save { .. }) => format!("Error saving image: {err}"),
            Some(Command::RgbCombine { .. }) => format!("Invalid rgb images given: {err}"),
            _ => format!("Error: {err}"),
        },
    }
}

#[cfg(test)]
#[path = "../../tests/unit/command/dispatch.rs"]
mod tests;
