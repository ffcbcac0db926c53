use crate::{
    foundation::error::{PhotolabError, PhotolabResult},
    transform::component::Component,
};

/// Marker that starts a comment line.
pub const COMMENT_PREFIX: char = '#';

/// One parsed instruction.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(tag = "op", rename_all = "kebab-case")]
pub enum Command {
    Load { file: String, name: String },
    Save { file: String, name: String },
    Component { component: Component, src: String, dest: String },
    Brighten { amount: i32, src: String, dest: String },
    Sepia { src: String, dest: String },
    Blur { src: String, dest: String },
    Sharpen { src: String, dest: String },
    HorizontalFlip { src: String, dest: String },
    VerticalFlip { src: String, dest: String },
    RgbSplit { src: String, red: String, green: String, blue: String },
    RgbCombine { dest: String, red: String, green: String, blue: String },
}

impl Command {
    /// Canonical command token.
    pub fn keyword(&self) -> String {
        match self {
            Command::Load { .. } => "load".to_string(),
            Command::Save { .. } => "save".to_string(),
            Command::Component { component, .. } => format!("{component}-component"),
            Command::Brighten { .. } => "brighten".to_string(),
            Command::Sepia { .. } => "sepia".to_string(),
            Command::Blur { .. } => "blur".to_string(),
            Command::Sharpen { .. } => "sharpen".to_string(),
            Command::HorizontalFlip { .. } => "horizontal-flip".to_string(),
            Command::VerticalFlip { .. } => "vertical-flip".to_string(),
            Command::RgbSplit { .. } => "rgb-split".to_string(),
            Command::RgbCombine { .. } => "rgb-combine".to_string(),
        }
    }

    /// Names this command reads from the store, in argument order.
    pub fn sources(&self) -> Vec<&str> {
        match self {
            Command::Load { .. } => vec![],
            Command::Save { name, .. } => vec![name.as_str()],
            Command::Component { src, .. }
            | Command::Brighten { src, .. }
            | Command::Sepia { src, .. }
            | Command::Blur { src, .. }
            | Command::Sharpen { src, .. }
            | Command::HorizontalFlip { src, .. }
            | Command::VerticalFlip { src, .. }
            | Command::RgbSplit { src, .. } => vec![src.as_str()],
            Command::RgbCombine {
                red, green, blue, ..
            } => vec![red.as_str(), green.as_str(), blue.as_str()],
        }
    }
}

/// Whether `line` carries no instruction (blank or comment).
pub fn is_blank_or_comment(line: &str) -> bool {
    let line = line.trim();
    line.is_empty() || line.starts_with(COMMENT_PREFIX)
}

/// Parse one non-blank, non-comment line.
///
/// The command token is matched case-insensitively; arguments are whitespace-separated
/// and kept verbatim.
pub fn parse_command(line: &str) -> PhotolabResult<Command> {
    let mut tokens = line.split_whitespace();
    let Some(head) = tokens.next() else {
        return Err(PhotolabError::unknown_command(""));
    };
    let args: Vec<&str> = tokens.collect();
    let keyword = head.to_ascii_lowercase();

    let arity = |expected: usize| -> PhotolabResult<()> {
        if args.len() == expected {
            Ok(())
        } else {
            Err(PhotolabError::arity(head, expected, args.len()))
        }
    };
    let arg = |i: usize| args[i].to_string();

    let cmd = match keyword.as_str() {
        "load" => {
            arity(2)?;
            Command::Load {
                file: arg(0),
                name: arg(1),
            }
        }
        "save" => {
            arity(2)?;
            Command::Save {
                file: arg(0),
                name: arg(1),
            }
        }
        "brighten" => {
            arity(3)?;
            let amount = args[0].parse::<i32>().map_err(|_| {
                PhotolabError::invalid_argument(format!(
                    "brighten amount must be an integer, got '{}'",
                    args[0]
                ))
            })?;
            Command::Brighten {
                amount,
                src: arg(1),
                dest: arg(2),
            }
        }
        "sepia" | "blur" | "sharpen" | "horizontal-flip" | "vertical-flip" => {
            arity(2)?;
            let (src, dest) = (arg(0), arg(1));
            match keyword.as_str() {
                "sepia" => Command::Sepia { src, dest },
                "blur" => Command::Blur { src, dest },
                "sharpen" => Command::Sharpen { src, dest },
                "horizontal-flip" => Command::HorizontalFlip { src, dest },
                _ => Command::VerticalFlip { src, dest },
            }
        }
        "rgb-split" => {
            arity(4)?;
            Command::RgbSplit {
                src: arg(0),
                red: arg(1),
                green: arg(2),
                blue: arg(3),
            }
        }
        "rgb-combine" => {
            arity(4)?;
            Command::RgbCombine {
                dest: arg(0),
                red: arg(1),
                green: arg(2),
                blue: arg(3),
            }
        }
        other => {
            let component = other
                .strip_suffix("-component")
                .and_then(Component::parse)
                .ok_or_else(|| PhotolabError::unknown_command(head))?;
            arity(2)?;
            Command::Component {
                component,
                src: arg(0),
                dest: arg(1),
            }
        }
    };
    Ok(cmd)
}

#[cfg(test)]
#[path = "../../tests/unit/command/parse.rs"]
mod tests;
