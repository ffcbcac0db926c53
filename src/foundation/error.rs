/// Convenience result type used across Photolab.
pub type PhotolabResult<T> = Result<T, PhotolabError>;

/// Top-level error taxonomy used by engine and command APIs.
#[derive(thiserror::Error, Debug)]
pub enum PhotolabError {
    /// First token of a command line is not a known command.
    #[error("unknown command '{0}'")]
    UnknownCommand(String),

    /// A known command received the wrong number of arguments.
    #[error("'{command}' expects {expected} arguments, got {got}")]
    Arity {
        /// Command token as written by the user.
        command: String,
        /// Argument count the command requires.
        expected: usize,
        /// Argument count actually supplied.
        got: usize,
    },

    /// A referenced image name is not present in the store.
    #[error("given image is null or not found: {0}")]
    MissingImage(String),

    /// Images that must share dimensions do not.
    #[error("dimension mismatch: {0}")]
    DimensionMismatch(String),

    /// A load/save path carries an extension with no codec.
    #[error("unsupported file type: {0}")]
    UnsupportedFileType(String),

    /// A command argument could not be interpreted.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// Malformed encoded image data.
    #[error("decode error: {0}")]
    Decode(String),

    /// Wrapped lower-level error from dependencies or IO.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Serializable category of a [`PhotolabError`], used in command reports.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ErrorKind {
    UnknownCommand,
    ArityMismatch,
    MissingImage,
    DimensionMismatch,
    UnsupportedFileType,
    InvalidArgument,
    IoFailure,
}

impl PhotolabError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::UnknownCommand(_) => ErrorKind::UnknownCommand,
            Self::Arity { .. } => ErrorKind::ArityMismatch,
            Self::MissingImage(_) => ErrorKind::MissingImage,
            Self::DimensionMismatch(_) => ErrorKind::DimensionMismatch,
            Self::UnsupportedFileType(_) => ErrorKind::UnsupportedFileType,
            Self::InvalidArgument(_) => ErrorKind::InvalidArgument,
            Self::Decode(_) | Self::Other(_) => ErrorKind::IoFailure,
        }
    }

    /// Build a [`PhotolabError::UnknownCommand`] value.
    pub fn unknown_command(token: impl Into<String>) -> Self {
        Self::UnknownCommand(token.into())
    }

    /// Build a [`PhotolabError::Arity`] value.
    pub fn arity(command: impl Into<String>, expected: usize, got: usize) -> Self {
        Self::Arity {
            command: command.into(),
            expected,
            got,
        }
    }

    /// Build a [`PhotolabError::MissingImage`] value.
    pub fn missing_image(name: impl Into<String>) -> Self {
        Self::MissingImage(name.into())
    }

    /// Build a [`PhotolabError::DimensionMismatch`] value.
    pub fn dimension_mismatch(msg: impl Into<String>) -> Self {
        Self::DimensionMismatch(msg.into())
    }

    /// Build a [`PhotolabError::UnsupportedFileType`] value.
    pub fn unsupported_file_type(path: impl Into<String>) -> Self {
        Self::UnsupportedFileType(path.into())
    }

    /// Build a [`PhotolabError::InvalidArgument`] value.
    pub fn invalid_argument(msg: impl Into<String>) -> Self {
        Self::InvalidArgument(msg.into())
    }

    /// Build a [`PhotolabError::Decode`] value.
    pub fn decode(msg: impl Into<String>) -> Self {
        Self::Decode(msg.into())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
