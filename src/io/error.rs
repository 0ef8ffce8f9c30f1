//! # Errors while importing models
//!
//! Reading a model file can fail at three levels: the file itself, its syntax, or the model it
//! describes. Each level has its own type, all of them are wrapped by `ImportError`.
use std::error::Error;
use std::fmt;
use std::io;

use crate::data::linear_program::general_form::MalformedModel;

/// Anything that went wrong while turning a file or text into a `LinearModel`.
#[derive(Debug)]
pub enum ImportError {
    /// The file doesn't have the `.lp` or `.txt` extension.
    ///
    /// Holds a message for the user.
    FileExtension(String),
    /// The file could not be opened or read.
    IO(io::Error),
    /// The text is not in the model file format.
    ///
    /// Only syntax problems end up here; a syntactically correct file describing an invalid model
    /// gives a `LinearProgram` error instead.
    Parse(ParseError),
    /// The text is syntactically fine, but the model it describes is not.
    ///
    /// For example, two constraints share a name.
    LinearProgram(InconsistencyError),
}

impl fmt::Display for ImportError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ImportError::FileExtension(message) => f.write_str(message),
            ImportError::IO(error) => fmt::Display::fmt(error, f),
            ImportError::Parse(error) => fmt::Display::fmt(error, f),
            ImportError::LinearProgram(error) => fmt::Display::fmt(error, f),
        }
    }
}

impl Error for ImportError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            ImportError::FileExtension(_) => None,
            ImportError::IO(error) => Some(error),
            ImportError::Parse(error) => Some(error),
            ImportError::LinearProgram(error) => Some(error),
        }
    }
}

impl From<io::Error> for ImportError {
    fn from(error: io::Error) -> Self {
        ImportError::IO(error)
    }
}

impl From<ParseError> for ImportError {
    fn from(error: ParseError) -> Self {
        ImportError::Parse(error)
    }
}

impl From<InconsistencyError> for ImportError {
    fn from(error: InconsistencyError) -> Self {
        ImportError::LinearProgram(error)
    }
}

/// A syntax error.
///
/// Errors are wrapped in more general ones on the way up, e.g. "Could not read constraint 2."
/// around "Operator "<>" not recognised.". The innermost error usually knows the offending line.
#[derive(Debug)]
pub struct ParseError {
    message: String,
    cause: Option<Cause>,
}

/// What a `ParseError` was caused by.
#[derive(Debug)]
enum Cause {
    /// Line number and contents of the offending line.
    Line(u64, String),
    /// A more specific error.
    Error(Box<ParseError>),
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ParseError: {}", self.messages().join("\n"))
    }
}

impl Error for ParseError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match &self.cause {
            Some(Cause::Error(error)) => Some(error.as_ref()),
            Some(Cause::Line(..)) | None => None,
        }
    }
}

impl ParseError {
    /// An error without a known location.
    pub fn new(message: impl Into<String>) -> Self {
        Self { message: message.into(), cause: None }
    }

    /// An error caused by a specific line.
    ///
    /// # Arguments
    ///
    /// * `message`: What is wrong with the line.
    /// * `file_location`: Line number and contents.
    pub fn with_file_location(message: impl Into<String>, (line_number, line): FileLocation) -> Self {
        Self {
            message: message.into(),
            cause: Some(Cause::Line(line_number, line.to_string())),
        }
    }

    /// Wrap a more general message around an error.
    pub fn with_cause(message: impl Into<String>, cause: ParseError) -> Self {
        Self {
            message: message.into(),
            cause: Some(Cause::Error(Box::new(cause))),
        }
    }

    /// Line number at which the error was caused, if known.
    pub fn line_number(&self) -> Option<u64> {
        match &self.cause {
            Some(Cause::Line(line_number, _)) => Some(*line_number),
            Some(Cause::Error(error)) => error.line_number(),
            None => None,
        }
    }

    /// Messages from the outermost to the innermost error, followed by the line if known.
    fn messages(&self) -> Vec<String> {
        let mut messages = vec![self.message.clone()];
        match &self.cause {
            Some(Cause::Line(line_number, line)) => {
                messages.push(format!("\tCaused at line\t{}:\t{}", line_number, line));
            },
            Some(Cause::Error(error)) => messages.extend(error.messages()),
            None => {},
        }

        messages
    }
}

/// Line number (starting at 1) and contents of a line of the input.
pub type FileLocation<'a> = (u64, &'a str);

/// The described model is not valid.
///
/// Not used for infeasible or unbounded models; those are valid models.
#[derive(Debug)]
pub struct InconsistencyError {
    message: String,
    cause: Option<MalformedModel>,
}

impl InconsistencyError {
    /// An error with a message for the user.
    pub fn new(message: impl Into<String>) -> Self {
        Self { message: message.into(), cause: None }
    }
}

impl From<MalformedModel> for InconsistencyError {
    fn from(error: MalformedModel) -> Self {
        Self {
            message: "The model described in the file is malformed".to_string(),
            cause: Some(error),
        }
    }
}

impl fmt::Display for InconsistencyError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.cause {
            Some(error) => write!(f, "ProgramError: {} ({})", self.message, error),
            None => write!(f, "ProgramError: {}", self.message),
        }
    }
}

impl Error for InconsistencyError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        self.cause.as_ref().map(|error| error as &(dyn Error + 'static))
    }
}
