use thiserror::Error;

/// Crate-wide error type for the utility layer.
#[derive(Error, Debug)]
pub enum SciUtilsError {
    #[error("This function can only be used on string arrays")]
    NotAStringArray,

    #[error("String arrays need a trailing character axis")]
    MissingCharAxis,

    #[error("Invalid mode string: '{0}'")]
    InvalidMode(String),

    #[error("Mode '{mode}' is not supported by {stream} streams")]
    UnsupportedMode { mode: String, stream: &'static str },

    #[error("Cannot open file {filename}: {error}")]
    CannotOpenFile {
        filename: String,
        errno: i32,
        error: String,
    },

    #[error("A SIGINT guard is already installed")]
    GuardAlreadyActive,

    #[error("Cannot install signal handler: {error}")]
    SignalHandler { errno: i32, error: String },
}

impl SciUtilsError {
    pub(crate) fn cannot_open(filename: &str, e: std::io::Error) -> Self {
        SciUtilsError::CannotOpenFile {
            filename: filename.to_string(),
            errno: e.raw_os_error().unwrap_or(0),
            error: e.to_string(),
        }
    }
}
