use std::fmt;
use std::io;

// Exit codes: sysexits-style for caller mistakes, small numbers for verdicts.
pub const SUCCESS: i32 = 0;
/// The data failed validation.
pub const INVALID_DATA: i32 = 1;
/// Arguments or input files were unusable.
pub const USAGE: i32 = 64;
/// The rule tree itself is defective.
pub const INVALID_RULES: i32 = 65;
pub const INTERNAL: i32 = 125;

pub type CliResult<T> = Result<T, CliError>;

#[derive(Debug)]
pub struct CliError {
    pub code: i32,
    pub message: String,
}

impl CliError {
    pub fn new(code: i32, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
        }
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for CliError {}

pub fn io_error(context: &str, err: io::Error) -> CliError {
    let code = match err.kind() {
        io::ErrorKind::NotFound | io::ErrorKind::PermissionDenied => USAGE,
        _ => INTERNAL,
    };
    CliError::new(code, format!("{context}: {err}"))
}
