/// Errors returned by scale generation and palette lookups.
///
/// Only hard failures live here.  Soft failures (luminance of an
/// unparseable color, alpha formatting of non-finite values, failed
/// contrast checks) degrade to sentinel values instead.
#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum Error {
    #[error("invalid color “{input}”: {reason}")]
    InvalidColor { input: String, reason: String },

    #[error("a color scale has exactly 12 steps, got {len}")]
    ScaleLength { len: usize },

    #[error("unknown color family: {name}")]
    UnknownFamily { name: String },

    #[error("adjustment {name} out of range: {value}")]
    InvalidAdjustment { name: &'static str, value: f64 },
}

pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    pub(crate) fn invalid_color(input: &str, reason: impl ToString) -> Self {
        Error::InvalidColor { input: input.to_string(),
                              reason: reason.to_string() }
    }
}
