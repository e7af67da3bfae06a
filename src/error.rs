use thiserror::Error;

pub type RouteResult<T> = Result<T, RouteError>;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RouteError {
    #[error("Offset {offset} is out of range: both paths share at most {max} comparable bytes")]
    OffsetOutOfRange { offset: usize, max: usize },

    #[error("Invalid separator {separator:?}: must be a single ASCII character")]
    InvalidSeparator { separator: char },

    #[error("Cannot ascend {levels} levels from '{path}': not enough segments")]
    AscendPastRoot { path: String, levels: usize },

    #[error("Invalid offset policy '{value}'. Expected one of: clamp, strict")]
    InvalidOffsetPolicy { value: String },

    #[error("Config error: {0}")]
    Config(String),

    #[error("Invalid argument: {0}")]
    InvalidArgument(String),
}

impl From<serde_yaml::Error> for RouteError {
    fn from(err: serde_yaml::Error) -> Self {
        RouteError::Config(err.to_string())
    }
}

impl From<std::io::Error> for RouteError {
    fn from(err: std::io::Error) -> Self {
        RouteError::Config(format!("Failed to read config file: {}", err))
    }
}
