use rb_tree::InvariantError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum DemoError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("invalid config file: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("{0}")]
    Usage(String),
    #[error("invalid value for {flag}: {value}")]
    InvalidValue { flag: String, value: String },
    #[error("invalid config: {0}")]
    InvalidConfig(String),
    #[error("logger setup failed: {0}")]
    Logger(#[from] log::SetLoggerError),
    #[error("tree invariant broken after run: {0}")]
    Invariant(#[from] InvariantError),
}
