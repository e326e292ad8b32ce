//! Failure modes of `kiln.toml` handling.

/// What went wrong while reading, parsing, or validating a `kiln.toml` file.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// The file could not be read at all.
    #[error("cannot read config file: {0}")]
    IoError(#[from] std::io::Error),

    /// The file is not well-formed TOML.
    #[error("config file is not valid TOML: {0}")]
    ParseError(String),

    /// A key parsed fine but holds an unusable value.
    #[error("bad config value: {0}")]
    ValidationError(String),
}
