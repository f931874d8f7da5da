//! Errors raised while locating, reading, or writing `config.ron`.

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// The OS exposes no configuration directory and none was given.
    #[error("could not determine a configuration directory; pass --config")]
    NoConfigDir,

    /// Reading `config.ron` failed.
    #[error("failed to read config: {0}")]
    ReadError(#[source] std::io::Error),

    /// Creating the directory or writing `config.ron` failed.
    #[error("failed to write config: {0}")]
    WriteError(#[source] std::io::Error),

    /// `config.ron` is not valid RON for [`Config`](crate::Config).
    #[error("failed to parse config: {0}")]
    ParseError(#[source] ron::error::SpannedError),

    #[error("failed to serialize config: {0}")]
    SerializeError(#[source] ron::Error),
}
