//! Crate-level error type.

use thiserror::Error;

use crate::core::ConfigError;
use crate::protocol::ProtocolError;

/// Any failure that stops the bot.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum Error {
    #[error("configuration: {0}")]
    Config(#[from] ConfigError),

    #[error("protocol: {0}")]
    Protocol(#[from] ProtocolError),
}

/// Convenience alias.
pub type Result<T> = std::result::Result<T, Error>;
