#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// A `tombstone_gc` option key or value was rejected. The message is
    /// surfaced to the user verbatim.
    #[error("{0}")]
    InvalidConfiguration(String),
    #[error("serialization error: {0}")]
    Serialization(String),
}

pub type Result<T> = core::result::Result<T, Error>;
