use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    /// The supplied item collection was empty.
    #[error("segmented picker requires at least one item")]
    EmptyItems,
    /// The supplied item collection contained a repeated value.
    #[error("segmented picker items must be unique")]
    DuplicateItem,
    #[error(transparent)]
    Io(#[from] std::io::Error),
}
