use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    #[error("invalid term '{0}'")]
    InvalidTerm(String),

    #[error("unknown unit '{0}'")]
    UnknownUnit(String),

    #[error("unit '{0}' already defined")]
    AlreadyDefined(String),

    #[error("cannot remove base unit '{0}'")]
    BaseUnit(String),

    #[error("unit '{unit}' still in use (at least by '{by}')")]
    InUse { unit: String, by: String },

    #[error("cyclic unit definition detected at '{0}'")]
    Cycle(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
