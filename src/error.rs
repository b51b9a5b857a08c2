use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum Error {
    #[error("JSON error: {0}")]
    Json(#[from] jsonbridge::JsonBridgeError),

    #[error("Selector error: {0}")]
    Selector(#[from] selector_builder::SelectorError),
}

impl From<jsonbridge::ParseError> for Error {
    fn from(err: jsonbridge::ParseError) -> Self {
        Error::Json(err.into())
    }
}

impl From<jsonbridge::ConstructionError> for Error {
    fn from(err: jsonbridge::ConstructionError) -> Self {
        Error::Json(err.into())
    }
}

// Create a type alias for convenience
pub type Result<T> = std::result::Result<T, Error>;
