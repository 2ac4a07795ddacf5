use thiserror::Error;

#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("Could not read catalog file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid catalog JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("The catalog does not list any city")]
    NoCities,

    #[error("The placeholder landmark table is empty")]
    EmptyPlaceholderLandmarks,

    #[error("City {0:?} is listed more than once")]
    DuplicateCity(String),
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum PlannerError {
    #[error("Please select at least one transport mode.")]
    NoModesSelected,

    #[error("Unknown transport mode {0:?}")]
    UnknownMode(String),
}
