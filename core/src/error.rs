use thiserror::Error;

#[derive(Error, Debug, Copy, Clone, PartialEq, Eq)]
pub enum GridError {
    #[error("Invalid grid dimensions or bomb count")]
    InvalidDimensions,
    #[error("Coordinates outside the grid")]
    InvalidCoords,
}

pub type Result<T> = core::result::Result<T, GridError>;
