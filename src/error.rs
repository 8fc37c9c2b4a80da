use thiserror::Error;

#[derive(Error, Debug)]
pub enum LottieError {
    #[error("Not enough layers: expected at least {expected}, found {actual}")]
    NotEnoughLayers { expected: usize, actual: usize },

    #[error("Not enough shapes in layer {layer}: expected at least {expected}, found {actual}")]
    NotEnoughShapes {
        layer: usize,
        expected: usize,
        actual: usize,
    },

    #[error("Expected {expected} at '{path}'")]
    UnexpectedValue {
        path: &'static str,
        expected: &'static str,
    },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, LottieError>;
