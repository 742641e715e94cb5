use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum TransformError {
    #[error("k array must have at least {minimum} points, got {got}")]
    GridTooSmall { minimum: usize, got: usize },

    #[error("last axis of pk ({pk}) must agree with size of k ({k})")]
    ShapeMismatch { pk: usize, k: usize },

    #[error("k array not a logarithmic grid")]
    NotLogarithmicGrid,

    #[error("bias error: {window} window requires {required}, got q = {q}")]
    BiasOutOfRange {
        window: &'static str,
        required: &'static str,
        q: f64,
    },

    #[error("unknown window function: {0}")]
    UnknownWindow(String),

    #[error("unable to construct low-ringing transform, try odd number of points or different q")]
    LowRingingUnsatisfiable,
}
