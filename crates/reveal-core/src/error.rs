use thiserror::Error;

/// Conditions the engine and its collaborators can hit while handling a
/// pointer event. None of these reach the host page: geometry and pointer
/// errors collapse into the reset frame, `NotReady` into a dropped frame.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum EngineError {
    #[error("invalid viewport geometry {width}x{height}")]
    InvalidGeometry { width: f64, height: f64 },
    #[error("invalid pointer coordinates ({x}, {y})")]
    InvalidPointer { x: f64, y: f64 },
    #[error("presentation layer not ready: {0}")]
    NotReady(&'static str),
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    #[error("{field} must be finite, got {value}")]
    NotFinite { field: &'static str, value: f64 },
    #[error("{field} must be greater than zero, got {value}")]
    NotPositive { field: &'static str, value: f64 },
    #[error("{field} must not be negative, got {value}")]
    Negative { field: &'static str, value: f64 },
    #[error("{field} must be at most {max}, got {value}")]
    TooLarge {
        field: &'static str,
        value: f64,
        max: f64,
    },
    #[error("shadow opacity {0} is outside [0, 1]")]
    OpacityOutOfRange(f64),
}
