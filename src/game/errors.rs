use thiserror::Error;

/// Faults raised by the game core. Narrative outcomes such as a blocked exit
/// or a wrong answer are events, never errors.
#[derive(Debug, Error)]
pub enum GameError {
    /// A room key that is not present in the world registry.
    #[error("room not found: {0}")]
    RoomNotFound(String),

    /// Wrapper around IO errors from presenters and input streams.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    /// Wrapper around JSON event encoding errors.
    #[error("serialization error: {0}")]
    Json(#[from] serde_json::Error),
}
