use super::*;

#[derive(Debug, Clone, PartialEq)]
pub enum StreamError {
    /// The observer already had a teardown bound to it (or already released one). The first
    /// binding wins and the rejected teardown is dropped without running.
    TeardownAlreadyBound,
    /// The producer panicked while being subscribed to. String is the panic payload, if it could
    /// be rendered.
    ProducerPanicked(String),
}

pub type StreamResult<T> = Result<T, StreamError>;

impl std::fmt::Display for StreamError {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Self::TeardownAlreadyBound => write!(f, "observer already has a teardown"),
            Self::ProducerPanicked(msg) => write!(f, "producer panicked: {}", msg),
        }
    }
}

impl Error for StreamError {}
