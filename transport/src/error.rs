use std::net::SocketAddr;
use std::time::Duration;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum TransportError {
    #[error("failed to connect to {addr}: {source}")]
    Connection {
        addr: SocketAddr,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to set a deadline of {0:?}")]
    Deadline(Duration),

    #[error("failed to send query: {0}")]
    Write(#[source] std::io::Error),

    #[error("failed to read answer: {0}")]
    Read(#[source] std::io::Error),
}

impl TransportError {
    pub fn is_timeout(&self) -> bool {
        match self {
            TransportError::Write(e) | TransportError::Read(e) => e.kind() == std::io::ErrorKind::TimedOut,
            _ => false,
        }
    }
}
