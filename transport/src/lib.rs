mod channel;
mod error;

pub use channel::{connect, Channel};
pub use error::TransportError;

use bytes::BytesMut;
use std::net::SocketAddr;
use std::time::Duration;

// https://datatracker.ietf.org/doc/html/rfc1035#section-4.2.1
//
// Messages carried by UDP are restricted to 512 bytes (not counting the IP
// or UDP headers).
pub const MAX_RESPONSE_SIZE: usize = 512;

/// One query, one answer, one deadline for the whole round trip.
pub async fn exchange(
    server_addr: SocketAddr,
    request_bytes: &[u8],
    timeout: Duration,
    buffer_size: usize,
) -> Result<BytesMut, TransportError> {
    let mut channel = connect(server_addr).await?;
    channel.set_deadline(timeout)?;

    let send_size = channel.send(request_bytes).await?;
    tracing::debug!("sent {} of {} request bytes to {}", send_size, request_bytes.len(), server_addr);

    channel.receive(buffer_size).await
}
