use bytes::BytesMut;
use std::future::Future;
use std::net::{Ipv4Addr, Ipv6Addr, SocketAddr};
use std::time::Duration;
use tokio::net::UdpSocket;
use tokio::time::Instant;

use crate::TransportError;

pub struct Channel {
    sock: UdpSocket,
    deadline: Option<Instant>,
}

pub async fn connect(server_addr: SocketAddr) -> Result<Channel, TransportError> {
    let local_addr: SocketAddr = match server_addr {
        SocketAddr::V4(_) => (Ipv4Addr::UNSPECIFIED, 0).into(),
        SocketAddr::V6(_) => (Ipv6Addr::UNSPECIFIED, 0).into(),
    };

    let connection_error = |source| TransportError::Connection {
        addr: server_addr,
        source,
    };

    let sock = UdpSocket::bind(local_addr).await.map_err(connection_error)?;
    sock.connect(server_addr).await.map_err(connection_error)?;
    tracing::debug!("udp channel {:?} -> {}", sock.local_addr().ok(), server_addr);

    Ok(Channel {
        sock,
        deadline: None,
    })
}

fn timed_out() -> std::io::Error {
    std::io::Error::new(std::io::ErrorKind::TimedOut, "deadline expired")
}

impl Channel {
    pub fn set_deadline(&mut self, timeout: Duration) -> Result<(), TransportError> {
        if timeout.is_zero() {
            return Err(TransportError::Deadline(timeout));
        }

        let deadline = Instant::now()
            .checked_add(timeout)
            .ok_or(TransportError::Deadline(timeout))?;
        self.deadline = Some(deadline);

        Ok(())
    }

    pub fn peer_addr(&self) -> std::io::Result<SocketAddr> {
        self.sock.peer_addr()
    }

    async fn until_deadline<T, F>(&self, f: F) -> std::io::Result<T>
    where
        F: Future<Output = std::io::Result<T>>,
    {
        match self.deadline {
            None => f.await,
            Some(deadline) => match tokio::time::timeout_at(deadline, f).await {
                Ok(ret) => ret,
                Err(_) => Err(timed_out()),
            },
        }
    }

    pub async fn send(&self, bytes: &[u8]) -> Result<usize, TransportError> {
        self.until_deadline(self.sock.send(bytes))
            .await
            .map_err(TransportError::Write)
    }

    pub async fn receive(&self, buffer_size: usize) -> Result<BytesMut, TransportError> {
        let mut resp_buf = BytesMut::with_capacity(buffer_size);
        let response_size = self
            .until_deadline(self.sock.recv_buf(&mut resp_buf))
            .await
            .map_err(TransportError::Read)?;
        tracing::debug!("received udp response, length: {}, {:?}", response_size, &resp_buf[..]);

        Ok(resp_buf)
    }
}
