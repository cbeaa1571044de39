//! TCP transport layer for valve communication.
//!
//! This module provides the [`Transport`] trait consumed by the client and
//! the blocking [`TcpTransport`] implementation. The transport layer is
//! completely separated from the protocol layer: it only knows about
//! sockets and bytes.
//!
//! # Design
//!
//! - **Protocol agnostic** - handles only byte transmission
//! - **Synchronous** - blocking send/receive with configurable timeout
//! - **Single burst** - the controller replies in one read; there is no
//!   framed multi-read loop
//!
//! The connection is owned by the transport and closed on drop, on every
//! exit path. There is no manual close to forget.
//!
//! # Constants
//!
//! - [`DEFAULT_PORT`] - default controller TCP port (503)
//! - [`DEFAULT_TIMEOUT`] - default timeout (5 seconds)
//! - [`MAX_RESPONSE_SIZE`] - response read buffer size (1024 bytes)

use std::io::{Read, Write};
use std::net::{SocketAddr, TcpStream};
use std::time::Duration;

use tracing::debug;

use crate::error::{Result, ValveError};

/// Default controller TCP port.
pub const DEFAULT_PORT: u16 = 503;

/// Default timeout for connect, send and receive.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(5);

/// Response read buffer size. The protocol response is guaranteed to
/// arrive in a single burst well below this size.
pub const MAX_RESPONSE_SIZE: usize = 1024;

/// Byte transport for one request/response exchange at a time.
///
/// Implemented by [`TcpTransport`] for real hardware and by test doubles
/// in the test suite.
pub trait Transport {
    /// Sends `data` and returns the single response burst.
    fn send_receive(&mut self, data: &[u8]) -> Result<Vec<u8>>;
}

/// Blocking TCP transport for a valve controller.
///
/// One connection, one in-flight exchange. Dropping the transport closes
/// the connection.
pub struct TcpTransport {
    stream: TcpStream,
    remote_addr: SocketAddr,
}

impl TcpTransport {
    /// Connects to the controller at `addr`.
    ///
    /// The same timeout bounds the connect call and every subsequent read
    /// and write.
    ///
    /// # Errors
    ///
    /// Returns an I/O error if the connection cannot be established or
    /// configured.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use vat_valve::TcpTransport;
    /// use std::time::Duration;
    ///
    /// let transport = TcpTransport::connect(
    ///     "192.168.1.10:503".parse().unwrap(),
    ///     Duration::from_secs(5),
    /// ).unwrap();
    /// ```
    pub fn connect(addr: SocketAddr, timeout: Duration) -> Result<Self> {
        let stream = TcpStream::connect_timeout(&addr, timeout)?;
        stream.set_read_timeout(Some(timeout))?;
        stream.set_write_timeout(Some(timeout))?;
        debug!(%addr, "connected to valve controller");

        Ok(Self {
            stream,
            remote_addr: addr,
        })
    }

    /// Connects with the default timeout.
    pub fn with_default_timeout(addr: SocketAddr) -> Result<Self> {
        Self::connect(addr, DEFAULT_TIMEOUT)
    }

    /// Returns the remote controller address.
    pub fn remote_addr(&self) -> SocketAddr {
        self.remote_addr
    }
}

impl Transport for TcpTransport {
    fn send_receive(&mut self, data: &[u8]) -> Result<Vec<u8>> {
        self.stream.write_all(data)?;

        let mut buffer = vec![0u8; MAX_RESPONSE_SIZE];
        match self.stream.read(&mut buffer) {
            Ok(size) => {
                buffer.truncate(size);
                Ok(buffer)
            }
            Err(e) if e.kind() == std::io::ErrorKind::WouldBlock => Err(ValveError::Timeout),
            Err(e) if e.kind() == std::io::ErrorKind::TimedOut => Err(ValveError::Timeout),
            Err(e) => Err(ValveError::Io(e)),
        }
    }
}

impl std::fmt::Debug for TcpTransport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TcpTransport")
            .field("remote_addr", &self.remote_addr)
            .field("local_addr", &self.stream.local_addr().ok())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::net::TcpListener;
    use std::thread;

    #[test]
    fn test_default_constants() {
        assert_eq!(DEFAULT_PORT, 503);
        assert_eq!(DEFAULT_TIMEOUT, Duration::from_secs(5));
        assert_eq!(MAX_RESPONSE_SIZE, 1024);
    }

    #[test]
    fn test_send_receive_round_trip() {
        let listener = TcpListener::bind("127.0.0.1:0").unwrap();
        let addr = listener.local_addr().unwrap();

        let handle = thread::spawn(move || {
            let (mut socket, _) = listener.accept().unwrap();
            let mut buf = [0u8; 128];
            let n = socket.read(&mut buf).unwrap();
            socket.write_all(&buf[..n]).unwrap();
        });

        let mut transport = TcpTransport::connect(addr, Duration::from_secs(1)).unwrap();
        assert_eq!(transport.remote_addr(), addr);

        let reply = transport.send_receive(b"p:0B1001000000\n").unwrap();
        assert_eq!(reply, b"p:0B1001000000\n");
        handle.join().unwrap();
    }

    #[test]
    fn test_receive_timeout() {
        let listener = TcpListener::bind("127.0.0.1:0").unwrap();
        let addr = listener.local_addr().unwrap();

        // Accept but never reply.
        let handle = thread::spawn(move || {
            let (_socket, _) = listener.accept().unwrap();
            thread::sleep(Duration::from_millis(300));
        });

        let mut transport = TcpTransport::connect(addr, Duration::from_millis(50)).unwrap();
        let result = transport.send_receive(b"p:0B1001000000\n");
        assert!(matches!(result, Err(ValveError::Timeout)));
        handle.join().unwrap();
    }

    #[test]
    fn test_transport_debug() {
        let listener = TcpListener::bind("127.0.0.1:0").unwrap();
        let addr = listener.local_addr().unwrap();
        let transport = TcpTransport::connect(addr, Duration::from_millis(100)).unwrap();
        let debug_str = format!("{:?}", transport);
        assert!(debug_str.contains("TcpTransport"));
        assert!(debug_str.contains("127.0.0.1"));
    }
}
