//! Transport abstraction for the server.
//!
//! The server runs over any reliable, ordered byte stream. An embassy-net
//! TCP implementation is provided; tests use in-memory mocks.

use embassy_net::tcp::TcpSocket;
use embedded_io_async::Write as _;

/// A reliable, ordered byte-stream transport.
#[allow(async_fn_in_trait)]
pub trait RpcTransport {
    type Error: core::fmt::Debug;

    /// Receive into `buf`, returning the number of bytes read (0 once the
    /// peer has closed).
    async fn recv(&mut self, buf: &mut [u8]) -> Result<usize, Self::Error>;

    /// Send all of `buf`.
    async fn send(&mut self, buf: &[u8]) -> Result<(), Self::Error>;
}

/// TCP transport over an accepted embassy-net socket.
pub struct TcpTransport<'a> {
    socket: TcpSocket<'a>,
}

impl<'a> TcpTransport<'a> {
    pub fn new(socket: TcpSocket<'a>) -> Self {
        Self { socket }
    }
}

impl RpcTransport for TcpTransport<'_> {
    type Error = embassy_net::tcp::Error;

    async fn recv(&mut self, buf: &mut [u8]) -> Result<usize, Self::Error> {
        self.socket.read(buf).await
    }

    async fn send(&mut self, buf: &[u8]) -> Result<(), Self::Error> {
        self.socket.write_all(buf).await?;
        self.socket.flush().await
    }
}
