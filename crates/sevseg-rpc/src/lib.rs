//! # RPC-over-HTTP for embedded devices
//!
//! A `no_std` server library mapping (name, method) pairs onto typed
//! handlers, designed for short-lived command requests against small
//! devices.
//!
//! ## Core Features
//!
//! - **`no_std` & no alloc:** buffers are caller-owned arrays or `heapless`
//!   containers; every response is formatted into a fixed-capacity buffer
//!   and overflow is reported, never silently truncated past capacity.
//! - **Table-driven dispatch:** endpoints register once, before serving
//!   begins; the table is immutable while connections are served.
//! - **Properties:** a typed getter/setter pair expands into a GET/POST
//!   endpoint pair with a canonical decimal text encoding.
//! - **Transport agnostic:** the [`RpcTransport`] trait runs the server
//!   over any reliable, ordered byte stream; an embassy-net TCP
//!   implementation is provided, tests use in-memory mocks.
//!
//! ## Usage
//!
//! ```no_run
//! use core::fmt::Write as _;
//!
//! use sevseg_rpc::{
//!     Action, HandlerError, Method, ResponseWriter, RpcRequest, RpcServer, RpcTransport,
//! };
//!
//! struct Ping;
//!
//! impl Action for Ping {
//!     fn invoke(
//!         &self,
//!         _request: &RpcRequest<'_>,
//!         out: &mut ResponseWriter<'_>,
//!     ) -> Result<(), HandlerError> {
//!         write!(out, "pong")?;
//!         Ok(())
//!     }
//! }
//!
//! struct LoopbackTransport;
//!
//! impl RpcTransport for LoopbackTransport {
//!     type Error = ();
//!
//!     async fn recv(&mut self, _buf: &mut [u8]) -> Result<usize, Self::Error> {
//!         Ok(0)
//!     }
//!
//!     async fn send(&mut self, _buf: &[u8]) -> Result<(), Self::Error> {
//!         Ok(())
//!     }
//! }
//!
//! async fn serve() -> Result<(), sevseg_rpc::ServeError<()>> {
//!     static PING: Ping = Ping;
//!
//!     let mut server = RpcServer::<8, 64>::new("/rpc/");
//!     server.register_handler("ping", Method::Get, &PING).unwrap();
//!
//!     let mut transport = LoopbackTransport;
//!     server.serve_once(&mut transport).await
//! }
//! ```

#![no_std]

#[cfg(test)]
extern crate std;

pub mod error;
pub mod handler;
pub mod http;
pub mod request;
pub mod response;
pub mod router;
pub mod server;
pub mod transport;

// Re-export key types for easier access at the crate root.
pub use error::{HandlerError, RegisterError, ServeError};
pub use handler::{Action, Property, PropertyHandler, PropertyValue};
pub use http::{ContentType, Method, StatusCode};
pub use request::RpcRequest;
pub use response::ResponseWriter;
pub use router::{Endpoint, RouteTable};
pub use server::RpcServer;
pub use transport::{RpcTransport, TcpTransport};
