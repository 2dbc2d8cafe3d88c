//! Error taxonomy for registration, handlers and serving.

use core::fmt;

/// Registration-time failures.
///
/// Fatal to the RPC subsystem: callers refuse to serve a
/// partially-registered table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum RegisterError {
    /// The (name, method) pair is already registered.
    DuplicateRoute,
    /// The route table is full.
    CapacityExceeded,
}

/// Per-request handler failures, mapped onto HTTP statuses by the server.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum HandlerError {
    /// The request body is not a valid encoding of the expected value.
    Parse,
    /// The formatted response does not fit the caller-owned buffer.
    BufferTooSmall,
}

impl From<fmt::Error> for HandlerError {
    fn from(_: fmt::Error) -> Self {
        HandlerError::BufferTooSmall
    }
}

/// Connection-local serving failures.
///
/// These never propagate past the serving task; the connection is dropped
/// and the peer sees an undelivered response.
#[derive(Debug)]
pub enum ServeError<E> {
    /// Transport-level send or receive failure.
    Transport(E),
    /// The peer closed the connection before a full request arrived.
    Closed,
    /// The bytes on the wire could not be parsed as an HTTP request.
    BadRequest,
    /// The response head did not format.
    FormatHeaders,
}

impl<E> From<fmt::Error> for ServeError<E> {
    fn from(_: fmt::Error) -> Self {
        ServeError::FormatHeaders
    }
}
