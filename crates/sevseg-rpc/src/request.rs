//! Request context handed to handlers.

use crate::http::Method;

/// A routed RPC request.
///
/// `name` is the endpoint name with the server prefix already stripped;
/// `body` holds the (bounded) raw request-body bytes.
#[derive(Debug, Clone, Copy)]
pub struct RpcRequest<'a> {
    pub method: Method,
    pub name: &'a str,
    pub body: &'a [u8],
}
