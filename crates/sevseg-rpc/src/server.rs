//! RPC-over-HTTP server: one request per connection.

use heapless::String;

use crate::error::{HandlerError, RegisterError, ServeError};
use crate::handler::{Action, PropertyHandler};
use crate::http::{
    ContentType,
    Method,
    StatusCode,
    find_content_length,
    parse_request_line,
    read_heading,
    write_head,
};
use crate::request::RpcRequest;
use crate::response::ResponseWriter;
use crate::router::{Endpoint, RouteTable};
use crate::transport::RpcTransport;

const HEADER_BUFFER_SIZE: usize = 512;
const BODY_BUFFER_SIZE: usize = 128;
const HEAD_LINE_SIZE: usize = 128;

/// RPC server with a fixed-capacity route table and bounded buffers.
///
/// `MAX_HANDLERS` bounds the route table; `RESPONSE_SIZE` is the capacity
/// of the caller-owned buffer every handler formats into. Registration
/// requires `&mut self` and therefore completes before the server is
/// shared with the serving tasks.
pub struct RpcServer<'a, const MAX_HANDLERS: usize, const RESPONSE_SIZE: usize> {
    routes: RouteTable<'a, MAX_HANDLERS>,
    prefix: &'a str,
    index_page: Option<&'a [u8]>,
}

impl<'a, const MAX_HANDLERS: usize, const RESPONSE_SIZE: usize>
    RpcServer<'a, MAX_HANDLERS, RESPONSE_SIZE>
{
    /// Create a server namespacing its endpoints under `prefix`
    /// (e.g. `"/rpc/"`).
    pub const fn new(prefix: &'a str) -> Self {
        Self {
            routes: RouteTable::new(),
            prefix,
            index_page: None,
        }
    }

    /// Serve `page` verbatim for `GET /`.
    #[must_use]
    pub const fn with_index_page(mut self, page: &'a [u8]) -> Self {
        self.index_page = Some(page);
        self
    }

    /// Register an action endpoint.
    pub fn register_handler(
        &mut self,
        name: &'a str,
        method: Method,
        action: &'a dyn Action,
    ) -> Result<(), RegisterError> {
        self.routes.register(name, method, Endpoint::Action(action))
    }

    /// Register a property: a GET and a POST endpoint under one name.
    pub fn register_property(
        &mut self,
        name: &'a str,
        property: &'a dyn PropertyHandler,
    ) -> Result<(), RegisterError> {
        self.routes.register_property(name, property)
    }

    /// Handle exactly one request on `transport`.
    pub async fn serve_once<T: RpcTransport>(
        &self,
        transport: &mut T,
    ) -> Result<(), ServeError<T::Error>> {
        let mut header_buf = [0u8; HEADER_BUFFER_SIZE];
        let (header_end, header_len) = read_heading(&mut header_buf, transport).await?;

        let headers = core::str::from_utf8(&header_buf[..header_end])
            .map_err(|_| ServeError::BadRequest)?;
        let (method, path, rest_headers) =
            parse_request_line(headers).ok_or(ServeError::BadRequest)?;

        if method == Method::Get && path == "/" {
            if let Some(page) = self.index_page {
                return send_response(transport, 200, ContentType::TextHtml, page).await;
            }
        }

        let route = path
            .strip_prefix(self.prefix)
            .and_then(|name| Some((name, self.routes.lookup(name, method)?)));
        let Some((name, endpoint)) = route else {
            #[cfg(feature = "log")]
            log::debug!("rpc: no route for {:?} {}", method, path);
            return send_response(transport, 404, ContentType::TextPlain, b"not found").await;
        };

        let content_length = find_content_length(rest_headers).unwrap_or(0);
        if content_length > BODY_BUFFER_SIZE {
            return send_response(transport, 413, ContentType::TextPlain, b"").await;
        }
        let mut body_buf = [0u8; BODY_BUFFER_SIZE];
        let body_len = read_body(
            transport,
            &header_buf[header_end..header_len],
            content_length,
            &mut body_buf,
        )
        .await?;

        let mut response_buf = [0u8; RESPONSE_SIZE];
        let mut out = ResponseWriter::new(&mut response_buf);
        let request = RpcRequest {
            method,
            name,
            body: &body_buf[..body_len],
        };
        let status: StatusCode = match endpoint.handle(&request, &mut out) {
            Ok(()) => 200,
            Err(HandlerError::Parse) => {
                out.clear();
                400
            }
            Err(HandlerError::BufferTooSmall) => {
                out.clear();
                500
            }
        };

        send_response(transport, status, ContentType::TextPlain, out.as_bytes()).await
    }
}

/// Copy the body tail already read with the heading, then receive the rest.
async fn read_body<T: RpcTransport>(
    transport: &mut T,
    tail: &[u8],
    content_length: usize,
    body_buf: &mut [u8],
) -> Result<usize, ServeError<T::Error>> {
    let mut len = tail.len().min(content_length);
    body_buf[..len].copy_from_slice(&tail[..len]);
    while len < content_length {
        let n = transport
            .recv(&mut body_buf[len..content_length])
            .await
            .map_err(ServeError::Transport)?;
        if n == 0 {
            break;
        }
        len += n;
    }
    Ok(len)
}

async fn send_response<T: RpcTransport>(
    transport: &mut T,
    status: StatusCode,
    content_type: ContentType,
    body: &[u8],
) -> Result<(), ServeError<T::Error>> {
    let mut head: String<HEAD_LINE_SIZE> = String::new();
    write_head(&mut head, status, content_type, body.len())?;
    transport
        .send(head.as_bytes())
        .await
        .map_err(ServeError::Transport)?;
    if !body.is_empty() {
        transport.send(body).await.map_err(ServeError::Transport)?;
    }
    Ok(())
}
