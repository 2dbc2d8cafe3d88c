//! Minimal HTTP/1.1 framing for the RPC surface.
//!
//! Only what short-lived command requests need: the request line, the
//! `Content-Length` header and a fixed-form response head. Everything is
//! parsed out of caller-owned buffers.

use core::fmt::Write;

use crate::error::ServeError;
use crate::transport::RpcTransport;

pub type StatusCode = u16;

pub(crate) fn reason_phrase(code: StatusCode) -> &'static str {
    match code {
        200 => "OK",
        400 => "Bad Request",
        404 => "Not Found",
        413 => "Request Entity Too Large",
        500 => "Internal Server Error",
        _ => "Unknown",
    }
}

/// Response content type.
#[derive(Debug, Clone, Copy)]
pub enum ContentType {
    TextPlain,
    TextHtml,
}

impl ContentType {
    pub(crate) fn as_str(self) -> &'static str {
        match self {
            ContentType::TextPlain => "text/plain; charset=utf-8",
            ContentType::TextHtml => "text/html; charset=utf-8",
        }
    }
}

/// Request method subset the router dispatches on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Method {
    Get,
    Post,
    Put,
    Delete,
    Head,
}

impl Method {
    pub(crate) fn parse(s: &str) -> Option<Self> {
        Some(match s {
            "GET" => Method::Get,
            "POST" => Method::Post,
            "PUT" => Method::Put,
            "DELETE" => Method::Delete,
            "HEAD" => Method::Head,
            _ => return None,
        })
    }
}

/// Parse the request line.
///
/// Returns the method, the path and the remaining header block.
pub(crate) fn parse_request_line(header_str: &str) -> Option<(Method, &str, &str)> {
    let line_end = header_str.find("\r\n").unwrap_or(header_str.len());
    let first_line = &header_str[..line_end];
    let mut parts = first_line.split_whitespace();
    let method = parts.next().and_then(Method::parse)?;
    let path = parts.next()?;
    let rest = header_str.get(line_end + 2..).unwrap_or("");
    Some((method, path, rest))
}

/// Find the `Content-Length` value in the header block.
pub(crate) fn find_content_length(headers: &str) -> Option<usize> {
    for line in headers.lines() {
        if let Some((name, value)) = line.split_once(':') {
            if name.eq_ignore_ascii_case("content-length") {
                return value.trim().parse::<usize>().ok();
            }
        }
    }
    None
}

/// Read the request line and headers from the transport.
///
/// Returns the offset one past the blank line and the total bytes read
/// (any body tail included).
pub(crate) async fn read_heading<T: RpcTransport>(
    buf: &mut [u8],
    transport: &mut T,
) -> Result<(usize, usize), ServeError<T::Error>> {
    let mut read = 0;
    loop {
        let n = transport
            .recv(&mut buf[read..])
            .await
            .map_err(ServeError::Transport)?;
        if n == 0 {
            return Err(ServeError::Closed);
        }
        read += n;
        if let Some(pos) = buf[..read].windows(4).position(|w| w == b"\r\n\r\n") {
            return Ok((pos + 4, read));
        }
        if read >= buf.len() {
            return Err(ServeError::BadRequest);
        }
    }
}

/// Write the fixed-form response head.
pub(crate) fn write_head(
    target: &mut impl Write,
    status: StatusCode,
    content_type: ContentType,
    content_length: usize,
) -> core::fmt::Result {
    write!(target, "HTTP/1.1 {} {}\r\n", status, reason_phrase(status))?;
    write!(target, "Content-Type: {}\r\n", content_type.as_str())?;
    write!(target, "Content-Length: {}\r\n", content_length)?;
    write!(target, "Connection: close\r\n\r\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_the_request_line() {
        let (method, path, rest) =
            parse_request_line("POST /rpc/up HTTP/1.1\r\nHost: counter\r\n\r\n").unwrap();
        assert_eq!(method, Method::Post);
        assert_eq!(path, "/rpc/up");
        assert!(rest.starts_with("Host:"));
    }

    #[test]
    fn rejects_unknown_methods() {
        assert!(parse_request_line("BREW /pot HTTP/1.1\r\n\r\n").is_none());
        assert!(parse_request_line("\r\n\r\n").is_none());
    }

    #[test]
    fn finds_content_length_case_insensitively() {
        assert_eq!(find_content_length("content-length: 3\r\n"), Some(3));
        assert_eq!(find_content_length("Content-Length: 11\r\n"), Some(11));
        assert_eq!(find_content_length("Host: counter\r\n"), None);
        assert_eq!(find_content_length("Content-Length: nope\r\n"), None);
    }

    #[test]
    fn writes_a_complete_head() {
        let mut head: heapless::String<128> = heapless::String::new();
        write_head(&mut head, 200, ContentType::TextPlain, 2).unwrap();
        assert_eq!(
            head.as_str(),
            "HTTP/1.1 200 OK\r\nContent-Type: text/plain; charset=utf-8\r\nContent-Length: 2\r\nConnection: close\r\n\r\n"
        );
    }
}
