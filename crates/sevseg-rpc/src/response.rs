//! Bounded response buffer.

use core::fmt;

/// Writer over a caller-owned, fixed-capacity response buffer.
///
/// Formatting past the capacity fails the write and latches an overflow
/// marker; nothing is ever written beyond the buffer.
pub struct ResponseWriter<'a> {
    buf: &'a mut [u8],
    len: usize,
    overflow: bool,
}

impl<'a> ResponseWriter<'a> {
    pub fn new(buf: &'a mut [u8]) -> Self {
        Self {
            buf,
            len: 0,
            overflow: false,
        }
    }

    pub fn capacity(&self) -> usize {
        self.buf.len()
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Formatted bytes so far.
    pub fn as_bytes(&self) -> &[u8] {
        &self.buf[..self.len]
    }

    /// Discard everything written so far.
    pub fn clear(&mut self) {
        self.len = 0;
        self.overflow = false;
    }

    /// Whether a write has failed for lack of space.
    pub fn overflowed(&self) -> bool {
        self.overflow
    }
}

impl fmt::Write for ResponseWriter<'_> {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        let bytes = s.as_bytes();
        let end = self.len + bytes.len();
        if end > self.buf.len() {
            self.overflow = true;
            return Err(fmt::Error);
        }
        self.buf[self.len..end].copy_from_slice(bytes);
        self.len = end;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use core::fmt::Write as _;

    use super::*;

    #[test]
    fn writes_within_capacity() {
        let mut buf = [0u8; 8];
        let mut out = ResponseWriter::new(&mut buf);
        write!(out, "{:02}", 7).unwrap();
        assert_eq!(out.as_bytes(), b"07");
        assert_eq!(out.len(), 2);
        assert!(!out.overflowed());
    }

    #[test]
    fn overflow_fails_and_latches() {
        let mut buf = [0u8; 4];
        let mut out = ResponseWriter::new(&mut buf);
        assert!(write!(out, "123456").is_err());
        assert!(out.overflowed());
        // Nothing partial from the failed write.
        assert_eq!(out.as_bytes(), b"");
    }

    #[test]
    fn clear_resets_content_and_overflow() {
        let mut buf = [0u8; 4];
        let mut out = ResponseWriter::new(&mut buf);
        write!(out, "abcd").unwrap();
        assert!(write!(out, "e").is_err());
        out.clear();
        assert!(!out.overflowed());
        write!(out, "ok").unwrap();
        assert_eq!(out.as_bytes(), b"ok");
    }
}
