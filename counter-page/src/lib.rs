#![no_std]

//! Embedded control page for the counter.
//!
//! Served verbatim for `GET /`. Keeping the bytes in their own crate
//! mirrors where they come from on the device: a static asset store, not
//! the RPC core.

/// Raw bytes of the index page.
pub const INDEX_PAGE_HTML: &[u8] = include_bytes!("../index.htm");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn page_is_embedded() {
        assert!(!INDEX_PAGE_HTML.is_empty());
    }
}
