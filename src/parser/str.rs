//! Functions for common string operations.
//!
//! These use the `memchr` crate when the `memchr` feature is enabled.

/// Returns the index of the first occurrence of the byte.
#[inline]
#[must_use]
pub(crate) fn find(haystack: &[u8], needle: u8) -> Option<usize> {
    #[cfg(feature = "memchr")]
    {
        memchr::memchr(needle, haystack)
    }
    #[cfg(not(feature = "memchr"))]
    {
        haystack.iter().position(|&b| b == needle)
    }
}

/// Returns the index of the first occurrence of any of the three bytes.
#[inline]
#[must_use]
pub(crate) fn find3(haystack: &[u8], needle1: u8, needle2: u8, needle3: u8) -> Option<usize> {
    #[cfg(feature = "memchr")]
    {
        memchr::memchr3(needle1, needle2, needle3, haystack)
    }
    #[cfg(not(feature = "memchr"))]
    {
        haystack
            .iter()
            .position(|&b| b == needle1 || b == needle2 || b == needle3)
    }
}
