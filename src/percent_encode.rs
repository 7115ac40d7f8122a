//! Percent encoding and decoding of URL components.
//!
//! Every codepoint belongs to one of 21 classes, and each class has an
//! [action][`table::Action`] per [`EncodeSet`]. The [`Profile`] decides how
//! the softer actions are applied:
//!
//! * `incremental`: keep existing `%XX` escapes (`%` is treated as unreserved).
//! * `unicode`: keep non-ASCII codepoints that are valid in URLs.
//! * `strict`: reject invalid codepoints that would otherwise be tolerated.
//! * `fixup`: escape invalid codepoints that would otherwise be rejected.

mod table;

use core::fmt::{self, Write as _};

use alloc::string::String;
use alloc::vec::Vec;

use crate::error::{Error, Reason};
use crate::parser::str::find;

use self::table::Action;

/// Percent-encode set, one per kind of component.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EncodeSet {
    /// Username and password.
    UserInfo = 0,
    /// Opaque host.
    OpaqueHost = 1,
    /// Path segment of a hierarchical path.
    PathSegment = 2,
    /// Opaque path.
    OpaquePath = 3,
    /// Query.
    Query = 4,
    /// Query of a URL with special-query mode.
    SpecialQuery = 5,
    /// Fragment.
    Fragment = 6,
}

/// Percent-encoding profile.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Profile {
    /// Keep existing `%XX` escapes.
    pub incremental: bool,
    /// Keep valid non-ASCII codepoints and unicode domains.
    pub unicode: bool,
    /// Reject tolerated invalid codepoints.
    pub strict: bool,
    /// Escape rejected codepoints instead of failing.
    pub fixup: bool,
}

impl Profile {
    /// Unicode output, failing on codepoints that would cause reparse bugs.
    pub const URL: Self = Self {
        incremental: true,
        unicode: true,
        strict: false,
        fixup: false,
    };
    /// ASCII output: non-ASCII codepoints are escaped and domains are punycoded.
    pub const WHATWG: Self = Self {
        incremental: true,
        unicode: false,
        strict: false,
        fixup: false,
    };
    /// Unicode output, escaping every invalid codepoint. Never fails.
    pub const LENIENT: Self = Self {
        incremental: true,
        unicode: true,
        strict: false,
        fixup: true,
    };
}

impl Default for Profile {
    #[inline]
    fn default() -> Self {
        Self::URL
    }
}

/// Percent-encodes the given component text.
///
/// # Failures
///
/// Fails with [`Reason::RejectedCodePoints`] if codepoints that would cause
/// a reparse bug are present and `profile.fixup` is not set. The error
/// lists every rejected codepoint.
///
/// # Examples
///
/// ```
/// use url_reference::percent_encode::{encode, EncodeSet, Profile};
///
/// assert_eq!(encode("a b", EncodeSet::PathSegment, Profile::URL)?, "a%20b");
/// assert_eq!(encode("caf\u{E9}", EncodeSet::Query, Profile::WHATWG)?, "caf%C3%A9");
/// assert!(encode("a@b", EncodeSet::OpaqueHost, Profile::URL).is_err());
/// # Ok::<_, url_reference::Error>(())
/// ```
pub fn encode(text: &str, set: EncodeSet, profile: Profile) -> Result<String, Error> {
    let mut out = String::with_capacity(text.len());
    let mut rejected = Vec::new();
    for c in text.chars() {
        let mut action = table::action(table::class_of(c, profile.incremental), set);
        if profile.strict && action == Action::Tolerate {
            action = Action::Reject;
        }
        if profile.fixup && action == Action::Reject {
            action = Action::FixUp;
        }
        match action {
            Action::Pass | Action::Tolerate => out.push(c),
            Action::Unicode if profile.unicode => out.push(c),
            Action::Escape | Action::FixUp | Action::Unicode => {
                write_pct_encoded_char(&mut out, c)
                    .expect("[validity] writing to a string never fails");
            }
            Action::Reject => rejected.push(c),
            Action::Skip => {}
        }
    }
    if rejected.is_empty() {
        Ok(out)
    } else {
        Err(Error::rejected(set, text, rejected))
    }
}

/// Percent-encodes the given character and writes it.
#[inline]
fn write_pct_encoded_char<W: fmt::Write>(writer: &mut W, c: char) -> fmt::Result {
    let mut buf = [0_u8; 4];
    let buf = c.encode_utf8(&mut buf);
    buf.bytes().try_for_each(|b| write!(writer, "%{:02X}", b))
}

/// Decodes percent-encoded bytes in the given text.
///
/// Each maximal run of `%XX` triples is decoded as UTF-8. A `%` that is not
/// followed by two hex digits is kept as is.
///
/// # Failures
///
/// Fails with [`Reason::InvalidUtf8`] or [`Reason::IncompleteUtf8`] if a run
/// of escapes does not decode to UTF-8.
///
/// # Examples
///
/// ```
/// use url_reference::percent_encode::decode;
///
/// assert_eq!(decode("caf%C3%A9%20au%20lait")?, "caf\u{E9} au lait");
/// assert_eq!(decode("100%")?, "100%");
/// assert!(decode("%C3").is_err());
/// # Ok::<_, url_reference::Error>(())
/// ```
pub fn decode(text: &str) -> Result<String, Error> {
    let bytes = text.as_bytes();
    let mut out = String::with_capacity(text.len());
    let mut run = Vec::new();
    let mut rest_start = 0;
    let mut i = 0;
    while let Some(offset) = find(&bytes[i..], b'%') {
        i += offset;
        // Collect the run of escapes starting at `i`.
        let run_start = i;
        run.clear();
        while let Some(b) = decode_triple(&bytes[i..]) {
            run.push(b);
            i += 3;
        }
        if run.is_empty() {
            i += 1;
            continue;
        }
        out.push_str(&text[rest_start..run_start]);
        match core::str::from_utf8(&run) {
            Ok(s) => out.push_str(s),
            Err(e) => {
                let reason = match e.error_len() {
                    Some(_) => Reason::InvalidUtf8,
                    None => Reason::IncompleteUtf8,
                };
                return Err(Error::new(reason, text));
            }
        }
        rest_start = i;
    }
    out.push_str(&text[rest_start..]);
    Ok(out)
}

/// Decodes a single `%XX` triple at the start of the bytes.
#[must_use]
fn decode_triple(bytes: &[u8]) -> Option<u8> {
    match bytes {
        [b'%', upper, lower, ..] => {
            let upper = char::from(*upper).to_digit(16)?;
            let lower = char::from(*lower).to_digit(16)?;
            Some((upper * 16 + lower) as u8)
        }
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::error::ErrorKind;

    #[test]
    fn userinfo() {
        assert_eq!(
            encode("us:er;=@x", EncodeSet::UserInfo, Profile::URL).unwrap(),
            "us%3Aer%3B%3D%40x"
        );
    }

    #[test]
    fn incremental() {
        assert_eq!(
            encode("a%20b%", EncodeSet::PathSegment, Profile::URL).unwrap(),
            "a%20b%"
        );
        let profile = Profile {
            incremental: false,
            ..Profile::URL
        };
        assert_eq!(
            encode("a%20b", EncodeSet::PathSegment, profile).unwrap(),
            "a%2520b"
        );
    }

    #[test]
    fn special_query() {
        assert_eq!(
            encode("q=with-'-sign", EncodeSet::SpecialQuery, Profile::URL).unwrap(),
            "q=with-%27-sign"
        );
        assert_eq!(
            encode("q=with-'-sign", EncodeSet::Query, Profile::URL).unwrap(),
            "q=with-'-sign"
        );
    }

    #[test]
    fn tolerate_strict_fixup() {
        assert_eq!(
            encode("a|b", EncodeSet::PathSegment, Profile::URL).unwrap(),
            "a|b"
        );
        let strict = Profile {
            strict: true,
            ..Profile::URL
        };
        let e = encode("a|b^", EncodeSet::PathSegment, strict).unwrap_err();
        assert_eq!(e.kind(), ErrorKind::Encoding);
        assert_eq!(e.codepoints(), &['|', '^']);
        let strict_fixup = Profile {
            fixup: true,
            ..strict
        };
        assert_eq!(
            encode("a|b", EncodeSet::PathSegment, strict_fixup).unwrap(),
            "a%7Cb"
        );
    }

    #[test]
    fn reject_in_host() {
        let e = encode("a b@c", EncodeSet::OpaqueHost, Profile::URL).unwrap_err();
        assert_eq!(e.reason(), Reason::RejectedCodePoints(EncodeSet::OpaqueHost));
        assert_eq!(e.codepoints(), &[' ', '@']);
        assert_eq!(
            encode("a b@c", EncodeSet::OpaqueHost, Profile::LENIENT).unwrap(),
            "a%20b%40c"
        );
    }

    #[test]
    fn skip_and_controls() {
        assert_eq!(
            encode("a\tb\nc\u{1}", EncodeSet::Fragment, Profile::URL).unwrap(),
            "abc%01"
        );
        assert_eq!(
            encode("\u{FFFF}", EncodeSet::Fragment, Profile::URL).unwrap(),
            "%EF%BF%BF"
        );
    }

    #[test]
    fn unicode() {
        assert_eq!(
            encode("\u{03B1}", EncodeSet::PathSegment, Profile::URL).unwrap(),
            "\u{03B1}"
        );
        assert_eq!(
            encode("\u{03B1}", EncodeSet::PathSegment, Profile::WHATWG).unwrap(),
            "%CE%B1"
        );
    }

    #[test]
    fn decoding() {
        assert_eq!(decode("%41%42c%2").unwrap(), "ABc%2");
        assert_eq!(decode("%e2%82%ac").unwrap(), "\u{20AC}");
        assert_eq!(decode("%%41").unwrap(), "%A");
        assert_eq!(decode("%FF").unwrap_err().reason(), Reason::InvalidUtf8);
        assert_eq!(decode("%E2%82").unwrap_err().reason(), Reason::IncompleteUtf8);
    }
}
