//! Hosts.

pub mod domain;
pub mod ipv4;
pub mod ipv6;

use core::fmt;

use alloc::string::String;
use alloc::vec::Vec;

use crate::error::{Error, Reason};
use crate::mode::Mode;

/// Host of a URL.
///
/// The empty authority is represented as `Opaque("")`, which is distinct from
/// a URL without a host.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Host {
    /// IPv6 address.
    Ipv6([u16; 8]),
    /// IPv4 address.
    Ipv4(u32),
    /// Domain name, as a list of labels.
    Domain(Vec<String>),
    /// Opaque host string.
    Opaque(String),
}

impl Host {
    /// Returns the empty host.
    #[inline]
    #[must_use]
    pub fn empty() -> Self {
        Self::Opaque(String::new())
    }

    /// Returns true if the host is the empty host.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        matches!(self, Self::Opaque(s) if s.is_empty())
    }
}

impl fmt::Display for Host {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Ipv6(addr) => write!(f, "[{}]", ipv6::print(addr)),
            Self::Ipv4(addr) => f.write_str(&ipv4::print(*addr)),
            Self::Domain(labels) => {
                let mut labels = labels.iter();
                if let Some(first) = labels.next() {
                    f.write_str(first)?;
                }
                labels.try_for_each(|label| write!(f, ".{label}"))
            }
            Self::Opaque(s) => f.write_str(s),
        }
    }
}

/// Parses a host.
///
/// Bracketed hosts are parsed as IPv6 addresses. Non-empty hosts are parsed
/// as domains or IPv4 addresses when the mode has [`Mode::PARSE_DOMAIN`].
/// Other hosts are validated as opaque hosts.
///
/// # Examples
///
/// ```
/// use url_reference::host::parse_host;
/// use url_reference::{Host, Mode};
///
/// assert_eq!(parse_host("[::1]", Mode::GENERIC)?, Host::Ipv6([0, 0, 0, 0, 0, 0, 0, 1]));
/// assert_eq!(parse_host("10.0.0.1", Mode::WEB)?, Host::Ipv4(0x0A00_0001));
/// assert_eq!(parse_host("10.0.0.1", Mode::GENERIC)?, Host::Opaque("10.0.0.1".into()));
/// assert!(parse_host("a b", Mode::GENERIC).is_err());
/// # Ok::<_, url_reference::Error>(())
/// ```
pub fn parse_host(text: &str, mode: Mode) -> Result<Host, Error> {
    if text.starts_with('[') {
        return ipv6::parse(text).map(Host::Ipv6);
    }
    if mode.contains(Mode::PARSE_DOMAIN) && !text.is_empty() {
        return domain::parse_domain(text, true);
    }
    validate_opaque_host(text)?;
    Ok(Host::Opaque(text.into()))
}

/// Checks that the text contains no forbidden host codepoint.
///
/// # Failures
///
/// Fails with [`Reason::ForbiddenHostCodePoint`] if the text contains one of
/// NUL, tab, LF, CR, space, `#`, `/`, `:`, `<`, `>`, `?`, `@`, `[`, `\`,
/// `]`, `^` or `|`.
pub fn validate_opaque_host(text: &str) -> Result<(), Error> {
    let forbidden = |c: char| {
        matches!(
            c,
            '\0' | '\t'
                | '\n'
                | '\r'
                | ' '
                | '#'
                | '/'
                | ':'
                | '<'
                | '>'
                | '?'
                | '@'
                | '['
                | '\\'
                | ']'
                | '^'
                | '|'
        )
    };
    if text.contains(forbidden) {
        return Err(Error::new(Reason::ForbiddenHostCodePoint, text));
    }
    Ok(())
}

/// Prints the host.
///
/// IPv6 addresses are enclosed in brackets.
#[must_use]
pub fn print_host(host: &Host) -> String {
    alloc::string::ToString::to_string(host)
}

/// Returns true if the host is `localhost`, ignoring ASCII case.
///
/// Opaque hosts also match, so that [`normalize`][`crate::normalize()`]
/// drops `localhost` from `file` URLs that are parsed but not resolved:
/// their hosts are not parsed as domains yet.
#[must_use]
pub fn is_localhost(host: &Host) -> bool {
    match host {
        Host::Domain(labels) => matches!(&labels[..], [label] if label.eq_ignore_ascii_case("localhost")),
        Host::Opaque(s) => s.eq_ignore_ascii_case("localhost"),
        _ => false,
    }
}
