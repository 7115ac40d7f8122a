//! Domain names.
//!
//! Unicode mapping and punycode conversion are delegated to the [`idna`]
//! crate. This module only removes the codepoints that nameprep maps to
//! nothing and checks the structural rules for URL hosts.

use alloc::string::{String, ToString};
use alloc::vec::Vec;

use crate::error::{Error, Reason};
use crate::host::{ipv4, Host};
use crate::percent_encode;

/// Parses a domain name or an IPv4 address.
///
/// The text is percent-decoded first when `percent_coded` is set.
///
/// # Failures
///
/// * [`Reason::InvalidDomain`] if the domain cannot be mapped or contains
///   forbidden codepoints.
/// * [`Reason::NumericDomain`] if the last label is a number but the whole
///   text is not an IPv4 address.
/// * [`Reason::InvalidIpv4`] if the text is an out-of-range IPv4 address.
/// * Encoding errors from percent-decoding.
///
/// # Examples
///
/// ```
/// use url_reference::host::domain::parse_domain;
/// use url_reference::Host;
///
/// assert_eq!(
///     parse_domain("EXAMPLE.%63om", true)?,
///     Host::Domain(vec!["example".into(), "com".into()])
/// );
/// assert_eq!(parse_domain("127.1", true)?, Host::Ipv4(0x7F00_0001));
/// assert!(parse_domain("example.123", true).is_err());
/// # Ok::<_, url_reference::Error>(())
/// ```
pub fn parse_domain(text: &str, percent_coded: bool) -> Result<Host, Error> {
    let decoded = if percent_coded {
        percent_encode::decode(text)?
    } else {
        text.to_string()
    };
    let prepped: String = decoded.chars().filter(|&c| !is_mapped_to_nothing(c)).collect();

    let (domain, result) = idna::domain_to_unicode(&prepped);
    if result.is_err() || domain.chars().any(is_prohibited) {
        tracing::debug!(host = text, "domain mapping failed");
        return Err(Error::new(Reason::InvalidDomain, text));
    }

    if let Some(addr) = ipv4::parse(&domain)? {
        return Ok(Host::Ipv4(addr));
    }
    if ends_in_number(&domain) {
        return Err(Error::new(Reason::NumericDomain, text));
    }
    if domain.is_empty() || domain.chars().any(is_forbidden_domain_char) {
        return Err(Error::new(Reason::InvalidDomain, text));
    }
    Ok(Host::Domain(domain.split('.').map(Into::into).collect()))
}

/// Converts domain labels to their ASCII (punycode) form.
///
/// # Failures
///
/// Fails with [`Reason::InvalidDomain`] if the labels cannot be converted.
///
/// ```
/// use url_reference::host::domain::domain_to_ascii;
///
/// let labels = ["b\u{FC}cher".to_string(), "example".to_string()];
/// assert_eq!(domain_to_ascii(&labels)?, ["xn--bcher-kva", "example"]);
/// # Ok::<_, url_reference::Error>(())
/// ```
pub fn domain_to_ascii(labels: &[String]) -> Result<Vec<String>, Error> {
    if labels.iter().all(|label| label.is_ascii()) {
        return Ok(labels.to_vec());
    }
    let joined = labels.join(".");
    match idna::domain_to_ascii(&joined) {
        Ok(ascii) => Ok(ascii.split('.').map(Into::into).collect()),
        Err(_) => Err(Error::new(Reason::InvalidDomain, joined)),
    }
}

/// Returns true if the codepoint is in nameprep table B.1 (mapped to nothing).
#[must_use]
fn is_mapped_to_nothing(c: char) -> bool {
    matches!(
        c,
        '\u{AD}'
            | '\u{34F}'
            | '\u{1806}'
            | '\u{180B}'..='\u{180D}'
            | '\u{200B}'..='\u{200D}'
            | '\u{2060}'
            | '\u{FE00}'..='\u{FE0F}'
            | '\u{FEFF}'
    )
}

/// Returns true if the codepoint is a non-character or a specials codepoint.
#[must_use]
fn is_prohibited(c: char) -> bool {
    let cp = u32::from(c);
    matches!(cp, 0xFDD0..=0xFDEF | 0xFFF9..=0xFFFD) || (cp >> 1) & 0x7FFF == 0x7FFF
}

/// Returns true if the codepoint cannot appear in a domain.
#[must_use]
fn is_forbidden_domain_char(c: char) -> bool {
    matches!(
        c,
        '\0'..=' '
            | '\u{7F}'
            | '#'
            | '%'
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
}

/// Returns true if the last label is a decimal or `0x` hexadecimal number.
///
/// A single trailing dot is ignored.
#[must_use]
fn ends_in_number(domain: &str) -> bool {
    let domain = domain.strip_suffix('.').unwrap_or(domain);
    let last = domain.rsplit('.').next().unwrap_or(domain);
    if !last.is_empty() && last.bytes().all(|b| b.is_ascii_digit()) {
        return true;
    }
    match last.strip_prefix("0x").or_else(|| last.strip_prefix("0X")) {
        Some(hex) => hex.bytes().all(|b| b.is_ascii_hexdigit()),
        None => false,
    }
}
