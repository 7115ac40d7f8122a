//! Percent-coding of whole URLs.
//!
//! [`percent_encode`] selects the [`EncodeSet`] of each component from the
//! component type and the mode of the URL, and converts domains to ASCII
//! when the profile asks for ASCII output. [`percent_decode`] is its
//! inverse for the string components.

use alloc::string::String;
use alloc::vec::Vec;

use crate::components::UrlComponents;
use crate::error::Error;
use crate::host::domain::domain_to_ascii;
use crate::host::Host;
use crate::mode::Mode;
use crate::percent_encode::{decode, encode, EncodeSet, Profile};

/// Encodes an optional component.
fn encode_opt(
    text: &Option<String>,
    set: EncodeSet,
    profile: Profile,
) -> Result<Option<String>, Error> {
    text.as_deref()
        .map(|text| encode(text, set, profile))
        .transpose()
}

/// Decodes an optional component.
fn decode_opt(text: &Option<String>) -> Result<Option<String>, Error> {
    text.as_deref().map(decode).transpose()
}

/// Returns the URL with every component percent-encoded.
///
/// * Username and password use [`EncodeSet::UserInfo`].
/// * Opaque hosts use [`EncodeSet::OpaqueHost`]. Domains are converted to
///   ASCII (punycode) if the profile is not `unicode`. IP addresses are left
///   as is.
/// * Path segments use [`EncodeSet::OpaquePath`] if the URL has an opaque
///   path, and [`EncodeSet::PathSegment`] otherwise.
/// * The query uses [`EncodeSet::SpecialQuery`] in modes with
///   [`Mode::SPECIAL_QUERY`], and [`EncodeSet::Query`] otherwise.
/// * The fragment uses [`EncodeSet::Fragment`].
///
/// # Failures
///
/// Fails if a component contains rejected codepoints (see
/// [`encode`][`crate::percent_encode::encode`]), or if a domain cannot be
/// converted to ASCII.
///
/// # Examples
///
/// ```
/// use url_reference::{parse, percent_encode, print, Mode, Profile};
///
/// let url = parse("?q=it's \u{263A}", Mode::NOSCHEME)?;
/// let encoded = percent_encode(&url, Profile::URL)?;
/// assert_eq!(encoded.query.as_deref(), Some("q=it%27s%20\u{263A}"));
///
/// let url = parse("sch:/?q=it's \u{263A}", Mode::NOSCHEME)?;
/// let encoded = percent_encode(&url, Profile::WHATWG)?;
/// assert_eq!(encoded.query.as_deref(), Some("q=it's%20%E2%98%BA"));
/// # Ok::<_, url_reference::Error>(())
/// ```
pub fn percent_encode(url: &UrlComponents, profile: Profile) -> Result<UrlComponents, Error> {
    let mode = url.mode(Mode::NOSCHEME);
    let segment_set = if url.has_opaque_path() {
        EncodeSet::OpaquePath
    } else {
        EncodeSet::PathSegment
    };
    let query_set = if mode.contains(Mode::SPECIAL_QUERY) {
        EncodeSet::SpecialQuery
    } else {
        EncodeSet::Query
    };

    let host = match &url.host {
        Some(Host::Opaque(text)) => Some(Host::Opaque(encode(
            text,
            EncodeSet::OpaqueHost,
            profile,
        )?)),
        Some(Host::Domain(labels)) if !profile.unicode => {
            Some(Host::Domain(domain_to_ascii(labels)?))
        }
        host => host.clone(),
    };
    let dirs = url
        .dirs
        .iter()
        .map(|dir| encode(dir, segment_set, profile))
        .collect::<Result<Vec<_>, _>>()?;

    Ok(UrlComponents {
        scheme: url.scheme.clone(),
        user: encode_opt(&url.user, EncodeSet::UserInfo, profile)?,
        pass: encode_opt(&url.pass, EncodeSet::UserInfo, profile)?,
        host,
        port: url.port,
        drive: url.drive.clone(),
        root: url.root,
        dirs,
        file: encode_opt(&url.file, segment_set, profile)?,
        query: encode_opt(&url.query, query_set, profile)?,
        hash: encode_opt(&url.hash, EncodeSet::Fragment, profile)?,
    })
}

/// Returns the URL with every string component percent-decoded.
///
/// The scheme, the port, the drive, IP addresses and domains are left as is.
///
/// # Failures
///
/// Fails if an escaped byte sequence is not valid UTF-8.
///
/// # Examples
///
/// ```
/// use url_reference::{parse, percent_decode, Mode};
///
/// let url = parse("//j%C3%B6e@host/%61b?%3D#%25", Mode::NOSCHEME)?;
/// let decoded = percent_decode(&url)?;
/// assert_eq!(decoded.user.as_deref(), Some("j\u{F6}e"));
/// assert_eq!(decoded.file.as_deref(), Some("ab"));
/// assert_eq!(decoded.query.as_deref(), Some("="));
/// assert_eq!(decoded.hash.as_deref(), Some("%"));
/// # Ok::<_, url_reference::Error>(())
/// ```
pub fn percent_decode(url: &UrlComponents) -> Result<UrlComponents, Error> {
    let host = match &url.host {
        Some(Host::Opaque(text)) => Some(Host::Opaque(decode(text)?)),
        host => host.clone(),
    };
    let dirs = url
        .dirs
        .iter()
        .map(|dir| decode(dir))
        .collect::<Result<Vec<_>, _>>()?;

    Ok(UrlComponents {
        scheme: url.scheme.clone(),
        user: decode_opt(&url.user)?,
        pass: decode_opt(&url.pass)?,
        host,
        port: url.port,
        drive: url.drive.clone(),
        root: url.root,
        dirs,
        file: decode_opt(&url.file)?,
        query: decode_opt(&url.query)?,
        hash: decode_opt(&url.hash)?,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    use alloc::vec;

    use crate::error::Reason;
    use crate::parser::parse;

    #[test]
    fn opaque_path_set() {
        let url = parse("sch:a/b c", Mode::NOSCHEME).unwrap();
        let encoded = percent_encode(&url, Profile::URL).unwrap();
        assert_eq!(encoded.file.as_deref(), Some("a/b%20c"));
    }

    #[test]
    fn hosts() {
        let url = UrlComponents {
            host: Some(Host::Opaque("\u{1F332}".into())),
            ..UrlComponents::default()
        };
        let encoded = percent_encode(&url, Profile::WHATWG).unwrap();
        assert_eq!(encoded.host, Some(Host::Opaque("%F0%9F%8C%B2".into())));
        let encoded = percent_encode(&url, Profile::URL).unwrap();
        assert_eq!(encoded.host, url.host);

        let url = UrlComponents {
            host: Some(Host::Domain(vec!["\u{1F332}".into()])),
            ..UrlComponents::default()
        };
        let encoded = percent_encode(&url, Profile::WHATWG).unwrap();
        assert_eq!(encoded.host, Some(Host::Domain(vec!["xn--vh8h".into()])));

        let url = UrlComponents {
            host: Some(Host::Opaque("a b".into())),
            ..UrlComponents::default()
        };
        let e = percent_encode(&url, Profile::URL).unwrap_err();
        assert_eq!(e.reason(), Reason::RejectedCodePoints(EncodeSet::OpaqueHost));
    }

    #[test]
    fn idempotent() {
        let url = parse("//us er@h/a b/%7Cc?d'e#f`g", Mode::NOSCHEME).unwrap();
        let once = percent_encode(&url, Profile::URL).unwrap();
        assert_eq!(percent_encode(&once, Profile::URL).unwrap(), once);
    }

    #[test]
    fn decode_errors() {
        let url = parse("a%FF", Mode::NOSCHEME).unwrap();
        assert_eq!(percent_decode(&url).unwrap_err().reason(), Reason::InvalidUtf8);
    }
}
