//! Parsing and resolution modes.
//!
//! A [`Mode`] is a set of independent options that affect how a reference is
//! tokenized and how it is forced into an absolute URL by
//! [`resolve`][`crate::resolve::resolve`]. Four configurations are predefined:
//!
//! * [`Mode::GENERIC`]: RFC 3986 behaviour, no options set.
//! * [`Mode::NOSCHEME`]: used for references without a scheme.
//! * [`Mode::WEB`]: http, https, ws, wss and ftp.
//! * [`Mode::FILE`]: file URLs.

use core::fmt;
use core::ops::{BitAnd, BitOr};

use crate::components::UrlComponents;

/// A set of parsing and resolution options.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct Mode(u16);

impl Mode {
    /// Resolved URLs must have an authority and a hierarchical path.
    pub const HIER_PART: Self = Self(1 << 0);
    /// Resolved URLs must not have credentials nor a port.
    pub const PLAIN_AUTH: Self = Self(1 << 1);
    /// Resolved URLs must have a non-empty authority, taken from the path if absent.
    pub const STEAL_AUTH: Self = Self(1 << 2);
    /// Resolved URL hosts must be domains or IP addresses.
    pub const PARSE_DOMAIN: Self = Self(1 << 3);
    /// Use the non-strict reference transformation (RFC 3986 section 5.2.2).
    pub const NON_STRICT: Self = Self(1 << 4);
    /// Detect windows drive letters.
    pub const WIN_DRIVE: Self = Self(1 << 5);
    /// Treat `\` before the query as `/`.
    pub const WIN_SLASH: Self = Self(1 << 6);
    /// Escape `'` in the query.
    pub const SPECIAL_QUERY: Self = Self(1 << 7);

    /// Options shared by the special schemes and schemeless references.
    const SPECIAL: Self = Self(
        Self::HIER_PART.0 | Self::WIN_SLASH.0 | Self::NON_STRICT.0 | Self::SPECIAL_QUERY.0,
    );

    /// Generic RFC 3986 URLs.
    pub const GENERIC: Self = Self(0);
    /// References without a scheme.
    pub const NOSCHEME: Self = Self(Self::SPECIAL.0 | Self::WIN_DRIVE.0);
    /// Web URLs: http, https, ws, wss and ftp.
    pub const WEB: Self = Self(Self::SPECIAL.0 | Self::PARSE_DOMAIN.0 | Self::STEAL_AUTH.0);
    /// File URLs.
    pub const FILE: Self =
        Self(Self::SPECIAL.0 | Self::PARSE_DOMAIN.0 | Self::PLAIN_AUTH.0 | Self::WIN_DRIVE.0);

    /// Returns the raw bits.
    #[inline]
    #[must_use]
    pub const fn bits(self) -> u16 {
        self.0
    }

    /// Returns true if all options in `other` are set in `self`.
    #[inline]
    #[must_use]
    pub const fn contains(self, other: Self) -> bool {
        self.0 & other.0 == other.0
    }

    /// Returns the mode associated with the given scheme.
    ///
    /// Scheme comparison is ASCII case-insensitive. Schemes other than the
    /// special ones use [`Mode::GENERIC`].
    ///
    /// ```
    /// use url_reference::Mode;
    ///
    /// assert_eq!(Mode::for_scheme("HTTPS"), Mode::WEB);
    /// assert_eq!(Mode::for_scheme("file"), Mode::FILE);
    /// assert_eq!(Mode::for_scheme("urn"), Mode::GENERIC);
    /// ```
    #[must_use]
    pub fn for_scheme(scheme: &str) -> Self {
        const SPECIAL_SCHEMES: &[(&str, Mode)] = &[
            ("http", Mode::WEB),
            ("https", Mode::WEB),
            ("ws", Mode::WEB),
            ("wss", Mode::WEB),
            ("ftp", Mode::WEB),
            ("file", Mode::FILE),
        ];
        SPECIAL_SCHEMES
            .iter()
            .find(|(name, _)| name.eq_ignore_ascii_case(scheme))
            .map_or(Self::GENERIC, |&(_, mode)| mode)
    }
}

impl Default for Mode {
    #[inline]
    fn default() -> Self {
        Self::NOSCHEME
    }
}

impl BitOr for Mode {
    type Output = Self;

    #[inline]
    fn bitor(self, rhs: Self) -> Self {
        Self(self.0 | rhs.0)
    }
}

impl BitAnd for Mode {
    type Output = Self;

    #[inline]
    fn bitand(self, rhs: Self) -> Self {
        Self(self.0 & rhs.0)
    }
}

impl fmt::Debug for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        /// Option names, in bit order.
        const NAMES: [&str; 8] = [
            "HIER_PART",
            "PLAIN_AUTH",
            "STEAL_AUTH",
            "PARSE_DOMAIN",
            "NON_STRICT",
            "WIN_DRIVE",
            "WIN_SLASH",
            "SPECIAL_QUERY",
        ];
        f.write_str("Mode(")?;
        let mut first = true;
        for (i, name) in NAMES.iter().enumerate() {
            if self.0 & (1 << i) != 0 {
                if !first {
                    f.write_str(" | ")?;
                }
                f.write_str(name)?;
                first = false;
            }
        }
        if first {
            f.write_str("GENERIC")?;
        }
        f.write_str(")")
    }
}

/// Returns the mode for the given URL.
///
/// The mode is selected by the scheme if present. Schemeless URLs with a
/// drive letter use [`Mode::FILE`], other schemeless URLs use `fallback`.
#[must_use]
pub fn mode_for(url: &UrlComponents, fallback: Mode) -> Mode {
    match (&url.scheme, &url.drive) {
        (Some(scheme), _) => Mode::for_scheme(scheme),
        (None, Some(_)) => Mode::FILE,
        (None, None) => fallback,
    }
}

/// Returns the registered default port of the given (lowercase) scheme.
#[must_use]
pub fn default_port(scheme: &str) -> Option<u16> {
    match scheme {
        "http" | "ws" => Some(80),
        "https" | "wss" => Some(443),
        "ftp" => Some(21),
        _ => None,
    }
}
