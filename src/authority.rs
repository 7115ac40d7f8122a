//! Authority parsing.
//!
//! The authority is split with a single left-to-right scan that records the
//! position of three sigils:
//!
//! * the credentials sigil: the last `@`,
//! * the password sigil: the first `:`, if it comes before the credentials sigil,
//! * the port sigil: the first `:` after the credentials sigil that is not
//!   inside brackets.
//!
//! The host is not parsed as a domain here: it is either an IPv6 address or
//! an opaque host string.

use core::fmt;

use alloc::string::String;

use crate::error::{Error, Reason};
use crate::host::{ipv6, Host};

/// Port of a URL.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Port {
    /// The empty port, as in `host:`.
    Empty,
    /// A port number.
    Number(u16),
}

impl fmt::Display for Port {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => Ok(()),
            Self::Number(n) => write!(f, "{n}"),
        }
    }
}

/// Authority components.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Authority {
    /// Username.
    pub user: Option<String>,
    /// Password.
    pub pass: Option<String>,
    /// Host.
    pub host: Host,
    /// Port.
    pub port: Option<Port>,
}

impl Authority {
    /// Checks the structural rules of an authority.
    ///
    /// A port or credentials require a non-empty host, and a password requires
    /// a username.
    ///
    /// # Failures
    ///
    /// Fails with [`Reason::PortWithoutHost`],
    /// [`Reason::CredentialsWithoutHost`] or [`Reason::PasswordWithoutUser`].
    pub fn validate(&self) -> Result<(), Reason> {
        let no_host = self.host.is_empty();
        if no_host && self.port.is_some() {
            return Err(Reason::PortWithoutHost);
        }
        if no_host && (self.user.is_some() || self.pass.is_some()) {
            return Err(Reason::CredentialsWithoutHost);
        }
        if self.pass.is_some() && self.user.is_none() {
            return Err(Reason::PasswordWithoutUser);
        }
        Ok(())
    }
}

/// Parses an authority, without the leading `//`.
///
/// # Failures
///
/// Fails with an [authority error][`crate::ErrorKind::Authority`] if the port
/// is invalid, a bracketed host is not an IPv6 address, or the structural
/// rules checked by [`Authority::validate`] are violated.
///
/// # Examples
///
/// ```
/// use url_reference::authority::{parse_authority, Port};
/// use url_reference::Host;
///
/// let auth = parse_authority("user:pa:ss@[::1]:8080")?;
/// assert_eq!(auth.user.as_deref(), Some("user"));
/// assert_eq!(auth.pass.as_deref(), Some("pa:ss"));
/// assert_eq!(auth.host, Host::Ipv6([0, 0, 0, 0, 0, 0, 0, 1]));
/// assert_eq!(auth.port, Some(Port::Number(8080)));
///
/// assert!(parse_authority("user@").is_err());
/// # Ok::<_, url_reference::Error>(())
/// ```
pub fn parse_authority(text: &str) -> Result<Authority, Error> {
    let mut creds = None;
    let mut pass = None;
    let mut port = None;
    let mut brackets = false;
    for (i, b) in text.bytes().enumerate() {
        match b {
            b'[' => brackets = true,
            b']' => brackets = false,
            b'@' => {
                brackets = false;
                creds = Some(i);
                port = None;
            }
            b':' => {
                if pass.is_none() {
                    pass = Some(i);
                }
                if !brackets && port.is_none() {
                    port = Some(i);
                }
            }
            _ => {}
        }
    }
    let host_start = creds.map_or(0, |c| c + 1);
    let host_end = port.unwrap_or(text.len());
    let (user, pass) = match (creds, pass) {
        (Some(c), Some(w)) if w < c => (Some(&text[..w]), Some(&text[w + 1..c])),
        (Some(c), _) => (Some(&text[..c]), None),
        (None, _) => (None, None),
    };

    let host_text = &text[host_start..host_end];
    let host = if host_text.starts_with('[') {
        ipv6::parse(host_text)
            .map(Host::Ipv6)
            .map_err(|_| Error::new(Reason::InvalidBracketedHost, text))?
    } else {
        Host::Opaque(host_text.into())
    };
    let port = match port {
        Some(p) => Some(parse_port(&text[p + 1..]).map_err(|e| Error::new(e.reason(), text))?),
        None => None,
    };

    let auth = Authority {
        user: user.map(Into::into),
        pass: pass.map(Into::into),
        host,
        port,
    };
    auth.validate().map_err(|reason| Error::new(reason, text))?;
    Ok(auth)
}

/// Parses a port.
///
/// A port is either empty, or decimal digits denoting a number below 2^16.
///
/// # Failures
///
/// Fails with [`Reason::InvalidPort`] otherwise.
pub fn parse_port(text: &str) -> Result<Port, Error> {
    if text.is_empty() {
        return Ok(Port::Empty);
    }
    if !text.bytes().all(|b| b.is_ascii_digit()) {
        return Err(Error::new(Reason::InvalidPort, text));
    }
    text.parse()
        .map(Port::Number)
        .map_err(|_| Error::new(Reason::InvalidPort, text))
}
