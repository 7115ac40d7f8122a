//! Errors.

use core::fmt;

use alloc::string::String;
use alloc::vec::Vec;

use crate::percent_encode::EncodeSet;

/// Error raised by parsing, resolution and percent-coding operations.
///
/// The error reports which rule was violated ([`Error::reason`]) and the
/// offending input ([`Error::subject`]). Operations fail atomically: no
/// partial result is available on error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Error {
    /// The violated rule.
    reason: Reason,
    /// The offending input.
    subject: String,
    /// Rejected codepoints, for encoding errors.
    codepoints: Vec<char>,
}

impl Error {
    /// Creates a new error.
    #[must_use]
    pub(crate) fn new(reason: Reason, subject: impl Into<String>) -> Self {
        Self {
            reason,
            subject: subject.into(),
            codepoints: Vec::new(),
        }
    }

    /// Creates a new encoding error listing the rejected codepoints.
    #[must_use]
    pub(crate) fn rejected(set: EncodeSet, subject: &str, codepoints: Vec<char>) -> Self {
        Self {
            reason: Reason::RejectedCodePoints(set),
            subject: subject.into(),
            codepoints,
        }
    }

    /// Returns the error kind.
    #[must_use]
    pub fn kind(&self) -> ErrorKind {
        self.reason.kind()
    }

    /// Returns the violated rule.
    #[inline]
    #[must_use]
    pub fn reason(&self) -> Reason {
        self.reason
    }

    /// Returns the offending input.
    #[inline]
    #[must_use]
    pub fn subject(&self) -> &str {
        &self.subject
    }

    /// Returns the rejected codepoints.
    ///
    /// This is empty unless the reason is [`Reason::RejectedCodePoints`].
    #[inline]
    #[must_use]
    pub fn codepoints(&self) -> &[char] {
        &self.codepoints
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {:?}", self.reason, self.subject)?;
        if !self.codepoints.is_empty() {
            write!(f, " {:?}", self.codepoints)?;
        }
        Ok(())
    }
}

#[cfg(feature = "std")]
#[cfg_attr(docsrs, doc(cfg(feature = "std")))]
impl std::error::Error for Error {}

/// Error kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// Malformed authority.
    Authority,
    /// Invalid host.
    Host,
    /// Percent-coding failure.
    Encoding,
    /// The reference cannot be rebased onto the base.
    Rebase,
    /// The reference cannot be forced into an absolute URL.
    Resolve,
}

/// The rule that an input violated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub enum Reason {
    /// The port has non-digit characters or is out of range.
    InvalidPort,
    /// A port is present but the host is empty.
    PortWithoutHost,
    /// Credentials are present but the host is empty.
    CredentialsWithoutHost,
    /// A password is present but the username is empty.
    PasswordWithoutUser,
    /// A bracketed host is not a valid IPv6 address.
    InvalidBracketedHost,
    /// Invalid IPv4 address.
    InvalidIpv4,
    /// Invalid IPv6 address.
    InvalidIpv6,
    /// The domain could not be mapped or contains forbidden codepoints.
    InvalidDomain,
    /// The last label of the domain is a number.
    NumericDomain,
    /// An opaque host contains a forbidden codepoint.
    ForbiddenHostCodePoint,
    /// Percent-encoding rejected codepoints for the encode set.
    RejectedCodePoints(EncodeSet),
    /// Percent-decoded bytes are not valid UTF-8.
    InvalidUtf8,
    /// Percent-decoded bytes end with an incomplete UTF-8 sequence.
    IncompleteUtf8,
    /// The base has an opaque path and the reference is not fragment-only.
    OpaquePathBase,
    /// The rebased reference has no scheme.
    NoScheme,
    /// No authority could be found for a URL that requires one.
    MissingHost,
    /// Credentials or a port are present where they are not allowed.
    ForbiddenCredentials,
}

impl Reason {
    /// Returns the error kind of the reason.
    #[must_use]
    pub fn kind(self) -> ErrorKind {
        match self {
            Self::InvalidPort
            | Self::PortWithoutHost
            | Self::CredentialsWithoutHost
            | Self::PasswordWithoutUser
            | Self::InvalidBracketedHost => ErrorKind::Authority,
            Self::InvalidIpv4
            | Self::InvalidIpv6
            | Self::InvalidDomain
            | Self::NumericDomain
            | Self::ForbiddenHostCodePoint => ErrorKind::Host,
            Self::RejectedCodePoints(_) | Self::InvalidUtf8 | Self::IncompleteUtf8 => {
                ErrorKind::Encoding
            }
            Self::OpaquePathBase => ErrorKind::Rebase,
            Self::NoScheme | Self::MissingHost | Self::ForbiddenCredentials => ErrorKind::Resolve,
        }
    }
}

impl fmt::Display for Reason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::InvalidPort => "invalid port",
            Self::PortWithoutHost => "port without host",
            Self::CredentialsWithoutHost => "credentials without host",
            Self::PasswordWithoutUser => "password without username",
            Self::InvalidBracketedHost => "invalid bracketed host",
            Self::InvalidIpv4 => "invalid IPv4 address",
            Self::InvalidIpv6 => "invalid IPv6 address",
            Self::InvalidDomain => "invalid domain",
            Self::NumericDomain => "domain ends in a number",
            Self::ForbiddenHostCodePoint => "forbidden host codepoint",
            Self::RejectedCodePoints(set) => return write!(f, "rejected codepoints in {set:?}"),
            Self::InvalidUtf8 => "invalid UTF-8",
            Self::IncompleteUtf8 => "incomplete UTF-8",
            Self::OpaquePathBase => "cannot rebase onto an opaque path",
            Self::NoScheme => "no scheme",
            Self::MissingHost => "missing host",
            Self::ForbiddenCredentials => "credentials or port not allowed",
        };
        f.write_str(name)
    }
}
