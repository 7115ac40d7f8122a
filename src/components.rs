//! URL components and their ordering.
//!
//! A URL is an ordered sequence of components, ordered by their
//! [`ComponentType`]. Every component is optional, but if a URL has a host or
//! a drive, and it also has directory or file components, then it also has a
//! path root.

use alloc::string::String;
use alloc::vec::Vec;

use crate::authority::Port;
use crate::error::Error;
use crate::host::Host;
use crate::mode::{mode_for, Mode};
use crate::parser::parse;

/// Component type.
///
/// Types are totally ordered in the order in which components appear in a URL.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ComponentType {
    /// Scheme.
    Scheme = 1,
    /// Authority: username, password, host and port.
    Authority = 2,
    /// Drive letter.
    Drive = 3,
    /// Path root.
    Root = 4,
    /// Directory segments.
    Dir = 5,
    /// Last path segment.
    File = 6,
    /// Query.
    Query = 7,
    /// Fragment.
    Fragment = 8,
}

/// Components of a URL reference.
///
/// Values are produced by [`parse`][`crate::parse`] and transformed by the
/// pure functions of this crate, which always return new values.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct UrlComponents {
    /// Scheme, without the `:`.
    pub scheme: Option<String>,
    /// Username.
    pub user: Option<String>,
    /// Password.
    pub pass: Option<String>,
    /// Host. `Some(Host::empty())` is the empty authority.
    pub host: Option<Host>,
    /// Port.
    pub port: Option<Port>,
    /// Drive letter followed by `:` or `|`.
    pub drive: Option<String>,
    /// Whether the path is absolute.
    pub root: bool,
    /// Directory segments. Empty if absent.
    pub dirs: Vec<String>,
    /// Last path segment, or the opaque path.
    pub file: Option<String>,
    /// Query, without the `?`.
    pub query: Option<String>,
    /// Fragment, without the `#`.
    pub hash: Option<String>,
}

impl UrlComponents {
    /// Returns the type of the first component, or [`ComponentType::Fragment`]
    /// if the URL is empty.
    ///
    /// ```
    /// use url_reference::{parse, ComponentType, Mode};
    ///
    /// assert_eq!(parse("//host/a", Mode::NOSCHEME)?.ord(), ComponentType::Authority);
    /// assert_eq!(parse("a/b", Mode::NOSCHEME)?.ord(), ComponentType::Dir);
    /// assert_eq!(parse("?q", Mode::NOSCHEME)?.ord(), ComponentType::Query);
    /// assert_eq!(parse("", Mode::NOSCHEME)?.ord(), ComponentType::Fragment);
    /// # Ok::<_, url_reference::Error>(())
    /// ```
    #[must_use]
    pub fn ord(&self) -> ComponentType {
        if self.scheme.is_some() {
            ComponentType::Scheme
        } else if self.host.is_some() {
            ComponentType::Authority
        } else if self.drive.is_some() {
            ComponentType::Drive
        } else if self.root {
            ComponentType::Root
        } else if !self.dirs.is_empty() {
            ComponentType::Dir
        } else if self.file.is_some() {
            ComponentType::File
        } else if self.query.is_some() {
            ComponentType::Query
        } else {
            ComponentType::Fragment
        }
    }

    /// Returns the prefix of components with a type below `ord`.
    ///
    /// Directory segments are also kept if `ord` is [`ComponentType::Dir`].
    #[must_use]
    pub fn upto(&self, ord: ComponentType) -> Self {
        let below = |ty: ComponentType| ty < ord;
        let auth = below(ComponentType::Authority);
        Self {
            scheme: self.scheme.clone().filter(|_| below(ComponentType::Scheme)),
            user: self.user.clone().filter(|_| auth),
            pass: self.pass.clone().filter(|_| auth),
            host: self.host.clone().filter(|_| auth),
            port: self.port.filter(|_| auth),
            drive: self.drive.clone().filter(|_| below(ComponentType::Drive)),
            root: self.root && below(ComponentType::Root),
            dirs: if ord >= ComponentType::Dir {
                self.dirs.clone()
            } else {
                Vec::new()
            },
            file: self.file.clone().filter(|_| below(ComponentType::File)),
            query: self.query.clone().filter(|_| below(ComponentType::Query)),
            hash: None,
        }
    }

    /// Returns the mode of the URL, using `fallback` for schemeless URLs
    /// without a drive.
    #[inline]
    #[must_use]
    pub fn mode(&self, fallback: Mode) -> Mode {
        mode_for(self, fallback)
    }

    /// Returns true if the URL has an opaque path.
    ///
    /// Only URLs with a non-special scheme, no authority and no path root have
    /// an opaque path.
    #[must_use]
    pub fn has_opaque_path(&self) -> bool {
        self.mode(Mode::NOSCHEME) == Mode::GENERIC && self.host.is_none() && !self.root
    }

    /// Returns true if the URL consists of a fragment only.
    #[must_use]
    pub fn is_fragment_only(&self) -> bool {
        self.hash.is_some() && self.ord() == ComponentType::Fragment
    }

    /// Returns true if the URL has a scheme and either a host or a path root.
    #[must_use]
    pub fn is_base(&self) -> bool {
        self.scheme.is_some() && (self.host.is_some() || self.root)
    }

    /// Restores the rule that a host or a drive demands an absolute path.
    pub(crate) fn fix_root(&mut self) {
        if (self.host.is_some() || self.drive.is_some())
            && (!self.dirs.is_empty() || self.file.is_some())
        {
            self.root = true;
        }
    }
}

/// Values that can be turned into URL components.
///
/// Strings are parsed in the given mode. Components are cloned as is.
pub trait ToComponents {
    /// Returns the components, parsing in `mode` if needed.
    ///
    /// # Failures
    ///
    /// Fails if the value is a string with an invalid authority.
    fn to_components(&self, mode: Mode) -> Result<UrlComponents, Error>;
}

impl ToComponents for str {
    #[inline]
    fn to_components(&self, mode: Mode) -> Result<UrlComponents, Error> {
        parse(self, mode)
    }
}

impl ToComponents for String {
    #[inline]
    fn to_components(&self, mode: Mode) -> Result<UrlComponents, Error> {
        parse(self, mode)
    }
}

impl ToComponents for UrlComponents {
    #[inline]
    fn to_components(&self, _mode: Mode) -> Result<UrlComponents, Error> {
        Ok(self.clone())
    }
}

/// Returns true if both schemes are present and equal, ignoring ASCII case.
#[must_use]
pub fn schemes_are_equivalent(s1: Option<&str>, s2: Option<&str>) -> bool {
    match (s1, s2) {
        (Some(s1), Some(s2)) => s1.eq_ignore_ascii_case(s2),
        _ => false,
    }
}
