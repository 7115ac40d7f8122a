//! Rebasing and resolution.
//!
//! # Rebase versus resolve
//!
//! [`rebase`] is a generalization of reference resolution: the base need not
//! be absolute, and the result may be a relative reference. It merges the
//! components of the input with the prefix of the base that precedes the
//! first component of the input.
//!
//! [`resolve`] additionally demands an absolute result and applies the
//! scheme-specific forcing rules of special URLs (see [`force`]), then
//! normalizes and percent-encodes the result.
//!
//! # Opaque paths
//!
//! A base with an opaque path (such as `sch:opaque` or `sch:`) only accepts
//! fragment-only inputs and inputs with a scheme.
//!
//! # Non-strict rebase
//!
//! In modes with [`Mode::NON_STRICT`], an input with the same scheme as the
//! base is treated as if it had no scheme, so `http:foo` rebased onto
//! `http://host` takes the host of the base.
//!
//! ```
//! use url_reference::{print, rebase, resolve};
//!
//! let url = rebase("http:foo", "http://host")?;
//! assert_eq!(print(&url), "http://host/foo");
//!
//! // The result of a rebase can be relative.
//! let url = rebase("file1", "/dir2/file2?query2")?;
//! assert_eq!(print(&url), "/dir2/file1");
//! assert!(resolve("file1", "/dir2/file2?query2").is_err());
//!
//! assert!(rebase("/x", "sch:opaque").is_err());
//! assert_eq!(print(&rebase("#frag", "sch:opaque")?), "sch:opaque#frag");
//! # Ok::<_, url_reference::Error>(())
//! ```

#[cfg(test)]
mod tests;

use crate::authority::parse_authority;
use crate::components::{schemes_are_equivalent, ComponentType, ToComponents, UrlComponents};
use crate::convert::percent_encode;
use crate::error::{Error, Reason};
use crate::format::print;
use crate::host::{parse_host, Host};
use crate::mode::{mode_for, Mode};
use crate::normalize::normalize;
use crate::percent_encode::Profile;

/// A resolver against the fixed base.
///
/// Inputs given as strings are parsed in the mode of the base.
#[derive(Debug, Clone)]
pub struct FixedBaseResolver {
    /// Components of the base.
    base: UrlComponents,
    /// Mode used for parsing inputs.
    mode: Mode,
}

impl FixedBaseResolver {
    /// Creates a new resolver with the given base.
    ///
    /// A base given as a string is parsed with [`Mode::NOSCHEME`].
    ///
    /// # Failures
    ///
    /// Fails if the base is a string with an invalid authority.
    ///
    /// # Examples
    ///
    /// ```
    /// use url_reference::resolve::FixedBaseResolver;
    ///
    /// let resolver = FixedBaseResolver::new("http://example.com/base/")?;
    /// let resolved = resolver.resolve("../there")?;
    /// assert_eq!(resolved.to_string(), "http://example.com/there");
    /// # Ok::<_, url_reference::Error>(())
    /// ```
    pub fn new<B: ToComponents + ?Sized>(base: &B) -> Result<Self, Error> {
        let base = base.to_components(Mode::NOSCHEME)?;
        let mode = mode_for(&base, Mode::NOSCHEME);
        Ok(Self { base, mode })
    }

    /// Returns the base.
    #[inline]
    #[must_use]
    pub fn base(&self) -> &UrlComponents {
        &self.base
    }

    /// Rebases the input onto the base.
    ///
    /// # Failures
    ///
    /// Fails if the input does not parse, or with [`Reason::OpaquePathBase`]
    /// if the base has an opaque path and the input has neither a scheme nor
    /// only a fragment.
    pub fn rebase<T: ToComponents + ?Sized>(&self, input: &T) -> Result<UrlComponents, Error> {
        let url = input.to_components(self.mode)?;
        rebase_components(&url, &self.base)
    }

    /// Resolves the input against the base, and encodes it with [`Profile::URL`].
    ///
    /// # Failures
    ///
    /// Fails if [`rebase`][`Self::rebase`] or [`force`] fails, if the result
    /// has no scheme, or if it cannot be percent-encoded.
    #[inline]
    pub fn resolve<T: ToComponents + ?Sized>(&self, input: &T) -> Result<UrlComponents, Error> {
        self.resolve_with(input, Profile::URL)
    }

    /// Resolves the input against the base, and encodes it with the given profile.
    ///
    /// # Failures
    ///
    /// Fails if [`rebase`][`Self::rebase`] or [`force`] fails, if the result
    /// has no scheme, or if it cannot be percent-encoded.
    pub fn resolve_with<T: ToComponents + ?Sized>(
        &self,
        input: &T,
        profile: Profile,
    ) -> Result<UrlComponents, Error> {
        let rebased = self.rebase(input)?;
        if rebased.scheme.is_none() {
            let e = Error::new(Reason::NoScheme, print(&rebased));
            tracing::debug!(url = e.subject(), "cannot resolve a reference without scheme");
            return Err(e);
        }
        let forced = force(&rebased)?;
        percent_encode(&normalize(&forced), profile)
    }
}

/// Rebases the input onto the base.
///
/// A string input is parsed in the mode of the base, and a string base is
/// parsed with [`Mode::NOSCHEME`].
///
/// # Failures
///
/// See [`FixedBaseResolver::rebase`].
///
/// # Examples
///
/// ```
/// use url_reference::{print, rebase};
///
/// assert_eq!(print(&rebase("./", "/path/dir/file")?), "/path/dir/");
/// assert_eq!(print(&rebase("?q", "//auth/file#h")?), "//auth/file?q");
/// // The base decides how the input is parsed.
/// assert_eq!(print(&rebase("c|/", "sch:/")?), "sch:/c|/");
/// # Ok::<_, url_reference::Error>(())
/// ```
pub fn rebase<T, B>(input: &T, base: &B) -> Result<UrlComponents, Error>
where
    T: ToComponents + ?Sized,
    B: ToComponents + ?Sized,
{
    FixedBaseResolver::new(base)?.rebase(input)
}

/// Resolves the input against the base, and encodes it with [`Profile::URL`].
///
/// # Failures
///
/// See [`FixedBaseResolver::resolve_with`].
///
/// # Examples
///
/// ```
/// use url_reference::{resolve, Host};
///
/// let url = resolve("foo/bar", "http://host")?;
/// assert_eq!(url.host, Some(Host::Domain(vec!["host".into()])));
/// assert_eq!(url.to_string(), "http://host/foo/bar");
///
/// // Special URLs take the host from the path if needed.
/// assert_eq!(resolve("http:foo", "")?.to_string(), "http://foo/");
///
/// assert!(resolve("foo", "/base").is_err());
/// # Ok::<_, url_reference::Error>(())
/// ```
#[inline]
pub fn resolve<T, B>(input: &T, base: &B) -> Result<UrlComponents, Error>
where
    T: ToComponents + ?Sized,
    B: ToComponents + ?Sized,
{
    resolve_with(input, base, Profile::URL)
}

/// Resolves the input against the base, and encodes it with the given profile.
///
/// # Failures
///
/// See [`FixedBaseResolver::resolve_with`].
pub fn resolve_with<T, B>(input: &T, base: &B, profile: Profile) -> Result<UrlComponents, Error>
where
    T: ToComponents + ?Sized,
    B: ToComponents + ?Sized,
{
    FixedBaseResolver::new(base)?.resolve_with(input, profile)
}

/// Merges the input with the prefix of the base that precedes it.
///
/// The directories of the input are appended to those of the base, and the
/// path root is restored where a host or a drive demands it.
///
/// ```
/// use url_reference::resolve::pure_rebase;
/// use url_reference::{parse, print, Mode};
///
/// let base = parse("sc2://auth2/dir2/file2?query2#hash2", Mode::NOSCHEME)?;
/// let url = parse("dir1/", Mode::NOSCHEME)?;
/// assert_eq!(print(&pure_rebase(&url, &base)), "sc2://auth2/dir2/dir1/");
/// # Ok::<_, url_reference::Error>(())
/// ```
#[must_use]
pub fn pure_rebase(url: &UrlComponents, base: &UrlComponents) -> UrlComponents {
    let mut r = base.upto(url.ord());
    if url.scheme.is_some() {
        r.scheme = url.scheme.clone();
    }
    if url.host.is_some() {
        r.user = url.user.clone();
        r.pass = url.pass.clone();
        r.host = url.host.clone();
        r.port = url.port;
    }
    if url.drive.is_some() {
        r.drive = url.drive.clone();
    }
    r.root |= url.root;
    r.dirs.extend(url.dirs.iter().cloned());
    if url.file.is_some() {
        r.file = url.file.clone();
    }
    if url.query.is_some() {
        r.query = url.query.clone();
    }
    if url.hash.is_some() {
        r.hash = url.hash.clone();
    }
    r.fix_root();
    r
}

/// Rebases parsed components.
fn rebase_components(url: &UrlComponents, base: &UrlComponents) -> Result<UrlComponents, Error> {
    let non_strict = url.mode(Mode::NOSCHEME).contains(Mode::NON_STRICT)
        && schemes_are_equivalent(url.scheme.as_deref(), base.scheme.as_deref());
    let stripped;
    let url = if non_strict {
        let mut url = url.clone();
        url.scheme = None;
        stripped = url;
        &stripped
    } else {
        url
    };

    if url.scheme.is_some() || url.is_fragment_only() || !base.has_opaque_path() {
        let r = pure_rebase(url, base);
        tracing::trace!(ord = ?url.ord(), non_strict, "rebased");
        return Ok(r);
    }
    let e = Error::new(Reason::OpaquePathBase, print(base));
    tracing::debug!(base = e.subject(), input = %url, "cannot rebase onto an opaque path");
    Err(e)
}

/// Applies the scheme-specific rules that make a URL with a scheme absolute.
///
/// The rules are selected by the mode of the URL:
///
/// * [`Mode::STEAL_AUTH`]: a missing or empty host is taken from the first
///   non-empty path segment, which is removed with all preceding segments.
/// * [`Mode::PLAIN_AUTH`]: credentials and ports are forbidden.
/// * [`Mode::HIER_PART`]: a missing host defaults to the empty host, and the
///   path is made absolute unless there is a drive.
/// * [`Mode::PARSE_DOMAIN`]: a non-empty opaque host is parsed as a domain
///   or an IPv4 address.
///
/// In other modes, a non-empty opaque host is checked for forbidden host
/// codepoints.
///
/// # Failures
///
/// Fails with [`Reason::MissingHost`] if no host can be found,
/// [`Reason::ForbiddenCredentials`] if credentials or a port are forbidden,
/// [`Reason::ForbiddenHostCodePoint`] if an opaque host contains a
/// forbidden codepoint, or if a domain fails to parse.
///
/// # Examples
///
/// ```
/// use url_reference::resolve::force;
/// use url_reference::{parse, print, Mode};
///
/// let url = parse("http:///foo/bar", Mode::NOSCHEME)?;
/// assert_eq!(print(&force(&url)?), "http://foo/bar");
///
/// let url = parse("file:c|/x", Mode::NOSCHEME)?;
/// assert_eq!(print(&force(&url)?), "file:///c|/x");
///
/// assert!(force(&parse("http:", Mode::NOSCHEME)?).is_err());
/// assert!(force(&parse("file://user@host/", Mode::NOSCHEME)?).is_err());
/// # Ok::<_, url_reference::Error>(())
/// ```
pub fn force(url: &UrlComponents) -> Result<UrlComponents, Error> {
    let mode = mode_for(url, Mode::GENERIC);
    let mut r = url.clone();

    if mode.contains(Mode::STEAL_AUTH) && r.host.as_ref().map_or(true, Host::is_empty) {
        steal_authority(&mut r)?;
    }
    if mode.contains(Mode::PLAIN_AUTH) && (r.user.is_some() || r.pass.is_some() || r.port.is_some())
    {
        return Err(Error::new(Reason::ForbiddenCredentials, print(url)));
    }
    if mode.contains(Mode::HIER_PART) {
        if r.host.is_none() {
            r.host = Some(Host::empty());
        }
        if r.drive.is_none() {
            r.root = true;
        }
    }
    if let Some(Host::Opaque(text)) = &r.host {
        if !text.is_empty() {
            r.host = Some(parse_host(text, mode)?);
        }
    }
    r.fix_root();
    tracing::trace!(?mode, "forced");
    Ok(r)
}

/// Takes the authority from the first non-empty path segment.
fn steal_authority(url: &mut UrlComponents) -> Result<(), Error> {
    let auth = match url.dirs.iter().position(|dir| !dir.is_empty()) {
        Some(i) => {
            let auth = parse_authority(&url.dirs[i])?;
            url.dirs.drain(..=i);
            auth
        }
        None => match url.file.as_deref().filter(|file| !file.is_empty()) {
            Some(file) => {
                let auth = parse_authority(file)?;
                url.dirs.clear();
                url.file = None;
                auth
            }
            None => return Err(Error::new(Reason::MissingHost, print(url))),
        },
    };
    url.user = auth.user;
    url.pass = auth.pass;
    url.host = Some(auth.host);
    url.port = auth.port;
    Ok(())
}

/// Returns true if the URL is resolved: it has a scheme, or it is a
/// fragment-only reference.
#[must_use]
pub fn is_resolved(url: &UrlComponents) -> bool {
    url.ord() == ComponentType::Scheme || url.is_fragment_only()
}
