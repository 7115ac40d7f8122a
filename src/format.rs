//! Printing URLs.
//!
//! A printed URL parses back to the components it was printed from. Where
//! the plain concatenation of the components would be parsed differently,
//! the printer either prepends a `.` segment or escapes a delimiter:
//!
//! * A path starting with an empty segment would be parsed as an authority:
//!   `.` is prepended, as in `.//foo`.
//! * A leading segment of a schemeless URL that looks like a scheme would
//!   be parsed as a scheme: its `:` is escaped, as in `foo%3Abar`.
//! * A leading segment that looks like a drive letter would be parsed as a
//!   drive in modes that detect drives: its `:` or `|` is escaped.
//! * An opaque path starting with `/` would be parsed as a path root or an
//!   authority: its first `/` is escaped, as in `sch:%2F/foo`.

use core::fmt::{self, Write as _};

use alloc::string::String;

use crate::components::UrlComponents;
use crate::convert::percent_encode;
use crate::error::Error;
use crate::mode::Mode;
use crate::parser::is_drive;
use crate::percent_encode::Profile;

/// Prints the URL.
///
/// Components are percent-encoded with [`Profile::LENIENT`], so that
/// printing never fails.
///
/// # Examples
///
/// ```
/// use url_reference::{parse, print, Mode};
///
/// assert_eq!(print(&parse("/bar\\bee", Mode::NOSCHEME)?), "/bar/bee");
/// assert_eq!(print(&parse("//[::1]:8080", Mode::NOSCHEME)?), "//[::1]:8080");
///
/// let mut url = parse("file:foo:bar", Mode::NOSCHEME)?;
/// url.scheme = None;
/// assert_eq!(print(&url), "foo%3Abar");
/// # Ok::<_, url_reference::Error>(())
/// ```
#[must_use]
pub fn print(url: &UrlComponents) -> String {
    print_with(url, Profile::LENIENT)
        .expect("[validity] lenient percent-encoding never rejects codepoints")
}

/// Prints the URL, percent-encoding components with the given profile.
///
/// # Failures
///
/// Fails if [`percent_encode`][`crate::percent_encode()`] fails.
///
/// # Examples
///
/// ```
/// use url_reference::{parse, print_with, resolve, Mode, Profile};
///
/// let url = resolve("http://\u{1F332}", "")?;
/// assert_eq!(print_with(&url, Profile::WHATWG)?, "http://xn--vh8h/");
/// assert_eq!(print_with(&url, Profile::URL)?, "http://\u{1F332}/");
///
/// let url = parse("//a b", Mode::NOSCHEME)?;
/// assert!(print_with(&url, Profile::URL).is_err());
/// # Ok::<_, url_reference::Error>(())
/// ```
pub fn print_with(url: &UrlComponents, profile: Profile) -> Result<String, Error> {
    let mut url = percent_encode(url, profile)?;
    guard_reparse(&mut url);
    let mut out = String::new();
    write_components(&mut out, &url).expect("[validity] writing to a string never fails");
    Ok(out)
}

/// Returns the path of the URL: the drive, the root, the directories and the file.
///
/// Components are not percent-encoded.
///
/// ```
/// use url_reference::{parse, pathname, Mode};
///
/// assert_eq!(pathname(&parse("\\\\foo\\bar\\bee", Mode::NOSCHEME)?), "/bar/bee");
/// assert_eq!(pathname(&parse("file:///c|/x/", Mode::NOSCHEME)?), "/c|/x/");
/// assert_eq!(pathname(&parse("otp:foo", Mode::NOSCHEME)?), "foo");
/// # Ok::<_, url_reference::Error>(())
/// ```
#[must_use]
pub fn pathname(url: &UrlComponents) -> String {
    let mut out = String::new();
    write_path(&mut out, url).expect("[validity] writing to a string never fails");
    out
}

/// Changes the components so that printing them does not cause a reparse bug.
fn guard_reparse(url: &mut UrlComponents) {
    if url.has_opaque_path() {
        if let Some(file) = url.file.as_mut().filter(|file| file.starts_with('/')) {
            file.replace_range(..1, "%2F");
        }
        return;
    }
    let no_auth_nor_drive = url.host.is_none() && url.drive.is_none();
    if url.dirs.first().map_or(false, String::is_empty) && (no_auth_nor_drive || !url.root) {
        url.dirs.insert(0, ".".into());
    }

    let scheme_like = url.scheme.is_none() && no_auth_nor_drive && !url.root;
    let drive_like = url.drive.is_none() && url.mode(Mode::NOSCHEME).contains(Mode::WIN_DRIVE);
    let leading = match url.dirs.first_mut() {
        Some(dir) => Some(dir),
        None => url.file.as_mut(),
    };
    let Some(leading) = leading else {
        return;
    };
    if scheme_like && looks_like_scheme(leading) {
        *leading = leading.replacen(':', "%3A", 1);
    }
    if drive_like && is_drive(leading) {
        let escaped = if leading.ends_with(':') { "%3A" } else { "%7C" };
        leading.replace_range(1.., escaped);
    }
}

/// Returns true if the segment starts with a scheme followed by `:`.
#[must_use]
fn looks_like_scheme(segment: &str) -> bool {
    let Some(colon) = segment.find(':') else {
        return false;
    };
    let mut chars = segment[..colon].chars();
    chars.next().map_or(false, |c| c.is_ascii_alphabetic())
        && chars.all(|c| c.is_ascii_alphanumeric() || matches!(c, '+' | '-' | '.'))
}

/// Writes the components with their delimiters.
fn write_components<W: fmt::Write>(f: &mut W, url: &UrlComponents) -> fmt::Result {
    if let Some(scheme) = &url.scheme {
        write!(f, "{scheme}:")?;
    }
    if let Some(host) = &url.host {
        f.write_str("//")?;
        if let Some(user) = &url.user {
            f.write_str(user)?;
            if let Some(pass) = &url.pass {
                write!(f, ":{pass}")?;
            }
            f.write_char('@')?;
        }
        write!(f, "{host}")?;
        if let Some(port) = &url.port {
            write!(f, ":{port}")?;
        }
    }
    write_path(f, url)?;
    if let Some(query) = &url.query {
        write!(f, "?{query}")?;
    }
    if let Some(hash) = &url.hash {
        write!(f, "#{hash}")?;
    }
    Ok(())
}

/// Writes the drive, the root, the directories and the file.
fn write_path<W: fmt::Write>(f: &mut W, url: &UrlComponents) -> fmt::Result {
    if let Some(drive) = &url.drive {
        write!(f, "/{drive}")?;
    }
    if url.root {
        f.write_char('/')?;
    }
    for dir in &url.dirs {
        write!(f, "{dir}/")?;
    }
    if let Some(file) = &url.file {
        f.write_str(file)?;
    }
    Ok(())
}

impl fmt::Display for UrlComponents {
    /// Prints the URL as [`print`] does.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&print(self))
    }
}
