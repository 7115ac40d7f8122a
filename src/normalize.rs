//! Normalization.
//!
//! Normalization never fails and is idempotent. It does not touch percent
//! escapes: use [`percent_encode`][`crate::percent_encode()`] for that.
//!
//! # Dot segments
//!
//! `.` segments are removed, and `..` segments remove the preceding segment.
//! A `..` segment that has nothing to remove is kept in relative paths and
//! dropped in absolute paths, so `../a/../../b` normalizes to `../../b` and
//! `/../a/../../b` normalizes to `/b`.
//!
//! Opaque paths are left as is.

use alloc::string::String;
use alloc::vec::Vec;

use crate::authority::Port;
use crate::components::{ComponentType, UrlComponents};
use crate::host::{is_localhost, Host};
use crate::mode::default_port;
use crate::parser::{dot_segment, DotSegment};

/// Returns the normalized URL.
///
/// * The scheme is lowercased.
/// * An empty password, an empty username without a password, and an empty
///   port are removed.
/// * A drive letter is written with a `:`.
/// * Dot segments are removed from hierarchical paths.
/// * The `localhost` host of a `file` URL becomes the empty host.
/// * The default port of the scheme is removed.
///
/// # Examples
///
/// ```
/// use url_reference::{normalize, parse, print, Mode};
///
/// let url = parse("HTTP://user:@host:80/a/./b/../c", Mode::NOSCHEME)?;
/// assert_eq!(print(&normalize(&url)), "http://user@host/a/c");
///
/// let url = parse("file://localhost/c|/x", Mode::NOSCHEME)?;
/// assert_eq!(print(&normalize(&url)), "file:///c:/x");
///
/// // The path is kept non-empty.
/// let url = parse("foo/..", Mode::NOSCHEME)?;
/// assert_eq!(print(&normalize(&url)), "./");
/// # Ok::<_, url_reference::Error>(())
/// ```
#[must_use]
pub fn normalize(url: &UrlComponents) -> UrlComponents {
    let mut r = url.clone();

    if let Some(scheme) = &mut r.scheme {
        scheme.make_ascii_lowercase();
    }

    if r.pass.as_deref() == Some("") {
        r.pass = None;
    }
    if r.pass.is_none() && r.user.as_deref() == Some("") {
        r.user = None;
    }
    if r.port == Some(Port::Empty) {
        r.port = None;
    }

    if let Some(drive) = &mut r.drive {
        if let Some(letter) = drive.chars().next() {
            let mut fixed = String::with_capacity(2);
            fixed.push(letter);
            fixed.push(':');
            *drive = fixed;
        }
    }

    if !url.has_opaque_path() {
        remove_dot_segments(&mut r);
        if url.ord() == ComponentType::Dir && r.dirs.is_empty() && r.file.is_none() {
            r.dirs.push(".".into());
        }
    }

    if let Some(scheme) = r.scheme.as_deref() {
        if scheme == "file" && r.host.as_ref().map_or(false, is_localhost) {
            r.host = Some(Host::empty());
        }
        if let (Some(Port::Number(port)), Some(default)) = (r.port, default_port(scheme)) {
            if port == default {
                r.port = None;
            }
        }
    }

    r
}

/// Removes dot segments from the directories and the file.
fn remove_dot_segments(url: &mut UrlComponents) {
    let root = url.root;
    let dotted_file = url
        .file
        .as_deref()
        .and_then(dot_segment)
        .map(|dots| (dots, url.file.take()));
    let mut dirs: Vec<String> = Vec::with_capacity(url.dirs.len());
    let segments = url
        .dirs
        .drain(..)
        .map(|seg| (dot_segment(&seg), Some(seg)))
        .chain(dotted_file.map(|(dots, seg)| (Some(dots), seg)));
    for (dots, seg) in segments {
        match dots {
            Some(DotSegment::Current) => {}
            Some(DotSegment::Parent) => {
                let poppable = dirs
                    .last()
                    .map_or(false, |last| dot_segment(last) != Some(DotSegment::Parent));
                if poppable {
                    dirs.pop();
                } else if !root {
                    dirs.push("..".into());
                }
            }
            None => dirs.extend(seg),
        }
    }
    url.dirs = dirs;
}
