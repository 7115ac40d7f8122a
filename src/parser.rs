//! Parser.
//!
//! The parser never fails on the syntax of paths, queries and fragments:
//! unexpected characters are absorbed into path segments. The only errors
//! come from parsing an authority.

mod dfa;
pub(crate) mod str;

use alloc::borrow::Cow;
use alloc::string::String;

use crate::authority::parse_authority;
use crate::components::UrlComponents;
use crate::error::Error;
use crate::host::Host;
use crate::mode::Mode;

use self::dfa::{Classifier, State};

/// Parses a URL reference.
///
/// Leading and trailing C0 controls and spaces are removed, as well as tabs
/// and newlines anywhere in the input. A schemeless reference with a drive
/// letter gets the `file` scheme.
///
/// # Failures
///
/// Fails with an [authority error][`crate::ErrorKind::Authority`] if the
/// reference has an invalid authority.
///
/// # Examples
///
/// ```
/// use url_reference::{parse, Host, Mode};
///
/// let url = parse("/bar\\bee", Mode::NOSCHEME)?;
/// assert!(url.root);
/// assert_eq!(url.dirs, ["bar"]);
/// assert_eq!(url.file.as_deref(), Some("bee"));
///
/// let url = parse("c|/dir/file", Mode::NOSCHEME)?;
/// assert_eq!(url.scheme.as_deref(), Some("file"));
/// assert_eq!(url.drive.as_deref(), Some("c|"));
///
/// let url = parse("sch:op/aque?q", Mode::NOSCHEME)?;
/// assert_eq!(url.file.as_deref(), Some("op/aque"));
/// assert_eq!(url.query.as_deref(), Some("q"));
/// # Ok::<_, url_reference::Error>(())
/// ```
pub fn parse(text: &str, mode: Mode) -> Result<UrlComponents, Error> {
    let input = preprocess(text);
    let mut url = Parser::new(&input, mode, false).run(State::Start)?;
    if url.drive.is_some() && url.scheme.is_none() {
        url.scheme = Some("file".into());
    }
    Ok(url)
}

/// Parses a path with an optional drive, as found after an authority.
///
/// `?` and `#` are ordinary characters in the path.
///
/// ```
/// use url_reference::{parse_path, Mode};
///
/// let url = parse_path("/c:/a?b/c#d", Mode::FILE);
/// assert_eq!(url.drive.as_deref(), Some("c:"));
/// assert_eq!(url.dirs, ["a?b"]);
/// assert_eq!(url.file.as_deref(), Some("c#d"));
/// assert_eq!(url.query, None);
/// ```
#[must_use]
pub fn parse_path(text: &str, mode: Mode) -> UrlComponents {
    let input = preprocess(text);
    Parser::new(&input, mode, true)
        .run(State::AfterAuth)
        .expect("[validity] authorities are never tokenized after the authority position")
}

/// Removes leading and trailing C0 controls and spaces, and all tabs and newlines.
#[must_use]
fn preprocess(text: &str) -> Cow<'_, str> {
    let trimmed = text.trim_matches(|c: char| c <= ' ');
    if str::find3(trimmed.as_bytes(), b'\t', b'\n', b'\r').is_none() {
        return Cow::Borrowed(trimmed);
    }
    Cow::Owned(
        trimmed
            .chars()
            .filter(|c| !matches!(c, '\t' | '\n' | '\r'))
            .collect(),
    )
}

/// Tokenizer driver assembling the components.
struct Parser<'a> {
    /// Preprocessed input.
    input: &'a str,
    /// Current mode. Updated when a scheme is found.
    mode: Mode,
    /// Treat `?` and `#` as ordinary characters.
    path_only: bool,
    /// Number of non-dotted path segments seen, for drive letter detection.
    segments: usize,
    /// Components found so far.
    url: UrlComponents,
}

impl<'a> Parser<'a> {
    /// Creates a new parser.
    #[must_use]
    fn new(input: &'a str, mode: Mode, path_only: bool) -> Self {
        Self {
            input,
            mode,
            path_only,
            segments: 0,
            url: UrlComponents::default(),
        }
    }

    /// Returns the current byte classifier.
    #[must_use]
    fn classifier(&self) -> Classifier {
        Classifier {
            win_slash: self.mode.contains(Mode::WIN_SLASH),
            path_only: self.path_only,
        }
    }

    /// Returns true if drive letters are detected in the current mode.
    #[must_use]
    fn detects_drive(&self) -> bool {
        self.mode.contains(Mode::WIN_DRIVE) && self.url.drive.is_none()
    }

    /// Tokenizes the input from the given entry state.
    fn run(mut self, mut entry: State) -> Result<UrlComponents, Error> {
        let input = self.input;
        let mut anchor = 0;
        while let Some(token) = dfa::read_token(input.as_bytes(), anchor, entry, self.classifier())
        {
            let text = &input[anchor..token.end];
            tracing::trace!(kind = ?token.kind, text, "token");
            anchor = token.end;
            entry = token.next;
            match token.kind {
                State::Scheme => {
                    let scheme = &text[..text.len() - 1];
                    self.mode = Mode::for_scheme(scheme);
                    self.url.scheme = Some(scheme.into());
                    entry = if self.mode.contains(Mode::WIN_SLASH) {
                        State::AfterSpecialScheme
                    } else {
                        State::AfterScheme
                    };
                }
                State::OpaquePath => self.url.file = Some(text.into()),
                State::Auth => self.authority(&text[2..])?,
                State::Root | State::RootNoAuth => self.url.root = true,
                State::Dir => self.dir(&text[..text.len() - 1]),
                State::File | State::FileSchemeLike => self.file(text),
                State::Query => self.url.query = Some(text[1..].into()),
                State::Hash => {
                    self.url.hash = Some(text[1..].into());
                    break;
                }
                _ => unreachable!("[consistency] tokens are accepting states"),
            }
        }
        Ok(self.url)
    }

    /// Handles an authority token, without the leading `//`.
    fn authority(&mut self, text: &str) -> Result<(), Error> {
        if self.detects_drive() && is_drive(text) {
            self.url.host = Some(Host::empty());
            self.url.drive = Some(text.into());
            return Ok(());
        }
        let auth = parse_authority(text)?;
        self.url.user = auth.user;
        self.url.pass = auth.pass;
        self.url.host = Some(auth.host);
        self.url.port = auth.port;
        Ok(())
    }

    /// Handles a directory token, without the trailing `/`.
    fn dir(&mut self, text: &str) {
        if self.detects_drive() && self.segments == 0 && is_drive(text) {
            self.url.drive = Some(text.into());
            self.url.root = true;
        } else {
            self.segments += 1;
            self.url.dirs.push(text.into());
        }
    }

    /// Handles the last path segment.
    fn file(&mut self, text: &str) {
        if dot_segment(text).is_some() {
            self.url.dirs.push(text.into());
        } else if self.detects_drive() && self.segments == 0 && is_drive(text) {
            self.url.root = false;
            self.url.drive = Some(text.into());
        } else {
            self.segments += 1;
            self.url.file = Some(text.into());
        }
    }
}

/// Returns true if the text is a drive letter: an ASCII letter followed by `:` or `|`.
#[must_use]
pub(crate) fn is_drive(text: &str) -> bool {
    matches!(text.as_bytes(), [letter, b':' | b'|'] if letter.is_ascii_alphabetic())
}

/// Dot segment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum DotSegment {
    /// `.` or `%2e`.
    Current,
    /// `..` or its percent-encoded forms.
    Parent,
}

/// Returns the kind of dot segment, if the segment is one.
///
/// Percent-encoded dots are recognized, ignoring ASCII case.
#[must_use]
pub(crate) fn dot_segment(segment: &str) -> Option<DotSegment> {
    if segment.len() > 6 {
        return None;
    }
    let lower: String = segment.to_ascii_lowercase();
    match lower.as_str() {
        "." | "%2e" => Some(DotSegment::Current),
        ".." | ".%2e" | "%2e." | "%2e%2e" => Some(DotSegment::Parent),
        _ => None,
    }
}
