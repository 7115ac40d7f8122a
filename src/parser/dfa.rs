//! Tokenizer automaton.
//!
//! The automaton runs over bytes grouped into nine classes. Tokens are read
//! with maximal munch: from the entry state, bytes are consumed until the
//! automaton fails or the input ends, and the last accepting state seen
//! decides the token kind and where it ends. Every accepting state also has
//! an entry state for the next token.

/// Byte class: anything else, including non-ASCII bytes.
const OTHER: u8 = 0;
/// Byte class: `/`.
const SLASH: u8 = 5;
/// Byte class: `\`, remapped to [`SLASH`] or [`OTHER`] depending on the mode.
const BACKSLASH: u8 = 8;

/// Classes of ASCII bytes.
///
/// `0` other, `1` alpha, `2` `+-.`, `3` digit, `4` `:`, `5` `/`, `6` `?`,
/// `7` `#`, `8` `\`.
const CLASSES: &[u8; 128] = b"\
    0000000000000000\
    0000000000000000\
    0007000000020225\
    3333333333400006\
    0111111111111111\
    1111111111108000\
    0111111111111111\
    1111111111100000";

/// Tokenizer state.
///
/// States from [`State::Scheme`] on are accepting, and name the token kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub(super) enum State {
    /// No transition.
    Fail,
    /// Start of the input.
    Start,
    /// After the scheme of a non-special URL.
    AfterScheme,
    /// After the scheme of a special URL.
    AfterSpecialScheme,
    /// After the authority.
    AfterAuth,
    /// Inside a relative path.
    RelativePath,
    /// After the last path segment.
    AfterFile,
    /// Scheme, including the `:`.
    Scheme,
    /// Opaque path.
    OpaquePath,
    /// Authority, including the leading `//`.
    Auth,
    /// Path root after an authority.
    Root,
    /// Directory segment, including the trailing `/`.
    Dir,
    /// Last path segment.
    File,
    /// Query, including the `?`.
    Query,
    /// Fragment, including the `#`.
    Hash,
    /// Path root without an authority.
    RootNoAuth,
    /// Last path segment that may still turn out to be a scheme.
    FileSchemeLike,
}

/// States, by index.
const STATES: [State; 17] = [
    State::Fail,
    State::Start,
    State::AfterScheme,
    State::AfterSpecialScheme,
    State::AfterAuth,
    State::RelativePath,
    State::AfterFile,
    State::Scheme,
    State::OpaquePath,
    State::Auth,
    State::Root,
    State::Dir,
    State::File,
    State::Query,
    State::Hash,
    State::RootNoAuth,
    State::FileSchemeLike,
];

/// Column of the entry state for the next token.
const NEXT_ENTRY: usize = 8;

/// Transition table, one row per state.
#[rustfmt::skip]
const TRANSITIONS: [[u8; 9]; 17] = [
    // oth alp +-. dig  :   /   ?   #  next
    [   0,  0,  0,  0,  0,  0,  0,  0,  0], // Fail
    [  12, 16, 12, 12, 12, 15, 13, 14,  0], // Start
    [   8,  8,  8,  8,  8, 15, 13, 14,  0], // AfterScheme
    [  12, 12, 12, 12, 12, 15, 13, 14,  0], // AfterSpecialScheme
    [  12, 12, 12, 12, 12, 10, 13, 14,  0], // AfterAuth
    [  12, 12, 12, 12, 12, 11, 13, 14,  0], // RelativePath
    [   0,  0,  0,  0,  0,  0, 13, 14,  0], // AfterFile
    [   0,  0,  0,  0,  0,  0,  0,  0,  2], // Scheme
    [   8,  8,  8,  8,  8,  8,  0,  0,  6], // OpaquePath
    [   9,  9,  9,  9,  9,  0,  0,  0,  4], // Auth
    [   0,  0,  0,  0,  0,  0,  0,  0,  5], // Root
    [   0,  0,  0,  0,  0,  0,  0,  0,  5], // Dir
    [  12, 12, 12, 12, 12, 11,  0,  0,  6], // File
    [  13, 13, 13, 13, 13, 13, 13,  0, 14], // Query
    [  14, 14, 14, 14, 14, 14, 14, 14,  0], // Hash
    [   0,  0,  0,  0,  0,  9,  0,  0,  5], // RootNoAuth
    [  12, 16, 16, 16,  7, 11,  0,  0,  6], // FileSchemeLike
];

impl State {
    /// Returns true if the state is accepting.
    #[inline]
    #[must_use]
    pub(super) fn is_accepting(self) -> bool {
        self >= Self::Scheme
    }

    /// Returns the state after reading a byte of the given class.
    #[inline]
    #[must_use]
    fn step(self, class: u8) -> Self {
        STATES[usize::from(TRANSITIONS[self as usize][usize::from(class)])]
    }

    /// Returns the entry state for the token following this one.
    #[inline]
    #[must_use]
    fn next_entry(self) -> Self {
        STATES[usize::from(TRANSITIONS[self as usize][NEXT_ENTRY])]
    }
}

/// Byte classification options.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(super) struct Classifier {
    /// Treat `\` as `/`.
    pub(super) win_slash: bool,
    /// Treat `?` and `#` as ordinary bytes.
    pub(super) path_only: bool,
}

impl Classifier {
    /// Returns the class of the byte.
    #[must_use]
    fn class_of(self, b: u8) -> u8 {
        let class = match CLASSES.get(usize::from(b)) {
            Some(c) => c - b'0',
            None => OTHER,
        };
        match class {
            BACKSLASH if self.win_slash => SLASH,
            BACKSLASH => OTHER,
            6 | 7 if self.path_only => OTHER,
            class => class,
        }
    }
}

/// A token found by [`read_token`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(super) struct Token {
    /// Token kind (an accepting state).
    pub(super) kind: State,
    /// End of the token.
    pub(super) end: usize,
    /// Entry state for the next token.
    pub(super) next: State,
}

/// Reads the longest token starting at `anchor`.
///
/// Returns `None` if no accepting state is reached.
#[must_use]
pub(super) fn read_token(
    input: &[u8],
    anchor: usize,
    entry: State,
    classifier: Classifier,
) -> Option<Token> {
    let mut state = entry;
    let mut matched = None;
    for (pos, &b) in input.iter().enumerate().skip(anchor) {
        if state == State::Fail {
            break;
        }
        state = state.step(classifier.class_of(b));
        if state.is_accepting() {
            matched = Some((state, pos + 1));
        }
    }
    matched.map(|(kind, end)| Token {
        kind,
        end,
        next: kind.next_entry(),
    })
}
