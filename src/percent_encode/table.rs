//! Codepoint classes and the per-component action table.

use super::EncodeSet;

/// What to do with a codepoint in a given encode set.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(super) enum Action {
    /// Write as is.
    Pass,
    /// Escape, even though the codepoint is valid.
    Escape,
    /// Write as is if unicode output is enabled, escape otherwise.
    Unicode,
    /// Invalid but harmless: write as is unless strict.
    Tolerate,
    /// Invalid: escape.
    FixUp,
    /// Invalid and would cause a reparse bug: reject unless fixing up.
    Reject,
    /// Drop the codepoint.
    Skip,
}

/// Codepoint class of the `%` sign when it is not kept as an escape.
const PERCENT: u8 = 6;
/// Codepoint class of unreserved characters.
const UNRESERVED: u8 = 10;
/// Codepoint class of non-ASCII codepoints that are valid in URLs.
const OTHER_UNICODE: u8 = 11;
/// Codepoint class of controls and non-characters.
const CONTROL: u8 = 14;

/// Classes of `U+0000..=U+009F`, one letter per codepoint (`a` is class 0).
///
/// Classes: `a` `:`, `b` `@`, `c` `/`, `d` `\`, `e` `?`, `f` `#`, `g` `%`,
/// `h` `'`, `i` `;=`, `j` other sub-delims, `k` unreserved, `l` other
/// unicode, `m` NUL, `n` HT LF CR, `o` controls, `p` space, `q` `[]|^`,
/// `r` `<>`, `s` `{}`, `t` `"`, `u` backtick.
const LOW_CLASSES: &[u8; 0xA0] = b"\
    moooooooonnoonoo\
    oooooooooooooooo\
    pjtfjgjhjjjjjkkc\
    kkkkkkkkkkairire\
    bkkkkkkkkkkkkkkk\
    kkkkkkkkkkkqdqqk\
    ukkkkkkkkkkkkkkk\
    kkkkkkkkkkksqsko\
    oooooooooooooooo\
    oooooooooooooooo";

/// Returns the class of the codepoint.
///
/// With `incremental`, `%` is unreserved so that existing escapes are kept.
#[must_use]
pub(super) fn class_of(c: char, incremental: bool) -> u8 {
    let cp = u32::from(c);
    match cp {
        0x25 if incremental => UNRESERVED,
        0x25 => PERCENT,
        0..=0x9F => LOW_CLASSES[cp as usize] - b'a',
        0xFDD0..=0xFDEF => CONTROL,
        _ if (cp >> 1) & 0x7FFF == 0x7FFF => CONTROL,
        _ => OTHER_UNICODE,
    }
}

/// Actions, indexed by class then by [`EncodeSet`].
#[rustfmt::skip]
static ACTIONS: [[Action; 7]; 21] = {
    use Action::{
        Escape as E, FixUp as F, Pass as V, Reject as R, Skip as I, Tolerate as T, Unicode as U,
    };
    [
        // user op-host segment op-path query sp-query fragment
        [F, F, V, V, V, V, V], // a  :
        [F, R, V, V, V, V, V], // b  @
        [F, F, F, T, V, V, V], // c  /
        [F, R, T, T, T, T, T], // d  \
        [F, F, F, F, V, V, V], // e  ?
        [F, F, F, F, F, F, T], // f  #
        [E, E, E, E, E, E, E], // g  %
        [V, V, V, V, V, E, V], // h  '
        [E, V, V, V, V, V, V], // i  ; =
        [V, V, V, V, V, V, V], // j  other sub-delims
        [V, V, V, V, V, V, V], // k  unreserved
        [U, U, U, U, U, U, U], // l  other unicode
        [F, R, F, F, F, F, F], // m  NUL
        [I, I, I, I, I, I, I], // n  HT LF CR
        [F, F, F, F, F, F, F], // o  controls
        [F, R, F, T, F, F, F], // p  space
        [F, R, T, T, T, T, T], // q  [ ] | ^
        [F, R, F, T, F, F, F], // r  < >
        [F, T, F, T, T, T, T], // s  { }
        [F, T, F, T, F, F, F], // t  "
        [F, T, F, T, T, T, F], // u  `
    ]
};

/// Returns the action for the codepoint class in the encode set.
#[inline]
#[must_use]
pub(super) fn action(class: u8, set: EncodeSet) -> Action {
    ACTIONS[usize::from(class)][set as usize]
}
