//! IPv6 addresses.

use alloc::string::String;
use alloc::vec::Vec;
use core::fmt::Write as _;

use crate::error::{Error, Reason};

/// Tokenizer state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum State {
    /// At the start: a number or `::`.
    Start,
    /// After a `:` or `::`: a number or the `:` completing a `::`.
    Hex,
    /// Inside a dotted-decimal IPv4 suffix.
    Decimal,
}

/// Token read by the tokenizer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Token {
    /// Hex word, with a flag telling whether a `:` separator followed.
    Word(u16, bool),
    /// IPv4 byte, with a flag telling whether a `.` separator followed.
    Byte(u8, bool),
    /// Compression marker.
    Compress,
}

/// Parses an IPv6 address, with or without the enclosing brackets.
///
/// # Failures
///
/// Fails with [`Reason::InvalidIpv6`] if the text is not an IPv6 address.
///
/// # Examples
///
/// ```
/// use url_reference::host::ipv6;
///
/// assert_eq!(ipv6::parse("[::1]")?, [0, 0, 0, 0, 0, 0, 0, 1]);
/// assert_eq!(
///     ipv6::parse("::ffff:192.168.0.1")?,
///     [0, 0, 0, 0, 0, 0xffff, 0xc0a8, 0x0001]
/// );
/// assert!(ipv6::parse("1::2::3").is_err());
/// # Ok::<_, url_reference::Error>(())
/// ```
pub fn parse(text: &str) -> Result<[u16; 8], Error> {
    let invalid = || Error::new(Reason::InvalidIpv6, text);
    let inner = match text.strip_prefix('[') {
        Some(rest) => rest.strip_suffix(']').ok_or_else(invalid)?,
        None => text,
    };

    let mut words = Vec::with_capacity(8);
    let mut bytes = Vec::with_capacity(4);
    let mut compress = None;
    let mut state = State::Start;
    let mut rest = inner.as_bytes();
    // Set when the last token was a word followed by a single `:`.
    let mut dangling_colon = false;

    while !rest.is_empty() {
        let (token, len) = read_token(rest, state).ok_or_else(invalid)?;
        rest = &rest[len..];
        dangling_colon = false;
        match token {
            Token::Byte(b, dot) => {
                bytes.push(b);
                if !dot {
                    break;
                }
                state = State::Decimal;
            }
            Token::Word(w, colon) => {
                words.push(w);
                if !colon {
                    break;
                }
                dangling_colon = true;
                state = State::Hex;
            }
            Token::Compress => {
                if compress.replace(words.len()).is_some() {
                    return Err(invalid());
                }
                state = State::Hex;
            }
        }
    }

    if !rest.is_empty() || dangling_colon || !(bytes.is_empty() || bytes.len() == 4) {
        return Err(invalid());
    }
    if let [b0, b1, b2, b3] = bytes[..] {
        words.push(u16::from_be_bytes([b0, b1]));
        words.push(u16::from_be_bytes([b2, b3]));
    }

    match compress {
        None if words.len() == 8 => {}
        Some(at) if words.len() < 8 => {
            let zeros = 8 - words.len();
            words.splice(at..at, core::iter::repeat(0).take(zeros));
        }
        _ => return Err(invalid()),
    }
    let mut addr = [0_u16; 8];
    addr.copy_from_slice(&words);
    Ok(addr)
}

/// Reads one token in the given state.
///
/// Returns the token and the number of bytes consumed.
#[must_use]
fn read_token(bytes: &[u8], state: State) -> Option<(Token, usize)> {
    let decimals = bytes.iter().take_while(|b| b.is_ascii_digit()).count();
    let has_dot = bytes.get(decimals) == Some(&b'.');
    if decimals > 0 && (has_dot || state == State::Decimal) {
        let value: u16 = core::str::from_utf8(&bytes[..decimals])
            .ok()?
            .parse()
            .ok()?;
        let byte = u8::try_from(value).ok()?;
        return Some((Token::Byte(byte, has_dot), decimals + usize::from(has_dot)));
    }
    if state == State::Decimal {
        return None;
    }

    let hexes = bytes.iter().take_while(|b| b.is_ascii_hexdigit()).count();
    if hexes > 0 {
        if hexes > 4 {
            return None;
        }
        let digits = core::str::from_utf8(&bytes[..hexes]).ok()?;
        let word = u16::from_str_radix(digits, 16).ok()?;
        let colon = bytes.get(hexes) == Some(&b':');
        return Some((Token::Word(word, colon), hexes + usize::from(colon)));
    }

    match (state, bytes) {
        (State::Start, [b':', b':', ..]) => Some((Token::Compress, 2)),
        (State::Hex, [b':', ..]) => Some((Token::Compress, 1)),
        _ => None,
    }
}

/// Prints the address without brackets.
///
/// The leftmost longest run of two or more zero words is compressed to `::`.
/// Words are printed in lowercase hex.
///
/// ```
/// use url_reference::host::ipv6;
///
/// assert_eq!(ipv6::print(&[0, 0, 0, 0, 0, 0, 0, 1]), "::1");
/// assert_eq!(ipv6::print(&[1, 0, 0, 2, 0, 0, 0, 3]), "1:0:0:2::3");
/// assert_eq!(ipv6::print(&[1, 0, 2, 0, 3, 0, 4, 0]), "1:0:2:0:3:0:4:0");
/// ```
#[must_use]
pub fn print(addr: &[u16; 8]) -> String {
    // Find the leftmost longest run of zeros.
    let (mut best_start, mut best_len) = (0, 0);
    let mut i = 0;
    while i < addr.len() {
        let len = addr[i..].iter().take_while(|&&w| w == 0).count();
        if len > best_len {
            (best_start, best_len) = (i, len);
        }
        i += len.max(1);
    }

    let mut out = String::with_capacity(39);
    let mut words = addr.iter().enumerate();
    while let Some((i, word)) = words.next() {
        if best_len >= 2 && i == best_start {
            out.push_str("::");
            // Skip the rest of the run.
            words.nth(best_len - 2);
            continue;
        }
        if !out.is_empty() && !out.ends_with("::") {
            out.push(':');
        }
        write!(out, "{word:x}").expect("[validity] writing to a string never fails");
    }
    out
}

/// Normalizes an IPv6 address string, without brackets.
///
/// # Failures
///
/// Fails with [`Reason::InvalidIpv6`] if the text is not an IPv6 address.
pub fn normalize(text: &str) -> Result<String, Error> {
    parse(text).map(|addr| print(&addr))
}
