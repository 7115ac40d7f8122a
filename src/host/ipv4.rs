//! IPv4 addresses.
//!
//! Parsing follows the legacy notation accepted by web browsers: one to four
//! dot-separated numbers, each written in decimal, octal (leading `0`) or
//! hexadecimal (leading `0x`), with an optional trailing dot. The last number
//! fills all the remaining bytes of the address, so `127.1` is `127.0.0.1`.

use alloc::string::String;

use crate::error::{Error, Reason};

/// Parses an IPv4 address.
///
/// Returns `Ok(None)` if the text is not shaped like an IPv4 address at all.
///
/// # Failures
///
/// Fails with [`Reason::InvalidIpv4`] if the text is shaped like an address
/// but a number is out of range.
///
/// # Examples
///
/// ```
/// use url_reference::host::ipv4;
///
/// assert_eq!(ipv4::parse("127.0.0.1")?, Some(0x7F00_0001));
/// assert_eq!(ipv4::parse("0x7f.1")?, Some(0x7F00_0001));
/// assert_eq!(ipv4::parse("017.0.0.1.")?, Some(0x0F00_0001));
/// assert_eq!(ipv4::parse("example.com")?, None);
/// assert!(ipv4::parse("1.256.0.0").is_err());
/// # Ok::<_, url_reference::Error>(())
/// ```
pub fn parse(text: &str) -> Result<Option<u32>, Error> {
    let mut rest = text.as_bytes();
    let mut addr: u64 = 0;
    let mut count = 0_u32;
    let mut out_of_range = false;
    while let Some((num, has_dot, len)) = read_number(rest) {
        count += 1;
        rest = &rest[len..];
        if rest.is_empty() {
            let remaining = 5 - count;
            if out_of_range || num >= 1_u64 << (8 * remaining) {
                return Err(Error::new(Reason::InvalidIpv4, text));
            }
            let addr = (addr << (8 * remaining)) + num;
            return Ok(Some(
                u32::try_from(addr).expect("[validity] the address is checked to fit in 32 bits"),
            ));
        }
        if count == 4 || !has_dot {
            return Ok(None);
        }
        out_of_range |= num > 255;
        addr = (addr << 8) + num.min(255);
    }
    Ok(None)
}

/// Reads a number and an optional trailing dot.
///
/// Returns the value (saturated), whether a dot was read, and the number of
/// bytes consumed.
#[must_use]
fn read_number(bytes: &[u8]) -> Option<(u64, bool, usize)> {
    let (radix, prefix) = match bytes {
        [b'0', b'x' | b'X', ..] => (16, 2),
        [b'0', ..] => (8, 0),
        [b'1'..=b'9', ..] => (10, 0),
        _ => return None,
    };
    let digits = bytes[prefix..]
        .iter()
        .take_while(|b| char::from(**b).is_digit(radix))
        .count();
    let num = bytes[prefix..prefix + digits]
        .iter()
        .filter_map(|b| char::from(*b).to_digit(radix))
        .fold(0_u64, |acc, d| {
            acc.saturating_mul(u64::from(radix))
                .saturating_add(u64::from(d))
        });
    let len = prefix + digits;
    let has_dot = bytes.get(len) == Some(&b'.');
    Some((num, has_dot, len + usize::from(has_dot)))
}

/// Prints the address as four decimal numbers.
#[must_use]
pub fn print(addr: u32) -> String {
    let [a, b, c, d] = addr.to_be_bytes();
    alloc::format!("{a}.{b}.{c}.{d}")
}

/// Normalizes an IPv4 address string.
///
/// # Failures
///
/// Fails with [`Reason::InvalidIpv4`] if the text is not an IPv4 address.
pub fn normalize(text: &str) -> Result<String, Error> {
    parse(text)?
        .map(print)
        .ok_or_else(|| Error::new(Reason::InvalidIpv4, text))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn notations() {
        assert_eq!(parse("0").unwrap(), Some(0));
        assert_eq!(parse("0x").unwrap(), Some(0));
        assert_eq!(parse("4294967295").unwrap(), Some(u32::MAX));
        assert_eq!(parse("192.168.0x101").unwrap(), Some(0xC0A8_0101));
        assert_eq!(parse("0300.0250.1.1").unwrap(), Some(0xC0A8_0101));
        assert_eq!(parse("1.2.3.4.").unwrap(), Some(0x0102_0304));
    }

    #[test]
    fn not_an_address() {
        assert_eq!(parse("").unwrap(), None);
        assert_eq!(parse("a.b").unwrap(), None);
        assert_eq!(parse("1.2.3.4.5").unwrap(), None);
        assert_eq!(parse("09").unwrap(), None);
        assert_eq!(parse("1..2").unwrap(), None);
        assert_eq!(parse("1.2x").unwrap(), None);
    }

    #[test]
    fn out_of_range() {
        assert!(parse("4294967296").is_err());
        assert!(parse("1.16777216").is_err());
        assert!(parse("256.1").is_err());
        assert!(parse("99999999999999999999999").is_err());
    }

    #[test]
    fn printing() {
        assert_eq!(print(0x7F00_0001), "127.0.0.1");
        assert_eq!(normalize("0x7f.1").unwrap(), "127.0.0.1");
        assert!(normalize("localhost").is_err());
    }
}
