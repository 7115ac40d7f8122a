//! Utilities for tests.
#![allow(dead_code, unused_macros)]

use core::fmt::{self, Write as _};

/// Writer that compares the written text against an expected string.
///
/// This allows `Display` outputs to be compared without allocation.
#[derive(Debug)]
pub struct DisplayCmp<'a> {
    /// Expected text not yet matched.
    rest: &'a str,
    /// Whether a mismatch has been found.
    mismatch: bool,
}

impl<'a> DisplayCmp<'a> {
    /// Creates a new comparator.
    #[must_use]
    pub fn new(expected: &'a str) -> Self {
        Self {
            rest: expected,
            mismatch: false,
        }
    }

    /// Returns true if everything written so far equals the whole expected text.
    #[must_use]
    pub fn matches(self) -> bool {
        !self.mismatch && self.rest.is_empty()
    }
}

impl fmt::Write for DisplayCmp<'_> {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        match self.rest.strip_prefix(s) {
            Some(rest) => self.rest = rest,
            None => self.mismatch = true,
        }
        Ok(())
    }
}

/// Returns true if the value is displayed as the expected string.
#[must_use]
pub fn eq_display<T, E>(value: &T, expected: &E) -> bool
where
    T: fmt::Display + ?Sized,
    E: AsRef<str> + ?Sized,
{
    let mut cmp = DisplayCmp::new(expected.as_ref());
    write!(cmp, "{value}").expect("comparison never fails");
    cmp.matches()
}

/// Asserts that the value is displayed as the expected string.
macro_rules! assert_eq_display {
    ($left:expr, $right:expr $(,)?) => {{
        match (&$left, &$right) {
            (left_val, right_val) => {
                assert!(
                    $crate::utils::eq_display(left_val, right_val),
                    "`{}` is expected to be displayed as `{}`",
                    left_val,
                    right_val,
                );
            }
        }
    }};
    ($left:expr, $right:expr, $($args:tt)*) => {{
        match (&$left, &$right) {
            (left_val, right_val) => {
                assert!(
                    $crate::utils::eq_display(left_val, right_val),
                    "`{}` is expected to be displayed as `{}`: {}",
                    left_val,
                    right_val,
                    format_args!($($args)*),
                );
            }
        }
    }};
}
