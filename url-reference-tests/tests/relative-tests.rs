//! Rebase tests loaded from `assets/relative-tests.json`.
//!
//! Each case parses the base, parses the input in the mode of the base,
//! rebases the input onto the base, normalizes the result and prints it
//! with ASCII output.

use std::fs::File;
use std::path::Path;

use url_reference::mode::mode_for;
use url_reference::{normalize, parse, print_with, rebase, Error, Mode, Profile};

use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
struct TestCase {
    input: String,
    base: String,
    #[serde(default)]
    href: Option<String>,
    #[serde(default)]
    failure: bool,
}

fn load(filename: &str) -> Vec<TestCase> {
    let path = Path::new("assets").join(filename);
    let mut file = File::open(path).expect("test file not found");
    serde_json::from_reader(&mut file).expect("failed to load test asset")
}

fn run(case: &TestCase) -> Result<String, Error> {
    let base = parse(&case.base, Mode::NOSCHEME)?;
    let input = parse(&case.input, mode_for(&base, Mode::NOSCHEME))?;
    let rebased = rebase(&input, &base)?;
    print_with(&normalize(&rebased), Profile::WHATWG)
}

#[test]
fn relative_tests() {
    let cases = load("relative-tests.json");
    assert!(!cases.is_empty());
    for case in &cases {
        match (run(case), &case.href) {
            (Ok(href), Some(expected)) => {
                assert_eq!(&href, expected, "case={case:?}");
            }
            (Ok(href), None) => {
                assert!(case.failure, "case without expectation: {case:?}");
                panic!("expected to fail but succeeded: href={href:?}, case={case:?}");
            }
            (Err(e), Some(_)) => {
                panic!("expected to succeed but failed: {e} (case={case:?})");
            }
            (Err(_), None) => assert!(case.failure, "case={case:?}"),
        }
    }
}
