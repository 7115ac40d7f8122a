//! Tests for rebasing and resolution.

#[cfg(not(test))]
compile_error!("`tests` module should be enable only when `cfg(tests)`");

use super::*;

use alloc::string::String;
use alloc::vec::Vec;

use crate::format::print_with;

/// Rebases, normalizes and prints with ASCII output.
fn rebase_normalized(input: &str, base: &str) -> Result<String, Error> {
    let url = rebase(input, base)?;
    print_with(&normalize(&url), Profile::WHATWG)
}

/// Test cases for rebase.
// [(base, [(input, output)])]
const TEST_CASES: &[(&str, &[(&str, &str)])] = &[
    // Schemeless references.
    (
        "",
        &[
            ("/bar\\bee", "/bar/bee"),
            ("/foo/bar\\bee/..", "/foo/bar/"),
            ("?q=with-'-sign", "?q=with-%27-sign"),
            ("//this-%00-cannot-be-a-domain/", "//this-%00-cannot-be-a-domain/"),
            ("//joe:secret@host/", "//joe:secret@host/"),
            ("//host/c|/dir/to/file", "file://host/c:/dir/to/file"),
            ("c|/dir/to/file", "file:/c:/dir/to/file"),
            ("/c|/..", "file:/c:/"),
            ("http:foo", "http:foo"),
            ("http:/bar", "http:/bar"),
            ("http:///foo", "http:///foo"),
            ("//host/foo/..", "//host/"),
            ("http:foo/..", "http:"),
            ("foo/..", "./"),
            ("foo/../", "./"),
            (".", "./"),
            ("..", "../"),
            ("../a/./b", "../a/b"),
            ("../a/../../b", "../../b"),
            ("a/./b/../c", "a/c"),
            ("/../a/./b", "/a/b"),
            ("/../a/../../b", "/b"),
        ],
    ),
    // Non-special bases opt out of drive letters, backslashes and
    // special query encoding.
    (
        "sch:/",
        &[
            ("c|/", "sch:/c|/"),
            ("/c:/..", "sch:/"),
            ("/foo/bar\\bee/", "sch:/foo/bar\\bee/"),
            ("/foo/bar\\bee/..", "sch:/foo/"),
            ("?q=with-'-sign", "sch:/?q=with-'-sign"),
            ("/foo/bar", "sch:/foo/bar"),
        ],
    ),
    ("ws:/", &[("c|/", "ws:/c|/"), ("/c:/..", "ws:/")]),
    // Relative bases.
    (
        "/base/path/file",
        &[("//input-auth", "//input-auth")],
    ),
    (
        "/path/dir/file",
        &[("./", "/path/dir/"), ("", "/path/dir/file")],
    ),
    (
        "/path/dir/base-file",
        &[("input-file", "/path/dir/input-file")],
    ),
    ("/foo/.", &[("bar", "/foo/bar")]),
    ("/foo/..", &[("bar", "/bar")]),
    // Opaque paths accept fragments only.
    ("sch:opaque", &[("#fragment", "sch:opaque#fragment")]),
    // Special URLs never have opaque paths.
    (
        "http:",
        &[
            ("//host/foo/bar", "http://host/foo/bar"),
            ("foo", "http:foo"),
            ("foo/bar", "http:foo/bar"),
            ("/foo/bar", "http:/foo/bar"),
            ("?query", "http:?query"),
            ("#fragment", "http:#fragment"),
            ("", "http:"),
        ],
    ),
    // Non-strict rebase.
    (
        "http://host",
        &[
            ("http:foo", "http://host/foo"),
            ("http:foo/bar", "http://host/foo/bar"),
            ("http:/foo/bar", "http://host/foo/bar"),
            ("http:?query", "http://host?query"),
            ("http:#fragment", "http://host#fragment"),
            ("", "http://host"),
        ],
    ),
    ("http://bar", &[("http:///foo", "http:///foo")]),
    // Precedence.
    (
        "#hash2",
        &[
            ("#hash1", "#hash1"),
            ("?query1", "?query1"),
            ("file1", "file1"),
            ("dir1/", "dir1/"),
            ("/dir1/", "/dir1/"),
            ("//auth1", "//auth1"),
            ("sc1:", "sc1:"),
        ],
    ),
    (
        "?query2#hash2",
        &[
            ("#hash1", "?query2#hash1"),
            ("?query1", "?query1"),
            ("file1", "file1"),
            ("dir1/", "dir1/"),
        ],
    ),
    (
        "__dir2/__file2_?query2#hash2",
        &[
            ("#hash1", "__dir2/__file2_?query2#hash1"),
            ("?query1", "__dir2/__file2_?query1"),
            ("file1", "__dir2/file1"),
            ("dir1/", "__dir2/dir1/"),
            ("/dir1/", "/dir1/"),
        ],
    ),
    (
        "//auth2/dir2/file2?query2#hash2",
        &[
            ("file1", "//auth2/dir2/file1"),
            ("/dir1/", "//auth2/dir1/"),
            ("//auth1", "//auth1"),
            ("sc1:", "sc1:"),
        ],
    ),
    (
        "sc2://auth2/dir2/file2?query2#hash2",
        &[
            ("#hash1", "sc2://auth2/dir2/file2?query2#hash1"),
            ("?query1", "sc2://auth2/dir2/file2?query1"),
            ("file1", "sc2://auth2/dir2/file1"),
            ("dir1/", "sc2://auth2/dir2/dir1/"),
            ("/dir1/", "sc2://auth2/dir1/"),
            ("//auth1", "sc2://auth1"),
            ("sc1:", "sc1:"),
        ],
    ),
];

/// Test cases that fail to rebase.
// [(base, input)]
const FAILURE_CASES: &[(&str, &str)] = &[
    ("sch:opaque", "/foo/bar"),
    ("sch:opaque", "foo/bar"),
    ("sch:opaque", "foo"),
    ("sch:opaque", "?query"),
    ("sch:opaque", ""),
    ("sch:", "/foo/bar"),
    ("sch:?base-query", "/foo/bar"),
    ("sch:#base-fragment", "/foo/bar"),
];

#[test]
fn test_rebase() {
    for (base, pairs) in TEST_CASES {
        for (input, expected) in *pairs {
            let got = rebase_normalized(input, base);
            assert_eq!(
                got.as_deref(),
                Ok(*expected),
                "base={base:?}, input={input:?}"
            );
        }
    }
}

#[test]
fn test_rebase_failure() {
    for (base, input) in FAILURE_CASES {
        let e = rebase(*input, *base).unwrap_err();
        assert_eq!(e.reason(), Reason::OpaquePathBase, "base={base:?}, input={input:?}");
    }
}

/// Test cases for strict resolution.
// [(base, [(input, output)])]
const RESOLVE_CASES: &[(&str, &[(&str, &str)])] = &[
    // RFC 3986, section 5.2.4.
    ("scheme:///a/b/c/./../../", &[("g", "scheme:///a/g")]),
    ("scheme:///a/b/c/./../", &[("../g", "scheme:///a/g")]),
    ("scheme:///a/b/c/./", &[("../../g", "scheme:///a/g")]),
    ("scheme:///a/b/c/", &[("./../../g", "scheme:///a/g")]),
    ("scheme:///a/b/", &[("c/./../../g", "scheme:///a/g")]),
    ("scheme:///a/", &[("b/c/./../../g", "scheme:///a/g")]),
    ("scheme:///", &[("a/b/c/./../../g", "scheme:///a/g")]),
    // RFC 3986, section 5.4.1.
    (
        "http://a/b/c/d;p?q",
        &[
            ("g:h", "g:h"),
            ("g", "http://a/b/c/g"),
            ("./g", "http://a/b/c/g"),
            ("g/", "http://a/b/c/g/"),
            ("/g", "http://a/g"),
            ("//g", "http://g/"),
            ("?y", "http://a/b/c/d;p?y"),
            ("g?y", "http://a/b/c/g?y"),
            ("#s", "http://a/b/c/d;p?q#s"),
            ("g#s", "http://a/b/c/g#s"),
            ("g?y#s", "http://a/b/c/g?y#s"),
            (";x", "http://a/b/c/;x"),
            ("g;x", "http://a/b/c/g;x"),
            ("g;x?y#s", "http://a/b/c/g;x?y#s"),
            ("", "http://a/b/c/d;p?q"),
            (".", "http://a/b/c/"),
            ("./", "http://a/b/c/"),
            ("..", "http://a/b/"),
            ("../", "http://a/b/"),
            ("../g", "http://a/b/g"),
            ("../..", "http://a/"),
            ("../../", "http://a/"),
            ("../../g", "http://a/g"),
        ],
    ),
    // RFC 3986, section 5.4.2.
    (
        "http://a/b/c/d;p?q",
        &[
            ("../../../g", "http://a/g"),
            ("../../../../g", "http://a/g"),
            ("/./g", "http://a/g"),
            ("/../g", "http://a/g"),
            ("g.", "http://a/b/c/g."),
            (".g", "http://a/b/c/.g"),
            ("g..", "http://a/b/c/g.."),
            ("..g", "http://a/b/c/..g"),
            ("./../g", "http://a/b/g"),
            ("./g/.", "http://a/b/c/g/"),
            ("g/./h", "http://a/b/c/g/h"),
            ("g/../h", "http://a/b/c/h"),
            ("g;x=1/./y", "http://a/b/c/g;x=1/y"),
            ("g;x=1/../y", "http://a/b/c/y"),
            ("g?y/./x", "http://a/b/c/g?y/./x"),
            ("g?y/../x", "http://a/b/c/g?y/../x"),
            ("g#s/./x", "http://a/b/c/g#s/./x"),
            ("g#s/../x", "http://a/b/c/g#s/../x"),
            ("http:g", "http://a/b/c/g"),
        ],
    ),
    // Forcing special URLs.
    (
        "",
        &[
            ("http:foo", "http://foo/"),
            ("http:///foo/bar", "http://foo/bar"),
            ("HTTP://EXAMPLE.com:80/", "http://example.com/"),
            ("http://127.1/", "http://127.0.0.1/"),
            ("file:/c|/x", "file:///c:/x"),
            ("file://localhost/x", "file:///x"),
            ("otp:foo", "otp:foo"),
            ("http://\u{1F332}", "http://\u{1F332}/"),
        ],
    ),
];

#[test]
fn test_resolve() {
    for (base, pairs) in RESOLVE_CASES {
        for (input, expected) in *pairs {
            let got = resolve(*input, *base).map(|url| print(&url));
            assert_eq!(
                got.as_deref(),
                Ok(*expected),
                "base={base:?}, input={input:?}"
            );
        }
    }
}

#[test]
fn test_resolve_failure() {
    let cases: &[(&str, &str, Reason)] = &[
        ("", "foo", Reason::NoScheme),
        ("/base/", "foo", Reason::NoScheme),
        ("", "http:", Reason::MissingHost),
        ("", "http://", Reason::MissingHost),
        ("", "file://joe@host/", Reason::ForbiddenCredentials),
        ("", "file://host:21/", Reason::ForbiddenCredentials),
        ("", "http://exa mple/", Reason::InvalidDomain),
        ("", "http://1.2.3.4.5/", Reason::NumericDomain),
        ("sch:opaque", "x", Reason::OpaquePathBase),
    ];
    for (base, input, reason) in cases {
        let e = resolve(*input, *base).unwrap_err();
        assert_eq!(e.reason(), *reason, "base={base:?}, input={input:?}");
    }
}

#[test]
fn resolved_predicate() {
    assert!(is_resolved(&resolve("g", "http://a/b").unwrap()));
    assert!(is_resolved(&rebase("#s", "#t").unwrap()));
    assert!(!is_resolved(&rebase("g", "/a").unwrap()));
}

#[test]
fn fixed_base() {
    let resolver = FixedBaseResolver::new("http://a/b/c/d;p?q").unwrap();
    assert_eq!(resolver.base().file.as_deref(), Some("d;p"));
    let url = resolver.resolve("../g").unwrap();
    assert_eq!(print(&url), "http://a/b/g");
    // The base mode is used for parsing.
    let url = resolver.rebase("\\\\h\\x").unwrap();
    assert_eq!(print(&url), "http://h/x");

    let base = crate::parser::parse("sch:/a/", Mode::NOSCHEME).unwrap();
    let resolver = FixedBaseResolver::new(&base).unwrap();
    let url = resolver.rebase("\\\\h\\x").unwrap();
    assert_eq!(url.file.as_deref(), Some("\\\\h\\x"));
}

#[test]
fn pure_rebase_fixes_root() {
    let base = UrlComponents {
        host: Some(Host::empty()),
        ..UrlComponents::default()
    };
    let url = UrlComponents {
        file: Some("f".into()),
        ..UrlComponents::default()
    };
    let r = pure_rebase(&url, &base);
    assert!(r.root);
    assert_eq!(print(&r), "///f");
}

/// References covering every component type and mode.
const REFERENCES: &[&str] = &[
    "",
    "x",
    "x/y",
    "/x",
    "//h",
    "//h/x",
    "?q",
    "#f",
    "..",
    "../x",
    "./",
    "s:/r/",
    "s:x",
    "http://h/a/",
    "http:x",
    "file:///c:/d/",
    "c|/x",
    "//u:p@h:1/x?q#f",
    "s://h",
];

#[test]
fn merge_associativity() {
    let refs: Vec<_> = REFERENCES
        .iter()
        .map(|s| crate::parser::parse(s, Mode::NOSCHEME).unwrap())
        .collect();
    for a in &refs {
        for b in &refs {
            for c in &refs {
                assert_eq!(
                    pure_rebase(&pure_rebase(a, b), c),
                    pure_rebase(a, &pure_rebase(b, c)),
                    "a={a}, b={b}, c={c}"
                );
            }
        }
    }
}

/// The scheme of an input is only stripped against a base with the same
/// scheme, so such inputs are excluded.
#[test]
fn rebase_associativity() {
    let refs: Vec<_> = REFERENCES
        .iter()
        .map(|s| crate::parser::parse(s, Mode::NOSCHEME).unwrap())
        .collect();
    for a in refs
        .iter()
        .filter(|a| a.scheme.is_none() || !a.mode(Mode::NOSCHEME).contains(Mode::NON_STRICT))
    {
        for b in &refs {
            for c in &refs {
                let (Ok(ab), Ok(bc)) = (rebase(a, b), rebase(b, c)) else {
                    continue;
                };
                let (Ok(left), Ok(right)) = (rebase(&ab, c), rebase(a, &bc)) else {
                    continue;
                };
                assert_eq!(left, right, "a={a}, b={b}, c={c}");
            }
        }
    }
}
