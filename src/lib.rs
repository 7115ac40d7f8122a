//! Generalized URL references: parsing, rebasing, resolution, normalization
//! and printing.
//!
//! A URL reference is decomposed into an ordered sequence of optional
//! components ([`UrlComponents`]): scheme, authority, drive letter, path root,
//! directories, file, query and fragment. All operations are pure functions
//! from components to new components.
//!
//! * [`parse`] tokenizes a string. It only fails on invalid authorities.
//! * [`rebase`] merges a reference with a base that need not be absolute.
//! * [`resolve`] produces an absolute URL, applying the rules of special
//!   schemes such as `http` and `file`.
//! * [`normalize`] and [`percent_encode()`] are independent post-passes.
//! * [`print`] serializes components so that they parse back unchanged.
//!
//! ```
//! use url_reference::{parse, print, rebase, resolve, Mode};
//!
//! let url = parse("c|/dir/file", Mode::NOSCHEME)?;
//! assert_eq!(url.scheme.as_deref(), Some("file"));
//!
//! let url = rebase("../b?q", "/a/x/y")?;
//! assert_eq!(print(&url), "/a/x/../b?q");
//!
//! let url = resolve("../b?q", "http://Example.com/a/x/y")?;
//! assert_eq!(print(&url), "http://example.com/a/b?q");
//! # Ok::<_, url_reference::Error>(())
//! ```
//!
//! # Modes
//!
//! Parsing and resolution depend on a [`Mode`], selected by the scheme of
//! the URL. Schemeless references are parsed in the mode of the base they
//! are going to be rebased onto, which is [`Mode::NOSCHEME`] by default:
//! like special URLs, `\` is a path separator, and drive letters are
//! detected.
//!
//! # `std` support
//!
//! This crate supports `no_std` usage with the `alloc` crate.
//!
//! * `std` feature (**enabled by default**):
//!     + The feature lets the crate utilize std-specific stuff, such as
//!       `std::error::Error` trait.
//! * `memchr` feature:
//!     + Byte searches in the parser and the percent decoder use the
//!       `memchr` crate.
//! * `serde` feature:
//!     + Components, hosts, ports and modes implement `Serialize` and
//!       `Deserialize`.
#![warn(missing_docs)]
#![warn(clippy::missing_docs_in_private_items)]
#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(docsrs, feature(doc_cfg))]

extern crate alloc;

pub mod authority;
pub mod components;
mod convert;
pub mod error;
mod format;
pub mod host;
pub mod mode;
mod normalize;
mod parser;
pub mod percent_encode;
pub mod resolve;

pub use crate::authority::Port;
pub use crate::components::{ComponentType, ToComponents, UrlComponents};
pub use crate::convert::{percent_decode, percent_encode};
pub use crate::error::{Error, ErrorKind, Reason};
pub use crate::format::{pathname, print, print_with};
pub use crate::host::Host;
pub use crate::mode::Mode;
pub use crate::normalize::normalize;
pub use crate::parser::{parse, parse_path};
pub use crate::percent_encode::{EncodeSet, Profile};
pub use crate::resolve::{force, rebase, resolve, resolve_with};
