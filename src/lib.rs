//! # mregexp
//!
//! Ruby-style `Regexp` and `MatchData` core for embedding in an interpreter,
//! on top of the [`regex-automata`](https://crates.io/crates/regex-automata)
//! meta regex engine.
//!
//! The host passes a pattern source and its flag argument in whatever shape
//! the script used (nothing, nil, an integer, a mnemonic string or `true`).
//! Matching returns `Ok(None)` for "no match" and a [`MatchData`] otherwise.
//!
//! ## Quick Start
//!
//! ```rust
//! use mregexp::prelude::*;
//!
//! let re = Regexp::new(r"(?<year>\d{4})-(?<month>\d{2})").unwrap();
//! let m = re.matches("Date: 2024-03 end").unwrap().unwrap();
//! assert_eq!(m.offset(0).unwrap(), Some((6, 13)));
//! assert_eq!(m.name("year"), Some(&b"2024"[..]));
//! assert_eq!(re.name_table().get("month"), Some(2));
//! ```
//!
//! Flags use the host's vocabulary:
//!
//! ```rust
//! use mregexp::prelude::*;
//!
//! let re = Regexp::with_flags("ABC", "i").unwrap();
//! assert!(re.is_casefold());
//! assert_eq!(re.match_index("xx abc yy"), Some(3));
//! ```
//!
//! ## Module Structure
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`options`] | Flag argument translation, compile options |
//! | [`regexp`] | Pattern compilation, matching, equality |
//! | [`names`] | Named-group table |
//! | [`ovector`] | Per-match offset vector |
//! | [`match_data`] | Match result access and duplication |
//! | [`error`] | Error type |

pub mod error;
pub mod match_data;
pub mod names;
pub mod options;
pub mod ovector;
pub mod prelude;
pub mod regexp;

pub use error::RegexpError;
pub use match_data::MatchData;
pub use options::{FlagInput, FlagValue, RegexpOptions};
pub use regexp::{escape, quote, Regexp, RegexpBuilder};
