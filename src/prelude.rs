// prelude.rs - Convenient re-exports.
//
//! # Prelude
//!
//! ```
//! use mregexp::prelude::*;
//!
//! let re = Regexp::new(r"\d+").unwrap();
//! let m = re.matches("answer: 42").unwrap().unwrap();
//! assert_eq!(m.as_bytes(), Some(&b"42"[..]));
//! ```

pub use crate::error::RegexpError;
pub use crate::match_data::MatchData;
pub use crate::names::NameTable;
pub use crate::options::{translate, FlagInput, FlagValue, RegexpOptions};
pub use crate::regexp::{Regexp, RegexpBuilder};
