// options.rs - Compile options and the host flag vocabulary.
//
// `Regexp.new` takes a single polymorphic flag argument: nothing, nil, an
// integer bit set, a mnemonic string like "im", or `true`. `translate` folds
// every one of those call shapes into a `RegexpOptions` bitmask.

use bitflags::bitflags;
use memchr::memchr;
use regex_automata::util::syntax;

// === Host option bits ===

/// Host-level option bit for case-insensitive matching.
pub const IGNORECASE: i64 = 1;
/// Host-level option bit for extended (free-spacing) patterns.
pub const EXTENDED: i64 = 2;
/// Host-level option bit for `^`/`$` matching at line boundaries.
pub const MULTILINE: i64 = 4;

bitflags! {
    /// Native compile options handed to the pattern compiler.
    ///
    /// The bit layout mirrors the classic PCRE compile options.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct RegexpOptions: u32 {
        /// Letters match both cases.
        const CASELESS = 0x0001;
        /// `^` and `$` also match at line boundaries.
        const MULTILINE = 0x0002;
        /// `.` matches `\n` as well.
        const DOTALL = 0x0004;
        /// Whitespace and `#` comments in the pattern are ignored.
        const EXTENDED = 0x0008;
    }
}

impl RegexpOptions {
    /// Host-level view of these options (`IGNORECASE | EXTENDED | MULTILINE`).
    ///
    /// `DOTALL` has no host bit and is dropped.
    pub fn to_host_bits(self) -> i64 {
        let mut bits = 0;
        if self.contains(RegexpOptions::CASELESS) {
            bits |= IGNORECASE;
        }
        if self.contains(RegexpOptions::EXTENDED) {
            bits |= EXTENDED;
        }
        if self.contains(RegexpOptions::MULTILINE) {
            bits |= MULTILINE;
        }
        bits
    }

    pub(crate) fn syntax_config(self) -> syntax::Config {
        syntax::Config::new()
            .case_insensitive(self.contains(RegexpOptions::CASELESS))
            .multi_line(self.contains(RegexpOptions::MULTILINE))
            .dot_matches_new_line(self.contains(RegexpOptions::DOTALL))
            .ignore_whitespace(self.contains(RegexpOptions::EXTENDED))
    }
}

// === Flag input ===

/// The flag argument as the host passed it.
///
/// `Absent` means the argument was left out of the call entirely; everything
/// the caller actually wrote, nil included, is `Explicit`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FlagInput<'a> {
    #[default]
    Absent,
    Explicit(FlagValue<'a>),
}

/// An explicitly supplied flag value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FlagValue<'a> {
    /// `nil`.
    Nil,
    /// A value carrying no flags of its own, e.g. `false` or an unsupported type.
    Empty,
    /// Integer bit set, see [`IGNORECASE`], [`EXTENDED`] and [`MULTILINE`].
    Bits(i64),
    /// Mnemonic string scanned for `i`, `x` and `m`.
    Mnemonics(&'a str),
    /// `true`, shorthand for case-insensitive.
    CaseInsensitive,
}

impl<'a> From<FlagValue<'a>> for FlagInput<'a> {
    fn from(value: FlagValue<'a>) -> Self {
        FlagInput::Explicit(value)
    }
}

impl From<i64> for FlagInput<'_> {
    fn from(bits: i64) -> Self {
        FlagInput::Explicit(FlagValue::Bits(bits))
    }
}

impl From<i32> for FlagInput<'_> {
    fn from(bits: i32) -> Self {
        FlagInput::Explicit(FlagValue::Bits(i64::from(bits)))
    }
}

impl<'a> From<&'a str> for FlagInput<'a> {
    fn from(mnemonics: &'a str) -> Self {
        FlagInput::Explicit(FlagValue::Mnemonics(mnemonics))
    }
}

impl From<bool> for FlagInput<'_> {
    fn from(yes: bool) -> Self {
        if yes {
            FlagInput::Explicit(FlagValue::CaseInsensitive)
        } else {
            FlagInput::Explicit(FlagValue::Empty)
        }
    }
}

impl<'a, T> From<Option<T>> for FlagInput<'a>
where
    T: Into<FlagInput<'a>>,
{
    /// `None` is an explicit nil, not an absent argument.
    fn from(value: Option<T>) -> Self {
        match value {
            Some(v) => v.into(),
            None => FlagInput::Explicit(FlagValue::Nil),
        }
    }
}

/// Translate a host flag argument into compile options.
///
/// Absent and nil flags give no options at all. Any other explicit value
/// starts from `DOTALL` and adds what it names. Unknown bits and characters
/// are ignored.
pub fn translate(input: FlagInput<'_>) -> RegexpOptions {
    let value = match input {
        FlagInput::Absent | FlagInput::Explicit(FlagValue::Nil) => {
            return RegexpOptions::empty();
        }
        FlagInput::Explicit(value) => value,
    };

    let mut options = RegexpOptions::DOTALL;
    match value {
        FlagValue::Bits(bits) => {
            if bits & IGNORECASE != 0 {
                options |= RegexpOptions::CASELESS;
            }
            if bits & EXTENDED != 0 {
                options |= RegexpOptions::EXTENDED;
            }
            if bits & MULTILINE != 0 {
                options |= RegexpOptions::MULTILINE;
            }
        }
        FlagValue::Mnemonics(s) => {
            let bytes = s.as_bytes();
            if memchr(b'i', bytes).is_some() {
                options |= RegexpOptions::CASELESS;
            }
            if memchr(b'x', bytes).is_some() {
                options |= RegexpOptions::EXTENDED;
            }
            if memchr(b'm', bytes).is_some() {
                options |= RegexpOptions::MULTILINE;
            }
        }
        FlagValue::CaseInsensitive => options |= RegexpOptions::CASELESS,
        FlagValue::Nil | FlagValue::Empty => {}
    }
    options
}
