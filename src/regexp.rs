// regexp.rs - Compiled pattern: compile, match, equality and introspection.
//
// A `Regexp` owns one compiled matcher for its whole life. Clones share the
// matcher by reference count and the matcher is released with the last one.

use std::any::Any;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::sync::Arc;

use regex_automata::meta;
use regex_automata::{Input, PatternID};

use crate::error::RegexpError;
use crate::match_data::MatchData;
use crate::names::NameTable;
use crate::options::{translate, FlagInput, RegexpOptions};
use crate::ovector::OffsetVector;

/// A compiled regular expression.
///
/// # Examples
///
/// ```
/// use mregexp::Regexp;
///
/// let re = Regexp::new(r"(?<year>\d{4})-(?<month>\d{2})").unwrap();
/// let m = re.matches("Date: 2024-03 end").unwrap().unwrap();
/// assert_eq!(m.offset(0).unwrap(), Some((6, 13)));
/// assert_eq!(re.name_table().get("month"), Some(2));
/// ```
#[derive(Clone)]
pub struct Regexp {
    inner: Arc<Compiled>,
}

struct Compiled {
    source: Box<str>,
    options: RegexpOptions,
    matcher: meta::Regex,
    names: NameTable,
}

impl Regexp {
    /// Compile `source` with the flag argument left out.
    pub fn new(source: &str) -> Result<Regexp, RegexpError> {
        Self::with_flags(source, FlagInput::Absent)
    }

    /// Compile `source` with a host flag argument.
    ///
    /// ```
    /// use mregexp::Regexp;
    ///
    /// let re = Regexp::with_flags("ABC", 1).unwrap();
    /// let m = re.matches("xx abc yy").unwrap().unwrap();
    /// assert_eq!(m.offset(0).unwrap(), Some((3, 6)));
    /// ```
    pub fn with_flags<'a>(
        source: &str,
        flags: impl Into<FlagInput<'a>>,
    ) -> Result<Regexp, RegexpError> {
        Self::compile(source, translate(flags.into()))
    }

    /// Create a [`RegexpBuilder`] for setting options one by one.
    pub fn builder(source: &str) -> RegexpBuilder {
        RegexpBuilder::new(source)
    }

    fn compile(source: &str, options: RegexpOptions) -> Result<Regexp, RegexpError> {
        let matcher = meta::Regex::builder()
            .syntax(options.syntax_config())
            .build(source)
            .map_err(|e| {
                let err = RegexpError::from_build(source, &e);
                log::debug!("rejected pattern: {}", err);
                err
            })?;
        let names = NameTable::from_group_info(matcher.group_info());
        log::debug!(
            "compiled /{}/ ({:?}): {} groups, {} named",
            source,
            options,
            matcher.group_info().group_len(PatternID::ZERO),
            names.len()
        );
        Ok(Regexp {
            inner: Arc::new(Compiled {
                source: source.into(),
                options,
                matcher,
                names,
            }),
        })
    }

    /// The pattern source as given to the compiler.
    pub fn source(&self) -> &str {
        &self.inner.source
    }

    /// Resolved compile options.
    pub fn options(&self) -> RegexpOptions {
        self.inner.options
    }

    /// Whether the pattern was compiled case-insensitive.
    pub fn is_casefold(&self) -> bool {
        self.inner.options.contains(RegexpOptions::CASELESS)
    }

    /// Number of capture groups declared by the pattern (group 0 excluded).
    pub fn capture_count(&self) -> usize {
        self.declared_capture_count().unwrap_or(0)
    }

    fn declared_capture_count(&self) -> Option<usize> {
        self.inner
            .matcher
            .group_info()
            .group_len(PatternID::ZERO)
            .checked_sub(1)
    }

    /// Named-group table of the pattern.
    pub fn name_table(&self) -> &NameTable {
        &self.inner.names
    }

    /// Group names in table order.
    pub fn names(&self) -> Vec<&str> {
        self.inner.names.names().collect()
    }

    /// Group names with the group indices each one is bound to.
    pub fn named_captures(&self) -> Vec<(&str, &[usize])> {
        self.inner
            .names
            .names()
            .filter_map(|name| self.inner.names.groups(name).map(|g| (name, g)))
            .collect()
    }

    /// Match against `text` from its beginning.
    pub fn matches<T>(&self, text: &T) -> Result<Option<MatchData>, RegexpError>
    where
        T: AsRef<[u8]> + ?Sized,
    {
        self.matches_at(text, 0)
    }

    /// Match against `text[pos..]`.
    ///
    /// Returns `Ok(None)` when nothing matches. Offsets in the result are
    /// positions in the whole of `text`. A `pos` outside `0..=text.len()` is an
    /// `Argument` error.
    pub fn matches_at<T>(&self, text: &T, pos: isize) -> Result<Option<MatchData>, RegexpError>
    where
        T: AsRef<[u8]> + ?Sized,
    {
        let text = text.as_ref();
        let start = usize::try_from(pos)
            .ok()
            .filter(|&p| p <= text.len())
            .ok_or_else(|| RegexpError::start_offset(pos, text.len()))?;
        Ok(self.execute(text, start))
    }

    fn execute(&self, text: &[u8], start: usize) -> Option<MatchData> {
        let capture_count = self.declared_capture_count()?;
        let mut ovector = OffsetVector::for_capture_count(capture_count);

        let input = Input::new(&text[start..]);
        if self
            .inner
            .matcher
            .search_slots(&input, ovector.pairs_mut())
            .is_none()
        {
            log::trace!("/{}/: no match from offset {}", self.inner.source, start);
            return None;
        }
        ovector.shift(start);
        log::trace!(
            "/{}/: matched {:?} from offset {}",
            self.inner.source,
            ovector.span(0),
            start
        );

        Some(MatchData::populated(Arc::from(text), self.clone(), ovector))
    }

    /// Start of the first match in `text`, or `None` (`=~`).
    pub fn match_index<T>(&self, text: &T) -> Option<usize>
    where
        T: AsRef<[u8]> + ?Sized,
    {
        self.execute(text.as_ref(), 0)
            .and_then(|m| m.begin(0).ok().flatten())
    }

    /// Whether `text` contains a match (`===`).
    pub fn case_eq<T>(&self, text: &T) -> bool
    where
        T: AsRef<[u8]> + ?Sized,
    {
        self.inner.matcher.is_match(text.as_ref())
    }

    /// Host equality: true for another `Regexp` with the same source.
    ///
    /// Options are not compared. Any other type compares unequal.
    pub fn equals(&self, other: &dyn Any) -> bool {
        other.downcast_ref::<Regexp>().is_some_and(|o| self == o)
    }
}

impl PartialEq for Regexp {
    fn eq(&self, other: &Regexp) -> bool {
        Arc::ptr_eq(&self.inner, &other.inner) || self.inner.source == other.inner.source
    }
}

impl Eq for Regexp {}

impl Hash for Regexp {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.inner.source.hash(state);
    }
}

impl fmt::Debug for Regexp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Regexp")
            .field("source", &self.inner.source)
            .field("options", &self.inner.options)
            .finish_non_exhaustive()
    }
}

impl fmt::Display for Regexp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "/{}/", self.inner.source)?;
        let opts = self.inner.options;
        if opts.contains(RegexpOptions::MULTILINE) {
            f.write_str("m")?;
        }
        if opts.contains(RegexpOptions::CASELESS) {
            f.write_str("i")?;
        }
        if opts.contains(RegexpOptions::EXTENDED) {
            f.write_str("x")?;
        }
        Ok(())
    }
}

// === RegexpBuilder ===

/// Builder for compiling a [`Regexp`] with explicit options.
///
/// # Examples
///
/// ```
/// use mregexp::Regexp;
///
/// let re = Regexp::builder("hello world")
///     .case_insensitive(true)
///     .build()
///     .unwrap();
/// assert!(re.case_eq("HELLO WORLD"));
/// ```
pub struct RegexpBuilder {
    source: String,
    options: RegexpOptions,
}

impl RegexpBuilder {
    /// Create a new builder for the given pattern, with no options set.
    pub fn new(source: &str) -> Self {
        RegexpBuilder {
            source: source.to_string(),
            options: RegexpOptions::empty(),
        }
    }

    /// Replace the options with the translation of a host flag argument.
    pub fn flags<'a>(mut self, flags: impl Into<FlagInput<'a>>) -> Self {
        self.options = translate(flags.into());
        self
    }

    /// Enable or disable case-insensitive matching.
    pub fn case_insensitive(mut self, yes: bool) -> Self {
        self.options.set(RegexpOptions::CASELESS, yes);
        self
    }

    /// Enable or disable extended mode (whitespace and `#` comments ignored).
    pub fn extended(mut self, yes: bool) -> Self {
        self.options.set(RegexpOptions::EXTENDED, yes);
        self
    }

    /// Enable or disable `^`/`$` matching at every line boundary.
    pub fn multi_line_anchors(mut self, yes: bool) -> Self {
        self.options.set(RegexpOptions::MULTILINE, yes);
        self
    }

    /// Enable or disable `.` matching `\n`.
    pub fn dot_matches_newline(mut self, yes: bool) -> Self {
        self.options.set(RegexpOptions::DOTALL, yes);
        self
    }

    /// Add raw option bits.
    pub fn option(mut self, flag: RegexpOptions) -> Self {
        self.options |= flag;
        self
    }

    /// Compile the pattern into a [`Regexp`].
    pub fn build(self) -> Result<Regexp, RegexpError> {
        Regexp::compile(&self.source, self.options)
    }
}

// === Escaping ===

/// Escape every character of `text` that has a meaning in a pattern.
///
/// ```
/// assert_eq!(mregexp::escape("1+1=2?"), r"1\+1=2\?");
/// ```
pub fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            ' ' | '[' | ']' | '{' | '}' | '(' | ')' | '|' | '-' | '*' | '.' | '\\' | '?' | '+'
            | '^' | '$' | '#' => {
                out.push('\\');
                out.push(c);
            }
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\x0c' => out.push_str("\\f"),
            '\t' => out.push_str("\\t"),
            '\x0b' => out.push_str("\\v"),
            _ => out.push(c),
        }
    }
    out
}

/// Alias of [`escape`].
pub fn quote(text: &str) -> String {
    escape(text)
}
