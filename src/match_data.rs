// match_data.rs - Result of one successful match.
//
// Holds its own copy of the searched text, the `Regexp` that produced it and
// the offset vector. Nothing changes after construction; `duplicate` copies
// the offset vector and shares the rest.

use std::fmt;
use std::sync::Arc;

use crate::error::RegexpError;
use crate::ovector::OffsetVector;
use crate::regexp::Regexp;

/// Capture offsets of a match, with the searched text and its pattern.
///
/// A `MatchData` built with [`MatchData::default`] is uninitialized: it has a
/// length of -1 and every group access fails with an `Index` error. This
/// template state is public on purpose, matching the host's `MatchData.new`;
/// matching itself only ever returns populated results.
///
/// # Examples
///
/// ```
/// use mregexp::Regexp;
///
/// let re = Regexp::new(r"(a)(b)?").unwrap();
/// let m = re.matches("a").unwrap().unwrap();
/// assert_eq!(m.length(), 3);
/// assert_eq!(m.offset(1).unwrap(), Some((0, 1)));
/// assert_eq!(m.begin(2).unwrap(), None);
/// assert!(m.begin(3).is_err());
/// ```
#[derive(Clone, Default)]
pub struct MatchData {
    state: State,
}

#[derive(Clone, Default)]
enum State {
    #[default]
    Uninitialized,
    Populated {
        string: Arc<[u8]>,
        regexp: Regexp,
        ovector: OffsetVector,
    },
}

impl MatchData {
    pub(crate) fn populated(string: Arc<[u8]>, regexp: Regexp, ovector: OffsetVector) -> Self {
        MatchData {
            state: State::Populated {
                string,
                regexp,
                ovector,
            },
        }
    }

    /// Whether this result holds a match.
    pub fn is_populated(&self) -> bool {
        matches!(self.state, State::Populated { .. })
    }

    /// Number of groups including group 0, or -1 when uninitialized.
    pub fn length(&self) -> isize {
        match &self.state {
            State::Uninitialized => -1,
            State::Populated { ovector, .. } => ovector.group_len() as isize,
        }
    }

    /// Alias of [`MatchData::length`].
    pub fn size(&self) -> isize {
        self.length()
    }

    /// Copy of this result with its own offset vector.
    ///
    /// The text and the pattern are shared with `self`.
    pub fn duplicate(&self) -> MatchData {
        self.clone()
    }

    /// The searched text.
    pub fn string(&self) -> Option<&[u8]> {
        match &self.state {
            State::Uninitialized => None,
            State::Populated { string, .. } => Some(&string[..]),
        }
    }

    /// The pattern that produced this result.
    pub fn regexp(&self) -> Option<&Regexp> {
        match &self.state {
            State::Uninitialized => None,
            State::Populated { regexp, .. } => Some(regexp),
        }
    }

    fn group(&self, n: isize) -> Result<Option<(usize, usize)>, RegexpError> {
        let limit = self.length();
        if n < 0 || n >= limit {
            return Err(RegexpError::Index {
                requested: n,
                limit,
            });
        }
        match &self.state {
            State::Populated { ovector, .. } => Ok(ovector.span(n as usize)),
            State::Uninitialized => Ok(None),
        }
    }

    /// Start offset of group `n`; `None` if the group did not participate.
    pub fn begin(&self, n: isize) -> Result<Option<usize>, RegexpError> {
        Ok(self.group(n)?.map(|(start, _)| start))
    }

    /// End offset of group `n`; `None` if the group did not participate.
    pub fn end(&self, n: isize) -> Result<Option<usize>, RegexpError> {
        Ok(self.group(n)?.map(|(_, end)| end))
    }

    /// `(begin, end)` of group `n`.
    pub fn offset(&self, n: isize) -> Result<Option<(usize, usize)>, RegexpError> {
        self.group(n)
    }

    /// Text of group `n`.
    ///
    /// Negative `n` counts from the last group. Out of range and
    /// non-participating groups give `None`.
    pub fn get(&self, n: isize) -> Option<&[u8]> {
        let n = if n < 0 { n.checked_add(self.length())? } else { n };
        let (start, end) = self.group(n).ok()??;
        self.string().map(|s| &s[start..end])
    }

    /// Text of the first participating group called `name`.
    pub fn name(&self, name: &str) -> Option<&[u8]> {
        let groups = self.regexp()?.name_table().groups(name)?;
        groups
            .iter()
            .find_map(|&g| isize::try_from(g).ok().and_then(|g| self.get(g)))
    }

    /// Text of every group, group 0 first.
    pub fn to_a(&self) -> Vec<Option<&[u8]>> {
        (0..self.length().max(0)).map(|i| self.get(i)).collect()
    }

    /// Text of groups 1 and up.
    pub fn captures(&self) -> Vec<Option<&[u8]>> {
        (1..self.length().max(1)).map(|i| self.get(i)).collect()
    }

    /// Text of the whole match.
    pub fn as_bytes(&self) -> Option<&[u8]> {
        self.get(0)
    }

    /// Text before the whole match.
    pub fn pre_match(&self) -> Option<&[u8]> {
        let (start, _) = self.group(0).ok()??;
        self.string().map(|s| &s[..start])
    }

    /// Text after the whole match.
    pub fn post_match(&self) -> Option<&[u8]> {
        let (_, end) = self.group(0).ok()??;
        self.string().map(|s| &s[end..])
    }
}

impl fmt::Debug for MatchData {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let Some(whole) = self.as_bytes() else {
            return f.write_str("#<MatchData>");
        };
        write!(f, "#<MatchData \"{}\"", String::from_utf8_lossy(whole))?;
        for (i, capture) in self.captures().into_iter().enumerate() {
            match capture {
                Some(c) => write!(f, " {}:{:?}", i + 1, String::from_utf8_lossy(c))?,
                None => write!(f, " {}:nil", i + 1)?,
            }
        }
        f.write_str(">")
    }
}

impl fmt::Display for MatchData {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.as_bytes() {
            Some(whole) => f.write_str(&String::from_utf8_lossy(whole)),
            None => Ok(()),
        }
    }
}
