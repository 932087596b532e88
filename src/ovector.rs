// ovector.rs - Offset vector filled by one match execution.
//
// Layout follows the classic ovector convention: 3 slots per group. The first
// two thirds hold (start, end) pairs, the last third is engine workspace.
// The matcher only ever sees the pair slots.

use regex_automata::util::primitives::NonMaxUsize;
use smallvec::{smallvec, SmallVec};

/// Inline capacity: patterns with up to 7 capture groups stay off the heap.
const INLINE_SLOTS: usize = 24;

/// Per-group `(start, end)` offsets of a match.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OffsetVector {
    slots: SmallVec<[Option<NonMaxUsize>; INLINE_SLOTS]>,
    groups: usize,
}

impl OffsetVector {
    /// Allocate a vector for a pattern declaring `capture_count` groups.
    ///
    /// Group 0, the whole match, is added on top.
    pub fn for_capture_count(capture_count: usize) -> OffsetVector {
        let groups = capture_count + 1;
        OffsetVector {
            slots: smallvec![None; groups * 3],
            groups,
        }
    }

    /// Number of groups, whole match included.
    pub fn group_len(&self) -> usize {
        self.groups
    }

    /// Total number of slots, workspace included.
    pub fn slot_len(&self) -> usize {
        self.slots.len()
    }

    /// The pair slots handed to the matcher.
    pub(crate) fn pairs_mut(&mut self) -> &mut [Option<NonMaxUsize>] {
        &mut self.slots[..self.groups * 2]
    }

    /// Move every recorded offset `by` bytes to the right.
    pub(crate) fn shift(&mut self, by: usize) {
        if by == 0 {
            return;
        }
        for slot in self.pairs_mut() {
            *slot = slot.and_then(|v| NonMaxUsize::new(v.get() + by));
        }
    }

    /// Span of `group`, or `None` if the group did not participate.
    pub fn span(&self, group: usize) -> Option<(usize, usize)> {
        if group >= self.groups {
            return None;
        }
        match (self.slots[group * 2], self.slots[group * 2 + 1]) {
            (Some(start), Some(end)) => Some((start.get(), end.get())),
            _ => None,
        }
    }

    /// Iterate the spans of all groups in index order.
    pub fn spans(&self) -> impl Iterator<Item = Option<(usize, usize)>> + '_ {
        (0..self.groups).map(move |g| self.span(g))
    }
}
