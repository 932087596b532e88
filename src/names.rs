// names.rs - Named capture group table.
//
// Built once when a pattern compiles, from the group names the matching
// library reports for each group slot. Read-only afterwards.

use regex_automata::util::captures::GroupInfo;
use regex_automata::PatternID;

/// Mapping from capture-group name to its 1-based group index.
///
/// Entries keep the order the matching library reports them in, which is
/// group-index order. A name that occurs more than once keeps every index.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NameTable {
    entries: Vec<NameEntry>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct NameEntry {
    name: Box<str>,
    groups: Vec<usize>,
}

impl NameTable {
    pub(crate) fn from_group_info(info: &GroupInfo) -> NameTable {
        let mut table = NameTable::default();
        if info.pattern_len() == 0 {
            return table;
        }
        for (index, name) in info.pattern_names(PatternID::ZERO).enumerate() {
            if let Some(name) = name {
                table.push(name, index);
            }
        }
        table
    }

    fn push(&mut self, name: &str, group: usize) {
        match self.entries.iter_mut().find(|e| &*e.name == name) {
            Some(entry) => entry.groups.push(group),
            None => self.entries.push(NameEntry {
                name: name.into(),
                groups: vec![group],
            }),
        }
    }

    /// Number of distinct names.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// First group index bound to `name`, or `None` if the name is not declared.
    pub fn get(&self, name: &str) -> Option<usize> {
        self.groups(name).and_then(|g| g.first().copied())
    }

    /// All group indices bound to `name`.
    pub fn groups(&self, name: &str) -> Option<&[usize]> {
        self.entries
            .iter()
            .find(|e| &*e.name == name)
            .map(|e| e.groups.as_slice())
    }

    /// Iterate `(name, first group index)` pairs in table order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, usize)> + '_ {
        self.entries.iter().map(|e| (&*e.name, e.groups[0]))
    }

    /// Names in table order.
    pub fn names(&self) -> impl Iterator<Item = &str> + '_ {
        self.entries.iter().map(|e| &*e.name)
    }
}
