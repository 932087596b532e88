// compat_options.rs - Flag vocabulary tests.
//
// Each helper compiles with one host flag argument and checks the whole-match
// span. The flag shapes are the ones a script can write: nothing, nil, an
// integer, a mnemonic string and `true`/`false`.

use mregexp::options::{EXTENDED, IGNORECASE, MULTILINE};
use mregexp::prelude::*;

fn x2<'a>(flags: impl Into<FlagInput<'a>>, pattern: &str, input: &str, from: usize, to: usize) {
    let flags = flags.into();
    let re = Regexp::with_flags(pattern, flags)
        .unwrap_or_else(|e| panic!("compile failed for {:?}: {}", pattern, e));
    let m = re
        .matches(input)
        .unwrap()
        .unwrap_or_else(|| {
            panic!(
                "x2: expected match for {:?} against {:?} with flags {:?}",
                pattern, input, flags
            )
        });
    assert_eq!(
        m.offset(0).unwrap(),
        Some((from, to)),
        "x2: wrong span for {:?} against {:?} with flags {:?}",
        pattern,
        input,
        flags
    );
}

fn n<'a>(flags: impl Into<FlagInput<'a>>, pattern: &str, input: &str) {
    let flags = flags.into();
    let re = Regexp::with_flags(pattern, flags)
        .unwrap_or_else(|e| panic!("compile failed for {:?}: {}", pattern, e));
    assert!(
        re.matches(input).unwrap().is_none(),
        "n: expected no match for {:?} against {:?} with flags {:?}",
        pattern,
        input,
        flags
    );
}

// === Dot and newline ===

#[test]
fn absent_flags_dot_stops_at_newline() {
    n(FlagInput::Absent, "a.b", "a\nb");
    x2(FlagInput::Absent, "a.b", "a-b", 0, 3);
}

#[test]
fn nil_flags_dot_stops_at_newline() {
    n(None::<i64>, "a.b", "a\nb");
}

#[test]
fn explicit_flags_dot_matches_newline() {
    x2(0, "a.b", "a\nb", 0, 3);
    x2("", "a.b", "a\nb", 0, 3);
    x2(false, "a.b", "a\nb", 0, 3);
    x2(FlagValue::Empty, "a.b", "a\nb", 0, 3);
}

// === Case-insensitive ===

#[test]
fn ignorecase_integer() {
    x2(IGNORECASE, "ABC", "xx abc yy", 3, 6);
    n(0, "ABC", "xx abc yy");
}

#[test]
fn ignorecase_mnemonic() {
    x2("i", "hello", "HeLLo", 0, 5);
}

#[test]
fn ignorecase_true() {
    x2(true, "hello", "HELLO", 0, 5);
    n(false, "hello", "HELLO");
}

// === Extended ===

#[test]
fn extended_integer() {
    x2(EXTENDED, r"\d+ \s+ \w+  # comment", "42 hello", 0, 8);
    n(0, r"a b", "ab");
}

#[test]
fn extended_mnemonic() {
    x2("x", "a b c", "abc", 0, 3);
}

// === Multiline anchors ===

#[test]
fn multiline_integer() {
    x2(MULTILINE, "^b$", "a\nb\nc", 2, 3);
    n(0, "^b$", "a\nb\nc");
}

#[test]
fn multiline_mnemonic() {
    x2("m", "c$", "c\nd", 0, 1);
    n("", "c$", "c\nd");
}

// === Combinations and unknowns ===

#[test]
fn combined_bits() {
    x2(IGNORECASE | MULTILINE, "^B", "a\nb", 2, 3);
    x2(7, "^ B . C", "a\nb\nc", 2, 5);
}

#[test]
fn combined_mnemonics() {
    x2("mi", "^B", "a\nb", 2, 3);
    x2("xim", "^ B . C", "a\nb\nc", 2, 5);
}

#[test]
fn unknown_bits_and_letters_ignored() {
    x2(8 | IGNORECASE, "A", "a", 0, 1);
    x2("zqi", "A", "a", 0, 1);
    n("zq", "A", "a");
}

// === Option introspection ===

#[test]
fn options_reflect_translation() {
    let re = Regexp::with_flags("a", "ix").unwrap();
    assert_eq!(
        re.options(),
        RegexpOptions::DOTALL | RegexpOptions::CASELESS | RegexpOptions::EXTENDED
    );
    assert_eq!(re.options().to_host_bits(), IGNORECASE | EXTENDED);
    assert!(re.is_casefold());
    assert!(!Regexp::new("a").unwrap().is_casefold());
    assert_eq!(Regexp::new("a").unwrap().options(), RegexpOptions::empty());
}
