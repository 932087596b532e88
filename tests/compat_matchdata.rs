// compat_matchdata.rs - MatchData behaviour as scripts observe it.
//
// Covers Ruby-style indexing, captures/to_a, pre/post match, inspect output
// and the uninitialized template object.

use mregexp::prelude::*;

fn md(pattern: &str, text: &str) -> MatchData {
    Regexp::new(pattern)
        .unwrap()
        .matches(text)
        .unwrap()
        .unwrap_or_else(|| panic!("expected {:?} to match {:?}", pattern, text))
}

#[test]
fn index_operator() {
    let m = md(r"(foo)(bar)(BAZ)?", "foobarbaz");
    assert_eq!(m.get(0), Some(&b"foobar"[..]));
    assert_eq!(m.get(1), Some(&b"foo"[..]));
    assert_eq!(m.get(2), Some(&b"bar"[..]));
    assert_eq!(m.get(3), None);
    assert_eq!(m.get(4), None);
    assert_eq!(m.get(-2), Some(&b"bar"[..]));
}

#[test]
fn begin_end_offset() {
    let m = md(r"(\d+)-(\d+)", "tel 555-0100");
    assert_eq!(m.begin(0).unwrap(), Some(4));
    assert_eq!(m.end(0).unwrap(), Some(12));
    assert_eq!(m.offset(1).unwrap(), Some((4, 7)));
    assert_eq!(m.offset(2).unwrap(), Some((8, 12)));
}

#[test]
fn captures_and_to_a() {
    let m = md(r"(a)(x)?(c)", "ac");
    assert_eq!(m.captures(), vec![Some(&b"a"[..]), None, Some(&b"c"[..])]);
    assert_eq!(
        m.to_a(),
        vec![Some(&b"ac"[..]), Some(&b"a"[..]), None, Some(&b"c"[..])]
    );
}

#[test]
fn captures_empty_without_groups() {
    let m = md("abc", "abc");
    assert!(m.captures().is_empty());
    assert_eq!(m.to_a().len(), 1);
}

#[test]
fn pre_and_post_match() {
    let m = md("bar", "foobarbaz");
    assert_eq!(m.pre_match(), Some(&b"foo"[..]));
    assert_eq!(m.post_match(), Some(&b"baz"[..]));
}

#[test]
fn pre_and_post_match_with_start_offset() {
    let re = Regexp::new("o").unwrap();
    let m = re.matches_at("foo boo", 3).unwrap().unwrap();
    assert_eq!(m.offset(0).unwrap(), Some((5, 6)));
    assert_eq!(m.pre_match(), Some(&b"foo b"[..]));
    assert_eq!(m.post_match(), Some(&b"o"[..]));
}

#[test]
fn to_s() {
    let m = md(r"\w+", "  word  ");
    assert_eq!(m.to_string(), "word");
}

#[test]
fn inspect() {
    let m = md(r"(\d)(\w)?", "7");
    assert_eq!(format!("{:?}", m), "#<MatchData \"7\" 1:\"7\" 2:nil>");
}

#[test]
fn regexp_and_string_back_references() {
    let re = Regexp::new(r"(\d)").unwrap();
    let m = re.matches("x9").unwrap().unwrap();
    assert_eq!(m.regexp(), Some(&re));
    assert_eq!(m.string(), Some(&b"x9"[..]));
}

#[test]
fn named_lookup_through_match() {
    let m = md(r"(?<key>\w+)=(?<value>\w*)", "a=1");
    assert_eq!(m.name("key"), Some(&b"a"[..]));
    assert_eq!(m.name("value"), Some(&b"1"[..]));
    assert_eq!(m.name("other"), None);
}

#[test]
fn uninitialized_template() {
    let m = MatchData::default();
    assert_eq!(m.length(), -1);
    assert_eq!(m.size(), -1);
    assert!(matches!(m.end(0), Err(RegexpError::Index { .. })));
    assert_eq!(m.pre_match(), None);
    assert!(m.regexp().is_none());
    assert!(m.captures().is_empty());
    assert_eq!(m.get(-1), None);
    assert_eq!(m.get(isize::MIN), None);
}

#[test]
fn matches_are_send_and_sync() {
    fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<MatchData>();

    let m = md(r"(\w+)", "shared");
    std::thread::scope(|s| {
        s.spawn(|| assert_eq!(m.get(1), Some(&b"shared"[..])));
    });
}
