//! Parsing of the loosely formatted text found in cgroupfs files.
//!
//! Every getter in this crate is `read -> extract -> parse`. Nothing here
//! fails: a key that is absent, or a value that does not parse, reads as `0`.

/// Find the first line of the form `key value` where `value` is a run of
/// ASCII digits, and return that run.
///
/// The key must match the whole first word of the line, so `user` never
/// matches `xuser 9` and `oom_kill` never matches `oom_kill_disable 1`.
pub fn extract<'a>(blob: &'a str, key: &str) -> Option<&'a str> {
    blob.lines().find_map(|line| {
        let mut words = line.split_whitespace();
        match (words.next(), words.next(), words.next()) {
            (Some(k), Some(value), None)
                if k == key && value.bytes().all(|b| b.is_ascii_digit()) =>
            {
                Some(value)
            }
            _ => None,
        }
    })
}

/// `extract` followed by integer conversion; a missing key reads as 0.
pub fn extract_int(blob: &str, key: &str) -> i64 {
    extract(blob, key).map(parse_int).unwrap_or(0)
}

/// Strip surrounding whitespace and newlines from a single-scalar file.
pub fn trim(text: &str) -> &str {
    text.trim()
}

/// Lenient integer parse with `atol` semantics: skip leading whitespace,
/// accept an optional sign, then take the leading digit run. Empty input,
/// no digits or overflow yield 0.
pub fn parse_int(text: &str) -> i64 {
    let text = text.trim_start();
    let sign = match text.as_bytes().first() {
        Some(b'-') | Some(b'+') => 1,
        _ => 0,
    };
    let end = text[sign..]
        .bytes()
        .position(|b| !b.is_ascii_digit())
        .map_or(text.len(), |pos| sign + pos);
    text[..end].parse::<i64>().unwrap_or(0)
}

/// Parse a newline separated PID list, keeping file order and duplicates.
///
/// Only newline-terminated lines are taken: a trailing line without `\n` is
/// dropped. The kernel always terminates its lines, so this only matters for
/// hand-written files. Blank lines are skipped, and a value outside the
/// `pid_t` range reads as 0.
pub fn parse_pid_list(text: &str) -> Vec<i32> {
    let mut pids = Vec::new();
    let mut rest = text;
    while let Some(pos) = rest.find('\n') {
        let line = &rest[..pos];
        if !line.trim().is_empty() {
            pids.push(i32::try_from(parse_int(line)).unwrap_or(0));
        }
        rest = &rest[pos + 1..];
    }
    pids
}

/// Values extracted for a keyset fixed by the caller. Keys absent from the
/// source text are present with value 0.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StatBlock {
    fields: Vec<(String, i64)>,
}

impl StatBlock {
    pub fn extract<S: AsRef<str>>(blob: &str, keys: &[S]) -> Self {
        let fields = keys
            .iter()
            .map(|key| {
                let key = key.as_ref();
                (key.to_string(), extract_int(blob, key))
            })
            .collect();
        Self { fields }
    }

    /// Value of `key`, or 0 if it was not part of the keyset
    pub fn get(&self, key: &str) -> i64 {
        self.fields
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| *v)
            .unwrap_or(0)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, i64)> {
        self.fields.iter().map(|(k, v)| (k.as_str(), *v))
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}
