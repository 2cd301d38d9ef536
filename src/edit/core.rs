use memchr::{memchr, memchr2, memchr3};

use crate::charset::{self, SetError};
use crate::table::{CharModMap, EditTable, Slot};

/// Apply a replace-or-remove table to `buf` in place.
///
/// Single pass with a read cursor and a write cursor; the write cursor never
/// passes the read cursor, so surviving bytes are compacted leftward and the
/// buffer is truncated to the bytes written. Never grows `buf`.
/// Empty buffers and identity tables return without touching the buffer.
pub fn replace_and_remove(buf: &mut Vec<u8>, table: &EditTable) {
    if buf.is_empty() || table.is_identity() {
        return;
    }

    let len = buf.len();
    let mut wp = 0;
    for rp in 0..len {
        if let Slot::Keep(b) = table.get(buf[rp]) {
            buf[wp] = b;
            wp += 1;
        }
    }
    buf.truncate(wp);
}

/// One-shot replace-or-remove. Builds the table from `rules` and applies it.
///
/// For repeated use of the same rules, build a [`CharEditor`] once instead.
pub fn ascii_char_replace_remove_once(buf: &mut Vec<u8>, rules: &CharModMap) {
    if buf.is_empty() || rules.is_empty() {
        return;
    }
    replace_and_remove(buf, &EditTable::new(rules));
}

/// How a table is applied, picked once per table.
#[derive(Debug, Clone, Copy)]
enum Strategy {
    Identity,
    /// No removals: plain byte-for-byte map, length unchanged.
    Translate([u8; 256]),
    Delete1(u8),
    Delete2(u8, u8),
    Delete3(u8, u8, u8),
    /// Mixed replace and remove.
    Compact,
}

impl Strategy {
    fn for_table(table: &EditTable) -> Self {
        if table.is_identity() {
            return Strategy::Identity;
        }

        let removed = table.removed();
        if removed.is_empty() {
            let mut map = [0u8; 256];
            for (dst, slot) in map.iter_mut().zip(table.slots()) {
                if let Slot::Keep(b) = *slot {
                    *dst = b;
                }
            }
            return Strategy::Translate(map);
        }

        if !table.is_removal_only() {
            return Strategy::Compact;
        }
        match removed[..] {
            [a] => Strategy::Delete1(a),
            [a, b] => Strategy::Delete2(a, b),
            [a, b, c] => Strategy::Delete3(a, b, c),
            _ => Strategy::Compact,
        }
    }
}

/// Reusable replace-or-remove transformer.
///
/// The table is built once at construction and never mutated afterwards, so a
/// `CharEditor` can be shared across threads and applied to any number of
/// independent buffers.
#[derive(Debug, Clone)]
pub struct CharEditor {
    table: EditTable,
    strategy: Strategy,
}

impl CharEditor {
    pub fn new(rules: &CharModMap) -> Self {
        Self::from_table(EditTable::new(rules))
    }

    pub fn from_table(table: EditTable) -> Self {
        Self {
            strategy: Strategy::for_table(&table),
            table,
        }
    }

    /// Editor translating SET1 to SET2 in `tr` syntax, e.g. `("a-z", "A-Z")`.
    pub fn from_sets(set1: &str, set2: &str) -> Result<Self, SetError> {
        let map = charset::translation_map(set1, set2)?;
        let rules: CharModMap = map.into_iter().map(|(k, v)| (k, Some(v))).collect();
        Ok(Self::new(&rules))
    }

    /// Editor that removes every byte of SET, e.g. `"[:digit:]-"`.
    pub fn deleting(set: &str) -> Result<Self, SetError> {
        Ok(Self::new(&charset::removal_map(set)?))
    }

    /// Editor that keeps only the bytes of SET, e.g. `"[:alnum:]"`.
    pub fn deleting_complement(set: &str) -> Result<Self, SetError> {
        Ok(Self::new(&charset::complement_removal_map(set)?))
    }

    #[inline]
    pub fn table(&self) -> &EditTable {
        &self.table
    }

    #[inline]
    pub fn is_identity(&self) -> bool {
        self.table.is_identity()
    }

    /// Transform `buf` in place. The result never exceeds the input length.
    pub fn apply(&self, buf: &mut Vec<u8>) {
        if buf.is_empty() {
            return;
        }
        match self.strategy {
            Strategy::Identity => {}
            Strategy::Translate(ref map) => {
                for b in buf.iter_mut() {
                    *b = map[*b as usize];
                }
            }
            Strategy::Delete1(a) => delete_spans(buf, |s| memchr(a, s)),
            Strategy::Delete2(a, b) => delete_spans(buf, |s| memchr2(a, b, s)),
            Strategy::Delete3(a, b, c) => delete_spans(buf, |s| memchr3(a, b, c, s)),
            Strategy::Compact => replace_and_remove(buf, &self.table),
        }
    }

    /// Consume `buf`, transform it, and hand it back.
    pub fn apply_owned(&self, mut buf: Vec<u8>) -> Vec<u8> {
        self.apply(&mut buf);
        buf
    }
}

/// Remove every byte located by `find`, moving the spans between hits left
/// with `copy_within`. `find` returns the offset of the next hit in its slice.
#[inline]
fn delete_spans(buf: &mut Vec<u8>, find: impl Fn(&[u8]) -> Option<usize>) {
    let len = buf.len();
    let mut wp = 0;
    let mut rp = 0;
    while rp < len {
        match find(&buf[rp..]) {
            Some(off) => {
                if wp != rp {
                    buf.copy_within(rp..rp + off, wp);
                }
                wp += off;
                rp += off + 1;
            }
            None => {
                if wp != rp {
                    buf.copy_within(rp..len, wp);
                }
                wp += len - rp;
                break;
            }
        }
    }
    buf.truncate(wp);
}
