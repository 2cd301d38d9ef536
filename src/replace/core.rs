use crate::charset::{self, SetError};
use crate::table::{ReplaceTable, ReplacementMap};

/// Rewrite every byte of `data` through `table`. Length never changes.
///
/// The table is 256 bytes and stays in L1; LLVM turns this into a tight
/// scalar loop without bounds checks since a `u8` index can't exceed 255.
#[inline]
pub fn replace_chars(data: &mut [u8], table: &ReplaceTable) {
    if data.is_empty() {
        return;
    }
    let map = table.as_bytes();
    for b in data.iter_mut() {
        *b = map[*b as usize];
    }
}

/// One-shot pure replacement. An empty map skips all work.
///
/// Building the table costs a 256-byte fill per call; use [`CharReplacer`]
/// when the same map is applied repeatedly. This never removes bytes; use
/// [`crate::edit::ascii_char_replace_remove_once`] for that.
pub fn ascii_replace_once(data: &mut [u8], replacements: &ReplacementMap) {
    if replacements.is_empty() || data.is_empty() {
        return;
    }
    replace_chars(data, &ReplaceTable::new(replacements));
}

/// Reusable pure-replacement transformer holding a prebuilt table.
#[derive(Debug, Clone)]
pub struct CharReplacer {
    table: ReplaceTable,
}

impl CharReplacer {
    pub fn new(replacements: &ReplacementMap) -> Self {
        Self {
            table: ReplaceTable::new(replacements),
        }
    }

    /// Replacer mapping SET1 onto SET2 positionally, e.g. `("[:lower:]", "[:upper:]")`.
    pub fn from_sets(set1: &str, set2: &str) -> Result<Self, SetError> {
        Ok(Self::new(&charset::translation_map(set1, set2)?))
    }

    #[inline]
    pub fn table(&self) -> &ReplaceTable {
        &self.table
    }

    #[inline]
    pub fn apply(&self, data: &mut [u8]) {
        if self.table.is_identity() {
            return;
        }
        replace_chars(data, &self.table);
    }

    pub fn apply_owned(&self, mut data: Vec<u8>) -> Vec<u8> {
        self.apply(&mut data);
        data
    }
}
