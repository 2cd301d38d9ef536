use std::collections::HashMap;

/// Rules for replace-or-remove: `Some(b)` replaces the key with `b`, `None` removes it.
pub type CharModMap = HashMap<u8, Option<u8>>;

/// Rules for pure replacement: every key is replaced with its value.
pub type ReplacementMap = HashMap<u8, u8>;

/// Byte used by sentinel-encoded tables to mark "drop this byte".
pub const REMOVAL_SENTINEL: u8 = 0x00;

/// One entry of an [`EditTable`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Slot {
    Keep(u8),
    Remove,
}

#[inline]
fn identity_bytes() -> [u8; 256] {
    std::array::from_fn(|i| i as u8)
}

/// 256-entry replace-or-remove table, indexed by input byte.
///
/// Each slot is tagged, so replacing a byte with 0x00 is distinct from
/// removing it.
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct EditTable {
    slots: [Slot; 256],
    identity: bool,
}

impl EditTable {
    /// The table that keeps every byte unchanged.
    pub fn identity() -> Self {
        Self {
            slots: std::array::from_fn(|i| Slot::Keep(i as u8)),
            identity: true,
        }
    }

    /// Build a table from a rule map. An empty map yields the identity table.
    pub fn new(rules: &CharModMap) -> Self {
        let mut table = Self::identity();
        if rules.is_empty() {
            return table;
        }
        for (&from, action) in rules {
            table.slots[from as usize] = match *action {
                Some(to) => Slot::Keep(to),
                None => Slot::Remove,
            };
        }
        table.identity = false;
        table
    }

    /// True iff the table was built from an empty rule map.
    #[inline]
    pub fn is_identity(&self) -> bool {
        self.identity
    }

    #[inline(always)]
    pub fn get(&self, byte: u8) -> Slot {
        self.slots[byte as usize]
    }

    #[inline]
    pub fn slots(&self) -> &[Slot; 256] {
        &self.slots
    }

    /// Bytes that map to [`Slot::Remove`], ascending.
    pub fn removed(&self) -> Vec<u8> {
        (0u8..=255)
            .filter(|&b| self.slots[b as usize] == Slot::Remove)
            .collect()
    }

    /// True if no byte maps to anything other than itself or `Remove`.
    pub fn is_removal_only(&self) -> bool {
        self.slots.iter().enumerate().all(|(i, slot)| match *slot {
            Slot::Keep(b) => b == i as u8,
            Slot::Remove => true,
        })
    }

    /// Encode as the legacy sentinel layout, where [`REMOVAL_SENTINEL`] means remove.
    ///
    /// Returns `None` if some byte other than 0x00 is replaced with the sentinel,
    /// since that layout would turn the replacement into a removal. A NUL byte
    /// kept as NUL encodes as the sentinel, so the layout drops NUL input unless
    /// a rule replaces it with something else.
    pub fn to_sentinel_bytes(&self) -> Option<[u8; 256]> {
        let mut out = [REMOVAL_SENTINEL; 256];
        for (i, slot) in self.slots.iter().enumerate() {
            out[i] = match *slot {
                Slot::Keep(REMOVAL_SENTINEL) if i != REMOVAL_SENTINEL as usize => return None,
                Slot::Keep(b) => b,
                Slot::Remove => REMOVAL_SENTINEL,
            };
        }
        Some(out)
    }
}

impl Default for EditTable {
    fn default() -> Self {
        Self::identity()
    }
}

impl std::fmt::Debug for EditTable {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut map = f.debug_map();
        for (i, slot) in self.slots.iter().enumerate() {
            if *slot != Slot::Keep(i as u8) {
                map.entry(&std::ascii::escape_default(i as u8).to_string(), slot);
            }
        }
        map.finish()
    }
}

/// Build a replace-or-remove table and its identity flag.
#[inline]
pub fn build_edit_table(rules: &CharModMap) -> (EditTable, bool) {
    let table = EditTable::new(rules);
    let identity = table.is_identity();
    (table, identity)
}

/// 256-entry pure replacement table. Every entry is an output byte.
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct ReplaceTable {
    bytes: [u8; 256],
    identity: bool,
}

impl ReplaceTable {
    pub fn identity() -> Self {
        Self {
            bytes: identity_bytes(),
            identity: true,
        }
    }

    /// Build a table from a replacement map, starting from identity.
    pub fn new(replacements: &ReplacementMap) -> Self {
        let mut bytes = identity_bytes();
        for (&from, &to) in replacements {
            bytes[from as usize] = to;
        }
        Self {
            bytes,
            identity: replacements.is_empty(),
        }
    }

    /// True iff the table was built from an empty map.
    #[inline]
    pub fn is_identity(&self) -> bool {
        self.identity
    }

    #[inline(always)]
    pub fn get(&self, byte: u8) -> u8 {
        self.bytes[byte as usize]
    }

    #[inline]
    pub fn as_bytes(&self) -> &[u8; 256] {
        &self.bytes
    }
}

impl Default for ReplaceTable {
    fn default() -> Self {
        Self::identity()
    }
}

impl std::fmt::Debug for ReplaceTable {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut map = f.debug_map();
        for (i, &b) in self.bytes.iter().enumerate() {
            if b != i as u8 {
                map.entry(
                    &std::ascii::escape_default(i as u8).to_string(),
                    &std::ascii::escape_default(b).to_string(),
                );
            }
        }
        map.finish()
    }
}

/// Build a pure replacement lookup array.
#[inline]
pub fn build_replace_table(replacements: &ReplacementMap) -> [u8; 256] {
    *ReplaceTable::new(replacements).as_bytes()
}
