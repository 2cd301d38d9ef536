/// Membership table of trimmable bytes, indexed by byte value.
///
/// Members must be ASCII, which keeps [`trim_all_string`] UTF-8 safe.
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct TrimSet {
    mask: [bool; 256],
}

impl TrimSet {
    /// Space, `\t`, `\n`, `\r`, `\f`, `\v` and the backtick.
    pub const DEFAULT: TrimSet = TrimSet::new(b" \t\n\r\x0C\x0B`");

    /// The six ASCII whitespace bytes, without the backtick.
    pub const ASCII_WHITESPACE: TrimSet = TrimSet::new(b" \t\n\r\x0C\x0B");

    /// Construct a set. Panics (at compile time in const context) on non-ASCII bytes.
    pub const fn new(bytes: &[u8]) -> TrimSet {
        let mut mask = [false; 256];
        let mut i = 0;
        while i < bytes.len() {
            let b = bytes[i];
            assert!(b < 0x80, "non-ASCII byte in trim set");
            mask[b as usize] = true;
            i += 1;
        }
        TrimSet { mask }
    }

    #[inline(always)]
    pub const fn contains(&self, b: u8) -> bool {
        self.mask[b as usize]
    }
}

impl Default for TrimSet {
    fn default() -> Self {
        TrimSet::DEFAULT
    }
}

impl std::fmt::Debug for TrimSet {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("TrimSet(b\"")?;
        for b in (0u8..0x80).filter(|&b| self.contains(b)) {
            write!(f, "{}", std::ascii::escape_default(b))?;
        }
        f.write_str("\")")
    }
}

/// Trim leading and trailing trimmable bytes and collapse every interior run
/// of them into a single space, in place. Uses [`TrimSet::DEFAULT`].
///
/// `"  \t hello \n world  "` becomes `"hello world"`. A buffer made only of
/// trimmable bytes becomes empty.
#[inline]
pub fn trim_all(buf: &mut Vec<u8>) {
    trim_all_with(buf, &TrimSet::DEFAULT);
}

/// [`trim_all`] with a caller-chosen set.
pub fn trim_all_with(buf: &mut Vec<u8>, set: &TrimSet) {
    if buf.is_empty() {
        return;
    }

    let len = buf.len();
    let mut first = 0;
    while first < len && set.contains(buf[first]) {
        first += 1;
    }
    if first == len {
        buf.clear();
        return;
    }

    // buf[first] is not trimmable, so this stops at first + 1 at the latest.
    let mut last = len;
    while set.contains(buf[last - 1]) {
        last -= 1;
    }

    // wp <= rp - first throughout, so writes never overtake unread bytes.
    let mut wp = 0;
    let mut previous_was_trimmable = false;
    for rp in first..last {
        let b = buf[rp];
        if set.contains(b) {
            if !previous_was_trimmable {
                buf[wp] = b' ';
                wp += 1;
                previous_was_trimmable = true;
            }
        } else {
            buf[wp] = b;
            wp += 1;
            previous_was_trimmable = false;
        }
    }
    buf.truncate(wp);
}

/// [`trim_all`] on a `String`.
#[inline]
pub fn trim_all_string(s: &mut String) {
    trim_all_string_with(s, &TrimSet::DEFAULT);
}

/// [`trim_all_with`] on a `String`.
pub fn trim_all_string_with(s: &mut String, set: &TrimSet) {
    // SAFETY: TrimSet members are ASCII and the only byte written in their
    // place is b' '. ASCII bytes never occur inside a multi-byte UTF-8
    // sequence, so whole characters are kept or dropped and the result is
    // valid UTF-8.
    let bytes = unsafe { s.as_mut_vec() };
    trim_all_with(bytes, set);
}
