//! The dictionary of recognized HTML boolean attributes.
//!
//! The order of `BOOLEAN_ATTRIBUTE_NAMES` is part of the public contract:
//! hints report an occurrence as the index of the name in this table.

use crate::char_class::to_ascii_lower;

/// Recognized boolean attribute names, lowercase, in index order.
pub const BOOLEAN_ATTRIBUTE_NAMES: [&[u8]; 31] = [
    b"allowfullscreen",
    b"async",
    b"autofocus",
    b"checked",
    b"compact",
    b"controls",
    b"declare",
    b"default",
    b"defer",
    b"disabled",
    b"formnovalidate",
    b"hidden",
    b"inert",
    b"ismap",
    b"itemscope",
    b"multiple",
    b"muted",
    b"nohref",
    b"noresize",
    b"noshade",
    b"novalidate",
    b"nowrap",
    b"open",
    b"readonly",
    b"required",
    b"reversed",
    b"seamless",
    b"selected",
    b"sortable",
    b"truespeed",
    b"typemustmatch",
];

/// Bit `n` is set when some recognized name has byte length `n`.
/// Name lengths are all below 32, so a `u32` covers the table.
const LENGTH_BITMAP: u32 = {
    let mut bits = 0u32;
    let mut i = 0;
    while i < BOOLEAN_ATTRIBUTE_NAMES.len() {
        bits |= 1 << BOOLEAN_ATTRIBUTE_NAMES[i].len();
        i += 1;
    }
    bits
};

/// Finds a name in the boolean attribute table, ASCII-case-insensitively.
///
/// Returns the table index (0..=30), or `None` when the bytes are not a
/// recognized boolean attribute name. Any non-ASCII byte disqualifies the
/// name. The length bitmap and the first-letter dispatch keep the number
/// of candidate comparisons small (at most five, for names starting
/// with `n`).
pub fn boolean_attribute_index(name: &[u8]) -> Option<u8> {
    let length = name.len();
    if length == 0 || length >= 32 || LENGTH_BITMAP & (1 << length) == 0 {
        return None;
    }

    let first = name[0];
    if first >= 0x80 {
        return None;
    }

    let candidates: &[u8] = match to_ascii_lower(first) {
        b'a' => &[0, 1, 2],
        b'c' => &[3, 4, 5],
        b'd' => &[6, 7, 8, 9],
        b'f' => &[10],
        b'h' => &[11],
        b'i' => &[12, 13, 14],
        b'm' => &[15, 16],
        b'n' => &[17, 18, 19, 20, 21],
        b'o' => &[22],
        b'r' => &[23, 24, 25],
        b's' => &[26, 27, 28],
        b't' => &[29, 30],
        _ => return None,
    };

    'candidates: for &entry in candidates {
        let target = BOOLEAN_ATTRIBUTE_NAMES[entry as usize];
        if target.len() != length {
            continue;
        }
        for (k, &b) in name.iter().enumerate() {
            if b >= 0x80 {
                return None;
            }
            if to_ascii_lower(b) != target[k] {
                continue 'candidates;
            }
        }
        return Some(entry);
    }

    None
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn every_name_resolves_to_its_index() {
        for (index, name) in BOOLEAN_ATTRIBUTE_NAMES.iter().enumerate() {
            assert_eq!(boolean_attribute_index(name), Some(index as u8));
        }
    }

    #[test]
    fn lookup_is_case_insensitive() {
        assert_eq!(boolean_attribute_index(b"CHECKED"), Some(3));
        assert_eq!(boolean_attribute_index(b"Disabled"), Some(9));
        assert_eq!(boolean_attribute_index(b"tYpEmUsTmAtCh"), Some(30));
    }

    #[test]
    fn unknown_names_miss() {
        assert_eq!(boolean_attribute_index(b"class"), None);
        assert_eq!(boolean_attribute_index(b"href"), None);
        // Same first letter and length as a table entry.
        assert_eq!(boolean_attribute_index(b"checkes"), None);
        assert_eq!(boolean_attribute_index(b"nowrapp"), None);
    }

    #[test]
    fn degenerate_lengths_miss() {
        assert_eq!(boolean_attribute_index(b""), None);
        assert_eq!(boolean_attribute_index(&[b'a'; 32]), None);
        assert_eq!(boolean_attribute_index(&[b'a'; 100]), None);
        // Length 3 appears nowhere in the table.
        assert_eq!(boolean_attribute_index(b"chk"), None);
    }

    #[test]
    fn non_ascii_bytes_disqualify() {
        assert_eq!(boolean_attribute_index(b"check\xC3\xA9"), None);
        assert_eq!(boolean_attribute_index(b"\xFFsync"), None);
    }
}
