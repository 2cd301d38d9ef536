use super::{
    complement, complement_removal_map, expand_set2, parse_set, removal_map, translation_map,
    SetError, MAX_SET_LEN,
};

// === parse_set tests ===

#[test]
fn test_parse_literal() {
    assert_eq!(parse_set("abc").unwrap(), vec![b'a', b'b', b'c']);
}

#[test]
fn test_parse_empty() {
    assert!(parse_set("").unwrap().is_empty());
}

#[test]
fn test_parse_range() {
    assert_eq!(parse_set("a-e").unwrap(), b"abcde".to_vec());
    assert_eq!(parse_set("0-3").unwrap(), b"0123".to_vec());
}

#[test]
fn test_parse_range_az() {
    let result = parse_set("a-z").unwrap();
    assert_eq!(result.len(), 26);
    assert_eq!(result[0], b'a');
    assert_eq!(result[25], b'z');
}

#[test]
fn test_parse_dash_at_edges_is_literal() {
    assert_eq!(parse_set("-a").unwrap(), b"-a".to_vec());
    assert_eq!(parse_set("a-").unwrap(), b"a-".to_vec());
    assert_eq!(parse_set("-").unwrap(), b"-".to_vec());
}

#[test]
fn test_parse_reversed_range() {
    assert_eq!(
        parse_set("z-a"),
        Err(SetError::ReversedRange {
            start: 'z',
            end: 'a'
        })
    );
}

#[test]
fn test_parse_escape_sequences() {
    assert_eq!(parse_set("\\n").unwrap(), vec![b'\n']);
    assert_eq!(parse_set("\\t").unwrap(), vec![b'\t']);
    assert_eq!(parse_set("\\r").unwrap(), vec![b'\r']);
    assert_eq!(parse_set("\\\\").unwrap(), vec![b'\\']);
    assert_eq!(parse_set("\\a").unwrap(), vec![0x07]);
    assert_eq!(parse_set("\\b").unwrap(), vec![0x08]);
    assert_eq!(parse_set("\\f").unwrap(), vec![0x0C]);
    assert_eq!(parse_set("\\v").unwrap(), vec![0x0B]);
}

#[test]
fn test_parse_unknown_escape_and_trailing_backslash() {
    assert_eq!(parse_set("\\q").unwrap(), vec![b'q']);
    assert_eq!(parse_set("a\\").unwrap(), vec![b'a', b'\\']);
}

#[test]
fn test_parse_octal() {
    assert_eq!(parse_set("\\101").unwrap(), vec![b'A']);
    assert_eq!(parse_set("\\060").unwrap(), vec![b'0']);
    assert_eq!(parse_set("\\000").unwrap(), vec![0u8]);
    assert_eq!(parse_set("\\7").unwrap(), vec![7u8]);
    // At most three digits are read.
    assert_eq!(parse_set("\\1011").unwrap(), vec![b'A', b'1']);
}

#[test]
fn test_parse_octal_out_of_range() {
    assert_eq!(
        parse_set("\\400"),
        Err(SetError::OctalOutOfRange("400".to_string()))
    );
}

#[test]
fn test_parse_escaped_range() {
    assert_eq!(parse_set("\\000-\\003").unwrap(), vec![0, 1, 2, 3]);
}

#[test]
fn test_parse_char_class_digit() {
    assert_eq!(parse_set("[:digit:]").unwrap(), b"0123456789".to_vec());
}

#[test]
fn test_parse_char_class_sizes() {
    assert_eq!(parse_set("[:alpha:]").unwrap().len(), 52);
    assert_eq!(parse_set("[:alnum:]").unwrap().len(), 62);
    assert_eq!(parse_set("[:xdigit:]").unwrap().len(), 22);
    assert_eq!(parse_set("[:blank:]").unwrap().len(), 2);
    assert_eq!(parse_set("[:cntrl:]").unwrap().len(), 33);
    assert_eq!(parse_set("[:print:]").unwrap().len(), 95);
    assert_eq!(parse_set("[:graph:]").unwrap().len(), 94);
    assert_eq!(parse_set("[:punct:]").unwrap().len(), 32);
}

#[test]
fn test_parse_char_class_space() {
    let result = parse_set("[:space:]").unwrap();
    assert_eq!(result.len(), 6);
    for b in [b'\t', b'\n', b' ', b'\r', 0x0B, 0x0C] {
        assert!(result.contains(&b));
    }
}

#[test]
fn test_parse_unknown_class() {
    assert_eq!(
        parse_set("[:vowel:]"),
        Err(SetError::UnknownClass("vowel".to_string()))
    );
}

#[test]
fn test_parse_unterminated_class_is_literal() {
    assert_eq!(parse_set("[:abc").unwrap(), b"[:abc".to_vec());
}

#[test]
fn test_parse_class_mixed_with_literals() {
    assert_eq!(parse_set("_[:digit:]-").unwrap(), b"_0123456789-".to_vec());
}

#[test]
fn test_parse_equiv_class() {
    assert_eq!(parse_set("[=a=]").unwrap(), vec![b'a']);
}

#[test]
fn test_parse_repeat() {
    assert_eq!(parse_set("[x*3]").unwrap(), b"xxx".to_vec());
    assert_eq!(parse_set("[x*010]").unwrap(), vec![b'x'; 8]);
    assert_eq!(parse_set("[\\n*2]").unwrap(), b"\n\n".to_vec());
}

#[test]
fn test_parse_repeat_count_overflows_usize() {
    assert_eq!(
        parse_set("x[a*18446744073709551615]"),
        Err(SetError::RepeatTooLarge("[a*18446744073709551615]".to_string()))
    );
    assert!(matches!(
        parse_set("[a*999999999999999999999999]"),
        Err(SetError::RepeatTooLarge(_))
    ));
}

#[test]
fn test_parse_repeat_capped() {
    let at_cap = format!("[a*{}]", MAX_SET_LEN);
    assert_eq!(parse_set(&at_cap).unwrap().len(), MAX_SET_LEN);

    // The cap counts bytes already in the set.
    let over = format!("b[a*{}]", MAX_SET_LEN);
    assert!(matches!(parse_set(&over), Err(SetError::RepeatTooLarge(_))));
}

#[test]
fn test_parse_repeat_bad_digits_is_literal() {
    // 8 isn't an octal digit, so this isn't a repeat.
    assert_eq!(parse_set("[a*08]").unwrap(), b"[a*08]".to_vec());
}

#[test]
fn test_expand_set2_stretch_capped() {
    assert_eq!(expand_set2("x", usize::MAX).unwrap().len(), MAX_SET_LEN);
    assert_eq!(expand_set2("[x*]", usize::MAX).unwrap().len(), MAX_SET_LEN);
}

#[test]
fn test_parse_fill_rejected_in_set1() {
    assert_eq!(parse_set("[x*]"), Err(SetError::FillInSet1));
}

// === expand_set2 tests ===

#[test]
fn test_expand_set2_pads_with_last() {
    assert_eq!(expand_set2("xy", 4).unwrap(), b"xyyy".to_vec());
}

#[test]
fn test_expand_set2_never_truncates() {
    assert_eq!(expand_set2("wxyz", 2).unwrap(), b"wxyz".to_vec());
}

#[test]
fn test_expand_set2_fill() {
    assert_eq!(expand_set2("a[-*]z", 5).unwrap(), b"a---z".to_vec());
    assert_eq!(expand_set2("[.*]", 3).unwrap(), b"...".to_vec());
}

#[test]
fn test_expand_set2_multiple_fill() {
    assert_eq!(expand_set2("[a*][b*]", 4), Err(SetError::MultipleFill));
}

// === maps ===

#[test]
fn test_translation_map() {
    let map = translation_map("abc", "xy").unwrap();
    assert_eq!(map.len(), 3);
    assert_eq!(map[&b'a'], b'x');
    assert_eq!(map[&b'b'], b'y');
    assert_eq!(map[&b'c'], b'y');
}

#[test]
fn test_translation_map_last_pairing_wins() {
    let map = translation_map("aa", "xy").unwrap();
    assert_eq!(map[&b'a'], b'y');
}

#[test]
fn test_translation_map_empty_set2() {
    assert_eq!(translation_map("abc", ""), Err(SetError::EmptySet2));
    assert!(translation_map("", "").unwrap().is_empty());
}

#[test]
fn test_removal_map() {
    let map = removal_map("a-c").unwrap();
    assert_eq!(map.len(), 3);
    assert!(map.values().all(|v| v.is_none()));
}

#[test]
fn test_complement() {
    let comp = complement(b"a");
    assert_eq!(comp.len(), 255);
    assert!(!comp.contains(&b'a'));
    assert_eq!(complement(&[]).len(), 256);
}

#[test]
fn test_complement_removal_map() {
    let map = complement_removal_map("[:alnum:]").unwrap();
    assert_eq!(map.len(), 256 - 62);
    assert!(!map.contains_key(&b'q'));
    assert_eq!(map[&b'-'], None);
    assert_eq!(map[&0], None);
}

#[test]
fn test_error_messages() {
    assert_eq!(
        SetError::ReversedRange {
            start: 'z',
            end: 'a'
        }
        .to_string(),
        "range-endpoints of 'z-a' are in reverse collating sequence order"
    );
    assert_eq!(
        SetError::UnknownClass("foo".into()).to_string(),
        "invalid character class 'foo'"
    );
}
