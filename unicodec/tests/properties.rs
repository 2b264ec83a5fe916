use rstest::rstest;
use unicodec::{
    Error, Format, Sizes, Text, Utf16, Utf32, bytes_to_text, decode_utf8, decode_utf16,
    decode_utf32, encode_utf8, encode_utf16, encode_utf32, text_to_bytes,
};

const SAMPLES: &[&str] = &[
    "",
    "$",
    "¢",
    "ह",
    "한",
    "𐍈",
    "😩",
    "Hello my name is fred. 😩😎 ¢¢¢ह",
    "Hello this is just a simple message to check the size of each encoding. 🍞",
    "\u{0}\u{7f}\u{80}\u{7ff}\u{800}\u{d7ff}\u{e000}\u{ffff}\u{10000}\u{10ffff}",
];

/// Every scalar value in steps, plus the bracket edges.
fn scalar_sweep() -> impl Iterator<Item = char> {
    (0..=0x10ffffu32)
        .step_by(0x7f)
        .chain([0x7f, 0x80, 0x7ff, 0x800, 0xd7ff, 0xe000, 0xffff, 0x10000, 0x10ffff])
        .filter_map(char::from_u32)
}

#[rstest]
fn test_round_trip(
    #[values(Format::Utf8, Format::Utf16, Format::Utf32)] format: Format,
    #[values(0, 1, 2, 3, 4, 5, 6, 7, 8, 9)] sample: usize,
) {
    let text = Text::from(SAMPLES[sample]);
    let bytes = text_to_bytes(&text, format).unwrap();
    let decoded = bytes_to_text(&bytes, format).unwrap();
    assert_eq!(decoded, text);
    assert_eq!(String::try_from(decoded).unwrap(), SAMPLES[sample]);
}

#[rstest]
#[case(Format::Utf8)]
#[case(Format::Utf16)]
#[case(Format::Utf32)]
fn test_round_trip_sweep(#[case] format: Format) {
    let text: Text = scalar_sweep().collect();
    let bytes = text_to_bytes(&text, format).unwrap();
    assert_eq!(bytes_to_text(&bytes, format).unwrap(), text);
}

#[test]
fn test_utf8_matches_std_for_sweep() {
    let s: String = scalar_sweep().collect();
    let utf8 = encode_utf8(&Text::from(s.as_str())).unwrap();
    assert_eq!(utf8.as_bytes(), s.as_bytes());
    assert_eq!(decode_utf8(s.as_bytes()).unwrap(), Text::from(s.as_str()));
}

#[test]
fn test_utf8_minimal_length() {
    for ch in scalar_sweep() {
        let expected = match u32::from(ch) {
            0..0x80 => 1,
            0x80..0x800 => 2,
            0x800..0x1_0000 => 3,
            _ => 4,
        };
        let utf8 = encode_utf8(&Text::from(ch)).unwrap();
        assert_eq!(utf8.len(), expected, "U+{:04X}", u32::from(ch));
    }
}

#[rstest]
#[case('\u{ffff}', vec![0xef, 0xbf, 0xbf])]
#[case('\u{10000}', vec![0xf0, 0x90, 0x80, 0x80])]
fn test_plane_boundary(#[case] ch: char, #[case] expected: Vec<u8>) {
    let text = Text::from(ch);
    let bytes = text_to_bytes(&text, Format::Utf8).unwrap();
    assert_eq!(bytes, expected);
    for format in Format::ALL {
        let bytes = text_to_bytes(&text, format).unwrap();
        assert_eq!(bytes_to_text(&bytes, format).unwrap(), text);
    }
}

#[rstest]
#[case(0)]
#[case(5)]
#[case(6)]
#[case(7)]
#[case(8)]
#[case(9)]
fn test_size_identities(#[case] sample: usize) {
    let text = Text::from(SAMPLES[sample]);
    let sizes = Sizes::of(&text).unwrap();

    assert_eq!(sizes.utf16, 2 * text.len());
    assert_eq!(sizes.utf32, 4 * text.scalar_count());
    assert_eq!(encode_utf16(&text).len(), text.len());
    assert_eq!(encode_utf32(&text).unwrap().len(), text.scalar_count());
}

#[test]
fn test_concrete_vectors() {
    assert_eq!(encode_utf8(&Text::from("$")).unwrap().as_bytes(), &[36]);
    assert_eq!(encode_utf8(&Text::from("¢")).unwrap().as_bytes(), &[194, 162]);
    assert_eq!(encode_utf8(&Text::from("ह")).unwrap().as_bytes(), &[224, 164, 185]);
    assert_eq!(
        encode_utf8(&Text::from("😩")).unwrap().as_bytes(),
        &[240, 159, 152, 169]
    );
    assert_eq!(encode_utf16(&Text::from("😩")).units(), &[0xd83d, 0xde29]);
    assert_eq!(encode_utf32(&Text::from("😩")).unwrap().values(), &[0x1f629]);
}

#[test]
fn test_surrogate_reconstruction() {
    let text = decode_utf8(&[240, 144, 141, 136]).unwrap();
    assert_eq!(text.units(), &[0xd800, 0xdf48]);

    let text = decode_utf32(&Utf32::from_values(vec![0x10348])).unwrap();
    assert_eq!(text.units(), &[0xd800, 0xdf48]);
}

#[test]
fn test_utf16_keeps_malformed_units() {
    let units = vec![0xdc00, 0x61, 0xd800];
    let text = Text::from_units(units.clone());
    let utf16 = encode_utf16(&text);
    assert_eq!(utf16, Utf16::from_units(units));
    assert_eq!(decode_utf16(&utf16), text);
}

#[rstest]
#[case(Format::Utf8)]
#[case(Format::Utf32)]
fn test_scalar_formats_reject_lone_surrogate(#[case] format: Format) {
    let text = Text::from_units(vec![0x61, 0x62, 0xd83d]);
    let err = text_to_bytes(&text, format).unwrap_err();
    assert!(
        matches!(err, Error::Utf8(_) | Error::Utf32(_)),
        "unexpected error {err:?}"
    );
    assert!(err.to_string().contains("unit 2"), "{err}");
}
