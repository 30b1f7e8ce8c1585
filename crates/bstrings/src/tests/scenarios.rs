use alloc::{format, string::String, vec::Vec};

use rstest::rstest;

use crate::{
    EncoderOptions, Error, InputSummary, Syntax, badchar, encode, encode_to_string,
    hex::to_hex_digits,
};

#[test]
fn hex_text_with_trailing_newline() {
    let input = b"4142\n";
    let out = encode_to_string(input, &EncoderOptions::default()).unwrap();
    assert_eq!(out, "\\x41\\x42\n");
    assert_eq!(InputSummary::scan(input).invalid, 0);
}

#[test]
fn raw_bytes_round_trip_through_hex() {
    let hex = to_hex_digits(*b"AB\n").unwrap();
    let out = encode_to_string(hex.as_slice(), &EncoderOptions::default()).unwrap();
    assert_eq!(out, "\\x41\\x42\\x0a\n");
}

#[test]
fn badchar_as_c_array_wrapped_at_sixteen() {
    let seq = badchar::generate().unwrap();
    let options = EncoderOptions {
        width: 16,
        syntax: Syntax::C,
        var_name: Some("buf".into()),
        declare: true,
        ..Default::default()
    };
    let out = encode_to_string(seq.as_slice(), &options).unwrap();

    assert!(out.starts_with("unsigned char buf[] =\n    \"\\x01\\x02"), "{out}");
    assert!(out.ends_with("\\xfd\\xfe\\xff\";\n"), "{out}");

    let lines: Vec<&str> = out.lines().collect();
    // Declaration, 15 full lines, one line of 15 bytes.
    assert_eq!(lines.len(), 17);
    for line in &lines[1..16] {
        assert!(line.starts_with("    \"\\x") && line.ends_with('"'), "{line}");
        assert_eq!(line.matches("\\x").count(), 16);
    }
    assert_eq!(lines[16].matches("\\x").count(), 15);

    let expected_second: String = (0x11..=0x20u8).map(|b| format!("\\x{b:02x}")).collect();
    assert_eq!(lines[2], format!("    \"{expected_second}\""));
}

#[rstest]
#[case(Syntax::Raw, "  \\x41\\x42\n  \\x43\n")]
#[case(Syntax::C, "  unsigned char buffer[] =\n      \"\\x41\\x42\"\n      \"\\x43\";\n")]
#[case(Syntax::Python, "  buffer = \"\"\n  buffer += \"\\x41\\x42\"\n  buffer += \"\\x43\"\n")]
#[case(Syntax::PowerShell, "  [Byte[]] $buffer = 0x41,0x42,\n0x43\n")]
fn indentation_per_syntax(#[case] syntax: Syntax, #[case] expected: &str) {
    let options = EncoderOptions {
        width: 2,
        indent: 2,
        syntax,
        declare: true,
        ..Default::default()
    };
    assert_eq!(encode_to_string(b"414243", &options).unwrap(), expected);
}

#[rstest]
#[case(Syntax::Raw, "\n")]
#[case(Syntax::C, "unsigned char buffer[] =\n    \"\";\n")]
#[case(Syntax::Python, "buffer = \"\"\nbuffer += \"\"\n")]
#[case(Syntax::PowerShell, "[Byte[]] $buffer = \n")]
fn empty_input_per_syntax(#[case] syntax: Syntax, #[case] expected: &str) {
    let options = EncoderOptions {
        syntax,
        declare: true,
        ..Default::default()
    };
    assert_eq!(encode_to_string(b"", &options).unwrap(), expected);
}

#[test]
fn unknown_language_fails_before_any_output() {
    let err = "ruby".parse::<Syntax>().unwrap_err();
    assert_eq!(err, Error::UnknownLanguage("ruby".into()));
}

#[test]
fn rejected_odd_input_yields_no_iterator() {
    let options = EncoderOptions::default();
    assert!(matches!(
        encode(b"deadbee\n", &options),
        Err(Error::UnpairedDigit { digits: 7 })
    ));
}

#[test]
fn summary_is_available_before_iteration() {
    let options = EncoderOptions::default();
    let it = encode(b"41 42 43", &options).unwrap();
    assert_eq!(
        it.summary(),
        InputSummary {
            digits: 6,
            invalid: 2,
        }
    );
}
