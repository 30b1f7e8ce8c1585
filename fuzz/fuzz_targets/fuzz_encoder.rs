#![no_main]

use arbitrary::Arbitrary;
use bstrings::{ByteBuffer, EncoderOptions, Error, InputSummary, Syntax, UnpairedDigitMode, encode};
use libfuzzer_sys::fuzz_target;

#[derive(Debug, Arbitrary)]
struct Input {
    width: u8,
    indent: u8,
    syntax: u8,
    declare: bool,
    verbose: bool,
    interactive: bool,
    emit_unpaired: bool,
    var_name: Option<String>,
    data: Vec<u8>,
}

fuzz_target!(|input: Input| {
    let syntax = match input.syntax % 4 {
        0 => Syntax::Raw,
        1 => Syntax::C,
        2 => Syntax::Python,
        _ => Syntax::PowerShell,
    };
    let options = EncoderOptions {
        width: usize::from(input.width),
        syntax,
        indent: usize::from(input.indent % 32),
        var_name: input.var_name,
        declare: input.declare,
        verbose: input.verbose,
        interactive: input.interactive,
        unpaired: if input.emit_unpaired {
            UnpairedDigitMode::Emit
        } else {
            UnpairedDigitMode::Reject
        },
    };

    // Route the bytes through the growth policy the CLI uses.
    let mut buf = ByteBuffer::new();
    buf.extend_from_slice(&input.data).expect("small inputs always fit");
    assert_eq!(buf.as_slice(), &input.data[..]);
    assert!(buf.capacity() >= buf.len());

    let summary = InputSummary::scan(buf.as_slice());
    match encode(buf.as_slice(), &options) {
        Ok(it) => {
            let out: String = it.collect();
            assert!(out.ends_with('\n'));
            let prefix = syntax.profile().token_prefix;
            assert!(out.matches(prefix).count() >= summary.tokens());
        }
        Err(Error::UnpairedDigit { digits }) => {
            assert!(!input.emit_unpaired);
            assert_eq!(digits % 2, 1);
            assert_eq!(digits, summary.digits);
        }
        Err(other) => panic!("unexpected error: {other}"),
    }
});
