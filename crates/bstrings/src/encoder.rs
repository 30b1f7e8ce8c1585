//! The hex-escape encoder.
//!
//! Overview
//! - [`encode`] scans the source once to count hex digits and stray bytes,
//!   validates the digit count, and returns a [`HexEscape`] iterator that
//!   renders the literal lazily, one `char` at a time.
//! - Digits are paired by their position among *valid* digits, not by their
//!   byte offset: `4 1\n4 2` encodes the same two bytes as `4142`.
//! - Output is produced in small units (preamble, token, line break, tail)
//!   rendered into a reusable scratch `String` and drained before the next
//!   unit is rendered, so memory stays bounded by the longest unit.
//!
//! Line grammar
//! - A wrap happens before the first digit of every `width`-th byte, never
//!   before the first byte.
//! - Decorated syntaxes close the current line, break, and re-open the next
//!   line with the same indentation, lead, and quote. Undecorated ones
//!   (PowerShell) break right after the separator.
//! - The literal always ends with a newline.
use alloc::string::String;
use core::{fmt::Write, iter::FusedIterator};

use crate::{
    error::Error,
    hex::{Class, classify, is_hex_digit},
    options::{EncoderOptions, UnpairedDigitMode},
    syntax::SyntaxProfile,
};

/// Counts gathered by the pre-scan of an encoding pass.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct InputSummary {
    /// Valid ASCII hexadecimal digits.
    pub digits: usize,
    /// Bytes that are neither digits nor newline or NUL.
    pub invalid: usize,
}

impl InputSummary {
    /// Classifies every byte of `source`.
    #[must_use]
    pub fn scan(source: &[u8]) -> Self {
        source
            .iter()
            .fold(Self::default(), |mut acc, &b| {
                match classify(b) {
                    Class::Digit => acc.digits += 1,
                    Class::Invalid => acc.invalid += 1,
                    Class::Ignored => {}
                }
                acc
            })
    }

    /// Number of escape tokens the digits produce, counting an unpaired
    /// final digit as a token.
    #[must_use]
    pub fn tokens(&self) -> usize {
        self.digits.div_ceil(2)
    }
}

/// Starts an encoding pass over `source`.
///
/// # Errors
///
/// Returns [`Error::UnpairedDigit`] when `source` holds an odd number of
/// hex digits and `options.unpaired` is [`UnpairedDigitMode::Reject`]. No
/// output has been produced at that point.
pub fn encode<'a>(source: &'a [u8], options: &'a EncoderOptions) -> Result<HexEscape<'a>, Error> {
    let summary = InputSummary::scan(source);
    if summary.digits % 2 == 1 && options.unpaired == UnpairedDigitMode::Reject {
        return Err(Error::UnpairedDigit {
            digits: summary.digits,
        });
    }
    tracing::debug!(
        digits = summary.digits,
        invalid = summary.invalid,
        syntax = %options.syntax,
        width = options.width,
        "starting hex escape pass"
    );
    Ok(HexEscape::new(source, options, summary))
}

/// Renders the complete literal for `source` into a `String`.
///
/// # Errors
///
/// Same as [`encode`].
pub fn encode_to_string(source: &[u8], options: &EncoderOptions) -> Result<String, Error> {
    encode(source, options).map(HexEscape::into_string)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Phase {
    Head,
    Body,
    Done,
}

/// Lazy rendering of one literal. Yields the output characters in order.
#[derive(Debug)]
pub struct HexEscape<'a> {
    source: &'a [u8],
    options: &'a EncoderOptions,
    profile: &'static SyntaxProfile,
    summary: InputSummary,
    /// Digits per output line, `None` when unbounded.
    wrap_digits: Option<usize>,
    declared: bool,
    /// Next source offset to scan.
    pos: usize,
    /// Valid digits consumed so far; its parity decides token boundaries.
    digits_seen: usize,
    phase: Phase,
    scratch: String,
    cursor: usize,
}

impl<'a> HexEscape<'a> {
    fn new(source: &'a [u8], options: &'a EncoderOptions, summary: InputSummary) -> Self {
        let profile = options.syntax.profile();
        Self {
            source,
            options,
            profile,
            summary,
            wrap_digits: options.width.checked_mul(2).filter(|&n| n != 0),
            declared: options.declare && profile.declaration.is_some(),
            pos: 0,
            digits_seen: 0,
            phase: Phase::Head,
            scratch: String::new(),
            cursor: 0,
        }
    }

    /// Digit and invalid-character counts of the source.
    #[must_use]
    pub fn summary(&self) -> InputSummary {
        self.summary
    }

    /// Drains the remaining output into a `String`.
    #[must_use]
    pub fn into_string(self) -> String {
        self.collect()
    }

    fn push_spaces(&mut self, n: usize) {
        self.scratch.extend(core::iter::repeat_n(' ', n));
    }

    fn render_head(&mut self) {
        if self.options.interactive {
            self.scratch.push('\n');
        }
        match self.profile.declaration {
            Some(decl) if self.declared => {
                self.push_spaces(self.options.indent);
                self.scratch.push_str(decl.head);
                self.scratch.push_str(self.options.var_name());
                self.scratch.push_str(decl.tail);
                if decl.standalone {
                    self.scratch.push('\n');
                    self.open_line();
                }
            }
            _ => self.open_line(),
        }
    }

    /// Columns in front of every string line.
    fn line_indent(&self) -> usize {
        self.options.indent.saturating_add(self.profile.extra_indent)
    }

    fn open_line(&mut self) {
        self.push_spaces(self.line_indent());
        if let Some(op) = self.profile.append_operator.filter(|_| self.declared) {
            self.scratch.push_str(self.options.var_name());
            self.scratch.push_str(op);
        }
        self.scratch.push_str(self.profile.quote);
    }

    fn break_line(&mut self) {
        if self.profile.redecorate {
            self.scratch.push_str(self.profile.quote);
            self.scratch.push('\n');
            self.open_line();
        } else {
            self.scratch.push('\n');
        }
    }

    /// Renders the next valid digit, with any separator or wrap it opens.
    /// Returns `false` once the source is exhausted.
    fn render_digit(&mut self) -> bool {
        let Some(offset) = self.source[self.pos..]
            .iter()
            .position(|&b| is_hex_digit(b))
        else {
            self.pos = self.source.len();
            return false;
        };
        let digit = char::from(self.source[self.pos + offset]);
        self.pos += offset + 1;

        let index = self.digits_seen;
        self.digits_seen += 1;
        if index % 2 == 1 {
            self.scratch.push(digit);
            return true;
        }
        if index != 0 {
            self.scratch.push_str(self.profile.separator);
            if self.wrap_digits.is_some_and(|n| index % n == 0) {
                self.break_line();
            }
        }
        self.scratch.push_str(self.profile.token_prefix);
        self.scratch.push(digit);
        true
    }

    fn render_tail(&mut self) {
        self.scratch.push_str(self.profile.quote);
        self.scratch.push_str(self.profile.terminator);
        self.scratch.push('\n');
        if self.options.verbose && self.summary.invalid > 0 {
            // Writing into a `String` cannot fail.
            let _ = writeln!(
                self.scratch,
                "[-] Warning: {} non-hexadecimal character(s) detected in input.",
                self.summary.invalid
            );
        }
    }
}

impl Iterator for HexEscape<'_> {
    type Item = char;

    fn next(&mut self) -> Option<char> {
        loop {
            if let Some(c) = self.scratch[self.cursor..].chars().next() {
                self.cursor += c.len_utf8();
                return Some(c);
            }
            self.scratch.clear();
            self.cursor = 0;
            match self.phase {
                Phase::Head => {
                    self.render_head();
                    self.phase = Phase::Body;
                }
                Phase::Body => {
                    if !self.render_digit() {
                        self.render_tail();
                        self.phase = Phase::Done;
                    }
                }
                Phase::Done => return None,
            }
        }
    }
}

impl FusedIterator for HexEscape<'_> {}
