use alloc::string::String;

use crate::syntax::Syntax;

/// Variable name used when a declaration is requested without one.
pub const DEFAULT_VAR_NAME: &str = "buffer";

/// Configuration of one encoding pass.
///
/// # Examples
///
/// ```rust
/// use bstrings::{EncoderOptions, Syntax};
///
/// let options = EncoderOptions {
///     width: 16,
///     syntax: Syntax::C,
///     var_name: Some("buf".into()),
///     declare: true,
///     ..Default::default()
/// };
/// assert_eq!(options.var_name(), "buf");
/// ```
///
/// # Default
///
/// Raw syntax, no wrapping, no indentation, no declaration, not verbose.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
#[allow(clippy::struct_excessive_bools)]
pub struct EncoderOptions {
    /// Output bytes per line before a line break is inserted.
    ///
    /// `0` keeps the whole literal on one line.
    ///
    /// # Default
    ///
    /// `0`
    pub width: usize,

    /// Target language of the literal.
    ///
    /// # Default
    ///
    /// [`Syntax::Raw`]
    pub syntax: Syntax,

    /// Columns of indentation in front of every line.
    ///
    /// C string lines are nested four further columns under their
    /// declaration.
    ///
    /// # Default
    ///
    /// `0`
    pub indent: usize,

    /// Name of the declared variable; [`DEFAULT_VAR_NAME`] when unset.
    ///
    /// # Default
    ///
    /// `None`
    pub var_name: Option<String>,

    /// Whether to write the language's declaration preamble
    /// (`unsigned char NAME[] =`, `NAME = ""`, `[Byte[]] $NAME = `).
    ///
    /// Has no effect with [`Syntax::Raw`].
    ///
    /// # Default
    ///
    /// `false`
    pub declare: bool,

    /// Whether to append a warning with the number of non-hexadecimal
    /// characters found in the input.
    ///
    /// # Default
    ///
    /// `false`
    pub verbose: bool,

    /// Whether to start the literal on a fresh line, for output following
    /// input typed on the terminal.
    ///
    /// # Default
    ///
    /// `false`
    pub interactive: bool,

    /// What to do with a final hex digit that has no partner.
    ///
    /// # Default
    ///
    /// [`UnpairedDigitMode::Reject`]
    pub unpaired: UnpairedDigitMode,
}

impl EncoderOptions {
    /// Name written into declarations and append statements.
    #[must_use]
    pub fn var_name(&self) -> &str {
        self.var_name.as_deref().unwrap_or(DEFAULT_VAR_NAME)
    }
}

/// Handling of an odd count of hexadecimal digits.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum UnpairedDigitMode {
    /// Fail before any output is produced.
    #[default]
    Reject,
    /// Open a token for the dangling digit and leave it incomplete
    /// (`\xA`).
    Emit,
}
