//! Target languages and the formatting rules each of them imposes.
//!
//! A [`Syntax`] is resolved once from its user-facing name; the encoder then
//! works from the matching [`SyntaxProfile`] and never branches on the
//! language again.
use alloc::string::ToString;
use core::{fmt, str::FromStr};

use crate::error::Error;

/// Output language of an encoding pass.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Syntax {
    /// Bare `\xHH` tokens with newline-only wrapping.
    #[default]
    Raw,
    /// A C `unsigned char` array initialised from string literals.
    C,
    /// A Python string built by concatenation.
    Python,
    /// A PowerShell `[Byte[]]` array.
    PowerShell,
}

/// Variable declaration wrapped around the literal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Declaration {
    /// Text before the variable name.
    pub head: &'static str,
    /// Text after the variable name.
    pub tail: &'static str,
    /// Whether the declaration sits on its own line, or the first tokens
    /// follow it directly.
    pub standalone: bool,
}

/// Per-language constants consumed by the encoder.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SyntaxProfile {
    /// Rendered before the two digits of every byte.
    pub token_prefix: &'static str,
    /// Rendered between two consecutive bytes.
    pub separator: &'static str,
    /// Opens and closes every output line, empty for unquoted syntaxes.
    pub quote: &'static str,
    /// Columns added to the configured indentation on string lines.
    pub extra_indent: usize,
    /// Whether wrapped lines get indentation, quoting and the line lead.
    /// When `false`, a wrap is a bare newline.
    pub redecorate: bool,
    /// Written between the variable name and a declared string line, turning
    /// each line into an append statement.
    pub append_operator: Option<&'static str>,
    /// Declaration preamble, if the language has one.
    pub declaration: Option<Declaration>,
    /// Statement terminator written after the last line.
    pub terminator: &'static str,
}

const RAW: SyntaxProfile = SyntaxProfile {
    token_prefix: "\\x",
    separator: "",
    quote: "",
    extra_indent: 0,
    redecorate: true,
    append_operator: None,
    declaration: None,
    terminator: "",
};

const C: SyntaxProfile = SyntaxProfile {
    token_prefix: "\\x",
    separator: "",
    quote: "\"",
    extra_indent: 4,
    redecorate: true,
    append_operator: None,
    declaration: Some(Declaration {
        head: "unsigned char ",
        tail: "[] =",
        standalone: true,
    }),
    terminator: ";",
};

const PYTHON: SyntaxProfile = SyntaxProfile {
    token_prefix: "\\x",
    separator: "",
    quote: "\"",
    extra_indent: 0,
    redecorate: true,
    append_operator: Some(" += "),
    declaration: Some(Declaration {
        head: "",
        tail: " = \"\"",
        standalone: true,
    }),
    terminator: "",
};

const POWERSHELL: SyntaxProfile = SyntaxProfile {
    token_prefix: "0x",
    separator: ",",
    quote: "",
    extra_indent: 0,
    redecorate: false,
    append_operator: None,
    declaration: Some(Declaration {
        head: "[Byte[]] $",
        tail: " = ",
        standalone: false,
    }),
    terminator: "",
};

impl Syntax {
    /// Maps a user-facing language name to a syntax.
    ///
    /// Matching is exact and case-sensitive: `C` or `c`, `python`,
    /// `powershell`.
    ///
    /// # Errors
    ///
    /// Any other name yields [`Error::UnknownLanguage`] carrying it.
    pub fn resolve(name: &str) -> Result<Self, Error> {
        match name {
            "C" | "c" => Ok(Self::C),
            "python" => Ok(Self::Python),
            "powershell" => Ok(Self::PowerShell),
            other => Err(Error::UnknownLanguage(other.to_string())),
        }
    }

    /// Formatting rules of this syntax.
    #[must_use]
    pub const fn profile(self) -> &'static SyntaxProfile {
        match self {
            Self::Raw => &RAW,
            Self::C => &C,
            Self::Python => &PYTHON,
            Self::PowerShell => &POWERSHELL,
        }
    }

    /// Lowercase display name. Every name except `raw` round-trips through
    /// [`Syntax::resolve`].
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Raw => "raw",
            Self::C => "c",
            Self::Python => "python",
            Self::PowerShell => "powershell",
        }
    }
}

impl FromStr for Syntax {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::resolve(s)
    }
}

impl fmt::Display for Syntax {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use alloc::string::ToString;

    use rstest::rstest;

    use super::Syntax;
    use crate::Error;

    #[rstest]
    #[case("C", Syntax::C)]
    #[case("c", Syntax::C)]
    #[case("python", Syntax::Python)]
    #[case("powershell", Syntax::PowerShell)]
    fn known_names_resolve(#[case] name: &str, #[case] expected: Syntax) {
        assert_eq!(Syntax::resolve(name), Ok(expected));
        assert_eq!(name.parse::<Syntax>(), Ok(expected));
    }

    #[rstest]
    #[case("ruby")]
    #[case("Python")]
    #[case("PowerShell")]
    #[case("raw")]
    #[case("")]
    fn other_names_are_rejected(#[case] name: &str) {
        assert_eq!(
            Syntax::resolve(name),
            Err(Error::UnknownLanguage(name.to_string()))
        );
    }

    #[test]
    fn unknown_language_message_names_the_value() {
        let err = Syntax::resolve("ruby").unwrap_err();
        assert_eq!(err.to_string(), "unknown syntax 'ruby'");
    }

    #[test]
    fn only_powershell_separates_tokens() {
        assert_eq!(Syntax::PowerShell.profile().token_prefix, "0x");
        assert_eq!(Syntax::PowerShell.profile().separator, ",");
        for syntax in [Syntax::Raw, Syntax::C, Syntax::Python] {
            assert_eq!(syntax.profile().token_prefix, "\\x");
            assert_eq!(syntax.profile().separator, "");
        }
    }
}
