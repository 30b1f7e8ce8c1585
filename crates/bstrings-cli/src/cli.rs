use std::path::PathBuf;

use bstrings::{EncoderOptions, Syntax, UnpairedDigitMode};
use clap::{Parser, builder::TypedValueParser};

use crate::error::CliError;

#[derive(Parser, Debug)]
#[command(name = "bstrings")]
#[command(about = "Convert input to specified binary string format.")]
#[command(disable_version_flag = true)]
pub struct Cli {
    /// Convert hexadecimal input to escaped binary string
    #[arg(short = 'x', long)]
    pub hex_escape: bool,

    /// Generate a bad character sequence string
    #[arg(short = 'b', long)]
    pub gen_badchar: bool,

    /// Treat input as raw bytes and convert them to hexadecimal first
    #[arg(short = 'r', long)]
    pub raw: bool,

    /// Read input from a file instead of standard input
    #[arg(short = 'f', long, value_name = "PATH")]
    pub file: Option<PathBuf>,

    /// Break binary strings to specified length in bytes
    #[arg(short = 'w', long, value_name = "BYTES")]
    pub width: Option<usize>,

    /// Output syntax: C, python or powershell
    #[arg(short = 's', long, value_name = "LANG")]
    pub syntax: Option<String>,

    /// Indent every line by this many columns
    #[arg(
        short = 'i',
        long,
        value_name = "COLUMNS",
        default_value_t = 0,
        value_parser = clap::value_parser!(u16).map(usize::from)
    )]
    pub indent: usize,

    /// Variable name used in the declaration
    #[arg(short = 'n', long, value_name = "NAME")]
    pub var_name: Option<String>,

    /// Emit an incomplete token for a final unpaired digit instead of failing
    #[arg(long)]
    pub allow_unpaired: bool,

    /// Enable verbose output
    #[arg(short = 'v', long, overrides_with = "quiet")]
    pub verbose: bool,

    /// Disable verbose output
    #[arg(long, overrides_with = "verbose")]
    pub quiet: bool,

    /// Enter interactive mode
    #[arg(long)]
    pub interactive: bool,

    /// Print version information
    #[arg(long)]
    pub version: bool,
}

impl Cli {
    /// Whether a pass over the input was requested.
    pub fn reads_input(&self) -> bool {
        self.hex_escape || self.raw
    }

    pub fn has_action(&self) -> bool {
        self.reads_input() || self.gen_badchar
    }

    /// Resolves the syntax name and builds the encoder configuration.
    ///
    /// Runs before any input is read so an unknown syntax fails without
    /// output.
    pub fn encoder_options(&self) -> Result<EncoderOptions, CliError> {
        let syntax = self
            .syntax
            .as_deref()
            .map(Syntax::resolve)
            .transpose()?
            .unwrap_or_default();
        Ok(EncoderOptions {
            width: self.width.unwrap_or(0),
            syntax,
            indent: self.indent,
            var_name: self.var_name.clone(),
            declare: self.verbose || self.var_name.is_some(),
            verbose: self.verbose,
            interactive: self.interactive,
            unpaired: if self.allow_unpaired {
                UnpairedDigitMode::Emit
            } else {
                UnpairedDigitMode::Reject
            },
        })
    }
}
