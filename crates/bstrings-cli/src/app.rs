use std::io::{Read, Write};

use bstrings::{EncoderOptions, badchar, encode};

use crate::{cli::Cli, error::CliError, input};

/// Executes the requested passes.
///
/// Every pass is rendered into memory first; `out` receives the literals
/// only once all of them succeeded. In interactive mode the banners and the
/// prompt are written out before stdin is read.
pub fn run<R: Read, W: Write>(cli: &Cli, stdin: R, out: &mut W) -> Result<(), CliError> {
    let options = cli.encoder_options()?;
    let mut rendered = String::new();

    if cli.reads_input() {
        if cli.verbose {
            rendered.push_str("[*] Convert hexadecimal input to a hex escaped binary string.\n");
            push_width_banner(&mut rendered, cli);
        }
        let source = match &cli.file {
            Some(path) => input::read_file(path)?,
            None => {
                if cli.interactive {
                    // Banners come before the prompt, which must be visible
                    // before stdin is read.
                    out.write_all(rendered.as_bytes())
                        .and_then(|()| writeln!(out, "[+] Hit CTRL-D twice to terminate input."))
                        .and_then(|()| out.flush())
                        .map_err(CliError::Output)?;
                    rendered.clear();
                }
                input::read_stdin(stdin)?
            }
        };
        let source = if cli.raw { input::hexify(&source)? } else { source };
        render_pass(&mut rendered, source.as_slice(), &options)?;
    }

    if cli.gen_badchar {
        if cli.verbose {
            rendered.push_str("[*] Generate bad character binary string:\n");
            push_width_banner(&mut rendered, cli);
        }
        let seq = badchar::generate()?;
        render_pass(&mut rendered, seq.as_slice(), &options)?;
    }

    out.write_all(rendered.as_bytes())
        .and_then(|()| out.flush())
        .map_err(CliError::Output)
}

fn push_width_banner(rendered: &mut String, cli: &Cli) {
    if let Some(width) = cli.width {
        rendered.push_str(&format!(
            "[+] Binary string width is limited to {width} bytes.\n"
        ));
    }
}

fn render_pass(
    rendered: &mut String,
    source: &[u8],
    options: &EncoderOptions,
) -> Result<(), CliError> {
    let literal = encode(source, options)?;
    let summary = literal.summary();
    if summary.invalid > 0 {
        tracing::info!(invalid = summary.invalid, "skipped non-hexadecimal input");
    }
    rendered.extend(literal);
    Ok(())
}
