//! Reading the bytes handed to the encoder.
use std::{
    fs::File,
    io::{self, Read},
    path::Path,
};

use bstrings::{ByteBuffer, hex::to_hex_digits};

use crate::error::CliError;

const CHUNK_LEN: usize = 8 * 1024;

/// Drains `reader` into a [`ByteBuffer`].
///
/// Read failures are reported through `on_error` so callers can attach the
/// input's name.
fn read_all<R: Read>(
    mut reader: R,
    on_error: impl Fn(io::Error) -> CliError,
) -> Result<ByteBuffer, CliError> {
    let mut buf = ByteBuffer::new();
    let mut chunk = [0u8; CHUNK_LEN];
    loop {
        match reader.read(&mut chunk) {
            Ok(0) => break,
            Ok(n) => buf.extend_from_slice(&chunk[..n])?,
            Err(e) if e.kind() == io::ErrorKind::Interrupted => {}
            Err(e) => return Err(on_error(e)),
        }
    }
    tracing::debug!(
        len = buf.len(),
        reallocations = buf.reallocations(),
        "input buffered"
    );
    Ok(buf)
}

pub fn read_stdin<R: Read>(stdin: R) -> Result<ByteBuffer, CliError> {
    read_all(stdin, CliError::Input)
}

pub fn read_file(path: &Path) -> Result<ByteBuffer, CliError> {
    let unreadable = |source| CliError::UnreadableFile {
        path: path.to_path_buf(),
        source,
    };
    let file = File::open(path).map_err(unreadable)?;
    read_all(file, unreadable)
}

/// Re-encodes raw bytes as the hex digits the encoder consumes.
pub fn hexify(raw: &ByteBuffer) -> Result<ByteBuffer, CliError> {
    Ok(to_hex_digits(raw.as_slice().iter().copied())?)
}
