//! Persist the received quote to a local text file.
use std::fs::File;
use std::io::Write;
use std::path::Path;

use quote_common::Result;

/// Line written to the output file for `bid`, without a trailing newline.
pub fn format_quote_line(bid: &str) -> String {
    format!("Dolar: {{{}}}", bid)
}

/// Create or truncate `path`, write the quote line and return the bytes written.
pub fn write_quote_file(path: &Path, bid: &str) -> Result<usize> {
    let line = format_quote_line(bid);
    let mut file = File::create(path)?;
    file.write_all(line.as_bytes())?;
    Ok(line.len())
}
