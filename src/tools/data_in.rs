use std::io::{BufRead, Write};

use log::info;

use super::cli::{HuffOpts, Source};

/// Get the phrase to encode from wherever the options say. Standard IO errors are returned.
pub fn read_input(opts: &HuffOpts) -> Result<String, std::io::Error> {
    match &opts.source {
        Source::Text(text) => Ok(text.clone()),
        Source::File(path) => {
            let text = std::fs::read_to_string(path)?;
            info!("Read {} bytes from {}", text.len(), path);
            Ok(text)
        }
        Source::Prompt => {
            let stdin = std::io::stdin();
            let mut stdout = std::io::stdout();
            prompt(&mut stdin.lock(), &mut stdout)
        }
    }
}

/// Ask for a phrase and read one line. The line ending is dropped.
pub fn prompt<R: BufRead, W: Write>(reader: &mut R, writer: &mut W) -> Result<String, std::io::Error> {
    write!(writer, "Phrase to encode?  ")?;
    writer.flush()?;
    let mut line = String::new();
    reader.read_line(&mut line)?;
    let trimmed = line.trim_end_matches(|c: char| c == '\n' || c == '\r').len();
    line.truncate(trimmed);
    Ok(line)
}
