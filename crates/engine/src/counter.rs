use crate::error::{EngineError, Result};
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

/// Number of lines in the file at `path`.
///
/// `\n`, `\r\n` and a lone `\r` each end a line.
///
/// # Errors
/// Returns [`EngineError::FileRead`] if the file cannot be opened or read.
pub fn count_lines(path: &Path) -> Result<usize> {
    let file = File::open(path).map_err(|e| EngineError::FileRead {
        path: path.to_path_buf(),
        source: e,
    })?;
    let mut reader = BufReader::new(file);
    count_lines_in(&mut reader).map_err(|e| EngineError::FileRead {
        path: path.to_path_buf(),
        source: e,
    })
}

/// Streaming line count over any buffered reader.
///
/// # Errors
/// Propagates the reader's I/O error.
pub fn count_lines_in<R: BufRead>(reader: &mut R) -> std::io::Result<usize> {
    let mut lines = 0;
    let mut last_byte: Option<u8> = None;

    loop {
        let buf = reader.fill_buf()?;
        if buf.is_empty() {
            break;
        }

        let lf = bytecount::count(buf, b'\n');
        let cr = bytecount::count(buf, b'\r');
        // `\r\n` is a single terminator, even when split across two reads
        let mut crlf = 0;
        if cr > 0 {
            crlf = buf.windows(2).filter(|w| *w == b"\r\n").count();
        }
        if last_byte == Some(b'\r') && buf[0] == b'\n' {
            crlf += 1;
        }
        lines += lf + cr - crlf;

        last_byte = buf.last().copied();
        let len = buf.len();
        reader.consume(len);
    }

    // 末尾に改行がない場合の行カウント補正
    if let Some(b) = last_byte
        && b != b'\n'
        && b != b'\r'
    {
        lines += 1;
    }

    Ok(lines)
}

/// Like [`count_lines`], but a read failure is logged and counted as zero.
#[must_use]
pub fn count_lines_or_zero(path: &Path) -> usize {
    count_lines(path).unwrap_or_else(|e| {
        log::warn!("{e}");
        0
    })
}
