//! Line-oriented reading of script sources

use std::fs::File;
use std::io::{BufRead, BufReader};
use crate::{Encoding, Error, NormalizedPath, ReadOptions, Result};

/// Lazily decodes lines from a buffered reader.
///
/// Each item is one line including its terminator (`\n` or `\r\n`); the
/// last line is yielded without one if the source does not end in a
/// newline. Iteration stops after the first error.
#[derive(Debug)]
pub struct LineReader<R> {
    reader: R,
    encoding: Encoding,
    path: NormalizedPath,
    line_no: usize,
    done: bool,
}

impl<R: BufRead> LineReader<R> {
    /// Wrap a reader. `path` is only used to label errors.
    pub fn new(reader: R, encoding: Encoding, path: impl Into<NormalizedPath>) -> Self {
        Self {
            reader,
            encoding,
            path: path.into(),
            line_no: 0,
            done: false,
        }
    }

    /// Number of lines yielded so far.
    pub fn line_no(&self) -> usize {
        self.line_no
    }

    /// The path used to label errors.
    pub fn path(&self) -> &NormalizedPath {
        &self.path
    }
}

impl<R: BufRead> Iterator for LineReader<R> {
    type Item = Result<String>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }

        let mut buf = Vec::new();
        match self.reader.read_until(b'\n', &mut buf) {
            Ok(0) => {
                self.done = true;
                None
            }
            Ok(_) => {
                self.line_no += 1;
                match self.encoding.decode_line(buf, self.line_no == 1) {
                    Some(line) => Some(Ok(line)),
                    None => {
                        self.done = true;
                        Some(Err(Error::Decode {
                            path: self.path.clone(),
                            line: self.line_no,
                            encoding: self.encoding,
                        }))
                    }
                }
            }
            Err(e) => {
                self.done = true;
                Some(Err(Error::io(&self.path, e)))
            }
        }
    }
}

/// Open a source file and stream its decoded lines.
///
/// Checks `max_bytes` against the file's metadata before any line is read.
pub fn open_lines(
    path: &NormalizedPath,
    options: &ReadOptions,
) -> Result<LineReader<BufReader<File>>> {
    let file = File::open(path.to_native()).map_err(|e| Error::io(path, e))?;

    if let Some(max) = options.max_bytes {
        let size = file.metadata().map_err(|e| Error::io(path, e))?.len();
        if size > max {
            return Err(Error::TooLarge {
                path: path.clone(),
                size,
                max,
            });
        }
    }

    tracing::debug!(%path, encoding = %options.encoding, "Opened script source");
    Ok(LineReader::new(BufReader::new(file), options.encoding, path))
}

/// Read and decode a whole source file.
pub fn read_text(path: &NormalizedPath, options: &ReadOptions) -> Result<String> {
    open_lines(path, options)?.collect()
}
