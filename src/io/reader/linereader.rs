/*! Permissive line reader.

Reads newline-terminated lines from any [BufRead] and decodes them as UTF-8,
replacing invalid sequences with `U+FFFD` instead of failing.
!*/
use std::{
    fs::File,
    io::{BufRead, BufReader},
    path::Path,
};

use crate::error::Error;

/// Reader that yields decoded lines, without their line terminator.
///
/// Lines are *not* trimmed apart from the trailing `\n`/`\r\n`.
#[derive(Debug)]
pub struct LineReader<T> {
    br: T,
    nb_lines: usize,
}

impl LineReader<BufReader<File>> {
    /// Open the dump located at `src`.
    pub fn from_path(src: &Path) -> Result<Self, Error> {
        let handle = File::open(src)?;
        Ok(Self {
            br: BufReader::new(handle),
            nb_lines: 0,
        })
    }
}

impl<T: BufRead> LineReader<T> {
    pub fn new(br: T) -> Self {
        Self {
            br,
            nb_lines: 0,
        }
    }

    /// Get next line (read until `\n`)
    fn next_line(&mut self) -> Option<Result<String, Error>> {
        let mut buf = Vec::new();
        match self.br.read_until(b'\n', &mut buf) {
            Ok(0) => None,
            Err(e) => Some(Err(Error::Io(e))),
            _ => {
                if buf.ends_with(b"\n") {
                    buf.pop();
                    if buf.ends_with(b"\r") {
                        buf.pop();
                    }
                }
                self.nb_lines += 1;
                Some(Ok(String::from_utf8_lossy(&buf).into_owned()))
            }
        }
    }

    /// Number of lines read so far.
    pub fn nb_lines(&self) -> usize {
        self.nb_lines
    }
}

impl<T: BufRead> Iterator for LineReader<T> {
    type Item = Result<String, Error>;

    fn next(&mut self) -> Option<Self::Item> {
        self.next_line()
    }
}
