//! JSON lines record writer.
use std::{
    fs::File,
    io::{BufWriter, Write},
    path::Path,
};

use crate::{error::Error, record::Record};

use super::WriterTrait;

/// Writes one JSON-serialized [Record] per line.
pub struct RecordWriter<W: Write> {
    inner: BufWriter<W>,
}

impl<W: Write> RecordWriter<W> {
    pub fn new(w: W) -> Self {
        Self {
            inner: BufWriter::new(w),
        }
    }

    /// Flush and get the inner writer back.
    pub fn into_inner(self) -> Result<W, Error> {
        self.inner.into_inner().map_err(|e| Error::Io(e.into_error()))
    }
}

impl RecordWriter<File> {
    pub fn from_path(dst: &Path) -> Result<Self, Error> {
        Ok(Self::new(File::create(dst)?))
    }
}

impl<W: Write> WriterTrait for RecordWriter<W> {
    type Item = Record;

    fn write(&mut self, vals: &[Record]) -> Result<(), Error> {
        for record in vals {
            self.write_single(record)?;
        }
        Ok(())
    }

    fn write_single(&mut self, val: &Record) -> Result<(), Error> {
        serde_json::to_writer(&mut self.inner, val)?;
        self.inner.write_all(b"\n")?;
        Ok(())
    }

    fn flush(&mut self) -> Result<(), Error> {
        self.inner.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use crate::record::fields;

    use super::*;

    #[test]
    fn test_jsonl() {
        let mut a = Record::new();
        a.set_review(fields::AROMA, "5/10");
        let mut b = Record::new();
        b.set_beer(fields::BEER_ID, "1");

        let mut w = RecordWriter::new(Vec::new());
        w.write(&[a.clone(), b.clone()]).unwrap();
        let out = String::from_utf8(w.into_inner().unwrap()).unwrap();

        let back: Vec<Record> = out
            .lines()
            .map(|l| serde_json::from_str(l).unwrap())
            .collect();
        assert_eq!(back, vec![a, b]);
    }
}
