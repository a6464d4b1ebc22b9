//! Tab-separated writers.
//!
//! Values are assumed to be free of tabs and newlines, nothing is escaped.
use std::{
    fs::File,
    io::Write,
    path::{Path, PathBuf},
};

use csv::{QuoteStyle, Terminator, WriterBuilder};
use log::debug;

use crate::{
    error::Error,
    triples::{IdMapping, Triple},
};

use super::WriterTrait;

fn tsv_writer<W: Write>(w: W) -> csv::Writer<W> {
    WriterBuilder::new()
        .delimiter(b'\t')
        .has_headers(false)
        .quote_style(QuoteStyle::Never)
        .terminator(Terminator::Any(b'\n'))
        .from_writer(w)
}

/// Writes `subject\trelation\tobject` lines.
pub struct TripleWriter<W: Write> {
    inner: csv::Writer<W>,
    nb_written: usize,
}

impl<W: Write> TripleWriter<W> {
    pub fn new(w: W) -> Self {
        Self {
            inner: tsv_writer(w),
            nb_written: 0,
        }
    }

    /// Number of triples written so far.
    pub fn nb_written(&self) -> usize {
        self.nb_written
    }

    /// Flush and get the inner writer back.
    pub fn into_inner(self) -> Result<W, Error> {
        self.inner
            .into_inner()
            .map_err(|e| Error::Io(e.into_error()))
    }
}

impl TripleWriter<File> {
    pub fn from_path(dst: &Path) -> Result<Self, Error> {
        Ok(Self::new(File::create(dst)?))
    }
}

impl<W: Write> WriterTrait for TripleWriter<W> {
    type Item = Triple;

    fn write(&mut self, vals: &[Triple]) -> Result<(), Error> {
        for triple in vals {
            self.write_single(triple)?;
        }
        Ok(())
    }

    fn write_single(&mut self, val: &Triple) -> Result<(), Error> {
        let (subject, relation, object) = val.as_tuple();
        self.inner.write_record([subject, relation, object])?;
        self.nb_written += 1;
        Ok(())
    }

    fn flush(&mut self) -> Result<(), Error> {
        self.inner.flush()?;
        Ok(())
    }
}

/// Write the integer view of a graph in `dst`:
///
/// - `entity_to_id.tsv`: `entity\tid`
/// - `relation_to_id.tsv`: `relation\tid`, the whole vocabulary
/// - `triples_ids.tsv`: `head\trelation\ttail`
///
/// Returns the written paths.
pub fn write_id_mapping(
    dst: &Path,
    mapping: &IdMapping,
    encoded: &[[u32; 3]],
) -> Result<Vec<PathBuf>, Error> {
    let entities_path = dst.join("entity_to_id.tsv");
    let mut w = tsv_writer(File::create(&entities_path)?);
    for (id, entity) in mapping.entities() {
        w.write_record([entity, id.to_string().as_str()])?;
    }
    w.flush()?;

    let relations_path = dst.join("relation_to_id.tsv");
    let mut w = tsv_writer(File::create(&relations_path)?);
    for (id, relation) in mapping.vocabulary().relations().iter().enumerate() {
        w.write_record([relation.as_str(), id.to_string().as_str()])?;
    }
    w.flush()?;

    let triples_path = dst.join("triples_ids.tsv");
    let mut w = tsv_writer(File::create(&triples_path)?);
    for triple in encoded {
        w.write_record(triple.iter().map(|id| id.to_string()))?;
    }
    w.flush()?;

    debug!(
        "wrote {:?}, {:?} and {:?}",
        entities_path, relations_path, triples_path
    );
    Ok(vec![entities_path, relations_path, triples_path])
}
