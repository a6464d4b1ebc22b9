//! Triple generation pipeline.
//!
//! Loads a dump and writes `triples.tsv` in the destination folder.
//! When ids are requested, the integer view of the graph is written alongside
//! (see [crate::io::writer::write_id_mapping]).
use std::path::PathBuf;

use log::info;

use crate::{
    config::PipelineConfig,
    error::Error,
    io::{writer::write_id_mapping, TripleWriter, WriterTrait},
    triples::{IdMapping, Vocabulary},
};

use super::{Pipeline, RateBeerLoader};

/// Counts of a [Triples] run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TriplesSummary {
    pub nb_records: usize,
    pub nb_reviewers: usize,
    pub nb_triples: usize,
    /// Only set when ids were written.
    pub nb_entities: Option<usize>,
}

pub struct Triples {
    src: PathBuf,
    dst: PathBuf,
    config: PipelineConfig,
    with_ids: bool,
}

impl Triples {
    pub fn new(src: PathBuf, dst: PathBuf, config: PipelineConfig) -> Self {
        Self {
            src,
            dst,
            config,
            with_ids: false,
        }
    }

    /// Also write entity/relation maps and integer triples.
    pub fn with_ids(mut self, with_ids: bool) -> Self {
        self.with_ids = with_ids;
        self
    }
}

impl Pipeline<TriplesSummary> for Triples {
    fn run(&self) -> Result<TriplesSummary, Error> {
        let loader = RateBeerLoader::new(self.config.clone());
        let dataset = loader.load_path(&self.src)?;
        let triples = dataset.triples()?;

        // encoding fails on relations missing from the vocabulary,
        // so it has to happen before anything is written.
        let ids = if self.with_ids {
            Some(IdMapping::from_triples(
                &triples,
                Vocabulary::new(self.config.graph),
            )?)
        } else {
            None
        };

        std::fs::create_dir_all(&self.dst)?;
        let triples_path = self.dst.join("triples.tsv");
        let mut writer = TripleWriter::from_path(&triples_path)?;
        writer.write(&triples)?;
        writer.flush()?;
        info!("wrote {} triples to {:?}", writer.nb_written(), triples_path);

        let nb_entities = match ids {
            Some((mapping, encoded)) => {
                write_id_mapping(&self.dst, &mapping, &encoded)?;
                Some(mapping.len())
            }
            None => None,
        };

        Ok(TriplesSummary {
            nb_records: dataset.len(),
            nb_reviewers: dataset.reviewers().len(),
            nb_triples: triples.len(),
            nb_entities,
        })
    }
}
