//! RateBeer dump loading.
//!
//! Loading runs every stage in a single pass over in-memory data:
//!
//! 1. lines are read (invalid UTF-8 is replaced) and assembled into records, collecting reviewer names,
//! 1. calendar fields are derived from `review/time`,
//! 1. records are sorted by time and given their `id`, `review/time` is dropped,
//! 1. records are chained (per reviewer by default).
//!
//! Any error aborts the whole load.
use std::{io::BufRead, path::Path};

use log::info;

use crate::{
    config::PipelineConfig,
    error::Error,
    io::LineReader,
    parsing::{Assembled, Assembler},
    record::{Record, Reviewers},
    transformers::{Indexer, Linker, Normalizer, Transform},
    triples::{Emitter, IdMapping, Triple, Vocabulary},
};

/// Linked records of a dump, in chronological (`id`) order.
#[derive(Debug, Clone)]
pub struct Dataset {
    records: Vec<Record>,
    reviewers: Reviewers,
    config: PipelineConfig,
}

impl Dataset {
    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn records(&self) -> &[Record] {
        &self.records
    }

    pub fn reviewers(&self) -> &Reviewers {
        &self.reviewers
    }

    /// Flatten the dataset into labeled triples.
    ///
    /// Fails with [Error::EmptyDataset] if there is no record.
    pub fn triples(&self) -> Result<Vec<Triple>, Error> {
        Emitter::new(self.config.encoding).emit(&self.records)
    }

    /// Integer view of [Dataset::triples], using the vocabulary of the configured graph.
    pub fn id_triples(&self) -> Result<(IdMapping, Vec<[u32; 3]>), Error> {
        let triples = self.triples()?;
        IdMapping::from_triples(&triples, Vocabulary::new(self.config.graph))
    }
}

#[derive(Debug, Clone, Default)]
pub struct RateBeerLoader {
    config: PipelineConfig,
}

impl RateBeerLoader {
    pub fn new(config: PipelineConfig) -> Self {
        Self { config }
    }

    /// Load the dump located at `src`.
    pub fn load_path(&self, src: &Path) -> Result<Dataset, Error> {
        info!("loading {:?}", src);
        let reader = LineReader::from_path(src)?;
        self.load_lines(reader)
    }

    /// Load a dump from any buffered reader.
    pub fn load<R: BufRead>(&self, reader: R) -> Result<Dataset, Error> {
        self.load_lines(LineReader::new(reader))
    }

    fn load_lines<R: BufRead>(&self, reader: LineReader<R>) -> Result<Dataset, Error> {
        let assembler = Assembler::new(self.config.excluded_beer_fields());
        let assembled = assembler.assemble_reader(reader)?;
        info!(
            "assembled {} records from {} reviewers",
            assembled.records.len(),
            assembled.reviewers.len()
        );
        self.process(assembled)
    }

    /// Run the post-assembly stages.
    pub fn process(&self, assembled: Assembled) -> Result<Dataset, Error> {
        let Assembled { records, reviewers } = assembled;

        let normalizer = Normalizer::new(self.config.zone, self.config.encoding.into());
        let records = normalizer.transform_own(records)?;
        let records = Indexer.transform_own(records)?;
        let records = Linker::new(self.config.linking, &reviewers).transform_own(records)?;

        Ok(Dataset {
            records,
            reviewers,
            config: self.config.clone(),
        })
    }
}
