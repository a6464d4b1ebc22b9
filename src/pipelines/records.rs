//! Linked records dump.
//!
//! Loads a dump and writes its linked records in `records.jsonl`, one JSON object per line,
//! in `id` order.
use std::path::PathBuf;

use log::info;

use crate::{
    config::PipelineConfig,
    error::Error,
    io::{RecordWriter, WriterTrait},
};

use super::{Pipeline, RateBeerLoader};

pub struct Records {
    src: PathBuf,
    dst: PathBuf,
    config: PipelineConfig,
}

impl Records {
    pub fn new(src: PathBuf, dst: PathBuf, config: PipelineConfig) -> Self {
        Self { src, dst, config }
    }
}

impl Pipeline<usize> for Records {
    /// Returns the number of written records.
    fn run(&self) -> Result<usize, Error> {
        let dataset = RateBeerLoader::new(self.config.clone()).load_path(&self.src)?;

        std::fs::create_dir_all(&self.dst)?;
        let path = self.dst.join("records.jsonl");
        let mut writer = RecordWriter::from_path(&path)?;
        writer.write(dataset.records())?;
        writer.flush()?;

        info!("wrote {} records to {:?}", dataset.len(), path);
        Ok(dataset.len())
    }
}
