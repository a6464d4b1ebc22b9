/*! Chronological indexing.

Records are sorted by ascending `review/time` and given a dense, zero-based `id` equal to their rank.
Records sharing a timestamp keep their file order (the sort is stable).

`review/time` is removed once ids are assigned.
!*/
use log::debug;

use crate::{
    error::Error,
    record::{fields, Record},
};

use super::Transform;

#[derive(Debug, Default, Clone, Copy)]
pub struct Indexer;

impl Transform for Indexer {
    fn transform_own(&self, records: Vec<Record>) -> Result<Vec<Record>, Error> {
        let mut timed = records
            .into_iter()
            .enumerate()
            .map(|(position, record)| -> Result<(i64, Record), Error> {
                Ok((record.timestamp(position)?, record))
            })
            .collect::<Result<Vec<(i64, Record)>, Error>>()?;

        // sort_by_key is stable
        timed.sort_by_key(|(timestamp, _)| *timestamp);

        if let (Some((first, _)), Some((last, _))) = (timed.first(), timed.last()) {
            debug!("indexing {} records from {} to {}", timed.len(), first, last);
        }

        Ok(timed
            .into_iter()
            .enumerate()
            .map(|(id, (_, mut record))| {
                record.set_id(id);
                record.remove_review(fields::TIME);
                record
            })
            .collect())
    }
}
