/*! Review chaining.

Links chronologically indexed records with `precedes` (next review) and `succeeds` (previous review).

With [LinkPolicy::PerReviewer], each reviewer's records form their own chain, ordered by `id`.
A reviewer's first review has no `succeeds`, their last review has no `precedes`,
and a reviewer with a single review gets neither.

With [LinkPolicy::Global], all records form a single chain.

Records have to be sorted by `id` (which is the case after [super::Indexer]):
positions are grouped in a single pass and never re-sorted.
!*/
use std::collections::HashMap;

use itertools::Itertools;
use log::{debug, info};

use crate::{
    config::LinkPolicy,
    error::Error,
    record::{Record, Reviewers},
};

use super::Transform;

pub struct Linker<'a> {
    policy: LinkPolicy,
    reviewers: &'a Reviewers,
}

impl<'a> Linker<'a> {
    /// `reviewers` is the set produced by the [crate::parsing::Assembler].
    /// Records whose reviewer is not in it are left unlinked.
    pub fn new(policy: LinkPolicy, reviewers: &'a Reviewers) -> Self {
        Self { policy, reviewers }
    }

    /// Positions of each chain, in chain order.
    /// Chains shorter than 2 are skipped since they yield no link.
    fn chains(&self, records: &[Record]) -> Vec<Vec<usize>> {
        match self.policy {
            LinkPolicy::Global => {
                if records.len() < 2 {
                    vec![]
                } else {
                    vec![(0..records.len()).collect()]
                }
            }
            LinkPolicy::PerReviewer => {
                let mut by_reviewer: HashMap<&str, Vec<usize>> =
                    HashMap::with_capacity(self.reviewers.len());

                for (position, record) in records.iter().enumerate() {
                    match record.profile_name() {
                        Some(name) if self.reviewers.contains(name) => {
                            by_reviewer.entry(name).or_default().push(position)
                        }
                        Some(name) => debug!("reviewer {:?} is unknown, not linking", name),
                        None => debug!("record at position {} has no reviewer", position),
                    }
                }

                by_reviewer
                    .into_values()
                    .filter(|chain| chain.len() >= 2)
                    .collect()
            }
        }
    }

    /// Set links in place.
    pub fn link(&self, records: &mut [Record]) -> Result<(), Error> {
        if records.iter().any(|r| r.id().is_none()) {
            return Err(Error::Unindexed);
        }

        let chains = self.chains(records);
        info!(
            "linking {} records in {} chains ({:?})",
            records.len(),
            chains.len(),
            self.policy
        );

        for chain in chains {
            for (prev, next) in chain.into_iter().tuple_windows() {
                let prev_id = records[prev].id().ok_or(Error::Unindexed)?;
                let next_id = records[next].id().ok_or(Error::Unindexed)?;
                records[next].set_succeeds(prev_id);
                records[prev].set_precedes(next_id);
            }
        }
        Ok(())
    }
}

impl<'a> Transform for Linker<'a> {
    fn transform_own(&self, mut records: Vec<Record>) -> Result<Vec<Record>, Error> {
        self.link(&mut records)?;
        Ok(records)
    }
}
