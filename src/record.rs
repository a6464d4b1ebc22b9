/*! Review records

A [Record] is the structured form of one block of the dump: a `beer` mapping holding product attributes
and a `review` mapping holding rating attributes.

Records get progressively enriched by the pipeline:
a chronological `id` is set by [crate::transformers::Indexer],
`precedes`/`succeeds` are set by [crate::transformers::Linker].
!*/
use std::collections::{btree_set, BTreeMap, BTreeSet};

use serde::{Deserialize, Serialize};

use crate::error::Error;

/// Known field names.
pub mod fields {
    pub const NAME: &str = "name";
    pub const BEER_ID: &str = "beerId";
    pub const BREWER_ID: &str = "brewerId";
    pub const ABV: &str = "ABV";
    pub const STYLE: &str = "style";

    pub const APPEARANCE: &str = "appearance";
    pub const AROMA: &str = "aroma";
    pub const PALATE: &str = "palate";
    pub const TASTE: &str = "taste";
    pub const OVERALL: &str = "overall";
    pub const TIME: &str = "time";
    pub const PROFILE_NAME: &str = "profileName";
    pub const TEXT: &str = "text";

    pub const YEAR: &str = "Year";
    pub const MONTH: &str = "Month";
    pub const DAY_OF_WEEK: &str = "DayOfWeek";
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    beer: BTreeMap<String, String>,
    review: BTreeMap<String, String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    id: Option<usize>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    precedes: Option<usize>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    succeeds: Option<usize>,
}

impl Record {
    pub fn new() -> Self {
        Self::default()
    }

    /// A record is complete (and may be emitted) once it holds at least one review field.
    pub fn is_complete(&self) -> bool {
        !self.review.is_empty()
    }

    pub fn beer(&self) -> &BTreeMap<String, String> {
        &self.beer
    }

    pub fn review(&self) -> &BTreeMap<String, String> {
        &self.review
    }

    /// Set a beer field. Last write wins.
    pub fn set_beer(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.beer.insert(key.into(), value.into());
    }

    /// Set a review field. Last write wins.
    pub fn set_review(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.review.insert(key.into(), value.into());
    }

    pub fn remove_review(&mut self, key: &str) -> Option<String> {
        self.review.remove(key)
    }

    pub fn profile_name(&self) -> Option<&str> {
        self.review.get(fields::PROFILE_NAME).map(String::as_str)
    }

    pub fn beer_id(&self) -> Option<&str> {
        self.beer.get(fields::BEER_ID).map(String::as_str)
    }

    /// Parse the raw `review/time` value.
    ///
    /// `position` is only used to build the error.
    pub fn timestamp(&self, position: usize) -> Result<i64, Error> {
        let raw = self
            .review
            .get(fields::TIME)
            .ok_or(Error::MissingTimestamp { position })?;
        raw.trim()
            .parse::<i64>()
            .map_err(|_| Error::InvalidTimestamp {
                position,
                value: raw.clone(),
            })
    }

    pub fn id(&self) -> Option<usize> {
        self.id
    }

    pub(crate) fn set_id(&mut self, id: usize) {
        self.id = Some(id);
    }

    /// id of the next review in the chain, if any.
    pub fn precedes(&self) -> Option<usize> {
        self.precedes
    }

    /// id of the previous review in the chain, if any.
    pub fn succeeds(&self) -> Option<usize> {
        self.succeeds
    }

    pub(crate) fn set_precedes(&mut self, id: usize) {
        self.precedes = Some(id);
    }

    pub(crate) fn set_succeeds(&mut self, id: usize) {
        self.succeeds = Some(id);
    }
}

/// Set of reviewer names seen while assembling records.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Reviewers(BTreeSet<String>);

impl Reviewers {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns `true` if the reviewer was not known yet.
    pub fn insert(&mut self, name: impl Into<String>) -> bool {
        self.0.insert(name.into())
    }

    pub fn contains(&self, name: &str) -> bool {
        self.0.contains(name)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> btree_set::Iter<'_, String> {
        self.0.iter()
    }

    /// Merge another set into this one.
    ///
    /// Sets built on separate parts of a dump have to be merged before linking.
    pub fn merge(&mut self, other: Reviewers) {
        self.0.extend(other.0);
    }
}

impl<S: Into<String>> FromIterator<S> for Reviewers {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self(iter.into_iter().map(Into::into).collect())
    }
}
