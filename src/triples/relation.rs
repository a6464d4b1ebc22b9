//! Relationship vocabulary.
//!
//! Relation ids are given by their position in a fixed table, one per [GraphVariant].
//! They are consumed by trained models, so tables must never be reordered: new relations go at the end.
use std::{collections::HashMap, fmt, str::FromStr};

use lazy_static::lazy_static;

use crate::config::GraphVariant;
use crate::record::fields;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Relation {
    Precedes,
    Succeeds,
    Appearance,
    Aroma,
    Palate,
    Taste,
    Overall,
    ProfileName,
    Name,
    BeerId,
    BrewerId,
    Abv,
    Style,
    Year,
    DayOfWeek,
    Month,
}

impl Relation {
    /// Name as found in the dump (and written in triples).
    pub fn as_str(&self) -> &'static str {
        match self {
            Relation::Precedes => "precedes",
            Relation::Succeeds => "succeeds",
            Relation::Appearance => fields::APPEARANCE,
            Relation::Aroma => fields::AROMA,
            Relation::Palate => fields::PALATE,
            Relation::Taste => fields::TASTE,
            Relation::Overall => fields::OVERALL,
            Relation::ProfileName => fields::PROFILE_NAME,
            Relation::Name => fields::NAME,
            Relation::BeerId => fields::BEER_ID,
            Relation::BrewerId => fields::BREWER_ID,
            Relation::Abv => fields::ABV,
            Relation::Style => fields::STYLE,
            Relation::Year => fields::YEAR,
            Relation::DayOfWeek => fields::DAY_OF_WEEK,
            Relation::Month => fields::MONTH,
        }
    }
}

impl fmt::Display for Relation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Relation {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        FULL
            .iter()
            .find(|r| r.as_str() == s)
            .copied()
            .ok_or_else(|| format!("unknown relation {:?}", s))
    }
}

/// Relations of the trimmed graph (no beer name, brewer or ABV).
pub const TRIMMED: [Relation; 13] = [
    Relation::Precedes,
    Relation::Succeeds,
    Relation::Appearance,
    Relation::Aroma,
    Relation::Palate,
    Relation::Taste,
    Relation::Overall,
    Relation::ProfileName,
    Relation::BeerId,
    Relation::Style,
    Relation::Year,
    Relation::DayOfWeek,
    Relation::Month,
];

/// Relations of the full graph.
pub const FULL: [Relation; 16] = [
    Relation::Precedes,
    Relation::Succeeds,
    Relation::Appearance,
    Relation::Aroma,
    Relation::Palate,
    Relation::Taste,
    Relation::Overall,
    Relation::ProfileName,
    Relation::Name,
    Relation::BeerId,
    Relation::BrewerId,
    Relation::Abv,
    Relation::Style,
    Relation::Year,
    Relation::DayOfWeek,
    Relation::Month,
];

lazy_static! {
    static ref TRIMMED_IDS: HashMap<Relation, u32> = table_ids(&TRIMMED);
    static ref FULL_IDS: HashMap<Relation, u32> = table_ids(&FULL);
}

fn table_ids(table: &[Relation]) -> HashMap<Relation, u32> {
    table
        .iter()
        .enumerate()
        .map(|(id, relation)| (*relation, id as u32))
        .collect()
}

/// Fixed relation numbering of a graph variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Vocabulary {
    graph: GraphVariant,
}

impl Vocabulary {
    pub fn new(graph: GraphVariant) -> Self {
        Self { graph }
    }

    /// Relations, ordered by id.
    pub fn relations(&self) -> &'static [Relation] {
        match self.graph {
            GraphVariant::Trimmed => &TRIMMED,
            GraphVariant::Full => &FULL,
        }
    }

    pub fn id(&self, relation: Relation) -> Option<u32> {
        let ids: &HashMap<Relation, u32> = match self.graph {
            GraphVariant::Trimmed => &*TRIMMED_IDS,
            GraphVariant::Full => &*FULL_IDS,
        };
        ids.get(&relation).copied()
    }

    pub fn len(&self) -> usize {
        self.relations().len()
    }

    pub fn is_empty(&self) -> bool {
        self.relations().is_empty()
    }
}
