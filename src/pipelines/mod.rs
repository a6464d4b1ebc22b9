//! Pipelines.
//!
//! [RateBeerLoader] turns a dump into a linked [Dataset].
//! [Triples] and [Records] are the batch pipelines run from the command line,
//! writing the dataset as triples or as JSON records.
//! Both implement the light [pipeline::Pipeline] trait.
mod loader;
#[allow(clippy::module_inception)]
pub mod pipeline;
mod records;
mod triples;

pub use loader::{Dataset, RateBeerLoader};
pub use pipeline::Pipeline;
pub use records::Records;
pub use triples::{Triples, TriplesSummary};
