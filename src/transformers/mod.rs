/*! Record transformers.

Transforms assembled records by adding calendar fields, chronological ids and chain links.

They are meant to be applied in order: [Normalizer], [Indexer], then [Linker].
!*/

mod index;
mod link;
mod normalize;
mod transform;

pub use index::Indexer;
pub use link::Linker;
pub use normalize::{calendar, CalendarDate, DatePrefixes, Normalizer};
pub use transform::Transform;
