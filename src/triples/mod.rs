/*! Knowledge-graph triples

- [relation] holds the closed relationship vocabulary and its fixed numbering,
- [emitter] flattens linked records into [Triple]s,
- [mapping] maps labeled triples to integer ids for embedding libraries.
!*/
pub mod emitter;
pub mod mapping;
pub mod relation;
mod triple;

pub use emitter::{Emitter, FieldSpec, ValueRule, FIELDS};
pub use mapping::IdMapping;
pub use relation::{Relation, Vocabulary};
pub use triple::Triple;
