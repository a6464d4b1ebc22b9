/*! Dump parsing

Parsing is done in two steps:

- [line::classify] turns a single line into a [line::Line], either a blank line or a `(namespace, key, value)` [line::Fact].
- [assembler::Assembler] consumes those lines in order and builds [crate::record::Record]s, along with the set of reviewers seen.
! */
pub mod assembler;
pub mod line;

pub use assembler::{Assembled, Assembler};
pub use line::{classify, Fact, Line, Namespace};
