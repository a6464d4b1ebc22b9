/*!
# IO utilities

Reading of RateBeer dumps and writing of the generated graph.

Reading is line oriented and tolerant to invalid UTF-8, writing is done in tab-separated files
(and JSON lines for inspection of the linked records).
!*/
pub mod reader;
pub mod writer;

pub use reader::LineReader;
pub use writer::{RecordWriter, TripleWriter, WriterTrait};
