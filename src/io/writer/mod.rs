/*!
# Graph writing

- [TripleWriter] writes labeled triples as tab-separated values, one triple per line, no header and no quoting.
- [write_id_mapping] writes the integer view of the graph (entity and relation maps, and id triples).
- [RecordWriter] writes linked records as JSON lines, mostly for inspection.

Writers implement [WriterTrait].
!*/
mod jsonl;
mod tsv;
mod writertrait;

pub use jsonl::RecordWriter;
pub use tsv::{write_id_mapping, TripleWriter};
pub use writertrait::WriterTrait;
