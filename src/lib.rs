pub mod config;
pub mod error;
pub mod io;
pub mod parsing;
pub mod pipelines;
pub mod record;
pub mod transformers;
pub mod triples;
