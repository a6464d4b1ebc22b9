//! # ratebeer-kg
//!
//! Turns a RateBeer review dump into knowledge-graph triples, ready to be fed to an embedding library.
//!
//! Reviews are ordered by time, given a chronological id, and each reviewer's reviews are chained
//! with `precedes`/`succeeds` relations.
//!
//! ## Getting started
//!
//! ```sh
//! ratebeer-kg 0.1.0
//! RateBeer reviews to knowledge-graph triples.
//!
//! USAGE:
//!     ratebeer-kg <SUBCOMMAND>
//!
//! FLAGS:
//!     -h, --help       Prints help information
//!     -V, --version    Prints version information
//!
//! SUBCOMMANDS:
//!     help       Prints this message or the help of the given subcommand(s)
//!     records    Dump linked records as JSON lines
//!     triples    Generate triples from a RateBeer dump
//! ```
//!
//! Logging is controlled by `RUST_LOG` (e.g. `RUST_LOG=info`).

use ratebeer_kg::error;
use ratebeer_kg::pipelines::{self, Pipeline};
use structopt::StructOpt;

#[macro_use]
extern crate log;

mod cli;

fn main() -> Result<(), error::Error> {
    env_logger::init();

    let opt = cli::RateBeerKg::from_args();
    debug!("cli args\n{:#?}", opt);

    match opt {
        cli::RateBeerKg::Triples(t) => {
            let config = t.options.config()?;
            debug!("config {:?}", config);
            let p = pipelines::Triples::new(t.src, t.dst, config).with_ids(t.with_ids);
            let summary = p.run()?;
            info!(
                "{} records from {} reviewers gave {} triples",
                summary.nb_records, summary.nb_reviewers, summary.nb_triples
            );
            if let Some(nb_entities) = summary.nb_entities {
                info!("{} distinct entities", nb_entities);
            }
        }

        cli::RateBeerKg::Records(r) => {
            let config = r.options.config()?;
            let p = pipelines::Records::new(r.src, r.dst, config);
            let nb_records = p.run()?;
            info!("{} records written", nb_records);
        }
    };
    Ok(())
}
