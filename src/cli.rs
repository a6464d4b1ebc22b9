//! Command line arguments and parameters management/parsing.
use std::path::PathBuf;

use structopt::StructOpt;

use ratebeer_kg::config::{
    CalendarZone, EncodingPolicy, GraphVariant, LinkPolicy, PipelineConfig,
};
use ratebeer_kg::error::Error;

#[derive(Debug, StructOpt)]
#[structopt(
    name = "ratebeer-kg",
    about = "RateBeer reviews to knowledge-graph triples."
)]
/// Holds every command that is callable by the `ratebeer-kg` command.
pub enum RateBeerKg {
    #[structopt(about = "Generate triples from a RateBeer dump")]
    Triples(Triples),
    #[structopt(about = "Dump linked records as JSON lines")]
    Records(Records),
}

/// Options shared by every command.
#[derive(Debug, StructOpt)]
pub struct Options {
    #[structopt(
        parse(from_os_str),
        long = "config",
        short = "c",
        help = "JSON configuration file. Flags take precedence."
    )]
    pub config: Option<PathBuf>,
    #[structopt(
        long = "graph",
        possible_values = &["trimmed", "full"],
        help = "graph variant (trimmed drops beer name, brewer and ABV)"
    )]
    pub graph: Option<GraphVariant>,
    #[structopt(
        long = "exclude",
        number_of_values = 1,
        help = "beer fields to drop, overriding the graph variant's defaults"
    )]
    pub exclude: Option<Vec<String>>,
    #[structopt(
        long = "linking",
        possible_values = &["reviewer", "global"],
        help = "review chaining policy"
    )]
    pub linking: Option<LinkPolicy>,
    #[structopt(
        long = "encoding",
        possible_values = &["prefixed", "raw"],
        help = "value encoding policy"
    )]
    pub encoding: Option<EncodingPolicy>,
    #[structopt(
        long = "zone",
        possible_values = &["local", "utc"],
        help = "time zone of calendar fields"
    )]
    pub zone: Option<CalendarZone>,
}

impl Options {
    /// Build the pipeline configuration: file (or defaults), then flags.
    pub fn config(&self) -> Result<PipelineConfig, Error> {
        let mut config = match &self.config {
            Some(path) => PipelineConfig::from_path(path)?,
            None => PipelineConfig::default(),
        };

        if let Some(graph) = self.graph {
            config = config.with_graph(graph);
        }
        if let Some(exclude) = &self.exclude {
            config = config.with_excluded_beer_fields(exclude.iter().cloned());
        }
        if let Some(linking) = self.linking {
            config = config.with_linking(linking);
        }
        if let Some(encoding) = self.encoding {
            config = config.with_encoding(encoding);
        }
        if let Some(zone) = self.zone {
            config = config.with_zone(zone);
        }
        Ok(config)
    }
}

#[derive(Debug, StructOpt)]
/// Triples command and parameters.
///
/// ```sh
/// ratebeer-kg-triples 0.1.0
/// Generate triples from a RateBeer dump
///
/// USAGE:
///     ratebeer-kg triples [FLAGS] [OPTIONS] <src> <dst>
///
/// FLAGS:
///     -i, --with-ids    also write entity/relation maps and integer triples
///
/// ARGS:
///     <src>    RateBeer dump (ratebeer.txt)
///     <dst>    destination folder
/// ```
pub struct Triples {
    #[structopt(parse(from_os_str), help = "RateBeer dump (ratebeer.txt)")]
    pub src: PathBuf,
    #[structopt(parse(from_os_str), help = "destination folder")]
    pub dst: PathBuf,
    #[structopt(
        short = "i",
        long = "with-ids",
        help = "also write entity/relation maps and integer triples"
    )]
    pub with_ids: bool,
    #[structopt(flatten)]
    pub options: Options,
}

#[derive(Debug, StructOpt)]
/// Records command and parameters.
pub struct Records {
    #[structopt(parse(from_os_str), help = "RateBeer dump (ratebeer.txt)")]
    pub src: PathBuf,
    #[structopt(parse(from_os_str), help = "destination folder")]
    pub dst: PathBuf,
    #[structopt(flatten)]
    pub options: Options,
}
