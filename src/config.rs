//! Pipeline configuration.
//!
//! A [PipelineConfig] can be built in code, read from a JSON file, and then overridden by command line flags.
//!
//! ```json
//! {
//!     "graph": "trimmed",
//!     "exclude_beer_fields": ["ABV", "name"],
//!     "linking": "reviewer",
//!     "encoding": "prefixed",
//!     "zone": "utc"
//! }
//! ```
//!
//! Every key is optional.
use std::{collections::BTreeSet, fs::File, io::BufReader, path::Path, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::error::Error;
use crate::record::fields;

/// Which graph is built.
///
/// The trimmed graph drops the beer name, brewer and ABV, the full graph keeps every beer field.
/// The variant also selects the relationship vocabulary (see [crate::triples::Vocabulary]).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GraphVariant {
    #[default]
    Trimmed,
    Full,
}

impl GraphVariant {
    /// Beer fields dropped by default for this variant.
    pub fn default_exclusions(&self) -> BTreeSet<String> {
        match self {
            GraphVariant::Trimmed => [fields::ABV, fields::NAME, fields::BREWER_ID]
                .into_iter()
                .map(String::from)
                .collect(),
            GraphVariant::Full => BTreeSet::new(),
        }
    }
}

impl FromStr for GraphVariant {
    type Err = String;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "trimmed" => Ok(Self::Trimmed),
            "full" => Ok(Self::Full),
            other => Err(format!("unknown graph variant {:?} (trimmed, full)", other)),
        }
    }
}

/// How reviews are chained together.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LinkPolicy {
    /// Each reviewer's reviews are chained in chronological order.
    #[default]
    #[serde(rename = "reviewer")]
    PerReviewer,
    /// All reviews are chained in chronological order, regardless of who wrote them.
    Global,
}

impl FromStr for LinkPolicy {
    type Err = String;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "reviewer" => Ok(Self::PerReviewer),
            "global" => Ok(Self::Global),
            other => Err(format!("unknown linking policy {:?} (reviewer, global)", other)),
        }
    }
}

/// How object values are written.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EncodingPolicy {
    /// Values are prefixed by a short code derived from their field,
    /// so that equal raw strings of different fields stay different entities.
    #[default]
    Prefixed,
    /// Values are written as found in the dump.
    Raw,
}

impl FromStr for EncodingPolicy {
    type Err = String;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "prefixed" => Ok(Self::Prefixed),
            "raw" => Ok(Self::Raw),
            other => Err(format!("unknown encoding policy {:?} (prefixed, raw)", other)),
        }
    }
}

/// Time zone used to break timestamps down into calendar fields.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CalendarZone {
    #[default]
    Local,
    Utc,
}

impl FromStr for CalendarZone {
    type Err = String;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "local" => Ok(Self::Local),
            "utc" => Ok(Self::Utc),
            other => Err(format!("unknown calendar zone {:?} (local, utc)", other)),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PipelineConfig {
    pub graph: GraphVariant,
    /// Overrides the variant's default exclusion set when present.
    pub exclude_beer_fields: Option<BTreeSet<String>>,
    pub linking: LinkPolicy,
    pub encoding: EncodingPolicy,
    pub zone: CalendarZone,
}

impl PipelineConfig {
    /// Read a configuration from a JSON file.
    pub fn from_path(path: &Path) -> Result<Self, Error> {
        let reader = BufReader::new(File::open(path)?);
        Ok(serde_json::from_reader(reader)?)
    }

    /// Beer fields that are dropped during assembly.
    pub fn excluded_beer_fields(&self) -> BTreeSet<String> {
        match &self.exclude_beer_fields {
            Some(excluded) => excluded.clone(),
            None => self.graph.default_exclusions(),
        }
    }

    pub fn with_graph(mut self, graph: GraphVariant) -> Self {
        self.graph = graph;
        self
    }

    pub fn with_excluded_beer_fields<I, S>(mut self, excluded: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.exclude_beer_fields = Some(excluded.into_iter().map(Into::into).collect());
        self
    }

    pub fn with_linking(mut self, linking: LinkPolicy) -> Self {
        self.linking = linking;
        self
    }

    pub fn with_encoding(mut self, encoding: EncodingPolicy) -> Self {
        self.encoding = encoding;
        self
    }

    pub fn with_zone(mut self, zone: CalendarZone) -> Self {
        self.zone = zone;
        self
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    #[test]
    fn test_default_exclusions() {
        let config = PipelineConfig::default();
        let expected: BTreeSet<String> = ["ABV", "brewerId", "name"]
            .into_iter()
            .map(String::from)
            .collect();
        assert_eq!(config.excluded_beer_fields(), expected);

        let config = config.with_graph(GraphVariant::Full);
        assert!(config.excluded_beer_fields().is_empty());
    }

    #[test]
    fn test_override_exclusions() {
        let config = PipelineConfig::default().with_excluded_beer_fields(["ABV"]);
        assert_eq!(config.excluded_beer_fields().len(), 1);
        assert!(config.excluded_beer_fields().contains("ABV"));
    }

    #[test]
    fn test_from_json() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"{{"linking": "global", "encoding": "raw", "zone": "utc"}}"#
        )
        .unwrap();

        let config = PipelineConfig::from_path(file.path()).unwrap();
        assert_eq!(config.graph, GraphVariant::Trimmed);
        assert_eq!(config.linking, LinkPolicy::Global);
        assert_eq!(config.encoding, EncodingPolicy::Raw);
        assert_eq!(config.zone, CalendarZone::Utc);
        assert_eq!(config.exclude_beer_fields, None);
    }

    #[test]
    fn test_from_str() {
        assert_eq!("reviewer".parse(), Ok(LinkPolicy::PerReviewer));
        assert_eq!("full".parse(), Ok(GraphVariant::Full));
        assert!("sideways".parse::<EncodingPolicy>().is_err());
    }
}
