/*! Triple emission.

Each linked record is flattened into triples by walking the [FIELDS] table,
then `precedes`/`succeeds` links are added.
Records are processed in the order they are given (chronological after indexing),
and a record's triples are contiguous.

Fields that are not in the table (unknown keys) are not emitted.

## Subjects

Every triple has the review id as subject, apart from `style`: style is a property of the beer,
so all reviews of a given beer point to the same `bee<beerId>` node.

## Objects

With [EncodingPolicy::Prefixed], values are prefixed by the first three letters of their field name
(`aroma: 6/10` gives `aro6/10`) so that equal values of different fields stay different entities.
Calendar fields already carry their prefix (see [crate::transformers::DatePrefixes]).
!*/
use log::{debug, log_enabled, warn, Level};

use crate::{
    config::EncodingPolicy,
    error::Error,
    parsing::Namespace,
    record::{fields, Record},
};

use super::{Relation, Triple};

/// Token prepended to a beer id to build its beer entity.
pub const BEER_ENTITY_PREFIX: &str = "bee";

/// How the object of a field is written.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValueRule {
    /// Prefixed by the field code under [EncodingPolicy::Prefixed].
    FieldCode,
    /// Written as stored in the record.
    AsIs,
    /// Emitted on the beer entity rather than on the review.
    BeerStyle,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldSpec {
    pub namespace: Namespace,
    pub name: &'static str,
    pub relation: Relation,
    pub rule: ValueRule,
}

const fn field(
    namespace: Namespace,
    name: &'static str,
    relation: Relation,
    rule: ValueRule,
) -> FieldSpec {
    FieldSpec {
        namespace,
        name,
        relation,
        rule,
    }
}

/// Emitted fields, in emission order.
pub const FIELDS: [FieldSpec; 14] = [
    field(Namespace::Beer, fields::NAME, Relation::Name, ValueRule::FieldCode),
    field(Namespace::Beer, fields::BEER_ID, Relation::BeerId, ValueRule::FieldCode),
    field(Namespace::Beer, fields::BREWER_ID, Relation::BrewerId, ValueRule::FieldCode),
    field(Namespace::Beer, fields::ABV, Relation::Abv, ValueRule::FieldCode),
    field(Namespace::Beer, fields::STYLE, Relation::Style, ValueRule::BeerStyle),
    field(Namespace::Review, fields::APPEARANCE, Relation::Appearance, ValueRule::FieldCode),
    field(Namespace::Review, fields::AROMA, Relation::Aroma, ValueRule::FieldCode),
    field(Namespace::Review, fields::PALATE, Relation::Palate, ValueRule::FieldCode),
    field(Namespace::Review, fields::TASTE, Relation::Taste, ValueRule::FieldCode),
    field(Namespace::Review, fields::OVERALL, Relation::Overall, ValueRule::FieldCode),
    field(Namespace::Review, fields::PROFILE_NAME, Relation::ProfileName, ValueRule::FieldCode),
    field(Namespace::Review, fields::YEAR, Relation::Year, ValueRule::AsIs),
    field(Namespace::Review, fields::MONTH, Relation::Month, ValueRule::AsIs),
    field(Namespace::Review, fields::DAY_OF_WEEK, Relation::DayOfWeek, ValueRule::AsIs),
];

/// Short code of a field, used as a value prefix.
pub fn field_code(name: &str) -> &str {
    name.get(..3).unwrap_or(name)
}

fn is_known(namespace: Namespace, key: &str) -> bool {
    FIELDS
        .iter()
        .any(|f| f.namespace == namespace && f.name == key)
}

/// Identifier of the entity standing for a beer.
pub fn beer_entity(beer_id: &str) -> String {
    format!("{}{}", BEER_ENTITY_PREFIX, beer_id)
}

#[derive(Debug, Clone, Copy, Default)]
pub struct Emitter {
    encoding: EncodingPolicy,
}

impl Emitter {
    pub fn new(encoding: EncodingPolicy) -> Self {
        Self { encoding }
    }

    fn object(&self, spec: &FieldSpec, value: &str) -> String {
        match (spec.rule, self.encoding) {
            (ValueRule::FieldCode, EncodingPolicy::Prefixed) => {
                format!("{}{}", field_code(spec.name), value)
            }
            _ => value.to_string(),
        }
    }

    /// Append the triples of a single record to `out`.
    pub fn emit_record(&self, record: &Record, out: &mut Vec<Triple>) -> Result<(), Error> {
        let id = record.id().ok_or(Error::Unindexed)?.to_string();

        for spec in FIELDS.iter() {
            let values = match spec.namespace {
                Namespace::Beer => record.beer(),
                Namespace::Review => record.review(),
            };
            let value = match values.get(spec.name) {
                Some(value) => value,
                None => continue,
            };

            match spec.rule {
                ValueRule::BeerStyle => match record.beer_id() {
                    Some(beer_id) => out.push(Triple::new(
                        beer_entity(beer_id),
                        spec.relation,
                        value.as_str(),
                    )),
                    None => warn!("review {} has a style but no beerId, skipping style", id),
                },
                _ => out.push(Triple::new(
                    id.as_str(),
                    spec.relation,
                    self.object(spec, value),
                )),
            }
        }

        if let Some(next) = record.precedes() {
            out.push(Triple::new(id.as_str(), Relation::Precedes, next.to_string()));
        }
        if let Some(prev) = record.succeeds() {
            out.push(Triple::new(id.as_str(), Relation::Succeeds, prev.to_string()));
        }

        if log_enabled!(Level::Debug) {
            let unknown = record
                .beer()
                .keys()
                .filter(|k| !is_known(Namespace::Beer, k))
                .chain(
                    record
                        .review()
                        .keys()
                        .filter(|k| !is_known(Namespace::Review, k)),
                )
                .collect::<Vec<_>>();
            if !unknown.is_empty() {
                debug!("review {}: not emitting unknown fields {:?}", id, unknown);
            }
        }

        Ok(())
    }

    /// Flatten every record into triples.
    ///
    /// Fails with [Error::EmptyDataset] when there is no record.
    pub fn emit(&self, records: &[Record]) -> Result<Vec<Triple>, Error> {
        if records.is_empty() {
            return Err(Error::EmptyDataset);
        }

        let mut triples = Vec::with_capacity(records.len() * (FIELDS.len() + 2));
        for record in records {
            self.emit_record(record, &mut triples)?;
        }
        Ok(triples)
    }
}
