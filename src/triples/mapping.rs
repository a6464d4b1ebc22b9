//! Integer id mapping.
//!
//! Embedding libraries want `(head, relation, tail)` integer triples.
//! Relations take their fixed [Vocabulary] id, entities get dense ids in order of first appearance
//! (subject before object), which makes the mapping reproducible for a given triple sequence.
use std::collections::HashMap;

use log::info;

use crate::error::Error;

use super::{Triple, Vocabulary};

#[derive(Debug, Clone)]
pub struct IdMapping {
    vocabulary: Vocabulary,
    entities: Vec<String>,
    entity_ids: HashMap<String, u32>,
}

impl IdMapping {
    pub fn new(vocabulary: Vocabulary) -> Self {
        Self {
            vocabulary,
            entities: Vec::new(),
            entity_ids: HashMap::new(),
        }
    }

    /// Build a mapping over `triples` and return it along with the encoded triples.
    pub fn from_triples(
        triples: &[Triple],
        vocabulary: Vocabulary,
    ) -> Result<(Self, Vec<[u32; 3]>), Error> {
        let mut mapping = Self::new(vocabulary);
        let encoded = triples
            .iter()
            .map(|t| mapping.encode(t))
            .collect::<Result<Vec<_>, Error>>()?;

        info!(
            "mapped {} triples over {} entities and {} relations",
            encoded.len(),
            mapping.len(),
            vocabulary.len()
        );
        Ok((mapping, encoded))
    }

    /// Get the id of an entity, giving it the next id if it is new.
    ///
    /// Fails once ids no longer fit in a `u32`.
    pub fn entity_id(&mut self, entity: &str) -> Result<u32, Error> {
        if let Some(id) = self.entity_ids.get(entity) {
            return Ok(*id);
        }
        let id = next_id(self.entities.len())?;
        self.entities.push(entity.to_string());
        self.entity_ids.insert(entity.to_string(), id);
        Ok(id)
    }

    /// Encode a triple, registering its entities.
    ///
    /// Fails if the relation is not part of the vocabulary.
    pub fn encode(&mut self, triple: &Triple) -> Result<[u32; 3], Error> {
        let relation = self
            .vocabulary
            .id(triple.relation)
            .ok_or_else(|| Error::UnknownRelation(triple.relation.to_string()))?;
        let head = self.entity_id(&triple.subject)?;
        let tail = self.entity_id(&triple.object)?;
        Ok([head, relation, tail])
    }

    pub fn get(&self, entity: &str) -> Option<u32> {
        self.entity_ids.get(entity).copied()
    }

    /// Entities ordered by id.
    pub fn entities(&self) -> impl Iterator<Item = (u32, &str)> {
        (0u32..)
            .zip(self.entities.iter())
            .map(|(id, e)| (id, e.as_str()))
    }

    pub fn vocabulary(&self) -> Vocabulary {
        self.vocabulary
    }

    /// Number of entities.
    pub fn len(&self) -> usize {
        self.entities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entities.is_empty()
    }
}

fn next_id(nb_entities: usize) -> Result<u32, Error> {
    u32::try_from(nb_entities)
        .map_err(|_| Error::Custom(format!("too many entities: {}", nb_entities)))
}
