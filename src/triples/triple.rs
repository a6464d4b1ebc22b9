use super::Relation;

/// A (subject, relation, object) edge of the review graph.
///
/// Subjects are review ids, apart from `style` edges whose subject is a beer entity.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Triple {
    pub subject: String,
    pub relation: Relation,
    pub object: String,
}

impl Triple {
    pub fn new(subject: impl Into<String>, relation: Relation, object: impl Into<String>) -> Self {
        Self {
            subject: subject.into(),
            relation,
            object: object.into(),
        }
    }

    /// Borrowed `(subject, relation, object)` view.
    pub fn as_tuple(&self) -> (&str, &'static str, &str) {
        (&self.subject, self.relation.as_str(), &self.object)
    }
}
