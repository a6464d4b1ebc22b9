//! Transform trait.
use crate::{error::Error, record::Record};

/// Record sequence transformation.
///
/// Takes ownership of the records and returns them, possibly reordered.
pub trait Transform {
    fn transform_own(&self, records: Vec<Record>) -> Result<Vec<Record>, Error>;
}
