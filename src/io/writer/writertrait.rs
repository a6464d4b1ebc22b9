use crate::error::Error;

/// Sink for pipeline output.
pub trait WriterTrait {
    type Item;

    fn write(&mut self, vals: &[Self::Item]) -> Result<(), Error>;
    fn write_single(&mut self, val: &Self::Item) -> Result<(), Error>;
    fn flush(&mut self) -> Result<(), Error>;
}
