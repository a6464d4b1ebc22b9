/*! Dump reading utilities

The dump is read line by line. Grouping lines into records is not done here but in [crate::parsing],
since a block boundary depends on what has been read so far.
!*/
mod linereader;

pub use linereader::LineReader;
