//! Record assembly.
//!
//! The assembler keeps a single record under construction.
//! Facts are added to it until a blank line is met, at which point the record is emitted
//! if it holds at least one review field. Blank lines met while no review field has been read
//! are stray whitespace and do not end the record.
use std::collections::BTreeSet;
use std::io::BufRead;

use log::debug;

use crate::error::Error;
use crate::io::LineReader;
use crate::record::{fields, Record, Reviewers};

use super::line::{classify, Fact, Line, Namespace};

/// Result of an assembly: records in file order, and every reviewer name that was read.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Assembled {
    pub records: Vec<Record>,
    pub reviewers: Reviewers,
}

#[derive(Debug, Default)]
pub struct Assembler {
    excluded: BTreeSet<String>,
    current: Record,
    records: Vec<Record>,
    reviewers: Reviewers,
}

impl Assembler {
    /// `excluded` holds the beer keys that are dropped.
    pub fn new(excluded: BTreeSet<String>) -> Self {
        Self {
            excluded,
            ..Default::default()
        }
    }

    /// Classify then consume a raw line.
    pub fn push_line(&mut self, raw: &str) {
        self.push(classify(raw));
    }

    pub fn push(&mut self, line: Line<'_>) {
        match line {
            Line::Blank => {
                if self.current.is_complete() {
                    let record = std::mem::take(&mut self.current);
                    self.records.push(record);
                }
            }
            Line::Fact(fact) => self.add_fact(fact),
        }
    }

    fn add_fact(&mut self, fact: Fact<'_>) {
        match fact.namespace {
            Namespace::Beer => {
                if self.excluded.contains(fact.key) {
                    return;
                }
                self.current.set_beer(fact.key, fact.value);
            }
            Namespace::Review => {
                // review bodies are not part of the graph
                if fact.key == fields::TEXT {
                    return;
                }
                if fact.key == fields::PROFILE_NAME && self.reviewers.insert(fact.value) {
                    debug!("new reviewer {:?}", fact.value);
                }
                self.current.set_review(fact.key, fact.value);
            }
        }
    }

    /// Emit the last record if it is complete, and return everything.
    pub fn finish(mut self) -> Assembled {
        if self.current.is_complete() {
            let record = std::mem::take(&mut self.current);
            self.records.push(record);
        }
        Assembled {
            records: self.records,
            reviewers: self.reviewers,
        }
    }

    /// Consume every line of an in-memory dump.
    pub fn assemble<I, S>(mut self, lines: I) -> Assembled
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        for line in lines {
            self.push_line(line.as_ref());
        }
        self.finish()
    }

    /// Consume every line of a reader. Read errors are propagated.
    pub fn assemble_reader<R: BufRead>(mut self, reader: LineReader<R>) -> Result<Assembled, Error> {
        for line in reader {
            self.push_line(&line?);
        }
        Ok(self.finish())
    }
}
