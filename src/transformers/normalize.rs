/*! Calendar fields derivation.

Each record's `review/time` (seconds since the epoch) is broken down into
`Year`, `Month` (1-12) and `DayOfWeek` (0 is Monday, 6 is Sunday) review fields.

`review/time` itself is kept: the [super::Indexer] needs it to order records, and removes it.
!*/
use chrono::{DateTime, Datelike, Local, Utc};

use crate::{
    config::{CalendarZone, EncodingPolicy},
    error::Error,
    record::{fields, Record},
};

use super::Transform;

/// Calendar breakdown of a timestamp.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CalendarDate {
    pub year: i32,
    pub month: u32,
    pub day_of_week: u32,
}

/// Break `timestamp` down in the provided zone.
///
/// Returns [None] if the timestamp is out of range.
pub fn calendar(timestamp: i64, zone: CalendarZone) -> Option<CalendarDate> {
    let utc = DateTime::<Utc>::from_timestamp(timestamp, 0)?;
    let date = match zone {
        CalendarZone::Utc => utc.date_naive(),
        CalendarZone::Local => utc.with_timezone(&Local).date_naive(),
    };

    Some(CalendarDate {
        year: date.year(),
        month: date.month(),
        day_of_week: date.weekday().num_days_from_monday(),
    })
}

/// Prefixes put in front of derived calendar values.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DatePrefixes {
    pub year: &'static str,
    pub month: &'static str,
    pub day_of_week: &'static str,
}

impl DatePrefixes {
    pub const PREFIXED: DatePrefixes = DatePrefixes {
        year: "yr_",
        month: "mon_",
        day_of_week: "wk_",
    };

    pub const NONE: DatePrefixes = DatePrefixes {
        year: "",
        month: "",
        day_of_week: "",
    };
}

impl From<EncodingPolicy> for DatePrefixes {
    fn from(encoding: EncodingPolicy) -> Self {
        match encoding {
            EncodingPolicy::Prefixed => Self::PREFIXED,
            EncodingPolicy::Raw => Self::NONE,
        }
    }
}

#[derive(Debug, Clone)]
pub struct Normalizer {
    zone: CalendarZone,
    prefixes: DatePrefixes,
}

impl Normalizer {
    pub fn new(zone: CalendarZone, prefixes: DatePrefixes) -> Self {
        Self { zone, prefixes }
    }

    /// Add calendar fields to a single record.
    ///
    /// `position` is the record's position in file order, used for error reporting.
    pub fn normalize(&self, record: &mut Record, position: usize) -> Result<(), Error> {
        let timestamp = record.timestamp(position)?;
        let date = calendar(timestamp, self.zone).ok_or_else(|| Error::InvalidTimestamp {
            position,
            value: timestamp.to_string(),
        })?;

        record.set_review(fields::YEAR, format!("{}{}", self.prefixes.year, date.year));
        record.set_review(fields::MONTH, format!("{}{}", self.prefixes.month, date.month));
        record.set_review(
            fields::DAY_OF_WEEK,
            format!("{}{}", self.prefixes.day_of_week, date.day_of_week),
        );
        Ok(())
    }
}

impl Default for Normalizer {
    fn default() -> Self {
        Self::new(CalendarZone::default(), DatePrefixes::PREFIXED)
    }
}

impl Transform for Normalizer {
    fn transform_own(&self, mut records: Vec<Record>) -> Result<Vec<Record>, Error> {
        for (position, record) in records.iter_mut().enumerate() {
            self.normalize(record, position)?;
        }
        Ok(records)
    }
}
