//! Line classification.
//!
//! Non-blank lines have the form `<namespace>/<key>: <value>`.
//! Lines starting with `beer` belong to the beer namespace, every other line to the review one.
//!
//! Values can contain colons (`review/text: UPDATED: FEB 19, 2003`), so only the first one splits.
//! Malformed lines are not rejected: a line without a colon yields the whole line as key and an empty value.

/// Attribute group a line belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Namespace {
    Beer,
    Review,
}

impl Namespace {
    pub fn as_str(&self) -> &'static str {
        match self {
            Namespace::Beer => "beer",
            Namespace::Review => "review",
        }
    }

    fn prefix(&self) -> &'static str {
        match self {
            Namespace::Beer => "beer/",
            Namespace::Review => "review/",
        }
    }
}

/// A `(namespace, key, value)` triple borrowed from a line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Fact<'a> {
    pub namespace: Namespace,
    pub key: &'a str,
    pub value: &'a str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Line<'a> {
    /// Potential record boundary.
    Blank,
    Fact(Fact<'a>),
}

/// Classify a raw line. Surrounding whitespace is ignored.
pub fn classify(raw: &str) -> Line<'_> {
    let line = raw.trim();
    if line.is_empty() {
        return Line::Blank;
    }

    let namespace = if line.starts_with("beer") {
        Namespace::Beer
    } else {
        Namespace::Review
    };

    let stripped = line.strip_prefix(namespace.prefix()).unwrap_or(line);
    let (key, value) = match stripped.split_once(':') {
        Some((key, value)) => (key, value.trim_start()),
        None => (stripped, ""),
    };

    Line::Fact(Fact {
        namespace,
        key,
        value,
    })
}
