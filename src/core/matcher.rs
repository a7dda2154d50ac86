//! Name matching for student search.
//!
//! A one-character query is an initial: it matches when either the first or
//! the last name starts with it. Longer queries match anywhere in the full
//! name, literally by default or as a regular expression in pattern mode.
//! All comparisons are case-sensitive.

use super::entry::{Collection, Entry, StudentName};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// How multi-character queries are interpreted.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SearchMode {
    /// Plain substring search; special characters have no meaning.
    #[default]
    Literal,
    /// The query is compiled as a regular expression.
    Pattern,
}

impl fmt::Display for SearchMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SearchMode::Literal => write!(f, "literal"),
            SearchMode::Pattern => write!(f, "pattern"),
        }
    }
}

impl FromStr for SearchMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "literal" => Ok(SearchMode::Literal),
            "pattern" => Ok(SearchMode::Pattern),
            other => Err(format!(
                "unknown search mode '{}' (expected 'literal' or 'pattern')",
                other
            )),
        }
    }
}

/// A compiled search query.
#[derive(Debug, Clone)]
pub enum QueryMatcher {
    Initial(char),
    Contains(String),
    Pattern(Regex),
}

impl QueryMatcher {
    /// Compile `query` for the given mode.
    ///
    /// Surrounding whitespace is ignored. Returns `Ok(None)` for a blank
    /// query and `Err` when pattern mode is given an invalid expression.
    pub fn compile(query: &str, mode: SearchMode) -> Result<Option<Self>, regex::Error> {
        let query = query.trim();
        let mut chars = query.chars();

        match (chars.next(), chars.next()) {
            (None, _) => Ok(None),
            (Some(initial), None) => Ok(Some(QueryMatcher::Initial(initial))),
            _ => match mode {
                SearchMode::Literal => Ok(Some(QueryMatcher::Contains(query.to_string()))),
                SearchMode::Pattern => Regex::new(query).map(|re| Some(QueryMatcher::Pattern(re))),
            },
        }
    }

    pub fn matches(&self, name: &StudentName<'_>) -> bool {
        match self {
            QueryMatcher::Initial(c) => name.first.starts_with(*c) || name.last.starts_with(*c),
            QueryMatcher::Contains(needle) => name.full.contains(needle.as_str()),
            QueryMatcher::Pattern(re) => re.is_match(name.full),
        }
    }

    /// Entries without a parsable name never match.
    pub fn matches_entry(&self, entry: &Entry) -> bool {
        entry
            .student_name()
            .is_some_and(|name| self.matches(&name))
    }

    /// Indices of matching entries, in collection order.
    pub fn filter(&self, collection: &Collection) -> Vec<usize> {
        collection
            .entries()
            .iter()
            .enumerate()
            .filter(|(_, entry)| self.matches_entry(entry))
            .map(|(index, _)| index)
            .collect()
    }
}
