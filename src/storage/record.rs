//! Wide-Column Records
//!
//! A `Record` is one stored row: a row key plus column families, each holding
//! `qualifier -> bytes` cells. Cells are raw bytes the way a wide-column store
//! hands them out; the typed accessors decode them as UTF-8 text and return
//! `None` for absent or malformed cells so callers can pick their own defaults.

use std::borrow::Cow;
use std::collections::BTreeMap;

/// Column family holding question attributes.
pub const QUESTION_FAMILY: &str = "q";
/// Column family holding the denormalized per-answer columns.
pub const ANSWER_FAMILY: &str = "a";
/// Column family holding trend counters.
pub const TREND_FAMILY: &str = "t";

/// Answers are denormalized into numbered slots `1..=MAX_ANSWERS_PER_QUESTION`.
pub const MAX_ANSWERS_PER_QUESTION: usize = 10;

/// Qualifiers of one answer slot in the answer family.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnswerColumns {
    pub id: String,
    pub body: String,
    pub score: String,
    pub is_accepted: String,
    pub owner_reputation: String,
}

impl AnswerColumns {
    /// `slot` is 1-based.
    pub fn for_slot(slot: usize) -> Self {
        Self {
            id: format!("a{}_id", slot),
            body: format!("a{}_body", slot),
            score: format!("a{}_score", slot),
            is_accepted: format!("a{}_is_accepted", slot),
            owner_reputation: format!("a{}_owner_reputation", slot),
        }
    }
}

/// Qualifier of the 1-based trend counter `index`.
pub fn trend_column(index: usize) -> String {
    format!("p{}", index)
}

/// Row key of a tag's counters for one period.
pub fn trend_row_key(tag: &str, period: &str) -> String {
    format!("{}_{}", tag, period)
}

/// Trend rows live in a sibling table of the question table.
pub fn trends_table(base: &str) -> String {
    format!("{}_trends", base)
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Record {
    key: String,
    families: BTreeMap<String, BTreeMap<String, Vec<u8>>>,
}

impl Record {
    pub fn new(key: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            families: BTreeMap::new(),
        }
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    /// Builder-style cell write, used by fixtures and tests.
    pub fn with(
        mut self,
        family: &str,
        qualifier: impl Into<String>,
        value: impl Into<Vec<u8>>,
    ) -> Self {
        self.set(family, qualifier, value);
        self
    }

    pub fn set(&mut self, family: &str, qualifier: impl Into<String>, value: impl Into<Vec<u8>>) {
        self.families
            .entry(family.to_string())
            .or_default()
            .insert(qualifier.into(), value.into());
    }

    pub fn value(&self, family: &str, qualifier: &str) -> Option<&[u8]> {
        self.families
            .get(family)
            .and_then(|columns| columns.get(qualifier))
            .map(Vec::as_slice)
    }

    pub fn has_column(&self, family: &str, qualifier: &str) -> bool {
        self.value(family, qualifier).is_some()
    }

    /// Cell decoded as text. Invalid UTF-8 is replaced rather than rejected.
    pub fn text(&self, family: &str, qualifier: &str) -> Option<Cow<'_, str>> {
        self.value(family, qualifier)
            .map(|bytes| String::from_utf8_lossy(bytes))
    }

    pub fn int(&self, family: &str, qualifier: &str) -> Option<i64> {
        self.text(family, qualifier)?.trim().parse().ok()
    }

    /// Accepts `true`/`false` in any case and `1`/`0`.
    pub fn boolean(&self, family: &str, qualifier: &str) -> Option<bool> {
        let text = self.text(family, qualifier)?;
        let text = text.trim();
        if text.eq_ignore_ascii_case("true") || text == "1" {
            Some(true)
        } else if text.eq_ignore_ascii_case("false") || text == "0" {
            Some(false)
        } else {
            None
        }
    }

    pub fn column_count(&self) -> usize {
        self.families.values().map(BTreeMap::len).sum()
    }
}
