//! Scan Predicates
//!
//! The filter tree a scan evaluates against each stored row. It mirrors the
//! column-value filters of a wide-column store: a single-column substring
//! comparison that fails when the column is missing, a column presence check,
//! and an AND-list that only passes when every child passes.

use super::record::Record;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Predicate {
    /// Passes every record.
    MatchAll,
    /// The cell at `family:qualifier` contains `needle` as a case-sensitive
    /// substring. An absent cell fails.
    ColumnContains {
        family: String,
        qualifier: String,
        needle: String,
    },
    /// The cell at `family:qualifier` exists, whatever its value.
    ColumnPresent { family: String, qualifier: String },
    /// Passes when every child passes. An empty list passes everything.
    All(Vec<Predicate>),
}

impl Predicate {
    pub fn column_contains(family: &str, qualifier: &str, needle: &str) -> Self {
        Self::ColumnContains {
            family: family.to_string(),
            qualifier: qualifier.to_string(),
            needle: needle.to_string(),
        }
    }

    pub fn column_present(family: &str, qualifier: &str) -> Self {
        Self::ColumnPresent {
            family: family.to_string(),
            qualifier: qualifier.to_string(),
        }
    }

    pub fn matches(&self, record: &Record) -> bool {
        match self {
            Self::MatchAll => true,
            Self::ColumnContains {
                family,
                qualifier,
                needle,
            } => record
                .text(family, qualifier)
                .is_some_and(|value| value.contains(needle.as_str())),
            Self::ColumnPresent { family, qualifier } => record.has_column(family, qualifier),
            Self::All(children) => children.iter().all(|child| child.matches(record)),
        }
    }

    /// Number of leaf conditions in the tree.
    pub fn condition_count(&self) -> usize {
        match self {
            Self::MatchAll => 0,
            Self::ColumnContains { .. } | Self::ColumnPresent { .. } => 1,
            Self::All(children) => children.iter().map(Predicate::condition_count).sum(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::record::QUESTION_FAMILY;

    fn titled(title: &str) -> Record {
        Record::new("1").with(QUESTION_FAMILY, "title", title)
    }

    #[test]
    fn test_column_contains_is_case_sensitive() {
        let predicate = Predicate::column_contains(QUESTION_FAMILY, "title", "Rust");

        assert!(predicate.matches(&titled("Learning Rust lifetimes")));
        assert!(!predicate.matches(&titled("learning rust lifetimes")));
    }

    #[test]
    fn test_missing_column_fails() {
        let predicate = Predicate::column_contains(QUESTION_FAMILY, "tags", "");

        assert!(!predicate.matches(&titled("anything")));
    }

    #[test]
    fn test_column_present_ignores_value() {
        let predicate = Predicate::column_present(QUESTION_FAMILY, "title");

        assert!(predicate.matches(&titled("")));
        assert!(predicate.matches(&titled("anything")));
        assert!(!predicate.matches(&Record::new("bare").with(QUESTION_FAMILY, "body", "x")));
        assert_eq!(predicate.condition_count(), 1);
    }

    #[test]
    fn test_empty_and_list_matches_everything() {
        assert!(Predicate::All(vec![]).matches(&Record::new("empty")));
        assert!(Predicate::MatchAll.matches(&Record::new("empty")));
    }

    #[test]
    fn test_and_list_requires_all_children() {
        let predicate = Predicate::All(vec![
            Predicate::column_contains(QUESTION_FAMILY, "title", "cat"),
            Predicate::column_contains(QUESTION_FAMILY, "title", "dog"),
        ]);

        assert!(predicate.matches(&titled("cat and dog")));
        assert!(!predicate.matches(&titled("cat only")));
        assert_eq!(predicate.condition_count(), 2);
    }
}
