//! Record to Question mapping.
//!
//! Malformed cells never fail a scan: numbers fall back to 0, flags to
//! `false`, and unparseable creation dates to the current local time. A row
//! without a title is not a question and maps to `None`.

use super::types::{Answer, Question};
use crate::storage::record::{
    ANSWER_FAMILY, AnswerColumns, MAX_ANSWERS_PER_QUESTION, QUESTION_FAMILY, Record,
};

use chrono::{DateTime, Local, NaiveDateTime};

pub fn question_from_record(record: &Record) -> Option<Question> {
    let title = record.text(QUESTION_FAMILY, "title")?.into_owned();

    let body = record
        .text(QUESTION_FAMILY, "body")
        .map(|body| body.into_owned())
        .unwrap_or_default();

    let creation_date = match record.text(QUESTION_FAMILY, "creation_date") {
        Some(raw) => parse_creation_date(&raw).unwrap_or_else(|| {
            tracing::warn!(
                "Row {}: unparseable creation_date {:?}, using current time",
                record.key(),
                raw
            );
            Local::now().naive_local()
        }),
        None => Local::now().naive_local(),
    };

    let tags = record
        .text(QUESTION_FAMILY, "tags")
        .map(|raw| split_tags(&raw))
        .unwrap_or_default();

    Some(Question {
        id: record.key().to_string(),
        title,
        body,
        creation_date,
        score: record.int(QUESTION_FAMILY, "score").unwrap_or(0),
        owner_reputation: record.int(QUESTION_FAMILY, "owner_reputation").unwrap_or(0),
        tags,
        answers: answers_from_record(record),
    })
}

/// Decodes answer slots `1..=MAX_ANSWERS_PER_QUESTION`, skipping empty slots.
pub fn answers_from_record(record: &Record) -> Vec<Answer> {
    let mut answers = Vec::new();

    for slot in 1..=MAX_ANSWERS_PER_QUESTION {
        let columns = AnswerColumns::for_slot(slot);
        let Some(id) = record.text(ANSWER_FAMILY, &columns.id) else {
            continue;
        };

        answers.push(Answer {
            id: id.into_owned(),
            body: record
                .text(ANSWER_FAMILY, &columns.body)
                .map(|body| body.into_owned())
                .unwrap_or_default(),
            score: record.int(ANSWER_FAMILY, &columns.score).unwrap_or(0),
            is_accepted: record
                .boolean(ANSWER_FAMILY, &columns.is_accepted)
                .unwrap_or(false),
            owner_reputation: record
                .int(ANSWER_FAMILY, &columns.owner_reputation)
                .unwrap_or(0),
        });
    }

    answers
}

/// ISO-8601 date-time, with or without a UTC offset. Offsets are converted to
/// local time.
pub fn parse_creation_date(raw: &str) -> Option<NaiveDateTime> {
    let raw = raw.trim();
    NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f")
        .ok()
        .or_else(|| {
            DateTime::parse_from_rfc3339(raw)
                .ok()
                .map(|dt| dt.with_timezone(&Local).naive_local())
        })
}

/// Tags are kept exactly as stored; only empty entries are dropped.
fn split_tags(raw: &str) -> Vec<String> {
    raw.split(',')
        .filter(|tag| !tag.is_empty())
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Datelike, Timelike};

    #[test]
    fn test_parse_creation_date_formats() {
        let plain = parse_creation_date("2023-04-05T06:07:08").unwrap();
        assert_eq!((plain.year(), plain.month(), plain.day()), (2023, 4, 5));
        assert_eq!((plain.hour(), plain.minute(), plain.second()), (6, 7, 8));

        assert!(parse_creation_date("2023-04-05T06:07:08.123").is_some());
        assert!(parse_creation_date("2023-04-05T06:07:08Z").is_some());
        assert!(parse_creation_date("2023-04-05T06:07:08+02:00").is_some());
        assert!(parse_creation_date("1654012800").is_none());
        assert!(parse_creation_date("").is_none());
    }

    #[test]
    fn test_split_tags_keeps_stored_text() {
        assert_eq!(split_tags("rust,tokio,,"), vec!["rust", "tokio"]);
        assert_eq!(split_tags("a, b"), vec!["a", " b"]);
        assert!(split_tags("").is_empty());
    }
}
