//! Store Fixtures
//!
//! JSON seed data for the in-memory store. Questions and trend counters are
//! encoded into the same column layout the services decode, so a fixture file
//! behaves exactly like rows written by the upstream ingestion pipeline.

use super::memory::MemoryStore;
use super::record::{
    ANSWER_FAMILY, AnswerColumns, MAX_ANSWERS_PER_QUESTION, QUESTION_FAMILY, Record, TREND_FAMILY,
    trend_column, trend_row_key, trends_table,
};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Fixture {
    #[serde(default)]
    pub questions: Vec<QuestionFixture>,
    #[serde(default)]
    pub trends: Vec<TrendFixture>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct QuestionFixture {
    pub id: String,
    pub title: Option<String>,
    #[serde(default)]
    pub body: String,
    /// ISO-8601 date-time text, stored verbatim.
    pub creation_date: Option<String>,
    #[serde(default)]
    pub score: i64,
    #[serde(default)]
    pub owner_reputation: i64,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub answers: Vec<AnswerFixture>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AnswerFixture {
    pub id: String,
    #[serde(default)]
    pub body: String,
    #[serde(default)]
    pub score: i64,
    #[serde(default)]
    pub is_accepted: bool,
    #[serde(default)]
    pub owner_reputation: i64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrendFixture {
    pub tag: String,
    pub period: String,
    #[serde(default)]
    pub counts: Vec<i64>,
}

/// What `Fixture::apply` wrote.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FixtureStats {
    pub questions: usize,
    pub trends: usize,
}

pub fn load(path: &Path) -> Result<Fixture> {
    let raw = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read fixture file {}", path.display()))?;
    let fixture: Fixture = serde_json::from_str(&raw)
        .with_context(|| format!("Failed to parse fixture file {}", path.display()))?;
    Ok(fixture)
}

impl Fixture {
    /// Writes every question into `table` and every trend into its sibling
    /// trends table. Both tables are created when missing.
    pub fn apply(&self, store: &MemoryStore, table: &str) -> Result<FixtureStats> {
        let trend_table = trends_table(table);
        store.create_table(table);
        store.create_table(&trend_table);

        for question in &self.questions {
            store.put(table, question.to_record())?;
        }
        for trend in &self.trends {
            store.put(&trend_table, trend.to_record())?;
        }

        Ok(FixtureStats {
            questions: self.questions.len(),
            trends: self.trends.len(),
        })
    }
}

impl QuestionFixture {
    pub fn to_record(&self) -> Record {
        let mut record = Record::new(self.id.clone());

        if let Some(title) = &self.title {
            record.set(QUESTION_FAMILY, "title", title.as_str());
        }
        record.set(QUESTION_FAMILY, "body", self.body.as_str());
        if let Some(creation_date) = &self.creation_date {
            record.set(QUESTION_FAMILY, "creation_date", creation_date.as_str());
        }
        record.set(QUESTION_FAMILY, "score", self.score.to_string());
        record.set(
            QUESTION_FAMILY,
            "owner_reputation",
            self.owner_reputation.to_string(),
        );
        record.set(QUESTION_FAMILY, "tags", self.tags.join(","));

        if self.answers.len() > MAX_ANSWERS_PER_QUESTION {
            tracing::warn!(
                "Question {} has {} answers, only the first {} are stored",
                self.id,
                self.answers.len(),
                MAX_ANSWERS_PER_QUESTION
            );
        }

        for (slot, answer) in self
            .answers
            .iter()
            .take(MAX_ANSWERS_PER_QUESTION)
            .enumerate()
        {
            let columns = AnswerColumns::for_slot(slot + 1);
            record.set(ANSWER_FAMILY, columns.id, answer.id.as_str());
            record.set(ANSWER_FAMILY, columns.body, answer.body.as_str());
            record.set(ANSWER_FAMILY, columns.score, answer.score.to_string());
            record.set(
                ANSWER_FAMILY,
                columns.is_accepted,
                answer.is_accepted.to_string(),
            );
            record.set(
                ANSWER_FAMILY,
                columns.owner_reputation,
                answer.owner_reputation.to_string(),
            );
        }

        record
    }
}

impl TrendFixture {
    pub fn to_record(&self) -> Record {
        let mut record = Record::new(trend_row_key(&self.tag, &self.period));
        for (index, count) in self.counts.iter().enumerate() {
            record.set(TREND_FAMILY, trend_column(index + 1), count.to_string());
        }
        record
    }
}
