//! Top-Answer Selection
//!
//! Reduces a question's answers to at most three, in three passes:
//! 1. the first accepted answer, in input order;
//! 2. answers from owners above the reputation threshold, highest score first;
//! 3. any remaining answers, highest score first.
//!
//! Sorting is stable, so equal scores keep their input order. Answers are
//! compared by value, so an answer equal to one already selected is skipped.

use super::types::Answer;
use std::cmp::Reverse;

pub const TOP_ANSWER_LIMIT: usize = 3;
/// Owners must be strictly above this to qualify for the second pass.
pub const HIGH_REPUTATION_THRESHOLD: i64 = 1000;

pub fn select_top_answers(answers: &[Answer]) -> Vec<Answer> {
    let mut selected: Vec<usize> = Vec::with_capacity(TOP_ANSWER_LIMIT);

    if let Some(accepted) = answers.iter().position(|answer| answer.is_accepted) {
        selected.push(accepted);
    }

    fill_by_score(answers, &mut selected, |answer| {
        answer.owner_reputation > HIGH_REPUTATION_THRESHOLD
    });
    fill_by_score(answers, &mut selected, |_| true);

    selected.into_iter().map(|i| answers[i].clone()).collect()
}

fn fill_by_score<F>(answers: &[Answer], selected: &mut Vec<usize>, eligible: F)
where
    F: Fn(&Answer) -> bool,
{
    if selected.len() >= TOP_ANSWER_LIMIT {
        return;
    }

    let mut candidates: Vec<usize> = (0..answers.len())
        .filter(|&i| eligible(&answers[i]))
        .collect();
    candidates.sort_by_key(|&i| Reverse(answers[i].score));

    for candidate in candidates {
        if selected.len() >= TOP_ANSWER_LIMIT {
            break;
        }
        if !selected.iter().any(|&s| answers[s] == answers[candidate]) {
            selected.push(candidate);
        }
    }
}
