//! Test fixtures for creating test data.
//!
//! These fixtures use the model methods directly to create test data.

use anyhow::Result;
use server_core::common::{ChoiceId, QuestionId};
use server_core::domains::polls::models::{Choice, Question, QuestionKind};
use sqlx::PgPool;

/// Create a multiple-choice question with the given choices.
pub async fn create_mc_question(
    pool: &PgPool,
    text: &str,
    choices: &[&str],
) -> Result<(QuestionId, Vec<ChoiceId>)> {
    let question = Question::create(text, QuestionKind::MultipleChoice, pool).await?;
    let mut choice_ids = Vec::with_capacity(choices.len());
    for choice_text in choices {
        let choice = Choice::create(question.id, choice_text, pool).await?;
        choice_ids.push(choice.id);
    }
    Ok((question.id, choice_ids))
}

/// Create an open-ended question.
pub async fn create_oe_question(pool: &PgPool, text: &str) -> Result<QuestionId> {
    let question = Question::create(text, QuestionKind::OpenEnded, pool).await?;
    Ok(question.id)
}
