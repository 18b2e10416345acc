//! Choice mutations: add to and remove from a multiple-choice question.

use sqlx::PgPool;
use tracing::info;

use crate::common::{ChoiceId, QuestionId};
use crate::domains::polls::error::PollError;
use crate::domains::polls::models::{Choice, Question, QuestionKind};
use crate::domains::polls::validate;

/// Add a choice to an existing multiple-choice question.
pub async fn add_choice(
    question_id: QuestionId,
    choice_text: &str,
    pool: &PgPool,
) -> Result<Choice, PollError> {
    validate::choice_text(choice_text)?;

    let question = sqlx::query_as::<_, Question>("SELECT * FROM questions WHERE id = $1")
        .bind(question_id)
        .fetch_optional(pool)
        .await?
        .ok_or(PollError::NotFound("Question"))?;

    if question.question_type != QuestionKind::MultipleChoice {
        return Err(PollError::invalid(
            "Can only add choices to multiple choice questions",
        ));
    }

    let choice = sqlx::query_as::<_, Choice>(
        r#"
        INSERT INTO choices (id, question_id, choice_text)
        VALUES ($1, $2, $3)
        RETURNING *
        "#,
    )
    .bind(ChoiceId::new())
    .bind(question_id)
    .bind(choice_text)
    .fetch_one(pool)
    .await?;

    info!(question_id = %question_id, choice_id = %choice.id, "Added choice");
    Ok(choice)
}

/// Remove a choice, refusing when its question would be left with fewer
/// than two. Returns the parent question id. Responses referencing the
/// removed choice are detached, not deleted.
pub async fn remove_choice(choice_id: ChoiceId, pool: &PgPool) -> Result<QuestionId, PollError> {
    let mut tx = pool.begin().await?;

    let choice = sqlx::query_as::<_, Choice>("SELECT * FROM choices WHERE id = $1")
        .bind(choice_id)
        .fetch_optional(&mut *tx)
        .await?
        .ok_or(PollError::NotFound("Choice"))?;

    let count = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM choices WHERE question_id = $1")
        .bind(choice.question_id)
        .fetch_one(&mut *tx)
        .await?;
    validate::choice_removal(count)?;

    sqlx::query("DELETE FROM choices WHERE id = $1")
        .bind(choice_id)
        .execute(&mut *tx)
        .await?;

    tx.commit().await?;

    info!(question_id = %choice.question_id, choice_id = %choice_id, "Removed choice");
    Ok(choice.question_id)
}
