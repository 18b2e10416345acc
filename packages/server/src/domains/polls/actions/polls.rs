//! Poll mutations: create, update, delete.

use sqlx::{PgPool, Postgres, Transaction};
use tracing::info;

use crate::common::{ChoiceId, QuestionId};
use crate::domains::polls::error::PollError;
use crate::domains::polls::models::{Question, QuestionKind};
use crate::domains::polls::validate::{self, TransitionEffect};

fn parse_kind(raw: &str) -> Result<QuestionKind, PollError> {
    raw.parse()
        .map_err(|e: anyhow::Error| PollError::InvalidInput(e.to_string()))
}

async fn insert_choice(
    question_id: QuestionId,
    choice_text: &str,
    tx: &mut Transaction<'_, Postgres>,
) -> Result<(), PollError> {
    sqlx::query("INSERT INTO choices (id, question_id, choice_text) VALUES ($1, $2, $3)")
        .bind(ChoiceId::new())
        .bind(question_id)
        .bind(choice_text)
        .execute(&mut **tx)
        .await?;
    Ok(())
}

/// Create a poll, inserting any supplied choices alongside it.
pub async fn create_poll(
    question_text: &str,
    question_type: &str,
    choices: Option<Vec<String>>,
    pool: &PgPool,
) -> Result<Question, PollError> {
    let kind = parse_kind(question_type)?;
    let choice_texts = choices.unwrap_or_default();

    validate::question_text(question_text)?;
    validate::question_creation(kind, &choice_texts)?;
    for text in &choice_texts {
        validate::choice_text(text)?;
    }

    let mut tx = pool.begin().await?;

    let question = sqlx::query_as::<_, Question>(
        r#"
        INSERT INTO questions (id, question_text, question_type)
        VALUES ($1, $2, $3)
        RETURNING *
        "#,
    )
    .bind(QuestionId::new())
    .bind(question_text)
    .bind(kind)
    .fetch_one(&mut *tx)
    .await?;

    for text in &choice_texts {
        insert_choice(question.id, text, &mut tx).await?;
    }

    tx.commit().await?;

    info!(question_id = %question.id, question_type = %kind, "Created poll");
    Ok(question)
}

/// Update a poll's text and/or type.
///
/// Choices are only touched on an explicit type transition: becoming
/// multiple choice replaces them with the supplied list, becoming
/// open-ended drops them. With `question_type` omitted or unchanged, a
/// supplied `choices` list is ignored. The edit timestamp refreshes on
/// every successful call.
pub async fn update_poll(
    question_id: QuestionId,
    question_text: Option<String>,
    question_type: Option<String>,
    choices: Option<Vec<String>>,
    pool: &PgPool,
) -> Result<Question, PollError> {
    // Empty strings mean "not provided".
    let question_text = question_text.filter(|t| !t.is_empty());
    let question_type = question_type.filter(|t| !t.is_empty());
    let choice_texts = choices.unwrap_or_default();

    if let Some(text) = &question_text {
        validate::question_text(text)?;
    }
    for text in &choice_texts {
        validate::choice_text(text)?;
    }

    let mut tx = pool.begin().await?;

    let current = sqlx::query_as::<_, Question>("SELECT * FROM questions WHERE id = $1")
        .bind(question_id)
        .fetch_optional(&mut *tx)
        .await?
        .ok_or(PollError::NotFound("Question"))?;

    let mut new_kind = current.question_type;
    if let Some(raw) = &question_type {
        let kind = parse_kind(raw)?;
        match validate::type_transition(current.question_type, kind, &choice_texts)? {
            TransitionEffect::ReplaceChoices => {
                sqlx::query("DELETE FROM choices WHERE question_id = $1")
                    .bind(question_id)
                    .execute(&mut *tx)
                    .await?;
                for text in &choice_texts {
                    insert_choice(question_id, text, &mut tx).await?;
                }
            }
            TransitionEffect::DropChoices => {
                sqlx::query("DELETE FROM choices WHERE question_id = $1")
                    .bind(question_id)
                    .execute(&mut *tx)
                    .await?;
            }
            TransitionEffect::KeepChoices => {}
        }
        new_kind = kind;
    }

    let question = sqlx::query_as::<_, Question>(
        r#"
        UPDATE questions
        SET question_text = COALESCE($2, question_text),
            question_type = $3,
            edit_date = now()
        WHERE id = $1
        RETURNING *
        "#,
    )
    .bind(question_id)
    .bind(question_text)
    .bind(new_kind)
    .fetch_one(&mut *tx)
    .await?;

    tx.commit().await?;

    info!(question_id = %question.id, question_type = %new_kind, "Updated poll");
    Ok(question)
}

/// Delete a poll. Choices and responses go with it (cascade).
pub async fn delete_poll(question_id: QuestionId, pool: &PgPool) -> Result<(), PollError> {
    let result = sqlx::query("DELETE FROM questions WHERE id = $1")
        .bind(question_id)
        .execute(pool)
        .await?;
    if result.rows_affected() == 0 {
        return Err(PollError::NotFound("Question"));
    }

    info!(question_id = %question_id, "Deleted poll");
    Ok(())
}
