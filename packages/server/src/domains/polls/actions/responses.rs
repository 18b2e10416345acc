//! Response mutations: create and delete.

use sqlx::PgPool;
use tracing::info;

use crate::common::{ChoiceId, QuestionId, ResponseId};
use crate::domains::polls::error::PollError;
use crate::domains::polls::models::{Choice, Question, Response};
use crate::domains::polls::validate;

/// Create a response to a question.
///
/// For multiple choice, `choice_id` must name a choice of the same question
/// and the stored text is echoed from that choice. For open-ended, the text
/// is stored trimmed.
pub async fn create_response(
    question_id: QuestionId,
    response_text: Option<String>,
    choice_id: Option<ChoiceId>,
    pool: &PgPool,
) -> Result<Response, PollError> {
    let question = sqlx::query_as::<_, Question>("SELECT * FROM questions WHERE id = $1")
        .bind(question_id)
        .fetch_optional(pool)
        .await?
        .ok_or(PollError::NotFound("Question"))?;

    let stored_text = validate::response_shape(
        question.question_type,
        response_text.as_deref(),
        choice_id.is_some(),
    )?;

    let response = match stored_text {
        // Open-ended: trimmed free text, no choice reference.
        Some(text) => {
            sqlx::query_as::<_, Response>(
                r#"
                INSERT INTO responses (id, question_id, response_text)
                VALUES ($1, $2, $3)
                RETURNING *
                "#,
            )
            .bind(ResponseId::new())
            .bind(question_id)
            .bind(&text)
            .fetch_one(pool)
            .await?
        }
        // Multiple choice: resolve the choice, check ownership, echo its text.
        None => {
            let choice_id = choice_id.ok_or_else(|| {
                PollError::invalid("Multiple choice questions require selecting a choice")
            })?;
            let choice = sqlx::query_as::<_, Choice>("SELECT * FROM choices WHERE id = $1")
                .bind(choice_id)
                .fetch_optional(pool)
                .await?
                .ok_or(PollError::NotFound("Choice"))?;
            if choice.question_id != question.id {
                return Err(PollError::invalid(
                    "Selected choice does not belong to this question",
                ));
            }

            sqlx::query_as::<_, Response>(
                r#"
                INSERT INTO responses (id, question_id, response_text, choice_id)
                VALUES ($1, $2, $3, $4)
                RETURNING *
                "#,
            )
            .bind(ResponseId::new())
            .bind(question_id)
            .bind(&choice.choice_text)
            .bind(choice.id)
            .fetch_one(pool)
            .await?
        }
    };

    info!(question_id = %question_id, response_id = %response.id, "Created response");
    Ok(response)
}

/// Delete a response.
pub async fn delete_response(response_id: ResponseId, pool: &PgPool) -> Result<(), PollError> {
    let result = sqlx::query("DELETE FROM responses WHERE id = $1")
        .bind(response_id)
        .execute(pool)
        .await?;
    if result.rows_affected() == 0 {
        return Err(PollError::NotFound("Response"));
    }

    info!(response_id = %response_id, "Deleted response");
    Ok(())
}
