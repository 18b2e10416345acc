use anyhow::Result;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::PgPool;

use crate::common::{ChoiceId, QuestionId};

/// A predefined choice belonging to a multiple-choice question.
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct Choice {
    pub id: ChoiceId,
    pub question_id: QuestionId,
    pub choice_text: String,
    pub created_at: DateTime<Utc>,
}

impl Choice {
    pub async fn find_by_id(id: ChoiceId, pool: &PgPool) -> Result<Option<Self>> {
        let choice = sqlx::query_as::<_, Choice>("SELECT * FROM choices WHERE id = $1")
            .bind(id)
            .fetch_optional(pool)
            .await?;
        Ok(choice)
    }

    /// All choices of a question, in insertion order.
    pub async fn find_by_question(question_id: QuestionId, pool: &PgPool) -> Result<Vec<Self>> {
        let choices = sqlx::query_as::<_, Choice>(
            "SELECT * FROM choices WHERE question_id = $1 ORDER BY created_at, id",
        )
        .bind(question_id)
        .fetch_all(pool)
        .await?;
        Ok(choices)
    }

    pub async fn count_for_question(question_id: QuestionId, pool: &PgPool) -> Result<i64> {
        let count =
            sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM choices WHERE question_id = $1")
                .bind(question_id)
                .fetch_one(pool)
                .await?;
        Ok(count)
    }

    /// Insert a choice. Used by fixtures; mutations insert inside their own
    /// transactions.
    pub async fn create(
        question_id: QuestionId,
        choice_text: &str,
        pool: &PgPool,
    ) -> Result<Self> {
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
        Ok(choice)
    }
}
