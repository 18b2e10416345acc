use anyhow::Result;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::PgPool;

use crate::common::{ChoiceId, QuestionId, ResponseId};

/// A user's answer to a question: free text for open-ended questions, a
/// choice reference (with the choice text echoed) for multiple choice.
///
/// `choice_id` is detached (`NULL`) when the chosen choice is deleted; the
/// response itself survives.
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct Response {
    pub id: ResponseId,
    pub question_id: QuestionId,
    pub response_text: String,
    pub choice_id: Option<ChoiceId>,
    pub created_at: DateTime<Utc>,
}

impl Response {
    pub async fn find_by_id(id: ResponseId, pool: &PgPool) -> Result<Option<Self>> {
        let response = sqlx::query_as::<_, Response>("SELECT * FROM responses WHERE id = $1")
            .bind(id)
            .fetch_optional(pool)
            .await?;
        Ok(response)
    }

    /// All responses to a question, in insertion order.
    pub async fn find_by_question(question_id: QuestionId, pool: &PgPool) -> Result<Vec<Self>> {
        let responses = sqlx::query_as::<_, Response>(
            "SELECT * FROM responses WHERE question_id = $1 ORDER BY created_at, id",
        )
        .bind(question_id)
        .fetch_all(pool)
        .await?;
        Ok(responses)
    }

    /// A truncated preview of the response text.
    pub fn preview(&self, length: usize) -> String {
        self.response_text.chars().take(length).collect()
    }
}
