use anyhow::Result;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::PgPool;

use crate::common::QuestionId;

/// A poll question, either open-ended or multiple choice.
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct Question {
    pub id: QuestionId,
    pub question_text: String,
    pub question_type: QuestionKind,
    pub pub_date: DateTime<Utc>,
    pub edit_date: DateTime<Utc>,
}

/// Question type enum, stored as `'OE'` / `'MC'` text.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum QuestionKind {
    OpenEnded,
    MultipleChoice,
}

impl QuestionKind {
    /// Wire/database representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            QuestionKind::OpenEnded => "OE",
            QuestionKind::MultipleChoice => "MC",
        }
    }
}

impl std::fmt::Display for QuestionKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for QuestionKind {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "OE" => Ok(QuestionKind::OpenEnded),
            "MC" => Ok(QuestionKind::MultipleChoice),
            _ => Err(anyhow::anyhow!("Invalid question type: {}", s)),
        }
    }
}

// Stored as TEXT; delegate the sqlx plumbing to String the same way Id<T>
// delegates to Uuid.
impl sqlx::Type<sqlx::Postgres> for QuestionKind {
    fn type_info() -> sqlx::postgres::PgTypeInfo {
        <String as sqlx::Type<sqlx::Postgres>>::type_info()
    }

    fn compatible(ty: &sqlx::postgres::PgTypeInfo) -> bool {
        <String as sqlx::Type<sqlx::Postgres>>::compatible(ty)
    }
}

impl sqlx::Encode<'_, sqlx::Postgres> for QuestionKind {
    fn encode_by_ref(
        &self,
        buf: &mut sqlx::postgres::PgArgumentBuffer,
    ) -> Result<sqlx::encode::IsNull, sqlx::error::BoxDynError> {
        <&str as sqlx::Encode<sqlx::Postgres>>::encode_by_ref(&self.as_str(), buf)
    }
}

impl sqlx::Decode<'_, sqlx::Postgres> for QuestionKind {
    fn decode(
        value: sqlx::postgres::PgValueRef<'_>,
    ) -> Result<Self, sqlx::error::BoxDynError> {
        let raw = <&str as sqlx::Decode<sqlx::Postgres>>::decode(value)?;
        raw.parse().map_err(Into::into)
    }
}

impl Question {
    /// Find a question by ID. Absence is `None`, not an error.
    pub async fn find_by_id(id: QuestionId, pool: &PgPool) -> Result<Option<Self>> {
        let question = sqlx::query_as::<_, Question>("SELECT * FROM questions WHERE id = $1")
            .bind(id)
            .fetch_optional(pool)
            .await?;
        Ok(question)
    }

    /// List up to `limit` questions in insertion order.
    pub async fn list(limit: i64, pool: &PgPool) -> Result<Vec<Self>> {
        let questions = sqlx::query_as::<_, Question>(
            "SELECT * FROM questions ORDER BY pub_date, id LIMIT $1",
        )
        .bind(limit.max(0))
        .fetch_all(pool)
        .await?;
        Ok(questions)
    }

    /// Insert a question. Used by fixtures; mutations insert inside their
    /// own transactions.
    pub async fn create(
        question_text: &str,
        question_type: QuestionKind,
        pool: &PgPool,
    ) -> Result<Self> {
        let question = sqlx::query_as::<_, Question>(
            r#"
            INSERT INTO questions (id, question_text, question_type)
            VALUES ($1, $2, $3)
            RETURNING *
            "#,
        )
        .bind(QuestionId::new())
        .bind(question_text)
        .bind(question_type)
        .fetch_one(pool)
        .await?;
        Ok(question)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kind_round_trips_through_wire_strings() {
        assert_eq!(QuestionKind::OpenEnded.as_str(), "OE");
        assert_eq!(QuestionKind::MultipleChoice.as_str(), "MC");
        assert_eq!("OE".parse::<QuestionKind>().unwrap(), QuestionKind::OpenEnded);
        assert_eq!(
            "MC".parse::<QuestionKind>().unwrap(),
            QuestionKind::MultipleChoice
        );
    }

    #[test]
    fn unknown_kind_is_rejected() {
        assert!("XX".parse::<QuestionKind>().is_err());
        assert!("".parse::<QuestionKind>().is_err());
        assert!("mc".parse::<QuestionKind>().is_err());
    }
}
