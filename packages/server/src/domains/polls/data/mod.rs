//! API representations of the poll entities and mutation payloads.

use juniper::{FieldError, FieldResult};
use uuid::Uuid;

use crate::domains::polls::models::{Choice, Question, Response};
use crate::server::graphql::GraphQLContext;

/// API representation of a choice
#[derive(Debug, Clone, juniper::GraphQLObject)]
#[graphql(name = "Choice", context = GraphQLContext)]
pub struct ChoiceData {
    pub id: Uuid,
    pub question_id: Uuid,
    pub choice_text: String,
    pub created_at: String,
}

impl From<Choice> for ChoiceData {
    fn from(choice: Choice) -> Self {
        Self {
            id: choice.id.into_uuid(),
            question_id: choice.question_id.into_uuid(),
            choice_text: choice.choice_text,
            created_at: choice.created_at.to_rfc3339(),
        }
    }
}

/// API representation of a response
#[derive(Debug, Clone, juniper::GraphQLObject)]
#[graphql(name = "Response", context = GraphQLContext)]
pub struct ResponseData {
    pub id: Uuid,
    pub question_id: Uuid,
    pub response_text: String,
    pub response_preview: String,
    pub choice_id: Option<Uuid>,
    pub created_at: String,
}

impl From<Response> for ResponseData {
    fn from(response: Response) -> Self {
        let response_preview = response.preview(50);
        Self {
            id: response.id.into_uuid(),
            question_id: response.question_id.into_uuid(),
            response_text: response.response_text,
            response_preview,
            choice_id: response.choice_id.map(|id| id.into_uuid()),
            created_at: response.created_at.to_rfc3339(),
        }
    }
}

/// API representation of a question; choices and responses resolve from
/// the store on demand.
#[derive(Debug, Clone)]
pub struct QuestionData {
    question: Question,
}

impl From<Question> for QuestionData {
    fn from(question: Question) -> Self {
        Self { question }
    }
}

#[juniper::graphql_object(name = "Question", context = GraphQLContext)]
impl QuestionData {
    fn id(&self) -> Uuid {
        self.question.id.into_uuid()
    }

    fn question_text(&self) -> &str {
        &self.question.question_text
    }

    /// "OE" or "MC"
    fn question_type(&self) -> String {
        self.question.question_type.to_string()
    }

    fn pub_date(&self) -> String {
        self.question.pub_date.to_rfc3339()
    }

    fn edit_date(&self) -> String {
        self.question.edit_date.to_rfc3339()
    }

    async fn choices(&self, ctx: &GraphQLContext) -> FieldResult<Vec<ChoiceData>> {
        let choices = Choice::find_by_question(self.question.id, &ctx.db_pool)
            .await
            .map_err(|e| FieldError::new(e.to_string(), juniper::Value::null()))?;
        Ok(choices.into_iter().map(ChoiceData::from).collect())
    }

    async fn responses(&self, ctx: &GraphQLContext) -> FieldResult<Vec<ResponseData>> {
        let responses = Response::find_by_question(self.question.id, &ctx.db_pool)
            .await
            .map_err(|e| FieldError::new(e.to_string(), juniper::Value::null()))?;
        Ok(responses.into_iter().map(ResponseData::from).collect())
    }
}

/// Result of deleting a poll
#[derive(Debug, Clone, juniper::GraphQLObject)]
pub struct DeletePollPayload {
    pub success: bool,
}

/// Result of adding a choice
#[derive(Debug, Clone, juniper::GraphQLObject)]
#[graphql(context = GraphQLContext)]
pub struct AddChoicePayload {
    pub choice: ChoiceData,
}

/// Result of removing a choice
#[derive(Debug, Clone, juniper::GraphQLObject)]
pub struct RemoveChoicePayload {
    pub success: bool,
    pub question_id: Uuid,
}

/// Result of creating a response
#[derive(Debug, Clone, juniper::GraphQLObject)]
#[graphql(context = GraphQLContext)]
pub struct CreateResponsePayload {
    pub response: ResponseData,
}

/// Result of deleting a response
#[derive(Debug, Clone, juniper::GraphQLObject)]
pub struct DeleteResponsePayload {
    pub success: bool,
}
