//! GraphQL schema definition.

use super::context::GraphQLContext;
use juniper::{EmptySubscription, FieldError, FieldResult, RootNode};
use tracing::error;
use uuid::Uuid;

use crate::common::{ChoiceId, QuestionId, ResponseId};
use crate::domains::polls::actions;
use crate::domains::polls::data::{
    AddChoicePayload, ChoiceData, CreateResponsePayload, DeletePollPayload,
    DeleteResponsePayload, QuestionData, RemoveChoicePayload, ResponseData,
};
use crate::domains::polls::models::Question;

/// Convert a domain error to a juniper FieldError. The error kind flattens
/// into a plain message on the wire.
fn to_field_error(e: crate::domains::polls::PollError) -> FieldError {
    FieldError::new(e.to_string(), juniper::Value::null())
}

pub struct Query;

#[juniper::graphql_object(context = GraphQLContext)]
impl Query {
    /// Get up to `n` questions, in insertion order
    async fn questions(ctx: &GraphQLContext, n: i32) -> FieldResult<Vec<QuestionData>> {
        let questions = Question::list(n as i64, &ctx.db_pool).await.map_err(|e| {
            error!("Failed to list questions: {}", e);
            FieldError::new("Failed to list questions", juniper::Value::null())
        })?;

        Ok(questions.into_iter().map(QuestionData::from).collect())
    }

    /// Get a single question by ID; null when it does not exist
    async fn question(
        ctx: &GraphQLContext,
        question_id: Uuid,
    ) -> FieldResult<Option<QuestionData>> {
        let question = Question::find_by_id(QuestionId::from_uuid(question_id), &ctx.db_pool)
            .await
            .map_err(|e| {
                error!("Failed to fetch question: {}", e);
                FieldError::new("Failed to fetch question", juniper::Value::null())
            })?;

        Ok(question.map(QuestionData::from))
    }
}

pub struct Mutation;

#[juniper::graphql_object(context = GraphQLContext)]
impl Mutation {
    /// Create a poll. Multiple choice polls need at least two choices.
    async fn create_poll(
        ctx: &GraphQLContext,
        question: String,
        question_type: String,
        choices: Option<Vec<String>>,
    ) -> FieldResult<QuestionData> {
        let created = actions::create_poll(&question, &question_type, choices, &ctx.db_pool)
            .await
            .map_err(to_field_error)?;

        Ok(QuestionData::from(created))
    }

    /// Update a poll's text and/or type. Choices are replaced only on an
    /// explicit type transition.
    async fn update_poll(
        ctx: &GraphQLContext,
        question_id: Uuid,
        question: Option<String>,
        question_type: Option<String>,
        choices: Option<Vec<String>>,
    ) -> FieldResult<QuestionData> {
        let updated = actions::update_poll(
            QuestionId::from_uuid(question_id),
            question,
            question_type,
            choices,
            &ctx.db_pool,
        )
        .await
        .map_err(to_field_error)?;

        Ok(QuestionData::from(updated))
    }

    /// Delete a poll together with its choices and responses.
    async fn delete_poll(
        ctx: &GraphQLContext,
        question_id: Uuid,
    ) -> FieldResult<DeletePollPayload> {
        actions::delete_poll(QuestionId::from_uuid(question_id), &ctx.db_pool)
            .await
            .map_err(to_field_error)?;

        Ok(DeletePollPayload { success: true })
    }

    /// Add a choice to a multiple-choice question.
    async fn add_choice(
        ctx: &GraphQLContext,
        question_id: Uuid,
        choice_text: String,
    ) -> FieldResult<AddChoicePayload> {
        let choice = actions::add_choice(
            QuestionId::from_uuid(question_id),
            &choice_text,
            &ctx.db_pool,
        )
        .await
        .map_err(to_field_error)?;

        Ok(AddChoicePayload {
            choice: ChoiceData::from(choice),
        })
    }

    /// Remove a choice, as long as at least two remain afterwards.
    async fn remove_choice(
        ctx: &GraphQLContext,
        choice_id: Uuid,
    ) -> FieldResult<RemoveChoicePayload> {
        let question_id = actions::remove_choice(ChoiceId::from_uuid(choice_id), &ctx.db_pool)
            .await
            .map_err(to_field_error)?;

        Ok(RemoveChoicePayload {
            success: true,
            question_id: question_id.into_uuid(),
        })
    }

    /// Respond to a question: a choice for multiple choice, free text for
    /// open-ended.
    async fn create_response(
        ctx: &GraphQLContext,
        question_id: Uuid,
        response_text: Option<String>,
        choice_id: Option<Uuid>,
    ) -> FieldResult<CreateResponsePayload> {
        let response = actions::create_response(
            QuestionId::from_uuid(question_id),
            response_text,
            choice_id.map(ChoiceId::from_uuid),
            &ctx.db_pool,
        )
        .await
        .map_err(to_field_error)?;

        Ok(CreateResponsePayload {
            response: ResponseData::from(response),
        })
    }

    /// Delete a response.
    async fn delete_response(
        ctx: &GraphQLContext,
        response_id: Uuid,
    ) -> FieldResult<DeleteResponsePayload> {
        actions::delete_response(ResponseId::from_uuid(response_id), &ctx.db_pool)
            .await
            .map_err(to_field_error)?;

        Ok(DeleteResponsePayload { success: true })
    }
}

pub type Schema = RootNode<'static, Query, Mutation, EmptySubscription<GraphQLContext>>;

pub fn create_schema() -> Schema {
    Schema::new(Query, Mutation, EmptySubscription::new())
}
