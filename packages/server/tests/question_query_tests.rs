//! Integration tests for the question queries.

mod common;

use crate::common::{create_mc_question, create_oe_question, TestHarness};
use test_context::test_context;
use uuid::Uuid;

#[test_context(TestHarness)]
#[tokio::test]
async fn question_lookup_returns_null_for_unknown_id(ctx: &TestHarness) {
    let client = ctx.graphql();

    // Unlike the mutations, a missing question here is an absence, not an
    // error.
    let result = client
        .execute_with_vars(
            r#"
            query Q($questionId: Uuid!) {
                question(questionId: $questionId) { id }
            }
            "#,
            vars! { "questionId" => Uuid::new_v4().to_string() },
        )
        .await;

    assert!(result.is_ok(), "errors: {:?}", result.errors);
    assert!(result.get("question").is_null());
}

#[test_context(TestHarness)]
#[tokio::test]
async fn question_lookup_resolves_nested_choices_and_responses(ctx: &TestHarness) {
    let client = ctx.graphql();
    let (question_id, choice_ids) = create_mc_question(&ctx.db_pool, "Color?", &["Blue", "Red"])
        .await
        .unwrap();

    client
        .query_with_vars(
            r#"
            mutation C($questionId: Uuid!, $choiceId: Uuid!) {
                createResponse(questionId: $questionId, choiceId: $choiceId) {
                    response { id }
                }
            }
            "#,
            vars! {
                "questionId" => question_id.to_string(),
                "choiceId" => choice_ids[1].to_string(),
            },
        )
        .await;

    let result = client
        .execute_with_vars(
            r#"
            query Q($questionId: Uuid!) {
                question(questionId: $questionId) {
                    id
                    questionText
                    questionType
                    pubDate
                    editDate
                    choices { choiceText }
                    responses { responseText choiceId }
                }
            }
            "#,
            vars! { "questionId" => question_id.to_string() },
        )
        .await;

    assert!(result.is_ok(), "errors: {:?}", result.errors);
    assert_eq!(result.get("question.id"), question_id.to_string());
    assert_eq!(result.get("question.questionText"), "Color?");
    assert_eq!(result.get("question.questionType"), "MC");
    assert!(!result.get("question.pubDate").as_str().unwrap().is_empty());
    assert!(!result.get("question.editDate").as_str().unwrap().is_empty());

    let choices = result.get("question.choices");
    let choices = choices.as_array().unwrap();
    assert_eq!(choices.len(), 2);
    assert_eq!(choices[0]["choiceText"], "Blue");
    assert_eq!(choices[1]["choiceText"], "Red");

    let responses = result.get("question.responses");
    let responses = responses.as_array().unwrap();
    assert_eq!(responses.len(), 1);
    assert_eq!(responses[0]["responseText"], "Red");
    assert_eq!(responses[0]["choiceId"], choice_ids[1].to_string());
}

#[test_context(TestHarness)]
#[tokio::test]
async fn questions_respects_limit(ctx: &TestHarness) {
    let client = ctx.graphql();
    for i in 0..3 {
        create_oe_question(&ctx.db_pool, &format!("Limited question {}", i))
            .await
            .unwrap();
    }

    let result = client
        .execute(
            r#"
            query {
                questions(n: 2) { id }
            }
            "#,
        )
        .await;

    assert!(result.is_ok(), "errors: {:?}", result.errors);
    assert_eq!(result.get("questions").as_array().unwrap().len(), 2);
}

#[test_context(TestHarness)]
#[tokio::test]
async fn questions_come_back_in_insertion_order(ctx: &TestHarness) {
    let client = ctx.graphql();
    let first = create_oe_question(&ctx.db_pool, "Asked first").await.unwrap();
    let second = create_oe_question(&ctx.db_pool, "Asked second")
        .await
        .unwrap();

    // The database is shared across tests, so check relative order rather
    // than absolute positions.
    let result = client
        .execute(
            r#"
            query {
                questions(n: 500) { id }
            }
            "#,
        )
        .await;

    assert!(result.is_ok(), "errors: {:?}", result.errors);
    let ids: Vec<String> = result
        .get("questions")
        .as_array()
        .unwrap()
        .iter()
        .map(|q| q["id"].as_str().unwrap().to_string())
        .collect();

    let first_pos = ids.iter().position(|id| *id == first.to_string()).unwrap();
    let second_pos = ids.iter().position(|id| *id == second.to_string()).unwrap();
    assert!(first_pos < second_pos);
}

#[test_context(TestHarness)]
#[tokio::test]
async fn questions_with_zero_or_negative_limit_is_empty(ctx: &TestHarness) {
    let client = ctx.graphql();
    create_oe_question(&ctx.db_pool, "Unseen").await.unwrap();

    for n in ["0", "-3"] {
        let result = client
            .execute(&format!(
                r#"
                query {{
                    questions(n: {}) {{ id }}
                }}
                "#,
                n
            ))
            .await;

        assert!(result.is_ok(), "errors: {:?}", result.errors);
        assert_eq!(result.get("questions").as_array().unwrap().len(), 0);
    }
}
