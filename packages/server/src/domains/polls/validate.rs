//! Pure validation rules for questions, choices, and responses.
//!
//! Everything here is side-effect free and store-free: plain values in,
//! `Result` out. The mutation layer resolves entities first and applies
//! these rules before touching the database.

use super::error::PollError;
use super::models::QuestionKind;

/// Maximum length of question text.
pub const QUESTION_TEXT_MAX_LEN: usize = 200;

/// Maximum length of choice text.
pub const CHOICE_TEXT_MAX_LEN: usize = 200;

/// Maximum length of an open-ended response, after trimming.
pub const RESPONSE_TEXT_MAX_LEN: usize = 1000;

/// Minimum number of choices a multiple-choice question must keep.
pub const MIN_CHOICES: usize = 2;

/// What an explicit `questionType` argument requires of the existing
/// choices. Choices are only ever touched on an actual transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransitionEffect {
    /// Type unchanged: existing choices stay untouched, even when a new
    /// choices list accompanies the request.
    KeepChoices,
    /// Became multiple choice: existing choices are dropped and the supplied
    /// texts inserted in their place.
    ReplaceChoices,
    /// Became open-ended: all existing choices are dropped.
    DropChoices,
}

pub fn question_text(text: &str) -> Result<(), PollError> {
    if text.chars().count() > QUESTION_TEXT_MAX_LEN {
        return Err(PollError::invalid(
            "Question text is too long (maximum 200 characters)",
        ));
    }
    Ok(())
}

pub fn choice_text(text: &str) -> Result<(), PollError> {
    if text.chars().count() > CHOICE_TEXT_MAX_LEN {
        return Err(PollError::invalid(
            "Choice text is too long (maximum 200 characters)",
        ));
    }
    Ok(())
}

/// A multiple-choice question cannot be created with fewer than two choices.
pub fn question_creation(kind: QuestionKind, choice_texts: &[String]) -> Result<(), PollError> {
    if kind == QuestionKind::MultipleChoice && choice_texts.len() < MIN_CHOICES {
        return Err(PollError::invalid(
            "Multiple choice questions must have at least 2 choices",
        ));
    }
    Ok(())
}

/// Decide what an explicit type argument does to the question's choices.
///
/// Transitioning to multiple choice requires at least two replacement texts;
/// transitioning to open-ended drops every existing choice.
pub fn type_transition(
    current: QuestionKind,
    new: QuestionKind,
    new_choice_texts: &[String],
) -> Result<TransitionEffect, PollError> {
    if current == new {
        return Ok(TransitionEffect::KeepChoices);
    }
    match new {
        QuestionKind::MultipleChoice => {
            if new_choice_texts.len() < MIN_CHOICES {
                return Err(PollError::invalid(
                    "Multiple choice questions must have at least 2 choices",
                ));
            }
            Ok(TransitionEffect::ReplaceChoices)
        }
        QuestionKind::OpenEnded => Ok(TransitionEffect::DropChoices),
    }
}

/// Removal is refused whenever it would leave fewer than two choices.
pub fn choice_removal(current_count: i64) -> Result<(), PollError> {
    if current_count <= MIN_CHOICES as i64 {
        return Err(PollError::constraint(
            "Cannot remove choice: multiple choice questions must have at least 2 choices",
        ));
    }
    Ok(())
}

/// Validate the shape of a new response against its question's type.
///
/// Returns the text to store for open-ended responses (trimmed); `None` for
/// multiple choice, where the stored text is echoed from the chosen choice.
/// Choice *ownership* is not checked here; the mutation verifies it after
/// resolving the choice row.
pub fn response_shape(
    kind: QuestionKind,
    response_text: Option<&str>,
    has_choice: bool,
) -> Result<Option<String>, PollError> {
    match kind {
        QuestionKind::MultipleChoice => {
            if !has_choice {
                return Err(PollError::invalid(
                    "Multiple choice questions require selecting a choice",
                ));
            }
            // An empty string counts as "no text supplied".
            if response_text.is_some_and(|t| !t.is_empty()) {
                return Err(PollError::invalid(
                    "Multiple choice questions should not include response text",
                ));
            }
            Ok(None)
        }
        QuestionKind::OpenEnded => {
            if has_choice {
                return Err(PollError::invalid(
                    "Open-ended questions should not include a choice",
                ));
            }
            let trimmed = response_text.map(str::trim).unwrap_or_default();
            if trimmed.is_empty() {
                return Err(PollError::invalid(
                    "Open-ended questions require non-empty response text",
                ));
            }
            if trimmed.chars().count() > RESPONSE_TEXT_MAX_LEN {
                return Err(PollError::invalid(
                    "Response text is too long (maximum 1000 characters)",
                ));
            }
            Ok(Some(trimmed.to_string()))
        }
    }
}
