//! Typed ID definitions for the poll entities.

pub use super::id::Id;

/// Marker type for Question entities.
pub struct Question;

/// Marker type for Choice entities.
pub struct Choice;

/// Marker type for Response entities.
pub struct Response;

/// Typed ID for Question entities.
pub type QuestionId = Id<Question>;

/// Typed ID for Choice entities.
pub type ChoiceId = Id<Choice>;

/// Typed ID for Response entities.
pub type ResponseId = Id<Response>;
