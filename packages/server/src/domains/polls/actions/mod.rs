//! Polls domain actions - entry-point business logic
//!
//! Called directly from GraphQL mutations. Each action validates its input,
//! then applies its writes in a single transaction (or a single atomic
//! statement) so partial application is never observable.

pub mod choices;
pub mod polls;
pub mod responses;

pub use choices::*;
pub use polls::*;
pub use responses::*;
