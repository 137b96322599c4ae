//! # Chef Concierge
//!
//! The AI recommendation boundary. A [`ChefConcierge`] keeps the chat transcript, builds a
//! prompt from the menu and the customer's question, and asks a [`RecommendationModel`]
//! (in production [`GeminiModel`]) for an answer.

pub mod concierge;
pub mod gemini;
pub mod model;
pub mod prompt;

pub use concierge::*;
pub use gemini::GeminiModel;
pub use model::*;
