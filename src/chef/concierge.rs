//! The chef chat: turns customer questions into menu recommendations.
//!
//! Every failure collapses into a fixed reply, so callers always get something to show.

use super::model::RecommendationModel;
use super::prompt::build_prompt;
use crate::catalog::Catalog;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use std::time::Duration;
use tracing::{info, instrument, warn};

pub const GREETING: &str =
    "Namaste! I am the Head Chef of KhanaDarshan. What are you craving today?";
pub const EMPTY_REPLY: &str =
    "I'm sorry, I couldn't quite catch that. Could you tell me your flavor preferences again?";
pub const BUSY_REPLY: &str =
    "Our chef is currently busy preparing a masterpiece. Please check the menu directly!";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,
    Assistant,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub role: Role,
    pub text: String,
}

impl ChatMessage {
    pub fn user(text: impl Into<String>) -> Self {
        Self {
            role: Role::User,
            text: text.into(),
        }
    }

    pub fn assistant(text: impl Into<String>) -> Self {
        Self {
            role: Role::Assistant,
            text: text.into(),
        }
    }
}

pub struct ChefConcierge {
    model: Arc<dyn RecommendationModel>,
    catalog: Arc<Catalog>,
    timeout: Duration,
    transcript: Vec<ChatMessage>,
}

impl ChefConcierge {
    pub fn new(
        model: Arc<dyn RecommendationModel>,
        catalog: Arc<Catalog>,
        timeout: Duration,
    ) -> Self {
        Self {
            model,
            catalog,
            timeout,
            transcript: vec![ChatMessage::assistant(GREETING)],
        }
    }

    pub fn transcript(&self) -> &[ChatMessage] {
        &self.transcript
    }

    /// Asks the chef. Blank questions are ignored and return `None`.
    #[instrument(skip(self))]
    pub async fn ask(&mut self, question: &str) -> Option<String> {
        let question = question.trim();
        if question.is_empty() {
            return None;
        }
        self.transcript.push(ChatMessage::user(question));

        let reply = self.recommend(question).await;
        self.transcript.push(ChatMessage::assistant(reply.clone()));
        Some(reply)
    }

    /// One model round trip with every failure mapped to a fallback reply.
    async fn recommend(&self, question: &str) -> String {
        let prompt = build_prompt(self.catalog.items(), question);
        match tokio::time::timeout(self.timeout, self.model.complete(&prompt)).await {
            Ok(Ok(Some(text))) => {
                info!(reply_len = text.len(), "Chef replied");
                text
            }
            Ok(Ok(None)) => {
                warn!("Chef returned an empty reply");
                EMPTY_REPLY.to_string()
            }
            Ok(Err(e)) => {
                warn!(error = %e, "Chef request failed");
                BUSY_REPLY.to_string()
            }
            Err(_) => {
                warn!(timeout = ?self.timeout, "Chef request timed out");
                BUSY_REPLY.to_string()
            }
        }
    }
}
