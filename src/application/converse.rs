//! ConversationFallback - the generative path for unstructured messages.
//!
//! Assembles a bounded prompt: the persona block, up to the last ten
//! history turns mapped to the backend's role vocabulary, and the current
//! message appended to the persona block. The conversational path must
//! always produce some text, so every backend failure collapses into a
//! fixed fallback sentence.

use std::sync::Arc;

use crate::domain::chat::{recent_window, ChatMessage, ChatRole};
use crate::ports::{GenerativeBackend, PromptRole, PromptTurn};

/// Returned whenever the backend yields no usable text.
pub const FALLBACK_REPLY: &str =
    "I'm having trouble understanding right now. Could you try rephrasing that?";

/// Persona and site knowledge given to the generative backend.
pub const DEFAULT_PERSONA: &str = "\
You are Scout, the friendly assistant of a movie and TV discovery site.

What you can do for visitors:
- Help them find movies, TV shows, and people in the catalog.
- Recommend popular titles, optionally by genre or year.
- Point them at the site's pages: /movies, /tv, /genres, /top-100, /people.
- Chat about film and television in general.

Tone rules:
- Be warm and concise. Two or three sentences is usually enough.
- Never invent titles, ratings, or release dates.
- If asked about accounts, favorites, or watch lists, explain that the
  profile menu handles those.

Examples:
Q: What's a good place to start?
A: The top-100 page is a great starting point - it lists the highest rated
titles on the site. Want a recommendation instead?
Q: Do you know any good space movies?
A: Science fiction is a favorite around here! Try searching for a title, or
ask me to recommend sci-fi movies.";

/// Generative fallback for messages with no structured intent.
pub struct ConversationFallback {
    backend: Arc<dyn GenerativeBackend>,
    persona: String,
}

impl ConversationFallback {
    pub fn new(backend: Arc<dyn GenerativeBackend>, persona: impl Into<String>) -> Self {
        Self {
            backend,
            persona: persona.into(),
        }
    }

    /// Produces reply text for `message`. Never returns an empty string.
    pub async fn converse(&self, message: &str, history: &[ChatMessage]) -> String {
        let mut turns: Vec<PromptTurn> = recent_window(history)
            .iter()
            .map(|entry| PromptTurn {
                role: match entry.role {
                    ChatRole::User => PromptRole::User,
                    _ => PromptRole::Model,
                },
                text: entry.content.clone(),
            })
            .collect();

        turns.push(PromptTurn::user(format!(
            "{}\n\nUser message: {}",
            self.persona, message
        )));

        match self.backend.generate(turns).await {
            Ok(text) if !text.trim().is_empty() => text,
            Ok(_) => {
                tracing::warn!("backend returned blank text");
                FALLBACK_REPLY.to_string()
            }
            Err(error) => {
                tracing::warn!(%error, "generative backend failed");
                FALLBACK_REPLY.to_string()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::MockGenerativeBackend;
    use crate::domain::chat::HISTORY_WINDOW;
    use crate::ports::BackendError;

    fn fallback(backend: MockGenerativeBackend) -> (ConversationFallback, Arc<MockGenerativeBackend>) {
        let backend = Arc::new(backend);
        (
            ConversationFallback::new(backend.clone(), DEFAULT_PERSONA),
            backend,
        )
    }

    #[tokio::test]
    async fn returns_backend_text() {
        let (converse, _) = fallback(MockGenerativeBackend::new().with_reply("Happy to help!"));

        let reply = converse.converse("hello", &[]).await;

        assert_eq!(reply, "Happy to help!");
    }

    #[tokio::test]
    async fn backend_error_yields_fallback_sentence() {
        let (converse, _) = fallback(
            MockGenerativeBackend::new().with_error(BackendError::network("unreachable")),
        );

        let reply = converse.converse("hello", &[]).await;

        assert_eq!(reply, FALLBACK_REPLY);
    }

    #[tokio::test]
    async fn blank_backend_text_yields_fallback_sentence() {
        let (converse, _) = fallback(MockGenerativeBackend::new().with_reply("   "));

        let reply = converse.converse("hello", &[]).await;

        assert_eq!(reply, FALLBACK_REPLY);
        assert!(!reply.is_empty());
    }

    #[tokio::test]
    async fn persona_and_message_share_the_final_turn() {
        let (converse, backend) = fallback(MockGenerativeBackend::new());

        converse.converse("what's good?", &[]).await;

        let calls = backend.calls();
        let last = calls[0].last().unwrap();
        assert_eq!(last.role, PromptRole::User);
        assert!(last.text.contains("You are Scout"));
        assert!(last.text.contains("what's good?"));
    }

    #[tokio::test]
    async fn history_roles_map_to_backend_vocabulary() {
        let (converse, backend) = fallback(MockGenerativeBackend::new());
        let history = vec![
            ChatMessage::user("hi"),
            ChatMessage::assistant("hello there"),
        ];

        converse.converse("next", &history).await;

        let turns = &backend.calls()[0];
        assert_eq!(turns[0].role, PromptRole::User);
        assert_eq!(turns[1].role, PromptRole::Model);
    }

    #[tokio::test]
    async fn only_the_last_ten_turns_are_sent() {
        let (converse, backend) = fallback(MockGenerativeBackend::new());
        let history: Vec<ChatMessage> = (0..25)
            .map(|i| ChatMessage::user(format!("turn {}", i)))
            .collect();

        converse.converse("latest", &history).await;

        let turns = &backend.calls()[0];
        // Window plus the final persona-bearing turn.
        assert_eq!(turns.len(), HISTORY_WINDOW + 1);
        assert_eq!(turns[0].text, "turn 15");
    }
}
