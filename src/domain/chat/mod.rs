//! Chat domain - messages, intents, media results, and the pure
//! classification/suggestion logic that drives the orchestrator.

pub mod intent;
pub mod media;
pub mod message;
pub mod navigation;
pub mod response;
pub mod suggestions;

pub use intent::{classify, Intent};
pub use media::{ImageUrlBuilder, MediaResult, MediaType};
pub use message::{recent_window, ChatMessage, ChatRole, HISTORY_WINDOW};
pub use navigation::{label_for, resolve, RouteTarget};
pub use response::{ChatResponse, MAX_MEDIA_RESULTS, MAX_SUGGESTIONS};
pub use suggestions::suggest;
