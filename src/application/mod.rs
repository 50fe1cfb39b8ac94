//! Application layer - the intent strategies and the orchestrator that
//! composes them. Each strategy is single-purpose and independently
//! testable; only the orchestrator branches.

mod converse;
mod mapping;
mod orchestrator;
mod recommend;
mod search;

pub use converse::{ConversationFallback, DEFAULT_PERSONA, FALLBACK_REPLY};
pub use orchestrator::ChatOrchestrator;
pub use recommend::{RecommendationEngine, RECOMMEND_SUGGESTIONS};
pub use search::{SearchAggregator, RESULTS_PER_PROVIDER};
