//! Mock generative backend for testing.

use std::collections::VecDeque;
use std::sync::Mutex;

use async_trait::async_trait;

use crate::ports::{BackendError, GenerativeBackend, PromptTurn};

/// Mock backend with a reply queue and call tracking. Exhausted queues fall
/// back to a fixed reply.
#[derive(Default)]
pub struct MockGenerativeBackend {
    replies: Mutex<VecDeque<Result<String, BackendError>>>,
    calls: Mutex<Vec<Vec<PromptTurn>>>,
}

impl MockGenerativeBackend {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queues a successful reply.
    pub fn with_reply(self, text: impl Into<String>) -> Self {
        self.replies.lock().unwrap().push_back(Ok(text.into()));
        self
    }

    /// Queues an error.
    pub fn with_error(self, error: BackendError) -> Self {
        self.replies.lock().unwrap().push_back(Err(error));
        self
    }

    /// Returns the prompt turns of every recorded call.
    pub fn calls(&self) -> Vec<Vec<PromptTurn>> {
        self.calls.lock().unwrap().clone()
    }

    pub fn call_count(&self) -> usize {
        self.calls.lock().unwrap().len()
    }
}

#[async_trait]
impl GenerativeBackend for MockGenerativeBackend {
    async fn generate(&self, turns: Vec<PromptTurn>) -> Result<String, BackendError> {
        self.calls.lock().unwrap().push(turns);

        self.replies
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Ok("Mock reply".to_string()))
    }
}
