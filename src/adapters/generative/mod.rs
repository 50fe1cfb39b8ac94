//! Generative adapters - the HTTP backend and its mock twin.

mod http_backend;
mod mock;

pub use http_backend::{GenerativeHttpConfig, HttpGenerativeBackend};
pub use mock::MockGenerativeBackend;
