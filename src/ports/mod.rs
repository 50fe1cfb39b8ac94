//! Ports - async traits at the seams to external collaborators.

mod content_provider;
mod generative_backend;

pub use content_provider::{CatalogItem, CatalogPage, ContentProvider, ProviderError, SearchKind};
pub use generative_backend::{BackendError, GenerativeBackend, PromptRole, PromptTurn};
