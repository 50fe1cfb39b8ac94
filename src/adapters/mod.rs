//! Adapters - implementations of the ports against real infrastructure,
//! plus the HTTP surface and the in-memory mocks used by tests.

pub mod catalog;
pub mod generative;
pub mod http;

pub use catalog::{CatalogHttpConfig, HttpContentProvider, MockContentProvider, ProviderCall};
pub use generative::{GenerativeHttpConfig, HttpGenerativeBackend, MockGenerativeBackend};

pub use catalog::{movie_item, person_item, tv_item};
