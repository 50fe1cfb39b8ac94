//! Catalog adapters - the HTTP content provider and its mock twin.

mod http_provider;
mod mock;

pub use http_provider::{CatalogHttpConfig, HttpContentProvider};
pub use mock::{movie_item, person_item, tv_item, MockContentProvider, ProviderCall};
