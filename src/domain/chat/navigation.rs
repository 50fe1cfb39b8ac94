//! Navigation targets and their pure resolution to directives.

use std::collections::HashMap;

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

use super::response::ChatResponse;

/// The five known client routes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum RouteTarget {
    Genres,
    TopRated,
    People,
    Movies,
    TvShows,
}

impl RouteTarget {
    /// Client-side path this target navigates to.
    pub fn path(&self) -> &'static str {
        match self {
            RouteTarget::Genres => "/genres",
            RouteTarget::TopRated => "/top-100",
            RouteTarget::People => "/people",
            RouteTarget::Movies => "/movies",
            RouteTarget::TvShows => "/tv",
        }
    }
}

/// Route path to human-readable label table.
static ROUTE_LABELS: Lazy<HashMap<&'static str, &'static str>> = Lazy::new(|| {
    HashMap::from([
        ("/genres", "the genres page"),
        ("/top-100", "the top 100 list"),
        ("/people", "the people page"),
        ("/movies", "the movies page"),
        ("/tv", "the TV shows page"),
    ])
});

/// Looks up the human label for a route path. Total over arbitrary strings:
/// unknown paths get the generic "page" label instead of failing.
pub fn label_for(path: &str) -> &'static str {
    ROUTE_LABELS.get(path).copied().unwrap_or("page")
}

/// Resolves a navigation target into a terminal response. Navigation
/// responses never carry suggestions - they are not a continuation point.
pub fn resolve(target: RouteTarget) -> ChatResponse {
    let path = target.path();
    ChatResponse::text(format!("Taking you to {}!", label_for(path)), Vec::new())
        .with_navigation(path)
}
