//! Mapping from raw catalog items to client-facing media results.

use crate::domain::chat::{ImageUrlBuilder, MediaResult};
use crate::ports::{CatalogItem, SearchKind};

/// Converts one provider item into the media result for its index.
pub(crate) fn media_result(
    kind: SearchKind,
    item: &CatalogItem,
    images: &ImageUrlBuilder,
) -> MediaResult {
    match kind {
        SearchKind::Movie => MediaResult::Movie {
            id: item.id,
            title: item.display_title().to_string(),
            image_url: images.url_for(item.poster_path.as_deref()),
            rating: item.vote_average.map(round_rating),
            year: year_of(item.date()),
        },
        SearchKind::Tv => MediaResult::Tv {
            id: item.id,
            title: item.display_title().to_string(),
            image_url: images.url_for(item.poster_path.as_deref()),
            rating: item.vote_average.map(round_rating),
            year: year_of(item.date()),
        },
        SearchKind::Person => MediaResult::Person {
            id: item.id,
            title: item.display_title().to_string(),
            image_url: images.url_for(item.profile_path.as_deref()),
            department: item.known_for_department.clone(),
        },
    }
}

/// Release year: the ISO date substring before the first `-`.
fn year_of(date: Option<&str>) -> Option<String> {
    date.and_then(|d| d.split('-').next())
        .filter(|y| !y.is_empty())
        .map(|y| y.to_string())
}

/// Ratings are presented with one decimal place.
fn round_rating(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}
