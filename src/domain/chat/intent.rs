//! Intent classification - a deterministic, case-insensitive keyword cascade.
//!
//! Rules are evaluated top-to-bottom and the first match wins: Search, then
//! Navigate, then Recommend, then General. The ordering is load-bearing:
//! "show me a movie" resolves as Search even though it contains the
//! navigation trigger "show me", because the search rule runs first.
//! Classification is total - it never fails and defaults to `General`.

use super::media::MediaType;
use super::navigation::RouteTarget;

/// The classified purpose of a user message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Intent {
    /// Free-text catalog search.
    Search { query: String },
    /// Directive to move the UI to a known route.
    Navigate { target: RouteTarget },
    /// Request for popular titles, optionally flavored by genre/year.
    Recommend {
        genre: Option<String>,
        year: Option<String>,
        media_type: MediaType,
    },
    /// No structured intent - falls through to the generative conversation.
    General,
}

/// Keywords that trigger the search rule, matched as whole words.
const SEARCH_KEYWORDS: &[&str] = &[
    "search", "find", "look for", "get", "watch", "movie", "show", "series",
];

/// Filler tokens stripped from the front of the message to derive the query.
const QUERY_FILLERS: &[&str] = &[
    "how to", "how do i", "can you", "please", "search", "find", "look for", "get", "the", "a",
    "an", "movie", "show", "series", "tv",
];

/// Phrases that trigger the navigation rule.
const NAV_TRIGGERS: &[&str] = &["show me", "go to", "take me"];

/// Phrases that trigger the recommendation rule.
const RECOMMEND_TRIGGERS: &[&str] = &["recommend", "suggest", "what should i watch"];

/// The recognized genre vocabulary, matched as whole words.
const GENRES: &[&str] = &[
    "action",
    "comedy",
    "drama",
    "horror",
    "thriller",
    "romance",
    "sci-fi",
    "fantasy",
    "animation",
];

/// Minimum cleaned-query length for the search rule to emit.
const MIN_QUERY_LEN: usize = 3;

/// Classifies a free-text message into exactly one [`Intent`].
pub fn classify(message: &str) -> Intent {
    let lower = message.to_lowercase();

    // Rule 1: Search. Keywords are probed against the message with navigation
    // trigger phrases blanked out, so "show me genres" does not trip on
    // "show" while "show me a movie" still trips on "movie".
    let probe = strip_nav_triggers(&lower);
    if SEARCH_KEYWORDS.iter().any(|k| contains_word(&probe, k)) {
        let query = extract_query(&lower);
        if query.len() >= MIN_QUERY_LEN {
            return Intent::Search { query };
        }
        // Too short after cleaning: fall through to the later rules.
    }

    // Rule 2: Navigate.
    if NAV_TRIGGERS.iter().any(|t| lower.contains(t)) {
        if let Some(target) = navigation_target(&lower) {
            return Intent::Navigate { target };
        }
    }

    // Rule 3: Recommend.
    if RECOMMEND_TRIGGERS.iter().any(|t| lower.contains(t)) {
        return Intent::Recommend {
            genre: extract_genre(&lower),
            year: extract_year(&lower),
            media_type: extract_media_type(&lower),
        };
    }

    // Rule 4: default.
    Intent::General
}

/// Resolves the navigation target by secondary keyword, tested in fixed
/// order - first match wins.
fn navigation_target(lower: &str) -> Option<RouteTarget> {
    if lower.contains("genre") {
        Some(RouteTarget::Genres)
    } else if lower.contains("best") || lower.contains("top") {
        Some(RouteTarget::TopRated)
    } else if lower.contains("actor") || lower.contains("people") {
        Some(RouteTarget::People)
    } else if lower.contains("movie") {
        Some(RouteTarget::Movies)
    } else if lower.contains("tv") || lower.contains("show") {
        Some(RouteTarget::TvShows)
    } else {
        None
    }
}

/// Derives the search query by repeatedly stripping leading filler tokens.
fn extract_query(lower: &str) -> String {
    let mut rest = lower.trim();
    'strip: loop {
        for filler in QUERY_FILLERS {
            if let Some(stripped) = rest.strip_prefix(filler) {
                // Only strip whole tokens: "android" must not lose "an".
                if stripped.is_empty() || !stripped.starts_with(|c: char| c.is_alphanumeric()) {
                    rest = stripped.trim_start();
                    continue 'strip;
                }
            }
        }
        break;
    }
    rest.trim().to_string()
}

fn extract_genre(lower: &str) -> Option<String> {
    GENRES
        .iter()
        .find(|g| contains_word(lower, g))
        .map(|g| g.to_string())
}

/// Finds the first standalone 4-digit year of the form 19xx or 20xx.
fn extract_year(lower: &str) -> Option<String> {
    let bytes = lower.as_bytes();
    for i in 0..bytes.len().saturating_sub(3) {
        let window = &bytes[i..i + 4];
        if !window.iter().all(|b| b.is_ascii_digit()) {
            continue;
        }
        if !(window.starts_with(b"19") || window.starts_with(b"20")) {
            continue;
        }
        let starts_clean = i == 0 || !bytes[i - 1].is_ascii_digit();
        let ends_clean = i + 4 == bytes.len() || !bytes[i + 4].is_ascii_digit();
        if starts_clean && ends_clean {
            return Some(lower[i..i + 4].to_string());
        }
    }
    None
}

fn extract_media_type(lower: &str) -> MediaType {
    if lower.contains("tv") || lower.contains("show") {
        MediaType::Tv
    } else {
        MediaType::Movie
    }
}

/// Replaces navigation trigger phrases with spaces so their words cannot
/// satisfy the search-keyword probe.
fn strip_nav_triggers(lower: &str) -> String {
    let mut out = lower.to_string();
    for trigger in NAV_TRIGGERS {
        while let Some(pos) = out.find(trigger) {
            out.replace_range(pos..pos + trigger.len(), " ");
        }
    }
    out
}

/// Whole-word (and whole-phrase) containment check.
fn contains_word(haystack: &str, needle: &str) -> bool {
    let bytes = haystack.as_bytes();
    let mut from = 0;
    while let Some(pos) = haystack[from..].find(needle) {
        let start = from + pos;
        let end = start + needle.len();
        let starts_clean = start == 0 || !bytes[start - 1].is_ascii_alphanumeric();
        let ends_clean = end == bytes.len() || !bytes[end].is_ascii_alphanumeric();
        if starts_clean && ends_clean {
            return true;
        }
        from = start + 1;
    }
    false
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn search_keyword_yields_search() {
        match classify("search inception") {
            Intent::Search { query } => assert_eq!(query, "inception"),
            other => panic!("expected Search, got {:?}", other),
        }
    }

    #[test]
    fn search_strips_leading_fillers() {
        match classify("can you please find the matrix") {
            Intent::Search { query } => assert_eq!(query, "matrix"),
            other => panic!("expected Search, got {:?}", other),
        }
    }

    #[test]
    fn search_wins_over_navigation_trigger() {
        // "movie" is a search keyword, so the search rule fires before the
        // "show me" navigation trigger is even considered.
        assert!(matches!(
            classify("show me a movie"),
            Intent::Search { .. }
        ));
    }

    #[test]
    fn plural_movies_does_not_trip_search() {
        // Whole-word matching: "movies" is not the keyword "movie".
        assert!(matches!(
            classify("recommend action movies from 2020"),
            Intent::Recommend { .. }
        ));
    }

    #[test]
    fn short_cleaned_query_falls_through() {
        // "find a" cleans to nothing, so the search rule must not emit.
        assert!(matches!(classify("find a"), Intent::General));
    }

    #[test]
    fn navigate_to_genres() {
        assert_eq!(
            classify("show me genres"),
            Intent::Navigate {
                target: RouteTarget::Genres
            }
        );
    }

    #[test]
    fn navigate_to_top_rated() {
        assert_eq!(
            classify("take me to the best ones"),
            Intent::Navigate {
                target: RouteTarget::TopRated
            }
        );
    }

    #[test]
    fn navigate_to_people() {
        assert_eq!(
            classify("go to actors"),
            Intent::Navigate {
                target: RouteTarget::People
            }
        );
    }

    #[test]
    fn navigate_without_secondary_keyword_falls_through() {
        assert!(matches!(classify("take me home"), Intent::General));
    }

    #[test]
    fn genre_outranks_tv_in_navigation_order() {
        // "show me genres" contains both "show" and "genre"; the secondary
        // keywords are tested in fixed order and genre comes first.
        assert_eq!(
            classify("go to the tv genres"),
            Intent::Navigate {
                target: RouteTarget::Genres
            }
        );
    }

    #[test]
    fn recommend_with_genre_and_year() {
        assert_eq!(
            classify("recommend action movies from 2020"),
            Intent::Recommend {
                genre: Some("action".to_string()),
                year: Some("2020".to_string()),
                media_type: MediaType::Movie,
            }
        );
    }

    #[test]
    fn recommend_tv_when_show_mentioned() {
        assert_eq!(
            classify("suggest a comedy to binge, tv please"),
            Intent::Recommend {
                genre: Some("comedy".to_string()),
                year: None,
                media_type: MediaType::Tv,
            }
        );
    }

    #[test]
    fn recommend_defaults_to_movie() {
        match classify("recommend something scary") {
            Intent::Recommend {
                genre, media_type, ..
            } => {
                assert_eq!(genre, None);
                assert_eq!(media_type, MediaType::Movie);
            }
            other => panic!("expected Recommend, got {:?}", other),
        }
    }

    #[test]
    fn greeting_is_general() {
        assert_eq!(classify("hello there"), Intent::General);
    }

    #[test]
    fn classification_is_case_insensitive() {
        assert!(matches!(
            classify("SEARCH FOR INCEPTION"),
            Intent::Search { .. }
        ));
        assert!(matches!(
            classify("Show Me Genres"),
            Intent::Navigate { .. }
        ));
    }

    #[test]
    fn year_extraction_requires_standalone_digits() {
        assert_eq!(extract_year("from 2020 onwards"), Some("2020".to_string()));
        assert_eq!(extract_year("classics from 1994"), Some("1994".to_string()));
        assert_eq!(extract_year("id 120205 is not a year"), None);
        assert_eq!(extract_year("3021 is too far out"), None);
    }

    #[test]
    fn query_stripping_respects_token_boundaries() {
        // "android" starts with "an" but must survive intact.
        match classify("find android") {
            Intent::Search { query } => assert_eq!(query, "android"),
            other => panic!("expected Search, got {:?}", other),
        }
    }

    proptest! {
        #[test]
        fn classify_is_total(message in ".{0,200}") {
            // Never panics, always produces exactly one variant.
            let _ = classify(&message);
        }

        #[test]
        fn classify_is_deterministic(message in ".{0,80}") {
            prop_assert_eq!(classify(&message), classify(&message));
        }
    }
}
