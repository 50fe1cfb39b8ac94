//! Suggestion-chip generation.
//!
//! The heuristic inspects the response text, not the user message: whatever
//! we just talked about is what the user is most likely to follow up on.

use super::response::MAX_SUGGESTIONS;

/// Fallback chips offered when the response text matches no keyword family.
const DEFAULT_SUGGESTIONS: [&str; 3] = [
    "Search for a movie",
    "Get a recommendation",
    "Browse genres",
];

/// Produces up to [`MAX_SUGGESTIONS`] follow-up prompts for a response.
///
/// Pure function: the same `(user_message, response_text)` pair always
/// yields the same ordered list. The user message is part of the contract
/// but currently unused by the heuristic.
pub fn suggest(_user_message: &str, response_text: &str) -> Vec<String> {
    let lower = response_text.to_lowercase();
    let mut chips = Vec::new();

    if lower.contains("movie") {
        chips.push("Find similar movies".to_string());
    }
    if lower.contains("tv") || lower.contains("show") {
        chips.push("Show me popular TV shows".to_string());
    }
    if lower.contains("actor") || lower.contains("actress") {
        chips.push("Search for an actor".to_string());
    }

    if chips.is_empty() {
        chips = DEFAULT_SUGGESTIONS.iter().map(|s| s.to_string()).collect();
    }

    // At most 3 families exist today, so this is currently a no-op, but the
    // cap is an explicit invariant of the response contract.
    chips.truncate(MAX_SUGGESTIONS);
    chips
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn movie_family_produces_movie_chip() {
        let chips = suggest("anything", "I found a great movie for you");
        assert_eq!(chips, vec!["Find similar movies"]);
    }

    #[test]
    fn families_appear_in_fixed_order() {
        let chips = suggest("", "This movie stars an actor from a hit tv show");
        assert_eq!(
            chips,
            vec![
                "Find similar movies",
                "Show me popular TV shows",
                "Search for an actor",
            ]
        );
    }

    #[test]
    fn no_family_match_returns_defaults() {
        let chips = suggest("hello", "Nice to meet you!");
        assert_eq!(
            chips,
            vec!["Search for a movie", "Get a recommendation", "Browse genres"]
        );
    }

    #[test]
    fn matching_is_case_insensitive() {
        let chips = suggest("", "A MOVIE you might like");
        assert_eq!(chips, vec!["Find similar movies"]);
    }

    proptest! {
        #[test]
        fn never_exceeds_cap(user in ".{0,60}", response in ".{0,200}") {
            prop_assert!(suggest(&user, &response).len() <= MAX_SUGGESTIONS);
        }

        #[test]
        fn is_pure(user in ".{0,40}", response in ".{0,120}") {
            prop_assert_eq!(suggest(&user, &response), suggest(&user, &response));
        }

        #[test]
        fn never_empty(user in ".{0,40}", response in ".{0,120}") {
            prop_assert!(!suggest(&user, &response).is_empty());
        }
    }
}
