//! Static genre and tone keyword tables.
//!
//! Declaration order is load-bearing: classification breaks score ties in
//! favor of the earliest-declared category, so reordering these tables
//! changes observable output.

/// Genre awarded when no keyword matches at all.
pub const DEFAULT_GENRE: &str = "Drama";

/// Tone awarded when no keyword matches at all.
pub const DEFAULT_TONE: &str = "Neutral";

/// Ordered genre table. Keywords are lowercase; matching is done against a
/// lowercased corpus.
pub const GENRE_KEYWORDS: &[(&str, &[&str])] = &[
    (
        "Fantasy",
        &[
            "dragon", "wizard", "magic", "kingdom", "sword", "spell", "throne", "castle",
            "prophecy", "quest", "warrior", "knight", "curse",
        ],
    ),
    (
        "Sci-Fi",
        &[
            "spaceship",
            "galaxy",
            "robot",
            "android",
            "planet",
            "alien",
            "quantum",
            "starship",
            "code",
            "simulation",
            "matrix",
            "program",
            "system",
            "grid",
            "node",
            "cursor",
            "root",
            "access",
            "hack",
            "digital",
            "console",
            "algorithm",
            "terminal",
            "data",
        ],
    ),
    (
        "Horror",
        &[
            "blood",
            "scream",
            "shadow",
            "ghost",
            "dead",
            "terror",
            "nightmare",
            "monster",
            "demon",
            "haunted",
            "dark",
        ],
    ),
    (
        "Romance",
        &[
            "love", "heart", "kiss", "passion", "embrace", "desire", "romance", "beloved",
            "longing", "wedding",
        ],
    ),
    (
        "Thriller",
        &[
            "chase", "escape", "gun", "danger", "suspect", "detective", "crime", "murder", "spy",
            "assassin", "bomb",
        ],
    ),
    (
        "Mystery",
        &[
            "clue",
            "mystery",
            "secret",
            "hidden",
            "disappear",
            "puzzle",
            "riddle",
            "detective",
            "cryptic",
            "investigate",
        ],
    ),
    (
        "Adventure",
        &[
            "journey",
            "explore",
            "treasure",
            "map",
            "expedition",
            "discover",
            "wilderness",
            "mountain",
            "brave",
        ],
    ),
    (
        "Drama",
        &[
            "family",
            "struggle",
            "emotion",
            "conflict",
            "relationship",
            "betrayal",
            "forgive",
            "grief",
            "sacrifice",
            "choice",
        ],
    ),
];

/// Ordered tone table.
pub const TONE_KEYWORDS: &[(&str, &[&str])] = &[
    (
        "Dark",
        &[
            "shadow", "blood", "death", "darkness", "grim", "cold", "despair", "sinister",
        ],
    ),
    (
        "Suspenseful",
        &[
            "suddenly",
            "watched",
            "silence",
            "waiting",
            "nervous",
            "tense",
            "frozen",
            "suspended",
            "stopped",
            "pause",
        ],
    ),
    (
        "Emotional",
        &[
            "tears", "cry", "heart", "pain", "loss", "remember", "lonely", "hope", "scared",
            "scariest",
        ],
    ),
    (
        "Epic",
        &[
            "destiny", "kingdom", "war", "battle", "glory", "legend", "army", "throne", "empire",
        ],
    ),
    (
        "Lighthearted",
        &[
            "smile", "laugh", "bright", "cheerful", "warm", "happy", "playful",
        ],
    ),
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn genre_table_order_is_fixed() {
        let order: Vec<&str> = GENRE_KEYWORDS.iter().map(|&(g, _)| g).collect();
        assert_eq!(
            order,
            [
                "Fantasy",
                "Sci-Fi",
                "Horror",
                "Romance",
                "Thriller",
                "Mystery",
                "Adventure",
                "Drama"
            ]
        );
    }

    #[test]
    fn all_keywords_are_lowercase() {
        for &(_, keywords) in GENRE_KEYWORDS.iter().chain(TONE_KEYWORDS) {
            for kw in keywords {
                assert_eq!(*kw, kw.to_lowercase(), "keyword not lowercase: {kw}");
            }
        }
    }

    #[test]
    fn no_empty_keyword_lists() {
        for &(label, keywords) in GENRE_KEYWORDS.iter().chain(TONE_KEYWORDS) {
            assert!(!keywords.is_empty(), "empty keyword list for {label}");
        }
    }
}
