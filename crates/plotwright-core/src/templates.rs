//! Canned per-genre direction templates.
//!
//! Each dedicated genre carries three pre-written directions; genres without
//! a dedicated set fall back to the generic default. `{entity}` is replaced
//! with the leading extracted entity at synthesis time.

use crate::types::Direction;

/// Placeholder substituted with the leading entity name.
pub const ENTITY_PLACEHOLDER: &str = "{entity}";

/// Entity used when extraction found nothing.
pub const DEFAULT_ENTITY: &str = "The protagonist";

type TemplateSet = [(&'static str, &'static str); 3];

const FANTASY: TemplateSet = [
    (
        "The Chosen Path",
        "{entity} discovers the prophecy was meant for someone else entirely",
    ),
    (
        "The Betrayer's Path",
        "A trusted ally reveals a secret allegiance to the enemy forces",
    ),
    (
        "The Forbidden Path",
        "{entity} unlocks ancient magic at the cost of their memories",
    ),
];

const SCI_FI: TemplateSet = [
    (
        "The Override Path",
        "{entity} discovers they can rewrite the system's core protocols",
    ),
    (
        "The Signal Path",
        "A mysterious transmission reveals another consciousness within the network",
    ),
    (
        "The Glitch Path",
        "{entity} realizes the simulation has been running their decisions in reverse",
    ),
];

const HORROR: TemplateSet = [
    (
        "The Descent",
        "{entity} follows the sounds deeper into the darkness against all reason",
    ),
    (
        "The Mirror's Truth",
        "The reflection begins moving independently, revealing a darker version",
    ),
    (
        "The Escape",
        "{entity} finds a way out only to realize they were never truly trapped",
    ),
];

const THRILLER: TemplateSet = [
    (
        "The Hunter's Path",
        "{entity} turns from prey to predator, setting a trap for the pursuer",
    ),
    (
        "The Insider",
        "The real threat is revealed to come from within their own circle",
    ),
    (
        "The Clock Path",
        "A countdown begins that forces an impossible choice between two lives",
    ),
];

const DRAMA: TemplateSet = [
    (
        "The Confession",
        "{entity} finally speaks the truth that has been weighing on them",
    ),
    (
        "The Departure",
        "Someone leaves without warning, forcing everyone to confront what was unsaid",
    ),
    (
        "The Return",
        "A figure from the past reappears, reopening old wounds and old hopes",
    ),
];

const DEFAULT: TemplateSet = [
    (
        "The Revelation",
        "{entity} uncovers a truth that changes everything they believed",
    ),
    (
        "The Alliance",
        "An unlikely partnership forms to face a shared and growing threat",
    ),
    (
        "The Sacrifice",
        "{entity} must give up something precious to protect what matters most",
    ),
];

/// Build the three directions for a genre, substituting the entity name.
pub fn directions_for(genre: &str, entity: &str) -> Vec<Direction> {
    let set = match genre {
        "Fantasy" => &FANTASY,
        "Sci-Fi" => &SCI_FI,
        "Horror" => &HORROR,
        "Thriller" => &THRILLER,
        "Drama" => &DRAMA,
        _ => &DEFAULT,
    };

    set.iter()
        .map(|&(name, description)| {
            Direction::new(name, description.replace(ENTITY_PLACEHOLDER, entity))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_set_has_three_directions() {
        for genre in [
            "Fantasy",
            "Sci-Fi",
            "Horror",
            "Romance",
            "Thriller",
            "Mystery",
            "Adventure",
            "Drama",
        ] {
            assert_eq!(directions_for(genre, "Kara").len(), 3, "genre {genre}");
        }
    }

    #[test]
    fn entity_is_substituted() {
        let directions = directions_for("Fantasy", "Kara");
        assert_eq!(directions[0].name, "The Chosen Path");
        assert!(directions[0].description.starts_with("Kara discovers"));
        assert!(directions[2].description.starts_with("Kara unlocks"));
    }

    #[test]
    fn genres_without_dedicated_set_use_default() {
        let romance = directions_for("Romance", "Elena");
        assert_eq!(romance[0].name, "The Revelation");
        assert!(romance[0].description.starts_with("Elena uncovers"));
    }

    #[test]
    fn no_placeholder_leaks_into_output() {
        for genre in ["Fantasy", "Sci-Fi", "Horror", "Thriller", "Drama", "Mystery"] {
            for direction in directions_for(genre, DEFAULT_ENTITY) {
                assert!(!direction.description.contains(ENTITY_PLACEHOLDER));
            }
        }
    }
}
