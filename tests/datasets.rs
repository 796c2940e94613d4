// Integration tests for logo dataset invariants.
// These tests are native-friendly and avoid wasm/browser APIs.

use std::collections::HashSet;

use logo_guess::{Difficulty, LOGOS, LogoDeck};

#[test]
fn logo_names_are_unique_and_nonempty() {
    let mut seen = HashSet::new();
    for logo in LOGOS {
        assert!(!logo.name.is_empty(), "empty logo name");
        assert!(seen.insert(logo.name), "duplicate logo name '{}'", logo.name);
    }
    assert_eq!(seen.len(), 8);
}

#[test]
fn logo_urls_are_https_svgs() {
    for logo in LOGOS {
        assert!(
            logo.image_url.starts_with("https://upload.wikimedia.org/"),
            "unexpected host for '{}': {}",
            logo.name,
            logo.image_url
        );
        assert!(logo.image_url.ends_with(".svg"), "'{}' is not an svg", logo.name);
        assert!(!logo.category.is_empty(), "missing category for '{}'", logo.name);
    }
}

#[test]
fn every_difficulty_has_a_logo() {
    for d in Difficulty::ALL {
        let count = LOGOS.iter().filter(|l| l.difficulty == d).count();
        assert!(count > 0, "no logos for {}", d);
    }
    assert!(LogoDeck::standard().is_ok());
}

#[test]
fn difficulty_pairing_matches_catalogue() {
    let names_for = |d: Difficulty| -> Vec<&str> {
        LOGOS.iter().filter(|l| l.difficulty == d).map(|l| l.name).collect()
    };
    assert_eq!(names_for(Difficulty::Easy), vec!["React", "Python"]);
    assert_eq!(names_for(Difficulty::Medium), vec!["TypeScript", "Node.js", "Angular"]);
    assert_eq!(names_for(Difficulty::Hard), vec!["Go", "Rust", "Java"]);
}
