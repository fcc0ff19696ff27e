//! Integration tests for title identity and identifier extraction.
//!
//! Tests cover:
//! - IMDB id and name/year identity rules
//! - Release identifier extraction for movies and episodes

use subit::models::title::Title;
use subit::{extract_identifiers, is_same_title};

fn series(name: &str, season: u16, episode: u16, episode_name: &str, year: u16) -> Title {
    Title::series(
        name,
        Some(season),
        Some(episode),
        Some(episode_name),
        Some(year),
        None,
        None,
    )
    .unwrap()
}

// ========== IDENTITY TESTS ==========

#[test]
fn test_equal_imdb_id_wins_over_name_and_year() {
    let pairs = [
        ("The Matrix", Some(1999), "Matrix", Some(2003)),
        ("Godzilla", Some(2014), "Gojira", None),
        ("Lost", None, "Something Else", Some(2004)),
    ];

    for (a_name, a_year, b_name, b_year) in pairs {
        let a = Title::movie(a_name, a_year, Some("tt0133093")).unwrap();
        let b = Title::movie(b_name, b_year, Some("tt0133093")).unwrap();
        assert!(is_same_title(&a, &b), "{} vs {}", a, b);
        assert!(is_same_title(&b, &a), "{} vs {}", b, a);
    }
}

#[test]
fn test_differing_years_never_match_without_imdb() {
    let names = ["The Matrix", "Godzilla", "The Big Bang Theory"];
    for name in names {
        let a = Title::movie(name, Some(1998), None).unwrap();
        let b = Title::movie(name, Some(2014), None).unwrap();
        assert!(!is_same_title(&a, &b), "{}", name);
    }
}

#[test]
fn test_differing_imdb_ids_fall_back_to_names() {
    let a = Title::movie("Godzilla", Some(2014), Some("tt0831387")).unwrap();
    let b = Title::movie("Godzilla", Some(2014), Some("tt0120685")).unwrap();
    assert!(is_same_title(&a, &b));
}

#[test]
fn test_disjoint_names_do_not_match() {
    let a = Title::movie("Godzilla", Some(2014), None).unwrap();
    let b = Title::movie("Interstellar", Some(2014), None).unwrap();
    assert!(!is_same_title(&a, &b));
}

#[test]
fn test_identity_is_reflexive() {
    let title = series("The Big Bang Theory", 5, 13, "The Recombination Hypothesis", 2012);
    assert!(is_same_title(&title, &title));
}

// ========== EXTRACTION TESTS ==========

#[test]
fn test_extract_movie_release() {
    let title = Title::movie("The Matrix", Some(1999), None).unwrap();
    assert_eq!(
        extract_identifiers(&title, "The.Matrix.1999.720p.HDDVD.DTS.x264-ESiR"),
        vec!["720p", "hddvd", "dts", "x264", "esir"]
    );
    assert!(extract_identifiers(&title, "The.Matrix.1999").is_empty());
    assert!(extract_identifiers(&title, "The.Matrix").is_empty());
}

#[test]
fn test_extract_episode_releases() {
    let title = series("The Big Bang Theory", 5, 13, "The Recombination Hypothesis", 2012);
    assert_eq!(
        extract_identifiers(&title, "the.big.bang.theory.s05e13.720p.hdtv.x264-orenji"),
        vec!["720p", "hdtv", "x264", "orenji"]
    );

    let title = series("The Big Bang Theory", 1, 4, "The Luminous Fish Effect", 2007);
    assert_eq!(
        extract_identifiers(
            &title,
            "The.Big.Bang.Theory.1x04.The.Luminous.Fish.Effect.720p.HDTV.x264.AC3-CTU"
        ),
        vec!["720p", "hdtv", "x264", "ac3", "ctu"]
    );
}

#[test]
fn test_extract_is_repeatable() {
    let title = Title::movie("Godzilla", Some(2014), None).unwrap();
    let release = "Godzilla.2014.1080p.BluRay.x264-SPARKS";
    assert_eq!(
        extract_identifiers(&title, release),
        extract_identifiers(&title, release)
    );
}
