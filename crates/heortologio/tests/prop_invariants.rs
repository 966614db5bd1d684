//! Property-based tests for the engine's cross-cutting invariants.

use chrono::{Datelike, Duration, Weekday};
use proptest::prelude::*;

use heortologio::feasts::EASTER_OFFSETS;
use heortologio::{names_match, normalize, orthodox_easter, FeastSet, MatchConfig};

// ---------------------------------------------------------------------------
// Strategies
// ---------------------------------------------------------------------------

fn arb_year() -> impl Strategy<Value = i32> {
    1900i32..=2099
}

/// Names as they show up in real contact lists: Greek, accented, Greeklish,
/// compound, or junk.
fn arb_name() -> impl Strategy<Value = String> {
    prop_oneof![
        Just("Μαρία".to_string()),
        Just("Μαρίνα".to_string()),
        Just("Ιωάννης".to_string()),
        Just("Ιωάννη".to_string()),
        Just("Γιάννης".to_string()),
        Just("Θωμάς".to_string()),
        Just("Αναστασία".to_string()),
        Just("Αννα Μαρία".to_string()),
        Just("Thomas".to_string()),
        Just("giannhs".to_string()),
        Just("Anast".to_string()),
        Just("".to_string()),
        Just("   ".to_string()),
        "[a-zA-Z ]{0,12}",
        "\\PC{0,12}",
    ]
}

// ---------------------------------------------------------------------------
// Easter and the feast registry
// ---------------------------------------------------------------------------

proptest! {
    #[test]
    fn easter_always_falls_on_sunday(year in arb_year()) {
        let easter = orthodox_easter(year).unwrap();
        prop_assert_eq!(easter.weekday(), Weekday::Sun);
        prop_assert_eq!(easter.year(), year);
    }

    #[test]
    fn offset_entries_equal_easter_plus_offset(year in arb_year()) {
        let set = FeastSet::for_year(year).unwrap();
        let easter = set.easter();
        for &(name, offset) in EASTER_OFFSETS {
            prop_assert_eq!(set.date_of(name), Some(easter + Duration::days(offset)));
        }
    }

    #[test]
    fn date_lookup_agrees_with_iteration(year in arb_year()) {
        let set = FeastSet::for_year(year).unwrap();
        for feast in set.iter() {
            // Whatever lookup returns for this date must be the first
            // registry entry carrying it.
            let first = set.iter().find(|f| f.date == feast.date).unwrap();
            prop_assert_eq!(set.feast_on(feast.date), Some(first.name));
        }
        // And a date carried by no entry returns nothing.
        let outside = set.easter() + Duration::days(200);
        if set.iter().all(|f| f.date != outside) {
            prop_assert_eq!(set.feast_on(outside), None);
        }
    }

    #[test]
    fn building_twice_yields_identical_sets(year in arb_year()) {
        prop_assert_eq!(
            FeastSet::for_year(year).unwrap(),
            FeastSet::for_year(year).unwrap()
        );
    }
}

// ---------------------------------------------------------------------------
// Normalization and matching
// ---------------------------------------------------------------------------

proptest! {
    #[test]
    fn normalize_is_idempotent(s in "\\PC{0,24}") {
        let once = normalize(&s);
        prop_assert_eq!(normalize(&once), once);
    }

    #[test]
    fn transliterations_never_panic(s in "\\PC{0,24}") {
        let _ = heortologio::greek_to_latin(&s);
        let _ = heortologio::latin_to_greek(&s);
    }

    #[test]
    fn match_is_symmetric(a in arb_name(), b in arb_name()) {
        let cfg = MatchConfig::default();
        prop_assert_eq!(names_match(&a, &b, &cfg), names_match(&b, &a, &cfg));
    }

    #[test]
    fn match_is_reflexive_for_nonempty_names(s in arb_name()) {
        let cfg = MatchConfig::default();
        let normalized = normalize(&s);
        if !normalized.is_empty() {
            prop_assert!(names_match(&normalized, &s, &cfg));
        }
    }

    #[test]
    fn empty_input_never_matches(s in arb_name()) {
        let cfg = MatchConfig::default();
        prop_assert!(!names_match("", &s, &cfg));
        prop_assert!(!names_match(&s, "   ", &cfg));
    }
}
