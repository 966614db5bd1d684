//! Tests for the lookup surface: name tables, nameday entries, and the
//! static/movable registry merge.

use chrono::Weekday;
use heortologio::lookup::{
    month_index, month_name, weekday_name, GREEK_MONTHS_GENITIVE, GREEK_MONTHS_NOMINATIVE,
    PASCHA_NAMES,
};
use heortologio::{
    entries_for_day, find_name, nameday_entries_for_year, DisplayContext, NamedayEntry,
};

// ---------------------------------------------------------------------------
// Name tables
// ---------------------------------------------------------------------------

#[test]
fn month_tables_round_trip() {
    for (i, name) in GREEK_MONTHS_NOMINATIVE.iter().enumerate() {
        assert_eq!(month_index(name), Some(i));
        assert_eq!(month_name(i), Some(*name));
    }
    assert_eq!(month_index("Μάιος"), Some(4));
    assert_eq!(month_index("May"), None);
    assert_eq!(month_name(12), None);
}

#[test]
fn genitive_table_aligns_with_nominative() {
    assert_eq!(GREEK_MONTHS_GENITIVE.len(), GREEK_MONTHS_NOMINATIVE.len());
    assert_eq!(GREEK_MONTHS_GENITIVE[4], "Μαΐου");
}

#[test]
fn weekday_names_are_sunday_first() {
    assert_eq!(weekday_name(Weekday::Sun), "Κυριακή");
    assert_eq!(weekday_name(Weekday::Mon), "Δευτέρα");
    assert_eq!(weekday_name(Weekday::Thu), "Πέμπτη");
    assert_eq!(weekday_name(Weekday::Sat), "Σάββατο");
}

// ---------------------------------------------------------------------------
// Nameday entries for the name-bearing movable feasts
// ---------------------------------------------------------------------------

#[test]
fn three_entries_in_feast_order() {
    let entries = nameday_entries_for_year(2023).unwrap();
    assert_eq!(entries.len(), 3);
    assert_eq!(entries[0].celebrations, vec!["Κυριακή των Βαΐων".to_string()]);
    assert_eq!(entries[1].celebrations, vec!["Κυριακή του Θωμά".to_string()]);
    assert_eq!(entries[2].celebrations, vec!["Πάσχα".to_string()]);
}

#[test]
fn entries_carry_the_computed_dates() {
    // 2023: Easter April 16, Palm Sunday April 9, Thomas Sunday April 23.
    let entries = nameday_entries_for_year(2023).unwrap();
    assert_eq!((entries[0].day, entries[0].month.as_str()), (9, "Απρίλιος"));
    assert_eq!((entries[1].day, entries[1].month.as_str()), (23, "Απρίλιος"));
    assert_eq!((entries[2].day, entries[2].month.as_str()), (16, "Απρίλιος"));
}

#[test]
fn easter_names_keep_registry_order() {
    let entries = nameday_entries_for_year(2024).unwrap();
    let easter_names = &entries[2].names;
    assert_eq!(easter_names.len(), PASCHA_NAMES.len());
    assert_eq!(easter_names[0], "Αναστάσιος");
    assert!(easter_names.contains(&"Λάμπρος".to_string()));
    assert!(easter_names.contains(&"Πασχαλιά".to_string()));
}

#[test]
fn entries_are_stable_for_repeated_calls() {
    assert_eq!(
        nameday_entries_for_year(2026).unwrap(),
        nameday_entries_for_year(2026).unwrap()
    );
}

#[test]
fn out_of_range_year_is_rejected() {
    assert!(nameday_entries_for_year(1850).is_err());
}

// ---------------------------------------------------------------------------
// Static/movable merge
// ---------------------------------------------------------------------------

fn static_registry() -> Vec<NamedayEntry> {
    vec![
        NamedayEntry {
            day: 23,
            month: "Απρίλιος".to_string(),
            names: vec!["Γεώργιος".to_string(), "Γιώργος".to_string()],
            celebrations: vec!["Αγίου Γεωργίου".to_string()],
        },
        NamedayEntry {
            day: 1,
            month: "Ιανουάριος".to_string(),
            names: vec!["Βασίλης".to_string(), "Βασιλική".to_string()],
            celebrations: vec!["Αγίου Βασιλείου".to_string()],
        },
    ]
}

#[test]
fn find_name_is_case_and_accent_insensitive() {
    let ctx = DisplayContext::new(2023);
    let hits = find_name("γιωργος", &static_registry(), &ctx).unwrap();
    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0].day, 23);
}

#[test]
fn find_name_sees_movable_entries_for_the_context_year() {
    let ctx = DisplayContext::new(2023);
    let hits = find_name("Θωμάς", &static_registry(), &ctx).unwrap();
    assert_eq!(hits.len(), 1);
    assert_eq!((hits[0].day, hits[0].month.as_str()), (23, "Απρίλιος"));
}

#[test]
fn hits_gain_the_movable_feast_of_their_date() {
    // April 23, 2023 is Thomas Sunday, so the static Γεώργιος entry is
    // augmented with the movable observance of that date.
    let ctx = DisplayContext::new(2023);
    let hits = find_name("Γεώργιος", &static_registry(), &ctx).unwrap();
    assert_eq!(hits.len(), 1);
    assert!(hits[0].celebrations.iter().any(|c| c == "Κυριακή του Θωμά"));
    // The entry's own static celebration is still there, first.
    assert_eq!(hits[0].celebrations[0], "Αγίου Γεωργίου");
}

#[test]
fn find_name_with_empty_query_returns_nothing() {
    let ctx = DisplayContext::new(2023);
    assert!(find_name("   ", &static_registry(), &ctx).unwrap().is_empty());
}

#[test]
fn entries_for_day_merges_both_sources() {
    // April (index 3) 23, 2023: the static Γεώργιος entry plus the movable
    // Thomas Sunday entry.
    let ctx = DisplayContext::new(2023);
    let hits = entries_for_day(&static_registry(), &ctx, 3, 23).unwrap();
    assert_eq!(hits.len(), 2);

    // A day with neither source yields an empty list, not an error.
    let hits = entries_for_day(&static_registry(), &ctx, 9, 14).unwrap();
    assert!(hits.is_empty());
}

#[test]
fn merge_respects_the_selected_year() {
    // In 2024 Thomas Sunday moves to May 12; April 23 keeps only the
    // static entry.
    let ctx = DisplayContext::new(2024);
    let hits = entries_for_day(&static_registry(), &ctx, 3, 23).unwrap();
    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0].names[0], "Γεώργιος");
}
