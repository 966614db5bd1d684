//! Fuzzy bidirectional Greek name matching.
//!
//! Decides whether two free-text names denote the same given name, tolerating
//! accents, grammatical-case endings, compound names, diminutive prefixes and
//! Greeklish spellings. The length thresholds live in [`MatchConfig`] rather
//! than inline constants.

use serde::{Deserialize, Serialize};

use crate::normalize::{greek_to_latin, latin_to_greek, normalize};

/// Thresholds for the prefix-matching heuristics.
///
/// A prefix only counts as a match when the shorter word is at least this
/// many characters; shorter prefixes collide too easily (Μαρ- is shared by
/// Μαρία and Μαρίνα). The defaults are 4 for nameday matching and 3 for
/// interactive search. The length-4 rule still admits Μαρι- as a common
/// prefix, a known false-positive edge.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MatchConfig {
    /// Minimum prefix length for nameday/contact matching.
    pub nameday_prefix_min: usize,
    /// Minimum prefix length for free-text (Greeklish) search.
    pub search_prefix_min: usize,
}

impl Default for MatchConfig {
    fn default() -> Self {
        MatchConfig {
            nameday_prefix_min: 4,
            search_prefix_min: 3,
        }
    }
}

/// The matching-layer view of a device contact. How the fields get here
/// (permission flows, platform APIs) is the caller's concern.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactCard {
    #[serde(default)]
    pub given_name: String,
    #[serde(default)]
    pub family_name: String,
    #[serde(default)]
    pub display_name: String,
}

/// Drop one trailing sigma (either form) so grammatical endings compare
/// equal: Ιωάννης / Ιωάννη.
fn strip_ending(word: &str) -> &str {
    word.strip_suffix('σ')
        .or_else(|| word.strip_suffix('ς'))
        .unwrap_or(word)
}

fn char_len(s: &str) -> usize {
    s.chars().count()
}

/// Prefix rule shared by all word-level strategies: one word is a prefix of
/// the other and the shorter has at least `prefix_min` characters.
fn prefix_match(a: &str, b: &str, prefix_min: usize) -> bool {
    let (shorter, longer) = if char_len(a) <= char_len(b) {
        (a, b)
    } else {
        (b, a)
    };
    char_len(shorter) >= prefix_min && longer.starts_with(shorter)
}

/// Word pair comparison on normalized Greek words: equality, ending-folded
/// equality, or the prefix rule.
fn words_match(a: &str, b: &str, prefix_min: usize) -> bool {
    a == b || strip_ending(a) == strip_ending(b) || prefix_match(a, b, prefix_min)
}

/// Do two name strings denote the same given name?
///
/// Short-circuits through, in order: normalized equality, ending-folded
/// equality, word-level comparison (equality / ending fold / prefix rule),
/// whole-string Greek→Latin transliteration equality, and word-level
/// comparison of the transliterated forms. Empty or whitespace-only input
/// on either side is never a match.
///
/// Symmetric: both argument orders yield the same verdict.
pub fn names_match(candidate: &str, registry_name: &str, config: &MatchConfig) -> bool {
    let cand = normalize(candidate);
    let reg = normalize(registry_name);
    if cand.is_empty() || reg.is_empty() {
        return false;
    }

    if cand == reg {
        return true;
    }

    if strip_ending(&cand) == strip_ending(&reg) {
        return true;
    }

    let cand_words: Vec<&str> = cand.split_whitespace().collect();
    let reg_words: Vec<&str> = reg.split_whitespace().collect();
    if cand_words.iter().any(|&c| {
        reg_words
            .iter()
            .any(|&r| words_match(c, r, config.nameday_prefix_min))
    }) {
        return true;
    }

    // Transliteration strategies run on the raw inputs; greek_to_latin
    // strips accents and lower-cases on its own.
    let cand_latin = greek_to_latin(candidate);
    let reg_latin = greek_to_latin(registry_name);
    if remove_whitespace(&cand_latin) == remove_whitespace(&reg_latin) {
        return true;
    }

    cand_latin.split_whitespace().any(|c| {
        reg_latin
            .split_whitespace()
            .any(|r| c == r || prefix_match(c, r, config.nameday_prefix_min))
    })
}

fn remove_whitespace(s: &str) -> String {
    s.chars().filter(|c| !c.is_whitespace()).collect()
}

/// Contacts whose given name matches any of the day's nameday names.
pub fn contacts_for_nameday<'a>(
    names: &[String],
    contacts: &'a [ContactCard],
    config: &MatchConfig,
) -> Vec<&'a ContactCard> {
    if names.is_empty() {
        return Vec::new();
    }
    contacts
        .iter()
        .filter(|contact| {
            names
                .iter()
                .any(|name| names_match(&contact.given_name, name, config))
        })
        .collect()
}

/// Free-text contact search tolerating Greeklish input.
///
/// The query is transliterated to Greek and normalized, then compared
/// against each contact's given, family and display names: exact field
/// equality first, then word-level equality or the prefix rule at the
/// (lower) search threshold.
pub fn search_contacts<'a>(
    query: &str,
    contacts: &'a [ContactCard],
    config: &MatchConfig,
) -> Vec<&'a ContactCard> {
    if query.trim().is_empty() {
        return Vec::new();
    }

    let normalized_query = normalize(&latin_to_greek(query));
    if normalized_query.is_empty() {
        return Vec::new();
    }

    contacts
        .iter()
        .filter(|contact| {
            let given = normalize(&contact.given_name);
            let family = normalize(&contact.family_name);
            let display = normalize(&contact.display_name);

            if given == normalized_query || family == normalized_query || display == normalized_query
            {
                return true;
            }

            let name_words: Vec<&str> = given
                .split_whitespace()
                .chain(family.split_whitespace())
                .collect();

            normalized_query.split_whitespace().any(|q| {
                name_words
                    .iter()
                    .any(|&n| q == n || prefix_match(q, n, config.search_prefix_min))
            })
        })
        .collect()
}
