//! Name canonicalization and Greek↔Latin ("Greeklish") transliteration.
//!
//! [`normalize`] produces the comparison form used by the matcher:
//! lower-cased, trimmed, accent-stripped, with word-final ς folded to σ so
//! grammatical endings compare equal. Both transliterations are total — they
//! never fail, and unmapped characters pass through unchanged.

use unicode_normalization::UnicodeNormalization;

/// Combining diacritical marks dropped after NFD decomposition.
fn is_combining_mark(c: char) -> bool {
    ('\u{0300}'..='\u{036F}').contains(&c)
}

/// Canonicalize a raw person name for comparison.
///
/// Steps, in order: lower-case, trim, NFD decomposition with combining-mark
/// stripping, then a per-word final-sigma fold (ς → σ). Idempotent:
/// `normalize(normalize(s)) == normalize(s)`.
pub fn normalize(raw: &str) -> String {
    let stripped: String = raw
        .to_lowercase()
        .trim()
        .nfd()
        .filter(|c| !is_combining_mark(*c))
        .collect();
    fold_final_sigma(&stripped)
}

/// Fold ς to σ at the end of every word. Applied per word, not only at the
/// end of the whole string, so compound and multi-word names normalize the
/// same way as single names.
fn fold_final_sigma(s: &str) -> String {
    let chars: Vec<char> = s.chars().collect();
    chars
        .iter()
        .enumerate()
        .map(|(i, &c)| {
            let word_final = chars.get(i + 1).map_or(true, |next| next.is_whitespace());
            if c == 'ς' && word_final {
                'σ'
            } else {
                c
            }
        })
        .collect()
}

/// Greek-letter → closest Latin rendering. θ, χ and ψ expand to digraphs;
/// every other letter maps to a single Latin letter.
const GREEK_TO_LATIN: &[(char, &str)] = &[
    ('α', "a"),
    ('β', "v"),
    ('γ', "g"),
    ('δ', "d"),
    ('ε', "e"),
    ('ζ', "z"),
    ('η', "i"),
    ('θ', "th"),
    ('ι', "i"),
    ('κ', "k"),
    ('λ', "l"),
    ('μ', "m"),
    ('ν', "n"),
    ('ξ', "x"),
    ('ο', "o"),
    ('π', "p"),
    ('ρ', "r"),
    ('σ', "s"),
    ('ς', "s"),
    ('τ', "t"),
    ('υ', "y"),
    ('φ', "f"),
    ('χ', "ch"),
    ('ψ', "ps"),
    ('ω', "o"),
];

/// Transliterate Greek text to lower-case Latin. Diacritics are stripped
/// first, so accented input and bare input yield the same output.
pub fn greek_to_latin(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s
        .to_lowercase()
        .nfd()
        .filter(|c| !is_combining_mark(*c))
    {
        match GREEK_TO_LATIN.iter().find(|&&(g, _)| g == c) {
            Some(&(_, latin)) => out.push_str(latin),
            None => out.push(c),
        }
    }
    out
}

/// Ordered Greeklish substitutions, digraphs before single letters — "th"
/// must become θ before "t" and "h" are consumed individually.
const GREEKLISH_SUBSTITUTIONS: &[(&str, &str)] = &[
    ("th", "θ"),
    ("ts", "τς"),
    ("ch", "χ"),
    ("ph", "φ"),
    ("ou", "ου"),
    ("a", "α"),
    ("b", "β"),
    ("g", "γ"),
    ("d", "δ"),
    ("e", "ε"),
    ("z", "ζ"),
    ("h", "η"),
    ("i", "ι"),
    ("k", "κ"),
    ("l", "λ"),
    ("m", "μ"),
    ("n", "ν"),
    ("o", "ο"),
    ("p", "π"),
    ("r", "ρ"),
    ("s", "σ"),
    ("t", "τ"),
    ("u", "υ"),
    ("v", "β"),
    ("w", "ω"),
    ("y", "υ"),
    ("x", "ξ"),
    ("c", "κ"),
    ("f", "φ"),
    ("j", "τζ"),
    ("q", "κ"),
];

/// Best-effort Latin → Greek transliteration of Greeklish input.
///
/// Lossy and ambiguous by design: several Latin spellings can collapse to
/// the same Greek output. Spaces are removed from the result.
pub fn latin_to_greek(s: &str) -> String {
    let mut out = s.to_lowercase();
    for &(latin, greek) in GREEKLISH_SUBSTITUTIONS {
        out = out.replace(latin, greek);
    }
    out.replace(' ', "")
}
