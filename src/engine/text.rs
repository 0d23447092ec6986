//! Text folding used to compare typed answers with expected ones.

/// Accented letters and the base Latin letter they fold to.
static DIACRITICS: &[(char, char)] = &[
    ('ą', 'a'),
    ('ć', 'c'),
    ('ę', 'e'),
    ('ł', 'l'),
    ('ń', 'n'),
    ('ó', 'o'),
    ('ś', 's'),
    ('ź', 'z'),
    ('ż', 'z'),
];

/// Lower-case `text` and fold Polish diacritics to their base letters.
///
/// Whitespace is left untouched. The result is only meant for equality
/// checks and is idempotent: `normalize(&normalize(s)) == normalize(s)`.
pub fn normalize(text: &str) -> String {
    let mut folded = String::with_capacity(text.len());
    for c in text.chars().flat_map(char::to_lowercase) {
        folded.push(strip_diacritic(c));
    }
    folded
}

fn strip_diacritic(c: char) -> char {
    DIACRITICS
        .iter()
        .find(|(accented, _)| *accented == c)
        .map_or(c, |(_, base)| *base)
}

/// True if `input` and `expected` fold to the same text.
pub fn answers_match(input: &str, expected: &str) -> bool {
    normalize(input) == normalize(expected)
}
