//! Diacritic removal for Romanian text.
//!
//! The replacement table is fixed: five lowercase/uppercase pairs
//! (`ă`, `â`, `ț`, `ș`, `î`) mapped to their plain ASCII letters. Both `ă`
//! and `â` collapse to `a`; removal is lossy on purpose.
//!
//! Every replacement is a single `char`, and no replacement is itself a key
//! of the table, so [`remove_diacritics`] preserves the character count, is
//! idempotent, and does not depend on the order in which entries are applied.
//!
//! # Example
//!
//! ```rust
//! use dediacritic::transform::remove_diacritics;
//!
//! assert_eq!(remove_diacritics("Țară"), "Tara");
//! assert_eq!(remove_diacritics("no-accent-text"), "no-accent-text");
//! ```

use std::borrow::Cow;

/// Ordered `(diacritic, replacement)` pairs.
pub const REPLACEMENTS: [(char, char); 10] = [
    ('ă', 'a'),
    ('Ă', 'A'),
    ('â', 'a'),
    ('Â', 'A'),
    ('ț', 't'),
    ('Ț', 'T'),
    ('ș', 's'),
    ('Ș', 'S'),
    ('î', 'i'),
    ('Î', 'I'),
];

/// Look up the replacement for a single character.
pub fn replacement_for(c: char) -> Option<char> {
    REPLACEMENTS
        .iter()
        .find(|(from, _)| *from == c)
        .map(|(_, to)| *to)
}

/// Returns true if `text` contains at least one character from the table.
pub fn contains_diacritics(text: &str) -> bool {
    text.chars().any(|c| replacement_for(c).is_some())
}

/// Replace every mapped diacritic in `text`, leaving all other characters
/// untouched. Borrows the input when nothing needs replacing.
pub fn strip(text: &str) -> Cow<'_, str> {
    if !contains_diacritics(text) {
        return Cow::Borrowed(text);
    }

    Cow::Owned(
        text.chars()
            .map(|c| replacement_for(c).unwrap_or(c))
            .collect(),
    )
}

/// Owned convenience wrapper over [`strip`].
pub fn remove_diacritics(text: &str) -> String {
    strip(text).into_owned()
}
