//! Letter normalization and accent equivalence classes
//!
//! A guess of a plain base letter also uncovers its accented variants, so a
//! player with an unaccented keyboard can still reveal words like "MAÇÃ".

/// Base letters and the variants a single guess of that letter covers.
///
/// The base letter itself is always the first entry of its class.
const EQUIVALENCE_CLASSES: [&[char]; 6] = [
    &['A', 'Ã', 'Á', 'Â'],
    &['E', 'É', 'Ê'],
    &['I', 'Í'],
    &['O', 'Ó', 'Õ', 'Ô'],
    &['U', 'Ú'],
    &['C', 'Ç'],
];

/// Uppercase a single character
///
/// Characters whose uppercase form spans several characters (e.g. `ß`) are
/// returned unchanged so a guess always stays a single character.
///
/// # Examples
/// ```
/// use secret_word::core::letters::to_upper;
///
/// assert_eq!(to_upper('ç'), 'Ç');
/// assert_eq!(to_upper('Q'), 'Q');
/// ```
#[must_use]
pub fn to_upper(c: char) -> char {
    let mut upper = c.to_uppercase();
    match (upper.next(), upper.next()) {
        (Some(single), None) => single,
        _ => c,
    }
}

/// Uppercase decomposition of a word, one entry per displayed tile
#[must_use]
pub fn decompose(word: &str) -> Vec<char> {
    word.chars().map(to_upper).collect()
}

/// Get the equivalence class keyed by an uppercase base letter
///
/// Only the base letters A, E, I, O, U and C key a class; accented
/// variants themselves return `None`.
#[must_use]
pub fn equivalence_class(base: char) -> Option<&'static [char]> {
    EQUIVALENCE_CLASSES
        .iter()
        .find(|class| class[0] == base)
        .copied()
}

/// Fold an uppercase character back to the base letter that reveals it
///
/// Characters outside every class map to themselves.
#[must_use]
pub fn base_letter(c: char) -> char {
    EQUIVALENCE_CLASSES
        .iter()
        .find(|class| class.contains(&c))
        .map_or(c, |class| class[0])
}

/// Whether a character is a word separator that never needs guessing
#[inline]
#[must_use]
pub const fn is_separator(c: char) -> bool {
    c == ' '
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn to_upper_handles_accents() {
        assert_eq!(to_upper('a'), 'A');
        assert_eq!(to_upper('ã'), 'Ã');
        assert_eq!(to_upper('é'), 'É');
        assert_eq!(to_upper('ç'), 'Ç');
        assert_eq!(to_upper('-'), '-');
    }

    #[test]
    fn to_upper_keeps_multi_char_mappings() {
        assert_eq!(to_upper('ß'), 'ß');
    }

    #[test]
    fn decompose_keeps_spaces() {
        assert_eq!(decompose("a b"), vec!['A', ' ', 'B']);
        assert_eq!(decompose("maçã"), vec!['M', 'A', 'Ç', 'Ã']);
    }

    #[test]
    fn classes_keyed_by_base_letters_only() {
        assert_eq!(equivalence_class('A'), Some(&['A', 'Ã', 'Á', 'Â'][..]));
        assert_eq!(equivalence_class('C'), Some(&['C', 'Ç'][..]));
        assert_eq!(equivalence_class('Ç'), None);
        assert_eq!(equivalence_class('Ã'), None);
        assert_eq!(equivalence_class('B'), None);
    }

    #[test]
    fn base_letter_folds_variants() {
        assert_eq!(base_letter('Ã'), 'A');
        assert_eq!(base_letter('Ô'), 'O');
        assert_eq!(base_letter('Ç'), 'C');
        assert_eq!(base_letter('U'), 'U');
        assert_eq!(base_letter('M'), 'M');
        // Not covered by any class
        assert_eq!(base_letter('À'), 'À');
    }

    #[test]
    fn separator_is_space_only() {
        assert!(is_separator(' '));
        assert!(!is_separator('-'));
    }
}
