//! Turning arbitrary text into names which are safe to use as a file or folder basename.

/// Characters which never survive [`safe_basename`].
///
/// Path separators, shell and Windows reserved punctuation, the extension dot, underscores, and
/// both straight and typographic quotes.
pub const DISALLOWED_CHARACTERS: &[char] = &[
    '.', ',', ';', ':', '*', '?', '|', '_', '<', '>', '\\', '/', '"', '\'', '„', '“', '”', '‘',
    '’', '«', '»',
];

fn is_disallowed(c: char) -> bool {
    DISALLOWED_CHARACTERS.contains(&c)
}

// U+FEFF (byte order mark) is not Unicode whitespace, but stray BOMs act as separators.
fn is_separator(c: char) -> bool {
    c.is_whitespace() || c == '\u{feff}'
}

/// Sanitize `input` for use as a basename.
///
/// Every [disallowed character](DISALLOWED_CHARACTERS) becomes a space, then runs of whitespace
/// (Unicode whitespace and U+FEFF) collapse into a single space and the ends are trimmed.
/// Letters of any script, digits, dashes, brackets, currency symbols and emoji pass through
/// unchanged.
///
/// The result may be empty, e.g. for `"..."`. Applying the function twice gives the same
/// result as applying it once.
///
/// # Examples
///
/// ```rust
/// use diskkit::fs::safe_basename;
///
/// assert_eq!(safe_basename("alpha.bravo"), "alpha bravo");
/// assert_eq!(safe_basename(" \n\t alpha_bravo \t\n "), "alpha bravo");
/// assert_eq!(safe_basename("niño 😀 €"), "niño 😀 €");
/// ```
pub fn safe_basename(input: &str) -> String {
    input
        .split(|c: char| is_separator(c) || is_disallowed(c))
        .filter(|fragment| !fragment.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
}

/// Returns `true` if `input` is non-empty and already in the form [`safe_basename`] produces.
pub fn is_safe_basename(input: &str) -> bool {
    !input.is_empty() && safe_basename(input) == input
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn identical_without_illegal_characters() {
        assert_eq!(safe_basename("alpha"), "alpha");
    }

    #[test]
    fn punctuation_becomes_space() {
        for separator in ['.', ',', ';', ':', '*', '?', '|', '_'] {
            let input = format!("alpha{separator}bravo");
            assert_eq!(safe_basename(&input), "alpha bravo", "input: {input:?}");
        }
    }

    #[test]
    fn angle_brackets() {
        assert_eq!(safe_basename("alpha<bravo>charlie"), "alpha bravo charlie");
    }

    #[test]
    fn slashes() {
        assert_eq!(safe_basename("alpha/bravo\\charlie"), "alpha bravo charlie");
    }

    #[test]
    fn quotes() {
        assert_eq!(
            safe_basename("\"alpha\" 'bravo' “charlie” ‘delta’ «echo» „foxtrot“"),
            "alpha bravo charlie delta echo foxtrot"
        );
    }

    #[test]
    fn whitespace() {
        assert_eq!(safe_basename("alpha\nbravo\tcharlie"), "alpha bravo charlie");
    }

    #[test]
    fn byte_order_mark_is_whitespace() {
        assert_eq!(safe_basename("alpha\u{feff}bravo"), "alpha bravo");
        assert_eq!(safe_basename("\u{feff}alpha \u{feff}"), "alpha");
    }

    #[test]
    fn disallowed_runs_collapse() {
        assert_eq!(safe_basename("alpha \n\t bravo"), "alpha bravo");
        assert_eq!(safe_basename("alpha._. bravo"), "alpha bravo");
    }

    #[test]
    fn disallowed_ends_are_trimmed() {
        assert_eq!(safe_basename(" \n\t alpha bravo \t\n "), "alpha bravo");
        assert_eq!(safe_basename("..alpha.."), "alpha");
    }

    #[test]
    fn dashes_survive() {
        assert_eq!(
            safe_basename("alpha-bravo–charlie—delta"),
            "alpha-bravo–charlie—delta"
        );
    }

    #[test]
    fn brackets_survive() {
        assert_eq!(
            safe_basename("(alpha) [bravo] {charlie}"),
            "(alpha) [bravo] {charlie}"
        );
    }

    #[test]
    fn international_survives() {
        assert_eq!(
            safe_basename("àlpha niño 縦書き 😀 € $"),
            "àlpha niño 縦書き 😀 € $"
        );
    }

    #[test]
    fn only_disallowed_gives_empty() {
        assert_eq!(safe_basename(""), "");
        assert_eq!(safe_basename(" ._ "), "");
    }

    #[test]
    fn idempotent() {
        for input in [
            "alpha.bravo",
            " \n\t alpha bravo \t\n ",
            "a/b\\c<d>e",
            "àlpha niño 😀 €",
            "«quoted» „text“",
        ] {
            let once = safe_basename(input);
            assert_eq!(safe_basename(&once), once, "input: {input:?}");
        }
    }

    #[test]
    fn safe_basename_check() {
        assert!(is_safe_basename("alpha bravo"));
        assert!(!is_safe_basename("alpha.bravo"));
        assert!(!is_safe_basename(" alpha"));
        assert!(!is_safe_basename(""));
    }
}
