//! Slug normalization for route segments.
//!
//! Room and plan names coming from the CMS are free text; the front-end
//! addresses them by a normalized slug both when building links and when
//! resolving a route segment back to the entity it came from.

use unicode_normalization::UnicodeNormalization;

// ---------------------------------------------------------------------------
// Normalization
// ---------------------------------------------------------------------------

/// Generate a URL-safe slug from a display name.
///
/// Lowercases, strips diacritics (NFD decomposition, then combining marks in
/// U+0300..U+036F are dropped), turns whitespace into hyphens, removes every
/// character that is not an ASCII word character or a hyphen, collapses
/// consecutive hyphens, and trims leading/trailing hyphens.
///
/// The result only contains `[a-z0-9_-]`, so normalizing a slug again
/// returns it unchanged.
///
/// ```
/// use plinth_core::slug::slugify;
///
/// assert_eq!(slugify("Main Hall"), "main-hall");
/// assert_eq!(slugify("Cañón"), "canon");
/// ```
pub fn slugify(text: &str) -> String {
    let folded: String = text
        .to_lowercase()
        .nfd()
        .filter(|c| !is_combining_accent(*c))
        .collect();

    let mut result = String::with_capacity(folded.len());
    let mut prev_hyphen = false;
    for c in folded.trim().chars() {
        if c.is_whitespace() || c == '-' {
            if !prev_hyphen {
                result.push('-');
            }
            prev_hyphen = true;
        } else if is_word_char(c) {
            result.push(c);
            prev_hyphen = false;
        }
    }

    result.trim_matches('-').to_string()
}

/// Combining diacritical marks block (U+0300..=U+036F).
fn is_combining_accent(c: char) -> bool {
    ('\u{0300}'..='\u{036f}').contains(&c)
}

fn is_word_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_'
}

// ---------------------------------------------------------------------------
// Resolution
// ---------------------------------------------------------------------------

/// Find the first item whose normalized name equals `slug`.
///
/// Returns the item's position together with the item. When two names
/// normalize to the same slug the earlier one wins.
pub fn find_by_slug<'a, T, F>(items: &'a [T], name_of: F, slug: &str) -> Option<(usize, &'a T)>
where
    F: Fn(&T) -> &str,
{
    items
        .iter()
        .enumerate()
        .find(|(_, item)| slugify(name_of(item)) == slug)
}

#[cfg(test)]
mod tests {
    use super::*;

    // -- slugify -------------------------------------------------------------

    #[test]
    fn slug_basic_name() {
        assert_eq!(slugify("Main Hall"), "main-hall");
    }

    #[test]
    fn slug_strips_diacritics() {
        assert_eq!(slugify("Cañón"), "canon");
        assert_eq!(slugify("Baño Principal"), "bano-principal");
        assert_eq!(slugify("Über Café"), "uber-cafe");
    }

    #[test]
    fn slug_removes_non_word_characters() {
        assert_eq!(slugify("Kitchen & Dining (v2)"), "kitchen-dining-v2");
        assert_eq!(slugify("a&b"), "ab");
    }

    #[test]
    fn slug_collapses_whitespace_and_hyphens() {
        assert_eq!(slugify("Slow   Walk"), "slow-walk");
        assert_eq!(slugify("foo---bar"), "foo-bar");
        assert_eq!(slugify("a - b"), "a-b");
    }

    #[test]
    fn slug_trims_leading_trailing_hyphens() {
        assert_eq!(slugify("  --hello--  "), "hello");
        assert_eq!(slugify("!Terrace"), "terrace");
    }

    #[test]
    fn slug_keeps_underscores_and_digits() {
        assert_eq!(slugify("Room_2 B"), "room_2-b");
    }

    #[test]
    fn slug_of_empty_and_symbol_only_input_is_empty() {
        assert_eq!(slugify(""), "");
        assert_eq!(slugify("  ¡¿!?  "), "");
    }

    #[test]
    fn slug_is_idempotent() {
        let samples = [
            "Main Hall",
            "Cañón",
            "  --Ático  Norte--",
            "Kitchen & Dining (v2)",
            "Ελληνικά",
            "Straße 12",
            "snake_case name",
            "",
        ];
        for s in samples {
            let once = slugify(s);
            assert_eq!(slugify(&once), once, "not idempotent for {s:?}");
        }
    }

    // -- find_by_slug --------------------------------------------------------

    #[test]
    fn find_matches_normalized_name() {
        let names = ["Living Room", "Main Hall", "Baño"];
        let found = find_by_slug(&names, |n| *n, "bano");
        assert_eq!(found, Some((2, &"Baño")));
    }

    #[test]
    fn find_returns_none_for_unknown_slug() {
        let names = ["Living Room"];
        assert!(find_by_slug(&names, |n| *n, "kitchen").is_none());
    }

    #[test]
    fn find_prefers_first_on_collision() {
        let names = ["Main Hall", "main-hall"];
        let (index, _) = find_by_slug(&names, |n| *n, "main-hall").unwrap();
        assert_eq!(index, 0);
    }
}
