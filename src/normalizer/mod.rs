//! Bismillah normalization for source-script verse text.
//!
//! The upstream text carries the invocation phrase as a prefix of each
//! chapter's first verse, with diacritic placement that varies between
//! editions. Detection is therefore tokenized and diacritic-insensitive: the
//! first four whitespace tokens are folded to a bare-letter form and compared
//! against the bare reference phrase.

use std::borrow::Cow;

/// The invocation phrase, token by token, in bare-letter form.
const INVOCATION: [&str; 4] = ["بسم", "الله", "الرحمن", "الرحيم"];

/// Chapters where the invocation is canonical content, never a prefix.
const INVOCATION_EXCEPTIONS: [u16; 2] = [1, 9];

/// Combining and decorative marks dropped before comparison.
///
/// Covers the harakat block (U+064B–U+065F), the superscript alef (U+0670),
/// the Quranic annotation signs (U+06D6–U+06ED), the tatweel (U+0640) and
/// the zero-width controls (U+200C–U+200E).
fn is_ignorable_mark(c: char) -> bool {
    matches!(c,
        '\u{064B}'..='\u{065F}'
        | '\u{0670}'
        | '\u{06D6}'..='\u{06ED}'
        | '\u{0640}'
        | '\u{06BA}'
        | '\u{200C}'..='\u{200E}')
}

/// Fold one token to its bare-letter form: drop ignorable marks and
/// normalize letter variants that editions spell differently.
fn fold_token(token: &str) -> String {
    let mut folded = String::with_capacity(token.len());

    for c in token.chars() {
        if is_ignorable_mark(c) {
            continue;
        }
        match c {
            // Alef wasla to plain alef
            '\u{0671}' => folded.push('\u{0627}'),
            // Alef maksura and Farsi ya to Arabic ya
            '\u{0649}' | '\u{06CC}' => folded.push('\u{064A}'),
            // He variants to plain he
            '\u{06C1}' | '\u{06C2}' => folded.push('\u{0647}'),
            other => folded.push(other),
        }
    }

    folded
}

/// Remove the invocation prefix from a chapter's first verse.
///
/// Chapters 1 and 9 are returned unchanged, as is any verse position other
/// than 1. Otherwise the first four tokens are compared against the
/// reference phrase in bare-letter form; on a full match the remaining
/// tokens are returned joined by single spaces, and on anything else the
/// input is returned as-is. Pure: no state, no I/O.
pub fn strip_invocation(text: &str, chapter_number: u16, verse_position: u32) -> Cow<'_, str> {
    if INVOCATION_EXCEPTIONS.contains(&chapter_number) {
        return Cow::Borrowed(text);
    }
    if verse_position != 1 {
        return Cow::Borrowed(text);
    }

    let tokens: Vec<&str> = text.split_whitespace().collect();
    if tokens.len() < INVOCATION.len() {
        return Cow::Borrowed(text);
    }

    let matches = tokens
        .iter()
        .take(INVOCATION.len())
        .zip(INVOCATION)
        .all(|(token, reference)| fold_token(token) == reference);

    if matches {
        Cow::Owned(tokens[INVOCATION.len()..].join(" "))
    } else {
        Cow::Borrowed(text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // Al-Mulk 67:1 with the invocation prefixed, plain diacritics.
    const MULK_WITH_INVOCATION: &str =
        "بِسْمِ اللَّهِ الرَّحْمَٰنِ الرَّحِيمِ تَبَارَكَ الَّذِي بِيَدِهِ الْمُلْكُ";
    const MULK_BARE: &str = "تَبَارَكَ الَّذِي بِيَدِهِ الْمُلْكُ";

    // Same prefix in Uthmani orthography: alef wasla, small high marks,
    // tatweel-carried superscript alef.
    const UTHMANI_WITH_INVOCATION: &str =
        "بِسۡمِ ٱللَّهِ ٱلرَّحۡمَـٰنِ ٱلرَّحِيمِ تَبَٰرَكَ ٱلَّذِي بِيَدِهِ ٱلۡمُلۡكُ";

    // Al-Fatihah 1:1 is the invocation itself.
    const FATIHAH_FIRST: &str = "بِسْمِ اللَّهِ الرَّحْمَٰنِ الرَّحِيمِ";

    #[test]
    fn test_strips_invocation_prefix() {
        let stripped = strip_invocation(MULK_WITH_INVOCATION, 67, 1);
        assert_eq!(stripped, MULK_BARE);
    }

    #[test]
    fn test_strips_uthmani_variant() {
        let stripped = strip_invocation(UTHMANI_WITH_INVOCATION, 67, 1);
        assert_eq!(stripped, "تَبَٰرَكَ ٱلَّذِي بِيَدِهِ ٱلۡمُلۡكُ");
    }

    #[test]
    fn test_chapter_one_is_untouched() {
        assert_eq!(strip_invocation(FATIHAH_FIRST, 1, 1), FATIHAH_FIRST);
    }

    #[test]
    fn test_chapter_nine_is_untouched() {
        assert_eq!(
            strip_invocation(MULK_WITH_INVOCATION, 9, 1),
            MULK_WITH_INVOCATION
        );
    }

    #[test]
    fn test_exception_chapters_idempotent() {
        let mut text = FATIHAH_FIRST.to_string();
        for _ in 0..5 {
            text = strip_invocation(&text, 1, 1).into_owned();
        }
        assert_eq!(text, FATIHAH_FIRST);
    }

    #[test]
    fn test_later_verses_are_untouched() {
        for chapter in [2, 67, 114] {
            for position in [2, 3, 100] {
                assert_eq!(
                    strip_invocation(MULK_WITH_INVOCATION, chapter, position),
                    MULK_WITH_INVOCATION
                );
            }
        }
    }

    #[test]
    fn test_no_invocation_is_a_no_op() {
        assert_eq!(strip_invocation(MULK_BARE, 67, 1), MULK_BARE);
    }

    #[test]
    fn test_partial_match_is_a_no_op() {
        // First three tokens match, fourth does not.
        let text = "بِسْمِ اللَّهِ الرَّحْمَٰنِ شَيْء";
        assert_eq!(strip_invocation(text, 67, 1), text);
    }

    #[test]
    fn test_short_text_is_a_no_op() {
        let text = "بِسْمِ اللَّهِ";
        assert_eq!(strip_invocation(text, 67, 1), text);
    }

    #[test]
    fn test_remainder_joined_by_single_spaces() {
        let spaced = MULK_WITH_INVOCATION.replace(' ', "  ");
        let stripped = strip_invocation(&spaced, 67, 1);
        assert_eq!(stripped, MULK_BARE);
    }

    #[test]
    fn test_pure_same_input_same_output() {
        let first = strip_invocation(MULK_WITH_INVOCATION, 67, 1).into_owned();
        let second = strip_invocation(MULK_WITH_INVOCATION, 67, 1).into_owned();
        assert_eq!(first, second);
    }

    #[test]
    fn test_fold_token_normalizes_variants() {
        assert_eq!(fold_token("ٱللَّهِ"), "الله");
        assert_eq!(fold_token("الرَّحۡمَـٰنِ"), "الرحمن");
        assert_eq!(fold_token("مُوسَى"), "موسي");
    }
}
