use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::domain::{Chapter, Verse};
use crate::locale::Locale;

/// Verse translations for one locale, index-aligned with the chapter's
/// verses. The sequence may be shorter than the verse count; reads past the
/// end fall back to the locale's placeholder.
#[derive(Debug, Clone, Serialize)]
pub struct TranslationSet {
    pub locale: Locale,
    pub verses: Vec<String>,
}

impl TranslationSet {
    /// A set that marks the whole locale as unavailable.
    pub fn unavailable(locale: Locale, verse_count: usize) -> Self {
        Self {
            locale,
            verses: vec![locale.unavailable_placeholder().to_string(); verse_count],
        }
    }
}

/// Everything the rendering layer needs for one chapter. Built fresh per
/// request, never persisted.
#[derive(Debug, Clone, Serialize)]
pub struct ChapterView {
    pub chapter: Chapter,
    pub verses: Vec<Verse>,
    pub translations: Vec<TranslationSet>,
    /// Empty when the transliteration source was unavailable.
    pub transliteration: Vec<String>,
    pub assembled_at: DateTime<Utc>,
}

impl ChapterView {
    /// The display text for verse `index` in the given locale.
    ///
    /// Arabic resolves to the source-script verse itself; anything missing
    /// resolves to the locale's placeholder, so rendering never indexes out
    /// of range.
    pub fn translation_for(&self, locale: Locale, index: usize) -> &str {
        if locale == Locale::Ar {
            return self
                .verses
                .get(index)
                .map(|v| v.text.as_str())
                .unwrap_or_else(|| locale.unavailable_placeholder());
        }

        self.translations
            .iter()
            .find(|set| set.locale == locale)
            .and_then(|set| set.verses.get(index))
            .map(String::as_str)
            .unwrap_or_else(|| locale.unavailable_placeholder())
    }

    pub fn transliteration_for(&self, index: usize) -> &str {
        self.transliteration
            .get(index)
            .map(String::as_str)
            .unwrap_or("Transliteration not available")
    }

    /// Shareable link to one verse, carrying the reader's language.
    pub fn share_url(&self, base_url: &str, verse_position: u32, locale: Locale) -> String {
        format!(
            "{}/surah/{}?ayah={}&lang={}",
            base_url.trim_end_matches('/'),
            self.chapter.slug,
            verse_position,
            locale
        )
    }
}

#[cfg(test)]
mod tests {
    use chrono::Utc;

    use super::*;
    use crate::domain::Revelation;

    fn sample_view() -> ChapterView {
        ChapterView {
            chapter: Chapter {
                number: 67,
                name: "الملك".into(),
                english_name: "Al-Mulk".into(),
                english_name_translation: "The Sovereignty".into(),
                verse_count: 2,
                revelation: Revelation::Meccan,
                slug: "al-mulk".into(),
            },
            verses: vec![
                Verse {
                    number: 5241,
                    number_in_chapter: 1,
                    text: "تبارك الذي بيده الملك".into(),
                    juz: 29,
                    audio: Some("https://cdn.example/5241.mp3".into()),
                },
                Verse {
                    number: 5242,
                    number_in_chapter: 2,
                    text: "الذي خلق الموت والحياة".into(),
                    juz: 29,
                    audio: Some("https://cdn.example/5242.mp3".into()),
                },
            ],
            translations: vec![TranslationSet {
                locale: Locale::En,
                verses: vec!["Blessed is He".into()],
            }],
            transliteration: vec!["Tabaraka allathee".into()],
            assembled_at: Utc::now(),
        }
    }

    #[test]
    fn test_translation_lookup() {
        let view = sample_view();
        assert_eq!(view.translation_for(Locale::En, 0), "Blessed is He");
    }

    #[test]
    fn test_short_translation_falls_back_to_placeholder() {
        let view = sample_view();
        assert_eq!(
            view.translation_for(Locale::En, 1),
            "Translation not available"
        );
    }

    #[test]
    fn test_missing_locale_falls_back_to_placeholder() {
        let view = sample_view();
        assert_eq!(view.translation_for(Locale::Ja, 0), "翻訳がありません");
    }

    #[test]
    fn test_arabic_resolves_to_source_text() {
        let view = sample_view();
        assert_eq!(view.translation_for(Locale::Ar, 1), view.verses[1].text);
    }

    #[test]
    fn test_transliteration_fallback() {
        let view = sample_view();
        assert_eq!(view.transliteration_for(0), "Tabaraka allathee");
        assert_eq!(view.transliteration_for(1), "Transliteration not available");
    }

    #[test]
    fn test_unavailable_set_is_all_placeholders() {
        let set = TranslationSet::unavailable(Locale::Ko, 3);
        assert_eq!(set.verses.len(), 3);
        assert!(set
            .verses
            .iter()
            .all(|v| v == "번역을 사용할 수 없습니다"));
    }

    #[test]
    fn test_share_url() {
        let view = sample_view();
        assert_eq!(
            view.share_url("https://quran.co/", 2, Locale::Ko),
            "https://quran.co/surah/al-mulk?ayah=2&lang=ko"
        );
    }
}
