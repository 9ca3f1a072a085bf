//! Assembles one chapter's view model from the upstream sources.
//!
//! Four fetches run concurrently: source-script verses, the default English
//! translation, recitation audio, and transliteration. The first three are
//! required and abort the assembly on failure; transliteration degrades to
//! an empty sequence. Additional locale translations are fetched afterwards,
//! each independently, and degrade per-locale to placeholder text.

use std::sync::Arc;

use chrono::Utc;
use html_escape::decode_html_entities;

use crate::api::{
    ChapterVersesPayload, QuranApi, AUDIO_EDITION, DEFAULT_TRANSLATION_EDITION,
    TRANSLITERATION_EDITION,
};
use crate::app::{MushafError, Result};
use crate::domain::{ChapterView, TranslationSet, Verse};
use crate::locale::Locale;
use crate::normalizer::strip_invocation;
use crate::resolver::resolve_chapter;

pub struct ChapterAssembler {
    api: Arc<QuranApi>,
}

impl ChapterAssembler {
    pub fn new(api: Arc<QuranApi>) -> Self {
        Self { api }
    }

    pub async fn assemble(
        &self,
        identifier: &str,
        extra_locales: &[Locale],
    ) -> Result<ChapterView> {
        let summary = resolve_chapter(&self.api, identifier).await?;
        let number = summary.number;

        let (arabic, translation, audio, transliteration) = tokio::join!(
            self.api.chapter_verses(number),
            self.api.chapter_edition(number, DEFAULT_TRANSLATION_EDITION),
            self.api.chapter_edition(number, AUDIO_EDITION),
            self.api.chapter_edition(number, TRANSLITERATION_EDITION),
        );

        let arabic = arabic.map_err(|e| MushafError::required("arabic-text", e))?;
        let translation = translation.map_err(|e| MushafError::required("translation", e))?;
        let audio = audio.map_err(|e| MushafError::required("audio", e))?;

        let transliteration = match transliteration {
            Ok(payload) => decode_texts(&payload),
            Err(e) => {
                tracing::warn!("Transliteration unavailable for chapter {}: {}", number, e);
                Vec::new()
            }
        };

        let chapter = arabic.chapter();
        let verses = merge_verses(&arabic, &audio)?;

        let mut translations = vec![TranslationSet {
            locale: Locale::En,
            verses: decode_texts(&translation),
        }];
        translations.extend(
            self.fetch_extra_locales(number, verses.len(), extra_locales)
                .await,
        );

        Ok(ChapterView {
            chapter,
            verses,
            translations,
            transliteration,
            assembled_at: Utc::now(),
        })
    }

    async fn fetch_extra_locales(
        &self,
        number: u16,
        verse_count: usize,
        locales: &[Locale],
    ) -> Vec<TranslationSet> {
        let fetches = locales
            .iter()
            .copied()
            // English is already the default set; Arabic is the source text.
            .filter(|l| !matches!(l, Locale::En | Locale::Ar))
            .filter_map(|l| l.edition().map(|edition| (l, edition)))
            .map(|(locale, edition)| async move {
                (locale, self.api.chapter_edition(number, edition).await)
            });

        futures::future::join_all(fetches)
            .await
            .into_iter()
            .map(|(locale, result)| match result {
                Ok(payload) => TranslationSet {
                    locale,
                    verses: decode_texts(&payload),
                },
                Err(e) => {
                    tracing::warn!("Translation {} unavailable for chapter {}: {}", locale, number, e);
                    TranslationSet::unavailable(locale, verse_count)
                }
            })
            .collect()
    }
}

/// Positional join of the source-script and audio sequences.
///
/// The upstream is assumed to return both in the same order; the lengths are
/// checked so a desynchronized upstream fails loudly instead of misaligning
/// audio against text.
fn merge_verses(arabic: &ChapterVersesPayload, audio: &ChapterVersesPayload) -> Result<Vec<Verse>> {
    if arabic.ayahs.len() != audio.ayahs.len() {
        return Err(MushafError::Malformed(format!(
            "chapter {}: {} text verses but {} audio verses",
            arabic.number,
            arabic.ayahs.len(),
            audio.ayahs.len()
        )));
    }

    Ok(arabic
        .ayahs
        .iter()
        .zip(&audio.ayahs)
        .map(|(verse, audio_verse)| Verse {
            number: verse.number,
            number_in_chapter: verse.number_in_surah,
            text: strip_invocation(&verse.text, arabic.number, verse.number_in_surah).into_owned(),
            juz: verse.juz,
            audio: audio_verse.audio.clone(),
        })
        .collect())
}

fn decode_texts(payload: &ChapterVersesPayload) -> Vec<String> {
    payload
        .ayahs
        .iter()
        .map(|a| decode_html_entities(&a.text).to_string())
        .collect()
}
